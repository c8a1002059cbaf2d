//! Wire shapes of the HTTP API. Field names follow the public camelCase contract.

use crate::model::{Dimensions, Item, ParcelCreate};
use crate::parcel_actor::{ParcelState, StatusReport, TrackingReport};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ItemInfo {
    pub name: String,
    pub value: u64,
}

#[derive(Debug, Deserialize)]
pub struct ParcelCreationInfo {
    pub from: String,
    pub to: String,
    pub length: u32,
    pub width: u32,
    pub height: u32,
    pub weight: f64,
    pub items: Vec<ItemInfo>,
}

impl From<ParcelCreationInfo> for ParcelCreate {
    fn from(info: ParcelCreationInfo) -> Self {
        Self {
            origin: info.from,
            destination: info.to,
            dimensions: Dimensions {
                width: info.width,
                height: info.height,
                length: info.length,
            },
            weight: info.weight,
            items: info
                .items
                .into_iter()
                .map(|item| Item {
                    name: item.name,
                    value: item.value,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryInfo {
    pub cost: u64,
    pub time: u64,
    pub pickup_id_hash: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PickupInput {
    pub pickup_id_hash: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackQuery {
    pub pickup_id_hash: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub timestamp: i64,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParcelStatusHistory {
    pub total_stops: usize,
    pub history: Vec<HistoryEntry>,
}

impl From<TrackingReport> for ParcelStatusHistory {
    fn from(report: TrackingReport) -> Self {
        Self {
            total_stops: report.total_stops,
            history: report
                .history
                .into_iter()
                .map(|entry| HistoryEntry {
                    timestamp: entry.timestamp,
                    message: entry.message,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParcelList {
    pub parcel_ids: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TakeParcelInput {
    pub leg_id: String,
}

#[derive(Debug, Deserialize)]
pub struct PutParcelInput {
    pub location: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParcelStatus {
    pub state: ParcelState,
    pub next_leg: Option<String>,
    pub legs_remaining: usize,
}

impl From<StatusReport> for ParcelStatus {
    fn from(report: StatusReport) -> Self {
        Self {
            state: report.state,
            next_leg: report.next_leg.map(|leg| leg.0),
            legs_remaining: report.legs_remaining,
        }
    }
}
