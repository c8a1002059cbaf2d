//! Views derived from a parcel's history.
//!
//! Nothing here is stored: state, stop count and index membership are recomputed from
//! `history` and `next_leg_index` whenever they are needed.

use crate::model::{EventKind, LegId, Parcel};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParcelState {
    AwaitingDeparture,
    InTransit,
    Delivered,
    PickedUp,
}

/// One rendered history entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub timestamp: i64,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackingReport {
    /// Number of arrivals recorded so far.
    pub total_stops: usize,
    pub history: Vec<HistoryEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    pub state: ParcelState,
    pub next_leg: Option<LegId>,
    pub legs_remaining: usize,
}

/// Current state, read off the latest event.
pub fn derive_state(parcel: &Parcel) -> ParcelState {
    match parcel.last_event().map(|event| &event.kind) {
        Some(EventKind::Departed(_)) => ParcelState::InTransit,
        Some(EventKind::PickedUp) => ParcelState::PickedUp,
        Some(EventKind::Arrived(_)) if parcel.next_leg().is_none() => ParcelState::Delivered,
        Some(EventKind::Arrived(_)) | Some(EventKind::Registered { .. }) | None => {
            ParcelState::AwaitingDeparture
        }
    }
}

/// The leg a parcel is waiting at, if any.
///
/// A parcel waits for `route.legs[next_leg_index]` unless it has departed and not arrived
/// since. Pickups neither add nor remove it.
pub fn awaiting_leg(parcel: &Parcel) -> Option<LegId> {
    let next = parcel.next_leg()?;
    let in_transit = parcel
        .history
        .iter()
        .rev()
        .find(|event| !matches!(event.kind, EventKind::PickedUp))
        .is_some_and(|event| matches!(event.kind, EventKind::Departed(_)));
    (!in_transit).then(|| next.clone())
}

pub fn tracking_report(parcel: &Parcel) -> TrackingReport {
    let total_stops = parcel
        .history
        .iter()
        .filter(|event| matches!(event.kind, EventKind::Arrived(_)))
        .count();
    let history = parcel
        .history
        .iter()
        .map(|event| HistoryEntry {
            timestamp: event.epoch_seconds(),
            message: event.message(),
        })
        .collect();
    TrackingReport {
        total_stops,
        history,
    }
}

pub fn status_report(parcel: &Parcel) -> StatusReport {
    StatusReport {
        state: derive_state(parcel),
        next_leg: parcel.next_leg().cloned(),
        legs_remaining: parcel.legs_remaining(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Dimensions, ParcelCreate, ParcelEvent, ParcelId, Route};

    fn parcel(legs: &[&str]) -> Parcel {
        let params = ParcelCreate {
            origin: "CityA".to_string(),
            destination: "CityD".to_string(),
            dimensions: Dimensions {
                width: 10,
                height: 10,
                length: 10,
            },
            weight: 2.0,
            items: Vec::new(),
        };
        let legs = legs.iter().map(|leg| LegId::from(*leg)).collect();
        Parcel::new(ParcelId::generate(), params, Route::new(legs, 1, 1))
    }

    fn depart(parcel: &mut Parcel) {
        let leg = parcel.next_leg().cloned().unwrap();
        parcel.history.push(ParcelEvent::now(EventKind::Departed(leg)));
        parcel.next_leg_index += 1;
    }

    fn arrive(parcel: &mut Parcel, at: &str) {
        parcel
            .history
            .push(ParcelEvent::now(EventKind::Arrived(at.to_string())));
    }

    #[test]
    fn test_state_walks_the_route() {
        let mut p = parcel(&["l1", "l2"]);
        assert_eq!(derive_state(&p), ParcelState::AwaitingDeparture);
        assert_eq!(awaiting_leg(&p), Some(LegId::from("l1")));

        depart(&mut p);
        assert_eq!(derive_state(&p), ParcelState::InTransit);
        assert_eq!(awaiting_leg(&p), None);

        arrive(&mut p, "Hub");
        assert_eq!(derive_state(&p), ParcelState::AwaitingDeparture);
        assert_eq!(awaiting_leg(&p), Some(LegId::from("l2")));

        depart(&mut p);
        arrive(&mut p, "CityD");
        assert_eq!(derive_state(&p), ParcelState::Delivered);
        assert_eq!(awaiting_leg(&p), None);

        p.history.push(ParcelEvent::now(EventKind::PickedUp));
        assert_eq!(derive_state(&p), ParcelState::PickedUp);

        let report = tracking_report(&p);
        assert_eq!(report.total_stops, 2);
        assert_eq!(report.history.len(), 6);
        assert_eq!(report.history[5].message, "Parcel picked up at final destination");
    }

    #[test]
    fn test_pickup_does_not_change_index_membership() {
        let mut p = parcel(&["l1", "l2"]);
        p.history.push(ParcelEvent::now(EventKind::PickedUp));
        assert_eq!(awaiting_leg(&p), Some(LegId::from("l1")));

        depart(&mut p);
        p.history.push(ParcelEvent::now(EventKind::PickedUp));
        assert_eq!(awaiting_leg(&p), None);
    }

    #[test]
    fn test_status_report_counts_remaining_legs() {
        let mut p = parcel(&["l1", "l2", "l3"]);
        depart(&mut p);
        let status = status_report(&p);
        assert_eq!(status.state, ParcelState::InTransit);
        assert_eq!(status.next_leg, Some(LegId::from("l2")));
        assert_eq!(status.legs_remaining, 2);
    }
}
