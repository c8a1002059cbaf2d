use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Opaque identifier of one segment of a route.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LegId(pub String);

impl From<&str> for LegId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for LegId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for LegId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A resolved route: the legs to take in order, the quoted cost and the estimated duration.
///
/// Fixed at registration; the registry only ever reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub legs: Vec<LegId>,
    pub cost: u64,
    pub time: u64,
}

impl Route {
    pub fn new(legs: Vec<LegId>, cost: u64, time: u64) -> Self {
        Self { legs, cost, time }
    }

    pub fn leg_count(&self) -> usize {
        self.legs.len()
    }

    /// Prices the route for a specific parcel.
    ///
    /// The quote is the base cost plus 10 per unit of weight plus 1 per 100 of declared
    /// value, truncated to a whole amount. Fractions from weight and value are summed
    /// before truncation.
    pub fn quoted(mut self, weight: f64, declared_value: u64) -> Self {
        let weight_cents = (weight.max(0.0) * 1000.0).round() as u64;
        let cents = self.cost * 100 + weight_cents + declared_value;
        self.cost = cents / 100;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Route {
        Route::new(vec![LegId::from("leg-001")], 100, 60)
    }

    #[test]
    fn test_empty_light_parcel_pays_base_cost() {
        assert_eq!(base().quoted(0.0, 0).cost, 100);
    }

    #[test]
    fn test_weight_and_value_raise_the_quote() {
        let route = base().quoted(5.5, 51_000);
        assert_eq!(route.cost, 665);
        assert_eq!(route.time, 60);
        assert_eq!(route.legs, vec![LegId::from("leg-001")]);
    }

    #[test]
    fn test_fractions_are_truncated_together() {
        // 100 + 2.5 * 10 + 28 / 100
        assert_eq!(base().quoted(2.5, 28).cost, 125);
        // 100 + 0.05 * 10 + 50 / 100
        assert_eq!(base().quoted(0.05, 50).cost, 101);
    }
}
