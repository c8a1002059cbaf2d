//! Fixed route table keyed by directed location pair.
//!
//! Location names are matched case-insensitively. The built-in table can be replaced by a
//! TOML file of `[[route]]` entries:
//!
//! ```toml
//! [[route]]
//! from = "CityA"
//! to = "CityB"
//! legs = ["leg-001"]
//! cost = 100
//! time = 60
//! ```

use super::RouteProvider;
use crate::model::{LegId, Route};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Errors raised while loading a route table.
#[derive(Debug, Error)]
pub enum RouteTableError {
    #[error("Failed to read route table {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid route table: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Route {from} -> {to} has no legs")]
    EmptyRoute { from: String, to: String },

    #[error("Route {from} -> {to} is defined more than once")]
    DuplicateRoute { from: String, to: String },
}

#[derive(Debug, Deserialize)]
struct RouteFile {
    #[serde(default, rename = "route")]
    routes: Vec<RouteEntry>,
}

#[derive(Debug, Deserialize)]
struct RouteEntry {
    from: String,
    to: String,
    legs: Vec<String>,
    cost: u64,
    time: u64,
}

const DEFAULT_ROUTES: &[(&str, &str, &[&str], u64, u64)] = &[
    ("CityA", "CityB", &["leg-001"], 100, 60),
    ("CityB", "CityA", &["leg-002"], 100, 60),
    ("CityA", "CityC", &["leg-003", "leg-004"], 200, 120),
    ("CityC", "CityA", &["leg-005", "leg-006"], 200, 120),
    ("CityB", "CityC", &["leg-007"], 150, 90),
    ("CityC", "CityB", &["leg-008"], 150, 90),
    ("CityA", "CityD", &["leg-009", "leg-010", "leg-011"], 300, 180),
    ("CityD", "CityA", &["leg-012", "leg-013", "leg-014"], 300, 180),
    ("NewYork", "London", &["leg-015"], 500, 420),
    ("London", "NewYork", &["leg-016"], 500, 420),
];

/// An immutable lookup table from `(origin, destination)` to [`Route`].
#[derive(Debug, Clone)]
pub struct StaticRouteTable {
    routes: HashMap<(String, String), Route>,
}

impl Default for StaticRouteTable {
    fn default() -> Self {
        let routes = DEFAULT_ROUTES
            .iter()
            .map(|(from, to, legs, cost, time)| {
                let legs = legs.iter().map(|leg| LegId::from(*leg)).collect();
                (key(from, to), Route::new(legs, *cost, *time))
            })
            .collect();
        Self { routes }
    }
}

impl StaticRouteTable {
    pub fn from_toml_str(source: &str) -> Result<Self, RouteTableError> {
        let file: RouteFile = toml::from_str(source)?;
        let mut routes = HashMap::with_capacity(file.routes.len());

        for entry in file.routes {
            if entry.legs.is_empty() {
                return Err(RouteTableError::EmptyRoute {
                    from: entry.from,
                    to: entry.to,
                });
            }
            let legs = entry.legs.into_iter().map(LegId::from).collect();
            let route = Route::new(legs, entry.cost, entry.time);
            if routes.insert(key(&entry.from, &entry.to), route).is_some() {
                return Err(RouteTableError::DuplicateRoute {
                    from: entry.from,
                    to: entry.to,
                });
            }
        }

        Ok(Self { routes })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, RouteTableError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| RouteTableError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_toml_str(&source)?;
        info!(path = %path.display(), routes = table.len(), "Route table loaded");
        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn lookup(&self, origin: &str, destination: &str) -> Option<&Route> {
        self.routes.get(&key(origin, destination))
    }
}

#[async_trait]
impl RouteProvider for StaticRouteTable {
    async fn resolve_route(&self, origin: &str, destination: &str) -> Option<Route> {
        let route = self.lookup(origin, destination).cloned();
        debug!(origin, destination, found = route.is_some(), "Route lookup");
        route
    }
}

fn key(origin: &str, destination: &str) -> (String, String) {
    (origin.to_lowercase(), destination.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_default_table_resolves_directed_pairs() {
        let table = StaticRouteTable::default();
        assert_eq!(table.len(), 10);

        let route = table.resolve_route("CityA", "CityD").await.unwrap();
        assert_eq!(
            route.legs,
            vec![
                LegId::from("leg-009"),
                LegId::from("leg-010"),
                LegId::from("leg-011")
            ]
        );
        assert_eq!((route.cost, route.time), (300, 180));

        let back = table.resolve_route("CityD", "CityA").await.unwrap();
        assert_eq!(back.legs[0], LegId::from("leg-012"));

        assert!(table.resolve_route("CityB", "CityD").await.is_none());
    }

    #[tokio::test]
    async fn test_lookup_ignores_case() {
        let table = StaticRouteTable::default();
        let route = table.resolve_route("newyork", "LONDON").await.unwrap();
        assert_eq!(route.legs, vec![LegId::from("leg-015")]);
    }

    #[test]
    fn test_from_toml_str() {
        let table = StaticRouteTable::from_toml_str(
            r#"
            [[route]]
            from = "Depot"
            to = "Harbour"
            legs = ["truck-1", "ferry-2"]
            cost = 42
            time = 7
            "#,
        )
        .unwrap();

        assert_eq!(table.len(), 1);
        let route = table.lookup("depot", "harbour").unwrap();
        assert_eq!(route.leg_count(), 2);
        assert!(table.lookup("CityA", "CityB").is_none());
    }

    #[test]
    fn test_empty_leg_list_is_rejected() {
        let result = StaticRouteTable::from_toml_str(
            r#"
            [[route]]
            from = "A"
            to = "B"
            legs = []
            cost = 1
            time = 1
            "#,
        );
        assert!(matches!(result, Err(RouteTableError::EmptyRoute { .. })));
    }

    #[test]
    fn test_duplicate_pair_is_rejected() {
        let result = StaticRouteTable::from_toml_str(
            r#"
            [[route]]
            from = "A"
            to = "B"
            legs = ["x"]
            cost = 1
            time = 1

            [[route]]
            from = "a"
            to = "b"
            legs = ["y"]
            cost = 2
            time = 2
            "#,
        );
        assert!(matches!(result, Err(RouteTableError::DuplicateRoute { .. })));
    }

    #[test]
    fn test_malformed_toml_is_a_parse_error() {
        let result = StaticRouteTable::from_toml_str("[[route]]\nfrom = 3");
        assert!(matches!(result, Err(RouteTableError::Parse(_))));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let result = StaticRouteTable::from_file("/definitely/not/here/routes.toml");
        assert!(matches!(result, Err(RouteTableError::Io { .. })));
    }
}
