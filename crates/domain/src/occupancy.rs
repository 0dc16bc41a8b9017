//! Zone occupancy rows.
//!
//! The gateway never interprets occupancy data: the shape of a row is decided
//! by the `rfid.v_zone_occupancy` view. A row is an ordered column → value
//! map that serializes as a plain JSON object.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One record of the zone occupancy view.
///
/// Columns keep the order in which they were inserted, which for rows built
/// by the storage adapter is the result set's column order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OccupancyRow(Map<String, Value>);

impl OccupancyRow {
    /// Create an empty row.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a column. A repeated column name overwrites the earlier value
    /// but keeps its original position.
    pub fn insert(&mut self, column: impl Into<String>, value: Value) {
        self.0.insert(column.into(), value);
    }

    /// Look up a column value.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.0.get(column)
    }

    /// Number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the row has no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over column names in order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for OccupancyRow {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let mut row = Self::new();
        for (column, value) in iter {
            row.insert(column, value);
        }
        row
    }
}
