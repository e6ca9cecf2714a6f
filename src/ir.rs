use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// A single cell value: categorical text or a numeric measure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(f64),
    Text(String),
}

impl Scalar {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            Self::Text(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Number(_) => None,
            Self::Text(s) => Some(s),
        }
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// One category instance: field name -> value. Supplied externally and
/// treated as read-only by the layout pipeline.
pub type Record = BTreeMap<String, Scalar>;

/// Union of field names across all records.
pub fn schema(data: &[Record]) -> BTreeSet<&str> {
    data.iter()
        .flat_map(|record| record.keys().map(String::as_str))
        .collect()
}

/// Reads a numeric field from a record. Missing fields and textual values
/// both read as absent.
pub fn numeric_field(record: &Record, field: &str) -> Option<f64> {
    record.get(field).and_then(Scalar::as_f64)
}
