use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::InvalidRequest;
use crate::guard::guard_marker_type;

/// Value standing in for a chunk of omitted pages.
///
/// Serializes as a bare int or string so a template engine can compare
/// entries against it directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Marker {
    Int(i64),
    Text(String),
}

impl Marker {
    pub const DEFAULT: Self = Self::Int(-1);

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(int) => Some(*int),
            Self::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Int(_) => None,
            Self::Text(text) => Some(text),
        }
    }
}

impl Default for Marker {
    fn default() -> Self { Self::DEFAULT }
}

impl TryFrom<Value> for Marker {
    type Error = InvalidRequest;

    fn try_from(value: Value) -> Result<Self, Self::Error> { guard_marker_type(&value) }
}

impl<'de> Deserialize<'de> for Marker {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        guard_marker_type(&value).map_err(serde::de::Error::custom)
    }
}

impl From<i64> for Marker {
    fn from(int: i64) -> Self { Self::Int(int) }
}

impl From<i32> for Marker {
    fn from(int: i32) -> Self { Self::Int(i64::from(int)) }
}

impl From<&str> for Marker {
    fn from(text: &str) -> Self { Self::Text(text.to_string()) }
}

impl From<String> for Marker {
    fn from(text: String) -> Self { Self::Text(text) }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(int) => write!(f, "{int}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}
