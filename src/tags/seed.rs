use std::fmt;

use serde::{Deserialize, Serialize};

/// A seed value for the initial tag list
///
/// Seed lists may mix strings and numbers (`tags = ["rust", 2024]` in a config
/// file); numbers are coerced to their string form on ingestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeedTag {
    Text(String),
    Number(serde_json::Number),
}

impl SeedTag {
    /// The tag this seed becomes
    #[must_use]
    pub fn into_tag(self) -> String {
        match self {
            Self::Text(s) => s,
            Self::Number(n) => n.to_string(),
        }
    }
}

impl fmt::Display for SeedTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<String> for SeedTag {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for SeedTag {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<i64> for SeedTag {
    fn from(n: i64) -> Self {
        Self::Number(n.into())
    }
}

impl From<i32> for SeedTag {
    fn from(n: i32) -> Self {
        Self::Number(i64::from(n).into())
    }
}

impl From<u64> for SeedTag {
    fn from(n: u64) -> Self {
        Self::Number(n.into())
    }
}

impl From<f64> for SeedTag {
    /// Non-finite floats have no JSON number form and fall back to their
    /// display string.
    fn from(n: f64) -> Self {
        serde_json::Number::from_f64(n).map_or_else(|| Self::Text(n.to_string()), Self::Number)
    }
}
