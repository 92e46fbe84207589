// crates/vidcat-core/src/record.rs - The catalog data unit

use serde::{Deserialize, Serialize};
use std::fmt;

/// One catalog entry
///
/// Both fields are free-form text: nothing is trimmed, validated or parsed.
/// An empty name is as valid as any other, and the duration is never
/// interpreted as a number or time value.
///
/// ON-DISK FORMAT:
/// Serialized as `{"name": "...", "time": "..."}`. Files that spell the
/// second field `duration` are accepted on read. A record missing either
/// field fails deserialization, which the store reports as a malformed file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,

    #[serde(rename = "time", alias = "duration")]
    pub duration: String,
}

impl Record {
    pub fn new(name: impl Into<String>, duration: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            duration: duration.into(),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, Duration: {}", self.name, self.duration)
    }
}
