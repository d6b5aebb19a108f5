//! Shared newtypes and utilities used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize identically
//! to the raw format the backend sends, so they can be used directly in wire types
//! without conversion overhead.

pub mod serde_util;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── Granularity ─────────────────────────────────────────────────────────────

/// Time bucket size of a series of records.
///
/// Unrecognised backend tokens parse to [`Granularity::Unknown`] so the data
/// still passes through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Granularity {
    #[default]
    Unknown,
    Daily,
    Weekly,
    Monthly,
}

impl Granularity {
    /// The token used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Daily => "day",
            Self::Weekly => "week",
            Self::Monthly => "month",
        }
    }
}

impl std::fmt::Display for Granularity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Granularity::Unknown => write!(f, "Unknown"),
            Granularity::Daily => write!(f, "Daily"),
            Granularity::Weekly => write!(f, "Weekly"),
            Granularity::Monthly => write!(f, "Monthly"),
        }
    }
}

impl FromStr for Granularity {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "day" | "daily" => Granularity::Daily,
            "week" | "weekly" => Granularity::Weekly,
            "month" | "monthly" => Granularity::Monthly,
            _ => Granularity::Unknown,
        })
    }
}

impl Serialize for Granularity {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Granularity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = Option::<String>::deserialize(deserializer)?;
        Ok(s
            .map(|s| s.parse::<Granularity>().unwrap_or_default())
            .unwrap_or_default())
    }
}
