//! Decode configuration.

use chrono::{DateTime, FixedOffset, Offset, Utc};

/// Options applied when decoding upstream payloads into domain types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeConfig {
    /// Offset in which decoded timestamps are presented. The instant is never changed.
    pub offset: FixedOffset,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self::utc()
    }
}

impl DecodeConfig {
    /// Config presenting timestamps in UTC.
    pub fn utc() -> Self {
        Self {
            offset: Utc.fix(),
        }
    }

    /// Set the offset decoded timestamps are presented in.
    pub fn with_offset(mut self, offset: FixedOffset) -> Self {
        self.offset = offset;
        self
    }

    /// Present a UTC instant in the configured offset.
    pub fn localize(&self, instant: DateTime<Utc>) -> DateTime<FixedOffset> {
        instant.with_timezone(&self.offset)
    }
}
