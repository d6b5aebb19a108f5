//! # Market models
//!
//! Typed, immutable snapshots of the quote and trade data returned by the
//! market data / trading OpenAPI.
//!
//! ## Architecture
//!
//! 1. **Shared** — Newtypes and wire helpers used across domains (`Granularity`)
//! 2. **Domain** — Vertical slices: domain types, wire types, conversions
//! 3. **Config** — `DecodeConfig` controlling how payloads are presented
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use market_models::prelude::*;
//!
//! let history = decode_history_market_temperature(body, &DecodeConfig::default())?;
//! for record in &history {
//!     println!("{record}");
//! }
//! ```

/// Shared newtypes used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions.
pub mod domain;

/// Decode configuration.
pub mod config;

/// Unified SDK error types.
pub mod error;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    pub use crate::shared::Granularity;

    // Domain types — market temperature
    pub use crate::domain::market_temperature::{
        decode_history_market_temperature, decode_market_temperature,
        HistoryMarketTemperatureResponse, MarketTemperature,
    };

    // Domain types — fees
    pub use crate::domain::fee::{
        decode_frozen_transaction_fee, decode_frozen_transaction_fees, FrozenTransactionFee,
    };

    pub use crate::config::DecodeConfig;
    pub use crate::error::{SdkError, SdkResult};
}
