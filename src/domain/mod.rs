//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Domain types with read-only accessors and `decode_*` entry points
//! - `wire.rs` — Raw serde structs matching backend responses
//! - `convert.rs` — `TryFrom` conversions, mapping absent fields to defaults

pub mod fee;
pub mod market_temperature;
