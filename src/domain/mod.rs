//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs`: Rich domain types and the pure operations over them
//! - `wire.rs`: Raw serde structs matching provider payloads (where one exists)
//! - `convert.rs`: `TryFrom` conversions with validation
//! - `client.rs`: Sub-client that loads series through the cache

pub mod aggregate;
pub mod pnl;
pub mod price_history;
pub mod snapshot;
