//! gd-gas: perfect-gas property table for gasdyn.
//!
//! Provides:
//! - Gas definitions (air, argon, methane, etc.)
//! - Unit system selection (metric / US customary)
//! - `(gamma, R)` lookup, including validated custom gases
//! - A catalog of supported gases for listings and name matching
//!
//! The table is read-only after initialization; lookups are pure functions of
//! their inputs and may be shared across threads without synchronization.

pub mod catalog;
pub mod error;
pub mod gas;
pub mod units;

// Re-exports for ergonomics
pub use catalog::{GasCatalogEntry, gas_catalog};
pub use error::{GasError, GasResult};
pub use gas::{Gas, GasProperties};
pub use units::UnitSystem;
