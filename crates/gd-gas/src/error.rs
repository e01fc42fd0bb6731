//! Gas table errors.

use thiserror::Error;

/// Result type for gas table operations.
pub type GasResult<T> = Result<T, GasError>;

/// Errors that can occur while resolving gas properties.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GasError {
    /// Gas name not present in the registry.
    #[error("Unknown gas: {name}")]
    UnknownGas { name: String },

    /// Custom gas properties outside the perfect-gas domain.
    #[error("Invalid gas properties: {what}")]
    InvalidProperties { what: &'static str },
}
