//! Flow relation errors.

use gd_gas::GasError;
use thiserror::Error;

/// Result type for flow relation operations.
pub type FlowResult<T> = Result<T, FlowError>;

/// Errors that can occur while evaluating flow relations.
///
/// Every failure is local and immediate: a call either returns a value or
/// reports exactly one of these. Nothing is retried or suppressed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FlowError {
    /// Physically invalid argument (negative absolute temperature or
    /// pressure, Mach number below zero, non-finite input).
    #[error("Invalid input: {what}")]
    InvalidInput { what: &'static str },

    /// A two-of-three solver received fewer than two defining quantities.
    #[error("{relation} needs exactly two of its three quantities; fewer were supplied")]
    InsufficientInput { relation: &'static str },

    /// A two-of-three solver received all three defining quantities.
    #[error("{relation} needs exactly two of its three quantities; all three were supplied")]
    AmbiguousInput { relation: &'static str },

    /// Root finder failed to converge or bracket.
    #[error("Convergence failed for {what}")]
    ConvergenceFailed { what: &'static str },

    /// Gas lookup failure.
    #[error(transparent)]
    Gas(#[from] GasError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arity_errors_name_the_relation() {
        let err = FlowError::InsufficientInput {
            relation: "stagnation_pressure",
        };
        assert!(err.to_string().contains("stagnation_pressure"));
        assert!(err.to_string().contains("fewer"));

        let err = FlowError::AmbiguousInput {
            relation: "stagnation_temperature",
        };
        assert!(err.to_string().contains("all three"));
    }

    #[test]
    fn gas_error_converts() {
        let gas_err = GasError::UnknownGas {
            name: "unobtainium".into(),
        };
        let err: FlowError = gas_err.into();
        assert!(matches!(err, FlowError::Gas(_)));
    }
}
