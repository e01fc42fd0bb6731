//! Unit system selection.
//!
//! `gamma` is dimensionless and unit independent; the specific gas constant
//! `R` changes value with the unit system: J/(kg·K) for metric,
//! ft·lbf/(lbm·°R) for US customary.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unit system for dimensional quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum UnitSystem {
    /// SI units: Pa, K, J/(kg·K), m/s.
    #[default]
    Metric,
    /// US customary units: lbf/ft², °R, ft·lbf/(lbm·°R), ft/s.
    UsCustomary,
}

impl UnitSystem {
    /// Gravitational conversion constant `gc` in lbm·ft/(lbf·s²).
    ///
    /// Unity in metric; 32.174 in US customary, where lbm and lbf are
    /// reconciled through it in the choked mass-flux relation.
    pub fn gc(self) -> f64 {
        match self {
            UnitSystem::Metric => 1.0,
            UnitSystem::UsCustomary => 32.174,
        }
    }

    pub fn gas_constant_label(self) -> &'static str {
        match self {
            UnitSystem::Metric => "J/(kg·K)",
            UnitSystem::UsCustomary => "ft·lbf/(lbm·°R)",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Metric => write!(f, "metric"),
            Self::UsCustomary => write!(f, "us"),
        }
    }
}

impl std::str::FromStr for UnitSystem {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "metric" | "si" => Ok(UnitSystem::Metric),
            "us" | "imperial" | "english" => Ok(UnitSystem::UsCustomary),
            _ => Err("unknown unit system"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_aliases() {
        assert_eq!("SI".parse::<UnitSystem>().unwrap(), UnitSystem::Metric);
        assert_eq!(
            "english".parse::<UnitSystem>().unwrap(),
            UnitSystem::UsCustomary
        );
        assert!("furlongs".parse::<UnitSystem>().is_err());
    }

    #[test]
    fn gc_is_unity_in_metric() {
        assert_eq!(UnitSystem::Metric.gc(), 1.0);
        assert!((UnitSystem::UsCustomary.gc() - 32.174).abs() < 1e-12);
    }
}
