//! Gas definitions and the `(gamma, R)` lookup.

use crate::error::{GasError, GasResult};
use crate::units::UnitSystem;
use serde::{Deserialize, Serialize};

/// Gases supported by the property registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gas {
    /// Air (standard dry mixture)
    Air,
    /// Argon (Ar)
    Argon,
    /// Carbon dioxide (CO₂)
    CarbonDioxide,
    /// Carbon monoxide (CO)
    CarbonMonoxide,
    /// Helium (He)
    Helium,
    /// Hydrogen (H₂)
    Hydrogen,
    /// Methane (CH₄)
    Methane,
    /// Nitrogen (N₂)
    Nitrogen,
    /// Oxygen (O₂)
    Oxygen,
}

impl Gas {
    pub const ALL: [Gas; 9] = [
        Gas::Air,
        Gas::Argon,
        Gas::CarbonDioxide,
        Gas::CarbonMonoxide,
        Gas::Helium,
        Gas::Hydrogen,
        Gas::Methane,
        Gas::Nitrogen,
        Gas::Oxygen,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Gas::Air => "Air",
            Gas::Argon => "Ar",
            Gas::CarbonDioxide => "CO2",
            Gas::CarbonMonoxide => "CO",
            Gas::Helium => "He",
            Gas::Hydrogen => "H2",
            Gas::Methane => "CH4",
            Gas::Nitrogen => "N2",
            Gas::Oxygen => "O2",
        }
    }

    /// Get human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Gas::Air => "Air",
            Gas::Argon => "Argon",
            Gas::CarbonDioxide => "Carbon Dioxide",
            Gas::CarbonMonoxide => "Carbon Monoxide",
            Gas::Helium => "Helium",
            Gas::Hydrogen => "Hydrogen",
            Gas::Methane => "Methane",
            Gas::Nitrogen => "Nitrogen",
            Gas::Oxygen => "Oxygen",
        }
    }

    /// Ratio of specific heats, cp/cv. Unit independent.
    pub fn gamma(&self) -> f64 {
        match self {
            Gas::Air => 1.4,
            Gas::Argon => 1.67,
            Gas::CarbonDioxide => 1.29,
            Gas::CarbonMonoxide => 1.4,
            Gas::Helium => 1.67,
            Gas::Hydrogen => 1.41,
            Gas::Methane => 1.32,
            Gas::Nitrogen => 1.4,
            Gas::Oxygen => 1.4,
        }
    }

    /// Specific gas constant in the requested unit system.
    ///
    /// Metric values are J/(kg·K), US customary are ft·lbf/(lbm·°R).
    /// Values sourced from standard compressible-flow reference tables.
    pub fn gas_constant(&self, units: UnitSystem) -> f64 {
        match units {
            UnitSystem::Metric => match self {
                Gas::Air => 287.0,
                Gas::Argon => 208.0,
                Gas::CarbonDioxide => 189.0,
                Gas::CarbonMonoxide => 297.0,
                Gas::Helium => 2077.0,
                Gas::Hydrogen => 4124.0,
                Gas::Methane => 518.3,
                Gas::Nitrogen => 296.8,
                Gas::Oxygen => 259.8,
            },
            UnitSystem::UsCustomary => match self {
                Gas::Air => 53.35,
                Gas::Argon => 38.68,
                Gas::CarbonDioxide => 35.10,
                Gas::CarbonMonoxide => 55.17,
                Gas::Helium => 386.1,
                Gas::Hydrogen => 766.5,
                Gas::Methane => 96.32,
                Gas::Nitrogen => 55.16,
                Gas::Oxygen => 48.29,
            },
        }
    }
}

impl std::str::FromStr for Gas {
    type Err = GasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "AIR" | "ATMOSPHERE" => Ok(Gas::Air),
            "AR" | "ARGON" => Ok(Gas::Argon),
            "CO2" | "CARBONDIOXIDE" | "CARBON DIOXIDE" => Ok(Gas::CarbonDioxide),
            "CO" | "CARBONMONOXIDE" | "CARBON MONOXIDE" => Ok(Gas::CarbonMonoxide),
            "HE" | "HELIUM" => Ok(Gas::Helium),
            "H2" | "HYDROGEN" => Ok(Gas::Hydrogen),
            "CH4" | "METHANE" => Ok(Gas::Methane),
            "N2" | "NITROGEN" => Ok(Gas::Nitrogen),
            "O2" | "OXYGEN" => Ok(Gas::Oxygen),
            _ => Err(GasError::UnknownGas {
                name: s.trim().to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Gas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Resolved perfect-gas properties.
///
/// Immutable value type; looked up once per call and never mutated. `gamma`
/// is strictly greater than one for every registry gas, which keeps all the
/// `gamma - 1` denominators and exponents in the flow relations well defined.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GasProperties {
    /// Ratio of specific heats.
    pub gamma: f64,
    /// Specific gas constant, unit system dependent.
    pub r: f64,
    /// Unit system `r` is expressed in.
    pub units: UnitSystem,
}

impl GasProperties {
    /// Look up registry properties for a gas in the given unit system.
    pub fn of(gas: Gas, units: UnitSystem) -> Self {
        Self {
            gamma: gas.gamma(),
            r: gas.gas_constant(units),
            units,
        }
    }

    /// Properties for a caller-supplied gas outside the registry.
    ///
    /// Requires `gamma > 1` and `r > 0`.
    pub fn custom(gamma: f64, r: f64, units: UnitSystem) -> GasResult<Self> {
        if !gamma.is_finite() || gamma <= 1.0 {
            return Err(GasError::InvalidProperties {
                what: "gamma must be finite and greater than 1",
            });
        }
        if !r.is_finite() || r <= 0.0 {
            return Err(GasError::InvalidProperties {
                what: "gas constant must be finite and positive",
            });
        }
        Ok(Self { gamma, r, units })
    }
}

/// Resolve a free-form gas name, as accepted on the CLI.
pub fn lookup(name: &str, units: UnitSystem) -> GasResult<GasProperties> {
    let gas: Gas = name.parse()?;
    Ok(GasProperties::of(gas, units))
}
