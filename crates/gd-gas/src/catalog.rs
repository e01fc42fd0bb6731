use crate::{Gas, UnitSystem};

/// One row of the supported-gas listing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GasCatalogEntry {
    pub gas: Gas,
    pub canonical_id: &'static str,
    pub display_name: &'static str,
    pub aliases: &'static [&'static str],
}

impl GasCatalogEntry {
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_ascii_lowercase();
        if query.is_empty() {
            return true;
        }

        self.canonical_id.to_ascii_lowercase().contains(&query)
            || self.display_name.to_ascii_lowercase().contains(&query)
            || self
                .aliases
                .iter()
                .any(|alias| alias.to_ascii_lowercase().contains(&query))
    }

    pub fn gamma(&self) -> f64 {
        self.gas.gamma()
    }

    pub fn gas_constant(&self, units: UnitSystem) -> f64 {
        self.gas.gas_constant(units)
    }
}

const GAS_CATALOG: [GasCatalogEntry; 9] = [
    GasCatalogEntry {
        gas: Gas::Air,
        canonical_id: "Air",
        display_name: "Air",
        aliases: &["atmosphere"],
    },
    GasCatalogEntry {
        gas: Gas::Argon,
        canonical_id: "Ar",
        display_name: "Argon",
        aliases: &["argon"],
    },
    GasCatalogEntry {
        gas: Gas::CarbonDioxide,
        canonical_id: "CO2",
        display_name: "Carbon Dioxide",
        aliases: &["carbon dioxide"],
    },
    GasCatalogEntry {
        gas: Gas::CarbonMonoxide,
        canonical_id: "CO",
        display_name: "Carbon Monoxide",
        aliases: &["carbon monoxide"],
    },
    GasCatalogEntry {
        gas: Gas::Helium,
        canonical_id: "He",
        display_name: "Helium",
        aliases: &["helium"],
    },
    GasCatalogEntry {
        gas: Gas::Hydrogen,
        canonical_id: "H2",
        display_name: "Hydrogen",
        aliases: &["hydrogen"],
    },
    GasCatalogEntry {
        gas: Gas::Methane,
        canonical_id: "CH4",
        display_name: "Methane",
        aliases: &["methane"],
    },
    GasCatalogEntry {
        gas: Gas::Nitrogen,
        canonical_id: "N2",
        display_name: "Nitrogen",
        aliases: &["nitrogen"],
    },
    GasCatalogEntry {
        gas: Gas::Oxygen,
        canonical_id: "O2",
        display_name: "Oxygen",
        aliases: &["oxygen"],
    },
];

/// The full gas catalog, in listing order.
pub fn gas_catalog() -> &'static [GasCatalogEntry] {
    &GAS_CATALOG
}
