//! Mach-number sweeps and tabulation rows.
//!
//! Generates the data behind isentropic flow tables: a finite inclusive
//! range of Mach numbers and the four stagnation ratios evaluated at each.
//! Formatting is a presentation concern and lives with the caller.

use crate::area::mach_area_ratio_choked;
use crate::error::{FlowError, FlowResult};
use crate::stagnation::{
    stagnation_density_ratio, stagnation_pressure_ratio, stagnation_temperature_ratio,
};
use gd_core::{Tolerances, nearly_equal};
use gd_gas::GasProperties;
use serde::Serialize;

/// An inclusive Mach-number range stepped by a fixed increment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MachRange {
    pub min: f64,
    pub max: f64,
    pub inc: f64,
}

impl MachRange {
    /// Validated constructor: `0 <= min <= max`, `inc > 0`.
    pub fn new(min: f64, max: f64, inc: f64) -> FlowResult<Self> {
        if !min.is_finite() || !max.is_finite() || !inc.is_finite() {
            return Err(FlowError::InvalidInput {
                what: "Mach range bounds must be finite",
            });
        }
        if min < 0.0 {
            return Err(FlowError::InvalidInput {
                what: "Mach range must start at or above zero",
            });
        }
        if max < min {
            return Err(FlowError::InvalidInput {
                what: "Mach range end must not precede its start",
            });
        }
        if inc <= 0.0 {
            return Err(FlowError::InvalidInput {
                what: "Mach range increment must be positive",
            });
        }
        Ok(Self { min, max, inc })
    }

    /// Generate all points from `min` to `max` inclusive.
    ///
    /// The last step is snapped to `max` exactly when the increment lands on
    /// it within floating tolerance.
    pub fn points(&self) -> Vec<f64> {
        let span = self.max - self.min;
        let steps = (span / self.inc + 1e-9).floor() as usize;

        let mut points = Vec::with_capacity(steps + 1);
        for i in 0..=steps {
            points.push(self.min + i as f64 * self.inc);
        }

        // Ensure exact endpoint
        if let Some(last) = points.last_mut() {
            if nearly_equal(*last, self.max, Tolerances::default()) {
                *last = self.max;
            }
        }
        points
    }
}

/// One row of an isentropic flow table.
///
/// `area_ratio` is positive infinity at `M = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StagnationRow {
    pub mach: f64,
    pub p_over_pt: f64,
    pub t_over_tt: f64,
    pub area_ratio: f64,
    pub rho_over_rho_t: f64,
}

/// Evaluate the four stagnation ratios at every Mach number in the range.
pub fn stagnation_table(props: GasProperties, range: &MachRange) -> FlowResult<Vec<StagnationRow>> {
    let machs = range.points();
    let mut rows = Vec::with_capacity(machs.len());
    for m in machs {
        rows.push(StagnationRow {
            mach: m,
            p_over_pt: stagnation_pressure_ratio(props, m)?,
            t_over_tt: stagnation_temperature_ratio(props, m)?,
            area_ratio: mach_area_ratio_choked(props, m)?,
            rho_over_rho_t: stagnation_density_ratio(props, m)?,
        });
    }
    Ok(rows)
}
