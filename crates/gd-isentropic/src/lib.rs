//! gd-isentropic: closed-form isentropic-flow relations for a perfect gas.
//!
//! Provides:
//! - Stagnation relations (pressure, temperature, density ratios and the
//!   two-of-three stagnation solvers)
//! - Two-station relations linked by Mach numbers and optional entropy loss
//! - Choked-area relations, choked mass flux, and the dual-root inverse
//!   area-ratio lookup
//! - Mach sweeps producing tabulation rows for presentation layers
//!
//! # Architecture
//!
//! Every relation is a stateless pure function of [`GasProperties`] plus
//! scalar arguments; the only coupling between operations is the shared
//! `(gamma, R)` pair resolved once by the caller. Nothing here logs,
//! retries, or holds state, so calls are referentially transparent and
//! trivially thread safe.
//!
//! # Example
//!
//! ```
//! use gd_gas::{Gas, GasProperties, UnitSystem};
//! use gd_isentropic::stagnation;
//!
//! let air = GasProperties::of(Gas::Air, UnitSystem::Metric);
//! let pt = stagnation::stagnation_pressure(air, None, Some(10.0), Some(1.0)).unwrap();
//! assert!((pt - 18.92929158737854).abs() < 1e-9);
//! ```

pub mod area;
pub mod bracket;
pub mod error;
pub mod stagnation;
pub mod stations;
pub mod sweep;

// Re-exports for ergonomics
pub use area::{
    AreaRatioRoots, choked_mdot, mach_area_ratio, mach_area_ratio_choked, mach_from_area_ratio,
};
pub use bracket::{BisectionConfig, BisectionResult, bisect};
pub use error::{FlowError, FlowResult};
pub use stagnation::{
    sonic_velocity, stagnation_density_ratio, stagnation_pressure, stagnation_pressure_ratio,
    stagnation_temperature, stagnation_temperature_ratio,
};
pub use stations::{
    entropy_produced, mach_from_pressure_ratio, mach_from_temperature_ratio,
    pressure_from_mach_ratio, temperature_from_mach_ratio,
};
pub use sweep::{MachRange, StagnationRow, stagnation_table};
