//! Choked-area relations and mass flux.
//!
//! `A*` is the area at which the flow reaches Mach 1. `A/A*` has its minimum
//! of exactly 1 at `M = 1` and grows without bound toward both `M = 0` and
//! high supersonic Mach numbers, so the inverse lookup has two roots.

use crate::bracket::{BisectionConfig, bisect};
use crate::error::{FlowError, FlowResult};
use crate::stagnation::ensure_entropy;
use gd_core::{ensure_finite, ensure_non_negative, ensure_positive};
use gd_gas::GasProperties;

fn mach(v: f64) -> FlowResult<f64> {
    ensure_non_negative(v, "mach").map_err(|_| FlowError::InvalidInput {
        what: "Mach number must be non-negative",
    })
}

fn positive(v: f64, what: &'static str) -> FlowResult<f64> {
    ensure_positive(v, what).map_err(|_| FlowError::InvalidInput { what })
}

// Shared with the root finder, which needs an infallible evaluation.
fn area_ratio_raw(gamma: f64, m: f64) -> f64 {
    if m == 0.0 {
        return f64::INFINITY;
    }
    1.0 / m
        * ((1.0 + (gamma - 1.0) / 2.0 * m * m) / ((gamma + 1.0) / 2.0))
            .powf((gamma + 1.0) / (2.0 * (gamma - 1.0)))
}

/// Area ratio `A/A*` between a station at Mach `M` and the choked throat.
///
/// `M = 0` returns positive infinity.
///
/// # Example
///
/// ```
/// use gd_gas::{Gas, GasProperties, UnitSystem};
///
/// let air = GasProperties::of(Gas::Air, UnitSystem::Metric);
/// let ratio = gd_isentropic::mach_area_ratio_choked(air, 3.0).unwrap();
/// assert!((ratio - 4.23456790123457).abs() < 1e-9);
/// ```
pub fn mach_area_ratio_choked(props: GasProperties, m: f64) -> FlowResult<f64> {
    let m = mach(m)?;
    Ok(area_ratio_raw(props.gamma, m))
}

/// Area ratio `A2/A1` required to move the flow from `M1` to `M2`, with an
/// `exp(ds/R)` factor for entropy produced between the stations.
pub fn mach_area_ratio(
    props: GasProperties,
    m1: f64,
    m2: f64,
    ds: f64,
) -> FlowResult<f64> {
    let m1 = mach(m1)?;
    let m2 = mach(m2)?;
    let ds = ensure_entropy(ds)?;
    if m2 == 0.0 {
        return Ok(f64::INFINITY);
    }

    let gamma = props.gamma;
    Ok(m1 / m2
        * ((1.0 + (gamma - 1.0) / 2.0 * m2 * m2) / (1.0 + (gamma - 1.0) / 2.0 * m1 * m1))
            .powf((gamma + 1.0) / (2.0 * (gamma - 1.0)))
        * (ds / props.r).exp())
}

/// Maximum mass flow rate per unit choked area.
///
/// `sqrt(gc gamma / R (2/(gamma+1))^((gamma+1)/(gamma-1))) pt / sqrt(Tt)`,
/// where `gc` is unity in metric units and 32.174 lbm·ft/(lbf·s²) in US
/// customary units. Metric inputs are Pa and K.
///
/// # Example
///
/// ```
/// use gd_gas::{Gas, GasProperties, UnitSystem};
///
/// let air = GasProperties::of(Gas::Air, UnitSystem::Metric);
/// let flux = gd_isentropic::choked_mdot(air, 1_000_000.0, 300.0).unwrap();
/// assert!((flux - 2333.558560606226).abs() < 1e-3);
/// ```
pub fn choked_mdot(props: GasProperties, pt: f64, tt: f64) -> FlowResult<f64> {
    let pt = positive(pt, "stagnation pressure must be positive")?;
    let tt = positive(tt, "stagnation temperature must be positive")?;

    let gamma = props.gamma;
    let gc = props.units.gc();
    let term = (2.0 / (gamma + 1.0)).powf((gamma + 1.0) / (gamma - 1.0));
    Ok((gc * gamma / props.r * term).sqrt() * pt / tt.sqrt())
}

/// The two Mach numbers that share one choked-area ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AreaRatioRoots {
    /// Root in `(0, 1]`.
    pub subsonic: f64,
    /// Root in `[1, ∞)`.
    pub supersonic: f64,
}

/// Invert `A/A*` for Mach number.
///
/// The choked-area relation is not bijective: every `A/A* > 1` corresponds
/// to one subsonic and one supersonic Mach number, so both are returned.
/// `A/A* < 1` has no physical solution and is rejected; `A/A* = 1` yields
/// both roots exactly 1.
pub fn mach_from_area_ratio(props: GasProperties, area_ratio: f64) -> FlowResult<AreaRatioRoots> {
    let area_ratio = ensure_finite(area_ratio, "area_ratio").map_err(|_| {
        FlowError::InvalidInput {
            what: "area ratio must be finite",
        }
    })?;
    if area_ratio < 1.0 {
        return Err(FlowError::InvalidInput {
            what: "area ratio below 1 has no physical solution",
        });
    }
    if area_ratio == 1.0 {
        return Ok(AreaRatioRoots {
            subsonic: 1.0,
            supersonic: 1.0,
        });
    }

    let gamma = props.gamma;
    let residual = |m: f64| area_ratio_raw(gamma, m) - area_ratio;
    let config = BisectionConfig::default();

    // A/A* is strictly decreasing on (0, 1], so the subsonic bracket is fixed.
    let subsonic = bisect(residual, 0.0, 1.0, &config)?.root;

    // Strictly increasing on [1, ∞). For every m > 0,
    //   A/A*(m) > c * m^(2/(gamma-1)),  c = ((gamma-1)/(gamma+1))^k,
    //   k = (gamma+1)/(2(gamma-1)),
    // so inverting that power law (in log space, the target can be huge)
    // always lands above the supersonic root.
    let k = (gamma + 1.0) / (2.0 * (gamma - 1.0));
    let ln_c = k * ((gamma - 1.0) / (gamma + 1.0)).ln();
    let hi = ((area_ratio.ln() - ln_c) * (gamma - 1.0) / 2.0).exp().max(2.0);
    let supersonic = bisect(residual, 1.0, hi, &config)?.root;

    Ok(AreaRatioRoots {
        subsonic,
        supersonic,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use gd_gas::{Gas, UnitSystem};

    fn air() -> GasProperties {
        GasProperties::of(Gas::Air, UnitSystem::Metric)
    }

    #[test]
    fn choked_area_ratio_textbook() {
        let ratio = mach_area_ratio_choked(air(), 3.0).unwrap();
        assert!((ratio - 4.23456790123457).abs() < 1e-9);
    }

    #[test]
    fn choked_area_ratio_is_unity_at_mach_one() {
        for gas in Gas::ALL {
            let props = GasProperties::of(gas, UnitSystem::Metric);
            let ratio = mach_area_ratio_choked(props, 1.0).unwrap();
            assert!((ratio - 1.0).abs() < 1e-12, "{gas}: {ratio}");
        }
    }

    #[test]
    fn choked_area_ratio_is_infinite_at_rest() {
        assert!(mach_area_ratio_choked(air(), 0.0).unwrap().is_infinite());
    }

    #[test]
    fn two_station_area_ratio_textbook() {
        let ratio = mach_area_ratio(air(), 1.5, 2.5, 0.0).unwrap();
        assert!((ratio - 2.241789331255894).abs() < 1e-6);
    }

    #[test]
    fn two_station_area_ratio_matches_choked_quotient() {
        let direct = mach_area_ratio(air(), 0.8, 2.2, 0.0).unwrap();
        let quotient = mach_area_ratio_choked(air(), 2.2).unwrap()
            / mach_area_ratio_choked(air(), 0.8).unwrap();
        assert!((direct - quotient).abs() < 1e-12);
    }

    #[test]
    fn entropy_loss_scales_area_ratio() {
        let clean = mach_area_ratio(air(), 1.5, 2.5, 0.0).unwrap();
        let ds = 287.0 * 2.0_f64.ln();
        let lossy = mach_area_ratio(air(), 1.5, 2.5, ds).unwrap();
        assert!((lossy - 2.0 * clean).abs() < 1e-9);
    }

    #[test]
    fn choked_mdot_metric_textbook() {
        let flux = choked_mdot(air(), 1_000_000.0, 300.0).unwrap();
        assert!((flux - 2333.558560606226).abs() < 1e-3);
    }

    #[test]
    fn choked_mdot_us_units_carries_gc() {
        let us = GasProperties::of(Gas::Air, UnitSystem::UsCustomary);
        let metric_form = (us.gamma / us.r
            * (2.0 / (us.gamma + 1.0)).powf((us.gamma + 1.0) / (us.gamma - 1.0)))
        .sqrt();
        let flux = choked_mdot(us, 2116.2, 518.7).unwrap();
        let expected = metric_form * 32.174_f64.sqrt() * 2116.2 / 518.7_f64.sqrt();
        assert!((flux - expected).abs() < 1e-9);
    }

    #[test]
    fn inverse_area_ratio_recovers_both_roots() {
        let target = mach_area_ratio_choked(air(), 3.0).unwrap();
        let roots = mach_from_area_ratio(air(), target).unwrap();
        assert!(roots.subsonic < 1.0);
        assert!((roots.supersonic - 3.0).abs() < 1e-8);
        // The subsonic root reproduces the same area ratio.
        let back = mach_area_ratio_choked(air(), roots.subsonic).unwrap();
        assert!((back - target).abs() < 1e-8);
    }

    #[test]
    fn inverse_area_ratio_subsonic_side() {
        let target = mach_area_ratio_choked(air(), 0.2).unwrap();
        let roots = mach_from_area_ratio(air(), target).unwrap();
        assert!((roots.subsonic - 0.2).abs() < 1e-8);
        assert!(roots.supersonic > 1.0);
    }

    #[test]
    fn inverse_area_ratio_handles_very_large_ratios() {
        // The supersonic bracket is seeded from the power-law bound, so even
        // astronomically large targets resolve without exhausting the solver.
        let target = 1.0e100;
        let roots = mach_from_area_ratio(air(), target).unwrap();
        assert!(roots.supersonic.is_finite());
        assert!(roots.supersonic > 1.0);
        let back = mach_area_ratio_choked(air(), roots.supersonic).unwrap();
        assert!((back - target).abs() / target < 1e-6);
    }

    #[test]
    fn inverse_area_ratio_at_unity() {
        let roots = mach_from_area_ratio(air(), 1.0).unwrap();
        assert_eq!(roots.subsonic, 1.0);
        assert_eq!(roots.supersonic, 1.0);
    }

    #[test]
    fn inverse_area_ratio_rejects_sub_unity() {
        assert!(matches!(
            mach_from_area_ratio(air(), 0.5),
            Err(FlowError::InvalidInput { .. })
        ));
        assert!(mach_from_area_ratio(air(), f64::INFINITY).is_err());
    }

    #[test]
    fn negative_mach_is_rejected() {
        assert!(mach_area_ratio_choked(air(), -1.0).is_err());
        assert!(mach_area_ratio(air(), -1.0, 2.0, 0.0).is_err());
    }
}
