//! Relations between two flow stations linked by their Mach numbers.
//!
//! A nonzero entropy change `ds` models irreversible loss between the two
//! stagnation states; `ds = 0` is the purely isentropic comparison.

use crate::error::{FlowError, FlowResult};
use crate::stagnation::ensure_entropy;
use gd_core::{ensure_non_negative, ensure_positive};
use gd_gas::GasProperties;

fn positive(v: f64, what: &'static str) -> FlowResult<f64> {
    ensure_positive(v, what).map_err(|_| FlowError::InvalidInput { what })
}

fn mach(v: f64) -> FlowResult<f64> {
    ensure_non_negative(v, "mach").map_err(|_| FlowError::InvalidInput {
        what: "Mach number must be non-negative",
    })
}

/// Mach number at station 2 from the two static pressures and `M1`.
///
/// Inverts the two-station stagnation-pressure relation. The pressure ratio
/// must be consistent with a real flow state at station 2; otherwise the
/// radicand goes negative and the call fails rather than producing NaN.
///
/// # Example
///
/// ```
/// use gd_gas::{Gas, GasProperties, UnitSystem};
///
/// let air = GasProperties::of(Gas::Air, UnitSystem::Metric);
/// let m2 = gd_isentropic::mach_from_pressure_ratio(air, 10.0, 2.0, 1.0, 0.0).unwrap();
/// assert!((m2 - 2.1220079294384067).abs() < 1e-9);
/// ```
pub fn mach_from_pressure_ratio(
    props: GasProperties,
    p1: f64,
    p2: f64,
    m1: f64,
    ds: f64,
) -> FlowResult<f64> {
    let p1 = positive(p1, "pressure at station 1 must be positive")?;
    let p2 = positive(p2, "pressure at station 2 must be positive")?;
    let m1 = mach(m1)?;
    let ds = ensure_entropy(ds)?;

    let gamma = props.gamma;
    let radicand = ((p1 / p2 * (ds / props.r).exp()).powf((gamma - 1.0) / gamma)
        * (1.0 + (gamma - 1.0) / 2.0 * m1 * m1)
        - 1.0)
        * 2.0
        / (gamma - 1.0);
    if radicand < 0.0 {
        return Err(FlowError::InvalidInput {
            what: "pressure ratio exceeds the stagnation limit at station 2",
        });
    }
    Ok(radicand.sqrt())
}

/// Mach number at station 2 from the two static temperatures and `M1`.
pub fn mach_from_temperature_ratio(
    props: GasProperties,
    t1: f64,
    t2: f64,
    m1: f64,
) -> FlowResult<f64> {
    let t1 = positive(t1, "temperature at station 1 must be positive")?;
    let t2 = positive(t2, "temperature at station 2 must be positive")?;
    let m1 = mach(m1)?;

    let gamma = props.gamma;
    let radicand =
        (t1 / t2 * (1.0 + (gamma - 1.0) / 2.0 * m1 * m1) - 1.0) * 2.0 / (gamma - 1.0);
    if radicand < 0.0 {
        return Err(FlowError::InvalidInput {
            what: "temperature ratio exceeds the stagnation limit at station 2",
        });
    }
    Ok(radicand.sqrt())
}

/// Static pressure at station 2 from both Mach numbers and `p1`.
pub fn pressure_from_mach_ratio(
    props: GasProperties,
    m1: f64,
    m2: f64,
    p1: f64,
    ds: f64,
) -> FlowResult<f64> {
    let m1 = mach(m1)?;
    let m2 = mach(m2)?;
    let p1 = positive(p1, "pressure at station 1 must be positive")?;
    let ds = ensure_entropy(ds)?;

    let gamma = props.gamma;
    let p2 = p1
        * ((1.0 + (gamma - 1.0) / 2.0 * m1 * m1) / (1.0 + (gamma - 1.0) / 2.0 * m2 * m2))
            .powf(gamma / (gamma - 1.0))
        * (-ds / props.r).exp();
    Ok(p2)
}

/// Static temperature at station 2 from both Mach numbers and `T1`.
pub fn temperature_from_mach_ratio(
    props: GasProperties,
    m1: f64,
    m2: f64,
    t1: f64,
) -> FlowResult<f64> {
    let m1 = mach(m1)?;
    let m2 = mach(m2)?;
    let t1 = positive(t1, "temperature at station 1 must be positive")?;

    let gamma = props.gamma;
    Ok(t1 * (1.0 + (gamma - 1.0) / 2.0 * m1 * m1) / (1.0 + (gamma - 1.0) / 2.0 * m2 * m2))
}

/// Specific entropy produced between two stagnation states,
/// `ds = -R ln(pt2/pt1)`.
///
/// Zero when the stagnation pressures are equal; positive when `pt2 < pt1`.
pub fn entropy_produced(props: GasProperties, pt1: f64, pt2: f64) -> FlowResult<f64> {
    let pt1 = positive(pt1, "stagnation pressure at station 1 must be positive")?;
    let pt2 = positive(pt2, "stagnation pressure at station 2 must be positive")?;
    Ok(-props.r * (pt2 / pt1).ln())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gd_gas::{Gas, UnitSystem};

    fn air() -> GasProperties {
        GasProperties::of(Gas::Air, UnitSystem::Metric)
    }

    #[test]
    fn mach_from_pressure_ratio_textbook() {
        let m2 = mach_from_pressure_ratio(air(), 10.0, 2.0, 1.0, 0.0).unwrap();
        assert!((m2 - 2.1220079294384067).abs() < 1e-9);
    }

    #[test]
    fn mach_from_temperature_ratio_textbook() {
        let m2 = mach_from_temperature_ratio(air(), 300.0, 150.0, 1.0).unwrap();
        assert!((m2 - 2.6457513110645907).abs() < 1e-9);
    }

    #[test]
    fn pressure_from_mach_ratio_textbook() {
        let p2 = pressure_from_mach_ratio(air(), 1.0, 2.0, 10.0, 0.0).unwrap();
        assert!((p2 - 2.4192491286747444).abs() < 1e-9);
    }

    #[test]
    fn temperature_from_mach_ratio_textbook() {
        let t2 = temperature_from_mach_ratio(air(), 1.0, 2.0, 297.15).unwrap();
        assert!((t2 - 198.1).abs() < 1e-9);
    }

    #[test]
    fn forward_and_inverse_pressure_forms_agree() {
        let p2 = pressure_from_mach_ratio(air(), 0.5, 1.8, 40.0, 0.0).unwrap();
        let m2 = mach_from_pressure_ratio(air(), 40.0, p2, 0.5, 0.0).unwrap();
        assert!((m2 - 1.8).abs() < 1e-9);
    }

    #[test]
    fn entropy_produced_zero_for_equal_stagnation_pressures() {
        for pt in [0.5, 10.0, 1.0e6] {
            assert_eq!(entropy_produced(air(), pt, pt).unwrap(), 0.0);
        }
    }

    #[test]
    fn entropy_produced_textbook() {
        let ds = entropy_produced(air(), 10.0, 9.0).unwrap();
        assert!((ds - 30.238467993796142).abs() < 1e-9);
    }

    #[test]
    fn entropy_produced_matches_pressure_loss_factor() {
        // mach_from_pressure_ratio with the produced ds recovers the
        // isentropic answer despite the stagnation pressure drop.
        let ds = entropy_produced(air(), 10.0, 9.0).unwrap();
        let p2_lossy = pressure_from_mach_ratio(air(), 1.0, 2.0, 10.0, ds).unwrap();
        let p2_clean = pressure_from_mach_ratio(air(), 1.0, 2.0, 10.0, 0.0).unwrap();
        assert!((p2_lossy - p2_clean * 0.9).abs() < 1e-9);
    }

    #[test]
    fn impossible_ratios_are_rejected() {
        // Station 2 cannot be above the stagnation pressure of station 1.
        assert!(matches!(
            mach_from_pressure_ratio(air(), 10.0, 100.0, 0.0, 0.0),
            Err(FlowError::InvalidInput { .. })
        ));
        assert!(matches!(
            mach_from_temperature_ratio(air(), 300.0, 500.0, 0.0),
            Err(FlowError::InvalidInput { .. })
        ));
    }

    #[test]
    fn invalid_arguments_are_rejected() {
        assert!(mach_from_pressure_ratio(air(), -1.0, 2.0, 1.0, 0.0).is_err());
        assert!(pressure_from_mach_ratio(air(), 1.0, 2.0, 10.0, f64::NAN).is_err());
        assert!(temperature_from_mach_ratio(air(), -0.5, 2.0, 300.0).is_err());
        assert!(entropy_produced(air(), 0.0, 9.0).is_err());
    }
}
