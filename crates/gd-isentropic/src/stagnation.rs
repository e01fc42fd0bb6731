//! Stagnation relations at a single station.
//!
//! All ratios are static-to-stagnation (`p/pt`, `T/Tt`, `rho/rho_t`): they
//! equal 1 at `M = 0` and decrease strictly with Mach number.

use crate::error::{FlowError, FlowResult};
use gd_core::{ensure_finite, ensure_non_negative, ensure_positive};
use gd_gas::GasProperties;

fn invalid(what: &'static str) -> impl FnOnce(gd_core::CoreError) -> FlowError {
    move |_| FlowError::InvalidInput { what }
}

/// Local speed of sound, `a = sqrt(gamma R T)`.
///
/// # Example
///
/// ```
/// use gd_gas::{Gas, GasProperties, UnitSystem};
///
/// let air = GasProperties::of(Gas::Air, UnitSystem::Metric);
/// let a = gd_isentropic::sonic_velocity(air, 500.0).unwrap();
/// assert!((a - 448.2186966202994).abs() < 1e-9);
/// ```
pub fn sonic_velocity(props: GasProperties, t: f64) -> FlowResult<f64> {
    let t = ensure_positive(t, "temperature").map_err(invalid("temperature must be positive"))?;
    Ok((props.gamma * props.r * t).sqrt())
}

/// Solve the stagnation-pressure relation for whichever quantity is missing.
///
/// `pt/p = (1 + (gamma-1)/2 M^2)^(gamma/(gamma-1))`
///
/// Exactly two of `(pt, p, mach)` must be supplied; the third is returned.
/// Supplying all three is [`FlowError::AmbiguousInput`], fewer than two is
/// [`FlowError::InsufficientInput`].
pub fn stagnation_pressure(
    props: GasProperties,
    pt: Option<f64>,
    p: Option<f64>,
    mach: Option<f64>,
) -> FlowResult<f64> {
    let gamma = props.gamma;
    match (pt, p, mach) {
        (None, Some(p), Some(m)) => {
            let p = ensure_positive(p, "p").map_err(invalid("pressure must be positive"))?;
            let m = ensure_non_negative(m, "mach")
                .map_err(invalid("Mach number must be non-negative"))?;
            Ok(p * (1.0 + (gamma - 1.0) / 2.0 * m * m).powf(gamma / (gamma - 1.0)))
        }
        (Some(pt), None, Some(m)) => {
            let pt = ensure_positive(pt, "pt")
                .map_err(invalid("stagnation pressure must be positive"))?;
            let m = ensure_non_negative(m, "mach")
                .map_err(invalid("Mach number must be non-negative"))?;
            Ok(pt / (1.0 + (gamma - 1.0) / 2.0 * m * m).powf(gamma / (gamma - 1.0)))
        }
        (Some(pt), Some(p), None) => {
            let pt = ensure_positive(pt, "pt")
                .map_err(invalid("stagnation pressure must be positive"))?;
            let p = ensure_positive(p, "p").map_err(invalid("pressure must be positive"))?;
            if pt < p {
                return Err(FlowError::InvalidInput {
                    what: "stagnation pressure must be at least the static pressure",
                });
            }
            Ok((((pt / p).powf((gamma - 1.0) / gamma) - 1.0) * 2.0 / (gamma - 1.0)).sqrt())
        }
        (Some(_), Some(_), Some(_)) => Err(FlowError::AmbiguousInput {
            relation: "stagnation_pressure",
        }),
        _ => Err(FlowError::InsufficientInput {
            relation: "stagnation_pressure",
        }),
    }
}

/// Solve the stagnation-temperature relation for whichever quantity is
/// missing.
///
/// `Tt/T = 1 + (gamma-1)/2 M^2`
///
/// Same two-of-three arity contract as [`stagnation_pressure`].
pub fn stagnation_temperature(
    props: GasProperties,
    tt: Option<f64>,
    t: Option<f64>,
    mach: Option<f64>,
) -> FlowResult<f64> {
    let gamma = props.gamma;
    match (tt, t, mach) {
        (None, Some(t), Some(m)) => {
            let t = ensure_positive(t, "t").map_err(invalid("temperature must be positive"))?;
            let m = ensure_non_negative(m, "mach")
                .map_err(invalid("Mach number must be non-negative"))?;
            Ok(t * (1.0 + (gamma - 1.0) / 2.0 * m * m))
        }
        (Some(tt), None, Some(m)) => {
            let tt = ensure_positive(tt, "tt")
                .map_err(invalid("stagnation temperature must be positive"))?;
            let m = ensure_non_negative(m, "mach")
                .map_err(invalid("Mach number must be non-negative"))?;
            Ok(tt / (1.0 + (gamma - 1.0) / 2.0 * m * m))
        }
        (Some(tt), Some(t), None) => {
            let tt = ensure_positive(tt, "tt")
                .map_err(invalid("stagnation temperature must be positive"))?;
            let t = ensure_positive(t, "t").map_err(invalid("temperature must be positive"))?;
            if tt < t {
                return Err(FlowError::InvalidInput {
                    what: "stagnation temperature must be at least the static temperature",
                });
            }
            Ok(((tt / t - 1.0) * 2.0 / (gamma - 1.0)).sqrt())
        }
        (Some(_), Some(_), Some(_)) => Err(FlowError::AmbiguousInput {
            relation: "stagnation_temperature",
        }),
        _ => Err(FlowError::InsufficientInput {
            relation: "stagnation_temperature",
        }),
    }
}

/// Static-to-stagnation pressure ratio `p/pt` at a Mach number.
pub fn stagnation_pressure_ratio(props: GasProperties, mach: f64) -> FlowResult<f64> {
    let m = ensure_non_negative(mach, "mach")
        .map_err(invalid("Mach number must be non-negative"))?;
    let gamma = props.gamma;
    let denom = 1.0 + (gamma - 1.0) / 2.0 * m * m;
    Ok((1.0 / denom).powf(gamma / (gamma - 1.0)))
}

/// Static-to-stagnation temperature ratio `T/Tt` at a Mach number.
pub fn stagnation_temperature_ratio(props: GasProperties, mach: f64) -> FlowResult<f64> {
    let m = ensure_non_negative(mach, "mach")
        .map_err(invalid("Mach number must be non-negative"))?;
    Ok(1.0 / (1.0 + (props.gamma - 1.0) / 2.0 * m * m))
}

/// Static-to-stagnation density ratio `rho/rho_t` at a Mach number,
/// `(T/Tt)^(1/(gamma-1))`.
pub fn stagnation_density_ratio(props: GasProperties, mach: f64) -> FlowResult<f64> {
    let t_ratio = stagnation_temperature_ratio(props, mach)?;
    Ok(t_ratio.powf(1.0 / (props.gamma - 1.0)))
}

/// Validate an entropy-change argument shared by the two-station relations.
pub(crate) fn ensure_entropy(ds: f64) -> FlowResult<f64> {
    ensure_finite(ds, "ds").map_err(|_| FlowError::InvalidInput {
        what: "entropy change must be finite",
    })
}
