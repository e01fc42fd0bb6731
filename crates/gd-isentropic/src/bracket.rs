//! Bracketed bisection for scalar monotone residuals.

use crate::error::{FlowError, FlowResult};
use gd_core::{Tolerances, nearly_equal};

/// Bisection solver configuration.
pub struct BisectionConfig {
    /// Maximum iterations
    pub max_iterations: usize,
    /// Convergence tolerance on the bracket width
    pub tol: Tolerances,
}

impl Default for BisectionConfig {
    fn default() -> Self {
        Self {
            max_iterations: 200,
            tol: Tolerances {
                abs: 1e-12,
                rel: 1e-12,
            },
        }
    }
}

/// Bisection result.
#[derive(Debug)]
pub struct BisectionResult {
    /// Root estimate
    pub root: f64,
    /// Number of iterations
    pub iterations: usize,
    /// Converged flag
    pub converged: bool,
}

/// Find a root of `f` on `[lo, hi]`.
///
/// The endpoints must bracket a sign change; `f(lo)` may be infinite, which
/// still carries a usable sign. Fails with [`FlowError::ConvergenceFailed`]
/// when the bracket is invalid or the iteration budget runs out.
pub fn bisect<F>(f: F, lo: f64, hi: f64, config: &BisectionConfig) -> FlowResult<BisectionResult>
where
    F: Fn(f64) -> f64,
{
    let mut lo = lo;
    let mut hi = hi;
    let f_lo = f(lo);
    let f_hi = f(hi);

    if f_lo == 0.0 {
        return Ok(BisectionResult {
            root: lo,
            iterations: 0,
            converged: true,
        });
    }
    if f_hi == 0.0 {
        return Ok(BisectionResult {
            root: hi,
            iterations: 0,
            converged: true,
        });
    }
    if f_lo.is_nan() || f_hi.is_nan() || f_lo.signum() == f_hi.signum() {
        return Err(FlowError::ConvergenceFailed {
            what: "bisection bracket does not enclose a sign change",
        });
    }

    let lo_sign = f_lo.signum();
    for iter in 0..config.max_iterations {
        let mid = 0.5 * (lo + hi);
        if nearly_equal(lo, hi, config.tol) {
            return Ok(BisectionResult {
                root: mid,
                iterations: iter,
                converged: true,
            });
        }

        let f_mid = f(mid);
        if f_mid == 0.0 {
            return Ok(BisectionResult {
                root: mid,
                iterations: iter,
                converged: true,
            });
        }
        if f_mid.signum() == lo_sign {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    Err(FlowError::ConvergenceFailed {
        what: "bisection iteration budget exhausted",
    })
}
