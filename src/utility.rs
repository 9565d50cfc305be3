use tracing::{debug, trace};

use crate::{Error, Tolerance};

pub(crate) trait GeoMath {
    fn is_zero(&self) -> bool;
}

impl GeoMath for f64 {
    fn is_zero(&self) -> bool {
        self.abs() < f64::EPSILON
    }
}

/// Iterates `step` from `seed` until two successive values differ by less
/// than the tolerance epsilon. The first value returned is the first iterate
/// meeting the threshold, never the seed itself.
pub(crate) fn fixed_point<S>(solver: &'static str, seed: f64, tolerance: &Tolerance, step: S) -> Result<f64, Error>
where
    S: Fn(f64) -> f64,
{
    let eps = tolerance.epsilon();

    let mut previous = seed;
    let mut delta = f64::INFINITY;
    let mut iterations = 0;
    for iteration in 1..=tolerance.max_iterations() {
        iterations = iteration;
        let next = step(previous);
        delta = (next - previous).abs();

        if delta < eps {
            trace!(solver, iterations = iteration, delta, "converged");
            return Ok(next);
        }
        // NaN never compares below eps, stop instead of spinning to the bound
        if delta.is_nan() {
            break;
        }
        previous = next;
    }

    debug!(solver, iterations, delta, "did not converge");
    Err(Error::NoConvergence {
        solver,
        iterations,
        delta,
    })
}
