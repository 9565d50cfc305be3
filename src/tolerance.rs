use crate::{constants::{DEFAULT_EPS, DEFAULT_MAX_ITERATIONS}, Error};

/// Convergence settings of the iterative latitude solvers.
///
/// A solver stops as soon as two successive estimates differ by less than
/// `epsilon`, and gives up with [`Error::NoConvergence`] after
/// `max_iterations` steps.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawTolerance"))]
pub struct Tolerance {
    pub(crate) epsilon: f64,
    pub(crate) max_iterations: usize,
}

impl Tolerance {
    /// Tries to create a solver configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTolerance`] if `epsilon` is not a finite
    /// positive number or if `max_iterations` is zero.
    ///
    /// # Usage
    ///
    /// ```
    /// use lambert_wgs84::Tolerance;
    ///
    /// let tolerance = Tolerance::new(1e-9, 50).unwrap();
    /// assert_eq!(tolerance.epsilon(), 1e-9);
    /// assert_eq!(tolerance.max_iterations(), 50);
    ///
    /// assert!(Tolerance::new(0.0, 50).is_err());
    /// assert!(Tolerance::new(f64::NAN, 50).is_err());
    /// assert!(Tolerance::new(1e-9, 0).is_err());
    /// ```
    pub fn new(epsilon: f64, max_iterations: usize) -> Result<Tolerance, Error> {
        if !epsilon.is_finite() || epsilon <= 0. {
            return Err(Error::InvalidTolerance(format!("epsilon {epsilon} must be a finite positive number")));
        }
        if max_iterations == 0 {
            return Err(Error::InvalidTolerance("at least one iteration is required".to_string()));
        }

        Ok(Tolerance { epsilon, max_iterations })
    }

    /// Same settings with another convergence threshold.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTolerance`] if `epsilon` is not a finite
    /// positive number.
    pub fn with_epsilon(self, epsilon: f64) -> Result<Tolerance, Error> {
        Tolerance::new(epsilon, self.max_iterations)
    }

    #[inline]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    #[inline]
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPS,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

/// Unchecked form of [`Tolerance`] read by serde before validation.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawTolerance {
    epsilon: f64,
    max_iterations: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawTolerance> for Tolerance {
    type Error = Error;

    fn try_from(raw: RawTolerance) -> Result<Self, Self::Error> {
        Tolerance::new(raw.epsilon, raw.max_iterations)
    }
}
