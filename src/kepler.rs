// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Kepler's equation for elliptical orbits.
//!
//! Solves `E − e·sin(E) = M` for the eccentric anomaly `E` with
//! Newton–Raphson, starting from `E₀ = M`.  Angles enter and leave in
//! degrees; the iteration itself runs in radians.
//!
//! The loop is bounded: if the Newton step has not dropped below
//! [`TOLERANCE`] after `max_iterations` steps the solver reports
//! [`LunationError::OrbitNotConverged`] instead of returning a wrong anomaly.
//! For the Earth and Moon (e < 0.06) convergence takes three or four steps.

use tracing::{trace, warn};

use crate::elements::Degree;
use crate::error::LunationError;

/// Convergence threshold on the Newton step, in degrees.
pub const TOLERANCE: Degree = 1e-6;

/// Default iteration cap.
pub const MAX_ITERATIONS: usize = 30;

/// Solve Kepler's equation with the default iteration cap.
///
/// ```
/// use lunation::solve_kepler;
///
/// let e = solve_kepler(0.0, 0.5).unwrap();
/// assert_eq!(e, 0.0);
/// ```
#[inline]
pub fn solve_kepler(mean_anomaly: Degree, eccentricity: f64) -> Result<Degree, LunationError> {
    solve_kepler_bounded(mean_anomaly, eccentricity, MAX_ITERATIONS)
}

/// Solve Kepler's equation, giving up after `max_iterations` Newton steps.
pub fn solve_kepler_bounded(
    mean_anomaly: Degree,
    eccentricity: f64,
    max_iterations: usize,
) -> Result<Degree, LunationError> {
    if !eccentricity.is_finite() || !(0.0..1.0).contains(&eccentricity) {
        return Err(LunationError::InvalidEccentricity { eccentricity });
    }

    let m = mean_anomaly.to_radians();
    let tolerance = TOLERANCE.to_radians();
    let mut e = m;

    for iteration in 1..=max_iterations {
        let residual = e - eccentricity * e.sin() - m;
        let step = residual / (1.0 - eccentricity * e.cos());
        e -= step;
        if step.abs() < tolerance {
            trace!(iteration, mean_anomaly, eccentricity, "kepler converged");
            // Offsetting the input keeps the result bit-exact when no
            // correction was needed (M = 0, or e = 0).
            return Ok(mean_anomaly + (e - m).to_degrees());
        }
    }

    warn!(
        mean_anomaly,
        eccentricity, max_iterations, "kepler iteration cap reached"
    );
    Err(LunationError::OrbitNotConverged {
        mean_anomaly,
        eccentricity,
        iterations: max_iterations,
    })
}

/// True anomaly from the eccentric anomaly: `tan(ν/2) = √((1+e)/(1−e)) · tan(E/2)`.
#[inline]
pub fn true_anomaly(eccentric_anomaly: Degree, eccentricity: f64) -> Degree {
    let half = ((1.0 + eccentricity) / (1.0 - eccentricity)).sqrt()
        * (eccentric_anomaly.to_radians() / 2.0).tan();
    2.0 * half.atan().to_degrees()
}
