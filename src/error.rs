// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error types for the lunation crate.

/// Error type for all fallible operations in the lunation crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LunationError {
    /// Returned when the Kepler solver exhausts its iteration budget.
    #[error(
        "Kepler equation did not converge after {iterations} iterations \
         (mean anomaly {mean_anomaly}°, eccentricity {eccentricity})"
    )]
    OrbitNotConverged {
        /// Mean anomaly handed to the solver, in degrees.
        mean_anomaly: f64,
        /// Orbit eccentricity handed to the solver.
        eccentricity: f64,
        /// Number of Newton steps taken before giving up.
        iterations: usize,
    },

    /// Returned when an eccentricity is outside `[0, 1)` or not finite.
    #[error("eccentricity must lie in [0, 1), got {eccentricity}")]
    InvalidEccentricity {
        /// The rejected eccentricity.
        eccentricity: f64,
    },

    /// Returned when a phase table is requested for zero or negative years.
    #[error("year count must be >= 1, got {years}")]
    InvalidYearCount {
        /// The rejected year count.
        years: i32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_orbit_not_converged() {
        let e = LunationError::OrbitNotConverged {
            mean_anomaly: 1.5,
            eccentricity: 0.9,
            iterations: 30,
        };
        assert_eq!(
            e.to_string(),
            "Kepler equation did not converge after 30 iterations \
             (mean anomaly 1.5°, eccentricity 0.9)"
        );
    }

    #[test]
    fn error_invalid_eccentricity() {
        let e = LunationError::InvalidEccentricity { eccentricity: 1.0 };
        assert_eq!(e.to_string(), "eccentricity must lie in [0, 1), got 1");
    }

    #[test]
    fn error_invalid_year_count() {
        let e = LunationError::InvalidYearCount { years: -2 };
        assert_eq!(e.to_string(), "year count must be >= 1, got -2");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<LunationError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<LunationError>();
    }
}
