// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Orbital elements of the Sun's apparent orbit and of the Moon's orbit.
//!
//! Elements are referred to the epoch 1980 January 0.0 and are the classic
//! low-precision set of Duffett-Smith's *Practical Astronomy with your
//! Calculator*.  They are plain `const` data, shared read-only by the phase
//! calculator; nothing in the crate mutates them.

use qtty::Days;

use crate::instant::JulianMoment;

/// Angle in degrees
pub type Degree = f64;
/// Distance in kilometres
pub type Kilometer = f64;

/// Constant set driving the phase model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    // ── Sun's apparent orbit ──────────────────────────────────────────
    /// Reference epoch of all elements (1980 January 0.0).
    pub epoch: JulianMoment,
    /// Ecliptic longitude of the Sun at epoch.
    pub sun_longitude_at_epoch: Degree,
    /// Ecliptic longitude of the Sun at perigee.
    pub sun_longitude_at_perigee: Degree,
    /// Eccentricity of Earth's orbit.
    pub earth_eccentricity: f64,
    /// Semi-major axis of Earth's orbit.
    pub sun_semi_major_axis: Kilometer,
    /// Sun's angular size at semi-major axis distance.
    pub sun_angular_size: Degree,

    // ── Moon's orbit ──────────────────────────────────────────────────
    /// Moon's mean longitude at epoch.
    pub moon_mean_longitude: Degree,
    /// Mean longitude of the perigee at epoch.
    pub moon_perigee_longitude: Degree,
    /// Mean longitude of the ascending node at epoch.
    pub moon_node_longitude: Degree,
    /// Inclination of the Moon's orbit.
    pub moon_inclination: Degree,
    /// Eccentricity of the Moon's orbit.
    pub moon_eccentricity: f64,
    /// Moon's angular size at semi-major axis distance.
    pub moon_angular_size: Degree,
    /// Semi-major axis of the Moon's orbit.
    pub moon_semi_major_axis: Kilometer,
    /// Parallax at semi-major axis distance.
    pub moon_parallax: Degree,
    /// Mean synodic month, new Moon to new Moon.
    pub synodic_month: Days,

    // ── Earth ─────────────────────────────────────────────────────────
    /// Equatorial radius of the Earth.
    pub earth_radius: Kilometer,
}

/// The 1980.0 element set.
pub const ELEMENTS: OrbitalElements = OrbitalElements {
    epoch: JulianMoment::new(2_444_238.5),
    sun_longitude_at_epoch: 278.833540,
    sun_longitude_at_perigee: 282.596403,
    earth_eccentricity: 0.016718,
    sun_semi_major_axis: 1.495985e8,
    sun_angular_size: 0.533128,

    moon_mean_longitude: 64.975464,
    moon_perigee_longitude: 349.383063,
    moon_node_longitude: 151.950429,
    moon_inclination: 5.145396,
    moon_eccentricity: 0.054900,
    moon_angular_size: 0.5181,
    moon_semi_major_axis: 384_401.0,
    moon_parallax: 0.9507,
    synodic_month: SYNODIC_MONTH,

    earth_radius: 6_378.16,
};

/// Mean synodic month.
pub const SYNODIC_MONTH: Days = Days::new(29.530_588_68);

/// Length of the tropical year used for the Sun's mean motion.
pub const TROPICAL_YEAR: Days = Days::new(365.2422);

/// Mean new Moon of lunation 0 in the phase-hunting series (1900 January 0.76).
pub const NEW_MOON_1900: JulianMoment = JulianMoment::new(2_415_020.759_33);

/// Base date of E. W. Brown's numbered series of lunations (1923 January 16).
pub const BROWN_LUNATION_BASE: JulianMoment = JulianMoment::new(2_423_436.0);

impl Default for OrbitalElements {
    fn default() -> Self {
        ELEMENTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eccentricities_are_elliptical() {
        assert!((0.0..1.0).contains(&ELEMENTS.earth_eccentricity));
        assert!((0.0..1.0).contains(&ELEMENTS.moon_eccentricity));
    }

    #[test]
    fn epoch_is_1980_january_0() {
        assert_eq!(ELEMENTS.epoch.value(), 2_444_238.5);
        assert_eq!(OrbitalElements::default(), ELEMENTS);
    }
}
