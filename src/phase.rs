// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Instantaneous lunar phase from orbital mechanics.
//!
//! The Sun's ecliptic longitude comes from Kepler's equation on Earth's
//! orbit.  The Moon's longitude starts from its mean motion and receives the
//! classical perturbations in order:
//!
//! | Term | Amplitude |
//! |------|-----------|
//! | evection | 1.2739° |
//! | annual equation | 0.1858° |
//! | third correction (Sun's eccentricity) | 0.37° |
//! | equation of the centre | Kepler solution, e = 0.0549 |
//! | variation | 0.6583° |
//! | node correction | 0.16° |
//!
//! The equation of the centre is taken from the Kepler solution rather than
//! its two-term series `6.2886°·sin M + 0.214°·sin 2M`, which it reproduces
//! to within a few thousandths of a degree.
//!
//! The phase is the elongation `λ_moon − λ_sun` normalised into `[0, 1)`:
//! 0 is new Moon, 0.5 full Moon.
//!
//! ## References
//! * Duffett-Smith, *Practical Astronomy with your Calculator*, 3rd ed., §65–67

use qtty::Days;

use crate::angle::{dcos, dsin, fix_angle};
use crate::elements::{Degree, Kilometer, OrbitalElements, ELEMENTS, TROPICAL_YEAR};
use crate::error::LunationError;
use crate::instant::JulianMoment;
use crate::kepler::{solve_kepler, true_anomaly};

/// Moon's mean daily motion in longitude.
const MOON_MEAN_MOTION: Degree = 13.176_396_6;
/// Daily motion of the Moon's perigee.
const PERIGEE_MOTION: Degree = 0.111_404_1;
/// Daily regression of the Moon's ascending node.
const NODE_REGRESSION: Degree = 0.052_953_9;

/// State of the Sun–Earth–Moon system at one moment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseSample {
    /// Position in the synodic cycle, `0 ≤ phase < 1`.
    pub phase: f64,
    /// Fraction of the disc illuminated, `(1 − cos(elongation)) / 2`.
    pub illuminated_fraction: f64,
    /// Time elapsed since the last new Moon.
    pub age: Days,
    pub moon_distance: Kilometer,
    pub moon_angular_diameter: Degree,
    pub moon_parallax: Degree,
    pub moon_longitude: Degree,
    pub moon_latitude: Degree,
    pub sun_distance: Kilometer,
    pub sun_angular_diameter: Degree,
    pub sun_longitude: Degree,
}

impl PhaseSample {
    /// Phase expressed as a whole percentage of the cycle, truncated.
    #[inline]
    pub fn percent(&self) -> u8 {
        (self.phase * 100.0) as u8
    }
}

/// Evaluate the phase model at `moment` with the standard [`ELEMENTS`].
#[inline]
pub fn phase_at(moment: JulianMoment) -> Result<PhaseSample, LunationError> {
    phase_with(&ELEMENTS, moment)
}

/// Evaluate the phase model at `moment` with an explicit element set.
///
/// Fails only if the Kepler solver does not converge for the supplied
/// eccentricities.
pub fn phase_with(
    el: &OrbitalElements,
    moment: JulianMoment,
) -> Result<PhaseSample, LunationError> {
    let day = (moment - el.epoch).value();

    // ── Sun ───────────────────────────────────────────────────────────
    let n = fix_angle(360.0 / TROPICAL_YEAR.value() * day);
    let m = fix_angle(n + el.sun_longitude_at_epoch - el.sun_longitude_at_perigee);
    let ec = solve_kepler(m, el.earth_eccentricity)?;
    let sun_anomaly = true_anomaly(ec, el.earth_eccentricity);
    let sun_longitude = fix_angle(sun_anomaly + el.sun_longitude_at_perigee);

    let distance_factor = (1.0 + el.earth_eccentricity * dcos(sun_anomaly))
        / (1.0 - el.earth_eccentricity * el.earth_eccentricity);
    let sun_distance = el.sun_semi_major_axis / distance_factor;
    let sun_angular_diameter = distance_factor * el.sun_angular_size;

    // ── Moon ──────────────────────────────────────────────────────────
    let ml = fix_angle(MOON_MEAN_MOTION * day + el.moon_mean_longitude);
    let mm = fix_angle(ml - PERIGEE_MOTION * day - el.moon_perigee_longitude);
    let mn = fix_angle(el.moon_node_longitude - NODE_REGRESSION * day);

    let evection = 1.2739 * dsin(2.0 * (ml - sun_longitude) - mm);
    let annual_eq = 0.1858 * dsin(m);
    let a3 = 0.37 * dsin(m);

    // Corrected mean anomaly, then the exact equation of the centre from
    // Kepler's equation on the Moon's ellipse.
    let moon_mean_anomaly = fix_angle(mm + evection - annual_eq - a3);
    let moon_true_anomaly = fix_angle(true_anomaly(
        solve_kepler(moon_mean_anomaly, el.moon_eccentricity)?,
        el.moon_eccentricity,
    ));
    let centre = fix_angle(moon_true_anomaly - moon_mean_anomaly + 180.0) - 180.0;

    let corrected_longitude = ml + evection + centre - annual_eq;
    let variation = 0.6583 * dsin(2.0 * (corrected_longitude - sun_longitude));
    let true_longitude = fix_angle(corrected_longitude + variation);

    let node = mn - 0.16 * dsin(m);
    let y = dsin(true_longitude - node) * dcos(el.moon_inclination);
    let x = dcos(true_longitude - node);
    let moon_longitude = fix_angle(y.atan2(x).to_degrees() + node);
    let moon_latitude = (dsin(true_longitude - node) * dsin(el.moon_inclination))
        .asin()
        .to_degrees();

    // ── Phase ─────────────────────────────────────────────────────────
    let elongation = fix_angle(true_longitude - sun_longitude);
    let phase = elongation / 360.0;
    let illuminated_fraction = (1.0 - dcos(elongation)) / 2.0;
    let age = Days::new(el.synodic_month.value() * phase);

    let moon_distance = el.moon_semi_major_axis
        * (1.0 - el.moon_eccentricity * el.moon_eccentricity)
        / (1.0 + el.moon_eccentricity * dcos(moon_true_anomaly));
    let distance_fraction = moon_distance / el.moon_semi_major_axis;

    Ok(PhaseSample {
        phase,
        illuminated_fraction,
        age,
        moon_distance,
        moon_angular_diameter: el.moon_angular_size / distance_fraction,
        moon_parallax: el.moon_parallax / distance_fraction,
        moon_longitude,
        moon_latitude,
        sun_distance,
        sun_angular_diameter,
        sun_longitude,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 2000-01-06 18:14 UTC, new Moon.
    const NEW_MOON: JulianMoment = JulianMoment::new(2_451_550.26);
    /// 2000-01-21 04:40 UTC, full Moon (total lunar eclipse).
    const FULL_MOON: JulianMoment = JulianMoment::new(2_451_564.694);

    #[test]
    fn new_moon_phase_near_zero() {
        let s = phase_at(NEW_MOON).unwrap();
        let wrapped = s.phase.min(1.0 - s.phase);
        assert!(wrapped < 0.01, "phase {}", s.phase);
        assert!(s.illuminated_fraction < 0.005);
    }

    #[test]
    fn full_moon_phase_near_half() {
        let s = phase_at(FULL_MOON).unwrap();
        assert!((s.phase - 0.5).abs() < 0.01, "phase {}", s.phase);
        assert!(s.illuminated_fraction > 0.995);
        assert!((s.age.value() - 14.77).abs() < 0.4);
        // An eclipsed Moon sits on the ecliptic.
        assert!(s.moon_latitude.abs() < 1.0, "latitude {}", s.moon_latitude);
    }

    #[test]
    fn phase_is_in_unit_range_over_decades() {
        let mut t = JulianMoment::new(2_430_000.0);
        while t.value() < 2_480_000.0 {
            let s = phase_at(t).unwrap();
            assert!((0.0..1.0).contains(&s.phase), "{t}: {}", s.phase);
            assert!((0.0..360.0).contains(&s.moon_longitude));
            assert!((0.0..360.0).contains(&s.sun_longitude));
            t += Days::new(0.737);
        }
    }

    #[test]
    fn distances_and_diameters_are_physical() {
        for k in 0..60 {
            let s = phase_at(JulianMoment::J2000 + Days::new(k as f64 * 1.9)).unwrap();
            assert!((356_000.0..407_000.0).contains(&s.moon_distance));
            assert!((0.48..0.57).contains(&s.moon_angular_diameter));
            assert!((1.46e8..1.53e8).contains(&s.sun_distance));
            assert!((0.52..0.55).contains(&s.sun_angular_diameter));
            assert!((0.89..1.02).contains(&s.moon_parallax));
            assert!(s.moon_latitude.abs() <= ELEMENTS.moon_inclination + 1e-9);
        }
    }

    #[test]
    fn sun_longitude_at_march_equinox() {
        // 2000-03-20 07:35 UTC.
        let s = phase_at(JulianMoment::new(2_451_623.816)).unwrap();
        let off = fix_angle(s.sun_longitude + 180.0) - 180.0;
        assert!(off.abs() < 0.1, "sun longitude {}", s.sun_longitude);
    }

    #[test]
    fn age_tracks_phase() {
        let s = phase_at(JulianMoment::new(2_455_000.3)).unwrap();
        assert!((s.age.value() - s.phase * ELEMENTS.synodic_month.value()).abs() < 1e-9);
        assert_eq!(u32::from(s.percent()), (s.phase * 100.0) as u32);
    }

    #[test]
    fn deterministic() {
        let t = JulianMoment::new(2_460_000.125);
        assert_eq!(phase_at(t).unwrap(), phase_at(t).unwrap());
    }

    #[test]
    fn bad_elements_surface_the_fault() {
        let el = OrbitalElements {
            earth_eccentricity: 1.2,
            ..ELEMENTS
        };
        assert!(phase_with(&el, JulianMoment::J2000).is_err());
    }
}
