// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Phase hunting: moments of new Moon, first quarter, full Moon and last quarter.
//!
//! Lunations are numbered from the mean new Moon of 1900 January 0.76
//! ([`NEW_MOON_1900`]); lunation `k` plus a quarter fraction (0, ¼, ½, ¾)
//! identifies one phase event.
//!
//! * [`mean_phase`] extrapolates linearly with the synodic month (plus the
//!   small secular terms) to the estimate nearest a reference moment.
//! * [`true_phase`] adds the periodic terms in the Sun's and Moon's mean
//!   anomalies and the Moon's argument of latitude, accurate to a couple of
//!   minutes.
//! * [`phase_hunt`] brackets a moment between two consecutive true new Moons
//!   and returns the five events of that lunation.
//!
//! Both estimates measure time in Julian centuries of lunations,
//! `T = k / 1236.85`, so the mean and true moments of a given `k` differ
//! only by the periodic terms.
//!
//! ## References
//! * Meeus, *Astronomical Formulæ for Calculators*, ch. 32

use qtty::Days;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::angle::{dcos, dsin};
use crate::elements::{BROWN_LUNATION_BASE, NEW_MOON_1900, SYNODIC_MONTH};
use crate::instant::JulianMoment;

/// Lunations per Julian century.
const LUNATIONS_PER_CENTURY: f64 = 1_236.85;

/// The four principal phases.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum QuarterKind {
    NewMoon,
    FirstQuarter,
    FullMoon,
    LastQuarter,
}

impl QuarterKind {
    /// All four kinds in cycle order.
    pub const ALL: [QuarterKind; 4] = [
        QuarterKind::NewMoon,
        QuarterKind::FirstQuarter,
        QuarterKind::FullMoon,
        QuarterKind::LastQuarter,
    ];

    /// Fraction of the synodic cycle at which this phase occurs.
    #[inline]
    pub const fn fraction(self) -> f64 {
        match self {
            QuarterKind::NewMoon => 0.0,
            QuarterKind::FirstQuarter => 0.25,
            QuarterKind::FullMoon => 0.5,
            QuarterKind::LastQuarter => 0.75,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            QuarterKind::NewMoon => "New Moon",
            QuarterKind::FirstQuarter => "First Quarter",
            QuarterKind::FullMoon => "Full Moon",
            QuarterKind::LastQuarter => "Last Quarter",
        }
    }
}

impl fmt::Display for QuarterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A located phase event.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct QuarterEvent {
    pub kind: QuarterKind,
    pub moment: JulianMoment,
}

/// Julian centuries since 1900 January 0.5 at fractional lunation `k`.
#[inline]
fn lunation_centuries(k: f64) -> f64 {
    k / LUNATIONS_PER_CENTURY
}

/// Lunations elapsed since [`NEW_MOON_1900`], fractional.
#[inline]
fn lunations_since_1900(moment: JulianMoment) -> f64 {
    (moment - NEW_MOON_1900).value() / SYNODIC_MONTH.value()
}

/// Mean moment at fractional lunation `k`, before periodic corrections.
fn mean_moment(k: f64) -> JulianMoment {
    let t = lunation_centuries(k);
    let t2 = t * t;
    let t3 = t2 * t;
    NEW_MOON_1900
        + Days::new(
            SYNODIC_MONTH.value() * k + 0.000_117_8 * t2 - 0.000_000_155 * t3
                + 0.000_33 * dsin(166.56 + 132.87 * t - 0.009_173 * t2),
        )
}

/// Estimate the mean moment of phase `kind` nearest to `reference`.
///
/// Returns the estimate and the integer lunation number `k` it belongs to,
/// so that [`true_phase`]`(k, kind)` refines the same event.  The estimate
/// lies within half a synodic month of `reference` and ignores the periodic
/// terms, which move the true moment by up to about fifteen hours.
pub fn mean_phase(reference: JulianMoment, kind: QuarterKind) -> (JulianMoment, i64) {
    let k = (lunations_since_1900(reference) - kind.fraction()).round();
    (mean_moment(k + kind.fraction()), k as i64)
}

/// Moment of phase `kind` in lunation `k`, corrected for the periodic terms.
pub fn true_phase(k: i64, kind: QuarterKind) -> JulianMoment {
    let k = k as f64 + kind.fraction();
    let t = lunation_centuries(k);
    let t2 = t * t;
    let t3 = t2 * t;

    let pt = mean_moment(k);

    // Sun's mean anomaly.
    let m = 359.2242 + 29.105_356_08 * k - 0.000_033_3 * t2 - 0.000_003_47 * t3;
    // Moon's mean anomaly.
    let mprime = 306.0253 + 385.816_918_06 * k + 0.010_730_6 * t2 + 0.000_012_36 * t3;
    // Moon's argument of latitude.
    let f = 21.2964 + 390.670_506_46 * k - 0.001_652_8 * t2 - 0.000_002_39 * t3;

    let correction = match kind {
        QuarterKind::NewMoon | QuarterKind::FullMoon => {
            (0.1734 - 0.000_393 * t) * dsin(m) + 0.0021 * dsin(2.0 * m) - 0.4068 * dsin(mprime)
                + 0.0161 * dsin(2.0 * mprime)
                - 0.0004 * dsin(3.0 * mprime)
                + 0.0104 * dsin(2.0 * f)
                - 0.0051 * dsin(m + mprime)
                - 0.0074 * dsin(m - mprime)
                + 0.0004 * dsin(2.0 * f + m)
                - 0.0004 * dsin(2.0 * f - m)
                - 0.0006 * dsin(2.0 * f + mprime)
                + 0.0010 * dsin(2.0 * f - mprime)
                + 0.0005 * dsin(m + 2.0 * mprime)
        }
        QuarterKind::FirstQuarter | QuarterKind::LastQuarter => {
            let quarter = (0.1721 - 0.0004 * t) * dsin(m) + 0.0021 * dsin(2.0 * m)
                - 0.6280 * dsin(mprime)
                + 0.0089 * dsin(2.0 * mprime)
                - 0.0004 * dsin(3.0 * mprime)
                + 0.0079 * dsin(2.0 * f)
                - 0.0119 * dsin(m + mprime)
                - 0.0047 * dsin(m - mprime)
                + 0.0003 * dsin(2.0 * f + m)
                - 0.0004 * dsin(2.0 * f - m)
                - 0.0006 * dsin(2.0 * f + mprime)
                + 0.0021 * dsin(2.0 * f - mprime)
                + 0.0003 * dsin(m + 2.0 * mprime)
                + 0.0004 * dsin(m - 2.0 * mprime)
                - 0.0003 * dsin(2.0 * m + mprime);
            let w = 0.0028 - 0.0004 * dcos(m) + 0.0003 * dcos(mprime);
            if kind == QuarterKind::FirstQuarter {
                quarter + w
            } else {
                quarter - w
            }
        }
    };

    pt + Days::new(correction)
}

/// Find the new Moon at or before `moment`, the following quarters and the
/// next new Moon, in chronological order.
///
/// The result satisfies `events[0].moment <= moment < events[4].moment`.
pub fn phase_hunt(moment: JulianMoment) -> [QuarterEvent; 5] {
    // Lunation in progress by mean motion.  The mean boundary is within a
    // day of the true one, so at most one step realigns the bracket.
    let mut k = lunations_since_1900(moment).floor() as i64;

    if moment < true_phase(k, QuarterKind::NewMoon) {
        k -= 1;
    } else if moment >= true_phase(k + 1, QuarterKind::NewMoon) {
        k += 1;
    }

    let event = |k: i64, kind: QuarterKind| QuarterEvent {
        kind,
        moment: true_phase(k, kind),
    };
    [
        event(k, QuarterKind::NewMoon),
        event(k, QuarterKind::FirstQuarter),
        event(k, QuarterKind::FullMoon),
        event(k, QuarterKind::LastQuarter),
        event(k + 1, QuarterKind::NewMoon),
    ]
}

/// E. W. Brown's lunation number of the lunation beginning at `new_moon`.
///
/// Lunation 1 began on 1923 January 17.
pub fn brown_lunation(new_moon: JulianMoment) -> i64 {
    let elapsed = (new_moon + Days::new(7.0) - BROWN_LUNATION_BASE).value();
    (elapsed / SYNODIC_MONTH.value()).floor() as i64 + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: JulianMoment, expected: f64, tol: f64) {
        assert!(
            (actual.value() - expected).abs() < tol,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn january_2000_lunation() {
        // 2000-01-01T00:00 UTC sits between the new Moons of
        // 1999-12-07 22:32 and 2000-01-06 18:14.
        let events = phase_hunt(JulianMoment::new(2_451_544.5));
        assert_close(events[0].moment, 2_451_520.439, 0.02);
        assert_close(events[1].moment, 2_451_528.535, 0.02); // 1999-12-16 00:50
        assert_close(events[2].moment, 2_451_535.230, 0.02); // 1999-12-22 17:31
        assert_close(events[3].moment, 2_451_542.086, 0.02); // 1999-12-29 14:04
        assert_close(events[4].moment, 2_451_550.260, 0.02);
    }

    #[test]
    fn events_are_ordered_and_labelled() {
        let events = phase_hunt(JulianMoment::new(2_459_000.0));
        let kinds: Vec<_> = events.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                QuarterKind::NewMoon,
                QuarterKind::FirstQuarter,
                QuarterKind::FullMoon,
                QuarterKind::LastQuarter,
                QuarterKind::NewMoon,
            ]
        );
        for pair in events.windows(2) {
            assert!(pair[0].moment < pair[1].moment);
        }
    }

    #[test]
    fn bracket_holds_at_the_boundaries() {
        let events = phase_hunt(JulianMoment::new(2_451_544.5));
        let new_moon = events[4].moment;

        let at = phase_hunt(new_moon);
        assert_eq!(at[0].moment, new_moon);

        let just_before = phase_hunt(new_moon - Days::new(1e-4));
        assert_eq!(just_before[4].moment, new_moon);
    }

    #[test]
    fn bracket_holds_hourly_over_a_year() {
        let start = JulianMoment::new(2_457_000.0);
        for h in 0..(24 * 366) {
            let t = start + Days::new(h as f64 / 24.0);
            let events = phase_hunt(t);
            assert!(events[0].moment <= t && t < events[4].moment, "{t}");
        }
    }

    #[test]
    fn mean_phase_is_close_to_true_phase() {
        // Same k, same time argument: only the periodic terms separate them.
        for step in 0..200 {
            let reference = JulianMoment::new(2_400_000.0 + step as f64 * 500.3);
            for kind in QuarterKind::ALL {
                let (mean, k) = mean_phase(reference, kind);
                let exact = true_phase(k, kind);
                assert!((mean - exact).value().abs() < 1.0, "{kind} at {reference}");
            }
        }
    }

    #[test]
    fn mean_phase_picks_nearest_event() {
        let synodic = SYNODIC_MONTH.value();
        let new_moon = JulianMoment::new(2_451_550.26);
        for step in 0..60 {
            let reference = new_moon + Days::new(step as f64 * 0.5);
            for kind in QuarterKind::ALL {
                let (mean, _) = mean_phase(reference, kind);
                let offset = (mean - reference).value();
                assert!(
                    offset.abs() <= synodic / 2.0 + 0.01,
                    "{kind} at {reference}: offset {offset}"
                );
            }
        }
    }

    #[test]
    fn mean_phase_looks_forward_and_back() {
        let new_moon = JulianMoment::new(2_451_550.26);

        // 25 days in, the next new Moon is about 4.5 days away.
        let (next, _) = mean_phase(new_moon + Days::new(25.0), QuarterKind::NewMoon);
        assert!(((next - new_moon).value() - 29.53).abs() < 1.0, "{next}");

        // One day in, the previous last quarter is about a week back.
        let reference = new_moon + Days::new(1.0);
        let (last, _) = mean_phase(reference, QuarterKind::LastQuarter);
        let offset = (last - reference).value();
        assert!((-9.5..-7.0).contains(&offset), "offset {offset}");
    }

    #[test]
    fn brown_lunation_numbers() {
        // New Moon of 2000-01-06 opened Brown lunation 953.
        assert_eq!(brown_lunation(JulianMoment::new(2_451_550.26)), 953);
        assert_eq!(brown_lunation(JulianMoment::new(2_423_436.6)), 1);
    }

    #[test]
    fn quarter_fractions() {
        let fractions: Vec<f64> = QuarterKind::ALL.iter().map(|k| k.fraction()).collect();
        assert_eq!(fractions, vec![0.0, 0.25, 0.5, 0.75]);
        assert_eq!(QuarterKind::FullMoon.to_string(), "Full Moon");
    }
}
