// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Degree-based angle helpers.
//!
//! Every orbital longitude in this crate is carried in degrees and reduced
//! with [`fix_angle`] before it reaches a trigonometric function, so that
//! repeated additions over decades never grow the argument unboundedly.

use crate::elements::Degree;

/// Reduce an angle to the principal range `[0, 360)`.
#[inline]
pub fn fix_angle(a: Degree) -> Degree {
    let r = a.rem_euclid(360.0);
    // rem_euclid may round a tiny negative input up to exactly 360.
    if r >= 360.0 {
        0.0
    } else {
        r
    }
}

/// Sine of an angle given in degrees.
#[inline]
pub fn dsin(a: Degree) -> f64 {
    fix_angle(a).to_radians().sin()
}

/// Cosine of an angle given in degrees.
#[inline]
pub fn dcos(a: Degree) -> f64 {
    fix_angle(a).to_radians().cos()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fix_angle_range() {
        assert_eq!(fix_angle(0.0), 0.0);
        assert_eq!(fix_angle(360.0), 0.0);
        assert_eq!(fix_angle(725.0), 5.0);
        assert_eq!(fix_angle(-90.0), 270.0);
        assert!(fix_angle(-1e-17) < 360.0);
        for a in [-1e6, -359.999, 1e-12, 359.9999999, 4.2e7] {
            let r = fix_angle(a);
            assert!((0.0..360.0).contains(&r), "{a} -> {r}");
        }
    }

    #[test]
    fn degree_trig() {
        assert!((dsin(30.0) - 0.5).abs() < 1e-12);
        assert!((dcos(60.0) - 0.5).abs() < 1e-12);
        assert!((dsin(390.0) - 0.5).abs() < 1e-12);
        assert!((dcos(-300.0) - 0.5).abs() < 1e-12);
    }
}
