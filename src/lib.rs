// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Lunation
//!
//! Moon phase computation from classical orbital mechanics: the Sun's and
//! Moon's positions from Kepler's equation and the principal lunar
//! perturbations, the moments of the four principal phases, and a compact
//! per-day phase table for display devices.
//!
//! # Core types
//!
//! - [`JulianMoment`]: a continuous Julian date (days, UTC-based).
//! - [`JulianDay`]: an integer Julian day number, the table index.
//! - [`CivilDate`] / [`ClockTime`]: proleptic Gregorian date and time of day.
//! - [`OrbitalElements`]: the 1980.0 element set driving the model.
//! - [`PhaseSample`]: phase, illumination, age and geometry at one moment.
//! - [`QuarterEvent`]: a located new Moon, quarter or full Moon.
//! - [`PhaseTable`]: `(bucket, waxing)` per day from a fixed epoch.
//!
//! # Example
//!
//! ```
//! use lunation::{phase_at, phase_hunt, JulianMoment, QuarterKind};
//!
//! let t = JulianMoment::new(2_451_564.694); // full Moon, 2000-01-21
//! let sample = phase_at(t).unwrap();
//! assert!((sample.phase - 0.5).abs() < 0.01);
//!
//! let events = phase_hunt(t);
//! assert_eq!(events[2].kind, QuarterKind::FullMoon);
//! ```

mod angle;
mod calendar;
mod config;
mod elements;
mod error;
mod hunt;
mod instant;
mod kepler;
mod phase;
mod table;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use angle::{dcos, dsin, fix_angle};
pub use calendar::{
    civil_parts, from_julian_day, split_moment, to_julian_day, CivilDate, ClockTime, JulianDay,
};
pub use config::{TableConfig, DAYS_PER_YEAR, DEFAULT_YEARS};
pub use elements::{
    Degree, Kilometer, OrbitalElements, BROWN_LUNATION_BASE, ELEMENTS, NEW_MOON_1900,
    SYNODIC_MONTH, TROPICAL_YEAR,
};
pub use error::LunationError;
pub use hunt::{brown_lunation, mean_phase, phase_hunt, true_phase, QuarterEvent, QuarterKind};
pub use instant::JulianMoment;
pub use kepler::{solve_kepler, solve_kepler_bounded, true_anomaly};
pub use phase::{phase_at, phase_with, PhaseSample};
pub use table::{generate, phase_bucket, PhaseTable, PhaseTableEntry, PHASE_STEPS};
