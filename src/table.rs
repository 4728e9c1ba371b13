// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Per-day phase lookup table.
//!
//! The generator samples the phase model once per civil day, at noon UTC
//! (where the Julian day number and the Julian date coincide), and reduces
//! each sample to a 15-step bucket plus a waxing flag:
//!
//! * `bucket = round(phase · 14)`, so both 0 and 14 denote new Moon;
//! * `waxing = lit(day) > lit(day − 1)` on the continuous illuminated
//!   fraction, never on buckets.  The flag turns false on the first day past
//!   full Moon and true again on the first day past new Moon, once each
//!   per lunation.
//!
//! Each day also keeps the whole percentage of the cycle it was sampled at,
//! for annotated listings.
//!
//! The table starts one day before "today" so that it is already valid
//! right after the UTC midnight rollover.  Consumers index it with
//! `day − epoch` and treat any index outside `[0, len)` as unavailable.

use std::fmt;

use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::calendar::JulianDay;
use crate::config::TableConfig;
use crate::error::LunationError;
use crate::phase::{phase_at, PhaseSample};

/// Number of buckets minus one; buckets run `0..=PHASE_STEPS`.
pub const PHASE_STEPS: u8 = 14;

/// One day of the phase table.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PhaseTableEntry {
    /// Days since the table epoch.
    pub day_offset: u32,
    /// Phase bucket, `0..=14`.
    pub phase_bucket: u8,
    pub waxing: bool,
}

/// Bucket of a continuous phase: nearest step, halves rounded away from zero.
#[inline]
pub fn phase_bucket(phase: f64) -> u8 {
    (phase * PHASE_STEPS as f64).round().clamp(0.0, PHASE_STEPS as f64) as u8
}

/// A generated phase table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PhaseTable {
    epoch: JulianDay,
    entries: Vec<PhaseTableEntry>,
    /// Whole percent of the cycle per entry, see [`PhaseSample::percent`].
    percents: Vec<u8>,
}

impl PhaseTable {
    /// Julian day of entry 0.
    pub fn epoch(&self) -> JulianDay {
        self.epoch
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[PhaseTableEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PhaseTableEntry> {
        self.entries.iter()
    }

    /// Entries paired with the whole percent of the cycle they were sampled at.
    pub fn rows(&self) -> impl Iterator<Item = (&PhaseTableEntry, u8)> + '_ {
        self.entries.iter().zip(self.percents.iter().copied())
    }

    /// Julian day described by `entry`.
    pub fn day_of(&self, entry: &PhaseTableEntry) -> JulianDay {
        self.epoch + entry.day_offset as i64
    }

    /// Entry for `day`, or `None` if the table does not cover it.
    pub fn lookup(&self, day: JulianDay) -> Option<&PhaseTableEntry> {
        let index = usize::try_from(day - self.epoch).ok()?;
        self.entries.get(index)
    }
}

impl<'a> IntoIterator for &'a PhaseTable {
    type Item = &'a PhaseTableEntry;
    type IntoIter = std::slice::Iter<'a, PhaseTableEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl fmt::Display for PhaseTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "phase table: epoch {} ({}), {} days",
            self.epoch,
            self.epoch.to_civil(),
            self.len()
        )
    }
}

/// Sample for table day `day`, taken at its noon.
#[inline]
fn sample_day(day: JulianDay) -> Result<PhaseSample, LunationError> {
    phase_at(day.to_moment())
}

/// Generate the phase table described by `config`.
///
/// Fails fast on an invalid year count, and aborts with
/// [`LunationError::OrbitNotConverged`] if any day's orbit solution fails.
pub fn generate(config: &TableConfig) -> Result<PhaseTable, LunationError> {
    config.validate()?;

    let epoch = JulianDay::from_utc(config.start()) - 1;
    let len = config.len();
    debug!(epoch = %epoch, date = %epoch.to_civil(), len, "generating phase table");

    let mut previous = sample_day(epoch - 1)?.illuminated_fraction;
    let mut entries = Vec::with_capacity(len);
    let mut percents = Vec::with_capacity(len);
    for offset in 0..len {
        let sample = sample_day(epoch + offset as i64)?;
        entries.push(PhaseTableEntry {
            day_offset: offset as u32,
            phase_bucket: phase_bucket(sample.phase),
            waxing: sample.illuminated_fraction > previous,
        });
        percents.push(sample.percent());
        previous = sample.illuminated_fraction;
    }

    debug!(entries = entries.len(), "phase table complete");
    Ok(PhaseTable {
        epoch,
        entries,
        percents,
    })
}
