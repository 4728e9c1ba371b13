// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Configuration for phase table generation.

use chrono::{DateTime, Utc};

use crate::error::LunationError;

/// Number of years covered when none is given.
pub const DEFAULT_YEARS: i32 = 10;

/// Days per table year; leap days are not counted.
pub const DAYS_PER_YEAR: usize = 365;

/// Configuration for a phase table run.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use lunation::TableConfig;
///
/// let start = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
/// let config = TableConfig::new(start).with_years(2);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.len(), 730);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TableConfig {
    /// The instant treated as "today".
    start: DateTime<Utc>,
    /// Years to cover, at 365 days each.
    years: i32,
}

impl TableConfig {
    /// Creates a configuration starting at `start`, covering [`DEFAULT_YEARS`].
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            start,
            years: DEFAULT_YEARS,
        }
    }

    /// Creates a configuration starting now.
    pub fn now() -> Self {
        Self::new(Utc::now())
    }

    /// Sets the number of years to cover.
    pub fn with_years(mut self, years: i32) -> Self {
        self.years = years;
        self
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn years(&self) -> i32 {
        self.years
    }

    /// Number of table entries, `365 · years`; zero for an invalid count.
    pub fn len(&self) -> usize {
        usize::try_from(self.years).unwrap_or(0) * DAYS_PER_YEAR
    }

    /// Returns `true` if the configuration would produce no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Validates this configuration.
    ///
    /// Returns an error if fewer than one year is requested.
    pub fn validate(&self) -> Result<(), LunationError> {
        if self.years < 1 {
            return Err(LunationError::InvalidYearCount { years: self.years });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_defaults() {
        let cfg = TableConfig::new(start());
        assert_eq!(cfg.years(), 10);
        assert_eq!(cfg.len(), 3_650);
        assert_eq!(cfg.start(), start());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_with_years() {
        let cfg = TableConfig::new(start()).with_years(3);
        assert_eq!(cfg.years(), 3);
        assert_eq!(cfg.len(), 1_095);
    }

    #[test]
    fn test_rejects_non_positive_years() {
        for years in [0, -1, i32::MIN] {
            let cfg = TableConfig::new(start()).with_years(years);
            assert!(cfg.is_empty());
            assert_eq!(
                cfg.validate(),
                Err(LunationError::InvalidYearCount { years })
            );
        }
    }
}
