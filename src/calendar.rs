// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar ↔ Julian day conversion.
//!
//! A [`JulianDay`] is the integer number of the civil day (midnight to
//! midnight, UTC) on the proleptic Gregorian calendar.  Its value equals the
//! astronomical Julian date at noon of that day, so `JulianDay(2_451_545)`
//! is 2000-01-01 and converts to the moment `JD 2451545.0`.
//!
//! The conversions use the century / quad-century leap cycle (146 097 days
//! per 400 years, 1 461 days per 4 years) on a March-based year, with floor
//! division throughout so that negative years are handled as well.

use chrono::{DateTime, Datelike, Utc};
use qtty::Days;
use std::fmt;
use std::ops::{Add, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::instant::JulianMoment;

/// Julian day number of 0000-03-01 minus one: the origin of the March-based count.
const MARCH_EPOCH: i64 = 1_721_119;

/// Days in 400 Gregorian years.
const DAYS_PER_QUAD_CENTURY: i64 = 146_097;

/// Days in 4 Julian years.
const DAYS_PER_QUAD_YEAR: i64 = 1_461;

const SECONDS_PER_DAY: i64 = 86_400;

/// A calendar date on the proleptic Gregorian calendar.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CivilDate {
    pub year: i32,
    /// 1 = January … 12 = December.
    pub month: u32,
    pub day: u32,
}

impl CivilDate {
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// English name of the month, `"January"` … `"December"`.
    pub fn month_name(&self) -> &'static str {
        const NAMES: [&str; 12] = [
            "January",
            "February",
            "March",
            "April",
            "May",
            "June",
            "July",
            "August",
            "September",
            "October",
            "November",
            "December",
        ];
        NAMES[(self.month.clamp(1, 12) - 1) as usize]
    }
}

impl fmt::Display for CivilDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Wall-clock time of day, UTC.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClockTime {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl ClockTime {
    pub const MIDNIGHT: Self = Self::new(0, 0, 0);

    pub const fn new(hour: u32, minute: u32, second: u32) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }

    const fn from_seconds(total: u32) -> Self {
        Self::new(total / 3_600, (total / 60) % 60, total % 60)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

/// Integer Julian day number of a civil date.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct JulianDay(i64);

impl JulianDay {
    /// 2000-01-01.
    pub const J2000: Self = Self(2_451_545);

    #[inline]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(&self) -> i64 {
        self.0
    }

    /// Julian day of the given calendar date. See [`to_julian_day`].
    #[inline]
    pub fn from_civil(date: CivilDate) -> Self {
        to_julian_day(date.year, date.month, date.day)
    }

    /// Calendar date of this day. See [`from_julian_day`].
    #[inline]
    pub fn to_civil(self) -> CivilDate {
        from_julian_day(self)
    }

    /// Julian day containing the given UTC instant.
    pub fn from_utc(datetime: DateTime<Utc>) -> Self {
        to_julian_day(datetime.year(), datetime.month(), datetime.day())
    }

    /// The moment at noon UTC of this day, where its value and the
    /// astronomical Julian date coincide.
    #[inline]
    pub fn to_moment(self) -> JulianMoment {
        JulianMoment::new(self.0 as f64)
    }
}

impl fmt::Display for JulianDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add<i64> for JulianDay {
    type Output = Self;
    #[inline]
    fn add(self, rhs: i64) -> Self::Output {
        Self(self.0 + rhs)
    }
}

impl Sub<i64> for JulianDay {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: i64) -> Self::Output {
        Self(self.0 - rhs)
    }
}

impl Sub for JulianDay {
    type Output = i64;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.0 - rhs.0
    }
}

/// Convert a proleptic Gregorian date to its Julian day number.
///
/// Total over the integer range: out-of-range months or days are not
/// rejected and produce arithmetically well-defined (if meaningless) values.
pub fn to_julian_day(year: i32, month: u32, day: u32) -> JulianDay {
    let (mut y, m) = if month > 2 {
        (year as i64, month as i64 - 3)
    } else {
        (year as i64 - 1, month as i64 + 9)
    };
    let century = y.div_euclid(100);
    y -= 100 * century;
    JulianDay(
        day as i64
            + (century * DAYS_PER_QUAD_CENTURY).div_euclid(4)
            + (y * DAYS_PER_QUAD_YEAR) / 4
            + (m * 153 + 2) / 5
            + MARCH_EPOCH,
    )
}

/// Convert a Julian day number back to its proleptic Gregorian date.
///
/// Exact inverse of [`to_julian_day`] for every valid date.
pub fn from_julian_day(jd: JulianDay) -> CivilDate {
    let j = 4 * (jd.0 - MARCH_EPOCH) - 1;
    let century = j.div_euclid(DAYS_PER_QUAD_CENTURY);
    let day_of_century = j.rem_euclid(DAYS_PER_QUAD_CENTURY) / 4;

    let d = 4 * day_of_century + 3;
    let year_of_century = d / DAYS_PER_QUAD_YEAR;
    let day_of_year = (d % DAYS_PER_QUAD_YEAR + 4) / 4;

    let m = (5 * day_of_year - 3) / 153;
    let day = (5 * day_of_year - 3 - 153 * m + 5) / 5;

    let mut year = 100 * century + year_of_century;
    let month = if m < 10 {
        m + 3
    } else {
        year += 1;
        m - 9
    };
    CivilDate::new(year as i32, month as u32, day as u32)
}

/// Split a moment into its civil date and clock time, rounding to the
/// nearest whole second.
///
/// Astronomical days begin at noon, so half a day is added before the
/// split.  When rounding reaches 24:00:00 the date carries to the next day.
pub fn civil_parts(moment: JulianMoment) -> (CivilDate, ClockTime) {
    let civil = moment.quantity() + Days::new(0.5);
    let day = civil.value().floor();
    let mut seconds = ((civil.value() - day) * SECONDS_PER_DAY as f64).round() as i64;
    let mut jd = JulianDay(day as i64);
    if seconds >= SECONDS_PER_DAY {
        seconds -= SECONDS_PER_DAY;
        jd = jd + 1;
    }
    (from_julian_day(jd), ClockTime::from_seconds(seconds as u32))
}

/// Time of day of a moment, rounded to the nearest whole second.
#[inline]
pub fn split_moment(moment: JulianMoment) -> ClockTime {
    civil_parts(moment).1
}
