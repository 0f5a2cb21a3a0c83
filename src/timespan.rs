// SPDX-License-Identifier: MIT

//! Signed fractional-seconds duration.
//!
//! [`TimeSpan`] stores a single scalar interval in [`Seconds`]; every
//! unit view (days, hours, minutes, ...) is derived from it on demand, so
//! the interval is the only source of truth.  The type is `Copy` and
//! layout-identical to an `f64`.

use qtty::{Day, Seconds, Simplify};
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Seconds in one minute.
pub const SECONDS_PER_MINUTE: f64 = 60.0;
/// Seconds in one hour.
pub const SECONDS_PER_HOUR: f64 = 3_600.0;
/// Seconds in one day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;
/// Seconds in one millisecond.
pub const SECONDS_PER_MILLISECOND: f64 = 1e-3;
/// Seconds in one nanosecond.
pub const SECONDS_PER_NANOSECOND: f64 = 1e-9;

/// A signed duration measured in fractional seconds.
///
/// Unit accessors decompose the interval by successive truncating
/// division in descending unit order; each component carries the sign of
/// the interval, so `-1` day `-1` hour reads back as `days() == -1`,
/// `hours() == -1`.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct TimeSpan {
    interval: Seconds,
}

/// Whole units of one decomposition step plus the remainder carried to
/// the next, both taking the dividend's sign (truncating modulo).
#[inline]
fn units_and_remainder(value: f64, unit: f64) -> (i64, f64) {
    ((value / unit).trunc() as i64, value % unit)
}

#[derive(Debug, Copy, Clone)]
struct Units {
    days: i64,
    hours: i64,
    minutes: i64,
    seconds: i64,
    milliseconds: i64,
    nanoseconds: i64,
}

impl TimeSpan {
    /// The zero-length span.
    pub const ZERO: Self = Self::new(0.0);

    // ── constructors ──────────────────────────────────────────────────

    /// Create from a raw interval in seconds.
    #[inline]
    pub const fn new(seconds: f64) -> Self {
        Self {
            interval: Seconds::new(seconds),
        }
    }

    /// Create from a [`Seconds`] quantity.
    #[inline]
    pub const fn from_interval(interval: Seconds) -> Self {
        Self { interval }
    }

    /// Create from unit quantities, each of which may be fractional or
    /// negative; the interval is their weighted sum.
    pub fn from_units(
        days: f64,
        hours: f64,
        minutes: f64,
        seconds: f64,
        milliseconds: f64,
        nanoseconds: f64,
    ) -> Self {
        Self::new(
            days * SECONDS_PER_DAY
                + hours * SECONDS_PER_HOUR
                + minutes * SECONDS_PER_MINUTE
                + seconds
                + milliseconds * SECONDS_PER_MILLISECOND
                + nanoseconds * SECONDS_PER_NANOSECOND,
        )
    }

    /// `days` whole-and-fractional days.
    #[inline]
    pub fn from_days(days: f64) -> Self {
        Self::new(days * SECONDS_PER_DAY)
    }

    /// `hours` whole-and-fractional hours.
    #[inline]
    pub fn from_hours(hours: f64) -> Self {
        Self::new(hours * SECONDS_PER_HOUR)
    }

    /// `minutes` whole-and-fractional minutes.
    #[inline]
    pub fn from_minutes(minutes: f64) -> Self {
        Self::new(minutes * SECONDS_PER_MINUTE)
    }

    /// `seconds` seconds.
    #[inline]
    pub fn from_seconds(seconds: f64) -> Self {
        Self::new(seconds)
    }

    /// `milliseconds` milliseconds.
    #[inline]
    pub fn from_milliseconds(milliseconds: f64) -> Self {
        Self::new(milliseconds * SECONDS_PER_MILLISECOND)
    }

    /// Parse a span from a string holding a plain real number of seconds.
    ///
    /// This is intentionally narrow: `"90.5"` parses, `"1.02:03:04"` does
    /// not — there is no composite duration syntax.
    pub fn parse(s: &str) -> Option<Self> {
        s.trim().parse::<f64>().ok().map(Self::new)
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// The underlying interval quantity.
    #[inline]
    pub const fn interval(&self) -> Seconds {
        self.interval
    }

    fn decompose(&self) -> Units {
        let (days, rem) = units_and_remainder(self.interval.value(), SECONDS_PER_DAY);
        let (hours, rem) = units_and_remainder(rem, SECONDS_PER_HOUR);
        let (minutes, rem) = units_and_remainder(rem, SECONDS_PER_MINUTE);
        let (seconds, rem) = units_and_remainder(rem, 1.0);
        let (milliseconds, rem) = units_and_remainder(rem, SECONDS_PER_MILLISECOND);
        let (nanoseconds, _) = units_and_remainder(rem, SECONDS_PER_NANOSECOND);
        Units {
            days,
            hours,
            minutes,
            seconds,
            milliseconds,
            nanoseconds,
        }
    }

    /// Whole days (carries the overall sign).
    #[inline]
    pub fn days(&self) -> i64 {
        self.decompose().days
    }

    /// Whole hours after the day component is removed.
    #[inline]
    pub fn hours(&self) -> i64 {
        self.decompose().hours
    }

    /// Whole minutes after the hour component is removed.
    #[inline]
    pub fn minutes(&self) -> i64 {
        self.decompose().minutes
    }

    /// Whole seconds after the minute component is removed.
    #[inline]
    pub fn seconds(&self) -> i64 {
        self.decompose().seconds
    }

    /// Whole milliseconds after the second component is removed.
    #[inline]
    pub fn milliseconds(&self) -> i64 {
        self.decompose().milliseconds
    }

    /// Whole nanoseconds after the millisecond component is removed.
    #[inline]
    pub fn nanoseconds(&self) -> i64 {
        self.decompose().nanoseconds
    }

    /// The interval expressed in seconds.
    #[inline]
    pub fn total_seconds(&self) -> f64 {
        self.interval.value()
    }

    /// The interval expressed in minutes.
    #[inline]
    pub fn total_minutes(&self) -> f64 {
        self.interval.value() / SECONDS_PER_MINUTE
    }

    /// The interval expressed in hours.
    #[inline]
    pub fn total_hours(&self) -> f64 {
        self.interval.value() / SECONDS_PER_HOUR
    }

    /// The interval expressed in days.
    #[inline]
    pub fn total_days(&self) -> f64 {
        self.interval.to::<Day>().value()
    }

    /// The magnitude of this span.
    #[inline]
    pub fn abs(&self) -> Self {
        Self::new(self.interval.value().abs())
    }
}

// ── Display ───────────────────────────────────────────────────────────────

/// Renders as `[-][D.]HH:MM:SS[.mmm]`.
impl fmt::Display for TimeSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let units = self.abs().decompose();
        if self.interval.value() < 0.0 {
            write!(f, "-")?;
        }
        if units.days != 0 {
            write!(f, "{}.", units.days)?;
        }
        write!(
            f,
            "{:02}:{:02}:{:02}",
            units.hours, units.minutes, units.seconds
        )?;
        if units.milliseconds != 0 {
            write!(f, ".{:03}", units.milliseconds)?;
        }
        Ok(())
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for TimeSpan {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(self.interval.value())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for TimeSpan {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = f64::deserialize(deserializer)?;
        Ok(Self::new(v))
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────

impl Add for TimeSpan {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::from_interval(self.interval + rhs.interval)
    }
}

impl AddAssign for TimeSpan {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.interval += rhs.interval;
    }
}

impl Sub for TimeSpan {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::from_interval(self.interval - rhs.interval)
    }
}

impl SubAssign for TimeSpan {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.interval -= rhs.interval;
    }
}

impl Neg for TimeSpan {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        Self::new(-self.interval.value())
    }
}

impl Mul<f64> for TimeSpan {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        Self::from_interval(self.interval * rhs)
    }
}

impl Mul<TimeSpan> for f64 {
    type Output = TimeSpan;
    #[inline]
    fn mul(self, rhs: TimeSpan) -> Self::Output {
        TimeSpan::from_interval(rhs.interval * self)
    }
}

impl Div<f64> for TimeSpan {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f64) -> Self::Output {
        Self::new(self.interval.value() / rhs)
    }
}

/// Span ÷ span is a dimensionless ratio; dividing by the zero span
/// follows IEEE-754 (infinity or NaN), never an error.
impl Div for TimeSpan {
    type Output = f64;
    #[inline]
    fn div(self, rhs: Self) -> Self::Output {
        (self.interval / rhs.interval).simplify().value()
    }
}
