// SPDX-License-Identifier: MIT

//! Kind-tagged instant type.
//!
//! [`DateTime`] is the core type of the crate.  It stores a scalar
//! interval in [`Seconds`] since the reference epoch (2001-01-01T00:00:00
//! UTC) together with a [`DateTimeKind`] tag that selects the timezone
//! used whenever the instant is broken into calendar fields.  The stored
//! interval is always UTC-relative; switching kind reinterprets the same
//! absolute instant, it never moves it.
//!
//! Calendar decomposition, field construction, component arithmetic, and
//! pattern formatting all delegate to chrono — the host calendar and
//! formatter facility.  The component breakdown is recomputed on access:
//! the type stays `Copy` with no interior mutability, so sharing values
//! across threads is trivially safe.

use chrono::{
    DateTime as ChronoDateTime, Datelike, Days as ChronoDays, FixedOffset, Local, Months,
    NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone, Timelike, Utc,
};
use qtty::Seconds;
use std::fmt;
use std::ops::{Add, Sub};

use crate::format::{DateStyle, DateTimeFormat};
use crate::numerics::move_to_range;
use crate::scales::{DotNet, Ldap, TickScale, UnixEpoch};
use crate::timespan::{TimeSpan, SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};

// ═══════════════════════════════════════════════════════════════════════════
// Kind and weekday enums
// ═══════════════════════════════════════════════════════════════════════════

/// Which timezone governs calendar-field decomposition of an instant.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DateTimeKind {
    /// Fields are decomposed in UTC.
    Utc,
    /// Fields are decomposed in the system timezone, resolved at the time
    /// of each computation (not frozen at construction).
    Local,
    /// No declared timezone; decomposes like [`Local`](Self::Local).
    Unspecified,
}

/// Day of the week, numbered 1 (Sunday) through 7 (Saturday).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(i32)]
pub enum DayOfWeek {
    Sunday = 1,
    Monday = 2,
    Tuesday = 3,
    Wednesday = 4,
    Thursday = 5,
    Friday = 6,
    Saturday = 7,
}

impl DayOfWeek {
    /// The 1..7 ordinal of this weekday.
    #[inline]
    pub const fn number(self) -> i32 {
        self as i32
    }

    /// Weekday for a 1..7 ordinal.
    pub const fn from_number(n: i32) -> Option<Self> {
        match n {
            1 => Some(Self::Sunday),
            2 => Some(Self::Monday),
            3 => Some(Self::Tuesday),
            4 => Some(Self::Wednesday),
            5 => Some(Self::Thursday),
            6 => Some(Self::Friday),
            7 => Some(Self::Saturday),
            _ => None,
        }
    }
}

impl From<chrono::Weekday> for DayOfWeek {
    fn from(weekday: chrono::Weekday) -> Self {
        // chrono counts days from Sunday as 0..6.
        Self::from_number(weekday.num_days_from_sunday() as i32 + 1)
            .expect("chrono weekday maps into 1..7")
    }
}

/// Calendar component deltas for [`DateTime::add_components`].
///
/// Year, month, and day deltas are applied to the wall-clock date by the
/// host calendar (month lengths and DST respected); the time-of-day
/// deltas are applied as exact interval seconds.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct DateComponents {
    pub years: i32,
    pub months: i32,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub milliseconds: i64,
    pub nanoseconds: i64,
}

// ═══════════════════════════════════════════════════════════════════════════
// Internal helpers
// ═══════════════════════════════════════════════════════════════════════════

/// Seconds from the Unix epoch to the reference epoch, as an integer for
/// exact timestamp arithmetic.
const UNIX_TO_REFERENCE_SECONDS: i64 = 978_307_200;

/// Days in `month` of `year`.
fn month_length(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 30,
    }
}

/// Gregorian leap-year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 100 != 0 && year % 4 == 0) || year % 400 == 0
}

/// Reference-epoch interval of a host instant, fractional seconds.
fn reference_interval_of(utc: &ChronoDateTime<Utc>) -> f64 {
    (utc.timestamp() - UNIX_TO_REFERENCE_SECONDS) as f64
        + utc.timestamp_subsec_nanos() as f64 / 1e9
}

/// Resolve a wall-clock time in the system timezone.
///
/// Ambiguous times (fall-back transition) take the earlier instant; times
/// skipped by a spring-forward transition advance one hour and re-resolve.
fn resolve_local(naive: NaiveDateTime) -> ChronoDateTime<Local> {
    Local
        .from_local_datetime(&naive)
        .earliest()
        .or_else(|| {
            Local
                .from_local_datetime(&(naive + TimeDelta::hours(1)))
                .earliest()
        })
        .unwrap_or_else(|| Local.from_utc_datetime(&naive))
}

/// Anchor a wall-clock time in the kind's timezone as an absolute instant.
fn instant_from_naive(naive: NaiveDateTime, kind: DateTimeKind) -> ChronoDateTime<Utc> {
    match kind {
        DateTimeKind::Utc => Utc.from_utc_datetime(&naive),
        _ => resolve_local(naive).with_timezone(&Utc),
    }
}

/// System-timezone offset sampled at midnight UTC on the first of `month`.
fn seasonal_offset(year: i32, month: u32) -> i32 {
    match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(date) => {
            let probe = NaiveDateTime::new(date, NaiveTime::MIN);
            Local.from_utc_datetime(&probe).offset().local_minus_utc()
        }
        None => 0,
    }
}

/// The kind-resolved timezone's standard (non-DST) offset for `year`.
///
/// The standard offset is the smaller of the January and July offsets;
/// whichever hemisphere the zone is in, DST raises the offset.
fn standard_offset_seconds(year: i32) -> i32 {
    seasonal_offset(year, 1).min(seasonal_offset(year, 7))
}

/// Timezone-sensitive calendar breakdown of one instant.
#[derive(Debug, Copy, Clone)]
struct Components {
    year: i32,
    month: i32,
    day: i32,
    hour: i32,
    minute: i32,
    second: i32,
    nanosecond: i32,
    /// 1 (Sunday) .. 7 (Saturday), before any week-start remapping.
    weekday: i32,
    day_of_year: i32,
    week_of_year: i32,
    era: i32,
}

// ═══════════════════════════════════════════════════════════════════════════
// DateTime
// ═══════════════════════════════════════════════════════════════════════════

/// An immutable point in time tagged with a [`DateTimeKind`].
///
/// Two instants are equal iff their stored intervals are equal; the kind
/// and the week-start day never participate in equality or ordering.
#[derive(Debug, Copy, Clone)]
pub struct DateTime {
    /// Fractional seconds since the reference epoch, UTC-relative.
    interval: Seconds,
    kind: DateTimeKind,
    week_starts: DayOfWeek,
}

impl DateTime {
    // ── constructors ──────────────────────────────────────────────────

    /// Build an instant from calendar fields in the kind's timezone.
    ///
    /// Out-of-range fields clamp to the nearest boundary instead of
    /// failing or rolling over: day 32 of a 31-day month becomes day 31,
    /// not day 1 of the next month.
    #[allow(clippy::too_many_arguments)]
    pub fn from_fields(
        year: i32,
        month: i32,
        day: i32,
        hour: i32,
        minute: i32,
        second: i32,
        millisecond: i32,
        kind: DateTimeKind,
        week_starts: DayOfWeek,
    ) -> Self {
        let year = move_to_range(year, -9999, 9999);
        let month = move_to_range(month, 1, 12);
        let day = move_to_range(day, 1, month_length(year, month as u32) as i32);
        let hour = move_to_range(hour, 0, 23);
        let minute = move_to_range(minute, 0, 59);
        let second = move_to_range(second, 0, 59);
        let millisecond = move_to_range(millisecond, 0, 999);

        let date = NaiveDate::from_ymd_opt(year, month as u32, day as u32)
            .expect("clamped fields form a representable date");
        let time = NaiveTime::from_hms_milli_opt(
            hour as u32,
            minute as u32,
            second as u32,
            millisecond as u32,
        )
        .expect("clamped fields form a representable time");
        let utc = instant_from_naive(NaiveDateTime::new(date, time), kind);
        Self {
            interval: Seconds::new(reference_interval_of(&utc)),
            kind,
            week_starts,
        }
    }

    /// Date-only shorthand: midnight, default week start (Sunday).
    #[inline]
    pub fn new(year: i32, month: i32, day: i32, kind: DateTimeKind) -> Self {
        Self::from_fields(year, month, day, 0, 0, 0, 0, kind, DayOfWeek::Sunday)
    }

    /// Wrap a host-native instant.
    #[inline]
    pub fn from_chrono(instant: ChronoDateTime<Utc>, kind: DateTimeKind) -> Self {
        Self {
            interval: Seconds::new(reference_interval_of(&instant)),
            kind,
            week_starts: DayOfWeek::Sunday,
        }
    }

    /// Build from a reference-epoch interval.
    #[inline]
    pub const fn from_interval(interval: Seconds, kind: DateTimeKind) -> Self {
        Self {
            interval,
            kind,
            week_starts: DayOfWeek::Sunday,
        }
    }

    /// Build from seconds since the Unix epoch (1970-01-01).
    #[inline]
    pub fn from_epoch(epoch: Seconds, kind: DateTimeKind) -> Self {
        Self::from_interval(
            Seconds::new(epoch.value() - UnixEpoch::EPOCH_OFFSET.value()),
            kind,
        )
    }

    /// Build from a tick count in the scale `S`.
    #[inline]
    pub fn from_ticks<S: TickScale>(ticks: i64, kind: DateTimeKind) -> Self {
        Self::from_interval(S::ticks_to_reference(ticks), kind)
    }

    /// Build from .NET long-epoch ticks (0001-01-01).
    #[inline]
    pub fn from_dotnet_ticks(ticks: i64, kind: DateTimeKind) -> Self {
        Self::from_ticks::<DotNet>(ticks, kind)
    }

    /// Build from LDAP / file-time ticks (1601-01-01).
    #[inline]
    pub fn from_ldap_ticks(ticks: i64, kind: DateTimeKind) -> Self {
        Self::from_ticks::<Ldap>(ticks, kind)
    }

    /// The current instant, decomposing in the system timezone.
    pub fn now() -> Self {
        Self::from_chrono(Utc::now(), DateTimeKind::Local)
    }

    /// The current instant, decomposing in UTC.
    pub fn utc_now() -> Self {
        Self::from_chrono(Utc::now(), DateTimeKind::Utc)
    }

    /// The earliest instant the host can represent, in Utc kind.
    pub fn min_value() -> Self {
        Self::from_chrono(ChronoDateTime::<Utc>::MIN_UTC, DateTimeKind::Utc)
    }

    /// The latest instant the host can represent, in Utc kind.
    pub fn max_value() -> Self {
        Self::from_chrono(ChronoDateTime::<Utc>::MAX_UTC, DateTimeKind::Utc)
    }

    /// Copy of this instant with a different week-start day.
    ///
    /// Affects only the derived [`weekday`](Self::weekday) and
    /// [`week_of_month`](Self::week_of_month) ordinals.
    #[inline]
    pub const fn with_week_starts(mut self, week_starts: DayOfWeek) -> Self {
        self.week_starts = week_starts;
        self
    }

    // ── decomposition ─────────────────────────────────────────────────

    /// The host-native instant (always UTC-relative).
    ///
    /// Intervals beyond the host's representable range clamp to its
    /// minimum or maximum instant.
    pub fn to_chrono(&self) -> ChronoDateTime<Utc> {
        let epoch = self.interval.value() + UNIX_TO_REFERENCE_SECONDS as f64;
        let mut secs = epoch.floor();
        let mut nanos = ((epoch - secs) * 1e9).round();
        if nanos >= 1e9 {
            secs += 1.0;
            nanos = 0.0;
        }
        ChronoDateTime::from_timestamp(secs as i64, nanos as u32).unwrap_or(if epoch < 0.0 {
            ChronoDateTime::<Utc>::MIN_UTC
        } else {
            ChronoDateTime::<Utc>::MAX_UTC
        })
    }

    /// Wall-clock representation in the kind's timezone.
    fn naive_in_kind(&self) -> NaiveDateTime {
        let utc = self.to_chrono();
        match self.kind {
            DateTimeKind::Utc => utc.naive_utc(),
            _ => utc.with_timezone(&Local).naive_local(),
        }
    }

    /// UTC offset of the kind's timezone at this instant, in seconds.
    fn offset_seconds(&self) -> i32 {
        match self.kind {
            DateTimeKind::Utc => 0,
            _ => self
                .to_chrono()
                .with_timezone(&Local)
                .offset()
                .local_minus_utc(),
        }
    }

    fn components(&self) -> Components {
        let naive = self.naive_in_kind();
        Components {
            year: naive.year(),
            month: naive.month() as i32,
            day: naive.day() as i32,
            hour: naive.hour() as i32,
            minute: naive.minute() as i32,
            second: naive.second() as i32,
            nanosecond: naive.nanosecond() as i32,
            weekday: naive.weekday().num_days_from_sunday() as i32 + 1,
            day_of_year: naive.ordinal() as i32,
            week_of_year: naive.iso_week().week() as i32,
            era: i32::from(naive.year() > 0),
        }
    }

    // ── calendar field accessors ──────────────────────────────────────

    /// Year component.
    pub fn year(&self) -> i32 {
        self.components().year
    }

    /// Month component, 1..12.
    pub fn month(&self) -> i32 {
        self.components().month
    }

    /// Day-of-month component.
    pub fn day(&self) -> i32 {
        self.components().day
    }

    /// Hour component, 0..23.
    pub fn hour(&self) -> i32 {
        self.components().hour
    }

    /// Minute component, 0..59.
    pub fn minute(&self) -> i32 {
        self.components().minute
    }

    /// Second component, 0..59.
    pub fn second(&self) -> i32 {
        self.components().second
    }

    /// Millisecond component, 0..999.
    pub fn millisecond(&self) -> i32 {
        self.components().nanosecond / 1_000_000
    }

    /// Sub-second nanosecond component.
    pub fn nanosecond(&self) -> i32 {
        self.components().nanosecond
    }

    /// Era: 1 for CE, 0 for BCE.
    pub fn era(&self) -> i32 {
        self.components().era
    }

    /// Weekday ordinal relative to the configured week start, 1..7.
    ///
    /// With the default Sunday start this is the plain 1..7 weekday; with
    /// `week_starts = Monday` a Monday reads 1, a Sunday reads 7.
    pub fn weekday(&self) -> i32 {
        let computed =
            (self.components().weekday + 1 - self.week_starts.number()).rem_euclid(7);
        if computed == 0 {
            7
        } else {
            computed
        }
    }

    /// The named weekday, independent of the week-start setting.
    pub fn day_of_week(&self) -> DayOfWeek {
        DayOfWeek::from_number(self.components().weekday)
            .expect("decomposed weekday is within 1..7")
    }

    /// Ordinal day within the year, 1-based.
    pub fn day_of_year(&self) -> i32 {
        self.components().day_of_year
    }

    /// ISO week number within the year.
    pub fn week_of_year(&self) -> i32 {
        self.components().week_of_year
    }

    /// Week number within the month, counting weeks that begin on the
    /// configured week-start day.
    pub fn week_of_month(&self) -> i32 {
        let c = self.components();
        let weekday_of_first = (c.weekday - 1 - (c.day - 1)).rem_euclid(7) + 1;
        let offset = (weekday_of_first - self.week_starts.number()).rem_euclid(7);
        (c.day - 1 + offset) / 7 + 1
    }

    /// Month name rendered by the host formatter.
    pub fn month_name(&self) -> String {
        self.format_pattern("%B")
    }

    /// Weekday name rendered by the host formatter.
    pub fn weekday_name(&self) -> String {
        self.format_pattern("%A")
    }

    /// The kind tag of this instant.
    #[inline]
    pub const fn kind(&self) -> DateTimeKind {
        self.kind
    }

    /// The configured week-start day.
    #[inline]
    pub const fn week_starts(&self) -> DayOfWeek {
        self.week_starts
    }

    // ── numeric views ─────────────────────────────────────────────────

    /// Fractional seconds since the reference epoch, always UTC-relative.
    #[inline]
    pub const fn interval_utc(&self) -> Seconds {
        self.interval
    }

    /// Fractional seconds since the Unix epoch, always UTC-relative.
    #[inline]
    pub fn epoch(&self) -> Seconds {
        Seconds::new(self.interval.value() + UnixEpoch::EPOCH_OFFSET.value())
    }

    /// Tick count of this instant in the scale `S`.
    #[inline]
    pub fn to_ticks<S: TickScale>(&self) -> i64 {
        S::reference_to_ticks(self.interval)
    }

    /// .NET long-epoch ticks, UTC-relative.
    #[inline]
    pub fn ticks_utc(&self) -> i64 {
        self.to_ticks::<DotNet>()
    }

    /// LDAP / file-time ticks, UTC-relative.
    #[inline]
    pub fn ldap_ticks(&self) -> i64 {
        self.to_ticks::<Ldap>()
    }

    /// .NET long-epoch ticks shifted by the kind's current UTC offset at
    /// this instant — the CLR's `DateTime.Ticks` semantic for local times.
    ///
    /// For `Local` kind this depends on the system timezone, so it is not
    /// a pure function of the stored interval.
    pub fn ticks(&self) -> i64 {
        let shifted = Seconds::new(self.interval.value() + self.offset_seconds() as f64);
        DotNet::reference_to_ticks(shifted)
    }

    /// OLE Automation date: whole days since 1899-12-30 plus a
    /// time-of-day fraction, computed from the kind-shifted ticks.
    ///
    /// # Panics
    ///
    /// Panics for instants before the minimum representable OA date
    /// (year 100) — a programming-error-class fault, per the legacy
    /// contract.
    pub fn to_oadate(&self) -> f64 {
        ticks_to_oadate(self.ticks())
    }

    // ── interval-based arithmetic (exact seconds) ─────────────────────

    /// Add exact fractional seconds.
    #[inline]
    pub fn add_interval(&self, interval: Seconds) -> Self {
        Self {
            interval: self.interval + interval,
            ..*self
        }
    }

    /// Add exact seconds.
    #[inline]
    pub fn add_seconds(&self, seconds: f64) -> Self {
        self.add_interval(Seconds::new(seconds))
    }

    /// Add exact minutes (1 minute == 60 s).
    #[inline]
    pub fn add_minutes(&self, minutes: f64) -> Self {
        self.add_seconds(minutes * SECONDS_PER_MINUTE)
    }

    /// Add exact hours (1 hour == 3 600 s).
    #[inline]
    pub fn add_hours(&self, hours: f64) -> Self {
        self.add_seconds(hours * SECONDS_PER_HOUR)
    }

    /// Add exact days (1 day == 86 400 s, immune to DST).
    #[inline]
    pub fn add_days(&self, days: f64) -> Self {
        self.add_seconds(days * SECONDS_PER_DAY)
    }

    /// Add exact milliseconds.
    #[inline]
    pub fn add_milliseconds(&self, milliseconds: f64) -> Self {
        self.add_seconds(milliseconds / 1_000.0)
    }

    /// Add a [`TimeSpan`]'s interval.
    #[inline]
    pub fn add_duration(&self, span: TimeSpan) -> Self {
        self.add_interval(span.interval())
    }

    /// Exact interval difference between two instants.
    #[inline]
    pub fn subtract(&self, other: &DateTime) -> TimeSpan {
        TimeSpan::from_interval(self.interval - other.interval)
    }

    // ── calendar-based arithmetic (host calendar rules) ───────────────

    /// Add calendar component deltas.
    ///
    /// Year, month, and day deltas move the wall-clock date in the kind's
    /// timezone: month ends clamp (Jan 31 + 1 month = Feb 28/29) and
    /// crossing a DST transition keeps the wall-clock time rather than
    /// the elapsed interval.  Hour and smaller deltas are exact seconds.
    pub fn add_components(&self, components: &DateComponents) -> Self {
        let months = components.years as i64 * 12 + components.months as i64;
        let base = if months == 0 && components.days == 0 {
            *self
        } else {
            let naive = self.naive_in_kind();
            let date = naive.date();
            let date = if months >= 0 {
                date.checked_add_months(Months::new(months as u32))
            } else {
                date.checked_sub_months(Months::new(months.unsigned_abs() as u32))
            }
            .unwrap_or(date);
            let date = if components.days >= 0 {
                date.checked_add_days(ChronoDays::new(components.days as u64))
            } else {
                date.checked_sub_days(ChronoDays::new(components.days.unsigned_abs()))
            }
            .unwrap_or(date);
            let rebased = instant_from_naive(NaiveDateTime::new(date, naive.time()), self.kind);
            Self {
                interval: Seconds::new(reference_interval_of(&rebased)),
                ..*self
            }
        };
        let time_delta = components.hours as f64 * SECONDS_PER_HOUR
            + components.minutes as f64 * SECONDS_PER_MINUTE
            + components.seconds as f64
            + components.milliseconds as f64 * 1e-3
            + components.nanoseconds as f64 * 1e-9;
        base.add_interval(Seconds::new(time_delta))
    }

    /// Add whole calendar years.
    pub fn add_years_component(&self, years: i32) -> Self {
        self.add_components(&DateComponents {
            years,
            ..Default::default()
        })
    }

    /// Add whole calendar months (month ends clamp).
    pub fn add_months_component(&self, months: i32) -> Self {
        self.add_components(&DateComponents {
            months,
            ..Default::default()
        })
    }

    /// Add whole calendar days (wall-clock preserving across DST).
    pub fn add_days_component(&self, days: i64) -> Self {
        self.add_components(&DateComponents {
            days,
            ..Default::default()
        })
    }

    /// Add whole hours through the component path.
    pub fn add_hours_component(&self, hours: i64) -> Self {
        self.add_components(&DateComponents {
            hours,
            ..Default::default()
        })
    }

    /// Add whole minutes through the component path.
    pub fn add_minutes_component(&self, minutes: i64) -> Self {
        self.add_components(&DateComponents {
            minutes,
            ..Default::default()
        })
    }

    /// Add whole seconds through the component path.
    pub fn add_seconds_component(&self, seconds: i64) -> Self {
        self.add_components(&DateComponents {
            seconds,
            ..Default::default()
        })
    }

    /// Add whole milliseconds through the component path.
    pub fn add_milliseconds_component(&self, milliseconds: i64) -> Self {
        self.add_components(&DateComponents {
            milliseconds,
            ..Default::default()
        })
    }

    // ── derived instants ──────────────────────────────────────────────

    /// Midnight of the same calendar day, preserving kind and week start.
    pub fn date(&self) -> Self {
        let c = self.components();
        Self::from_fields(c.year, c.month, c.day, 0, 0, 0, 0, self.kind, self.week_starts)
    }

    /// The time elapsed since midnight in the kind's timezone.
    pub fn time_of_day(&self) -> TimeSpan {
        let c = self.components();
        TimeSpan::from_units(
            0.0,
            c.hour as f64,
            c.minute as f64,
            c.second as f64,
            (c.nanosecond / 1_000_000) as f64,
            0.0,
        )
    }

    /// Reinterpret this instant in UTC.  The stored interval is
    /// unchanged; only subsequent decomposition moves.
    pub fn to_utc(&self) -> Self {
        if self.kind == DateTimeKind::Utc {
            *self
        } else {
            Self {
                kind: DateTimeKind::Utc,
                ..*self
            }
        }
    }

    /// Reinterpret this instant in the system timezone.
    pub fn to_local(&self) -> Self {
        if self.kind == DateTimeKind::Local {
            *self
        } else {
            Self {
                kind: DateTimeKind::Local,
                ..*self
            }
        }
    }

    // ── queries ───────────────────────────────────────────────────────

    /// Whether this instant's year is a Gregorian leap year.
    pub fn is_leap_year(&self) -> bool {
        is_leap_year(self.year())
    }

    /// Whether the kind-resolved timezone observes daylight-saving time
    /// at this instant.  Always `false` for Utc kind.
    pub fn is_daylight_saving_time(&self) -> bool {
        if self.kind == DateTimeKind::Utc {
            return false;
        }
        self.offset_seconds() > standard_offset_seconds(self.year())
    }

    /// Day count of a year/month pair; `None` when either is unspecified.
    pub fn days_in_month(year: Option<i32>, month: Option<i32>) -> Option<i32> {
        let year = move_to_range(year?, 1, 9999);
        let month = move_to_range(month?, 1, 12);
        Some(month_length(year, month as u32) as i32)
    }

    /// -1, 0, or 1 as this instant is before, at, or after `other`.
    /// Kind-independent: only the absolute instant is compared.
    pub fn compare_to(&self, other: &DateTime) -> i32 {
        if self < other {
            -1
        } else if self > other {
            1
        } else {
            0
        }
    }

    // ── formatting and parsing ────────────────────────────────────────

    /// Render with a named format, in the kind's timezone.
    pub fn format(&self, format: DateTimeFormat) -> String {
        self.format_pattern(format.pattern())
    }

    /// Render with a coarse date style, in the kind's timezone.
    pub fn format_style(&self, style: DateStyle) -> String {
        self.format_pattern(style.pattern())
    }

    /// Render with a raw host formatter pattern, in the kind's timezone.
    pub fn format_pattern(&self, pattern: &str) -> String {
        let offset = FixedOffset::east_opt(self.offset_seconds())
            .or_else(|| FixedOffset::east_opt(0))
            .expect("a UTC offset is always in range");
        self.to_chrono()
            .with_timezone(&offset)
            .format(pattern)
            .to_string()
    }

    /// Parse `s` against a host formatter pattern, interpreting the
    /// wall-clock result in `kind`'s timezone.  Returns `None` when the
    /// string does not match the pattern.
    ///
    /// Date-only patterns read as midnight; time-only patterns read as
    /// that time on 2001-01-01 (the default construction date).
    pub fn parse(s: &str, pattern: &str, kind: DateTimeKind, week_starts: DayOfWeek) -> Option<Self> {
        let naive = NaiveDateTime::parse_from_str(s, pattern)
            .ok()
            .or_else(|| {
                NaiveDate::parse_from_str(s, pattern)
                    .ok()
                    .map(|date| NaiveDateTime::new(date, NaiveTime::MIN))
            })
            .or_else(|| {
                let date = NaiveDate::from_ymd_opt(2001, 1, 1)?;
                NaiveTime::parse_from_str(s, pattern)
                    .ok()
                    .map(|time| NaiveDateTime::new(date, time))
            })?;
        let utc = instant_from_naive(naive, kind);
        Some(Self {
            interval: Seconds::new(reference_interval_of(&utc)),
            kind,
            week_starts,
        })
    }

    /// Parse `s` against a named format.
    pub fn parse_named(
        s: &str,
        format: DateTimeFormat,
        kind: DateTimeKind,
        week_starts: DayOfWeek,
    ) -> Option<Self> {
        Self::parse(s, format.pattern(), kind, week_starts)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// OLE Automation date conversion
// ═══════════════════════════════════════════════════════════════════════════

const TICKS_PER_MILLISECOND: i64 = 10_000;
const TICKS_PER_DAY: i64 = TICKS_PER_MILLISECOND * 1_000 * 60 * 60 * 24;
const MILLIS_PER_DAY: i64 = 86_400_000;
const DAYS_PER_YEAR: i64 = 365;
const DAYS_PER_4_YEARS: i64 = DAYS_PER_YEAR * 4 + 1;
const DAYS_PER_100_YEARS: i64 = DAYS_PER_4_YEARS * 25 - 1;
const DAYS_PER_400_YEARS: i64 = DAYS_PER_100_YEARS * 4 + 1;
/// Days from 0001-01-01 to 1899-12-30, the OA origin.
const DAYS_TO_1899: i64 = DAYS_PER_400_YEARS * 4 + DAYS_PER_100_YEARS * 3 - 367;
const DOUBLE_DATE_OFFSET: i64 = DAYS_TO_1899 * TICKS_PER_DAY;
/// All OA dates must lie on or after 0100-01-01.
const OADATE_MIN_AS_TICKS: i64 = (DAYS_PER_100_YEARS - DAYS_PER_YEAR) * TICKS_PER_DAY;

fn ticks_to_oadate(value: i64) -> f64 {
    if value == 0 {
        // OleAut's zeroed date value.
        return 0.0;
    }
    let mut value = value;
    if value < TICKS_PER_DAY {
        value += DOUBLE_DATE_OFFSET;
    }
    if value < OADATE_MIN_AS_TICKS {
        panic!("OLE Automation date is before the minimum representable date");
    }
    let mut millis = (value - DOUBLE_DATE_OFFSET) / TICKS_PER_MILLISECOND;
    if millis < 0 {
        // Pre-origin OA dates carry a negative whole part and a positive
        // fraction; fold the fractional day back under the whole day.
        let frac = millis % MILLIS_PER_DAY;
        if frac != 0 {
            millis -= (MILLIS_PER_DAY + frac) * 2;
        }
    }
    millis as f64 / MILLIS_PER_DAY as f64
}

// ═══════════════════════════════════════════════════════════════════════════
// Trait implementations
// ═══════════════════════════════════════════════════════════════════════════

impl Default for DateTime {
    /// 2001-01-01 midnight, Local kind — the default construction fields.
    fn default() -> Self {
        Self::new(2001, 1, 1, DateTimeKind::Local)
    }
}

impl PartialEq for DateTime {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.interval == other.interval
    }
}

impl PartialOrd for DateTime {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.interval.partial_cmp(&other.interval)
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_pattern("%Y-%m-%d %H:%M:%S%.3f %z"))
    }
}

impl From<ChronoDateTime<Utc>> for DateTime {
    /// Wraps with Local kind, matching the default-kind construction.
    fn from(instant: ChronoDateTime<Utc>) -> Self {
        Self::from_chrono(instant, DateTimeKind::Local)
    }
}

impl Add<TimeSpan> for DateTime {
    type Output = Self;
    #[inline]
    fn add(self, rhs: TimeSpan) -> Self::Output {
        self.add_interval(rhs.interval())
    }
}

impl Sub<TimeSpan> for DateTime {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: TimeSpan) -> Self::Output {
        self.add_interval(Seconds::new(-rhs.interval().value()))
    }
}

impl Sub for DateTime {
    type Output = TimeSpan;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.subtract(&rhs)
    }
}
