// SPDX-License-Identifier: MIT

//! .NET-style date/time value types on the Rust calendar stack.
//!
//! This crate reimplements the `DateTime`/`TimeSpan` pair familiar from
//! the CLR on top of chrono, which acts as the host calendar and
//! formatter facility.
//!
//! # Core types
//!
//! - [`DateTime`] — immutable instant stored as fractional seconds since
//!   the reference epoch (2001-01-01T00:00:00 UTC), tagged with a
//!   [`DateTimeKind`] that selects the timezone for field decomposition.
//! - [`TimeSpan`] — signed fractional-seconds duration with derived unit
//!   views.
//! - [`TickScale`] — trait for the legacy tick systems an instant can be
//!   converted to and from.
//! - [`DateTimeFormat`] / [`DateStyle`] — closed sets of named formats
//!   mapped to host formatter patterns.
//!
//! # Tick scales
//!
//! The following markers implement [`TickScale`] (10 000 000 ticks per
//! second each, epochs differ):
//!
//! | Marker | Epoch zero |
//! |--------|------------|
//! | [`Reference`] | 2001-01-01 |
//! | [`UnixEpoch`] | 1970-01-01 |
//! | [`Ldap`] | 1601-01-01 |
//! | [`DotNet`] | 0001-01-01 |
//!
//! JavaScript ticks — milliseconds since 1970, the serialized wire form —
//! are derived from [`DotNet`] ticks by a fixed linear transform in the
//! [`javascript`] module.
//!
//! # Arithmetic families
//!
//! Instants support two deliberately distinct kinds of addition:
//! interval-based adders ([`DateTime::add_days`] and friends) move by
//! exact seconds where a day is always 86 400 s, while calendar-based
//! adders ([`DateTime::add_days_component`] and friends) delegate to the
//! host calendar and respect month lengths and DST transitions.  Adding
//! one calendar day across a spring-forward transition is not the same
//! as adding 86 400 seconds.
//!
//! # Quick example
//!
//! ```
//! use sharptime::{DateTime, DateTimeFormat, DateTimeKind, TimeSpan};
//!
//! let launch = DateTime::new(1961, 4, 12, DateTimeKind::Utc);
//! let later = launch + TimeSpan::from_minutes(108.0);
//! assert_eq!(later.format(DateTimeFormat::Long), "1961-04-12 01:48:00");
//! ```

pub mod datetime;
pub mod format;
pub mod javascript;
pub mod numerics;
pub mod scales;
pub mod timespan;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use datetime::{is_leap_year, DateComponents, DateTime, DateTimeKind, DayOfWeek};
pub use format::{DateStyle, DateTimeFormat};
pub use javascript::{
    dotnet_ticks_to_javascript, javascript_ticks_to_dotnet, INITIAL_JAVASCRIPT_TICKS,
};
pub use numerics::{move_to_range, round, MidpointRounding};
pub use scales::{DotNet, Ldap, Reference, TickScale, UnixEpoch, TICKS_PER_SECOND};
pub use timespan::TimeSpan;
