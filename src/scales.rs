// SPDX-License-Identifier: MIT

//! Tick-scale marker types.
//!
//! Each zero-sized type identifies a legacy tick system and encodes how
//! tick counts in that system relate to the canonical **reference
//! interval** — fractional seconds since 2001-01-01T00:00:00 UTC.
//!
//! All four systems count 10 000 000 ticks per second; they differ only
//! in where tick zero sits:
//!
//! | Marker | Epoch zero | Offset to reference (s) |
//! |--------|------------|-------------------------|
//! | [`Reference`] | 2001-01-01 | 0 |
//! | [`UnixEpoch`] | 1970-01-01 | 978 307 200 |
//! | [`Ldap`] | 1601-01-01 | 12 622 780 800 |
//! | [`DotNet`] | 0001-01-01 | 63 113 904 000 |
//!
//! JavaScript ticks (milliseconds since 1970, derived from [`DotNet`]
//! ticks by a fixed linear transform) live in the
//! [`javascript`](crate::javascript) module.

use qtty::Seconds;

/// Ticks per second shared by every scale in this module.
pub const TICKS_PER_SECOND: f64 = 10_000_000.0;

/// Marker trait for tick scales.
///
/// A **tick scale** defines:
///
/// 1. A human-readable **label** used in diagnostics.
/// 2. The constant offset, in seconds, from the scale's epoch zero to the
///    reference epoch.
///
/// The conversions are provided once here; for every scale they compile
/// down to a division/multiplication and a constant add.
pub trait TickScale: Copy + Clone + std::fmt::Debug + PartialEq + 'static {
    /// Display label for the scale.
    const LABEL: &'static str;

    /// Seconds from this scale's tick zero to the reference epoch.
    const EPOCH_OFFSET: Seconds;

    /// Convert a tick count in this scale to a reference-epoch interval.
    ///
    /// The division happens before the offset subtraction; the difference
    /// of the two doubles is then exact, which keeps whole-millisecond
    /// instants tick-exact in every scale.
    #[inline]
    fn ticks_to_reference(ticks: i64) -> Seconds {
        Seconds::new(ticks as f64 / TICKS_PER_SECOND - Self::EPOCH_OFFSET.value())
    }

    /// Convert a reference-epoch interval to a tick count in this scale.
    ///
    /// Rounded to the nearest tick; the interval is a double, so the
    /// product can sit a few ULP off the true count.
    #[inline]
    fn reference_to_ticks(interval: Seconds) -> i64 {
        ((interval.value() + Self::EPOCH_OFFSET.value()) * TICKS_PER_SECOND).round() as i64
    }
}

/// Reference ticks — tick zero at the reference epoch itself (2001-01-01).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Reference;

impl TickScale for Reference {
    const LABEL: &'static str = "reference";
    const EPOCH_OFFSET: Seconds = Seconds::new(0.0);
}

/// Unix-epoch ticks — tick zero at 1970-01-01T00:00:00 UTC.
///
/// Note these are *ticks* (1e-7 s), not the whole seconds of `time_t`;
/// the plain-seconds view lives on
/// [`DateTime::epoch`](crate::DateTime::epoch).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct UnixEpoch;

/// Seconds from 1970-01-01 to 2001-01-01.
const UNIX_TO_REFERENCE: Seconds = Seconds::new(978_307_200.0);

impl TickScale for UnixEpoch {
    const LABEL: &'static str = "unix";
    const EPOCH_OFFSET: Seconds = UNIX_TO_REFERENCE;
}

/// LDAP / Windows file-time ticks — tick zero at 1601-01-01T00:00:00 UTC.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ldap;

/// Seconds from 1601-01-01 to 2001-01-01.
const LDAP_TO_REFERENCE: Seconds = Seconds::new(12_622_780_800.0);

impl TickScale for Ldap {
    const LABEL: &'static str = "ldap";
    const EPOCH_OFFSET: Seconds = LDAP_TO_REFERENCE;
}

/// .NET `DateTime` ticks — tick zero at 0001-01-01T00:00:00 UTC.
///
/// This is the long-epoch system used by `DateTime.Ticks` in the CLR and
/// by the JavaScript-tick interchange transform.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DotNet;

/// Seconds from 0001-01-01 to 2001-01-01.
const DOTNET_TO_REFERENCE: Seconds = Seconds::new(63_113_904_000.0);

impl TickScale for DotNet {
    const LABEL: &'static str = "dotnet";
    const EPOCH_OFFSET: Seconds = DOTNET_TO_REFERENCE;
}
