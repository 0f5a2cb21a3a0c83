// SPDX-License-Identifier: MIT

//! JavaScript-epoch tick interop.
//!
//! The JavaScript `Date` type counts milliseconds since the Unix epoch;
//! the .NET `DateTime` type counts 100 ns ticks since 0001-01-01.  The
//! two are related by a fixed linear transform, and the JavaScript count
//! of the **UTC form** of an instant is the wire representation used for
//! serialization: a single signed 64-bit integer.

use crate::datetime::{DateTime, DateTimeKind};
use crate::scales::DotNet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// .NET long-epoch tick count of the Unix epoch (1970-01-01T00:00:00Z).
pub const INITIAL_JAVASCRIPT_TICKS: i64 = 621_355_968_000_000_000;

/// JavaScript milliseconds-since-1970 → .NET long-epoch ticks.
#[inline]
pub fn javascript_ticks_to_dotnet(javascript_ticks: i64) -> i64 {
    javascript_ticks * 10_000 + INITIAL_JAVASCRIPT_TICKS
}

/// .NET long-epoch ticks → JavaScript milliseconds-since-1970.
///
/// Truncating division: sub-millisecond tick precision is dropped.
#[inline]
pub fn dotnet_ticks_to_javascript(dotnet_ticks: i64) -> i64 {
    (dotnet_ticks - INITIAL_JAVASCRIPT_TICKS) / 10_000
}

impl DateTime {
    /// JavaScript tick count of the UTC form of this instant.
    pub fn to_javascript_ticks(&self) -> i64 {
        dotnet_ticks_to_javascript(self.to_utc().to_ticks::<DotNet>())
    }

    /// Build from a JavaScript tick count.  The kind is forced to Utc —
    /// the JavaScript epoch is defined in UTC.
    pub fn from_javascript_ticks(javascript_ticks: i64) -> Self {
        Self::from_ticks::<DotNet>(javascript_ticks_to_dotnet(javascript_ticks), DateTimeKind::Utc)
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for DateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(self.to_javascript_ticks())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for DateTime {
    /// Lenient decode: malformed input degrades to
    /// [`DateTime::min_value`] in Utc instead of failing.  Callers that
    /// need round-trip fidelity must validate separately.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match i64::deserialize(deserializer) {
            Ok(ticks) => Self::from_javascript_ticks(ticks),
            Err(_) => Self::min_value(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_is_linear_around_the_unix_epoch() {
        assert_eq!(javascript_ticks_to_dotnet(0), INITIAL_JAVASCRIPT_TICKS);
        assert_eq!(dotnet_ticks_to_javascript(INITIAL_JAVASCRIPT_TICKS), 0);
        assert_eq!(javascript_ticks_to_dotnet(1), INITIAL_JAVASCRIPT_TICKS + 10_000);
    }

    #[test]
    fn transforms_invert_each_other() {
        for &js in &[0i64, 1, -1, 1_449_532_800_000, -86_400_000] {
            assert_eq!(dotnet_ticks_to_javascript(javascript_ticks_to_dotnet(js)), js);
        }
    }

    #[test]
    fn javascript_ticks_round_trip_through_datetime() {
        let dt = DateTime::from_fields(
            2015,
            12,
            8,
            14,
            22,
            11,
            0,
            crate::DateTimeKind::Utc,
            crate::DayOfWeek::Sunday,
        );
        let js = dt.to_javascript_ticks();
        let back = DateTime::from_javascript_ticks(js);
        assert_eq!(back, dt);
        assert_eq!(back.kind(), DateTimeKind::Utc);
    }

    #[test]
    fn javascript_constructor_forces_utc_kind() {
        // 2015-12-08T00:00:00Z in JavaScript milliseconds.
        let dt = DateTime::from_javascript_ticks(1_449_532_800_000);
        assert_eq!(dt.kind(), DateTimeKind::Utc);
        assert_eq!(dt.year(), 2015);
        assert_eq!(dt.month(), 12);
        assert_eq!(dt.day(), 8);
        assert_eq!(dt.hour(), 0);
    }

    #[test]
    fn local_instants_serialize_through_their_utc_form() {
        let local = DateTime::from_fields(
            2015,
            12,
            8,
            14,
            22,
            11,
            0,
            crate::DateTimeKind::Local,
            crate::DayOfWeek::Sunday,
        );
        // The tick count is kind-independent because the stored interval is.
        assert_eq!(local.to_javascript_ticks(), local.to_utc().to_javascript_ticks());
    }
}
