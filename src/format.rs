// SPDX-License-Identifier: MIT

//! Named formats mapped to host formatter patterns.
//!
//! The library exposes a closed set of named formats and a coarse style
//! enum; both resolve to chrono strftime pattern strings, which are the
//! patterns the host formatter understands.  Raw patterns passed to
//! [`DateTime::format_pattern`](crate::DateTime::format_pattern) and
//! [`DateTime::parse`](crate::DateTime::parse) use the same specifier
//! language.

/// The closed set of named date/time formats.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DateTimeFormat {
    /// `1999-12-01 15:44:23.500`
    Full,
    /// `1999-12-01 15:44:23`
    Long,
    /// `1999.12.01-15.44.23` — safe for file names.
    Filename,
    /// `01/12/99`
    ShortDate,
    /// `3:44 PM`
    ShortTime,
    /// `15:44` — 24-hour ("military") variant.
    ShortTimeM,
    /// `01. Dec, 1999.`
    MediumDate,
    /// `Dec 01, 1999.`
    MediumDateA,
    /// `3:44:23 PM`
    MediumTime,
    /// `15:44:23` — 24-hour variant.
    MediumTimeM,
    /// `01. December, 1999.`
    LongDate,
    /// `1999-12-01T15:44:23+0000`
    Iso,
}

impl DateTimeFormat {
    /// The host formatter pattern this named format resolves to.
    pub const fn pattern(self) -> &'static str {
        match self {
            Self::Full => "%Y-%m-%d %H:%M:%S%.3f",
            Self::Long => "%Y-%m-%d %H:%M:%S",
            Self::Filename => "%Y.%m.%d-%H.%M.%S",
            Self::ShortDate => "%d/%m/%y",
            Self::ShortTime => "%-I:%M %p",
            Self::ShortTimeM => "%H:%M",
            Self::MediumDate => "%d. %b, %Y.",
            Self::MediumDateA => "%b %d, %Y.",
            Self::MediumTime => "%-I:%M:%S %p",
            Self::MediumTimeM => "%H:%M:%S",
            Self::LongDate => "%d. %B, %Y.",
            Self::Iso => "%Y-%m-%dT%H:%M:%S%z",
        }
    }
}

/// Coarse date rendering styles, in increasing verbosity.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DateStyle {
    /// `12/1/99`
    Short,
    /// `Dec 1, 1999`
    Medium,
    /// `December 1, 1999`
    Long,
    /// `Wednesday, December 1, 1999`
    Full,
}

impl DateStyle {
    /// The host formatter pattern this style resolves to.
    pub const fn pattern(self) -> &'static str {
        match self {
            Self::Short => "%-m/%-d/%y",
            Self::Medium => "%b %-d, %Y",
            Self::Long => "%B %-d, %Y",
            Self::Full => "%A, %B %-d, %Y",
        }
    }
}
