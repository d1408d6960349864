//! This module implements `Granularity` and the canonical pattern of each
//! granularity.
//!
//! The canonical pattern is the textual contract of a `PartialDate`. Values
//! are written with the pattern of their granularity and read back against
//! it, so changing any of the patterns below is a breaking change.
//!
//! | Granularity | Pattern       |
//! |-------------|---------------|
//! | `date`      | `YYYY-MM-DD`  |
//! | `time`      | `HH:mm`       |
//! | `year`      | `YYYY`        |
//! | `quarter`   | `YYYY [Q]Q`   |
//! | `month`     | `YYYY-MM`     |
//! | `week`      | `YYYY [w]WW`  |

use core::{fmt, str::FromStr};

use crate::PartialDateError;

/// The precision of a `PartialDate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Granularity {
    /// A time of day, `HH:mm`.
    Time,
    /// A calendar date, `YYYY-MM-DD`.
    Date,
    /// A calendar year, `YYYY`.
    Year,
    /// A quarter of a calendar year, `YYYY [Q]Q`.
    Quarter,
    /// A calendar month, `YYYY-MM`.
    Month,
    /// An ISO 8601 week, `YYYY [w]WW`.
    Week,
}

impl Granularity {
    /// All granularities.
    pub const ALL: [Granularity; 6] = [
        Self::Time,
        Self::Date,
        Self::Year,
        Self::Quarter,
        Self::Month,
        Self::Week,
    ];

    /// Returns the canonical pattern for this granularity.
    #[must_use]
    pub const fn pattern(self) -> Pattern {
        match self {
            Self::Date => Pattern(&[
                Token::Year,
                Token::Literal('-'),
                Token::Month,
                Token::Literal('-'),
                Token::Day,
            ]),
            Self::Time => Pattern(&[Token::Hour, Token::Literal(':'), Token::Minute]),
            Self::Year => Pattern(&[Token::Year]),
            Self::Quarter => Pattern(&[
                Token::Year,
                Token::Literal(' '),
                Token::Literal('Q'),
                Token::Quarter,
            ]),
            Self::Month => Pattern(&[Token::Year, Token::Literal('-'), Token::Month]),
            Self::Week => Pattern(&[
                Token::Year,
                Token::Literal(' '),
                Token::Literal('w'),
                Token::IsoWeek,
            ]),
        }
    }

    /// Returns the tag of this granularity.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Time => "time",
            Self::Date => "date",
            Self::Year => "year",
            Self::Quarter => "quarter",
            Self::Month => "month",
            Self::Week => "week",
        }
    }
}

impl FromStr for Granularity {
    type Err = PartialDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "time" => Ok(Self::Time),
            "date" => Ok(Self::Date),
            "year" => Ok(Self::Year),
            "quarter" => Ok(Self::Quarter),
            "month" => Ok(Self::Month),
            "week" => Ok(Self::Week),
            _ => Err(PartialDateError::invalid_argument()
                .with_message(format!("unrecognized granularity tag: {s:?}"))),
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single field or literal of a `Pattern`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// Four digit year, `YYYY`.
    Year,
    /// Two digit month of year, `MM`.
    Month,
    /// Two digit day of month, `DD`.
    Day,
    /// Two digit hour of day, `HH`.
    Hour,
    /// Two digit minute of hour, `mm`.
    Minute,
    /// One digit quarter of year, `Q`.
    Quarter,
    /// Two digit ISO 8601 week number, `WW`.
    IsoWeek,
    /// A literal character.
    Literal(char),
}

impl Token {
    /// The number of digits a numeric token is written with.
    pub(crate) const fn width(self) -> usize {
        match self {
            Self::Year => 4,
            Self::Quarter | Self::Literal(_) => 1,
            Self::Month | Self::Day | Self::Hour | Self::Minute | Self::IsoWeek => 2,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Year => f.write_str("YYYY"),
            Self::Month => f.write_str("MM"),
            Self::Day => f.write_str("DD"),
            Self::Hour => f.write_str("HH"),
            Self::Minute => f.write_str("mm"),
            Self::Quarter => f.write_str("Q"),
            Self::IsoWeek => f.write_str("WW"),
            // Letters are escaped so they are not read as a field.
            Self::Literal(c) if c.is_ascii_alphabetic() => write!(f, "[{c}]"),
            Self::Literal(c) => write!(f, "{c}"),
        }
    }
}

/// The canonical textual pattern of a `Granularity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern(&'static [Token]);

impl Pattern {
    /// Returns the tokens of this pattern.
    #[inline]
    #[must_use]
    pub const fn tokens(&self) -> &'static [Token] {
        self.0
    }

    /// Returns the length in bytes of any string written with this pattern.
    pub(crate) fn len(&self) -> usize {
        self.0.iter().map(|token| token.width()).sum()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in self.0 {
            write!(f, "{token}")?;
        }
        Ok(())
    }
}
