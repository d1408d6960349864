//! This module implements `PartialDate` parsing.
//!
//! Text is read in one of two ways depending on the granularity:
//!   - `date`, `year` and `month` are read strictly against their canonical
//!     pattern. The whole input must match the pattern, field widths
//!     included, and the resulting date must exist.
//!   - `week`, `quarter` and `time` are read permissively, see the
//!     `lenient` module.

use jiff::{civil::Date, tz::TimeZone, Timestamp, Zoned};

use crate::{
    components::Input,
    granularity::{Granularity, Pattern, Token},
    iso, PartialDateError, PartialDateResult,
};

mod lenient;

/// Parses `input` as a value of `granularity`, normalized to the start of its
/// period in `tz`.
///
/// `Input::Zoned` values keep their own time zone.
pub fn parse(
    input: Input<'_>,
    granularity: Granularity,
    tz: &TimeZone,
) -> PartialDateResult<Zoned> {
    match input {
        Input::Text(text) => parse_text(text, granularity, tz),
        Input::Timestamp(timestamp) => Ok(timestamp.to_zoned(tz.clone())),
        Input::SystemTime(time) => {
            let timestamp = Timestamp::try_from(time).map_err(|err| {
                PartialDateError::invalid_argument()
                    .with_message("system time is outside the supported range")
                    .with_source(err)
            })?;
            Ok(timestamp.to_zoned(tz.clone()))
        }
        Input::Zoned(zoned) => Ok(zoned),
    }
}

fn parse_text(text: &str, granularity: Granularity, tz: &TimeZone) -> PartialDateResult<Zoned> {
    #[cfg(feature = "log")]
    log::trace!("parsing {text:?} as {granularity}");

    match granularity {
        Granularity::Week => lenient::parse_week(text, tz),
        Granularity::Quarter => lenient::parse_quarter(text, tz),
        Granularity::Time => lenient::parse_time(text, tz),
        Granularity::Date | Granularity::Year | Granularity::Month => {
            parse_strict(text, granularity, tz)
        }
    }
}

fn parse_strict(text: &str, granularity: Granularity, tz: &TimeZone) -> PartialDateResult<Zoned> {
    let fields = StrictFields::parse(text, granularity.pattern())
        .ok_or_else(|| reject(text, granularity))?;
    let year = fields.year.ok_or_else(|| reject(text, granularity))?;

    let date = Date::new(year, fields.month.unwrap_or(1), fields.day.unwrap_or(1))
        .map_err(|err| {
            reject(text, granularity)
                .with_message("no such calendar date")
                .with_source(err)
        })?;

    iso::start_of_day(date, tz).map_err(PartialDateError::calendar)
}

/// Creates a parse error, logging the rejected input.
pub(crate) fn reject(text: &str, granularity: Granularity) -> PartialDateError {
    #[cfg(feature = "log")]
    log::debug!("rejected {text:?} as {granularity}");

    PartialDateError::parse(text, granularity)
}

/// The fields read from a string by a strict pattern match.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct StrictFields {
    year: Option<i16>,
    month: Option<i8>,
    day: Option<i8>,
}

impl StrictFields {
    /// Reads `text` against `pattern`, returning `None` on any mismatch.
    ///
    /// Only date fields have a strict reading; times, quarters and ISO weeks
    /// are read leniently.
    fn parse(text: &str, pattern: Pattern) -> Option<Self> {
        let mut cursor = Cursor::new(text);
        let mut fields = Self::default();

        for &token in pattern.tokens() {
            match token {
                Token::Year => fields.year = Some(cursor.next_year()?),
                Token::Month => fields.month = Some(cursor.next_digits(token.width())? as i8),
                Token::Day => fields.day = Some(cursor.next_digits(token.width())? as i8),
                Token::Literal(c) => cursor.expect(c)?,
                Token::Hour | Token::Minute | Token::Quarter | Token::IsoWeek => return None,
            }
        }

        cursor.is_done().then_some(fields)
    }
}

/// A byte cursor over ASCII pattern input.
#[derive(Debug)]
struct Cursor<'a> {
    source: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source: source.as_bytes(),
            pos: 0,
        }
    }

    /// Reads exactly `width` ASCII digits.
    fn next_digits(&mut self, width: usize) -> Option<u32> {
        let digits = self.source.get(self.pos..self.pos + width)?;
        let mut value = 0u32;
        for &digit in digits {
            if !digit.is_ascii_digit() {
                return None;
            }
            value = value * 10 + u32::from(digit - b'0');
        }
        self.pos += width;
        Some(value)
    }

    /// Reads a four digit year with an optional leading `-`.
    fn next_year(&mut self) -> Option<i16> {
        let negative = self.source.get(self.pos) == Some(&b'-');
        if negative {
            self.pos += 1;
        }
        let year = self.next_digits(Token::Year.width())? as i16;
        Some(if negative { -year } else { year })
    }

    fn expect(&mut self, c: char) -> Option<()> {
        let mut buf = [0; 4];
        let expected = c.encode_utf8(&mut buf).as_bytes();
        if !self.source[self.pos..].starts_with(expected) {
            return None;
        }
        self.pos += expected.len();
        Some(())
    }

    fn is_done(&self) -> bool {
        self.pos == self.source.len()
    }
}
