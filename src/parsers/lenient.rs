//! Permissive readers for `week`, `quarter` and `time` text.
//!
//! ISO week and quarter numbers are not calendar fields, so these are read
//! by extracting the numbers and building the start of the period from them.
//! Years before year zero carry a leading `-`. Accepted forms:
//!   - `week`: `"2025 w45"`, `"2025w45"`, `"2025 45"`, `"202545"`
//!   - `quarter`: `"2025 Q3"`, `"2025Q3"`, `"2025 3"`, `"20253"`
//!   - `time`: `"12:34"`, `"7:05"`, `"12:34:56"`, `"12:34:56.789"`

use std::sync::LazyLock;

use jiff::{civil::Time, tz::TimeZone, Zoned};
use regex::{Captures, Regex};

use super::reject;
use crate::{iso, Granularity, PartialDateError, PartialDateResult};

static WEEK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(-?[0-9]{4})\s?w?([0-9]{2})$").expect("week expression is valid")
});

static QUARTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(-?[0-9]{4})\s?Q?([0-9])$").expect("quarter expression is valid")
});

static TIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{1,2}):([0-9]{2})(?::([0-9]{2})(?:\.([0-9]{1,9}))?)?$")
        .expect("time expression is valid")
});

/// Reads an ISO week, resolving to its Monday at 00:00 in `tz`.
pub(super) fn parse_week(text: &str, tz: &TimeZone) -> PartialDateResult<Zoned> {
    let captures = WEEK
        .captures(text)
        .ok_or_else(|| reject(text, Granularity::Week))?;
    let year = number(&captures, 1).ok_or_else(|| reject(text, Granularity::Week))?;
    let week = number(&captures, 2).ok_or_else(|| reject(text, Granularity::Week))?;

    let monday = iso::start_of_iso_week(year, week).map_err(|err| {
        reject(text, Granularity::Week)
            .with_message("no such ISO week")
            .with_source(err)
    })?;

    iso::start_of_day(monday, tz).map_err(PartialDateError::calendar)
}

/// Reads a quarter, resolving to the first day of its first month at 00:00 in `tz`.
pub(super) fn parse_quarter(text: &str, tz: &TimeZone) -> PartialDateResult<Zoned> {
    let captures = QUARTER
        .captures(text)
        .ok_or_else(|| reject(text, Granularity::Quarter))?;
    let year = number(&captures, 1).ok_or_else(|| reject(text, Granularity::Quarter))?;
    let quarter: i8 = number(&captures, 2).ok_or_else(|| reject(text, Granularity::Quarter))?;

    if !(1..=4).contains(&quarter) {
        return Err(reject(text, Granularity::Quarter)
            .with_message("quarter must be between 1 and 4"));
    }

    let first_day = iso::start_of_quarter(year, quarter).map_err(|err| {
        reject(text, Granularity::Quarter)
            .with_message("no such quarter")
            .with_source(err)
    })?;

    iso::start_of_day(first_day, tz).map_err(PartialDateError::calendar)
}

/// Reads a time of day, anchored to `iso::REFERENCE_DATE` in `tz`.
pub(super) fn parse_time(text: &str, tz: &TimeZone) -> PartialDateResult<Zoned> {
    let captures = TIME
        .captures(text)
        .ok_or_else(|| reject(text, Granularity::Time))?;
    let hour = number(&captures, 1).ok_or_else(|| reject(text, Granularity::Time))?;
    let minute = number(&captures, 2).ok_or_else(|| reject(text, Granularity::Time))?;
    let second = number(&captures, 3).unwrap_or(0);
    let nanosecond = captures
        .get(4)
        .map(|fraction| fraction_to_nanoseconds(fraction.as_str()))
        .unwrap_or(0);

    let time = Time::new(hour, minute, second, nanosecond).map_err(|err| {
        reject(text, Granularity::Time)
            .with_message("no such time of day")
            .with_source(err)
    })?;

    iso::anchor_time(time, tz).map_err(PartialDateError::calendar)
}

fn number<T: core::str::FromStr>(captures: &Captures<'_>, index: usize) -> Option<T> {
    captures.get(index)?.as_str().parse().ok()
}

/// Scales up to nine fractional second digits to nanoseconds.
fn fraction_to_nanoseconds(digits: &str) -> i32 {
    digits
        .bytes()
        .chain(core::iter::repeat(b'0'))
        .take(9)
        .fold(0, |acc, digit| acc * 10 + i32::from(digit - b'0'))
}
