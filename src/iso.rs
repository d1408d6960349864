//! This module implements the calendar normalization used by `PartialDate`.
//!
//! Every coarse granularity is stored as the first instant of its period:
//!   - `year` and `month` start on the first day of the period at 00:00.
//!   - `quarter` starts on the first day of its first month at 00:00.
//!   - `week` starts on the Monday of the ISO 8601 week at 00:00.
//!
//! A `time` is anchored to `REFERENCE_DATE`.

use jiff::{
    civil::{Date, ISOWeekDate, Time, Weekday},
    tz::TimeZone,
    Zoned,
};

/// The civil date a `time` parsed from text is anchored to.
pub const REFERENCE_DATE: Date = jiff::civil::date(1970, 1, 1);

/// Returns the quarter (1-4) that `month` (1-12) falls in.
#[inline]
#[must_use]
pub const fn quarter_of_month(month: i8) -> i8 {
    (month - 1) / 3 + 1
}

/// Returns the first month (1-12) of `quarter` (1-4).
#[inline]
#[must_use]
pub const fn first_month_of_quarter(quarter: i8) -> i8 {
    (quarter - 1) * 3 + 1
}

/// Returns the Monday of ISO week `week` in the ISO week-numbering year `year`.
pub fn start_of_iso_week(year: i16, week: i8) -> Result<Date, jiff::Error> {
    Ok(ISOWeekDate::new(year, week, Weekday::Monday)?.date())
}

/// Returns the first day of `quarter` in `year`.
pub fn start_of_quarter(year: i16, quarter: i8) -> Result<Date, jiff::Error> {
    Date::new(year, first_month_of_quarter(quarter), 1)
}

/// Resolves midnight of `date` in `tz`.
///
/// A midnight skipped by a transition resolves to the first instant after
/// the gap.
pub fn start_of_day(date: Date, tz: &TimeZone) -> Result<Zoned, jiff::Error> {
    tz.to_zoned(date.to_datetime(Time::midnight()))
}

/// Resolves `time` on `REFERENCE_DATE` in `tz`.
pub fn anchor_time(time: Time, tz: &TimeZone) -> Result<Zoned, jiff::Error> {
    tz.to_zoned(REFERENCE_DATE.to_datetime(time))
}
