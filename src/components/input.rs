//! The values a `PartialDate` can be created from.

use std::time::SystemTime;

use jiff::{Timestamp, Zoned};

/// An input to `PartialDate::try_new`.
///
/// Text is read against the granularity it is given with. Every other
/// variant is a precise instant and is taken as-is, which is how a coarser
/// view is extracted from a full timestamp.
#[derive(Debug, Clone)]
pub enum Input<'a> {
    /// The textual form of a value, e.g. `"2025 w45"`.
    Text(&'a str),
    /// An exact instant, viewed in the host time zone.
    Timestamp(Timestamp),
    /// A system time, viewed in the host time zone.
    SystemTime(SystemTime),
    /// A zone-aware instant, kept in its own time zone.
    Zoned(Zoned),
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl<'a> From<&'a String> for Input<'a> {
    fn from(value: &'a String) -> Self {
        Self::Text(value.as_str())
    }
}

impl From<Timestamp> for Input<'_> {
    fn from(value: Timestamp) -> Self {
        Self::Timestamp(value)
    }
}

impl From<SystemTime> for Input<'_> {
    fn from(value: SystemTime) -> Self {
        Self::SystemTime(value)
    }
}

impl From<Zoned> for Input<'_> {
    fn from(value: Zoned) -> Self {
        Self::Zoned(value)
    }
}

impl From<&Zoned> for Input<'_> {
    fn from(value: &Zoned) -> Self {
        Self::Zoned(value.clone())
    }
}
