//! This module implements `PartialDate` and any directly related algorithms.

use std::time::SystemTime;

use jiff::{Timestamp, Zoned};
use writeable::{impl_display_with_writeable, LengthHint, Writeable};

use crate::{
    components::Input,
    format::FormattablePartial,
    host::{HostHooks, HostTimeZone},
    parsers, Granularity, PartialDateResult,
};

/// A calendar value held at a `Granularity`.
///
/// A `PartialDate` stores the first instant of its period: a `month` is its
/// first day at 00:00, a `week` its Monday at 00:00. It is written back with
/// the canonical pattern of its granularity through `Display`.
///
/// ```rust
/// use partial_date::{Granularity, PartialDate};
///
/// let week = PartialDate::try_new("2025 w45", Granularity::Week, &()).unwrap();
/// assert_eq!(week.to_string(), "2025 w45");
/// assert_eq!(week.to_timestamp().to_string(), "2025-11-03T00:00:00Z");
///
/// // A coarser view of an exact instant.
/// let timestamp = "2025-05-23T12:34:56.789Z".parse::<jiff::Timestamp>().unwrap();
/// let quarter = PartialDate::try_new(timestamp, Granularity::Quarter, &()).unwrap();
/// assert_eq!(quarter.to_string(), "2025 Q2");
/// ```
///
/// Two values are equal when they share a granularity and denote the same
/// instant in the same time zone. A `time` compares its time of day only.
#[derive(Debug, Clone)]
pub struct PartialDate {
    granularity: Granularity,
    value: Zoned,
}

impl PartialDate {
    /// Creates a new `PartialDate` from `input`, reading it in the host's time zone.
    pub fn try_new<'a>(
        input: impl Into<Input<'a>>,
        granularity: Granularity,
        host: &(impl HostTimeZone + ?Sized),
    ) -> PartialDateResult<Self> {
        let tz = host.get_host_time_zone()?;
        let value = parsers::parse(input.into(), granularity, &tz)?;
        Ok(Self { granularity, value })
    }

    /// Creates a new `PartialDate` from `input` with a granularity tag such as `"week"`.
    pub fn try_from_tag<'a>(
        input: impl Into<Input<'a>>,
        tag: &str,
        host: &(impl HostTimeZone + ?Sized),
    ) -> PartialDateResult<Self> {
        let granularity = tag.parse()?;
        Self::try_new(input, granularity, host)
    }

    /// Creates a `PartialDate` for the host's current time.
    pub fn now(
        granularity: Granularity,
        host: &(impl HostHooks + ?Sized),
    ) -> PartialDateResult<Self> {
        let timestamp = host.get_system_timestamp()?;
        Self::try_new(timestamp, granularity, host)
    }

    /// Returns the granularity of this `PartialDate`.
    #[inline]
    #[must_use]
    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    /// Returns the stored instant.
    #[inline]
    #[must_use]
    pub fn as_zoned(&self) -> &Zoned {
        &self.value
    }

    /// Returns the stored instant.
    #[inline]
    #[must_use]
    pub fn to_zoned(&self) -> Zoned {
        self.value.clone()
    }

    /// Returns the stored instant as a `Timestamp`.
    #[inline]
    #[must_use]
    pub fn to_timestamp(&self) -> Timestamp {
        self.value.timestamp()
    }

    #[inline]
    #[must_use]
    pub fn to_system_time(&self) -> SystemTime {
        SystemTime::from(self.value.timestamp())
    }
}

impl PartialEq for PartialDate {
    fn eq(&self, other: &Self) -> bool {
        if self.granularity != other.granularity {
            return false;
        }
        match self.granularity {
            Granularity::Time => self.value.time() == other.value.time(),
            _ => {
                self.value.timestamp() == other.value.timestamp()
                    && self.value.time_zone() == other.value.time_zone()
            }
        }
    }
}

impl Eq for PartialDate {}

impl Writeable for PartialDate {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        FormattablePartial::new(&self.value, self.granularity).write_to(sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        FormattablePartial::new(&self.value, self.granularity).writeable_length_hint()
    }
}

impl_display_with_writeable!(PartialDate);

#[cfg(test)]
mod tests {
    use jiff::{
        civil::{date, time},
        tz::{offset, TimeZone},
        Timestamp, ToSpan,
    };

    use super::PartialDate;
    use crate::{host::FixedHost, ErrorKind, Granularity};

    #[test]
    fn text_round_trip() {
        let values = [
            (Granularity::Date, "2025-05-23"),
            (Granularity::Time, "12:34"),
            (Granularity::Year, "2025"),
            (Granularity::Quarter, "2025 Q3"),
            (Granularity::Month, "2025-05"),
            (Granularity::Week, "2025 w45"),
            (Granularity::Week, "2025 w01"),
            (Granularity::Week, "2020 w53"),
            (Granularity::Date, "2024-02-29"),
        ];
        let zones = [TimeZone::UTC, TimeZone::fixed(offset(-7)), TimeZone::fixed(offset(10))];
        for tz in &zones {
            for (granularity, text) in values {
                let value = PartialDate::try_new(text, granularity, tz).unwrap();
                assert_eq!(value.to_string(), text, "{granularity} in {tz:?}");
            }
        }
    }

    #[test]
    fn lenient_forms_are_canonicalized() {
        let week = PartialDate::try_new("2025w45", Granularity::Week, &()).unwrap();
        assert_eq!(week.to_string(), "2025 w45");
        let quarter = PartialDate::try_new("2025 3", Granularity::Quarter, &()).unwrap();
        assert_eq!(quarter.to_string(), "2025 Q3");
        let time = PartialDate::try_new("7:05:30", Granularity::Time, &()).unwrap();
        assert_eq!(time.to_string(), "07:05");
    }

    #[test]
    fn timestamps_in_utc() {
        let expected = [
            (Granularity::Date, "2025-05-23", "2025-05-23T00:00:00Z"),
            (Granularity::Week, "2025 w45", "2025-11-03T00:00:00Z"),
            (Granularity::Month, "2025-05", "2025-05-01T00:00:00Z"),
            (Granularity::Quarter, "2025 Q3", "2025-07-01T00:00:00Z"),
            (Granularity::Year, "2025", "2025-01-01T00:00:00Z"),
            (Granularity::Time, "12:34", "1970-01-01T12:34:00Z"),
        ];
        for (granularity, text, instant) in expected {
            let value = PartialDate::try_new(text, granularity, &()).unwrap();
            assert_eq!(value.to_timestamp(), instant.parse::<Timestamp>().unwrap());
        }
    }

    #[test]
    fn periods_are_normalized() {
        let tz = TimeZone::fixed(offset(5));
        for (granularity, text) in [
            (Granularity::Year, "2025"),
            (Granularity::Quarter, "2025 Q4"),
            (Granularity::Month, "2025-11"),
            (Granularity::Week, "2025 w47"),
        ] {
            let value = PartialDate::try_new(text, granularity, &tz).unwrap();
            assert_eq!(value.as_zoned().time(), time(0, 0, 0, 0), "{text}");
            if granularity != Granularity::Week {
                assert_eq!(value.as_zoned().day(), 1, "{text}");
            }
        }
    }

    #[test]
    fn extracting_views_from_a_timestamp() {
        let timestamp: Timestamp = "2025-05-23T12:34:56.789Z".parse().unwrap();
        let expected = [
            (Granularity::Date, "2025-05-23"),
            (Granularity::Time, "12:34"),
            (Granularity::Year, "2025"),
            (Granularity::Quarter, "2025 Q2"),
            (Granularity::Month, "2025-05"),
            (Granularity::Week, "2025 w21"),
        ];
        for (granularity, text) in expected {
            let value = PartialDate::try_new(timestamp, granularity, &()).unwrap();
            assert_eq!(value.to_string(), text);
            assert_eq!(value.to_timestamp(), timestamp);
        }
    }

    #[test]
    fn timestamp_round_trip() {
        let tz = TimeZone::fixed(offset(-8));
        for (granularity, text) in [
            (Granularity::Date, "2025-05-23"),
            (Granularity::Week, "2022 w21"),
            (Granularity::Quarter, "2025 Q3"),
            (Granularity::Time, "23:59"),
        ] {
            let value = PartialDate::try_new(text, granularity, &tz).unwrap();
            let again = PartialDate::try_new(value.to_timestamp(), granularity, &tz).unwrap();
            assert_eq!(again.to_string(), value.to_string());
            assert_eq!(again, value);

            let system = PartialDate::try_new(value.to_system_time(), granularity, &tz).unwrap();
            assert_eq!(system.to_string(), text);
        }
    }

    #[test]
    fn edited_timestamps_are_reread() {
        let value = PartialDate::try_new("2022 w21", Granularity::Week, &()).unwrap();
        let edited = value.to_zoned().with().day(11).build().unwrap();
        let result = PartialDate::try_new(&edited, Granularity::Week, &()).unwrap();
        assert_eq!(result.to_string(), "2022 w19");

        let value = PartialDate::try_new("2025 Q3", Granularity::Quarter, &()).unwrap();
        let edited = value.to_zoned().with().month(6).build().unwrap();
        let result = PartialDate::try_new(edited, Granularity::Quarter, &()).unwrap();
        assert_eq!(result.to_string(), "2025 Q2");

        let value = PartialDate::try_new("12:00", Granularity::Time, &()).unwrap();
        let edited = value.to_zoned().checked_add(11.hours().minutes(59)).unwrap();
        let result = PartialDate::try_new(edited, Granularity::Time, &()).unwrap();
        assert_eq!(result.to_string(), "23:59");
    }

    #[test]
    fn time_equality_ignores_the_date() {
        let text = PartialDate::try_new("12:34", Granularity::Time, &()).unwrap();
        let timestamp: Timestamp = "2025-05-23T12:34:00Z".parse().unwrap();
        let extracted = PartialDate::try_new(timestamp, Granularity::Time, &()).unwrap();
        assert_eq!(text, extracted);

        let later = PartialDate::try_new("12:35", Granularity::Time, &()).unwrap();
        assert_ne!(text, later);
    }

    #[test]
    fn equality_respects_the_time_zone() {
        let timestamp: Timestamp = "2025-05-23T12:34:56Z".parse().unwrap();
        let utc = PartialDate::try_new(timestamp, Granularity::Date, &TimeZone::UTC).unwrap();
        let kiribati =
            PartialDate::try_new(timestamp, Granularity::Date, &TimeZone::fixed(offset(14)))
                .unwrap();
        assert_eq!(utc.to_string(), "2025-05-23");
        assert_eq!(kiribati.to_string(), "2025-05-24");
        assert_ne!(utc, kiribati);

        let month = PartialDate::try_new(timestamp, Granularity::Month, &TimeZone::UTC).unwrap();
        assert_ne!(utc, month);
        assert_eq!(utc, utc.clone());
    }

    #[test]
    fn negative_years_round_trip() {
        let timestamp = date(-44, 3, 15)
            .at(0, 0, 0, 0)
            .to_zoned(TimeZone::UTC)
            .unwrap()
            .timestamp();
        let expected = [
            (Granularity::Year, Some("-0044")),
            (Granularity::Date, Some("-0044-03-15")),
            (Granularity::Month, Some("-0044-03")),
            (Granularity::Quarter, Some("-0044 Q1")),
            (Granularity::Week, None),
        ];
        for (granularity, expected) in expected {
            let value = PartialDate::try_new(timestamp, granularity, &()).unwrap();
            let text = value.to_string();
            if let Some(expected) = expected {
                assert_eq!(text, expected);
            }
            let again = PartialDate::try_new(text.as_str(), granularity, &()).unwrap();
            assert_eq!(again.to_string(), text, "{granularity}");
        }
    }

    #[test]
    fn malformed_input_produces_no_value() {
        for (granularity, text) in [
            (Granularity::Week, "not-a-week"),
            (Granularity::Quarter, "2025"),
            (Granularity::Date, "2025-05"),
            (Granularity::Time, "25:00"),
        ] {
            let err = PartialDate::try_new(text, granularity, &()).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Parse);
            assert_eq!(err.input(), Some(text));
        }
    }

    #[test]
    fn granularity_tags() {
        let value = PartialDate::try_from_tag("2025-05", "month", &()).unwrap();
        assert_eq!(value.granularity(), Granularity::Month);
        assert_eq!(value.to_string(), "2025-05");

        let err = PartialDate::try_from_tag("2025-05", "fortnight", &()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn now_reads_the_host() {
        let timestamp: Timestamp = "2025-12-31T23:30:00Z".parse().unwrap();
        let host = FixedHost::new(timestamp, TimeZone::fixed(offset(1)));
        let value = PartialDate::now(Granularity::Year, &host).unwrap();
        assert_eq!(value.to_string(), "2026");
        assert_eq!(value.as_zoned().date(), date(2026, 1, 1));

        let epoch = PartialDate::now(Granularity::Date, &()).unwrap();
        assert_eq!(epoch.to_string(), "1970-01-01");
    }
}
