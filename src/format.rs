//! This module implements writing a value with its canonical pattern.

use core::fmt;

use jiff::Zoned;
use writeable::{impl_display_with_writeable, LengthHint, Writeable};

use crate::{
    granularity::{Granularity, Token},
    iso,
};

/// Writes a `Zoned` with the canonical pattern of a `Granularity`.
///
/// The year of a `week` value is its ISO week-numbering year, so the Monday
/// `2024-12-30` is written as `2025 w01`.
#[derive(Debug, Clone, Copy)]
pub struct FormattablePartial<'a> {
    granularity: Granularity,
    zoned: &'a Zoned,
}

impl<'a> FormattablePartial<'a> {
    #[inline]
    #[must_use]
    pub fn new(zoned: &'a Zoned, granularity: Granularity) -> Self {
        Self { granularity, zoned }
    }

    fn year(&self) -> i16 {
        match self.granularity {
            Granularity::Week => self.zoned.date().iso_week_date().year(),
            _ => self.zoned.year(),
        }
    }
}

impl Writeable for FormattablePartial<'_> {
    fn write_to<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        for &token in self.granularity.pattern().tokens() {
            match token {
                Token::Year => write_year(self.year(), sink)?,
                Token::Month => write_padded_u8(self.zoned.month() as u8, sink)?,
                Token::Day => write_padded_u8(self.zoned.day() as u8, sink)?,
                Token::Hour => write_padded_u8(self.zoned.hour() as u8, sink)?,
                Token::Minute => write_padded_u8(self.zoned.minute() as u8, sink)?,
                Token::Quarter => {
                    let quarter = iso::quarter_of_month(self.zoned.month());
                    (quarter as u8).write_to(sink)?;
                }
                Token::IsoWeek => {
                    let week = self.zoned.date().iso_week_date().week();
                    write_padded_u8(week as u8, sink)?;
                }
                Token::Literal(c) => sink.write_char(c)?,
            }
        }
        Ok(())
    }

    fn writeable_length_hint(&self) -> LengthHint {
        let pattern = self.granularity.pattern();
        let sign = usize::from(pattern.tokens().contains(&Token::Year) && self.year() < 0);
        LengthHint::exact(pattern.len() + sign)
    }
}

impl_display_with_writeable!(FormattablePartial<'_>);

/// Returns the canonical textual form of `zoned` at `granularity`.
#[must_use]
pub fn format(zoned: &Zoned, granularity: Granularity) -> String {
    FormattablePartial::new(zoned, granularity)
        .write_to_string()
        .into_owned()
}

fn write_padded_u8<W: fmt::Write + ?Sized>(num: u8, sink: &mut W) -> fmt::Result {
    if num < 10 {
        sink.write_char('0')?;
    }
    num.write_to(sink)
}

/// Writes a year as four digits, with a leading `-` before year zero.
fn write_year<W: fmt::Write + ?Sized>(year: i16, sink: &mut W) -> fmt::Result {
    if year < 0 {
        sink.write_char('-')?;
    }
    let year = year.unsigned_abs();
    let padding = match year {
        0..=9 => 3,
        10..=99 => 2,
        100..=999 => 1,
        _ => 0,
    };
    for _ in 0..padding {
        sink.write_char('0')?;
    }
    year.write_to(sink)
}

#[cfg(test)]
mod tests {
    use jiff::{civil::date, tz::TimeZone, Zoned};
    use writeable::{assert_writeable_eq, LengthHint, Writeable};

    use super::{format, FormattablePartial};
    use crate::Granularity;

    fn zoned(year: i16, month: i8, day: i8, hour: i8, minute: i8) -> Zoned {
        date(year, month, day)
            .at(hour, minute, 56, 789_000_000)
            .to_zoned(TimeZone::UTC)
            .unwrap()
    }

    #[test]
    fn writes_each_granularity() {
        let value = zoned(2025, 5, 23, 12, 34);
        let expected = [
            (Granularity::Date, "2025-05-23"),
            (Granularity::Time, "12:34"),
            (Granularity::Year, "2025"),
            (Granularity::Quarter, "2025 Q2"),
            (Granularity::Month, "2025-05"),
            (Granularity::Week, "2025 w21"),
        ];
        for (granularity, text) in expected {
            assert_writeable_eq!(FormattablePartial::new(&value, granularity), text);
            assert_eq!(format(&value, granularity), text);
        }
    }

    #[test]
    fn quarter_follows_month() {
        for month in 1..=12 {
            let value = zoned(2025, month, 1, 0, 0);
            let expected = format!("2025 Q{}", (month - 1) / 3 + 1);
            assert_eq!(format(&value, Granularity::Quarter), expected);
        }
    }

    #[test]
    fn week_uses_iso_week_year() {
        assert_eq!(format(&zoned(2024, 12, 30, 0, 0), Granularity::Week), "2025 w01");
        assert_eq!(format(&zoned(2021, 1, 3, 0, 0), Granularity::Week), "2020 w53");
        assert_eq!(format(&zoned(2021, 1, 4, 0, 0), Granularity::Week), "2021 w01");
        assert_eq!(format(&zoned(2024, 12, 30, 0, 0), Granularity::Year), "2024");
    }

    #[test]
    fn pads_small_values() {
        let value = zoned(987, 1, 2, 3, 4);
        assert_eq!(format(&value, Granularity::Date), "0987-01-02");
        assert_eq!(format(&value, Granularity::Time), "03:04");
        assert_eq!(format(&value, Granularity::Year), "0987");
    }

    #[test]
    fn negative_years_carry_a_sign() {
        let value = zoned(-44, 3, 15, 12, 0);
        let expected = [
            (Granularity::Year, "-0044"),
            (Granularity::Date, "-0044-03-15"),
            (Granularity::Month, "-0044-03"),
            (Granularity::Time, "12:00"),
        ];
        for (granularity, text) in expected {
            let formattable = FormattablePartial::new(&value, granularity);
            assert_writeable_eq!(formattable, text);
            assert_eq!(formattable.writeable_length_hint(), LengthHint::exact(text.len()));
        }
    }
}
