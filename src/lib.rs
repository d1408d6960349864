//! The `partial_date` crate implements calendar values held at a varying
//! precision: a time of day, a date, a year, a quarter, a month or an ISO
//! 8601 week.
//!
//! A `PartialDate` is read from its compact textual form or from an exact
//! instant, stored as the first instant of its period, and written back in
//! the canonical form of its granularity.
//!
//! ```rust
//! use partial_date::{Granularity, PartialDate};
//!
//! let quarter = PartialDate::try_new("2025 Q3", Granularity::Quarter, &()).unwrap();
//! assert_eq!(quarter.to_string(), "2025 Q3");
//! assert_eq!(quarter.to_timestamp().to_string(), "2025-07-01T00:00:00Z");
//!
//! // Edit the instant elsewhere, then read the result back.
//! let june = quarter.to_zoned().with().month(6).build().unwrap();
//! let edited = PartialDate::try_new(june, Granularity::Quarter, &()).unwrap();
//! assert_eq!(edited.to_string(), "2025 Q2");
//! ```
//!
//! Values are read in the time zone of a [`HostTimeZone`]. `()` is UTC, a
//! `jiff::tz::TimeZone` is itself, and with the `sys` feature
//! [`LocalHostSystem`] uses the zone of the running system.
//!
//! ```rust
//! # #[cfg(feature = "tzdb")]
//! # {
//! use partial_date::{tzdb, Granularity, PartialDate};
//!
//! let adelaide = tzdb::get("Australia/Adelaide").unwrap();
//! let timestamp = "2022-07-31T14:30:00Z".parse::<jiff::Timestamp>().unwrap();
//! let date = PartialDate::try_new(timestamp, Granularity::Date, &adelaide).unwrap();
//! assert_eq!(date.to_string(), "2022-08-01");
//! # }
//! ```
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap
)]

pub mod error;
pub mod format;
pub mod granularity;
pub mod host;
pub mod iso;
pub mod parsers;

mod components;

#[cfg(feature = "sys")]
pub(crate) mod sys;

#[cfg(feature = "tzdb")]
pub mod tzdb;

#[doc(inline)]
pub use error::{ErrorKind, PartialDateError};

/// The `partial_date` result type
pub type PartialDateResult<T> = Result<T, PartialDateError>;

pub use crate::{
    components::{Input, PartialDate},
    granularity::{Granularity, Pattern, Token},
    host::{FixedHost, HostClock, HostHooks, HostTimeZone},
};

#[cfg(feature = "sys")]
pub use crate::sys::{LocalHostSystem, UtcHostSystem};
