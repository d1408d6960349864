use std::time::SystemTime;

use jiff::{tz::TimeZone, Timestamp};

use crate::host::{HostClock, HostHooks, HostTimeZone};
use crate::{tzdb, PartialDateError, PartialDateResult};

/// A UTC host system implementation that will return the current time
/// with a UTC time zone.
///
/// This implementation is backed by [`std::time::SystemTime`].
#[derive(Debug, Default, Clone, Copy)]
pub struct UtcHostSystem;

impl HostHooks for UtcHostSystem {}

impl HostClock for UtcHostSystem {
    fn get_host_timestamp(&self) -> PartialDateResult<Timestamp> {
        get_system_timestamp()
    }
}

impl HostTimeZone for UtcHostSystem {
    fn get_host_time_zone(&self) -> PartialDateResult<TimeZone> {
        Ok(TimeZone::UTC)
    }
}

/// A local host system implementation that will return the current time
/// with the system time zone.
///
/// This implementation is backed by [`std::time::SystemTime`] and [`iana_time_zone`]
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalHostSystem;

impl HostHooks for LocalHostSystem {}

impl HostClock for LocalHostSystem {
    fn get_host_timestamp(&self) -> PartialDateResult<Timestamp> {
        get_system_timestamp()
    }
}

impl HostTimeZone for LocalHostSystem {
    fn get_host_time_zone(&self) -> PartialDateResult<TimeZone> {
        get_system_timezone()
    }
}

#[inline]
pub(crate) fn get_system_timezone() -> PartialDateResult<TimeZone> {
    let identifier = iana_time_zone::get_timezone()
        .map_err(|_| PartialDateError::general("Error fetching system time zone"))?;
    tzdb::get(&identifier)
}

/// Returns the system time as a `Timestamp`.
pub(crate) fn get_system_timestamp() -> PartialDateResult<Timestamp> {
    Timestamp::try_from(SystemTime::now())
        .map_err(|_| PartialDateError::general("Error fetching system time"))
}
