//! Trait definitions for accessing values from the host environment.
//!
//! Every zone-dependent operation takes its time zone from a `HostTimeZone`
//! instead of process-wide state, so callers decide which zone a value is
//! read in.

use jiff::{
    tz::{Offset, TimeZone},
    Timestamp,
};

use crate::PartialDateResult;

/// The `HostClock` trait defines an accessor to the host's clock.
pub trait HostClock {
    fn get_host_timestamp(&self) -> PartialDateResult<Timestamp>;
}

/// The `HostTimeZone` trait defines the host's time zone.
pub trait HostTimeZone {
    fn get_host_time_zone(&self) -> PartialDateResult<TimeZone>;
}

/// `HostHooks` marks whether a trait implements the required host hooks with some
/// system methods.
pub trait HostHooks: HostClock + HostTimeZone {
    fn get_system_timestamp(&self) -> PartialDateResult<Timestamp> {
        self.get_host_timestamp()
    }

    fn get_system_time_zone(&self) -> PartialDateResult<TimeZone> {
        self.get_host_time_zone()
    }
}

// Implement empty providers

impl HostClock for () {
    fn get_host_timestamp(&self) -> PartialDateResult<Timestamp> {
        Ok(Timestamp::UNIX_EPOCH)
    }
}

impl HostTimeZone for () {
    fn get_host_time_zone(&self) -> PartialDateResult<TimeZone> {
        Ok(TimeZone::UTC)
    }
}

impl HostHooks for () {}

impl HostTimeZone for TimeZone {
    fn get_host_time_zone(&self) -> PartialDateResult<TimeZone> {
        Ok(self.clone())
    }
}

impl HostTimeZone for Offset {
    fn get_host_time_zone(&self) -> PartialDateResult<TimeZone> {
        Ok(TimeZone::fixed(*self))
    }
}

/// A host with a fixed clock reading and time zone.
#[derive(Debug, Clone)]
pub struct FixedHost {
    timestamp: Timestamp,
    time_zone: TimeZone,
}

impl FixedHost {
    #[must_use]
    pub fn new(timestamp: Timestamp, time_zone: TimeZone) -> Self {
        Self {
            timestamp,
            time_zone,
        }
    }
}

impl HostClock for FixedHost {
    fn get_host_timestamp(&self) -> PartialDateResult<Timestamp> {
        Ok(self.timestamp)
    }
}

impl HostTimeZone for FixedHost {
    fn get_host_time_zone(&self) -> PartialDateResult<TimeZone> {
        Ok(self.time_zone.clone())
    }
}

impl HostHooks for FixedHost {}
