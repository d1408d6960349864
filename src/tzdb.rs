//! Time zone lookup backed by the bundled IANA time zone database.

use std::{collections::BTreeMap, sync::RwLock};

use jiff::tz::TimeZone;

use crate::{PartialDateError, PartialDateResult};

/// Resolves an IANA time zone identifier, e.g. `"Europe/London"`.
///
/// Identifiers are matched case-insensitively. An unknown identifier is an
/// `ErrorKind::InvalidArgument`.
pub fn get(identifier: &str) -> PartialDateResult<TimeZone> {
    let (canonical_name, data) = lookup(identifier)?;
    TimeZone::tzif(canonical_name, data).map_err(PartialDateError::calendar)
}

/// Returns the canonical name and TZif data of `identifier`.
fn lookup(identifier: &str) -> PartialDateResult<(&'static str, &'static [u8])> {
    jiff_tzdb::get(identifier).ok_or_else(|| {
        PartialDateError::invalid_argument()
            .with_message(format!("Time zone identifier does not exist: {identifier:?}"))
    })
}

/// A `TimeZone` cache over the bundled database.
#[derive(Debug, Default)]
pub struct TzdbProvider {
    cache: RwLock<BTreeMap<String, TimeZone>>,
}

impl TzdbProvider {
    /// Resolves `identifier`, sharing one entry between spellings of the same zone.
    pub fn get(&self, identifier: &str) -> PartialDateResult<TimeZone> {
        let (canonical_name, data) = lookup(identifier)?;
        let cache = self
            .cache
            .read()
            .map_err(|_| PartialDateError::general("Unable to acquire lock"))?;
        if let Some(tz) = cache.get(canonical_name) {
            return Ok(tz.clone());
        }
        drop(cache);

        let tz = TimeZone::tzif(canonical_name, data).map_err(PartialDateError::calendar)?;
        Ok(self
            .cache
            .write()
            .map_err(|_| PartialDateError::general("Unable to acquire lock"))?
            .entry(canonical_name.into())
            .or_insert(tz)
            .clone())
    }
}
