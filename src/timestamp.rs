//! Acquisition time encoded in event file names.
//!
//! The leading digit run of the name is a Unix epoch timestamp in
//! nanoseconds.

use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::{InspectError, Result};

/// Nanosecond timestamp taken from a file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileTimestamp {
    nanos: i64,
}

impl FileTimestamp {
    /// Parse the digits before the first underscore.
    pub fn from_file_name(file_name: &str) -> Result<Self> {
        let stem = file_name.split('.').next().unwrap_or(file_name);
        let digits = stem.split('_').next().unwrap_or(stem);

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InspectError::invalid_file_name(
                file_name,
                "name does not start with a digit run",
            ));
        }

        let nanos = digits.parse::<i64>().map_err(|e| {
            InspectError::invalid_file_name(file_name, format!("timestamp out of range: {}", e))
        })?;

        Ok(Self { nanos })
    }

    /// Nanoseconds since the Unix epoch.
    pub fn nanos(&self) -> i64 {
        self.nanos
    }

    /// Timestamp in UTC.
    pub fn utc(&self) -> DateTime<Utc> {
        Utc.timestamp_nanos(self.nanos)
    }

    /// Timestamp in the given timezone.
    pub fn in_zone(&self, zone: Tz) -> DateTime<Tz> {
        self.utc().with_timezone(&zone)
    }
}

/// Resolve an IANA timezone name such as `Europe/Zurich`.
pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.parse::<Tz>()
        .map_err(|_| InspectError::UnknownTimezone {
            name: name.to_string(),
        })
}
