use std::{fmt, str::FromStr};

use thiserror::Error;
use time::{
    format_description::well_known::Rfc3339, macros::format_description, OffsetDateTime, UtcOffset,
};

/// A point in time, always normalized to UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(OffsetDateTime);

#[derive(Debug, Error)]
#[error("invalid timestamp: {0}")]
pub struct TimestampParseError(#[from] time::error::Parse);

impl Timestamp {
    pub fn from_seconds(seconds: i64) -> Self {
        // Out of range values are clamped to the unix epoch.
        OffsetDateTime::from_unix_timestamp(seconds)
            .unwrap_or(OffsetDateTime::UNIX_EPOCH)
            .into()
    }

    pub fn as_seconds(&self) -> i64 {
        self.0.unix_timestamp()
    }

    pub fn parse_rfc3339(s: &str) -> Result<Self, TimestampParseError> {
        Ok(OffsetDateTime::parse(s, &Rfc3339)?.into())
    }

    pub fn format_rfc3339(&self) -> String {
        // RFC 3339 formatting only fails for years outside 0..=9999
        self.0
            .format(&Rfc3339)
            .unwrap_or_else(|_| self.as_seconds().to_string())
    }

    /// Calendar date as `YYYY-MM-DD`.
    pub fn format_date(&self) -> String {
        self.0
            .format(format_description!("[year]-[month]-[day]"))
            .unwrap_or_else(|_| self.format_rfc3339())
    }
}

impl From<OffsetDateTime> for Timestamp {
    fn from(from: OffsetDateTime) -> Self {
        Self(from.to_offset(UtcOffset::UTC))
    }
}

impl From<Timestamp> for OffsetDateTime {
    fn from(from: Timestamp) -> Self {
        from.0
    }
}

impl FromStr for Timestamp {
    type Err = TimestampParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_rfc3339(s)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.format_rfc3339())
    }
}
