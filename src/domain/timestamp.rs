//! Millisecond-precision UTC timestamps with a fixed ISO-8601 wire form.

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A point in time, always UTC and truncated to whole milliseconds.
///
/// The textual form is `YYYY-MM-DDTHH:MM:SS.mmmZ`. Because the width is
/// fixed, comparing two formatted timestamps as strings gives the same
/// answer as comparing the instants.
///
/// # Examples
///
/// ```
/// use notes::domain::Timestamp;
///
/// let ts: Timestamp = "2024-12-02T14:30:00Z".parse().unwrap();
/// assert_eq!(ts.to_string(), "2024-12-02T14:30:00.000Z");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Captures the current time.
    pub fn now() -> Self {
        Self::from_datetime(Utc::now())
    }

    /// Wraps a datetime, dropping anything finer than a millisecond.
    pub fn from_datetime(datetime: DateTime<Utc>) -> Self {
        Self(datetime.trunc_subsecs(3))
    }

    /// Returns the underlying datetime.
    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Error returned when a string is not an RFC 3339 timestamp.
#[derive(Debug, Clone)]
pub struct ParseTimestampError {
    value: String,
    reason: String,
}

impl fmt::Display for ParseTimestampError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid timestamp '{}': {}", self.value, self.reason)
    }
}

impl std::error::Error for ParseTimestampError {}

impl FromStr for Timestamp {
    type Err = ParseTimestampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DateTime::parse_from_rfc3339(s)
            .map(|dt| Self::from_datetime(dt.with_timezone(&Utc)))
            .map_err(|e| ParseTimestampError {
                value: s.to_string(),
                reason: e.to_string(),
            })
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}

impl fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timestamp(\"{}\")", self)
    }
}

impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
