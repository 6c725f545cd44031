//! The externally owned committed value and its ISO-8601 wire form.

use std::fmt;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Layout used for every emitted commit (local wall-clock, no offset).
pub const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Naive layouts accepted on input, tried in order.
const NAIVE_LAYOUTS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Why an external value could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    #[error("timestamp is empty")]
    Empty,
    #[error("unrecognised timestamp '{0}'")]
    Unrecognised(String),
}

/// The host-owned timestamp, or no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CommittedValue(Option<NaiveDateTime>);

impl CommittedValue {
    pub const ABSENT: CommittedValue = CommittedValue(None);

    pub fn at(instant: NaiveDateTime) -> Self {
        Self(Some(instant))
    }

    pub fn instant(&self) -> Option<NaiveDateTime> {
        self.0
    }

    pub fn is_absent(&self) -> bool {
        self.0.is_none()
    }

    /// Parse a present ISO-8601 value.
    pub fn parse(input: &str) -> Result<Self, ValueError> {
        parse_timestamp(input).map(Self::at)
    }

    /// Read a value as a host hands it over: `None` is absent, and a
    /// malformed string also degrades to absent, with the reason returned
    /// alongside for diagnostics.
    pub fn from_wire(input: Option<&str>) -> (Self, Option<ValueError>) {
        match input {
            None => (Self::ABSENT, None),
            Some(raw) => match Self::parse(raw) {
                Ok(value) => (value, None),
                Err(err) => (Self::ABSENT, Some(err)),
            },
        }
    }

    /// The string handed to the host's change callback.
    pub fn to_wire(&self) -> Option<String> {
        self.0.map(|instant| instant.format(WIRE_FORMAT).to_string())
    }
}

impl From<Option<NaiveDateTime>> for CommittedValue {
    fn from(value: Option<NaiveDateTime>) -> Self {
        Self(value)
    }
}

impl fmt::Display for CommittedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_wire() {
            Some(wire) => f.write_str(&wire),
            None => f.write_str("<absent>"),
        }
    }
}

impl Serialize for CommittedValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_wire().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CommittedValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(Self::ABSENT),
            Some(raw) => Self::parse(&raw).map_err(de::Error::custom),
        }
    }
}

/// Parse an ISO-8601 timestamp into local wall-clock fields.
///
/// Accepts naive date-times (`T` or space separated, optional seconds and
/// fraction), bare dates (midnight), and RFC 3339 values carrying an offset,
/// which are converted to the local zone once here.
pub fn parse_timestamp(input: &str) -> Result<NaiveDateTime, ValueError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValueError::Empty);
    }

    if let Ok(zoned) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(zoned.with_timezone(&Local).naive_local());
    }

    for layout in NAIVE_LAYOUTS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, layout) {
            return Ok(naive);
        }
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN))
        .map_err(|_| ValueError::Unrecognised(trimmed.to_string()))
}
