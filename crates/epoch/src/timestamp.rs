//! Epoch timestamp newtype and its serde hooks.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::codec;
use crate::error::DecodeError;

/// An absolute point in time carried on the wire as a bare epoch numeral.
///
/// Serializes as the decimal count of milliseconds since the Unix epoch.
/// Deserializes from seconds, milliseconds, microseconds, or nanoseconds
/// since epoch, inferring the unit from the digit count. Wraps a
/// [`chrono::DateTime<Utc>`]; values are treated as absolute instants with no
/// time-zone semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EpochTime(DateTime<Utc>);

impl EpochTime {
    /// The Unix epoch, 1970-01-01T00:00:00Z.
    pub const UNIX_EPOCH: Self = Self(DateTime::UNIX_EPOCH);

    /// Current wall-clock time.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Construct from whole seconds since epoch and a nanosecond offset
    /// within that second. Returns `None` outside the representable range.
    pub fn from_timestamp(secs: i64, nanos: u32) -> Option<Self> {
        DateTime::from_timestamp(secs, nanos).map(Self)
    }

    /// Construct from milliseconds since epoch. Returns `None` outside the
    /// representable range.
    pub fn from_millis(millis: i64) -> Option<Self> {
        DateTime::from_timestamp_millis(millis).map(Self)
    }

    /// Encode this instant as a bare decimal millisecond numeral.
    pub fn encode(&self) -> String {
        codec::encode(&self.0)
    }

    /// Decode a raw epoch numeral. See [`crate::codec::decode`] for the
    /// normalization and unit-inference rules.
    pub fn decode(text: &str) -> Result<Self, DecodeError> {
        codec::decode(text).map(Self)
    }

    /// Milliseconds since epoch, truncated toward zero.
    ///
    /// Truncation direction matters only for pre-epoch instants with a
    /// sub-millisecond component; it matches the wire format this codec
    /// interoperates with rather than `chrono`'s flooring accessor.
    pub fn timestamp_millis(&self) -> i64 {
        codec::encode_millis(&self.0)
    }

    /// The wrapped `chrono` value.
    pub fn datetime(&self) -> DateTime<Utc> {
        self.0
    }
}

impl Default for EpochTime {
    fn default() -> Self {
        Self::UNIX_EPOCH
    }
}

impl From<DateTime<Utc>> for EpochTime {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}

impl From<EpochTime> for DateTime<Utc> {
    fn from(t: EpochTime) -> Self {
        t.0
    }
}

impl fmt::Display for EpochTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

impl FromStr for EpochTime {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

impl Serialize for EpochTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(self.timestamp_millis())
    }
}

impl<'de> Deserialize<'de> for EpochTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(EpochVisitor)
    }
}

/// Visitor that renders whatever numeric token the format hands over back
/// into its textual numeral form, then runs it through the codec.
struct EpochVisitor;

impl<'de> Visitor<'de> for EpochVisitor {
    type Value = EpochTime;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an epoch timestamp in seconds, milliseconds, microseconds, or nanoseconds")
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        self.visit_str(&v.to_string())
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        self.visit_str(&v.to_string())
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        // `Display` for f64 is the shortest representation that round-trips,
        // so a literal like 1609459200.123 survives the detour through the
        // format's float lexer.
        self.visit_str(&v.to_string())
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        EpochTime::decode(v).map_err(de::Error::custom)
    }
}
