//! Serde helpers for annotating plain `chrono` fields with the epoch wire
//! format, without adopting the [`EpochTime`](crate::EpochTime) newtype.

/// Serialize a `DateTime<Utc>` as a bare millisecond numeral and deserialize
/// it from an epoch numeral of any accepted magnitude.
///
/// # Example
///
/// ```
/// use chrono::{DateTime, Utc};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Event {
///     #[serde(with = "epoch::serde::ts_epoch")]
///     occurred_at: DateTime<Utc>,
/// }
///
/// let event: Event = serde_json::from_str(r#"{"occurred_at": 1609459200}"#).unwrap();
/// assert_eq!(serde_json::to_string(&event).unwrap(), r#"{"occurred_at":1609459200000}"#);
/// ```
pub mod ts_epoch {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::codec::encode_millis;
    use crate::EpochTime;

    /// Serialize as milliseconds since epoch, truncated toward zero.
    pub fn serialize<S>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(encode_millis(dt))
    }

    /// Deserialize from an epoch numeral of ambiguous magnitude.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        EpochTime::deserialize(deserializer).map(|t| t.datetime())
    }
}
