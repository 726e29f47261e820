//! Numeric epoch timestamps of ambiguous magnitude.
//!
//! Many JSON payloads in the wild carry timestamps as bare epoch numerals
//! whose unit is implied by their length: ten digits of seconds, thirteen of
//! milliseconds, sixteen of microseconds, or nineteen of nanoseconds. Some
//! producers also emit fractional seconds (`1609459200.123`). This crate
//! decodes all of those forms into a single instant type and always encodes
//! back to the millisecond form.
//!
//! # Usage
//!
//! ```
//! use epoch::EpochTime;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Heartbeat {
//!     seen_at: EpochTime,
//! }
//!
//! // Seconds, milliseconds, microseconds, and nanoseconds all decode to the
//! // same instant.
//! let a: Heartbeat = serde_json::from_str(r#"{"seen_at": 1609459200}"#).unwrap();
//! let b: Heartbeat = serde_json::from_str(r#"{"seen_at": 1609459200000}"#).unwrap();
//! assert_eq!(a.seen_at, b.seen_at);
//!
//! // Encoding always emits milliseconds.
//! assert_eq!(serde_json::to_string(&a).unwrap(), r#"{"seen_at":1609459200000}"#);
//! ```
//!
//! Fields that already use `chrono::DateTime<Utc>` can opt into the wire
//! format with [`serde::ts_epoch`] instead of adopting the newtype.

pub mod codec;
mod error;
pub mod serde;
mod timestamp;

pub use error::DecodeError;
pub use timestamp::EpochTime;
