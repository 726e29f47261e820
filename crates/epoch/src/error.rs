//! Error types for epoch numeral decoding.

use std::num::ParseIntError;

/// Errors produced while decoding an epoch numeral.
///
/// Encoding never fails; every variant here surfaces through the decode path
/// and is returned immediately to the caller, typically the enclosing
/// document deserializer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The normalized numeral was not 10, 13, 16, or 19 digits long.
    #[error("unexpected number of digits in timestamp")]
    UnexpectedDigits,

    /// A field expected to be all digits failed integer parsing. The
    /// underlying parser error is propagated verbatim.
    #[error(transparent)]
    InvalidNumeral(#[from] ParseIntError),

    /// The seconds and sub-second fields do not map to a representable
    /// instant.
    #[error("timestamp out of range: {seconds}s + {nanos}ns")]
    OutOfRange {
        /// Whole seconds since epoch as parsed from the numeral.
        seconds: i64,
        /// Nanosecond offset derived from the sub-second field.
        nanos: i64,
    },
}
