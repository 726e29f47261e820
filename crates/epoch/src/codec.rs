//! Pure textual codec between instants and epoch numerals.
//!
//! The encoded form is always a bare decimal count of milliseconds since the
//! Unix epoch. The decoder is deliberately more permissive: it accepts
//! seconds, milliseconds, microseconds, or nanoseconds since epoch and infers
//! the unit from the digit count after normalization. Both directions are
//! stateless and allocation-light.

use chrono::{DateTime, Utc};

use crate::error::DecodeError;

/// Digit width of the seconds field in a normalized numeral.
const SECONDS_DIGITS: usize = 10;

/// Encode an instant as a bare decimal count of milliseconds since epoch.
///
/// Never fails. The output carries no sign padding, quotes, or separators,
/// so it can be spliced into a structured document as a numeric literal.
pub fn encode(instant: &DateTime<Utc>) -> String {
    encode_millis(instant).to_string()
}

/// Milliseconds since epoch with truncation toward zero.
///
/// The nanosecond total is accumulated in i128 so the full `chrono` range is
/// representable; the division then truncates toward zero, matching the wire
/// producers this codec interoperates with for pre-epoch instants.
pub(crate) fn encode_millis(instant: &DateTime<Utc>) -> i64 {
    let nanos = i128::from(instant.timestamp()) * 1_000_000_000
        + i128::from(instant.timestamp_subsec_nanos());
    (nanos / 1_000_000) as i64
}

/// Decode a raw epoch numeral into an instant.
///
/// Normalization before unit inference:
///
/// 1. A single `.` separator folds the fractional part into the digit
///    string, right-padded with zeros to at least three digits of sub-second
///    precision.
/// 2. Any stray separator that survives is removed (first occurrence only).
/// 3. Numerals shorter than ten digits are left-padded with zeros.
///
/// The first ten characters parse as whole seconds, the remainder as the
/// sub-second field. The total length selects the sub-second unit:
///
/// | digits | unit of sub-second field |
/// |--------|--------------------------|
/// | 10     | none                     |
/// | 13     | milliseconds             |
/// | 16     | microseconds             |
/// | 19     | nanoseconds              |
///
/// Any other length is rejected with [`DecodeError::UnexpectedDigits`].
pub fn decode(text: &str) -> Result<DateTime<Utc>, DecodeError> {
    let mut ts = text.to_owned();

    if let Some((whole, frac)) = split_fraction(&ts) {
        let mut digits = String::with_capacity(whole.len() + frac.len().max(3));
        digits.push_str(whole);
        digits.push_str(frac);
        // A fractional part longer than three digits flows through unpadded
        // and is caught by the digit-count check below.
        for _ in frac.chars().count()..3 {
            digits.push('0');
        }
        ts = digits;
    }

    // Stray separator not handled above (e.g. more than one `.`).
    if let Some(dot) = ts.find('.') {
        ts.remove(dot);
    }

    if ts.chars().count() < SECONDS_DIGITS {
        ts = format!("{ts:0>width$}", width = SECONDS_DIGITS);
    }

    let total_digits = ts.chars().count();
    let sec_field: String = ts.chars().take(SECONDS_DIGITS).collect();
    let frac_field: String = ts.chars().skip(SECONDS_DIGITS).collect();

    let seconds: i64 = sec_field.parse()?;
    let frac: i64 = if frac_field.is_empty() {
        0
    } else {
        frac_field.parse()?
    };

    let nanos = match total_digits {
        10 => 0,
        13 => frac * 1_000_000,
        16 => frac * 1_000,
        19 => frac,
        _ => return Err(DecodeError::UnexpectedDigits),
    };

    // The sub-second field is parsed from bare digits, so a negative value
    // only appears through malformed input that slipped a sign past the
    // seconds field. Reject it rather than borrowing from the seconds.
    let nanos_offset =
        u32::try_from(nanos).map_err(|_| DecodeError::OutOfRange { seconds, nanos })?;

    DateTime::from_timestamp(seconds, nanos_offset)
        .ok_or(DecodeError::OutOfRange { seconds, nanos })
}

/// Split a numeral containing exactly one `.` into whole and fractional
/// parts. Numerals with zero or multiple separators are left untouched.
fn split_fraction(ts: &str) -> Option<(&str, &str)> {
    let mut parts = ts.splitn(3, '.');
    let whole = parts.next()?;
    let frac = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    Some((whole, frac))
}
