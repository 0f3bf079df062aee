//! Parsing of raw numeric text typed by a user.
//!
//! Numbers are read the forgiving way a form field would read them: leading
//! whitespace is skipped, an optional sign is accepted, and decimal digits
//! are consumed up to the first non-digit. `"3.7"` reads as 3 and `"12abc"`
//! as 12. Text with no leading digits, or a value that does not fit in an
//! `i64`, does not parse.
//!
//! The session then decides whether the number is acceptable, so `"-2"`
//! parses here and is rejected by the session.

use crate::core::ValidationError;

/// Read a leading integer from `raw`.
///
/// ```
/// use lowball::input::parse_leading_int;
///
/// assert_eq!(parse_leading_int("  42"), Some(42));
/// assert_eq!(parse_leading_int("3.7"), Some(3));
/// assert_eq!(parse_leading_int("-5 points"), Some(-5));
/// assert_eq!(parse_leading_int("abc"), None);
/// ```
#[must_use]
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let text = raw.trim_start();
    let (negative, unsigned) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let digits_len = unsigned.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let digits = &unsigned[..digits_len];
    if negative {
        // Parse with the sign so i64::MIN is representable.
        format!("-{digits}").parse().ok()
    } else {
        digits.parse().ok()
    }
}

/// Read a set count for [`GameSession::start_game`](crate::session::GameSession::start_game).
pub fn parse_set_count(raw: &str) -> Result<i64, ValidationError> {
    parse_leading_int(raw).ok_or(ValidationError::InvalidSetCount)
}

/// Read a score for [`GameSession::submit_score`](crate::session::GameSession::submit_score).
pub fn parse_points(raw: &str) -> Result<i64, ValidationError> {
    parse_leading_int(raw).ok_or(ValidationError::InvalidPoints)
}
