//! The numeric body of a RUT: sanitization and a validated newtype.

use thiserror::Error;

/// Maximum number of digits in a RUT body.
pub const MAX_BODY_LEN: usize = 9;

/// Strip every non-digit character and truncate to [`MAX_BODY_LEN`] digits.
///
/// Idempotent: sanitizing an already-sanitized string is a no-op.
#[must_use]
pub fn sanitize(input: &str) -> String {
    input
        .chars()
        .filter(char::is_ascii_digit)
        .take(MAX_BODY_LEN)
        .collect()
}

/// Reason a body failed strict parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BodyError {
    #[error("body contains no digits")]
    Empty,
    #[error("body has {0} digits, maximum is 9")]
    TooLong(usize),
}

/// A non-empty RUT numeric body of 1 to [`MAX_BODY_LEN`] ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Body(String);

impl Body {
    /// Lenient constructor for the interactive path: filter to digits,
    /// truncate to [`MAX_BODY_LEN`], return `None` when nothing remains.
    #[must_use]
    pub fn sanitize(input: &str) -> Option<Self> {
        let digits = sanitize(input);
        if digits.is_empty() {
            None
        } else {
            Some(Self(digits))
        }
    }

    /// Strict constructor for the one-shot path: separators and other
    /// non-digit characters are ignored, but the digits themselves must be
    /// non-empty and within the length cap.
    pub fn parse(input: &str) -> Result<Self, BodyError> {
        let digits: String = input.chars().filter(char::is_ascii_digit).collect();
        if digits.is_empty() {
            return Err(BodyError::Empty);
        }
        if digits.len() > MAX_BODY_LEN {
            return Err(BodyError::TooLong(digits.len()));
        }
        Ok(Self(digits))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false: both constructors reject empty bodies.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Digits as numeric values, left to right.
    pub fn digits(&self) -> impl DoubleEndedIterator<Item = u32> + '_ {
        self.0.chars().map(|c| c.to_digit(10).unwrap_or(0))
    }
}

impl std::fmt::Display for Body {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{Body, BodyError, MAX_BODY_LEN, sanitize};

    #[test]
    fn sanitize_strips_non_digits() {
        assert_eq!(sanitize("12a34"), "1234");
        assert_eq!(sanitize("12.345.678"), "12345678");
        assert_eq!(sanitize("  \t"), "");
    }

    #[test]
    fn sanitize_caps_length() {
        assert_eq!(sanitize("12345678901"), "123456789");
        assert_eq!(sanitize("12345678901").len(), MAX_BODY_LEN);
    }

    #[test]
    fn sanitize_is_idempotent() {
        for input in ["1", "123456789", "000000000", "9876"] {
            assert_eq!(sanitize(&sanitize(input)), sanitize(input));
        }
    }

    #[test]
    fn body_sanitize_empty_is_none() {
        assert_eq!(Body::sanitize(""), None);
        assert_eq!(Body::sanitize("abc-"), None);
    }

    #[test]
    fn body_sanitize_filters_and_truncates() {
        let body = Body::sanitize("12a3456789012").expect("has digits");
        assert_eq!(body.as_str(), "123456789");
    }

    #[test]
    fn parse_rejects_empty_and_overlong() {
        assert_eq!(Body::parse("no digits"), Err(BodyError::Empty));
        assert_eq!(Body::parse("1234567890"), Err(BodyError::TooLong(10)));
    }

    #[test]
    fn parse_accepts_formatted_input() {
        let body = Body::parse("12.345.678").expect("valid body");
        assert_eq!(body.as_str(), "12345678");
        assert_eq!(body.len(), 8);
    }

    #[test]
    fn digits_iterate_left_to_right() {
        let body = Body::parse("123").expect("valid body");
        let digits: Vec<u32> = body.digits().collect();
        assert_eq!(digits, vec![1, 2, 3]);
    }
}
