//! Modulo-11 verification digit.
//!
//! Weights are assigned from the rightmost digit outward, cycling
//! 2, 3, 4, 5, 6, 7, 2, ... The weighted sum is reduced modulo 11 and the
//! remainder `11 - (sum % 11)` maps to '0' (11), 'K' (10) or a digit.

use crate::body::Body;

/// Infinite weight sequence for the modulo-11 checksum, rightmost digit first.
///
/// Shared by [`compute`] and the breakdown builder so the two can never
/// disagree on weight assignment.
pub(crate) fn weights() -> impl Iterator<Item = u32> {
    (2u32..=7).cycle()
}

/// A RUT verification digit: `'0'..='9'` or `'K'`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dv(char);

impl Dv {
    /// Map a remainder in `1..=11` to its verification digit.
    pub(crate) fn from_remainder(remainder: u32) -> Self {
        match remainder {
            11 => Self('0'),
            10 => Self('K'),
            digit => Self(char::from_digit(digit, 10).unwrap_or('0')),
        }
    }

    #[must_use]
    pub fn as_char(self) -> char {
        self.0
    }
}

impl std::fmt::Display for Dv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Weighted sum of the body's digits, rightmost digit carrying weight 2.
pub(crate) fn weighted_sum(body: &Body) -> u32 {
    body.digits()
        .rev()
        .zip(weights())
        .map(|(digit, weight)| digit * weight)
        .sum()
}

/// Compute the verification digit for a validated body.
#[must_use]
pub fn compute(body: &Body) -> Dv {
    let sum = weighted_sum(body);
    Dv::from_remainder(11 - (sum % 11))
}

/// Compute the verification digit for arbitrary text.
///
/// Non-digit characters are stripped first; if nothing remains the result is
/// absent rather than an error. No length cap is applied here; interactive
/// callers truncate through [`Body::sanitize`] before reaching this point.
#[must_use]
pub fn compute_str(input: &str) -> Option<Dv> {
    let digits: Vec<u32> = input.chars().filter_map(|c| c.to_digit(10)).collect();
    if digits.is_empty() {
        return None;
    }
    let sum: u64 = digits
        .iter()
        .rev()
        .zip(weights())
        .map(|(&digit, weight)| u64::from(digit) * u64::from(weight))
        .sum();
    Some(Dv::from_remainder(11 - (sum % 11) as u32))
}

#[cfg(test)]
mod tests {
    use super::{Dv, compute, compute_str};
    use crate::body::Body;

    fn dv_of(body: &str) -> char {
        compute(&Body::parse(body).expect("valid body")).as_char()
    }

    #[test]
    fn known_verification_digits() {
        // 8*2 + 7*3 + 6*4 + 5*5 + 4*6 + 3*7 + 2*2 + 1*3 = 138; 138 % 11 = 6; 11 - 6 = 5
        assert_eq!(dv_of("12345678"), '5');
        // 1*2 = 2; 11 - 2 = 9
        assert_eq!(dv_of("1"), '9');
        // sum = 0; 0 % 11 = 0; 11 - 0 = 11 maps to '0'
        assert_eq!(dv_of("000000000"), '0');
    }

    #[test]
    fn remainder_ten_maps_to_k() {
        // Weighted sum 155; 155 % 11 = 1; 11 - 1 = 10 maps to 'K'.
        assert_eq!(dv_of("20347878"), 'K');
    }

    #[test]
    fn empty_input_is_absent() {
        assert_eq!(compute_str(""), None);
        assert_eq!(compute_str("   "), None);
        assert_eq!(compute_str("abc"), None);
    }

    #[test]
    fn non_digits_are_stripped_before_computing() {
        assert_eq!(compute_str("12a34"), compute_str("1234"));
        assert_eq!(compute_str("12.345.678"), Some(Dv('5')));
    }

    #[test]
    fn every_body_yields_a_valid_digit() {
        let long_samples = [100_000_000u32, 123_456_789, 999_999_999];
        for n in (0u32..2000).chain(long_samples) {
            let body = n.to_string();
            let dv = compute_str(&body).expect("non-empty body");
            assert!(
                dv.as_char().is_ascii_digit() || dv.as_char() == 'K',
                "body {body} produced {dv}"
            );
        }
    }

    #[test]
    fn no_cap_inside_the_checksum_itself() {
        // 10 digits: the caller truncates, compute_str does not.
        assert_eq!(compute_str("1234567890"), Some(Dv('3')));
    }
}
