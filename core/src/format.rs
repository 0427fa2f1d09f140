//! Display formatting: thousands grouping and the full identifier.

use crate::body::Body;
use crate::dv::Dv;

/// Insert a `.` every three digits counting from the right.
///
/// Non-digit characters are stripped first; empty input yields an empty
/// string. The most significant group may hold one to three digits.
#[must_use]
pub fn group_thousands(input: &str) -> String {
    let digits: String = input.chars().filter(char::is_ascii_digit).collect();
    let mut head = digits.as_str();
    let mut tail = String::new();
    while head.len() > 3 {
        let (rest, group) = head.split_at(head.len() - 3);
        tail = format!(".{group}{tail}");
        head = rest;
    }
    format!("{head}{tail}")
}

/// Render the full identifier: grouped body, `-`, verification digit.
#[must_use]
pub fn format_rut(body: &Body, dv: Dv) -> String {
    format!("{}-{}", group_thousands(body.as_str()), dv)
}

#[cfg(test)]
mod tests {
    use super::{format_rut, group_thousands};
    use crate::body::Body;
    use crate::dv::compute;

    #[test]
    fn groups_from_the_right() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1234"), "1.234");
        assert_eq!(group_thousands("12345678"), "12.345.678");
        assert_eq!(group_thousands("123456789"), "123.456.789");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(group_thousands(""), "");
        assert_eq!(group_thousands("abc"), "");
    }

    #[test]
    fn leading_zeros_survive_grouping() {
        assert_eq!(group_thousands("000000000"), "000.000.000");
    }

    #[test]
    fn grouping_round_trips() {
        for body in ["1", "12", "123", "1234", "12345", "987654321", "000000000"] {
            let grouped = group_thousands(body);
            let stripped: String = grouped.chars().filter(char::is_ascii_digit).collect();
            assert_eq!(stripped, body);
        }
    }

    #[test]
    fn full_identifier_rendering() {
        let body = Body::parse("12345678").expect("valid body");
        assert_eq!(format_rut(&body, compute(&body)), "12.345.678-5");

        let body = Body::parse("1").expect("valid body");
        assert_eq!(format_rut(&body, compute(&body)), "1-9");

        let body = Body::parse("000000000").expect("valid body");
        assert_eq!(format_rut(&body, compute(&body)), "000.000.000-0");
    }
}
