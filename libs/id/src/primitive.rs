//! Primitive grammars: decimal integers and UUID literals.

use std::fmt::Write;

use uuid::Uuid;

use crate::codec::{Codec, Input};
use crate::error::{FailureKind, Grammar, ParseFailure};

/// A base-10 `i64`: an optional `-` followed by a run of ASCII digits.
///
/// Only the canonical spelling is accepted. Leading zeros (`"007"`) and
/// negative zero (`"-0"`) are rejected so that every accepted token prints
/// back byte for byte.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Digits;

impl Codec for Digits {
    type Output = i64;

    fn grammar(&self) -> Grammar {
        Grammar::Integer
    }

    fn parse(&self, input: &mut Input<'_>) -> Result<i64, ParseFailure> {
        let start = input.position();
        let rest = input.remaining();
        let bytes = rest.as_bytes();

        let sign = usize::from(bytes.first() == Some(&b'-'));
        let digits = bytes
            .iter()
            .skip(sign)
            .take_while(|b| b.is_ascii_digit())
            .count();
        if digits == 0 {
            return Err(ParseFailure::new(
                start + sign,
                Grammar::Integer,
                FailureKind::Missing,
            ));
        }

        let len = sign + digits;
        let leading_zero = bytes.get(sign) == Some(&b'0');
        if leading_zero && (digits > 1 || sign == 1) {
            return Err(ParseFailure::new(
                start,
                Grammar::Integer,
                FailureKind::NonCanonical,
            ));
        }

        let value = rest
            .get(..len)
            .and_then(|token| token.parse::<i64>().ok())
            .ok_or(ParseFailure::new(
                start,
                Grammar::Integer,
                FailureKind::Overflow,
            ))?;

        input.advance(len);
        Ok(value)
    }

    fn print(&self, value: &i64, output: &mut String) {
        // writing to a String cannot fail
        let _ = write!(output, "{value}");
    }
}

/// Whether a [`UuidLiteral`] accepts uppercase hex digits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum HexCase {
    /// Accept either case. Output is always lowercase.
    #[default]
    Lenient,
    /// Reject uppercase hex digits as non-canonical.
    Lowercase,
}

/// A hyphenated UUID literal: `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UuidLiteral {
    case: HexCase,
}

/// Length of a hyphenated UUID literal.
const UUID_LEN: usize = 36;

/// Byte offsets of the group separators.
const HYPHENS: [usize; 4] = [8, 13, 18, 23];

impl UuidLiteral {
    #[must_use]
    pub const fn new(case: HexCase) -> Self {
        Self { case }
    }

    /// A literal that only accepts lowercase hex digits.
    #[must_use]
    pub const fn lowercase() -> Self {
        Self::new(HexCase::Lowercase)
    }

    #[must_use]
    pub const fn case(&self) -> HexCase {
        self.case
    }

    /// Finds the first byte that breaks the 8-4-4-4-12 layout.
    fn check_layout(&self, bytes: &[u8]) -> Result<(), (usize, FailureKind)> {
        for (offset, &b) in bytes.iter().take(UUID_LEN).enumerate() {
            if HYPHENS.contains(&offset) {
                if b != b'-' {
                    return Err((offset, FailureKind::Malformed));
                }
            } else if !b.is_ascii_hexdigit() {
                return Err((offset, FailureKind::Malformed));
            } else if self.case == HexCase::Lowercase && b.is_ascii_uppercase() {
                return Err((offset, FailureKind::NonCanonical));
            }
        }

        if bytes.len() < UUID_LEN {
            return Err((bytes.len(), FailureKind::Malformed));
        }
        Ok(())
    }
}

impl Codec for UuidLiteral {
    type Output = Uuid;

    fn grammar(&self) -> Grammar {
        Grammar::Uuid
    }

    fn parse(&self, input: &mut Input<'_>) -> Result<Uuid, ParseFailure> {
        let start = input.position();
        let rest = input.remaining();

        self.check_layout(rest.as_bytes())
            .map_err(|(offset, kind)| ParseFailure::new(start + offset, Grammar::Uuid, kind))?;

        let uuid = rest
            .get(..UUID_LEN)
            .and_then(|literal| Uuid::try_parse(literal).ok())
            .ok_or(ParseFailure::new(
                start,
                Grammar::Uuid,
                FailureKind::Malformed,
            ))?;

        input.advance(UUID_LEN);
        Ok(uuid)
    }

    fn print(&self, value: &Uuid, output: &mut String) {
        let mut buf = Uuid::encode_buffer();
        output.push_str(value.hyphenated().encode_lower(&mut buf));
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("42", 42)]
    #[case("0", 0)]
    #[case("-17", -17)]
    #[case("9223372036854775807", i64::MAX)]
    #[case("-9223372036854775808", i64::MIN)]
    fn test_digits_accepts(#[case] token: &str, #[case] expected: i64) {
        assert_eq!(Digits.parse_complete(token), Ok(expected));
        assert_eq!(Digits.print_to_string(&expected), token);
    }

    #[rstest]
    #[case("", 0, FailureKind::Missing)]
    #[case("-", 1, FailureKind::Missing)]
    #[case("not-a-number", 0, FailureKind::Missing)]
    #[case("007", 0, FailureKind::NonCanonical)]
    #[case("-0", 0, FailureKind::NonCanonical)]
    #[case("+5", 0, FailureKind::Missing)]
    #[case("12345678901234567890", 0, FailureKind::Overflow)]
    #[case("9223372036854775808", 0, FailureKind::Overflow)]
    #[case("12a", 2, FailureKind::TrailingInput)]
    fn test_digits_rejects(#[case] token: &str, #[case] position: usize, #[case] kind: FailureKind) {
        let err = Digits.parse_complete(token).unwrap_err();
        assert_eq!(err.position(), position);
        assert_eq!(err.kind(), kind);
    }

    #[test]
    fn test_digits_print_appends_to_existing_output() {
        let mut output = String::from("/orders/");
        Digits.print(&-305, &mut output);
        Digits.print(&0, &mut output);
        assert_eq!(output, "/orders/-3050");
    }

    #[test]
    fn test_trailing_input_reports_token_grammar() {
        let err = Digits.parse_complete("12a").unwrap_err();
        assert_eq!(err.expected(), Grammar::Integer);

        let token = format!("{SAMPLE}/x");
        let err = UuidLiteral::default().parse_complete(&token).unwrap_err();
        assert_eq!(err.expected(), Grammar::Uuid);
        assert!(err.is_trailing_input());
    }

    #[test]
    fn test_digits_stops_at_first_non_digit() {
        let mut input = Input::new("123abc");
        assert_eq!(Digits.parse(&mut input), Ok(123));
        assert_eq!(input.remaining(), "abc");
    }

    #[test]
    fn test_digits_position_is_absolute() {
        let mut input = Input::new("id=x");
        input.advance(3);
        let err = Digits.parse(&mut input).unwrap_err();
        assert_eq!(err.position(), 3);
        assert_eq!(err.expected(), Grammar::Integer);
    }

    const SAMPLE: &str = "550e8400-e29b-41d4-a716-446655440000";

    #[test]
    fn test_uuid_accepts_lowercase() {
        let uuid = UuidLiteral::default().parse_complete(SAMPLE).unwrap();
        assert_eq!(uuid.to_string(), SAMPLE);
        assert_eq!(UuidLiteral::default().print_to_string(&uuid), SAMPLE);
    }

    #[test]
    fn test_uuid_uppercase_normalizes_to_lowercase() {
        let upper = SAMPLE.to_ascii_uppercase();
        let uuid = UuidLiteral::default().parse_complete(&upper).unwrap();
        assert_eq!(UuidLiteral::default().print_to_string(&uuid), SAMPLE);
    }

    #[test]
    fn test_uuid_lowercase_policy_rejects_uppercase() {
        let err = UuidLiteral::lowercase()
            .parse_complete("550E8400-e29b-41d4-a716-446655440000")
            .unwrap_err();
        assert_eq!(err.kind(), FailureKind::NonCanonical);
        assert_eq!(err.position(), 3);

        assert!(UuidLiteral::lowercase().parse_complete(SAMPLE).is_ok());
    }

    #[rstest]
    // missing a hyphen group
    #[case("550e8400e29b-41d4-a716-446655440000", 8)]
    // non-hex digit
    #[case("550e8400-e29b-41d4-a716-44665544000g", 35)]
    // too short
    #[case("550e8400-e29b-41d4-a716-44665544000", 35)]
    // simple (unhyphenated) form
    #[case("550e8400e29b41d4a716446655440000", 8)]
    // braced form
    #[case("{550e8400-e29b-41d4-a716-446655440000}", 0)]
    #[case("", 0)]
    fn test_uuid_rejects(#[case] token: &str, #[case] position: usize) {
        let err = UuidLiteral::default().parse_complete(token).unwrap_err();
        assert_eq!(err.expected(), Grammar::Uuid);
        assert_eq!(err.kind(), FailureKind::Malformed);
        assert_eq!(err.position(), position);
    }

    #[test]
    fn test_uuid_too_long_is_trailing_input() {
        let token = format!("{SAMPLE}0");
        let err = UuidLiteral::default().parse_complete(&token).unwrap_err();
        assert!(err.is_trailing_input());
        assert_eq!(err.position(), 36);
    }

    #[test]
    fn test_uuid_leaves_rest_of_input() {
        let source = format!("{SAMPLE}/edit");
        let mut input = Input::new(&source);
        UuidLiteral::default().parse(&mut input).unwrap();
        assert_eq!(input.remaining(), "/edit");
    }
}
