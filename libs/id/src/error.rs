//! Error types for identifier token parsing.

use std::fmt;

use thiserror::Error;

/// The grammar a parser was trying to match when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grammar {
    /// A base-10 64-bit integer.
    Integer,
    /// A hyphenated 8-4-4-4-12 UUID literal.
    Uuid,
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Grammar::Integer => "integer",
            Grammar::Uuid => "UUID",
        };
        f.write_str(s)
    }
}

/// Why the input did not match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// Nothing matching the grammar was found.
    Missing,
    /// The input started like the grammar but broke it.
    Malformed,
    /// The digit run does not fit in 64 bits.
    Overflow,
    /// The input matched the grammar but not its canonical spelling.
    NonCanonical,
    /// Input remained after a complete token.
    TrailingInput,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FailureKind::Missing => "missing",
            FailureKind::Malformed => "malformed",
            FailureKind::Overflow => "out of range",
            FailureKind::NonCanonical => "non-canonical",
            FailureKind::TrailingInput => "unexpected trailing input",
        };
        f.write_str(s)
    }
}

/// A token failed to parse.
///
/// `position` is the byte offset into the original input where the
/// offending text begins. `expected` is always the grammar of the token
/// being parsed, including when a complete token was followed by stray
/// input ([`FailureKind::TrailingInput`]).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
#[error("expected {expected} at position {position} ({kind})")]
pub struct ParseFailure {
    position: usize,
    expected: Grammar,
    kind: FailureKind,
}

impl ParseFailure {
    pub(crate) const fn new(position: usize, expected: Grammar, kind: FailureKind) -> Self {
        Self {
            position,
            expected,
            kind,
        }
    }

    /// Byte offset of the offending input.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// The grammar that was expected at [`position`](Self::position).
    #[must_use]
    pub const fn expected(&self) -> Grammar {
        self.expected
    }

    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        self.kind
    }

    /// Returns true if an integer token was out of the 64-bit range.
    pub fn is_overflow(&self) -> bool {
        matches!(self.kind, FailureKind::Overflow)
    }

    /// Returns true if a valid token was followed by unconsumed input.
    pub fn is_trailing_input(&self) -> bool {
        matches!(self.kind, FailureKind::TrailingInput)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_position_and_grammar() {
        let err = ParseFailure::new(3, Grammar::Uuid, FailureKind::Malformed);
        assert_eq!(err.to_string(), "expected UUID at position 3 (malformed)");

        let err = ParseFailure::new(2, Grammar::Integer, FailureKind::TrailingInput);
        assert_eq!(
            err.to_string(),
            "expected integer at position 2 (unexpected trailing input)"
        );
        assert!(err.is_trailing_input());
        assert!(!err.is_overflow());
    }
}
