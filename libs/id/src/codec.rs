//! Parse/print codecs over a token stream.
//!
//! A [`Codec`] is a pair of functions: `parse` reads a value from the front
//! of an [`Input`], `print` appends the value's token to a `String`. Every
//! codec in this crate obeys the round-trip law:
//!
//! - `print(parse(t)) == t` for every token `t` that `parse` accepts in its
//!   canonical spelling
//! - `parse(print(v)) == v` for every value `v`, with no input left over
//!
//! Codecs are plain immutable values. They hold no interior state and can be
//! shared between threads freely.

use std::marker::PhantomData;

use crate::error::{FailureKind, Grammar, ParseFailure};
use crate::tagged::Tagged;

/// A string being parsed, with the absolute position of the next byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Input<'a> {
    source: &'a str,
    position: usize,
}

impl<'a> Input<'a> {
    /// Starts parsing at the beginning of `source`.
    #[must_use]
    pub const fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
        }
    }

    /// Byte offset of the next unread byte.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// The unread part of the input.
    #[must_use]
    pub fn remaining(&self) -> &'a str {
        self.source.get(self.position..).unwrap_or_default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remaining().is_empty()
    }

    /// Consumes `len` bytes.
    ///
    /// Clamped to the end of the input. A position inside a multi-byte
    /// character is moved forward to the end of that character, so the
    /// position is always a char boundary.
    pub fn advance(&mut self, len: usize) {
        let mut position = (self.position + len).min(self.source.len());
        while !self.source.is_char_boundary(position) {
            position += 1;
        }
        self.position = position;
    }

    /// Succeeds only if every byte has been consumed.
    ///
    /// `grammar` is the token that was just parsed; the failure reports it
    /// with [`FailureKind::TrailingInput`].
    pub fn finish(&self, grammar: Grammar) -> Result<(), ParseFailure> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(ParseFailure::new(
                self.position,
                grammar,
                FailureKind::TrailingInput,
            ))
        }
    }
}

/// A parser and printer for one kind of value.
///
/// `parse` must leave the input untouched when it fails and must not
/// consume anything past the end of its own grammar. `print` is total.
pub trait Codec {
    type Output;

    /// The grammar this codec recognizes, reported in its failures.
    fn grammar(&self) -> Grammar;

    /// Parses a value from the front of `input`, advancing past it.
    fn parse(&self, input: &mut Input<'_>) -> Result<Self::Output, ParseFailure>;

    /// Appends the token for `value` to `output`.
    fn print(&self, value: &Self::Output, output: &mut String);

    /// Parses `token`, requiring the whole token to be consumed.
    fn parse_complete(&self, token: &str) -> Result<Self::Output, ParseFailure> {
        let mut input = Input::new(token);
        let value = self.parse(&mut input)?;
        input.finish(self.grammar())?;
        Ok(value)
    }

    fn print_to_string(&self, value: &Self::Output) -> String {
        let mut output = String::new();
        self.print(value, &mut output);
        output
    }

    /// Runs every parsed value through `conversion`, and every printed value
    /// back through it.
    fn map<V>(self, conversion: V) -> Map<Self, V>
    where
        Self: Sized,
        V: Conversion<Input = Self::Output>,
    {
        Map {
            codec: self,
            conversion,
        }
    }
}

/// An infallible, invertible conversion between two types.
pub trait Conversion {
    type Input;
    type Output;

    fn apply(&self, input: Self::Input) -> Self::Output;

    fn unapply(&self, output: &Self::Output) -> Self::Input;
}

/// A codec whose output has been converted. See [`Codec::map`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Map<C, V> {
    codec: C,
    conversion: V,
}

impl<C, V> Codec for Map<C, V>
where
    C: Codec,
    V: Conversion<Input = C::Output>,
{
    type Output = V::Output;

    fn grammar(&self) -> Grammar {
        self.codec.grammar()
    }

    fn parse(&self, input: &mut Input<'_>) -> Result<Self::Output, ParseFailure> {
        self.codec
            .parse(input)
            .map(|raw| self.conversion.apply(raw))
    }

    fn print(&self, value: &Self::Output, output: &mut String) {
        self.codec.print(&self.conversion.unapply(value), output);
    }
}

/// Wraps a raw value into a [`Tagged`] identifier and unwraps it again.
pub struct Wrap<Tag, Raw> {
    _marker: PhantomData<fn() -> Tagged<Tag, Raw>>,
}

impl<Tag, Raw> Wrap<Tag, Raw> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<Tag, Raw> Default for Wrap<Tag, Raw> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Tag, Raw> Clone for Wrap<Tag, Raw> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Tag, Raw> Copy for Wrap<Tag, Raw> {}

impl<Tag, Raw> std::fmt::Debug for Wrap<Tag, Raw> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Wrap")
    }
}

impl<Tag, Raw: Clone> Conversion for Wrap<Tag, Raw> {
    type Input = Raw;
    type Output = Tagged<Tag, Raw>;

    fn apply(&self, input: Raw) -> Tagged<Tag, Raw> {
        Tagged::new(input)
    }

    fn unapply(&self, output: &Tagged<Tag, Raw>) -> Raw {
        output.raw().clone()
    }
}

/// A raw representation that identifiers can be built on.
///
/// Each raw type has exactly one primitive codec. The tag of an identifier
/// never changes how it is parsed or printed.
pub trait RawValue: Clone + Sized {
    type Primitive: Codec<Output = Self> + Default;

    /// The primitive codec for this raw type.
    fn primitive() -> Self::Primitive {
        Self::Primitive::default()
    }
}

impl RawValue for i64 {
    type Primitive = crate::primitive::Digits;
}

impl RawValue for uuid::Uuid {
    type Primitive = crate::primitive::UuidLiteral;
}

/// The codec for `Tagged<Tag, Raw>`: the raw type's primitive codec mapped
/// through [`Wrap`].
pub type TaggedCodec<Tag, Raw> = Map<<Raw as RawValue>::Primitive, Wrap<Tag, Raw>>;
