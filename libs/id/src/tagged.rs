//! The phantom-tagged identifier type.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::str::FromStr;

use uuid::Uuid;

use crate::codec::{Codec, RawValue, TaggedCodec, Wrap};
use crate::error::ParseFailure;

/// A raw value labelled with a compile-time tag.
///
/// `Tagged<UserTag, i64>` and `Tagged<OrderTag, i64>` store the same thing
/// but are different types, so one cannot be passed where the other is
/// expected:
///
/// ```compile_fail
/// use waypost_id::Tagged;
///
/// enum UserTag {}
/// enum OrderTag {}
///
/// fn load_user(_id: Tagged<UserTag, i64>) {}
///
/// let order: Tagged<OrderTag, i64> = Tagged::new(7);
/// load_user(order);
/// ```
///
/// The tag is only a marker. It is never stored, needs no trait impls, and
/// does not affect `Send`, `Sync` or `Copy`; all of those follow `Raw`.
#[repr(transparent)]
pub struct Tagged<Tag, Raw> {
    raw: Raw,
    _tag: PhantomData<fn() -> Tag>,
}

impl<Tag, Raw> Tagged<Tag, Raw> {
    /// Wraps a raw value. Never fails.
    #[must_use]
    pub const fn new(raw: Raw) -> Self {
        Self {
            raw,
            _tag: PhantomData,
        }
    }

    /// Returns the underlying raw value.
    #[must_use]
    pub const fn raw(&self) -> &Raw {
        &self.raw
    }

    #[must_use]
    pub fn into_raw(self) -> Raw {
        self.raw
    }
}

impl<Tag, Raw: RawValue> Tagged<Tag, Raw> {
    /// The codec that parses and prints this identifier type.
    #[must_use]
    pub fn codec() -> TaggedCodec<Tag, Raw> {
        Raw::primitive().map(Wrap::new())
    }

    /// Parses a complete token. Alias for [`FromStr`].
    pub fn parse(token: &str) -> Result<Self, ParseFailure> {
        Self::codec().parse_complete(token)
    }
}

impl<Tag> Tagged<Tag, Uuid> {
    /// Creates an identifier from a random (v4) UUID.
    #[must_use]
    pub fn new_v4() -> Self {
        Self::new(Uuid::new_v4())
    }

    /// Creates an identifier from a time-ordered (v7) UUID.
    #[must_use]
    pub fn new_v7() -> Self {
        Self::new(Uuid::now_v7())
    }

    /// The all-zero identifier.
    #[must_use]
    pub const fn nil() -> Self {
        Self::new(Uuid::nil())
    }
}

impl<Tag, Raw> From<Raw> for Tagged<Tag, Raw> {
    fn from(raw: Raw) -> Self {
        Self::new(raw)
    }
}

impl<Tag, Raw: Clone> Clone for Tagged<Tag, Raw> {
    fn clone(&self) -> Self {
        Self::new(self.raw.clone())
    }
}

impl<Tag, Raw: Copy> Copy for Tagged<Tag, Raw> {}

impl<Tag, Raw: PartialEq> PartialEq for Tagged<Tag, Raw> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<Tag, Raw: Eq> Eq for Tagged<Tag, Raw> {}

impl<Tag, Raw: PartialOrd> PartialOrd for Tagged<Tag, Raw> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.raw.partial_cmp(&other.raw)
    }
}

impl<Tag, Raw: Ord> Ord for Tagged<Tag, Raw> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.raw.cmp(&other.raw)
    }
}

impl<Tag, Raw: Hash> Hash for Tagged<Tag, Raw> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl<Tag, Raw: fmt::Debug> fmt::Debug for Tagged<Tag, Raw> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Tagged").field(&self.raw).finish()
    }
}

/// Writes the same token the codec prints.
impl<Tag, Raw: RawValue> fmt::Display for Tagged<Tag, Raw> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Raw::primitive().print_to_string(&self.raw))
    }
}

impl<Tag, Raw: RawValue> FromStr for Tagged<Tag, Raw> {
    type Err = ParseFailure;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<Tag, Raw: serde::Serialize> serde::Serialize for Tagged<Tag, Raw> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.raw.serialize(serializer)
    }
}

impl<'de, Tag, Raw: serde::Deserialize<'de>> serde::Deserialize<'de> for Tagged<Tag, Raw> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Raw::deserialize(deserializer).map(Self::new)
    }
}

impl<Tag, Raw> AsRef<Raw> for Tagged<Tag, Raw> {
    fn as_ref(&self) -> &Raw {
        &self.raw
    }
}
