//! # waypost-id
//!
//! Strongly-typed identifiers and the codecs that move them in and out of
//! wire tokens (URL path segments, query values, headers).
//!
//! ## Design Principles
//!
//! - An identifier is a raw value plus a compile-time tag; the tag keeps
//!   unrelated identifiers from being mixed up and costs nothing at runtime
//! - Each raw type has exactly one codec, shared by every tag
//! - Parsing and printing are exact inverses on canonical tokens
//! - Everything is an immutable value, safe to share across threads
//!
//! ## Token Formats
//!
//! | Raw type | Token                                   |
//! |----------|-----------------------------------------|
//! | `i64`    | `42`, `-7`, `0` (no leading zeros)      |
//! | `Uuid`   | `550e8400-e29b-41d4-a716-446655440000`  |
//!
//! UUID tokens are accepted in either case and always printed lowercase.
//!
//! ## Example
//!
//! ```
//! use waypost_id::{define_id, Codec, Input};
//!
//! define_id!(pub UserId, UserTag, i64);
//!
//! let mut input = Input::new("42/orders");
//! let id = UserId::codec().parse(&mut input).unwrap();
//! assert_eq!(id, UserId::new(42));
//! assert_eq!(input.remaining(), "/orders");
//!
//! let mut path = String::from("/users/");
//! UserId::codec().print(&id, &mut path);
//! assert_eq!(path, "/users/42");
//! ```

mod codec;
mod error;
mod macros;
mod primitive;
mod tagged;

pub use codec::{Codec, Conversion, Input, Map, RawValue, TaggedCodec, Wrap};
pub use error::{FailureKind, Grammar, ParseFailure};
pub use primitive::{Digits, HexCase, UuidLiteral};
pub use tagged::Tagged;

/// Re-export uuid for consumers that build UUID-backed identifiers
pub use uuid::Uuid;
