//! Round-trip laws for the identifier codecs.

use proptest::prelude::*;
use waypost_id::{define_id, Codec, Input, Uuid, UuidLiteral};

define_id!(UserId, UserTag, i64);
define_id!(OrderId, OrderTag, Uuid);

/// Canonical integer tokens: `0`, or an optional `-` and a non-zero leading
/// digit, short enough to stay inside `i64`.
fn integer_token() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("0".to_string()),
        "-?[1-9][0-9]{0,17}",
    ]
}

fn lowercase_uuid_token() -> impl Strategy<Value = String> {
    "[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}"
}

proptest! {
    #[test]
    fn integer_print_after_parse(token in integer_token()) {
        let id = UserId::parse(&token).unwrap();
        prop_assert_eq!(id.to_string(), token);
    }

    #[test]
    fn integer_parse_after_print(raw in any::<i64>()) {
        let id = UserId::new(raw);
        let token = UserId::codec().print_to_string(&id);

        let mut input = Input::new(&token);
        let parsed = UserId::codec().parse(&mut input).unwrap();
        prop_assert_eq!(parsed, id);
        prop_assert!(input.is_empty());
    }

    #[test]
    fn integer_never_wraps_out_of_range(extra in 1u64..=u64::MAX / 2) {
        let token = (i64::MAX as u128 + extra as u128).to_string();
        let err = UserId::parse(&token).unwrap_err();
        prop_assert!(err.is_overflow());
    }

    #[test]
    fn uuid_print_after_parse(token in lowercase_uuid_token()) {
        let id = OrderId::parse(&token).unwrap();
        prop_assert_eq!(id.to_string(), token);
    }

    #[test]
    fn uuid_parse_after_print(bytes in any::<[u8; 16]>()) {
        let id = OrderId::new(Uuid::from_bytes(bytes));
        let token = id.to_string();

        let mut input = Input::new(&token);
        let parsed = OrderId::codec().parse(&mut input).unwrap();
        prop_assert_eq!(parsed, id);
        prop_assert!(input.is_empty());
    }

    #[test]
    fn uuid_case_is_normalized(token in lowercase_uuid_token()) {
        let upper = OrderId::parse(&token.to_ascii_uppercase()).unwrap();
        prop_assert_eq!(upper.to_string(), token.clone());
        prop_assert!(UuidLiteral::lowercase().parse_complete(&token).is_ok());
    }

    #[test]
    fn uuid_rejects_any_wrong_length(token in "[0-9a-f-]{0,35}") {
        prop_assert!(OrderId::parse(&token).is_err());
    }

    #[test]
    fn trailing_input_is_left_for_the_caller(raw in any::<i64>(), rest in "/[a-z]{1,8}") {
        let source = format!("{raw}{rest}");
        let mut input = Input::new(&source);
        let id = UserId::codec().parse(&mut input).unwrap();
        prop_assert_eq!(id.into_raw(), raw);
        prop_assert_eq!(input.remaining(), rest.as_str());
    }
}
