//! Macros for declaring identifier types.

/// Declares a marker tag and a [`Tagged`](crate::Tagged) alias over it.
///
/// The tag is an uninhabited enum, so it can never be constructed and takes
/// no space. The generated alias gets `Display`, `FromStr`, serde support and
/// a codec from the raw type.
///
/// # Example
///
/// ```
/// use waypost_id::define_id;
///
/// define_id!(
///     /// A customer account.
///     pub UserId, UserTag, i64
/// );
/// define_id!(pub SessionId, SessionTag, waypost_id::Uuid);
///
/// let user: UserId = "42".parse().unwrap();
/// assert_eq!(user.to_string(), "42");
///
/// let session = SessionId::new_v4();
/// assert_eq!(session.to_string().len(), 36);
/// ```
#[macro_export]
macro_rules! define_id {
    ($(#[$meta:meta])* $vis:vis $name:ident, $tag:ident, $raw:ty $(,)?) => {
        #[doc = concat!("Marker tag for [`", stringify!($name), "`].")]
        $vis enum $tag {}

        $(#[$meta])*
        $vis type $name = $crate::Tagged<$tag, $raw>;
    };
}

#[cfg(test)]
mod tests {
    use crate::Tagged;

    define_id!(pub(crate) InvoiceId, InvoiceTag, i64);
    define_id!(
        /// Checkout identifiers.
        CheckoutId,
        CheckoutTag,
        uuid::Uuid,
    );

    #[test]
    fn test_define_id_declares_alias() {
        let id: InvoiceId = "314".parse().unwrap();
        let same: Tagged<InvoiceTag, i64> = id;
        assert_eq!(same.into_raw(), 314);
    }

    #[test]
    fn test_define_id_uuid_alias() {
        let id = CheckoutId::nil();
        assert_eq!(id.to_string(), "00000000-0000-0000-0000-000000000000");
    }
}
