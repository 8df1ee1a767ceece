/// Generates the four named entry points for one scalar kind.
///
/// All four are the same host-order/target-order permutation ([`arrange`](crate::order::arrange))
/// sandwiched between two [`zerocopy::transmute!`] bit casts,
/// so they stay `const` and never alias a value through a pointer.
macro_rules! endian_codec_fns {
    (
        $ty:ty, $bytes:literal, $desc:literal,
        read_le: $read_le:ident,
        convert_to_le: $convert_to_le:ident,
        read_be: $read_be:ident,
        convert_to_be: $convert_to_be:ident $(,)?
    ) => {
        #[doc = concat!("Reads a ", $desc, " stored in little-endian order, producing the native value.")]
        #[inline]
        #[must_use]
        pub const fn $read_le(value: $ty) -> $ty {
            let bytes: [u8; $bytes] = ::zerocopy::transmute!(value);
            ::zerocopy::transmute!($crate::order::arrange(bytes, $crate::ByteOrder::Little))
        }

        #[doc = concat!("Converts a native ", $desc, " to little-endian order.")]
        ///
        #[doc = concat!("Identical to [`", stringify!($read_le), "`]: the reorder is an involution.")]
        #[inline]
        #[must_use]
        pub const fn $convert_to_le(value: $ty) -> $ty {
            $read_le(value)
        }

        #[doc = concat!("Reads a ", $desc, " stored in big-endian order, producing the native value.")]
        #[inline]
        #[must_use]
        pub const fn $read_be(value: $ty) -> $ty {
            let bytes: [u8; $bytes] = ::zerocopy::transmute!(value);
            ::zerocopy::transmute!($crate::order::arrange(bytes, $crate::ByteOrder::Big))
        }

        #[doc = concat!("Converts a native ", $desc, " to big-endian order.")]
        ///
        #[doc = concat!("Identical to [`", stringify!($read_be), "`]: the reorder is an involution.")]
        #[inline]
        #[must_use]
        pub const fn $convert_to_be(value: $ty) -> $ty {
            $read_be(value)
        }
    };
}
