//! The generic byte permutation behind every named conversion.

use crate::kind::ScalarKind;
use crate::order::{ByteOrder, Endianness, arrange};
use zerocopy::transmute;
use private::ByteView;

/// A fixed-width scalar whose bytes can be reordered.
///
/// Implemented for the eight kinds in [`ScalarKind`]. The trait is sealed.
///
/// The byte views are produced with [`zerocopy::transmute!`],
/// so floating-point values are never arithmetically touched:
/// NaN payloads, infinities, signed zeros and subnormals keep their exact bits.
pub trait Scalar: Copy + private::Sealed {
    /// The byte view of this scalar (`[u8; N]`).
    type Bytes: private::ByteView + Eq + std::fmt::Debug + AsRef<[u8]>;

    const KIND: ScalarKind;

    /// The in-memory bytes of the value, in host order.
    fn to_native_bytes(self) -> Self::Bytes;

    /// Reinterprets host-order bytes as a value.
    fn from_native_bytes(bytes: Self::Bytes) -> Self;

    /// Reorders the bytes of the value between host order and `order`.
    ///
    /// Reading a value stored in `order` and converting a native value to `order`
    /// are the same permutation, so this serves both directions.
    #[inline]
    #[must_use]
    fn reorder(self, order: ByteOrder) -> Self {
        Self::from_native_bytes(self.to_native_bytes().arranged(order))
    }

    /// The byte sequence of the value in `order`; index 0 is the first byte on the wire.
    #[inline]
    fn to_order_bytes(self, order: ByteOrder) -> Self::Bytes {
        self.to_native_bytes().arranged(order)
    }

    /// Builds a value from a byte sequence in `order`.
    #[inline]
    fn from_order_bytes(bytes: Self::Bytes, order: ByteOrder) -> Self {
        Self::from_native_bytes(bytes.arranged(order))
    }

    #[inline]
    fn to_le_bytes(self) -> Self::Bytes {
        self.to_order_bytes(ByteOrder::Little)
    }

    #[inline]
    fn to_be_bytes(self) -> Self::Bytes {
        self.to_order_bytes(ByteOrder::Big)
    }

    #[inline]
    fn from_le_bytes(bytes: Self::Bytes) -> Self {
        Self::from_order_bytes(bytes, ByteOrder::Little)
    }

    #[inline]
    fn from_be_bytes(bytes: Self::Bytes) -> Self {
        Self::from_order_bytes(bytes, ByteOrder::Big)
    }
}

macro_rules! impl_scalar {
    ($($ty:ty => $kind:ident, $bytes:literal;)*) => {
        $(
            impl private::Sealed for $ty {}

            impl Scalar for $ty {
                type Bytes = [u8; $bytes];

                const KIND: ScalarKind = ScalarKind::$kind;

                #[inline]
                fn to_native_bytes(self) -> [u8; $bytes] {
                    transmute!(self)
                }

                #[inline]
                fn from_native_bytes(bytes: [u8; $bytes]) -> Self {
                    transmute!(bytes)
                }
            }
        )*
    };
}

impl_scalar! {
    u16 => U16, 2;
    i16 => I16, 2;
    u32 => U32, 4;
    i32 => I32, 4;
    f32 => F32, 4;
    u64 => U64, 8;
    i64 => I64, 8;
    f64 => F64, 8;
}

mod private {
    use super::{ByteOrder, arrange};

    pub trait Sealed {}

    /// A host-order byte view that [`arrange`] can permute.
    pub trait ByteView: Copy {
        fn arranged(self, order: ByteOrder) -> Self;
    }

    impl<const N: usize> ByteView for [u8; N] {
        #[inline]
        fn arranged(self, order: ByteOrder) -> Self {
            arrange(self, order)
        }
    }
}

/// Reorders `value` between host order and the type-level order `O`.
///
/// ```
/// use endian_codec::reorder;
/// use zerocopy::BE;
///
/// let wire = reorder::<BE, u32>(0x0102_0304);
/// assert_eq!(wire.to_ne_bytes(), [0x01, 0x02, 0x03, 0x04]);
/// assert_eq!(reorder::<BE, u32>(wire), 0x0102_0304);
/// ```
#[inline]
#[must_use]
pub fn reorder<O: Endianness, T: Scalar>(value: T) -> T {
    value.reorder(O::ORDER)
}

/// The byte sequence of `value` in `order`.
#[inline]
pub fn to_order_bytes<T: Scalar>(value: T, order: ByteOrder) -> T::Bytes {
    value.to_order_bytes(order)
}

/// Builds a value from a byte sequence in `order`.
#[inline]
pub fn from_order_bytes<T: Scalar>(bytes: T::Bytes, order: ByteOrder) -> T {
    T::from_order_bytes(bytes, order)
}
