//! Byte order descriptors.
//!
//! [`ByteOrder`] selects an order at runtime.
//! [`Endianness`] selects one at the type level,
//! and is implemented for zerocopy's [`LE`](zerocopy::LE) and [`BE`](zerocopy::BE) markers
//! so the same marker types drive both the codec and zerocopy's wire types.

use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

/// An explicitly chosen byte order.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ByteOrder {
    /// Least-significant byte first.
    Little,
    /// Most-significant byte first (also known as network order).
    Big,
}

impl ByteOrder {
    /// The byte order of the host this code was compiled for.
    pub const NATIVE: Self = if cfg!(target_endian = "big") {
        Self::Big
    } else {
        Self::Little
    };

    /// Returns `true` if values in this order need no rearrangement on the host.
    #[inline]
    pub const fn is_native(self) -> bool {
        matches!(
            (self, Self::NATIVE),
            (Self::Little, Self::Little) | (Self::Big, Self::Big)
        )
    }

    /// The opposite byte order.
    #[inline]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Little => Self::Big,
            Self::Big => Self::Little,
        }
    }
}

impl Display for ByteOrder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Little => f.write_str("le"),
            Self::Big => f.write_str("be"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unrecognized byte order `{0}`; expected one of le, be, little, big, network")]
pub struct ParseByteOrderError(String);

impl FromStr for ByteOrder {
    type Err = ParseByteOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "le" | "little" | "little-endian" => Ok(Self::Little),
            "be" | "big" | "big-endian" | "network" => Ok(Self::Big),
            _ => Err(ParseByteOrderError(s.to_string())),
        }
    }
}

/// Type-level byte order.
///
/// This trait is sealed; it is implemented only for zerocopy's byte order markers.
pub trait Endianness: private::Sealed {
    /// The runtime equivalent of this marker.
    const ORDER: ByteOrder;
}

impl Endianness for zerocopy::LittleEndian {
    const ORDER: ByteOrder = ByteOrder::Little;
}

impl Endianness for zerocopy::BigEndian {
    const ORDER: ByteOrder = ByteOrder::Big;
}

mod private {
    pub trait Sealed {}

    impl Sealed for zerocopy::LittleEndian {}
    impl Sealed for zerocopy::BigEndian {}
}

/// Rebuilds a byte view so that it holds the value whose bytes, read in `order`, are `bytes`.
///
/// The byte at significance position `k` of the result (`k = 0` is least significant)
/// is `bytes[k]` for little-endian and `bytes[N - 1 - k]` for big-endian.
/// The result is laid out in host order, so it can be reinterpreted directly as a scalar.
///
/// This is always either the identity or a full reversal,
/// and applying it twice with the same order yields the input.
#[inline]
pub const fn arrange<const N: usize>(bytes: [u8; N], order: ByteOrder) -> [u8; N] {
    let mut out = [0u8; N];
    let mut k = 0;
    while k < N {
        let src = match order {
            ByteOrder::Little => k,
            ByteOrder::Big => N - 1 - k,
        };
        let dst = match ByteOrder::NATIVE {
            ByteOrder::Little => k,
            ByteOrder::Big => N - 1 - k,
        };
        out[dst] = bytes[src];
        k += 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::{prop_assert_eq, proptest};

    #[test]
    fn native_order_matches_target() {
        assert_eq!(
            ByteOrder::NATIVE == ByteOrder::Little,
            cfg!(target_endian = "little")
        );
        assert!(ByteOrder::NATIVE.is_native());
        assert!(!ByteOrder::NATIVE.reversed().is_native());
    }

    #[test]
    fn marker_orders() {
        assert_eq!(<zerocopy::LE as Endianness>::ORDER, ByteOrder::Little);
        assert_eq!(<zerocopy::BE as Endianness>::ORDER, ByteOrder::Big);
        assert_eq!(<zerocopy::NetworkEndian as Endianness>::ORDER, ByteOrder::Big);
        assert_eq!(<zerocopy::NativeEndian as Endianness>::ORDER, ByteOrder::NATIVE);
    }

    #[test]
    fn parse_byte_order() {
        assert_eq!("le".parse(), Ok(ByteOrder::Little));
        assert_eq!("Little-Endian".parse(), Ok(ByteOrder::Little));
        assert_eq!(" BE ".parse(), Ok(ByteOrder::Big));
        assert_eq!("network".parse(), Ok(ByteOrder::Big));
        assert_eq!(
            "middle".parse::<ByteOrder>(),
            Err(ParseByteOrderError("middle".to_string()))
        );
    }

    #[test]
    fn display_round_trips_through_parse() {
        for order in [ByteOrder::Little, ByteOrder::Big] {
            assert_eq!(order.to_string().parse(), Ok(order));
        }
    }

    #[test]
    fn arrange_native_is_identity() {
        let bytes = [1, 2, 3, 4, 5, 6, 7, 8];
        assert_eq!(arrange(bytes, ByteOrder::NATIVE), bytes);
        assert_eq!(
            arrange(bytes, ByteOrder::NATIVE.reversed()),
            [8, 7, 6, 5, 4, 3, 2, 1]
        );
    }

    #[test]
    fn arrange_builds_value_by_significance() {
        let bytes = [0x12, 0x34];
        assert_eq!(
            u16::from_ne_bytes(arrange(bytes, ByteOrder::Little)),
            0x3412
        );
        assert_eq!(u16::from_ne_bytes(arrange(bytes, ByteOrder::Big)), 0x1234);
    }

    proptest! {
        #[test]
        fn prop_arrange_is_involution(bytes: [u8; 8]) {
            prop_assert_eq!(arrange(arrange(bytes, ByteOrder::Little), ByteOrder::Little), bytes);
            prop_assert_eq!(arrange(arrange(bytes, ByteOrder::Big), ByteOrder::Big), bytes);
        }
    }
}
