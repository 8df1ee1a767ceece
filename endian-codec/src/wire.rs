//! Helpers for converting between native scalars and zerocopy endian-aware wire types.
//!
//! These are shaped for `bitfield-struct`'s `from`/`into` hooks:
//!
//! ```ignore
//! #[bitfield(u32,
//!     repr = U32<BE>,
//!     from = endian_codec::wire::conv_u32be::from_inner,
//!     into = endian_codec::wire::conv_u32be::into_inner
//! )]
//! struct Header { /* ... */ }
//! ```
//!
//! The wire types store their bytes in a fixed order,
//! so `from_inner(n).as_bytes()` is the same byte sequence the codec produces for `n` in that order.

macro_rules! wire_conv {
    ($($module:ident: $native:ty => $wire:ident<$order:ident>;)*) => {
        $(
            pub mod $module {
                use zerocopy::{$order, $wire};
                pub const fn from_inner(n: $native) -> $wire<$order> {
                    $wire::<$order>::new(n)
                }
                pub const fn into_inner(v: $wire<$order>) -> $native {
                    v.get()
                }
            }
        )*
    };
}

// Float wire types have no const constructors.
macro_rules! wire_conv_float {
    ($($module:ident: $native:ty => $wire:ident<$order:ident>;)*) => {
        $(
            pub mod $module {
                use zerocopy::{$order, $wire};
                pub fn from_inner(n: $native) -> $wire<$order> {
                    $wire::<$order>::new(n)
                }
                pub fn into_inner(v: $wire<$order>) -> $native {
                    v.get()
                }
            }
        )*
    };
}

wire_conv! {
    conv_u16le: u16 => U16<LE>;
    conv_u16be: u16 => U16<BE>;
    conv_i16le: i16 => I16<LE>;
    conv_i16be: i16 => I16<BE>;
    conv_u32le: u32 => U32<LE>;
    conv_u32be: u32 => U32<BE>;
    conv_i32le: i32 => I32<LE>;
    conv_i32be: i32 => I32<BE>;
    conv_u64le: u64 => U64<LE>;
    conv_u64be: u64 => U64<BE>;
    conv_i64le: i64 => I64<LE>;
    conv_i64be: i64 => I64<BE>;
}

wire_conv_float! {
    conv_f32le: f32 => F32<LE>;
    conv_f32be: f32 => F32<BE>;
    conv_f64le: f64 => F64<LE>;
    conv_f64be: f64 => F64<BE>;
}
