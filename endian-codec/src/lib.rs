//! # Endian Codec
//!
//! Converts fixed-width integers and floats between the host's byte order
//! and an explicitly chosen one (little- or big-endian),
//! so serialization code gets the same on-the-wire layout on every architecture.
//!
//! Every kind gets four entry points:
//!
//! | | little-endian | big-endian |
//! |---|---|---|
//! | read (stored order → native) | [`read_le_u32`] | [`read_be_u32`] |
//! | convert (native → stored order) | [`convert_to_le_u32`] | [`convert_to_be_u32`] |
//!
//! ...for `u16`, `i16`, `u32`, `i32`, `f32`, `u64`, `i64` and `f64`.
//! Signed kinds are also exported under `s16`/`s32`/`s64` names.
//! There are no 8-bit variants; a single byte has no order.
//!
//! ## Read vs. convert
//!
//! Reordering bytes is an involution, so "read a value stored in order X"
//! and "convert a native value to order X" are the same permutation.
//! The two names are kept as aliases for readability at call sites.
//! Building a `convert_*` result by right-shifting each extracted byte into place
//! would zero every byte above the first; sharing the `read_*` permutation rules that out.
//!
//! ## Floating point
//!
//! Floats are reinterpreted with [`zerocopy::transmute!`], never through a pointer cast,
//! and are never arithmetically touched.
//! NaN payloads, infinities, signed zeros and subnormals keep their exact bit patterns.
//!
//! ## Thread safety
//!
//! Every function is pure, allocation-free and reentrant.
//! They touch nothing but their arguments, so they may be called concurrently from any thread.
//!
//! ## Generic use
//!
//! The [`Scalar`] trait and [`reorder`] expose the same permutation generically,
//! with the order chosen either at runtime ([`ByteOrder`])
//! or at the type level (zerocopy's [`LE`](zerocopy::LE)/[`BE`](zerocopy::BE) via [`Endianness`]).
//! The [`wire`] module bridges native values and zerocopy's byte-order-aware storage types.

#[macro_use]
mod macros;

mod kind;
mod order;
mod scalar;
pub mod w16;
pub mod w32;
pub mod w64;
pub mod wire;

pub use kind::{ParseScalarKindError, ScalarKind};
pub use order::{ByteOrder, Endianness, ParseByteOrderError, arrange};
pub use scalar::{Scalar, from_order_bytes, reorder, to_order_bytes};

// Flatten the width modules so callers can `use endian_codec::read_be_u32`.
pub use w16::*;
pub use w32::*;
pub use w64::*;
