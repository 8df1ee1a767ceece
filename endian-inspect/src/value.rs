use anyhow::{Context, anyhow, bail};
use endian_codec::{
    ByteOrder, ScalarKind, convert_to_be_f32, convert_to_be_f64, convert_to_be_i16,
    convert_to_be_i32, convert_to_be_i64, convert_to_be_u16, convert_to_be_u32, convert_to_be_u64,
    convert_to_le_f32, convert_to_le_f64, convert_to_le_i16, convert_to_le_i32, convert_to_le_i64,
    convert_to_le_u16, convert_to_le_u32, convert_to_le_u64, read_be_f32, read_be_f64, read_be_i16,
    read_be_i32, read_be_i64, read_be_u16, read_be_u32, read_be_u64, read_le_f32, read_le_f64,
    read_le_i16, read_le_i32, read_le_i64, read_le_u16, read_le_u32, read_le_u64, to_order_bytes,
};
use std::fmt::{Display, Formatter};

/// A scalar of any kind the codec supports.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ScalarValue {
    U16(u16),
    I16(i16),
    U32(u32),
    I32(i32),
    U64(u64),
    I64(i64),
    F32(f32),
    F64(f64),
}

/// Expands `$body` once per variant with `$v` bound to the inner value.
macro_rules! each_variant {
    ($value:expr, $v:ident => $body:expr) => {
        match $value {
            ScalarValue::U16($v) => $body,
            ScalarValue::I16($v) => $body,
            ScalarValue::U32($v) => $body,
            ScalarValue::I32($v) => $body,
            ScalarValue::U64($v) => $body,
            ScalarValue::I64($v) => $body,
            ScalarValue::F32($v) => $body,
            ScalarValue::F64($v) => $body,
        }
    };
}

impl ScalarValue {
    /// Parses a human-written value of the given kind.
    ///
    /// Integers accept an optional sign and a `0x`, `0o` or `0b` radix prefix;
    /// underscores are ignored.
    /// Floats accept anything [`f64::from_str`](std::str::FromStr) does, including `NaN` and `inf`.
    pub fn parse(kind: ScalarKind, input: &str) -> anyhow::Result<Self> {
        let input = input.trim();
        let integer = || parse_integer(input);
        let out_of_range = || format!("{input} does not fit in {kind}");
        Ok(match kind {
            ScalarKind::U16 => Self::U16(integer()?.try_into().with_context(out_of_range)?),
            ScalarKind::I16 => Self::I16(integer()?.try_into().with_context(out_of_range)?),
            ScalarKind::U32 => Self::U32(integer()?.try_into().with_context(out_of_range)?),
            ScalarKind::I32 => Self::I32(integer()?.try_into().with_context(out_of_range)?),
            ScalarKind::U64 => Self::U64(integer()?.try_into().with_context(out_of_range)?),
            ScalarKind::I64 => Self::I64(integer()?.try_into().with_context(out_of_range)?),
            ScalarKind::F32 => Self::F32(
                input
                    .parse()
                    .with_context(|| format!("invalid f32 value `{input}`"))?,
            ),
            ScalarKind::F64 => Self::F64(
                input
                    .parse()
                    .with_context(|| format!("invalid f64 value `{input}`"))?,
            ),
        })
    }

    /// Builds a value from its raw bit pattern, written in hex.
    ///
    /// This is the only way to get an exact NaN payload into the tool.
    pub fn from_bit_pattern(kind: ScalarKind, input: &str) -> anyhow::Result<Self> {
        let digits = strip_hex_prefix(input.trim()).replace('_', "");
        reject_inner_sign(&digits, input)?;
        let bits = u64::from_str_radix(&digits, 16)
            .with_context(|| format!("invalid hex bit pattern `{input}`"))?;
        if kind.width_bits() < 64 && bits >> kind.width_bits() != 0 {
            bail!("bit pattern {input} is wider than {} bits", kind.width_bits());
        }

        Ok(match kind {
            ScalarKind::U16 => Self::U16(u16::try_from(bits)?),
            ScalarKind::I16 => Self::I16(i16::from_ne_bytes(u16::try_from(bits)?.to_ne_bytes())),
            ScalarKind::U32 => Self::U32(u32::try_from(bits)?),
            ScalarKind::I32 => Self::I32(i32::from_ne_bytes(u32::try_from(bits)?.to_ne_bytes())),
            ScalarKind::F32 => Self::F32(f32::from_bits(u32::try_from(bits)?)),
            ScalarKind::U64 => Self::U64(bits),
            ScalarKind::I64 => Self::I64(i64::from_ne_bytes(bits.to_ne_bytes())),
            ScalarKind::F64 => Self::F64(f64::from_bits(bits)),
        })
    }

    pub fn kind(&self) -> ScalarKind {
        match self {
            Self::U16(_) => ScalarKind::U16,
            Self::I16(_) => ScalarKind::I16,
            Self::U32(_) => ScalarKind::U32,
            Self::I32(_) => ScalarKind::I32,
            Self::U64(_) => ScalarKind::U64,
            Self::I64(_) => ScalarKind::I64,
            Self::F32(_) => ScalarKind::F32,
            Self::F64(_) => ScalarKind::F64,
        }
    }

    /// The byte sequence of the value in `order`; index 0 goes on the wire first.
    pub fn order_bytes(&self, order: ByteOrder) -> Vec<u8> {
        each_variant!(*self, v => to_order_bytes(v, order).to_vec())
    }

    /// The in-memory bytes of the value on this host.
    pub fn native_bytes(&self) -> Vec<u8> {
        self.order_bytes(ByteOrder::NATIVE)
    }

    /// The raw bit pattern, zero-extended to 64 bits.
    pub fn bits(&self) -> u64 {
        self.order_bytes(ByteOrder::Big)
            .iter()
            .fold(0, |acc, &b| (acc << 8) | u64::from(b))
    }

    /// Converts a native value to `order`.
    pub fn convert_to(self, order: ByteOrder) -> Self {
        match (self, order) {
            (Self::U16(v), ByteOrder::Little) => Self::U16(convert_to_le_u16(v)),
            (Self::U16(v), ByteOrder::Big) => Self::U16(convert_to_be_u16(v)),
            (Self::I16(v), ByteOrder::Little) => Self::I16(convert_to_le_i16(v)),
            (Self::I16(v), ByteOrder::Big) => Self::I16(convert_to_be_i16(v)),
            (Self::U32(v), ByteOrder::Little) => Self::U32(convert_to_le_u32(v)),
            (Self::U32(v), ByteOrder::Big) => Self::U32(convert_to_be_u32(v)),
            (Self::I32(v), ByteOrder::Little) => Self::I32(convert_to_le_i32(v)),
            (Self::I32(v), ByteOrder::Big) => Self::I32(convert_to_be_i32(v)),
            (Self::U64(v), ByteOrder::Little) => Self::U64(convert_to_le_u64(v)),
            (Self::U64(v), ByteOrder::Big) => Self::U64(convert_to_be_u64(v)),
            (Self::I64(v), ByteOrder::Little) => Self::I64(convert_to_le_i64(v)),
            (Self::I64(v), ByteOrder::Big) => Self::I64(convert_to_be_i64(v)),
            (Self::F32(v), ByteOrder::Little) => Self::F32(convert_to_le_f32(v)),
            (Self::F32(v), ByteOrder::Big) => Self::F32(convert_to_be_f32(v)),
            (Self::F64(v), ByteOrder::Little) => Self::F64(convert_to_le_f64(v)),
            (Self::F64(v), ByteOrder::Big) => Self::F64(convert_to_be_f64(v)),
        }
    }

    /// Interprets the value as stored in `order`, producing the native value.
    pub fn read_as(self, order: ByteOrder) -> Self {
        match (self, order) {
            (Self::U16(v), ByteOrder::Little) => Self::U16(read_le_u16(v)),
            (Self::U16(v), ByteOrder::Big) => Self::U16(read_be_u16(v)),
            (Self::I16(v), ByteOrder::Little) => Self::I16(read_le_i16(v)),
            (Self::I16(v), ByteOrder::Big) => Self::I16(read_be_i16(v)),
            (Self::U32(v), ByteOrder::Little) => Self::U32(read_le_u32(v)),
            (Self::U32(v), ByteOrder::Big) => Self::U32(read_be_u32(v)),
            (Self::I32(v), ByteOrder::Little) => Self::I32(read_le_i32(v)),
            (Self::I32(v), ByteOrder::Big) => Self::I32(read_be_i32(v)),
            (Self::U64(v), ByteOrder::Little) => Self::U64(read_le_u64(v)),
            (Self::U64(v), ByteOrder::Big) => Self::U64(read_be_u64(v)),
            (Self::I64(v), ByteOrder::Little) => Self::I64(read_le_i64(v)),
            (Self::I64(v), ByteOrder::Big) => Self::I64(read_be_i64(v)),
            (Self::F32(v), ByteOrder::Little) => Self::F32(read_le_f32(v)),
            (Self::F32(v), ByteOrder::Big) => Self::F32(read_be_f32(v)),
            (Self::F64(v), ByteOrder::Little) => Self::F64(read_le_f64(v)),
            (Self::F64(v), ByteOrder::Big) => Self::F64(read_be_f64(v)),
        }
    }
}

impl Display for ScalarValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            // Debug keeps the sign of -0.0 and a trailing `.0` on whole numbers
            Self::F32(v) => write!(f, "{v:?}"),
            Self::F64(v) => write!(f, "{v:?}"),
            other => each_variant!(*other, v => write!(f, "{v}")),
        }
    }
}

fn strip_hex_prefix(input: &str) -> &str {
    input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input)
}

fn parse_integer(input: &str) -> anyhow::Result<i128> {
    let (negative, unsigned) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input.strip_prefix('+').unwrap_or(input)),
    };
    let lower = unsigned.to_ascii_lowercase();
    let (radix, digits) = if let Some(d) = lower.strip_prefix("0x") {
        (16, d)
    } else if let Some(d) = lower.strip_prefix("0o") {
        (8, d)
    } else if let Some(d) = lower.strip_prefix("0b") {
        (2, d)
    } else {
        (10, lower.as_str())
    };
    let digits = digits.replace('_', "");
    if digits.is_empty() {
        return Err(anyhow!("missing digits in `{input}`"));
    }
    reject_inner_sign(&digits, input)?;

    let magnitude = i128::from_str_radix(&digits, radix)
        .with_context(|| format!("invalid integer `{input}`"))?;
    if negative {
        magnitude
            .checked_neg()
            .ok_or_else(|| anyhow!("integer `{input}` is out of range"))
    } else {
        Ok(magnitude)
    }
}

/// `from_str_radix` accepts its own leading sign; only one sign, before any prefix, is allowed.
fn reject_inner_sign(digits: &str, input: &str) -> anyhow::Result<()> {
    if digits.starts_with(['+', '-']) {
        bail!("misplaced sign in `{input}`");
    }
    Ok(())
}
