use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

/// The logical kinds of scalar the codec converts.
///
/// There are no single-byte kinds; byte order has no meaning for them.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ScalarKind {
    U16,
    I16,
    U32,
    I32,
    U64,
    I64,
    F32,
    F64,
}

impl ScalarKind {
    /// Every kind, ordered by width and then unsigned/signed/float.
    pub const ALL: [Self; 8] = [
        Self::U16,
        Self::I16,
        Self::U32,
        Self::I32,
        Self::F32,
        Self::U64,
        Self::I64,
        Self::F64,
    ];

    /// Width of the kind in bits.
    #[inline]
    pub const fn width_bits(self) -> u32 {
        match self {
            Self::U16 | Self::I16 => 16,
            Self::U32 | Self::I32 | Self::F32 => 32,
            Self::U64 | Self::I64 | Self::F64 => 64,
        }
    }

    /// Width of the kind in bytes.
    #[inline]
    pub const fn width_bytes(self) -> usize {
        match self {
            Self::U16 | Self::I16 => 2,
            Self::U32 | Self::I32 | Self::F32 => 4,
            Self::U64 | Self::I64 | Self::F64 => 8,
        }
    }

    #[inline]
    pub const fn is_signed(self) -> bool {
        matches!(self, Self::I16 | Self::I32 | Self::I64)
    }

    #[inline]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::F32 | Self::F64)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::U16 => "u16",
            Self::I16 => "i16",
            Self::U32 => "u32",
            Self::I32 => "i32",
            Self::U64 => "u64",
            Self::I64 => "i64",
            Self::F32 => "f32",
            Self::F64 => "f64",
        }
    }
}

impl Display for ScalarKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseScalarKindError {
    #[error("Byte order is meaningless for single-byte kind `{0}`")]
    SingleByte(String),
    #[error("Unrecognized scalar kind `{0}`")]
    Unknown(String),
}

impl FromStr for ScalarKind {
    type Err = ParseScalarKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "u16" => Ok(Self::U16),
            "i16" | "s16" => Ok(Self::I16),
            "u32" => Ok(Self::U32),
            "i32" | "s32" => Ok(Self::I32),
            "u64" => Ok(Self::U64),
            "i64" | "s64" => Ok(Self::I64),
            "f32" => Ok(Self::F32),
            "f64" => Ok(Self::F64),
            "u8" | "i8" | "s8" => Err(ParseScalarKindError::SingleByte(s.to_string())),
            _ => Err(ParseScalarKindError::Unknown(s.to_string())),
        }
    }
}
