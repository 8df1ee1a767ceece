//! 64-bit conversions.

endian_codec_fns! {
    u64, 8, "64-bit unsigned integer",
    read_le: read_le_u64,
    convert_to_le: convert_to_le_u64,
    read_be: read_be_u64,
    convert_to_be: convert_to_be_u64,
}

endian_codec_fns! {
    i64, 8, "64-bit signed integer",
    read_le: read_le_i64,
    convert_to_le: convert_to_le_i64,
    read_be: read_be_i64,
    convert_to_be: convert_to_be_i64,
}

endian_codec_fns! {
    f64, 8, "64-bit floating point number",
    read_le: read_le_f64,
    convert_to_le: convert_to_le_f64,
    read_be: read_be_f64,
    convert_to_be: convert_to_be_f64,
}

pub use self::{
    convert_to_be_i64 as convert_to_be_s64, convert_to_le_i64 as convert_to_le_s64,
    read_be_i64 as read_be_s64, read_le_i64 as read_le_s64,
};
