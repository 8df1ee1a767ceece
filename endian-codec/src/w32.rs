//! 32-bit conversions.

endian_codec_fns! {
    u32, 4, "32-bit unsigned integer",
    read_le: read_le_u32,
    convert_to_le: convert_to_le_u32,
    read_be: read_be_u32,
    convert_to_be: convert_to_be_u32,
}

endian_codec_fns! {
    i32, 4, "32-bit signed integer",
    read_le: read_le_i32,
    convert_to_le: convert_to_le_i32,
    read_be: read_be_i32,
    convert_to_be: convert_to_be_i32,
}

endian_codec_fns! {
    f32, 4, "32-bit floating point number",
    read_le: read_le_f32,
    convert_to_le: convert_to_le_f32,
    read_be: read_be_f32,
    convert_to_be: convert_to_be_f32,
}

pub use self::{
    convert_to_be_i32 as convert_to_be_s32, convert_to_le_i32 as convert_to_le_s32,
    read_be_i32 as read_be_s32, read_le_i32 as read_le_s32,
};
