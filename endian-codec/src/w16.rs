//! 16-bit conversions.

endian_codec_fns! {
    u16, 2, "16-bit unsigned integer",
    read_le: read_le_u16,
    convert_to_le: convert_to_le_u16,
    read_be: read_be_u16,
    convert_to_be: convert_to_be_u16,
}

endian_codec_fns! {
    i16, 2, "16-bit signed integer",
    read_le: read_le_i16,
    convert_to_le: convert_to_le_i16,
    read_be: read_be_i16,
    convert_to_be: convert_to_be_i16,
}

pub use self::{
    convert_to_be_i16 as convert_to_be_s16, convert_to_le_i16 as convert_to_le_s16,
    read_be_i16 as read_be_s16, read_le_i16 as read_le_s16,
};

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::{prop_assert_eq, proptest};

    #[test]
    fn pinned_byte_sequences() {
        assert_eq!(convert_to_le_u16(0x0102).to_ne_bytes(), [0x02, 0x01]);
        assert_eq!(convert_to_be_u16(0x0102).to_ne_bytes(), [0x01, 0x02]);
        assert_eq!(read_be_u16(u16::from_ne_bytes([0x01, 0x02])), 0x0102);
        assert_eq!(read_le_u16(u16::from_ne_bytes([0x01, 0x02])), 0x0201);
    }

    #[test]
    fn signed_and_unsigned_share_bytes() {
        let signed = i16::from_ne_bytes(0x8001u16.to_ne_bytes());
        assert_eq!(convert_to_le_u16(0x8001).to_ne_bytes(), [0x01, 0x80]);
        assert_eq!(convert_to_le_i16(signed).to_ne_bytes(), [0x01, 0x80]);
        assert_eq!(convert_to_be_i16(signed).to_ne_bytes(), [0x80, 0x01]);
    }

    #[test]
    fn signed_read_keeps_sign_bit() {
        assert_eq!(read_be_i16(i16::from_ne_bytes([0xFF, 0xFE])), -2);
        assert_eq!(read_le_i16(i16::from_ne_bytes([0xFE, 0xFF])), -2);
        assert_eq!(read_be_i16(i16::from_ne_bytes([0x80, 0x00])), i16::MIN);
    }

    #[test]
    fn boundaries_round_trip() {
        for v in [0, 1, u16::MAX, 0x00FF, 0xFF00] {
            assert_eq!(read_le_u16(convert_to_le_u16(v)), v);
            assert_eq!(read_be_u16(convert_to_be_u16(v)), v);
        }
        for v in [0, -1, i16::MIN, i16::MAX] {
            assert_eq!(read_le_s16(convert_to_le_s16(v)), v);
            assert_eq!(read_be_s16(convert_to_be_s16(v)), v);
        }
    }

    #[test]
    fn usable_in_const_context() {
        const WIRE: u16 = convert_to_be_u16(0xABCD);
        assert_eq!(WIRE.to_ne_bytes(), [0xAB, 0xCD]);
    }

    proptest! {
        #[test]
        fn prop_involution_u16(v: u16) {
            prop_assert_eq!(convert_to_le_u16(convert_to_le_u16(v)), v);
            prop_assert_eq!(convert_to_be_u16(convert_to_be_u16(v)), v);
        }

        #[test]
        fn prop_involution_i16(v: i16) {
            prop_assert_eq!(read_le_i16(read_le_i16(v)), v);
            prop_assert_eq!(read_be_i16(read_be_i16(v)), v);
        }

        #[test]
        fn prop_matches_std(v: u16) {
            prop_assert_eq!(convert_to_le_u16(v).to_ne_bytes(), v.to_le_bytes());
            prop_assert_eq!(convert_to_be_u16(v).to_ne_bytes(), v.to_be_bytes());
            prop_assert_eq!(read_be_u16(v), u16::from_be(v));
        }

        #[test]
        fn prop_read_and_convert_agree(v: i16) {
            prop_assert_eq!(read_le_i16(v), convert_to_le_i16(v));
            prop_assert_eq!(read_be_i16(v), convert_to_be_i16(v));
        }

        #[test]
        fn prop_signed_matches_unsigned(v: u16) {
            let s = i16::from_ne_bytes(v.to_ne_bytes());
            prop_assert_eq!(convert_to_le_i16(s).to_ne_bytes(), convert_to_le_u16(v).to_ne_bytes());
            prop_assert_eq!(convert_to_be_i16(s).to_ne_bytes(), convert_to_be_u16(v).to_ne_bytes());
        }
    }
}
