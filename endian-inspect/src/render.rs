//! Text and JSON rendering of scalar layouts.

use crate::value::ScalarValue;
use endian_codec::ByteOrder;
use serde_json::Value as JsonValue;

fn hex_bytes(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn hex_bits(value: &ScalarValue) -> String {
    format!(
        "{:#0width$x}",
        value.bits(),
        width = value.kind().width_bytes() * 2 + 2
    )
}

/// Lays out `label: value` rows with the values aligned.
fn table(rows: &[(String, String)]) -> String {
    let width = rows.iter().map(|(label, _)| label.len() + 1).max().unwrap_or(0);
    rows.iter()
        .map(|(label, value)| format!("{:<width$} {value}", format!("{label}:")))
        .collect::<Vec<_>>()
        .join("\n")
}

fn layout_rows(value: &ScalarValue) -> Vec<(String, String)> {
    vec![
        ("kind".to_string(), value.kind().to_string()),
        ("value".to_string(), value.to_string()),
        ("bits".to_string(), hex_bits(value)),
        ("native".to_string(), hex_bytes(&value.native_bytes())),
        ("le".to_string(), hex_bytes(&value.order_bytes(ByteOrder::Little))),
        ("be".to_string(), hex_bytes(&value.order_bytes(ByteOrder::Big))),
    ]
}

/// The value and its byte sequence in every order.
pub fn layout_text(value: &ScalarValue) -> String {
    table(&layout_rows(value))
}

pub fn layout_json(value: &ScalarValue) -> JsonValue {
    serde_json::json!({
        "kind": value.kind().name(),
        "value": value.to_string(),
        "bits": hex_bits(value),
        "native": value.native_bytes(),
        "le": value.order_bytes(ByteOrder::Little),
        "be": value.order_bytes(ByteOrder::Big),
    })
}

/// The result of the named `convert_to_*` and `read_*` operations for one order.
pub fn conversion_text(value: &ScalarValue, order: ByteOrder) -> String {
    let kind = value.kind();
    let converted = value.convert_to(order);
    let read = value.read_as(order);
    table(&[
        ("kind".to_string(), kind.to_string()),
        ("value".to_string(), value.to_string()),
        ("order".to_string(), order.to_string()),
        (
            format!("convert_to_{order}_{kind}"),
            format!("{converted} ({})", hex_bits(&converted)),
        ),
        (
            format!("read_{order}_{kind}"),
            format!("{read} ({})", hex_bits(&read)),
        ),
        ("wire bytes".to_string(), hex_bytes(&converted.native_bytes())),
    ])
}

pub fn conversion_json(value: &ScalarValue, order: ByteOrder) -> JsonValue {
    let converted = value.convert_to(order);
    let read = value.read_as(order);
    serde_json::json!({
        "kind": value.kind().name(),
        "value": value.to_string(),
        "order": order.to_string(),
        "converted": { "value": converted.to_string(), "bits": hex_bits(&converted) },
        "read": { "value": read.to_string(), "bits": hex_bits(&read) },
        "wire_bytes": converted.native_bytes(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use endian_codec::ScalarKind;

    #[test]
    fn layout_of_sequential_u32() {
        let value = ScalarValue::parse(ScalarKind::U32, "0x01020304").unwrap();
        if cfg!(target_endian = "little") {
            insta::assert_snapshot!(layout_text(&value), @r"
            kind:   u32
            value:  16909060
            bits:   0x01020304
            native: 04 03 02 01
            le:     04 03 02 01
            be:     01 02 03 04
            ");
        }
    }

    #[test]
    fn layout_of_quiet_nan() {
        let value = ScalarValue::from_bit_pattern(ScalarKind::F32, "7fc00000").unwrap();
        if cfg!(target_endian = "little") {
            insta::assert_snapshot!(layout_text(&value), @r"
            kind:   f32
            value:  NaN
            bits:   0x7fc00000
            native: 00 00 c0 7f
            le:     00 00 c0 7f
            be:     7f c0 00 00
            ");
        }
    }

    #[test]
    fn conversion_of_u16_to_big_endian() {
        let value = ScalarValue::parse(ScalarKind::U16, "0x8001").unwrap();
        if cfg!(target_endian = "little") {
            insta::assert_snapshot!(conversion_text(&value, ByteOrder::Big), @r"
            kind:              u16
            value:             32769
            order:             be
            convert_to_be_u16: 384 (0x0180)
            read_be_u16:       384 (0x0180)
            wire bytes:        80 01
            ");
        }
    }

    #[test]
    fn json_layout_is_host_independent_for_ordered_bytes() {
        let value = ScalarValue::parse(ScalarKind::U64, "0x0102030405060708").unwrap();
        let json = layout_json(&value);
        assert_eq!(json["kind"], "u64");
        assert_eq!(json["bits"], "0x0102030405060708");
        assert_eq!(json["be"], serde_json::json!([1, 2, 3, 4, 5, 6, 7, 8]));
        assert_eq!(json["le"], serde_json::json!([8, 7, 6, 5, 4, 3, 2, 1]));
    }

    #[test]
    fn json_conversion_reports_wire_bytes() {
        let value = ScalarValue::parse(ScalarKind::I16, "-2").unwrap();
        let json = conversion_json(&value, ByteOrder::Big);
        assert_eq!(json["order"], "be");
        assert_eq!(json["wire_bytes"], serde_json::json!([0xFF, 0xFE]));
        assert_eq!(json["converted"], json["read"]);
    }
}
