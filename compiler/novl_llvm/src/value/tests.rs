use pretty_assertions::assert_eq;

use super::{escape_bytes, format_double, ValueData, ValueKind};
use crate::IrType;

#[test]
fn doubles() {
    assert_eq!(format_double(0.0), "0.0");
    assert_eq!(format_double(-3.0), "-3.0");
    assert_eq!(format_double(1.5), "0x3FF8000000000000");
    assert_eq!(format_double(0.1), "0x3FB999999999999A");
}

#[test]
fn escapes() {
    assert_eq!(escape_bytes(b"%d\n\0"), "%d\\0A\\00");
    assert_eq!(escape_bytes(b"say \"hi\""), "say \\22hi\\22");
    assert_eq!(escape_bytes(b"a\\b"), "a\\5Cb");
}

#[test]
fn operands() {
    let reg = ValueData::new(IrType::I32, ValueKind::Register("add".into()));
    assert_eq!(reg.to_string(), "%add");
    assert_eq!(reg.typed(), "i32 %add");
    assert!(!reg.is_constant());

    let s = ValueData::new(
        IrType::i8_ptr(),
        ValueKind::StringRef {
            global: ".str.0".into(),
            len: 3,
        },
    );
    assert_eq!(
        s.typed(),
        "i8* getelementptr inbounds ([3 x i8], [3 x i8]* @.str.0, i64 0, i64 0)"
    );
    assert!(s.is_constant());
}
