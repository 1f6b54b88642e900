//! 데이터 용량의 10진/2진 접두사 공존 회귀 테스트.
use pro_unit_converter::conversion;

fn storage() -> &'static pro_unit_converter::registry::Category {
    conversion::lookup_category("Data Storage").unwrap()
}

#[test]
fn decimal_and_binary_prefixes_stay_distinct() {
    let cat = storage();
    let kb = conversion::convert_linear(Some(1.0), "Kilobyte (KB) [10³ B]", "Byte (B)", cat)
        .unwrap();
    let kib = conversion::convert_linear(Some(1.0), "Kibibyte (KiB) [2¹⁰ B]", "Byte (B)", cat)
        .unwrap();
    assert_eq!(kb, 1000.0);
    assert_eq!(kib, 1024.0);
    assert_ne!(kb, kib);
}

#[test]
fn one_byte_is_eight_bits() {
    let bits = conversion::convert_linear(Some(1.0), "Byte (B)", "Bit (b)", storage()).unwrap();
    assert_eq!(bits, 8.0);
}

#[test]
fn binary_ladder_steps_by_1024() {
    let cat = storage();
    let gib = conversion::convert_linear(
        Some(1.0),
        "Tebibyte (TiB) [2⁴⁰ B]",
        "Gibibyte (GiB) [2³⁰ B]",
        cat,
    )
    .unwrap();
    assert_eq!(gib, 1024.0);
}

#[test]
fn decimal_ladder_steps_by_1000() {
    let cat = storage();
    let mb = conversion::convert_linear(
        Some(1.0),
        "Gigabyte (GB) [10⁹ B]",
        "Megabyte (MB) [10⁶ B]",
        cat,
    )
    .unwrap();
    assert_eq!(mb, 1000.0);
}
