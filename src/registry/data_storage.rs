use super::UnitValue;

/// 데이터 용량 단위 표. 기준은 바이트이다.
///
/// KB/MB 계열은 10진(10³) 접두사, KiB/MiB 계열은 2진(2¹⁰) 접두사로
/// 서로 다른 단위다. 두 계열을 하나로 합치지 않는다.
pub(super) const UNITS: &[(&str, UnitValue)] = &[
    ("Byte (B)", UnitValue::Factor(1.0)),
    ("Kilobyte (KB) [10³ B]", UnitValue::Factor(1000.0)),
    ("Megabyte (MB) [10⁶ B]", UnitValue::Factor(1_000_000.0)),
    ("Gigabyte (GB) [10⁹ B]", UnitValue::Factor(1_000_000_000.0)),
    ("Terabyte (TB) [10¹² B]", UnitValue::Factor(1_000_000_000_000.0)),
    ("Kibibyte (KiB) [2¹⁰ B]", UnitValue::Factor(1024.0)),
    ("Mebibyte (MiB) [2²⁰ B]", UnitValue::Factor(1_048_576.0)),
    ("Gibibyte (GiB) [2³⁰ B]", UnitValue::Factor(1_073_741_824.0)),
    ("Tebibyte (TiB) [2⁴⁰ B]", UnitValue::Factor(1_099_511_627_776.0)),
    // 1 Byte = 8 Bits
    ("Bit (b)", UnitValue::Factor(0.125)),
];
