//! Exception flag bitmask tests.

use pretty_assertions::assert_eq;
use rstest::rstest;
use sfp_exceptions::{FexFlags, UnknownFlagBits};

#[test]
fn flag_bit_layout() {
    assert_eq!(FexFlags::NV.bits(), 0b10000);
    assert_eq!(FexFlags::DZ.bits(), 0b01000);
    assert_eq!(FexFlags::OF.bits(), 0b00100);
    assert_eq!(FexFlags::UF.bits(), 0b00010);
    assert_eq!(FexFlags::NX.bits(), 0b00001);
    assert_eq!(FexFlags::NONE.bits(), 0);
    assert_eq!(FexFlags::ALL.bits(), 0b11111);
}

#[test]
fn bitor_combines_and_contains_queries() {
    let combined = FexFlags::DZ | FexFlags::NX;
    assert!(combined.contains(FexFlags::DZ));
    assert!(combined.contains(FexFlags::NX));
    assert!(!combined.contains(FexFlags::NV));
    assert!(!combined.is_empty());
    assert!(FexFlags::NONE.is_empty());
}

#[rstest]
#[case::nv(FexFlags::NV)]
#[case::dz(FexFlags::DZ)]
#[case::of(FexFlags::OF)]
#[case::uf(FexFlags::UF)]
#[case::nx(FexFlags::NX)]
fn strict_decoding_round_trips_each_category(#[case] flag: FexFlags) {
    assert_eq!(FexFlags::try_from_bits(u32::from(flag.bits())), Ok(flag));
}

#[test]
fn strict_decoding_rejects_unknown_bits() {
    assert_eq!(FexFlags::try_from_bits(1 << 5), Err(UnknownFlagBits(1 << 5)));
    // Only the offending bits are reported.
    assert_eq!(
        FexFlags::try_from_bits(0x140 | u32::from(FexFlags::DZ.bits())),
        Err(UnknownFlagBits(0x140))
    );
}

#[test]
fn truncating_decoding_drops_unknown_bits() {
    assert_eq!(
        FexFlags::from_bits_truncate(0xFFFF_FFE0 | u32::from(FexFlags::NV.bits())),
        FexFlags::NV
    );
    assert_eq!(FexFlags::from_bits_truncate(!0x1F), FexFlags::NONE);
}

#[test]
fn unknown_bits_error_formats_offending_bits() {
    assert_eq!(UnknownFlagBits(0x40).to_string(), "unknown exception flag bits: 0x40");
}
