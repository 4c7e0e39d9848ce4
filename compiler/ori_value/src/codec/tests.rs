use super::*;
use crate::test_helpers::catch_fault;
use pretty_assertions::assert_eq;

#[test]
fn sized_int_big_endian_layout() {
    assert_eq!(sized_int(1, 32, true), vec![0, 0, 0, 1]);
    assert_eq!(sized_int(0x0102_0304, 32, true), vec![1, 2, 3, 4]);
    assert_eq!(sized_int(1, 64, true), vec![0, 0, 0, 0, 0, 0, 0, 1]);
}

#[test]
fn sized_int_little_endian_layout() {
    assert_eq!(sized_int(0x0102_0304, 32, false), vec![4, 3, 2, 1]);
    assert_eq!(sized_int(-1, 64, false), vec![0xFF; 8]);
    assert_eq!(sized_int(-2, 32, false), vec![0xFE, 0xFF, 0xFF, 0xFF]);
}

#[test]
fn sized_int_truncates_to_width() {
    // 0x1_0000_0005 keeps only its low 32 bits.
    assert_eq!(sized_int(0x1_0000_0005, 32, true), vec![0, 0, 0, 5]);
}

#[test]
fn sized_float_matches_ieee_bits() {
    assert_eq!(sized_float(1.0, 64, true), 1.0_f64.to_bits().to_be_bytes().to_vec());
    assert_eq!(sized_float(1.0, 32, false), 1.0_f32.to_bits().to_le_bytes().to_vec());
    assert_eq!(sized_float(-0.0, 32, true), vec![0x80, 0, 0, 0]);
}

#[test]
fn host_order_requests_write_native_bytes() {
    let value = 0x0A0B_0C0D_i64;
    assert_eq!(
        sized_int(value, 64, HOST_IS_BIG_ENDIAN),
        value.to_ne_bytes().to_vec()
    );
}

#[test]
fn unsupported_widths_are_fatal() {
    for bits in [0, 8, 16, 24, 48, 128] {
        let fault = catch_fault(|| sized_int(1, bits, true));
        assert_eq!(fault, RuntimeError::UnsupportedWidth { bits: u64::from(bits) });
        let fault = catch_fault(|| sized_float(1.0, bits, false));
        assert_eq!(fault, RuntimeError::UnsupportedWidth { bits: u64::from(bits) });
    }
}

#[test]
fn unsupported_width_message() {
    let error = try_sized_int(1, 16, true).err();
    assert_eq!(
        error.map(|e| e.to_string()),
        Some("sized values must be 32-bit or 64-bit, got size of 16 bits".to_string())
    );
}

#[test]
fn string_bits_is_raw_utf8() {
    assert_eq!(string_bits(""), Vec::<u8>::new());
    assert_eq!(string_bits("hi"), vec![b'h', b'i']);
    assert_eq!(string_bits("é"), vec![0xC3, 0xA9]);
}

#[test]
fn codepoint_bits_is_one_to_four_bytes() {
    assert_eq!(codepoint_bits('a'), vec![0x61]);
    assert_eq!(codepoint_bits('é'), vec![0xC3, 0xA9]);
    assert_eq!(codepoint_bits('€'), vec![0xE2, 0x82, 0xAC]);
    assert_eq!(codepoint_bits('😀'), vec![0xF0, 0x9F, 0x98, 0x80]);
}

#[test]
fn byte_helpers_invert_each_other() {
    for big in [true, false] {
        assert_eq!(get_u32(put_u32(0xDEAD_BEEF, big), big), 0xDEAD_BEEF);
        assert_eq!(
            get_u64(put_u64(0x0123_4567_89AB_CDEF, big), big),
            0x0123_4567_89AB_CDEF
        );
    }
    assert_eq!(put_u32(1, true), [0, 0, 0, 1]);
    assert_eq!(put_u32(1, false), [1, 0, 0, 0]);
}
