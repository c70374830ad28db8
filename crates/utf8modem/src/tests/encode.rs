use rstest::rstest;

use crate::{UTF8_ENCODE_BUF_LEN, UTF8_REPLACEMENT_CHAR, encode, encoded_len};

#[rstest]
#[case::ascii(0x41, &[0x41])]
#[case::latin_small_e_acute(0xE9, &[0xC3, 0xA9])]
#[case::euro_sign(0x20AC, &[0xE2, 0x82, 0xAC])]
#[case::grinning_face(0x1F600, &[0xF0, 0x9F, 0x98, 0x80])]
#[case::nul(0x0, &[0x00])]
#[case::max_code_point(0x10_FFFF, &[0xF4, 0x8F, 0xBF, 0xBF])]
fn encode_canonical(#[case] cp: u32, #[case] expected: &[u8]) {
    let mut buf = [0u8; UTF8_ENCODE_BUF_LEN];
    let n = encode(&mut buf, cp);
    assert_eq!(&buf[..n], expected);
    assert_eq!(encoded_len(cp), n);
}

#[rstest]
#[case::surrogate_lo(0xD800)]
#[case::surrogate_mid(0xDB7F)]
#[case::surrogate_hi(0xDFFF)]
#[case::past_max(0x11_0000)]
#[case::error_sentinel(u32::MAX)]
fn encode_invalid_writes_replacement(#[case] cp: u32) {
    let mut buf = [0u8; UTF8_ENCODE_BUF_LEN];
    let n = encode(&mut buf, cp);
    assert_eq!(&buf[..n], &UTF8_REPLACEMENT_CHAR);
    assert_eq!(encoded_len(cp), 3);
}

#[rstest]
#[case(0x7F, 1)]
#[case(0x80, 2)]
#[case(0x7FF, 2)]
#[case(0x800, 3)]
#[case(0xD7FF, 3)]
#[case(0xE000, 3)]
#[case(0xFFFF, 3)]
#[case(0x1_0000, 4)]
#[case(0x10_FFFF, 4)]
fn encoded_len_thresholds(#[case] cp: u32, #[case] len: usize) {
    let mut buf = [0u8; UTF8_ENCODE_BUF_LEN];
    assert_eq!(encoded_len(cp), len);
    assert_eq!(encode(&mut buf, cp), len);
}

#[test]
fn encode_never_touches_the_tail() {
    let mut buf = [0xAAu8; UTF8_ENCODE_BUF_LEN];
    let n = encode(&mut buf, 0x20AC);
    assert_eq!(n, 3);
    assert_eq!(&buf[n..], &[0xAA, 0xAA, 0xAA]);
}

#[test]
fn encode_agrees_with_char_encode_utf8() {
    for c in ['A', 'é', '€', '😀', '\u{D7FF}', '\u{E000}', '\u{10FFFF}'] {
        let mut ours = [0u8; UTF8_ENCODE_BUF_LEN];
        let n = encode(&mut ours, c as u32);
        let mut std_buf = [0u8; 4];
        assert_eq!(&ours[..n], c.encode_utf8(&mut std_buf).as_bytes());
    }
}

#[test]
#[should_panic(expected = "encode destination shorter than UTF8_ENCODE_BUF_LEN")]
fn encode_rejects_short_destination() {
    // Four bytes would fit the sequence, but the contract asks for six.
    let mut buf = [0u8; 4];
    let _ = encode(&mut buf, 0x41);
}
