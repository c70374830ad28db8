#![no_main]
use libfuzzer_sys::fuzz_target;
use utf8modem::{
    UNICODE_ERROR, UTF8_ENCODE_BUF_LEN, code_point_count, decode, encode, is_valid_code_point,
    validate,
};

fn walk(data: &[u8]) {
    let mut pos = 0;
    let mut units = 0usize;
    let mut errors = 0usize;

    while pos < data.len() {
        let (cp, width) = decode(&data[pos..]);
        assert!((1..=4).contains(&width));
        assert!(width <= data.len() - pos);

        if cp == UNICODE_ERROR {
            assert_eq!(width, 1);
            errors += 1;
        } else {
            assert!(is_valid_code_point(cp));
            // Whatever decoded must re-encode to the same bytes.
            let mut buf = [0u8; UTF8_ENCODE_BUF_LEN];
            let n = encode(&mut buf, cp);
            assert_eq!(&buf[..n], &data[pos..pos + width]);
        }

        pos += width;
        units += 1;
    }
    assert_eq!(pos, data.len());

    // The stepwise walk, the one-shot validator, and the standard library
    // must agree on whether the buffer is well-formed.
    match core::str::from_utf8(data) {
        Ok(s) => {
            assert_eq!(errors, 0);
            assert!(validate(data).is_ok());
            assert_eq!(units, s.chars().count());
            assert_eq!(code_point_count(data), units);
        }
        Err(e) => {
            assert!(errors > 0);
            assert_eq!(validate(data).unwrap_err().valid_up_to, e.valid_up_to());
        }
    }
}

fuzz_target!(|data: &[u8]| walk(data));
