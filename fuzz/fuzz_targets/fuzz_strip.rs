#![no_main]
use std::ffi::CString;

use arbitrary::{Arbitrary, Unstructured};
use extstrip::{StripError, find_pattern, strip_suffix, strip_suffix_bytes, strip_suffix_cstr};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Case<'a> {
    text: &'a [u8],
    pattern: &'a [u8],
}

fn check(data: &[u8]) {
    let Ok(case) = Case::arbitrary_take_rest(Unstructured::new(data)) else {
        return;
    };

    match (find_pattern(case.text, case.pattern), strip_suffix_bytes(case.text, case.pattern)) {
        (Some(k), Ok(prefix)) => {
            assert_eq!(prefix, &case.text[..k]);
            assert!(case.text[k..].starts_with(case.pattern));
        }
        (None, Err(StripError::PatternNotFound { .. })) => {}
        (found, result) => panic!("find_pattern {found:?} disagrees with {result:?}"),
    }

    // The text rendition must agree whenever both sides are UTF-8.
    if let (Ok(text), Ok(pattern)) = (std::str::from_utf8(case.text), std::str::from_utf8(case.pattern)) {
        let as_str = strip_suffix(text, pattern).map(String::into_bytes);
        assert_eq!(as_str, strip_suffix_bytes(case.text, case.pattern));

        // ...and so must the NUL-terminated one, when neither holds a NUL.
        if let (Ok(c_text), Ok(c_pattern)) = (CString::new(text), CString::new(pattern)) {
            let as_cstr = strip_suffix_cstr(&c_text, &c_pattern).map(CString::into_bytes);
            assert_eq!(as_str, as_cstr);
        }
    }
}

fuzz_target!(|data: &[u8]| check(data));
