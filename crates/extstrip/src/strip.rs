use alloc::{ffi::CString, string::String, vec::Vec};
use core::{ffi::CStr, num::NonZeroU8};

use bstr::ByteSlice;

use crate::StripError;

/// Byte offset of the leftmost occurrence of `pattern` in `text`.
///
/// Matching is exact and case-sensitive. An empty pattern matches at offset
/// `0`.
#[must_use]
pub fn find_pattern(text: &[u8], pattern: &[u8]) -> Option<usize> {
    text.find(pattern)
}

fn locate(text: &[u8], pattern: &[u8]) -> Result<usize, StripError> {
    if let Some(offset) = find_pattern(text, pattern) {
        tracing::trace!(offset, len = text.len(), "pattern found");
        Ok(offset)
    } else {
        tracing::debug!(pattern = %pattern.as_bstr(), len = text.len(), "pattern not found");
        Err(StripError::not_found(pattern))
    }
}

/// Copy of `text` up to, but not including, the first occurrence of
/// `pattern`.
///
/// ```rust
/// # use extstrip::strip_suffix;
/// assert_eq!(strip_suffix("file.txt.txt", ".txt").unwrap(), "file");
/// ```
///
/// # Errors
///
/// Returns [`StripError::PatternNotFound`] if `pattern` does not occur in
/// `text`.
pub fn strip_suffix(text: &str, pattern: &str) -> Result<String, StripError> {
    let offset = locate(text.as_bytes(), pattern.as_bytes())?;
    // A UTF-8 pattern can only match on a char boundary.
    Ok(String::from(&text[..offset]))
}

/// Byte-string variant of [`strip_suffix`]; the input need not be UTF-8.
///
/// # Errors
///
/// Returns [`StripError::PatternNotFound`] if `pattern` does not occur in
/// `text`.
pub fn strip_suffix_bytes(text: &[u8], pattern: &[u8]) -> Result<Vec<u8>, StripError> {
    let offset = locate(text, pattern)?;
    Ok(text[..offset].to_vec())
}

/// NUL-terminated variant of [`strip_suffix`].
///
/// The terminators of `text` and `pattern` take no part in the search, and
/// the returned `CString` carries its own.
///
/// # Errors
///
/// Returns [`StripError::PatternNotFound`] if `pattern` does not occur in
/// `text`.
pub fn strip_suffix_cstr(text: &CStr, pattern: &CStr) -> Result<CString, StripError> {
    let bytes = text.to_bytes();
    let offset = locate(bytes, pattern.to_bytes())?;
    // `to_bytes` excludes the terminator, so every byte is nonzero.
    let mut buf: Vec<NonZeroU8> = Vec::with_capacity(offset + 1);
    buf.extend(bytes[..offset].iter().copied().filter_map(NonZeroU8::new));
    Ok(CString::from(buf))
}
