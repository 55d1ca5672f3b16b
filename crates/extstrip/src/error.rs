use alloc::string::String;

use bstr::ByteSlice;
use thiserror::Error;

/// Failure of a stripping operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StripError {
    /// The pattern does not occur anywhere in the input.
    #[error("pattern {pattern:?} not found in input")]
    PatternNotFound {
        /// The missing pattern, decoded lossily as UTF-8.
        pattern: String,
    },
}

impl StripError {
    pub(crate) fn not_found(pattern: &[u8]) -> Self {
        Self::PatternNotFound {
            pattern: pattern.to_str_lossy().into_owned(),
        }
    }
}
