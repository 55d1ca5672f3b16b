//! Truncate text at the first occurrence of a pattern.
//!
//! Every operation returns a freshly allocated buffer holding the prefix that
//! precedes the leftmost match, or [`StripError::PatternNotFound`] when the
//! pattern does not occur at all.
//!
//! ```rust
//! use extstrip::{StripError, strip_suffix};
//!
//! assert_eq!(strip_suffix("example.txt", ".txt").unwrap(), "example");
//! assert_eq!(
//!     strip_suffix("noext", ".txt"),
//!     Err(StripError::PatternNotFound {
//!         pattern: ".txt".into()
//!     })
//! );
//! ```

#![no_std]
#![forbid(unsafe_code)]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod strip;


pub use error::StripError;
pub use strip::{find_pattern, strip_suffix, strip_suffix_bytes, strip_suffix_cstr};
