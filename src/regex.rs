//! Re-exports from either `regex` or `regex_lite`, depending on features.
//!
//! Every pattern in this crate sticks to the syntax both engines share
//! (ASCII classes, `(?i)`, `\b`), so switching to `lite` does not change
//! which fields are found.

#[cfg(feature = "lite")]
pub(crate) use regex_lite::{Captures, Regex};
#[cfg(all(feature = "regex", not(feature = "lite")))]
pub(crate) use regex::{Captures, Regex};

#[cfg(not(any(feature = "regex", feature = "lite")))]
compile_error!("bibabrv requires the \"regex\" or \"lite\" feature to be enabled");
