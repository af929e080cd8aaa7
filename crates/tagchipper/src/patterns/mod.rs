//! # Pattern Library
//!
//! Compiled entity patterns, built from the [`crate::chars`] tables.
//!
//! The `regex` engine has no look-around. Each [`EntityPattern`] matches a
//! *candidate*; the boundary conditions (what may precede or follow a
//! candidate) are checked by the [`crate::scanner`] on the surrounding
//! characters.
//!
//! * [`PatternLibrary`] - the compiled set; [`PatternLibrary::global`] is shared.
//! * [`EntityPattern`] / [`RawMatch`] - a pattern and its byte-offset match.
//! * [`tlds`] - the TLD lists.
//! * [`contains_rtl`] / [`rtl_spans`] - right-to-left script detection.

pub mod class_patterns;
mod entity_pattern;
mod pattern_library;
mod rtl;
pub mod tlds;

#[doc(inline)]
pub use entity_pattern::*;
#[doc(inline)]
pub use pattern_library::*;
#[doc(inline)]
pub use rtl::*;
