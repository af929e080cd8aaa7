//! # Offset Translation
//!
//! The regex engine reports UTF-8 byte offsets; consumers usually index by
//! code point (or, from JavaScript/Java, by UTF-16 code unit). Characters
//! outside the Basic Multilingual Plane are one code point but two UTF-16
//! code units and four bytes, so every reported offset passes through an
//! [`OffsetTranslator`].

mod offset_translator;

#[doc(inline)]
pub use offset_translator::*;
