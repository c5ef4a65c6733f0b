//! Display width of characters and strings.
//!
//! Every code point above 127 counts as two columns, everything else as one.
//! This approximates full-width CJK glyphs well enough for the documents the
//! engine targets, but it is deliberately crude:
//!
//! - accented Latin, Cyrillic, Greek and other narrow non-ASCII letters are
//!   measured as two columns;
//! - combining marks and zero-width characters are measured as two columns
//!   rather than zero;
//! - there is no locale or terminal sensitivity.
//!
//! All width decisions in the crate go through this module, so the
//! rendering stays self-consistent even where it disagrees with a terminal.

/// Highest code point measured as a single column.
pub const SINGLE_WIDTH_BOUNDARY: u32 = 127;

/// Display width of one character: 1 or 2.
#[inline]
pub fn char_width(c: char) -> u32 {
    if is_wide(c) {
        2
    } else {
        1
    }
}

/// Display width of a string.
pub fn str_width(s: &str) -> u32 {
    s.chars().map(char_width).sum()
}

/// Check if a character is measured as double width.
#[inline]
pub fn is_wide(c: char) -> bool {
    c as u32 > SINGLE_WIDTH_BOUNDARY
}
