//! Heading normalization and anchor derivation.
//!
//! Headings that carry a numeric command tag such as `(cmd=7)` get a stable
//! `cmd-007` anchor; every other heading is anchored by a short hash of its
//! normalized text. Either way the anchor depends only on the text, never on
//! the heading's position in the document.

use md5::{Digest, Md5};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Hex digits of the text hash kept in a hash anchor.
const HASH_ANCHOR_LEN: usize = 8;

/// Minimum digits of a tag anchor number.
const TAG_DIGITS: usize = 3;

fn command_word() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)\bcmd(\s*=)")
            .unwrap_or_else(|e| panic!("invalid command word pattern: {}", e))
    })
}

fn command_tag() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"cmd\s*=\s*(\d+)")
            .unwrap_or_else(|e| panic!("invalid command tag pattern: {}", e))
    })
}

fn pseudo_heading() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\d+(?:\.\d+)+(?:\s.*?)?\(\s*cmd\s*=\s*\d+\s*\)")
            .unwrap_or_else(|e| panic!("invalid pseudo-heading pattern: {}", e))
    })
}

/// Stable identifier placed before a heading.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Anchor {
    /// Zero-padded number of an embedded command tag
    Tag(String),
    /// Leading hex digits of the MD5 hash of the normalized text
    Hash(String),
}

impl Anchor {
    /// Anchor identifier, e.g. `cmd-007` or `sec-1a2b3c4d`.
    pub fn id(&self) -> String {
        match self {
            Anchor::Tag(number) => format!("cmd-{}", number),
            Anchor::Hash(digest) => format!("sec-{}", digest),
        }
    }

    /// Anchor marker line, without trailing newline.
    pub fn marker(&self) -> String {
        format!("<a id=\"{}\"></a>", self.id())
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id())
    }
}

/// A heading ready to be emitted: final text plus its anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchoredHeading {
    /// Normalized text, with the canonical tag appended when missing
    pub text: String,
    /// Anchor derived from the normalized text
    pub anchor: Anchor,
}

/// Trim the text, turn full-width parentheses into ASCII ones and lowercase
/// the keyword of every command tag.
pub fn normalize_heading(text: &str) -> String {
    let text = text.trim().replace('（', "(").replace('）', ")");
    command_word().replace_all(&text, "cmd$1").into_owned()
}

/// Zero-padded digits of the first command tag in normalized text.
pub fn command_number(normalized: &str) -> Option<String> {
    let digits = command_tag().captures(normalized)?.get(1)?.as_str();
    let significant = digits.trim_start_matches('0');
    let significant = if significant.is_empty() { "0" } else { significant };
    Some(format!("{:0>width$}", significant, width = TAG_DIGITS))
}

/// Derive the anchor of normalized heading text.
pub fn derive_anchor(normalized: &str) -> Anchor {
    match command_number(normalized) {
        Some(number) => Anchor::Tag(number),
        None => Anchor::Hash(short_hash(normalized)),
    }
}

/// Normalize heading text and attach its anchor.
///
/// Returns `None` for text that is empty after trimming.
pub fn anchor_heading(text: &str) -> Option<AnchoredHeading> {
    let mut normalized = normalize_heading(text);
    if normalized.is_empty() {
        return None;
    }

    let anchor = derive_anchor(&normalized);
    if let Anchor::Tag(number) = &anchor {
        let canonical = format!("[cmd={}]", number);
        if !normalized.contains(&canonical) {
            normalized.push(' ');
            normalized.push_str(&canonical);
        }
    }

    Some(AnchoredHeading {
        text: normalized,
        anchor,
    })
}

/// Check if paragraph text is an outline-numbered heading with a command
/// tag, such as `3.2 Setup (cmd=007)`.
pub fn is_pseudo_heading(text: &str) -> bool {
    pseudo_heading().is_match(&normalize_heading(text))
}

fn short_hash(text: &str) -> String {
    let digest = Md5::digest(text.as_bytes());
    let hex = format!("{:x}", digest);
    hex[..HASH_ANCHOR_LEN].to_string()
}
