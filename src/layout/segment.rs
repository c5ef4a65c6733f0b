//! Splitting text into atomic wrap units.

use super::width::is_wide;

/// Split a line into wrap units.
///
/// A run of whitespace is one unit, a run of ASCII non-whitespace is one
/// unit, and every wide character is a unit of its own. Latin text
/// therefore breaks between words while CJK text breaks between any two
/// characters; a wide punctuation mark is also its own unit.
pub fn segment(text: &str) -> Vec<&str> {
    let mut units = Vec::new();
    let mut start: Option<(usize, UnitClass)> = None;

    for (idx, c) in text.char_indices() {
        let class = UnitClass::of(c);

        if let Some((begin, current)) = start {
            if current == class && class != UnitClass::Wide {
                continue;
            }
            units.push(&text[begin..idx]);
        }
        start = Some((idx, class));
    }

    if let Some((begin, _)) = start {
        units.push(&text[begin..]);
    }

    units
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UnitClass {
    Space,
    Word,
    Wide,
}

impl UnitClass {
    fn of(c: char) -> Self {
        if c.is_whitespace() {
            UnitClass::Space
        } else if is_wide(c) {
            UnitClass::Wide
        } else {
            UnitClass::Word
        }
    }
}
