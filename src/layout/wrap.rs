//! Greedy line wrapping by display width.

use super::segment::segment;
use super::width::str_width;

/// Pack units into lines no wider than `available`.
///
/// Units are accumulated while the line still fits. A unit that is wider
/// than `available` on its own is placed alone on a line and never split.
pub fn wrap_units(units: &[&str], available: u32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for unit in units {
        let unit_width = str_width(unit);
        if current_width + unit_width <= available {
            current.push_str(unit);
            current_width += unit_width;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        current.push_str(unit);
        current_width = unit_width;
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

/// Wrap flowed paragraph text within `max_width`, prefixing every line
/// with `indent`.
///
/// The indent's own width is taken out of the budget. Each wrapped line is
/// trimmed before the indent is applied; soft line breaks in the text are
/// honoured and each segment between them is wrapped on its own. A blank
/// segment becomes an empty line without indent.
pub fn wrap_paragraph(text: &str, max_width: u32, indent: &str) -> Vec<String> {
    let available = max_width.saturating_sub(str_width(indent));
    let mut lines = Vec::new();

    for segment_text in text.split('\n') {
        if segment_text.trim().is_empty() {
            lines.push(String::new());
            continue;
        }
        lines.extend(
            wrap_units(&segment(segment_text), available)
                .into_iter()
                .map(|line| format!("{}{}", indent, line.trim())),
        );
    }

    lines
}

/// Wrap cell text for a cell that is `total_width` columns wide.
///
/// The text is split on newlines first; an empty sub-line stays an empty
/// output line. Empty text yields a single empty line.
pub fn wrap_cell(text: &str, total_width: u32, cell_padding: u32) -> Vec<String> {
    if text.is_empty() {
        return vec![String::new()];
    }

    let available = total_width.saturating_sub(cell_padding);
    let mut lines = Vec::new();

    for sub_line in text.split('\n') {
        if sub_line.is_empty() {
            lines.push(String::new());
            continue;
        }
        lines.extend(wrap_units(&segment(sub_line), available));
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Normalize cell text: trim every line and collapse runs of empty lines
/// into a single empty line.
pub fn clean_cell_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut lines: Vec<&str> = Vec::new();
    let mut prev_empty = false;

    for line in text.split('\n').map(str::trim) {
        let is_empty = line.is_empty();
        if is_empty && prev_empty {
            continue;
        }
        lines.push(line);
        prev_empty = is_empty;
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_units_greedy() {
        let units = segment("the quick brown fox");
        assert_eq!(wrap_units(&units, 10), vec!["the quick ", "brown fox"]);
    }

    #[test]
    fn test_wrap_units_oversized_unit_alone() {
        let units = segment("a supercalifragilistic b");
        let lines = wrap_units(&units, 6);
        assert_eq!(lines, vec!["a ", "supercalifragilistic", " b"]);
    }

    #[test]
    fn test_wrap_units_never_exceeds_budget() {
        let text = "Layout 排版 engines measure 宽度 in columns, not in bytes or chars.";
        let units = segment(text);
        for available in 4..30 {
            for line in wrap_units(&units, available) {
                let width = str_width(&line);
                let single_unit = segment(&line).len() == 1;
                assert!(
                    width <= available || single_unit,
                    "line {:?} is {} wide for budget {}",
                    line,
                    width,
                    available
                );
            }
        }
    }

    #[test]
    fn test_wrap_cjk_by_character() {
        let units = segment("中文排版测试");
        assert_eq!(wrap_units(&units, 5), vec!["中文", "排版", "测试"]);
    }

    #[test]
    fn test_wrap_paragraph_indent_and_trim() {
        let lines = wrap_paragraph("alpha beta gamma delta", 14, "    ");
        assert_eq!(lines, vec!["    alpha beta", "    gamma", "    delta"]);
    }

    #[test]
    fn test_wrap_paragraph_ninety_chars() {
        let text = "word ".repeat(18);
        let text = text.trim();
        assert_eq!(text.len(), 89);
        let text = format!("{}s", text);
        assert_eq!(text.len(), 90);

        let lines = wrap_paragraph(&text, 80, "    ");
        assert!(lines.len() >= 2);
        for line in &lines {
            assert!(line.starts_with("    "));
            assert!(str_width(&line[4..]) <= 76);
        }
    }

    #[test]
    fn test_wrap_paragraph_soft_breaks() {
        let lines = wrap_paragraph("first\nsecond", 80, "  ");
        assert_eq!(lines, vec!["  first", "  second"]);
    }

    #[test]
    fn test_wrap_paragraph_keeps_blank_soft_break_lines() {
        let lines = wrap_paragraph("a\n\nb", 80, "    ");
        assert_eq!(lines, vec!["    a", "", "    b"]);

        let lines = wrap_paragraph("a\n \t\nb", 80, "    ");
        assert_eq!(lines, vec!["    a", "", "    b"]);
    }

    #[test]
    fn test_wrap_cell_lines() {
        assert_eq!(wrap_cell("", 15, 2), vec![""]);
        assert_eq!(wrap_cell("one\n\ntwo", 15, 2), vec!["one", "", "two"]);
        assert_eq!(
            wrap_cell("alpha beta gamma", 10, 2),
            vec!["alpha ", "beta ", "gamma"]
        );
    }

    #[test]
    fn test_clean_cell_text() {
        assert_eq!(clean_cell_text(""), "");
        assert_eq!(clean_cell_text("  a  \n b "), "a\nb");
        assert_eq!(clean_cell_text("a\n\n\n\nb"), "a\n\nb");
        assert_eq!(clean_cell_text(" \n \nx"), "\nx");
    }
}
