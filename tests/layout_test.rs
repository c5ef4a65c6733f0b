//! End-to-end layout tests on in-memory documents.

use undocx::layout::merge::{pad_rows, resolve};
use undocx::layout::str_width;
use undocx::model::{Document, Paragraph, RawCell, Table, TableRow};
use undocx::render::{LayoutEngine, LayoutOptions};

fn render(doc: &Document) -> String {
    LayoutEngine::default().render(doc).unwrap().content
}

/// A two-column text line with 15-wide columns.
fn row2(a: &str, b: &str) -> String {
    format!("| {:<14}| {:<14}|", a, b)
}

const SEP2: &str = "+---------------+---------------+";

#[test]
fn test_plain_table() {
    let mut doc = Document::new();
    doc.add_table(Table::with_rows(vec![
        TableRow::from_strings(["h1", "h2"]),
        TableRow::from_strings(["a", "b"]),
        TableRow::from_strings(["c", "d"]),
    ]));

    let expected = [
        "```",
        SEP2,
        row2("h1", "h2").as_str(),
        SEP2,
        row2("a", "b").as_str(),
        SEP2,
        row2("c", "d").as_str(),
        SEP2,
        "```",
        "",
        "",
    ]
    .join("\n");
    assert_eq!(render(&doc), expected);
}

#[test]
fn test_vertical_merge_in_document() {
    let mut doc = Document::new();
    doc.add_paragraph(Paragraph::heading("Setup (cmd=3)", 1));
    doc.add_paragraph(Paragraph::with_text("Hello world"));
    doc.add_paragraph(Paragraph::new());
    doc.add_table(Table::with_rows(vec![
        TableRow::new(vec![RawCell::text("K").restart(), RawCell::text("v1")]),
        TableRow::new(vec![RawCell::empty().continued(), RawCell::text("v2")]),
        TableRow::from_strings(["z", "v3"]),
    ]));

    let expected = [
        "<a id=\"cmd-003\"></a>",
        "# Setup (cmd=3) [cmd=003]",
        "",
        "    Hello world",
        "",
        "",
        "```",
        SEP2,
        row2("K", "v1").as_str(),
        row2("", "v2").as_str(),
        SEP2,
        row2("z", "v3").as_str(),
        SEP2,
        "```",
        "",
        "",
    ]
    .join("\n");
    assert_eq!(render(&doc), expected);
}

#[test]
fn test_new_merge_beside_absorbed_cell_keeps_border() {
    let mut doc = Document::new();
    doc.add_table(Table::with_rows(vec![
        TableRow::new(vec![RawCell::text("X").restart(), RawCell::text("a")]),
        TableRow::new(vec![RawCell::empty().continued(), RawCell::text("Y").restart()]),
        TableRow::new(vec![RawCell::text("Z"), RawCell::empty().continued()]),
    ]));

    let expected = [
        "```",
        SEP2,
        row2("X", "a").as_str(),
        SEP2,
        row2("", "Y").as_str(),
        row2("Z", "").as_str(),
        SEP2,
        "```",
        "",
        "",
    ]
    .join("\n");
    assert_eq!(render(&doc), expected);
}

#[test]
fn test_merge_origin_taller_than_its_row() {
    let mut doc = Document::new();
    doc.add_table(Table::with_rows(vec![
        TableRow::new(vec![RawCell::text("one\ntwo\nthree").restart(), RawCell::text("a")]),
        TableRow::new(vec![RawCell::empty().continued(), RawCell::text("b")]),
    ]));

    let expected = [
        "```",
        SEP2,
        row2("one", "a").as_str(),
        row2("two", "").as_str(),
        row2("three", "").as_str(),
        row2("", "b").as_str(),
        SEP2,
        "```",
        "",
        "",
    ]
    .join("\n");
    assert_eq!(render(&doc), expected);
}

#[test]
fn test_block_spanning_both_directions() {
    let table = Table::with_rows(vec![
        TableRow::from_compact(vec![
            RawCell::text("A").restart().grid_span(2),
            RawCell::text("x"),
        ]),
        TableRow::from_compact(vec![
            RawCell::empty().continued().grid_span(2),
            RawCell::text("y"),
        ]),
    ]);

    let text = LayoutEngine::default().render_table(&table).unwrap();
    let lines: Vec<&str> = text.trim_end().lines().collect();
    let sep = "+---------------+---------------+---------------+";
    let first = format!("| {:<30}| {:<14}|", "A", "x");
    let second = format!("| {:<30}| {:<14}|", "", "y");
    assert_eq!(lines, vec!["```", sep, first.as_str(), second.as_str(), sep, "```"]);
}

#[test]
fn test_merge_scenario_spans() {
    let table = Table::with_rows(vec![
        TableRow::new(vec![RawCell::text("X").restart()]),
        TableRow::new(vec![RawCell::empty().continued()]),
    ]);
    let resolved = resolve(&pad_rows(&table));
    assert_eq!(resolved[0][0].vertical_span, 2);
    assert_eq!(resolved[1][0].vertical_span, 0);
    assert!(resolved[1][0].lines.is_empty());

    let text = LayoutEngine::default().render_table(&table).unwrap();
    let borders = text.lines().filter(|l| l.starts_with('+')).count();
    assert_eq!(borders, 2);
}

#[test]
fn test_contradictory_merge_is_standalone() {
    let table = Table::with_rows(vec![
        TableRow::from_strings(["top"]),
        TableRow::new(vec![RawCell::text("orphan").continued()]),
    ]);
    let resolved = resolve(&pad_rows(&table));
    assert_eq!(resolved[1][0].vertical_span, 1);

    let text = LayoutEngine::default().render_table(&table).unwrap();
    assert!(text.contains("| orphan        |"));
}

#[test]
fn test_long_paragraph_wrapping() {
    let text = "x".repeat(9) + &" abcdefghi".repeat(9);
    assert_eq!(text.len(), 99);

    let mut doc = Document::new();
    doc.add_paragraph(Paragraph::with_text(text[..90].to_string()));
    let output = render(&doc);

    let lines: Vec<&str> = output.trim_end_matches('\n').lines().collect();
    assert!(lines.len() >= 2);
    for line in lines {
        assert!(line.starts_with("    "));
        assert!(str_width(&line[4..]) <= 76, "line too wide: {:?}", line);
    }
}

#[test]
fn test_cjk_paragraph_wraps_by_character() {
    let options = LayoutOptions::new().with_text_width(12).with_indent("");
    let mut doc = Document::new();
    doc.add_paragraph(Paragraph::with_text("文本排版引擎测试"));

    let output = LayoutEngine::new(options).render(&doc).unwrap().content;
    assert_eq!(output, "文本排版引擎\n测试\n\n");
}

#[test]
fn test_mixed_width_table_stays_aligned() {
    let mut doc = Document::new();
    doc.add_table(Table::with_rows(vec![
        TableRow::from_strings(["名称", "说明"]),
        TableRow::from_strings(["width", "中英 mixed 文本"]),
        TableRow::from_strings(["长", "这是一段会超过第一档宽度的较长中文说明文字，需要换行显示"]),
    ]));

    let output = render(&doc);
    let grid: Vec<&str> = output
        .lines()
        .filter(|l| l.starts_with('+') || l.starts_with('|'))
        .collect();
    let width = str_width(grid[0]);
    for line in &grid {
        assert_eq!(str_width(line), width, "misaligned: {:?}", line);
    }
}

#[test]
fn test_custom_tiers() {
    let options = LayoutOptions::new()
        .with_base_column_width(10)
        .with_tier_multipliers(2, 4);
    let long = "b".repeat(25);
    let table = Table::with_rows(vec![TableRow::from_strings(["a", long.as_str()])]);

    let text = LayoutEngine::new(options).render_table(&table).unwrap();
    let border = text.lines().nth(1).unwrap();
    assert_eq!(border, format!("+{}+{}+", "-".repeat(10), "-".repeat(40)));
}
