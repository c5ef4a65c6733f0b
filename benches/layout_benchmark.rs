//! Benchmarks for undocx layout performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks lay out synthetic documents of increasing size.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use undocx::layout::{segment, wrap_paragraph};
use undocx::model::{Document, Paragraph, RawCell, Table, TableRow};
use undocx::render::LayoutEngine;

const LATIN: &str = "The layout engine measures display width in columns and wraps \
                     text greedily at word boundaries. ";
const CJK: &str = "表格单元格内容按显示宽度重新排版，中文按字符换行。";

/// Creates a table with a vertical merge in the first column every few rows.
fn create_table(rows: usize, cols: usize) -> Table {
    let mut table = Table::new();
    for r in 0..rows {
        let mut cells = Vec::with_capacity(cols);
        cells.push(match r % 4 {
            0 => RawCell::text(format!("group {}", r / 4)).restart(),
            _ => RawCell::empty().continued(),
        });
        for c in 1..cols {
            let text = if c % 2 == 0 { CJK } else { &LATIN[..(r * 7 + c) % LATIN.len()] };
            cells.push(RawCell::text(text.trim()));
        }
        table.add_row(TableRow::new(cells));
    }
    table
}

/// Creates a document alternating headings, paragraphs and tables.
fn create_document(sections: usize) -> Document {
    let mut doc = Document::new();
    for i in 0..sections {
        doc.add_paragraph(Paragraph::heading(format!("Section {}", i), 1));
        doc.add_paragraph(Paragraph::with_text(format!("{}.1 Configure (cmd={})", i + 1, i)));
        doc.add_paragraph(Paragraph::with_text(LATIN.repeat(4)));
        doc.add_paragraph(Paragraph::with_text(CJK.repeat(3)));
        doc.add_table(create_table(12, 4));
    }
    doc
}

fn bench_wrapping(c: &mut Criterion) {
    let mut group = c.benchmark_group("wrap");
    let mixed = format!("{}{}", LATIN.repeat(10), CJK.repeat(10));

    group.bench_function("segment_mixed", |b| b.iter(|| segment(black_box(&mixed))));
    group.bench_function("paragraph_mixed", |b| {
        b.iter(|| wrap_paragraph(black_box(&mixed), 80, "    "))
    });

    group.finish();
}

fn bench_tables(c: &mut Criterion) {
    let mut group = c.benchmark_group("table");
    let engine = LayoutEngine::default();

    for rows in [10, 100, 500] {
        let table = create_table(rows, 5);
        group.bench_with_input(BenchmarkId::new("render", rows), &table, |b, table| {
            b.iter(|| engine.render_table(black_box(table)))
        });
    }

    group.finish();
}

fn bench_documents(c: &mut Criterion) {
    let mut group = c.benchmark_group("document");
    let engine = LayoutEngine::default();

    for sections in [1, 10, 50] {
        let doc = create_document(sections);
        group.bench_with_input(BenchmarkId::new("render", sections), &doc, |b, doc| {
            b.iter(|| engine.render(black_box(doc)))
        });
    }

    let docs: Vec<Document> = (0..16).map(|_| create_document(5)).collect();
    group.bench_function("batch_16", |b| b.iter(|| engine.render_batch(black_box(&docs))));

    group.finish();
}

criterion_group!(benches, bench_wrapping, bench_tables, bench_documents);
criterion_main!(benches);
