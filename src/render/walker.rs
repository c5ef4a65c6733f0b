//! Document walker: renders a provider's blocks in order.

use rayon::prelude::*;

use super::block::BlockFormatter;
use super::events::{NoopListener, RenderEvent, RenderListener};
use super::options::LayoutOptions;
use super::result::{LayoutStats, RenderResult};
use crate::error::Result;
use crate::layout::{render_table, TableGeometry};
use crate::model::{Block, DocumentProvider, Table};

/// Lays out whole documents into fixed-width text.
///
/// The engine holds only its options; every call owns its own grids and
/// output buffer, so one engine can render many documents concurrently.
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    options: LayoutOptions,
    geometry: TableGeometry,
}

impl LayoutEngine {
    /// Create an engine with the given options.
    pub fn new(options: LayoutOptions) -> Self {
        let geometry = options.table_geometry();
        Self { options, geometry }
    }

    /// Layout options in use.
    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    /// Render a document.
    pub fn render<P: DocumentProvider + ?Sized>(&self, provider: &P) -> Result<RenderResult> {
        self.render_with_listener(provider, &mut NoopListener)
    }

    /// Render a document, reporting each block to `listener`.
    ///
    /// Fails only when the options are invalid or the provider cannot open
    /// the block sequence. A provider failure partway through returns the
    /// output rendered so far with [`RenderResult::partial`] set.
    pub fn render_with_listener<P, L>(&self, provider: &P, listener: &mut L) -> Result<RenderResult>
    where
        P: DocumentProvider + ?Sized,
        L: RenderListener + ?Sized,
    {
        self.options.validate()?;
        let blocks = provider.blocks()?;

        let block_count = provider.block_count_hint();
        log::info!(
            "Rendering document ({} blocks)",
            block_count.map_or_else(|| "unknown".to_string(), |n| n.to_string())
        );
        listener.on_event(&RenderEvent::DocumentStart { block_count });

        let formatter = BlockFormatter::new(&self.options);
        let mut content = String::new();
        let mut stats = LayoutStats::new();
        let mut partial = None;
        let mut rendered = 0;

        for (index, item) in blocks.enumerate() {
            let block = match item {
                Ok(block) => block,
                Err(err) => {
                    log::warn!("Document provider failed at block {}: {}", index, err);
                    partial = Some(err.to_string());
                    break;
                }
            };

            let kind = block.kind();
            let output = match &block {
                Block::Paragraph(paragraph) => {
                    stats.add_paragraph();
                    let formatted = formatter.paragraph(paragraph);
                    if formatted.kind.is_heading() {
                        stats.add_heading();
                    }
                    formatted.content
                }
                Block::Table(table) => {
                    stats.add_table();
                    if table.has_merged_cells() {
                        stats.add_merged_table();
                    }
                    match render_table(table, &self.geometry) {
                        Ok(output) => output,
                        Err(err) => {
                            log::warn!("Table at block {} failed to render: {}", index, err);
                            stats.add_failed_table();
                            listener.on_event(&RenderEvent::TableFailed {
                                index,
                                reason: err.to_string(),
                            });
                            format!("{}\n", self.options.table_failure_placeholder)
                        }
                    }
                }
            };

            content.push_str(&output);
            rendered += 1;
            listener.on_event(&RenderEvent::Block {
                index,
                kind,
                output_len: output.len(),
            });
        }

        stats.count_lines(&content);
        log::info!(
            "Rendered {} blocks: {} paragraphs, {} headings, {} tables ({} failed)",
            rendered,
            stats.paragraph_count,
            stats.heading_count,
            stats.table_count,
            stats.failed_table_count
        );
        listener.on_event(&RenderEvent::DocumentEnd {
            rendered,
            partial: partial.clone(),
        });

        Ok(match partial {
            Some(reason) => RenderResult::partial(content, stats, reason),
            None => RenderResult::new(content, stats),
        })
    }

    /// Render independent documents in parallel, one result per input.
    pub fn render_batch<P>(&self, providers: &[P]) -> Vec<Result<RenderResult>>
    where
        P: DocumentProvider + Sync,
    {
        providers.par_iter().map(|p| self.render(p)).collect()
    }

    /// Render a single table, without the failure placeholder.
    pub fn render_table(&self, table: &Table) -> Result<String> {
        render_table(table, &self.geometry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::model::{BlockIter, Document, Paragraph, TableRow};
    use crate::render::EventLog;

    /// Yields its blocks, then a corruption error, then more blocks.
    struct BrokenProvider {
        before: Vec<Block>,
    }

    impl DocumentProvider for BrokenProvider {
        fn blocks(&self) -> Result<BlockIter<'_>> {
            let failing = std::iter::once(Err(Error::Corrupted("dangling rId9".into())));
            let after = std::iter::once(Ok(Block::Paragraph(Paragraph::with_text("never"))));
            Ok(Box::new(
                self.before.iter().cloned().map(Ok).chain(failing).chain(after),
            ))
        }
    }

    struct UnreadableProvider;

    impl DocumentProvider for UnreadableProvider {
        fn blocks(&self) -> Result<BlockIter<'_>> {
            Err(Error::Provider("not a document".into()))
        }
    }

    #[test]
    fn test_blocks_rendered_in_order() {
        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::with_text("first"));
        doc.add_table(Table::with_rows(vec![TableRow::from_strings(["a"])]));
        doc.add_paragraph(Paragraph::with_text("last"));

        let result = LayoutEngine::default().render(&doc).unwrap();
        let first = result.content.find("first").unwrap();
        let table = result.content.find("| a").unwrap();
        let last = result.content.find("last").unwrap();
        assert!(first < table && table < last);
        assert!(!result.is_partial());
        assert_eq!(result.stats.block_count, 3);
    }

    #[test]
    fn test_failed_table_uses_placeholder() {
        let mut doc = Document::new();
        doc.add_table(Table::with_rows(vec![TableRow::new(Vec::new())]));
        doc.add_paragraph(Paragraph::with_text("after"));

        let mut log = EventLog::new();
        let result = LayoutEngine::default()
            .render_with_listener(&doc, &mut log)
            .unwrap();

        assert!(result.content.starts_with("[table rendering failed]\n"));
        assert!(result.content.contains("after"));
        assert_eq!(result.stats.failed_table_count, 1);
        assert!(log
            .events
            .iter()
            .any(|e| matches!(e, RenderEvent::TableFailed { index: 0, .. })));
    }

    #[test]
    fn test_corruption_returns_partial() {
        let provider = BrokenProvider {
            before: vec![Block::Paragraph(Paragraph::with_text("kept"))],
        };

        let mut log = EventLog::new();
        let result = LayoutEngine::default()
            .render_with_listener(&provider, &mut log)
            .unwrap();

        assert_eq!(result.content, "    kept\n\n");
        assert!(result.partial.as_deref().unwrap().contains("dangling rId9"));
        assert_eq!(log.block_count(), 1);
        assert!(matches!(
            log.events.last(),
            Some(RenderEvent::DocumentEnd { rendered: 1, partial: Some(_) })
        ));
    }

    #[test]
    fn test_unreadable_provider_is_fatal() {
        let err = LayoutEngine::default().render(&UnreadableProvider).unwrap_err();
        assert!(matches!(err, Error::Provider(_)));
    }

    #[test]
    fn test_invalid_options_rejected_before_rendering() {
        let engine = LayoutEngine::new(LayoutOptions::new().with_text_width(0));
        let err = engine.render(&Document::new()).unwrap_err();
        assert!(matches!(err, Error::InvalidOptions(_)));
    }

    #[test]
    fn test_batch_matches_sequential() {
        let docs: Vec<Document> = (0..8)
            .map(|i| {
                let mut doc = Document::new();
                doc.add_paragraph(Paragraph::heading(format!("Part {}", i), 1));
                doc.add_paragraph(Paragraph::with_text("body ".repeat(i + 1)));
                doc
            })
            .collect();

        let engine = LayoutEngine::default();
        let batch = engine.render_batch(&docs);
        assert_eq!(batch.len(), docs.len());
        for (doc, result) in docs.iter().zip(batch) {
            assert_eq!(result.unwrap(), engine.render(doc).unwrap());
        }
    }
}
