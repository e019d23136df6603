//! Terminal rendering of result views

use super::table::{cells, TableBuilder, TableStyle};
use super::OutputRenderer;
use crate::result::{RenderedContent, RenderedOutput, TableView};

/// Renders results as terminal text with comfy-table boxes
pub struct CliRenderer {
    /// Force ANSI colors on or off; `None` lets comfy-table detect a terminal
    pub color: Option<bool>,
}

impl CliRenderer {
    /// Create a new CLI renderer that detects color support
    pub fn new() -> Self {
        Self { color: None }
    }

    /// Create a CLI renderer without any ANSI styling
    pub fn plain() -> Self {
        Self { color: Some(false) }
    }

    /// Create a CLI renderer with explicit color behaviour
    pub fn with_color(mut self, enabled: bool) -> Self {
        self.color = Some(enabled);
        self
    }

    fn builder(&self, style: TableStyle) -> TableBuilder {
        let mut builder = TableBuilder::with_style(style);
        if let Some(enabled) = self.color {
            builder.force_color(enabled);
        }
        builder
    }

    fn table(&self, view: &TableView) -> String {
        let mut builder = self.builder(TableStyle::Records);
        builder.headers(view.headers.iter().cloned());
        for row in &view.rows {
            builder.row(row.iter().cloned());
        }

        let mut out = builder.build();
        if let Some(note) = &view.note {
            out.push('\n');
            out.push_str(note);
        }
        out
    }

    fn message(&self, cell: comfy_table::Cell) -> String {
        let mut builder = self.builder(TableStyle::Message);
        builder.line(cell);
        builder.build()
    }
}

impl Default for CliRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputRenderer for CliRenderer {
    fn render(&self, output: &RenderedOutput) -> String {
        let body = match &output.content {
            RenderedContent::Table(view) => self.table(view),
            RenderedContent::Text(text) => text.clone(),
            RenderedContent::Placeholder(message) => self.message(cells::muted(message.as_str())),
            RenderedContent::Failure(message) => self.message(cells::error(message.as_str())),
        };

        if output.status.is_empty() {
            body
        } else {
            format!("{}\n{}", output.status, body)
        }
    }
}
