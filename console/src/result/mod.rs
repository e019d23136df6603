//! Generic result rendering
//!
//! Turns an arbitrary JSON payload from the connector service into a
//! structured [`RenderedOutput`]: a table, a preformatted text block, or an
//! empty-state placeholder. Presentation layers in [`crate::renderers`]
//! convert that value into terminal text or HTML.

pub mod cell;
pub mod output;
pub mod shape;
pub mod slot;

pub use cell::{cell_text, pretty_json};
pub use output::{RenderedContent, RenderedOutput, TableView};
pub use shape::{ResultShape, AGGREGATED_TYPE};
pub use slot::AnalysisSlot;

use crate::types::Metadata;
use serde_json::Value;

/// Status line shown next to an analysis result
pub const ANALYSIS_STATUS: &str = "Hugging Face analysis";

/// Placeholder shown when a request returns nothing
pub const NO_DATA_MESSAGE: &str = "No data returned.";

/// Maximum number of body rows in a record table
pub const MAX_TABLE_ROWS: usize = 20;

/// How a payload should be interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Payload came from the analyze endpoint
    Analysis,
    /// Payload came from a data fetch
    Tabular,
}

/// Render a payload.
///
/// Only an analysis text touches `slot`; every other branch is a pure
/// function of its arguments. Never fails: shapes the table rules do not
/// cover fall through to a JSON dump.
pub fn render(
    payload: Option<&Value>,
    metadata: Option<&Metadata>,
    mode: RenderMode,
    slot: &mut AnalysisSlot,
) -> RenderedOutput {
    match ResultShape::classify(payload, mode) {
        ResultShape::AnalysisText(text) => {
            slot.store(text);
            RenderedOutput::new(RenderedContent::Text(text.to_string()), ANALYSIS_STATUS)
        }
        ResultShape::EmptyResult => {
            RenderedOutput::new(RenderedContent::Placeholder(NO_DATA_MESSAGE.to_string()), "")
        }
        shape => {
            let status = metadata
                .and_then(|meta| meta.context_message.clone())
                .unwrap_or_default();
            RenderedOutput::new(content_for(&shape), status)
        }
    }
}

fn content_for(shape: &ResultShape<'_>) -> RenderedContent {
    match shape {
        ResultShape::AnalysisText(text) => RenderedContent::Text(text.to_string()),
        ResultShape::EmptyResult => RenderedContent::Placeholder(NO_DATA_MESSAGE.to_string()),
        ResultShape::AggregatedSummary(first) => RenderedContent::Text(pretty_json(first)),
        ResultShape::RecordTable { columns, records } => {
            RenderedContent::Table(record_table(columns, records))
        }
        ResultShape::OpaqueValue(value) => RenderedContent::Text(pretty_json(value)),
    }
}

fn record_table(columns: &[&str], records: &[Value]) -> TableView {
    let rows = records
        .iter()
        .take(MAX_TABLE_ROWS)
        .map(|record| {
            columns
                .iter()
                .map(|column| cell_text(record.get(*column)))
                .collect()
        })
        .collect();

    let note = (records.len() > MAX_TABLE_ROWS)
        .then(|| format!("Showing {} of {}", MAX_TABLE_ROWS, records.len()));

    TableView {
        headers: columns.iter().map(|column| column.to_string()).collect(),
        rows,
        note,
    }
}
