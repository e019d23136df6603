use super::RenderMode;
use serde_json::Value;

/// Discriminant field value marking a pre-summarized result
pub const AGGREGATED_TYPE: &str = "aggregated";

/// Interpretation of a response payload.
///
/// Built by [`ResultShape::classify`]; each variant maps to exactly one kind
/// of rendered content.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultShape<'a> {
    /// Free-text analysis returned by the analyze endpoint
    AnalysisText(&'a str),
    /// Absent payload, `null`, or an empty sequence
    EmptyResult,
    /// First element of a sequence flagged as `type: "aggregated"`
    AggregatedSummary(&'a Value),
    /// Sequence of records with columns taken from the first record
    RecordTable {
        columns: Vec<&'a str>,
        records: &'a [Value],
    },
    /// Anything else, shown as raw JSON
    OpaqueValue(&'a Value),
}

impl<'a> ResultShape<'a> {
    /// Classify a payload. The first matching rule wins.
    pub fn classify(payload: Option<&'a Value>, mode: RenderMode) -> Self {
        if let (RenderMode::Analysis, Some(Value::String(text))) = (mode, payload) {
            return Self::AnalysisText(text);
        }

        let value = match payload {
            None | Some(Value::Null) => return Self::EmptyResult,
            Some(value) => value,
        };

        let records = match value {
            Value::Array(items) if items.is_empty() => return Self::EmptyResult,
            Value::Array(items) => items.as_slice(),
            _ => return Self::OpaqueValue(value),
        };

        let first = &records[0];
        if is_aggregated(first) {
            return Self::AggregatedSummary(first);
        }

        let columns: Vec<&str> = first
            .as_object()
            .map(|record| record.keys().map(String::as_str).collect())
            .unwrap_or_default();

        if columns.is_empty() {
            Self::OpaqueValue(value)
        } else {
            Self::RecordTable { columns, records }
        }
    }
}

fn is_aggregated(record: &Value) -> bool {
    record.get("type").and_then(Value::as_str) == Some(AGGREGATED_TYPE)
}
