//! JSON renderer for structured output

use super::OutputRenderer;
use crate::result::RenderedOutput;

/// JSON renderer that serializes the rendered view itself
pub struct JsonRenderer {
    /// Whether to pretty-print the JSON output
    pub pretty: bool,
}

impl JsonRenderer {
    /// Create a new JSON renderer with pretty printing
    pub fn new() -> Self {
        Self { pretty: true }
    }

    /// Create a JSON renderer with compact output
    pub fn compact() -> Self {
        Self { pretty: false }
    }
}

impl Default for JsonRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputRenderer for JsonRenderer {
    fn render(&self, output: &RenderedOutput) -> String {
        if self.pretty {
            serde_json::to_string_pretty(output).unwrap_or_else(|_| "{}".to_string())
        } else {
            serde_json::to_string(output).unwrap_or_else(|_| "{}".to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::{RenderedContent, TableView};
    use serde_json::{json, Value};

    #[test]
    fn test_compact_table() {
        let output = RenderedOutput::new(
            RenderedContent::Table(TableView {
                headers: vec!["id".to_string()],
                rows: vec![vec!["1".to_string()]],
                note: None,
            }),
            "ok",
        );
        let value: Value = serde_json::from_str(&JsonRenderer::compact().render(&output)).unwrap();

        assert_eq!(
            value,
            json!({
                "content": {"kind": "table", "value": {"headers": ["id"], "rows": [["1"]], "note": null}},
                "status": "ok"
            })
        );
    }

    #[test]
    fn test_pretty_placeholder() {
        let output = RenderedOutput::new(RenderedContent::Placeholder("No data returned.".to_string()), "");
        let text = JsonRenderer::new().render(&output);
        assert!(text.contains("\"kind\": \"placeholder\""));
        assert!(text.contains('\n'));
    }
}
