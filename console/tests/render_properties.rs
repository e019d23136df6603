//! Behaviour of the result renderer on the payload shapes the service returns
//!
//! Each test feeds one payload through `render` and checks the structured
//! output; the last module checks the same outputs through the presentation
//! layers.

use serde_json::{json, Value};
use udc_console::result::{ANALYSIS_STATUS, MAX_TABLE_ROWS, NO_DATA_MESSAGE};
use udc_console::{
    render, AnalysisSlot, CliRenderer, HtmlRenderer, Metadata, OutputRenderer, RenderMode,
    RenderedContent, RenderedOutput, TableView,
};

fn meta(message: &str) -> Metadata {
    Metadata {
        context_message: Some(message.to_string()),
        ..Metadata::default()
    }
}

fn tabular(payload: &Value, metadata: Option<&Metadata>) -> RenderedOutput {
    let mut slot = AnalysisSlot::new();
    render(Some(payload), metadata, RenderMode::Tabular, &mut slot)
}

fn expect_table(output: &RenderedOutput) -> &TableView {
    match &output.content {
        RenderedContent::Table(view) => view,
        other => panic!("Expected table, got {other:?}"),
    }
}

// =============================================================================
// CLASSIFICATION AND CONTENT
// =============================================================================

#[cfg(test)]
mod content_tests {
    use super::*;

    #[test]
    fn test_analysis_text_is_verbatim() {
        let mut slot = AnalysisSlot::new();
        let payload = json!("hello");
        let output = render(Some(&payload), Some(&meta("ignored")), RenderMode::Analysis, &mut slot);

        assert_eq!(output.content, RenderedContent::Text("hello".to_string()));
        assert_eq!(output.status, ANALYSIS_STATUS);
        assert_eq!(slot.last(), Some("hello"));
    }

    #[test]
    fn test_null_and_empty_show_placeholder() {
        let mut slot = AnalysisSlot::new();
        for payload in [None, Some(Value::Null), Some(json!([]))] {
            let output = render(payload.as_ref(), Some(&meta("ok")), RenderMode::Tabular, &mut slot);
            assert_eq!(output.content, RenderedContent::Placeholder(NO_DATA_MESSAGE.to_string()));
            assert_eq!(output.status, "");
        }
    }

    #[test]
    fn test_single_record_table() {
        let output = tabular(&json!([{"id": 1, "name": "a"}]), Some(&meta("ok")));
        let table = expect_table(&output);

        assert_eq!(table.headers, vec!["id", "name"]);
        assert_eq!(table.rows, vec![vec!["1".to_string(), "a".to_string()]]);
        assert_eq!(table.note, None);
        assert_eq!(output.status, "ok");
    }

    #[test]
    fn test_large_result_is_truncated() {
        let payload = Value::Array((0..25).map(|i| json!({"x": i})).collect());
        let output = tabular(&payload, None);
        let table = expect_table(&output);

        assert_eq!(table.rows.len(), MAX_TABLE_ROWS);
        assert_eq!(table.rows[19], vec!["19".to_string()]);
        assert_eq!(table.note.as_deref(), Some("Showing 20 of 25"));
    }

    #[test]
    fn test_aggregated_shows_first_entry_only() {
        let payload = json!([
            {"type": "aggregated", "count": 5},
            {"type": "aggregated", "count": 9}
        ]);
        let output = tabular(&payload, Some(&meta("Summary of 5 points")));

        assert_eq!(
            output.content,
            RenderedContent::Text("{\n  \"type\": \"aggregated\",\n  \"count\": 5\n}".to_string())
        );
        assert_eq!(output.status, "Summary of 5 points");
    }

    #[test]
    fn test_nested_cells_render_as_json() {
        let output = tabular(&json!([{"nested": {"a": 1}, "tags": ["x"]}]), None);
        let table = expect_table(&output);

        assert_eq!(table.rows[0][0], "{\n  \"a\": 1\n}");
        assert_eq!(table.rows[0][1], "[\n  \"x\"\n]");
        assert!(!table.rows[0][0].contains("[object"));
    }

    #[test]
    fn test_columns_come_from_first_record_only() {
        let output = tabular(&json!([{"a": 1}, {"a": 2, "b": 3}, {"b": 4}]), None);
        let table = expect_table(&output);

        assert_eq!(table.headers, vec!["a"]);
        assert_eq!(table.rows, vec![vec!["1"], vec!["2"], vec![""]]);
    }

    #[test]
    fn test_scalar_falls_back_to_json() {
        let output = tabular(&json!(42), Some(&meta("ok")));
        assert_eq!(output.content, RenderedContent::Text("42".to_string()));
        assert_eq!(output.status, "ok");
    }

    #[test]
    fn test_object_payload_falls_back_to_json() {
        let output = tabular(&json!({"error": null}), None);
        assert_eq!(output.content, RenderedContent::Text("{\n  \"error\": null\n}".to_string()));
    }

    #[test]
    fn test_analysis_mode_with_records_renders_table() {
        let mut slot = AnalysisSlot::new();
        let payload = json!([{"id": 1}]);
        let output = render(Some(&payload), None, RenderMode::Analysis, &mut slot);

        assert!(output.is_table());
        assert_eq!(slot.last(), None);
    }

    #[test]
    fn test_render_is_idempotent_and_pure() {
        let payload = json!([{"id": 1, "nested": {"k": [1, 2]}}, {"id": 2}]);
        let before = payload.clone();
        let metadata = meta("ok");

        let first = tabular(&payload, Some(&metadata));
        let second = tabular(&payload, Some(&metadata));

        assert_eq!(first, second);
        assert_eq!(payload, before);
    }
}

// =============================================================================
// PRESENTATION LAYERS
// =============================================================================

#[cfg(test)]
mod presentation_tests {
    use super::*;

    #[test]
    fn test_cli_and_html_agree_on_content() {
        let payload = Value::Array((0..21).map(|i| json!({"id": i, "name": format!("c{i}")})).collect());
        let output = tabular(&payload, Some(&meta("21 customers")));

        let text = CliRenderer::plain().render(&output);
        assert!(text.starts_with("21 customers"));
        assert!(text.contains("c19"));
        assert!(!text.contains("c20"));
        assert!(text.contains("Showing 20 of 21"));

        let html = HtmlRenderer::new().render(&output);
        assert!(html.contains(r#"<div class="result-meta">21 customers</div>"#));
        assert_eq!(html.matches("<tr>").count(), 21);
        assert!(html.contains("Showing 20 of 21"));
    }

    #[test]
    fn test_html_escapes_analysis_text() {
        let mut slot = AnalysisSlot::new();
        let payload = json!("<b>bold</b> & more");
        let output = render(Some(&payload), None, RenderMode::Analysis, &mut slot);

        let html = HtmlRenderer::new().content(&output.content);
        assert_eq!(html, "<pre>&lt;b&gt;bold&lt;/b&gt; &amp; more</pre>");
        assert_eq!(slot.last(), Some("<b>bold</b> & more"));
    }
}
