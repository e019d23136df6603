//! HTML fragments for embedding results in a page

use super::OutputRenderer;
use crate::result::{RenderedContent, RenderedOutput, TableView};

/// Renders results as the content and status fragments of the web console
pub struct HtmlRenderer;

impl HtmlRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Markup for the content area only
    pub fn content(&self, content: &RenderedContent) -> String {
        match content {
            RenderedContent::Table(view) => table(view),
            RenderedContent::Text(text) => format!("<pre>{}</pre>", escape(text)),
            RenderedContent::Placeholder(message) => {
                format!(r#"<p class="placeholder">{}</p>"#, escape(message))
            }
            RenderedContent::Failure(message) => {
                format!(r#"<p class="placeholder error">{}</p>"#, escape(message))
            }
        }
    }

    /// Markup for the status area
    pub fn status(&self, status: &str) -> String {
        format!(r#"<div class="result-meta">{}</div>"#, escape(status))
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputRenderer for HtmlRenderer {
    fn render(&self, output: &RenderedOutput) -> String {
        format!("{}\n{}", self.status(&output.status), self.content(&output.content))
    }
}

fn table(view: &TableView) -> String {
    let headers: String = view
        .headers
        .iter()
        .map(|header| format!("<th>{}</th>", escape(header)))
        .collect();

    let rows: String = view
        .rows
        .iter()
        .map(|row| {
            let cells: String = row
                .iter()
                .map(|cell| format!("<td>{}</td>", escape(cell)))
                .collect();
            format!("<tr>{cells}</tr>")
        })
        .collect();

    let mut html = format!(
        r#"<table class="data-table"><thead><tr>{headers}</tr></thead><tbody>{rows}</tbody></table>"#
    );
    if let Some(note) = &view.note {
        html.push_str(&format!(r#"<p class="table-note">{}</p>"#, escape(note)));
    }
    html
}

/// Escape text for HTML element content and attribute values
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape(r#"<b>"Tom" & 'Jerry'</b>"#), "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;");
    }

    #[test]
    fn test_table_markup() {
        let view = TableView {
            headers: vec!["id".to_string(), "note".to_string()],
            rows: vec![vec!["1".to_string(), "<script>".to_string()]],
            note: Some("Showing 20 of 21".to_string()),
        };
        let html = HtmlRenderer::new().content(&RenderedContent::Table(view));

        assert!(html.starts_with(r#"<table class="data-table"><thead><tr><th>id</th><th>note</th></tr></thead>"#));
        assert!(html.contains("<td>&lt;script&gt;</td>"));
        assert!(html.ends_with(r#"<p class="table-note">Showing 20 of 21</p>"#));
    }

    #[test]
    fn test_full_output() {
        let output = RenderedOutput::new(RenderedContent::Placeholder("No data returned.".to_string()), "");
        assert_eq!(
            HtmlRenderer::new().render(&output),
            "<div class=\"result-meta\"></div>\n<p class=\"placeholder\">No data returned.</p>"
        );

        let failure = RenderedOutput::failure("boom");
        assert!(HtmlRenderer::new().render(&failure).contains(r#"<p class="placeholder error">boom</p>"#));
    }
}
