use serde::Serialize;

/// Header row, body rows and an optional trailing note
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableView {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub note: Option<String>,
}

/// What the content area should show
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum RenderedContent {
    Table(TableView),
    /// Preformatted text shown verbatim
    Text(String),
    /// Empty-state message
    Placeholder(String),
    /// Error message from a failed request
    Failure(String),
}

/// Content plus the status line for the metadata area
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedOutput {
    pub content: RenderedContent,
    pub status: String,
}

impl RenderedOutput {
    pub fn new<S: Into<String>>(content: RenderedContent, status: S) -> Self {
        Self {
            content,
            status: status.into(),
        }
    }

    /// Error view shown when a flow fails before producing a payload
    pub fn failure<S: Into<String>>(message: S) -> Self {
        Self::new(RenderedContent::Failure(message.into()), "")
    }

    pub fn is_table(&self) -> bool {
        matches!(self.content, RenderedContent::Table(_))
    }
}
