use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Metadata returned alongside fetched records.
///
/// Every field is optional so partial or missing metadata never fails a
/// fetch.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Metadata {
    pub total_results: Option<u64>,
    pub returned_results: Option<u64>,
    pub data_freshness: Option<String>,
    pub data_type: Option<String>,
    pub source: Option<String>,
    pub context_message: Option<String>,
}

/// Body of `GET /data/{source}`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct DataResponse {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub metadata: Option<Metadata>,
}

impl DataResponse {
    /// Item count for notifications: the server's count when present,
    /// otherwise the payload length.
    pub fn item_count(&self) -> u64 {
        self.metadata
            .as_ref()
            .and_then(|meta| meta.returned_results)
            .or_else(|| {
                self.data
                    .as_ref()
                    .and_then(Value::as_array)
                    .map(|items| items.len() as u64)
            })
            .unwrap_or(0)
    }
}

/// Body of `POST /upload/{source}`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UploadReceipt {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    pub records: u64,
}

/// Body sent to `POST /analyze`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyzeRequest {
    pub query: String,
    pub model_type: ModelType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// Body of `POST /analyze`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AnalyzeResponse {
    /// Usually a string; kept as a raw value so odd shapes still render
    #[serde(default)]
    pub analysis: Option<Value>,
    #[serde(default)]
    pub sources_used: Vec<String>,
}

/// Analysis model requested from the service
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelType {
    #[default]
    Auto,
    Summarization,
    TableQa,
    TextQa,
}

impl ModelType {
    pub const ALL: [ModelType; 4] = [
        ModelType::Auto,
        ModelType::Summarization,
        ModelType::TableQa,
        ModelType::TextQa,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelType::Auto => "auto",
            ModelType::Summarization => "summarization",
            ModelType::TableQa => "table_qa",
            ModelType::TextQa => "text_qa",
        }
    }
}

impl fmt::Display for ModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        ModelType::ALL
            .into_iter()
            .find(|model| model.as_str() == value)
            .ok_or_else(|| format!("Unknown model type: {value}"))
    }
}

/// Reachability of the connector service
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ApiStatus {
    #[default]
    Unknown,
    Connected,
    Offline,
}

impl ApiStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ApiStatus::Unknown => "Checking API",
            ApiStatus::Connected => "API Connected",
            ApiStatus::Offline => "API Offline",
        }
    }
}
