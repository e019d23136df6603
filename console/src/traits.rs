use crate::error::Result;
use crate::query::{DataQuery, DataSource};
use crate::types::{AnalyzeRequest, AnalyzeResponse, DataResponse, UploadReceipt};
use crate::upload::UploadFile;
use crate::voice::Utterance;
use serde_json::Value;
use std::future::Future;

/// Trait for clients of the connector service
pub trait ConnectorApi: Send + Sync {
    /// `GET /health`
    fn health(&self) -> impl Future<Output = Result<Value>> + Send;

    /// `POST /upload/{source}` with the file as multipart form data
    fn upload(
        &self,
        source: DataSource,
        file: &UploadFile,
    ) -> impl Future<Output = Result<UploadReceipt>> + Send;

    /// `POST /analyze`
    fn analyze(&self, request: &AnalyzeRequest)
        -> impl Future<Output = Result<AnalyzeResponse>> + Send;

    /// `GET /data/{source}` with limit, voice and filter parameters
    fn fetch_data(&self, query: &DataQuery) -> impl Future<Output = Result<DataResponse>> + Send;
}

/// Trait for text-to-speech output
pub trait Speaker {
    fn speak(&self, utterance: &Utterance) -> Result<()>;
}

/// Trait for speech-to-text input
pub trait Listener {
    /// Record one utterance and return its transcript
    fn listen(&self) -> Result<String>;
}
