use crate::error::{ConsoleError, Result};
use crate::query::{DataQuery, DataSource};
use crate::traits::{ConnectorApi, Listener, Speaker};
use crate::types::{AnalyzeRequest, AnalyzeResponse, DataResponse, UploadReceipt};
use crate::upload::UploadFile;
use crate::voice::Utterance;
use serde_json::{json, Value};
use std::sync::Mutex;

/// Mock connector service for testing
pub struct MockConnectorApi {
    pub analysis: Value,
    pub data: Value,
    pub failure: Option<(u16, String)>,
    analyze_requests: Mutex<Vec<AnalyzeRequest>>,
    fetch_queries: Mutex<Vec<DataQuery>>,
    uploads: Mutex<Vec<(DataSource, String)>>,
}

impl MockConnectorApi {
    pub fn new() -> Self {
        Self {
            analysis: json!("Mock analysis"),
            data: json!({"data": [], "metadata": null}),
            failure: None,
            analyze_requests: Mutex::new(Vec::new()),
            fetch_queries: Mutex::new(Vec::new()),
            uploads: Mutex::new(Vec::new()),
        }
    }

    /// Value returned as `analysis` by the analyze endpoint
    pub fn with_analysis(mut self, analysis: Value) -> Self {
        self.analysis = analysis;
        self
    }

    /// Full body returned by the data endpoint
    pub fn with_data(mut self, body: Value) -> Self {
        self.data = body;
        self
    }

    /// Make every endpoint fail with this status and message
    pub fn with_failure<S: Into<String>>(mut self, status: u16, message: S) -> Self {
        self.failure = Some((status, message.into()));
        self
    }

    pub fn analyze_requests(&self) -> Vec<AnalyzeRequest> {
        self.analyze_requests.lock().unwrap().clone()
    }

    pub fn fetch_queries(&self) -> Vec<DataQuery> {
        self.fetch_queries.lock().unwrap().clone()
    }

    /// Source and file name of every upload
    pub fn uploads(&self) -> Vec<(DataSource, String)> {
        self.uploads.lock().unwrap().clone()
    }

    fn check_failure(&self) -> Result<()> {
        match &self.failure {
            Some((status, message)) => Err(ConsoleError::api(*status, message.clone())),
            None => Ok(()),
        }
    }
}

impl Default for MockConnectorApi {
    fn default() -> Self {
        Self::new()
    }
}

impl ConnectorApi for MockConnectorApi {
    async fn health(&self) -> Result<Value> {
        self.check_failure()?;
        Ok(json!({"status": "ok"}))
    }

    async fn upload(&self, source: DataSource, file: &UploadFile) -> Result<UploadReceipt> {
        self.check_failure()?;
        self.uploads
            .lock()
            .unwrap()
            .push((source, file.file_name.clone()));

        Ok(UploadReceipt {
            status: Some("ok".to_string()),
            source: Some(source.to_string()),
            records: file.record_count()? as u64,
        })
    }

    async fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalyzeResponse> {
        self.analyze_requests.lock().unwrap().push(request.clone());
        self.check_failure()?;

        Ok(AnalyzeResponse {
            analysis: Some(self.analysis.clone()),
            sources_used: vec!["crm".to_string()],
        })
    }

    async fn fetch_data(&self, query: &DataQuery) -> Result<DataResponse> {
        self.fetch_queries.lock().unwrap().push(query.clone());
        self.check_failure()?;
        query.params()?;

        Ok(serde_json::from_value(self.data.clone())?)
    }
}

/// Speaker that records utterances instead of playing them
#[derive(Default)]
pub struct RecordingSpeaker {
    spoken: Mutex<Vec<Utterance>>,
    pub should_fail: bool,
}

impl RecordingSpeaker {
    pub fn failing() -> Self {
        Self {
            spoken: Mutex::new(Vec::new()),
            should_fail: true,
        }
    }

    pub fn utterances(&self) -> Vec<Utterance> {
        self.spoken.lock().unwrap().clone()
    }
}

impl Speaker for RecordingSpeaker {
    fn speak(&self, utterance: &Utterance) -> Result<()> {
        if self.should_fail {
            return Err(ConsoleError::voice("speech device busy"));
        }
        self.spoken.lock().unwrap().push(utterance.clone());
        Ok(())
    }
}

/// Listener returning a fixed transcript, or failing when none is set
pub struct ScriptedListener {
    pub transcript: Option<String>,
}

impl ScriptedListener {
    pub fn hearing<S: Into<String>>(transcript: S) -> Self {
        Self {
            transcript: Some(transcript.into()),
        }
    }

    pub fn deaf() -> Self {
        Self { transcript: None }
    }
}

impl Listener for ScriptedListener {
    fn listen(&self) -> Result<String> {
        self.transcript
            .clone()
            .ok_or_else(|| ConsoleError::voice("no microphone"))
    }
}
