//! Console flows: health, upload, analysis, fetch and speech
//!
//! Each flow performs one request, renders the result and reports a short
//! notification. Failures never escape as errors; they come back as an
//! error notification and, where the flow owns the content area, a failure
//! view.

use crate::error::ConsoleError;
use crate::query::{DataQuery, DataSource};
use crate::result::{render, AnalysisSlot, RenderMode, RenderedOutput};
use crate::traits::{ConnectorApi, Speaker};
use crate::types::{AnalyzeRequest, ApiStatus, ModelType};
use crate::upload::UploadFile;
use crate::voice::Utterance;
use std::path::Path;

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// Short notification shown after a flow completes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn success<S: Into<String>>(message: S) -> Self {
        Self {
            kind: ToastKind::Success,
            message: message.into(),
        }
    }

    pub fn error<S: Into<String>>(message: S) -> Self {
        Self {
            kind: ToastKind::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == ToastKind::Error
    }
}

/// Notification plus the content-area update, if the flow produced one
#[derive(Debug, Clone, PartialEq)]
pub struct FlowOutcome {
    pub toast: Toast,
    pub view: Option<RenderedOutput>,
}

impl FlowOutcome {
    fn notify(toast: Toast) -> Self {
        Self { toast, view: None }
    }

    fn shown(toast: Toast, view: RenderedOutput) -> Self {
        Self {
            toast,
            view: Some(view),
        }
    }

    /// Error notification with the message also shown in the content area
    fn failed(error: &ConsoleError) -> Self {
        let message = error.notice();
        Self::shown(Toast::error(message.clone()), RenderedOutput::failure(message))
    }
}

/// Drives the console flows against a connector service
pub struct Controller<A: ConnectorApi, S: Speaker> {
    api: A,
    speaker: S,
    slot: AnalysisSlot,
    status: ApiStatus,
    speech_rate: f32,
}

impl<A: ConnectorApi, S: Speaker> Controller<A, S> {
    pub fn new(api: A, speaker: S) -> Self {
        Self {
            api,
            speaker,
            slot: AnalysisSlot::new(),
            status: ApiStatus::Unknown,
            speech_rate: 0.95,
        }
    }

    pub fn with_speech_rate(mut self, rate: f32) -> Self {
        self.speech_rate = rate;
        self
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn speaker(&self) -> &S {
        &self.speaker
    }

    pub fn slot(&self) -> &AnalysisSlot {
        &self.slot
    }

    pub fn api_status(&self) -> ApiStatus {
        self.status
    }

    /// Probe `/health` and remember the result
    pub async fn check_api(&mut self) -> ApiStatus {
        self.status = match self.api.health().await {
            Ok(_) => ApiStatus::Connected,
            Err(_) => ApiStatus::Offline,
        };
        self.status
    }

    /// Upload a JSON or CSV file to a source
    pub async fn upload(&mut self, source: DataSource, path: &Path) -> FlowOutcome {
        let file = match UploadFile::from_path(path) {
            Ok(file) => file,
            Err(error) => return FlowOutcome::notify(Toast::error(error.notice())),
        };

        match self.api.upload(source, &file).await {
            Ok(receipt) => {
                FlowOutcome::notify(Toast::success(format!("Uploaded {} records", receipt.records)))
            }
            Err(error) => FlowOutcome::notify(Toast::error(error.notice())),
        }
    }

    /// Ask the service to analyze uploaded data
    pub async fn analyze(&mut self, query: &str, model_type: ModelType) -> FlowOutcome {
        let query = query.trim();
        if query.is_empty() {
            return FlowOutcome::notify(Toast::error("Enter a question"));
        }

        let request = AnalyzeRequest {
            query: query.to_string(),
            model_type,
            source: None,
        };

        match self.api.analyze(&request).await {
            Ok(response) => {
                let view = render(
                    response.analysis.as_ref(),
                    None,
                    RenderMode::Analysis,
                    &mut self.slot,
                );
                FlowOutcome::shown(Toast::success("Analysis complete"), view)
            }
            Err(error) => FlowOutcome::failed(&error),
        }
    }

    /// Fetch filtered records from a source
    pub async fn fetch(&mut self, query: &DataQuery) -> FlowOutcome {
        match self.api.fetch_data(query).await {
            Ok(response) => {
                let view = render(
                    response.data.as_ref(),
                    response.metadata.as_ref(),
                    RenderMode::Tabular,
                    &mut self.slot,
                );
                let toast = Toast::success(format!("Fetched {} items", response.item_count()));
                FlowOutcome::shown(toast, view)
            }
            Err(error) => FlowOutcome::failed(&error),
        }
    }

    /// Read the last analysis aloud
    pub fn speak(&self) -> Toast {
        let Some(text) = self.slot.last() else {
            return Toast::error("Run analysis first");
        };

        match self.speaker.speak(&Utterance::new(text, self.speech_rate)) {
            Ok(()) => Toast::success("Finished speaking"),
            Err(error) => Toast::error(error.notice()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::FilterSet;
    use crate::result::{RenderedContent, ANALYSIS_STATUS};
    use crate::testing::{MockConnectorApi, RecordingSpeaker};
    use serde_json::json;
    use std::fs;
    use tempfile::tempdir;

    fn controller(api: MockConnectorApi) -> Controller<MockConnectorApi, RecordingSpeaker> {
        Controller::new(api, RecordingSpeaker::default())
    }

    #[tokio::test]
    async fn test_check_api() {
        let mut ok = controller(MockConnectorApi::new());
        assert_eq!(ok.api_status(), ApiStatus::Unknown);
        assert_eq!(ok.check_api().await, ApiStatus::Connected);

        let mut down = controller(MockConnectorApi::new().with_failure(503, "down"));
        assert_eq!(down.check_api().await, ApiStatus::Offline);
        assert_eq!(down.api_status(), ApiStatus::Offline);
    }

    #[tokio::test]
    async fn test_analyze_renders_and_enables_speech() {
        let api = MockConnectorApi::new().with_analysis(json!("Revenue is up 12%."));
        let mut controller = controller(api);

        let outcome = controller.analyze("  how is revenue? ", ModelType::Summarization).await;
        assert_eq!(outcome.toast, Toast::success("Analysis complete"));

        let view = outcome.view.unwrap();
        assert_eq!(view.content, RenderedContent::Text("Revenue is up 12%.".to_string()));
        assert_eq!(view.status, ANALYSIS_STATUS);

        let requests = controller.api().analyze_requests();
        assert_eq!(requests[0].query, "how is revenue?");
        assert_eq!(requests[0].model_type, ModelType::Summarization);

        assert_eq!(controller.speak(), Toast::success("Finished speaking"));
        let spoken = controller.speaker.utterances();
        assert_eq!(spoken, vec![Utterance::new("Revenue is up 12%.", 0.95)]);
    }

    #[tokio::test]
    async fn test_blank_question_is_rejected_locally() {
        let mut controller = controller(MockConnectorApi::new());
        let outcome = controller.analyze("   ", ModelType::Auto).await;

        assert_eq!(outcome.toast, Toast::error("Enter a question"));
        assert!(outcome.view.is_none());
        assert!(controller.api().analyze_requests().is_empty());
    }

    #[tokio::test]
    async fn test_speak_requires_analysis() {
        let controller = controller(MockConnectorApi::new());
        assert_eq!(controller.speak(), Toast::error("Run analysis first"));
        assert!(controller.speaker.utterances().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_renders_table_with_context() {
        let api = MockConnectorApi::new().with_data(json!({
            "data": [{"id": 1, "name": "Acme"}],
            "metadata": {"returned_results": 1, "context_message": "Showing 1 of 1 customers"}
        }));
        let mut controller = controller(api);

        let query = DataQuery::new(DataSource::Crm, 10, false)
            .with_filters(FilterSet::new().with_status("active"));
        let outcome = controller.fetch(&query).await;

        assert_eq!(outcome.toast, Toast::success("Fetched 1 items"));
        let view = outcome.view.unwrap();
        assert!(view.is_table());
        assert_eq!(view.status, "Showing 1 of 1 customers");
        assert_eq!(controller.api().fetch_queries(), vec![query]);
        assert!(!controller.slot().speak_enabled());
    }

    #[tokio::test]
    async fn test_fetch_failure_shows_message() {
        let api = MockConnectorApi::new().with_failure(500, "connector unavailable");
        let mut controller = controller(api);

        let outcome = controller.fetch(&DataQuery::new(DataSource::Support, 10, true)).await;
        assert_eq!(outcome.toast, Toast::error("connector unavailable"));
        assert_eq!(outcome.view, Some(RenderedOutput::failure("connector unavailable")));
    }

    #[tokio::test]
    async fn test_upload_reports_record_count() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("customers.json");
        fs::write(&path, r#"[{"id": 1}, {"id": 2}, {"id": 3}]"#).unwrap();

        let mut controller = controller(MockConnectorApi::new());
        let outcome = controller.upload(DataSource::Crm, &path).await;

        assert_eq!(outcome.toast, Toast::success("Uploaded 3 records"));
        assert!(outcome.view.is_none());
        assert_eq!(controller.api().uploads(), vec![(DataSource::Crm, "customers.json".to_string())]);
    }

    #[tokio::test]
    async fn test_upload_missing_file() {
        let dir = tempdir().unwrap();
        let mut controller = controller(MockConnectorApi::new());
        let outcome = controller.upload(DataSource::Crm, &dir.path().join("nope.csv")).await;

        assert!(outcome.toast.is_error());
        assert!(outcome.toast.message.starts_with("Select a file"));
        assert!(controller.api().uploads().is_empty());
    }
}
