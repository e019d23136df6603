use crate::config::ApiConfig;
use crate::error::{ConsoleError, Result};
use crate::query::{DataQuery, DataSource};
use crate::traits::ConnectorApi;
use crate::types::{AnalyzeRequest, AnalyzeResponse, DataResponse, UploadReceipt};
use crate::upload::UploadFile;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use url::Url;

/// HTTP client for the connector service
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a new API client from configuration
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            base_url: normalize_base(&config.base_url)?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve an endpoint path against the base URL, keeping any base path prefix
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }
}

impl ConnectorApi for ApiClient {
    async fn health(&self) -> Result<Value> {
        let response = self.client.get(self.endpoint("/health")?).send().await?;
        read_json(response).await
    }

    async fn upload(&self, source: DataSource, file: &UploadFile) -> Result<UploadReceipt> {
        let part = Part::bytes(file.bytes.clone())
            .file_name(file.file_name.clone())
            .mime_str(file.kind.mime_type())?;
        let form = Form::new().part("file", part);

        let url = self.endpoint(&format!("/upload/{source}"))?;
        let response = self.client.post(url).multipart(form).send().await?;
        read_json(response).await
    }

    async fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalyzeResponse> {
        let response = self
            .client
            .post(self.endpoint("/analyze")?)
            .json(request)
            .send()
            .await?;
        read_json(response).await
    }

    async fn fetch_data(&self, query: &DataQuery) -> Result<DataResponse> {
        let params = query.params()?;
        let response = self
            .client
            .get(self.endpoint(&query.path())?)
            .query(&params)
            .send()
            .await?;
        read_json(response).await
    }
}

/// Parse the base URL and make sure it ends with a slash so joins append to it
fn normalize_base(base_url: &str) -> Result<Url> {
    let trimmed = base_url.trim();
    if trimmed.ends_with('/') {
        Ok(Url::parse(trimmed)?)
    } else {
        Ok(Url::parse(&format!("{trimmed}/"))?)
    }
}

/// Decode a successful response body, or turn a failure into an API error
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ConsoleError::api(status.as_u16(), error_message(status, &body)));
    }

    Ok(response.json::<T>().await?)
}

/// Message for a failed response: the `detail` of an error body when it is a
/// string, otherwise the raw body, otherwise the status reason.
fn error_message(status: StatusCode, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        return status
            .canonical_reason()
            .unwrap_or("Request failed")
            .to_string();
    }

    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| value.get("detail").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base_url: &str) -> ApiConfig {
        ApiConfig {
            base_url: base_url.to_string(),
            timeout_seconds: 5,
        }
    }

    #[test]
    fn test_client_creation() {
        assert!(ApiClient::new(&config("http://127.0.0.1:8000")).is_ok());
        assert!(ApiClient::new(&config("not a url")).is_err());
    }

    #[test]
    fn test_endpoint_joins() {
        let client = ApiClient::new(&config("http://localhost:8000")).unwrap();
        assert_eq!(client.endpoint("/health").unwrap().as_str(), "http://localhost:8000/health");

        let prefixed = ApiClient::new(&config("http://localhost:8000/udc")).unwrap();
        assert_eq!(
            prefixed.endpoint("/data/crm").unwrap().as_str(),
            "http://localhost:8000/udc/data/crm"
        );
    }

    #[test]
    fn test_error_message_prefers_detail() {
        assert_eq!(
            error_message(StatusCode::BAD_REQUEST, r#"{"detail": "source must be crm, support, or analytics"}"#),
            "source must be crm, support, or analytics"
        );
        assert_eq!(
            error_message(StatusCode::UNPROCESSABLE_ENTITY, r#"{"detail": [{"loc": ["body"]}]}"#),
            r#"{"detail": [{"loc": ["body"]}]}"#
        );
        assert_eq!(error_message(StatusCode::INTERNAL_SERVER_ERROR, "boom"), "boom");
        assert_eq!(error_message(StatusCode::SERVICE_UNAVAILABLE, "  "), "Service Unavailable");
    }
}
