//! Shared fixtures for the end-to-end tests against a mocked connector service

use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use udc_console::config::ApiConfig;
use udc_console::{ApiClient, Controller, SilentSpeaker};
use wiremock::MockServer;

/// Client pointed at a mock server
pub fn client_for(server: &MockServer) -> ApiClient {
    let config = ApiConfig {
        base_url: server.uri(),
        timeout_seconds: 5,
    };
    ApiClient::new(&config).expect("mock server URI is a valid base URL")
}

/// Controller with a real HTTP client and no speech output
pub fn controller_for(server: &MockServer) -> Controller<ApiClient, SilentSpeaker> {
    Controller::new(client_for(server), SilentSpeaker)
}

/// Write `content` to `name` inside `dir` and return the path
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("failed to write fixture file");
    path
}

/// `/data/support` body with `count` open tickets
pub fn support_tickets(count: usize) -> Value {
    let tickets: Vec<Value> = (0..count)
        .map(|i| {
            json!({
                "ticket_id": format!("T{i:03}"),
                "status": "open",
                "priority": if i % 2 == 0 { "high" } else { "low" },
                "tags": ["billing"],
            })
        })
        .collect();

    json!({
        "data": tickets,
        "metadata": {
            "total_results": count,
            "returned_results": count,
            "data_freshness": "live",
            "data_type": "tabular",
            "source": "support",
            "context_message": format!("Showing {count} open support tickets"),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_support_fixture_shape() {
        let body = support_tickets(3);
        assert_eq!(body["data"].as_array().map(Vec::len), Some(3));
        assert_eq!(body["metadata"]["returned_results"], 3);
        assert_eq!(body["data"][1]["priority"], "low");
    }
}
