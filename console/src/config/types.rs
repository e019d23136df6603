use serde::{Deserialize, Serialize};

/// Default address of a locally running connector service
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

/// Main configuration structure for the console
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Connector service settings
    pub api: ApiConfig,
    /// Defaults for data fetches
    pub fetch: FetchConfig,
    /// Health polling settings
    pub health: HealthConfig,
    /// External speech commands
    pub voice: VoiceConfig,
}

/// Connector service settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the connector service
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            timeout_seconds: 30,
        }
    }
}

/// Defaults for data fetches
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Number of records requested per fetch
    pub limit: u32,
    /// Ask the service for voice-optimized results
    pub voice: bool,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            limit: 10,
            voice: false,
        }
    }
}

/// Health polling settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct HealthConfig {
    /// Seconds between health checks in watch mode
    pub interval_seconds: u64,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            interval_seconds: 15,
        }
    }
}

/// External speech commands
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct VoiceConfig {
    /// Text-to-speech program; text is written to its stdin
    pub speak_command: Option<String>,
    /// Arguments for the speak command, `{rate}` is replaced by the words-per-minute rate
    pub speak_args: Vec<String>,
    /// Relative speech rate, 1.0 is the program's normal speed
    pub speech_rate: f32,
    /// Speech-to-text program; the transcript is read from its stdout
    pub listen_command: Option<String>,
    /// Arguments for the listen command
    pub listen_args: Vec<String>,
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            speak_command: None,
            speak_args: Vec::new(),
            speech_rate: 0.95,
            listen_command: None,
            listen_args: Vec::new(),
        }
    }
}
