use crate::error::{ConsoleError, Result};
use std::fs;
use std::path::Path;

/// Generate default udc.toml template with examples
pub fn generate_default_config_template() -> String {
    r#"# Universal Data Connector console configuration

[api]
# Base URL of the connector service (UDC_API_BASE overrides this)
base_url = "http://127.0.0.1:8000"
# Request timeout in seconds
timeout_seconds = 30

[fetch]
# Records requested per fetch (1-50)
limit = 10
# Ask the service for voice-optimized results
voice = false

[health]
# Seconds between checks for `udc watch`
interval_seconds = 15

[voice]
# Relative speech rate, 1.0 is the program's normal speed
speech_rate = 0.95

# Text-to-speech program; the text is written to its stdin.
# {rate} is replaced by a words-per-minute value derived from speech_rate.
# speak_command = "espeak"
# speak_args = ["-s", "{rate}"]

# Speech-to-text program; the transcript is read from its stdout.
# listen_command = "whisper-listen"
# listen_args = ["--lang", "en-US"]
"#
    .to_string()
}

/// Write the default configuration if `config_path` does not exist.
///
/// Returns whether a file was generated.
pub fn ensure_config_file_exists<P: AsRef<Path>>(config_path: P, force_generate: bool) -> Result<bool> {
    let config_path = config_path.as_ref();

    if config_path.exists() || !force_generate {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(ConsoleError::Io)?;
    }

    fs::write(config_path, generate_default_config_template()).map_err(ConsoleError::Io)?;
    Ok(true)
}
