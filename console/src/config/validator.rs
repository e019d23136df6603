use crate::config::types::ConsoleConfig;
use crate::error::{ConsoleError, Result};
use url::Url;

/// Largest page size the connector service accepts
pub const MAX_FETCH_LIMIT: u32 = 50;

/// Validate a loaded configuration
pub fn validate(config: &ConsoleConfig) -> Result<()> {
    let base_url = Url::parse(&config.api.base_url).map_err(|e| {
        ConsoleError::invalid_config(format!(
            "Invalid api.base_url '{}': {}",
            config.api.base_url, e
        ))
    })?;

    if !matches!(base_url.scheme(), "http" | "https") {
        return Err(ConsoleError::invalid_config(format!(
            "api.base_url must use http or https, got '{}'",
            base_url.scheme()
        )));
    }

    if config.api.timeout_seconds == 0 {
        return Err(ConsoleError::invalid_config(
            "api.timeout_seconds must be greater than zero",
        ));
    }

    if config.fetch.limit == 0 || config.fetch.limit > MAX_FETCH_LIMIT {
        return Err(ConsoleError::invalid_config(format!(
            "fetch.limit must be between 1 and {}, got {}",
            MAX_FETCH_LIMIT, config.fetch.limit
        )));
    }

    if config.health.interval_seconds == 0 {
        return Err(ConsoleError::invalid_config(
            "health.interval_seconds must be greater than zero",
        ));
    }

    let rate = config.voice.speech_rate;
    if !(rate > 0.0 && rate <= 10.0) {
        return Err(ConsoleError::invalid_config(format!(
            "voice.speech_rate must be in (0, 10], got {rate}"
        )));
    }

    Ok(())
}
