pub mod loader;
pub mod templates;
pub mod types;
pub mod validator;

pub use loader::{ConfigLoader, DefaultConfigLoader, API_BASE_ENV};
pub use templates::{ensure_config_file_exists, generate_default_config_template};
pub use types::{ApiConfig, ConsoleConfig, FetchConfig, HealthConfig, VoiceConfig, DEFAULT_API_BASE};
pub use validator::{validate, MAX_FETCH_LIMIT};
