//! UDC Console - client side of the Universal Data Connector
//!
//! This crate talks to the connector service (health, upload, analysis and
//! filtered data fetches) and renders whatever JSON comes back as a table,
//! a preformatted block or an empty-state placeholder.

// Core modules
pub mod config;
pub mod error;
pub mod types;

// Rendering
pub mod renderers;
pub mod result;

// Service access and flows
pub mod client;
pub mod controller;
pub mod query;
pub mod traits;
pub mod upload;
pub mod voice;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

// Re-export main types for convenience
pub use client::ApiClient;
pub use config::{ConsoleConfig, DefaultConfigLoader};
pub use controller::{Controller, FlowOutcome, Toast, ToastKind};
pub use error::{ConsoleError, Result};
pub use query::{DataQuery, DataSource, FilterSet};
pub use renderers::{CliRenderer, HtmlRenderer, JsonRenderer, OutputRenderer};
pub use result::{
    render, AnalysisSlot, RenderMode, RenderedContent, RenderedOutput, ResultShape, TableView,
};
pub use traits::{ConnectorApi, Listener, Speaker};
pub use types::{ApiStatus, DataResponse, Metadata, ModelType};
pub use upload::{FileKind, UploadFile};
pub use voice::{CommandListener, CommandSpeaker, SilentSpeaker, Utterance};
