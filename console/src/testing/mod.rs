pub mod mocks;

pub use mocks::{MockConnectorApi, RecordingSpeaker, ScriptedListener};
