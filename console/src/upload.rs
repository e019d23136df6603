//! Local handling of files before they are uploaded

use crate::error::{ConsoleError, Result};
use serde_json::{Map, Value};
use std::path::Path;

/// Upload formats the connector service accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Json,
    Csv,
}

impl FileKind {
    /// Detect the format from the file extension (case-insensitive)
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(FileKind::Json),
            "csv" => Some(FileKind::Csv),
            _ => None,
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            FileKind::Json => "application/json",
            FileKind::Csv => "text/csv",
        }
    }
}

/// File contents ready to be sent as the `file` form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub file_name: String,
    pub kind: FileKind,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    /// Read a file from disk, rejecting missing files and unknown formats
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.is_file() {
            return Err(ConsoleError::missing_input(format!(
                "Select a file: {} does not exist",
                path.display()
            )));
        }

        let kind = FileKind::from_path(path).ok_or_else(|| ConsoleError::UnsupportedFile {
            path: path.to_path_buf(),
        })?;

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());

        Ok(Self {
            file_name,
            kind,
            bytes: std::fs::read(path)?,
        })
    }

    pub fn from_bytes<S: Into<String>>(file_name: S, kind: FileKind, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            kind,
            bytes,
        }
    }

    /// Parse the file the way the service will store it.
    ///
    /// CSV rows become records keyed by the header row, with every value
    /// kept as a string. A JSON document that is not an array is wrapped in a
    /// one-element array.
    pub fn records(&self) -> Result<Value> {
        let text = std::str::from_utf8(&self.bytes)
            .map_err(|_| ConsoleError::invalid_upload("File must be UTF-8 encoded"))?;

        match self.kind {
            FileKind::Csv => csv_records(text),
            FileKind::Json => {
                let value: Value = serde_json::from_str(text)
                    .map_err(|e| ConsoleError::invalid_upload(format!("Invalid JSON: {e}")))?;
                Ok(match value {
                    Value::Array(_) => value,
                    other => Value::Array(vec![other]),
                })
            }
        }
    }

    /// Number of records the service will report after the upload
    pub fn record_count(&self) -> Result<usize> {
        Ok(self.records()?.as_array().map_or(0, Vec::len))
    }
}

/// Short rows are padded with `null` and extra fields are dropped, matching
/// how the service reads uploaded CSV.
fn csv_records(text: &str) -> Result<Value> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());
    let headers = reader.headers()?.clone();

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result?;
        let mut row = Map::new();

        for (i, header) in headers.iter().enumerate() {
            let value = record.get(i).map(|v| Value::String(v.to_string())).unwrap_or(Value::Null);
            row.insert(header.to_string(), value);
        }

        records.push(Value::Object(row));
    }

    Ok(Value::Array(records))
}
