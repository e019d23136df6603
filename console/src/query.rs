//! Data sources and the filters each one accepts

use crate::error::{ConsoleError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Connector backing a fetch or an upload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    Crm,
    Support,
    Analytics,
}

impl DataSource {
    pub const ALL: [DataSource; 3] = [DataSource::Crm, DataSource::Support, DataSource::Analytics];

    pub fn as_str(&self) -> &'static str {
        match self {
            DataSource::Crm => "crm",
            DataSource::Support => "support",
            DataSource::Analytics => "analytics",
        }
    }

    /// Status values accepted by this source; empty when status filtering
    /// does not apply.
    pub fn statuses(&self) -> &'static [&'static str] {
        match self {
            DataSource::Crm => &["active", "inactive"],
            DataSource::Support => &["open", "closed"],
            DataSource::Analytics => &[],
        }
    }

    /// Priority values accepted by this source; empty when priority
    /// filtering does not apply.
    pub fn priorities(&self) -> &'static [&'static str] {
        match self {
            DataSource::Support => &["low", "medium", "high", "critical"],
            _ => &[],
        }
    }

    pub fn accepts_status(&self) -> bool {
        !self.statuses().is_empty()
    }

    pub fn accepts_priority(&self) -> bool {
        !self.priorities().is_empty()
    }

    pub fn accepts_metric(&self) -> bool {
        matches!(self, DataSource::Analytics)
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataSource {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        DataSource::ALL
            .into_iter()
            .find(|source| source.as_str() == value)
            .ok_or_else(|| format!("source must be crm, support, or analytics (got '{value}')"))
    }
}

/// Optional filters for a data fetch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    pub status: Option<String>,
    pub priority: Option<String>,
    pub metric: Option<String>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status<S: Into<String>>(mut self, status: S) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_priority<S: Into<String>>(mut self, priority: S) -> Self {
        self.priority = Some(priority.into());
        self
    }

    pub fn with_metric<S: Into<String>>(mut self, metric: S) -> Self {
        self.metric = Some(metric.into());
        self
    }

    /// Keep only the filters `source` understands.
    ///
    /// Blank values count as unset. Status and priority values must be ones
    /// the source knows; the metric is trimmed free text.
    pub fn for_source(&self, source: DataSource) -> Result<FilterSet> {
        let status = if source.accepts_status() {
            checked(source, non_blank(&self.status), source.statuses())?
        } else {
            None
        };

        let priority = if source.accepts_priority() {
            checked(source, non_blank(&self.priority), source.priorities())?
        } else {
            None
        };

        let metric = if source.accepts_metric() {
            non_blank(&self.metric).map(str::to_string)
        } else {
            None
        };

        Ok(FilterSet {
            status,
            priority,
            metric,
        })
    }
}

/// Query for `GET /data/{source}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataQuery {
    pub source: DataSource,
    pub limit: u32,
    pub voice: bool,
    pub filters: FilterSet,
}

impl DataQuery {
    pub fn new(source: DataSource, limit: u32, voice: bool) -> Self {
        Self {
            source,
            limit,
            voice,
            filters: FilterSet::default(),
        }
    }

    pub fn with_filters(mut self, filters: FilterSet) -> Self {
        self.filters = filters;
        self
    }

    /// Endpoint path for this query
    pub fn path(&self) -> String {
        format!("/data/{}", self.source)
    }

    /// Query parameters after filtering for the source, empty values omitted
    pub fn params(&self) -> Result<Vec<(&'static str, String)>> {
        let filters = self.filters.for_source(self.source)?;

        let mut params = vec![
            ("limit", self.limit.to_string()),
            ("voice", self.voice.to_string()),
        ];
        if let Some(status) = filters.status {
            params.push(("status", status));
        }
        if let Some(priority) = filters.priority {
            params.push(("priority", priority));
        }
        if let Some(metric) = filters.metric {
            params.push(("metric", metric));
        }

        Ok(params)
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

fn checked(
    source: DataSource,
    value: Option<&str>,
    allowed: &[&str],
) -> Result<Option<String>> {
    match value {
        None => Ok(None),
        Some(value) if allowed.contains(&value) => Ok(Some(value.to_string())),
        Some(value) => Err(ConsoleError::InvalidFilter {
            source_name: source.to_string(),
            value: value.to_string(),
            allowed: allowed.join(", "),
        }),
    }
}
