use crate::context::{block_on, Context};
use crate::error::{CliError, Result};
use crate::progress::with_spinner;
use crate::ui;
use udc_console::config::{FetchConfig, MAX_FETCH_LIMIT};
use udc_console::{DataQuery, DataSource, FilterSet};

/// Filter flags as given on the command line
#[derive(Debug, Default, Clone)]
pub struct FetchArgs {
    pub limit: Option<u32>,
    /// `None` leaves the choice to `fetch.voice`
    pub voice: Option<bool>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub metric: Option<String>,
}

pub fn execute(mut ctx: Context, source: DataSource, args: FetchArgs) -> Result<()> {
    let query = build_query(source, &args, &ctx.config.fetch)?;
    ui::verbose_message(
        ctx.verbose,
        &format!("GET {} limit={} voice={}", query.path(), query.limit, query.voice),
    );

    let message = format!("Fetching {source} data");
    let outcome = block_on(with_spinner(&message, ctx.controller.fetch(&query)))?;
    ctx.finish(outcome)
}

/// Combine flags with configured defaults and check the filters against the source
pub fn build_query(source: DataSource, args: &FetchArgs, defaults: &FetchConfig) -> Result<DataQuery> {
    let limit = args.limit.unwrap_or(defaults.limit);
    if limit == 0 || limit > MAX_FETCH_LIMIT {
        return Err(CliError::Other(format!(
            "Limit must be between 1 and {MAX_FETCH_LIMIT} (got {limit})"
        )));
    }

    let mut filters = FilterSet::new();
    if let Some(status) = &args.status {
        filters = filters.with_status(status.as_str());
    }
    if let Some(priority) = &args.priority {
        filters = filters.with_priority(priority.as_str());
    }
    if let Some(metric) = &args.metric {
        filters = filters.with_metric(metric.as_str());
    }

    let applied = filters.for_source(source)?;
    let ignored: Vec<&str> = [
        ("status", &filters.status, &applied.status),
        ("priority", &filters.priority, &applied.priority),
        ("metric", &filters.metric, &applied.metric),
    ]
    .into_iter()
    .filter(|(_, given, kept)| given.as_deref().is_some_and(|v| !v.trim().is_empty()) && kept.is_none())
    .map(|(name, _, _)| name)
    .collect();

    if !ignored.is_empty() {
        ui::warning_message(&format!(
            "Ignoring --{} for {source}",
            ignored.join(", --")
        ));
    }

    Ok(DataQuery::new(source, limit, args.voice.unwrap_or(defaults.voice)).with_filters(applied))
}
