use crate::cli::OutputFormat;
use crate::context::{block_on, Context};
use crate::error::{CliError, Result};
use crate::progress::with_spinner;
use crate::ui;
use chrono::Local;
use std::time::Duration;
use udc_console::ApiStatus;

pub fn execute(mut ctx: Context) -> Result<()> {
    let status = block_on(with_spinner("Checking API", ctx.controller.check_api()))?;
    report(&ctx, status, None)?;

    match status {
        ApiStatus::Connected => Ok(()),
        _ => Err(CliError::Other(format!(
            "{} at {}",
            status.label(),
            ctx.config.api.base_url
        ))),
    }
}

/// Poll `/health` until interrupted, printing the first status and every change
pub fn watch(mut ctx: Context, interval: Option<u64>) -> Result<()> {
    let seconds = interval.unwrap_or(ctx.config.health.interval_seconds);
    if seconds == 0 {
        return Err(CliError::Other("Watch interval must be at least 1 second".to_string()));
    }

    if ctx.format == OutputFormat::Table {
        ui::info_message(&format!(
            "Watching {} every {}s (Ctrl+C to stop)",
            ctx.config.api.base_url, seconds
        ));
    }

    block_on(async {
        let mut ticker = tokio::time::interval(Duration::from_secs(seconds));
        let stop = tokio::signal::ctrl_c();
        tokio::pin!(stop);

        let mut last = ApiStatus::Unknown;
        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let status = ctx.controller.check_api().await;
                    if status != last {
                        let time = Local::now().format("%H:%M:%S").to_string();
                        report(&ctx, status, Some(&time))?;
                        last = status;
                    } else {
                        ui::verbose_message(ctx.verbose, &format!("{} (unchanged)", status.label()));
                    }
                }
                _ = &mut stop => break,
            }
        }
        Ok::<(), CliError>(())
    })?
}

fn report(ctx: &Context, status: ApiStatus, timestamp: Option<&str>) -> Result<()> {
    match ctx.format {
        OutputFormat::Json => {
            let line = serde_json::json!({
                "api": ctx.config.api.base_url,
                "status": status.label(),
                "time": timestamp,
            });
            println!("{}", serde_json::to_string(&line)?);
        }
        OutputFormat::Html => {
            let class = match status {
                ApiStatus::Connected => "connected",
                ApiStatus::Offline => "offline",
                ApiStatus::Unknown => "checking",
            };
            println!(r#"<span class="api-status {}">{}</span>"#, class, status.label());
        }
        OutputFormat::Table => ui::api_status(status, timestamp),
    }
    Ok(())
}
