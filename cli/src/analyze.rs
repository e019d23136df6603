use crate::cli::OutputFormat;
use crate::context::{block_on, Context};
use crate::error::{CliError, Result};
use crate::progress::with_spinner;
use crate::ui;
use udc_console::voice::dictate;
use udc_console::ModelType;

pub fn execute(
    mut ctx: Context,
    words: Vec<String>,
    model: ModelType,
    speak: bool,
    listen: bool,
) -> Result<()> {
    let mut query = words.join(" ");

    if listen {
        let listener = ctx.listener.as_ref().ok_or_else(|| {
            CliError::Other(
                "No listen_command configured; set [voice] listen_command in the config file"
                    .to_string(),
            )
        })?;
        ui::status_message("Listening");
        query = dictate(listener, &query)?;
        ui::verbose_message(ctx.verbose, &format!("Question: {query}"));
    }

    ui::verbose_message(ctx.verbose, &format!("Model: {model}"));
    let outcome = block_on(with_spinner("Analyzing", ctx.controller.analyze(&query, model)))?;
    ctx.finish(outcome)?;

    if speak {
        let toast = ctx.controller.speak();
        if toast.is_error() {
            return Err(CliError::Other(toast.message));
        }
        if ctx.format == OutputFormat::Table {
            ui::toast(&toast);
        }
    }

    Ok(())
}
