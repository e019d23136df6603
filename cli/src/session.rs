use crate::context::Context;
use crate::error::{CliError, Result};
use crate::fetch::{build_query, FetchArgs};
use crate::progress::with_spinner;
use crate::ui;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use std::path::PathBuf;
use tokio::runtime::Runtime;
use udc_console::voice::dictate;
use udc_console::{DataSource, FlowOutcome, ModelType};

const ANY: &str = "(any)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    CheckApi,
    Upload,
    Analyze,
    Fetch,
    Speak,
    Quit,
}

impl Action {
    const ALL: [Action; 6] = [
        Action::CheckApi,
        Action::Upload,
        Action::Analyze,
        Action::Fetch,
        Action::Speak,
        Action::Quit,
    ];

    fn label(&self) -> &'static str {
        match self {
            Action::CheckApi => "Check API",
            Action::Upload => "Upload data",
            Action::Analyze => "Analyze with AI",
            Action::Fetch => "Fetch data",
            Action::Speak => "Speak results",
            Action::Quit => "Quit",
        }
    }
}

/// Interactive console: one action per prompt until the user quits
pub fn execute(mut ctx: Context) -> Result<()> {
    let rt = Runtime::new()
        .map_err(|e| CliError::Other(format!("Failed to create async runtime: {e}")))?;
    let theme = ColorfulTheme::default();

    ui::section_header("Universal Data Connector");
    let status = rt.block_on(with_spinner("Checking API", ctx.controller.check_api()));
    ui::api_status(status, None);

    loop {
        let actions = available_actions(ctx.controller.slot().speak_enabled());
        let labels: Vec<&str> = actions.iter().map(Action::label).collect();
        let choice = Select::with_theme(&theme)
            .with_prompt("Choose an action")
            .items(&labels)
            .default(0)
            .interact()?;

        match actions[choice] {
            Action::CheckApi => {
                let status = rt.block_on(with_spinner("Checking API", ctx.controller.check_api()));
                ui::api_status(status, None);
            }
            Action::Upload => {
                let source = pick_source(&theme)?;
                let file: String = Input::with_theme(&theme)
                    .with_prompt("File (.json or .csv)")
                    .interact_text()?;
                let path = PathBuf::from(file.trim());
                let outcome = rt.block_on(with_spinner(
                    "Uploading",
                    ctx.controller.upload(source, &path),
                ));
                present(&ctx, &outcome);
            }
            Action::Analyze => {
                let Some(query) = ask_question(&ctx, &theme)? else {
                    continue;
                };
                let model = pick_model(&theme)?;
                let outcome =
                    rt.block_on(with_spinner("Analyzing", ctx.controller.analyze(&query, model)));
                present(&ctx, &outcome);
            }
            Action::Fetch => {
                let source = pick_source(&theme)?;
                let args = ask_filters(&ctx, &theme, source)?;
                match build_query(source, &args, &ctx.config.fetch) {
                    Ok(query) => {
                        let outcome =
                            rt.block_on(with_spinner("Fetching", ctx.controller.fetch(&query)));
                        present(&ctx, &outcome);
                    }
                    Err(err) => ui::error_message(&err.user_message()),
                }
            }
            Action::Speak => ui::toast(&ctx.controller.speak()),
            Action::Quit => break,
        }
    }

    Ok(())
}

/// Speaking is offered only once an analysis is available
fn available_actions(speak_enabled: bool) -> Vec<Action> {
    Action::ALL
        .into_iter()
        .filter(|action| speak_enabled || *action != Action::Speak)
        .collect()
}

fn present(ctx: &Context, outcome: &FlowOutcome) {
    if let Some(view) = &outcome.view {
        ctx.show(view);
    }
    ui::toast(&outcome.toast);
}

fn pick_source(theme: &ColorfulTheme) -> Result<DataSource> {
    let labels: Vec<&str> = DataSource::ALL.iter().map(DataSource::as_str).collect();
    let choice = Select::with_theme(theme)
        .with_prompt("Source")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(DataSource::ALL[choice])
}

fn pick_model(theme: &ColorfulTheme) -> Result<ModelType> {
    let labels: Vec<&str> = ModelType::ALL.iter().map(ModelType::as_str).collect();
    let choice = Select::with_theme(theme)
        .with_prompt("Model")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(ModelType::ALL[choice])
}

/// Typed question, optionally extended by dictation; `None` when dictation failed
fn ask_question(ctx: &Context, theme: &ColorfulTheme) -> Result<Option<String>> {
    let query: String = Input::with_theme(theme)
        .with_prompt("Question")
        .allow_empty(true)
        .interact_text()?;

    let Some(listener) = &ctx.listener else {
        return Ok(Some(query));
    };

    let use_voice = Confirm::with_theme(theme)
        .with_prompt("Dictate (more of) the question?")
        .default(false)
        .interact()?;
    if !use_voice {
        return Ok(Some(query));
    }

    ui::status_message("Listening");
    match dictate(listener, &query) {
        Ok(query) => {
            ui::info_message(&format!("Question: {query}"));
            Ok(Some(query))
        }
        Err(err) => {
            ui::error_message(&err.notice());
            Ok(None)
        }
    }
}

fn ask_filters(ctx: &Context, theme: &ColorfulTheme, source: DataSource) -> Result<FetchArgs> {
    let limit: u32 = Input::with_theme(theme)
        .with_prompt("Limit")
        .default(ctx.config.fetch.limit)
        .interact_text()?;

    let voice = Confirm::with_theme(theme)
        .with_prompt("Voice-optimized results?")
        .default(ctx.config.fetch.voice)
        .interact()?;

    let status = if source.accepts_status() {
        pick_optional(theme, "Status", source.statuses())?
    } else {
        None
    };

    let priority = if source.accepts_priority() {
        pick_optional(theme, "Priority", source.priorities())?
    } else {
        None
    };

    let metric = if source.accepts_metric() {
        let metric: String = Input::with_theme(theme)
            .with_prompt("Metric (blank for all)")
            .allow_empty(true)
            .interact_text()?;
        Some(metric)
    } else {
        None
    };

    Ok(FetchArgs {
        limit: Some(limit),
        voice: Some(voice),
        status,
        priority,
        metric,
    })
}

fn pick_optional(theme: &ColorfulTheme, prompt: &str, values: &[&str]) -> Result<Option<String>> {
    let mut labels = vec![ANY];
    labels.extend_from_slice(values);

    let choice = Select::with_theme(theme)
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact()?;

    Ok((choice > 0).then(|| labels[choice].to_string()))
}
