use crate::cli::{Cli, OutputFormat};
use crate::error::{CliError, Result, ResultExt};
use crate::ui;
use std::future::Future;
use std::path::PathBuf;
use tokio::runtime::Runtime;
use udc_console::{
    ApiClient, CliRenderer, CommandListener, CommandSpeaker, ConsoleConfig, Controller,
    FlowOutcome, HtmlRenderer, JsonRenderer, OutputRenderer, RenderedOutput, SilentSpeaker,
    Speaker, Utterance,
};

pub const CONFIG_FILE_NAME: &str = "udc.toml";

/// Speech output picked from the `[voice]` configuration
pub enum ConsoleSpeaker {
    Command(CommandSpeaker),
    Silent(SilentSpeaker),
}

impl Speaker for ConsoleSpeaker {
    fn speak(&self, utterance: &Utterance) -> udc_console::Result<()> {
        match self {
            Self::Command(speaker) => speaker.speak(utterance),
            Self::Silent(speaker) => speaker.speak(utterance),
        }
    }
}

pub type ConsoleController = Controller<ApiClient, ConsoleSpeaker>;

/// Everything a command needs: configuration, flows and output format
pub struct Context {
    pub config: ConsoleConfig,
    pub controller: ConsoleController,
    pub listener: Option<CommandListener>,
    pub format: OutputFormat,
    pub verbose: bool,
}

impl Context {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let path = resolve_config_path(cli.config.as_deref());
        let (mut config, found) = ConsoleConfig::load_or_default(&path)
            .with_context(|| format!("Failed to load {}", path.display()))?;

        if found {
            ui::verbose_message(cli.verbose, &format!("Using configuration {}", path.display()));
        } else if cli.config.is_some() || cli.format == OutputFormat::Table {
            ui::warning_message(&format!(
                "{} not found, using defaults (run `udc init` to create it)",
                path.display()
            ));
        }

        if let Some(api) = &cli.api {
            config.apply_api_base(api.as_str())?;
        }
        ui::verbose_message(cli.verbose, &format!("Connector service: {}", config.api.base_url));

        Self::new(config, cli.format, cli.verbose)
    }

    pub fn new(config: ConsoleConfig, format: OutputFormat, verbose: bool) -> Result<Self> {
        let client = ApiClient::new(&config.api)?;
        let speaker = match CommandSpeaker::from_config(&config.voice) {
            Some(speaker) => ConsoleSpeaker::Command(speaker),
            None => ConsoleSpeaker::Silent(SilentSpeaker),
        };
        let controller = Controller::new(client, speaker).with_speech_rate(config.voice.speech_rate);
        let listener = CommandListener::from_config(&config.voice);

        Ok(Self {
            config,
            controller,
            listener,
            format,
            verbose,
        })
    }

    pub fn renderer(&self) -> Box<dyn OutputRenderer> {
        renderer_for(self.format)
    }

    pub fn show(&self, view: &RenderedOutput) {
        println!("{}", self.renderer().render(view));
    }

    /// Print a flow result for a one-shot command; an error notification
    /// becomes the command's error so the process exits non-zero
    pub fn finish(&self, outcome: FlowOutcome) -> Result<()> {
        if outcome.toast.is_error() {
            return Err(CliError::Other(outcome.toast.message));
        }

        if let Some(view) = &outcome.view {
            self.show(view);
        }
        if self.format == OutputFormat::Table {
            ui::toast(&outcome.toast);
        }
        Ok(())
    }
}

pub fn renderer_for(format: OutputFormat) -> Box<dyn OutputRenderer> {
    match format {
        OutputFormat::Table => Box::new(CliRenderer::new()),
        OutputFormat::Html => Box::new(HtmlRenderer::new()),
        OutputFormat::Json => Box::new(JsonRenderer::new()),
    }
}

/// Run a future to completion on a fresh runtime
pub fn block_on<F: Future>(future: F) -> Result<F::Output> {
    let rt = Runtime::new()
        .map_err(|e| CliError::Other(format!("Failed to create async runtime: {e}")))?;
    Ok(rt.block_on(future))
}

/// Explicit path, then `./udc.toml`, then the user configuration directory
pub fn resolve_config_path(explicit: Option<&str>) -> PathBuf {
    if let Some(path) = explicit {
        return PathBuf::from(path);
    }

    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return local;
    }

    dirs::config_dir()
        .map(|dir| dir.join("udc").join(CONFIG_FILE_NAME))
        .filter(|path| path.exists())
        .unwrap_or(local)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_config_path_wins() {
        assert_eq!(
            resolve_config_path(Some("/etc/udc/custom.toml")),
            PathBuf::from("/etc/udc/custom.toml")
        );
    }

    #[test]
    fn test_speaker_follows_voice_config() {
        let context = Context::new(ConsoleConfig::default(), OutputFormat::Table, false).unwrap();
        assert!(matches!(context.controller.speaker(), ConsoleSpeaker::Silent(_)));
        assert!(context.listener.is_none());

        let mut config = ConsoleConfig::default();
        config.voice.speak_command = Some("espeak".to_string());
        config.voice.listen_command = Some("whisper-cli".to_string());
        let context = Context::new(config, OutputFormat::Html, false).unwrap();
        assert!(matches!(context.controller.speaker(), ConsoleSpeaker::Command(_)));
        assert!(context.listener.is_some());
    }
}
