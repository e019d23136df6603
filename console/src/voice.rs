//! Voice input and output through external speech programs

use crate::config::VoiceConfig;
use crate::error::{ConsoleError, Result};
use crate::traits::{Listener, Speaker};
use std::io::Write;
use std::process::{Command, Stdio};

/// Words per minute a speech program uses at rate 1.0
pub const BASE_WORDS_PER_MINUTE: f32 = 175.0;

/// Placeholder in `speak_args` replaced by the words-per-minute rate
pub const RATE_PLACEHOLDER: &str = "{rate}";

/// Text to be spoken and the relative rate to speak it at
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    pub rate: f32,
}

impl Utterance {
    pub fn new<S: Into<String>>(text: S, rate: f32) -> Self {
        Self {
            text: text.into(),
            rate,
        }
    }

    /// Rate converted to words per minute, rounded
    pub fn words_per_minute(&self) -> u32 {
        (BASE_WORDS_PER_MINUTE * self.rate).round().max(1.0) as u32
    }
}

/// Append a dictated transcript to a query, separated by one space
pub fn append_transcript(query: &str, transcript: &str) -> String {
    let transcript = transcript.trim();
    if query.is_empty() {
        transcript.to_string()
    } else if transcript.is_empty() {
        query.to_string()
    } else {
        format!("{query} {transcript}")
    }
}

/// Run a speech-to-text listener and append what it heard to `query`
pub fn dictate<L: Listener>(listener: &L, query: &str) -> Result<String> {
    let transcript = listener
        .listen()
        .map_err(|_| ConsoleError::voice("Voice recognition failed"))?;
    Ok(append_transcript(query, &transcript))
}

/// Speaker that pipes text into a text-to-speech program
#[derive(Debug, Clone)]
pub struct CommandSpeaker {
    program: String,
    args: Vec<String>,
}

impl CommandSpeaker {
    pub fn new<S: Into<String>>(program: S, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Speaker for the configured command, if any
    pub fn from_config(config: &VoiceConfig) -> Option<Self> {
        config
            .speak_command
            .as_ref()
            .filter(|command| !command.trim().is_empty())
            .map(|command| Self::new(command.trim(), config.speak_args.clone()))
    }

    /// Arguments with the rate placeholder filled in
    pub fn args_for(&self, utterance: &Utterance) -> Vec<String> {
        let rate = utterance.words_per_minute().to_string();
        self.args
            .iter()
            .map(|arg| arg.replace(RATE_PLACEHOLDER, &rate))
            .collect()
    }
}

impl Speaker for CommandSpeaker {
    fn speak(&self, utterance: &Utterance) -> Result<()> {
        let mut child = Command::new(&self.program)
            .args(self.args_for(utterance))
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| ConsoleError::voice(format!("Failed to start '{}': {}", self.program, e)))?;

        if let Some(mut stdin) = child.stdin.take() {
            if let Err(error) = stdin.write_all(utterance.text.as_bytes()) {
                drop(stdin);
                let _ = child.kill();
                let _ = child.wait();
                return Err(ConsoleError::voice(format!(
                    "Failed to send text to '{}': {}",
                    self.program, error
                )));
            }
        }

        let status = child.wait()?;
        if status.success() {
            Ok(())
        } else {
            Err(ConsoleError::voice(format!("'{}' exited with {}", self.program, status)))
        }
    }
}

/// Speaker used when no speech program is configured
#[derive(Debug, Clone, Default)]
pub struct SilentSpeaker;

impl Speaker for SilentSpeaker {
    fn speak(&self, _utterance: &Utterance) -> Result<()> {
        Err(ConsoleError::voice(
            "No speak_command configured; set [voice] speak_command in the config file",
        ))
    }
}

/// Listener that reads a transcript from a speech-to-text program's stdout
#[derive(Debug, Clone)]
pub struct CommandListener {
    program: String,
    args: Vec<String>,
}

impl CommandListener {
    pub fn new<S: Into<String>>(program: S, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Listener for the configured command, if any
    pub fn from_config(config: &VoiceConfig) -> Option<Self> {
        config
            .listen_command
            .as_ref()
            .filter(|command| !command.trim().is_empty())
            .map(|command| Self::new(command.trim(), config.listen_args.clone()))
    }
}

impl Listener for CommandListener {
    fn listen(&self) -> Result<String> {
        let output = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .map_err(|e| ConsoleError::voice(format!("Failed to start '{}': {}", self.program, e)))?;

        if !output.status.success() {
            return Err(ConsoleError::voice(format!(
                "'{}' exited with {}",
                self.program, output.status
            )));
        }

        let transcript = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if transcript.is_empty() {
            return Err(ConsoleError::voice("No speech recognized"));
        }
        Ok(transcript)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedListener(Option<&'static str>);

    impl Listener for FixedListener {
        fn listen(&self) -> Result<String> {
            self.0
                .map(str::to_string)
                .ok_or_else(|| ConsoleError::voice("microphone unavailable"))
        }
    }

    #[test]
    fn test_append_transcript() {
        assert_eq!(append_transcript("", "top customers"), "top customers");
        assert_eq!(append_transcript("show", " open tickets "), "show open tickets");
        assert_eq!(append_transcript("show", ""), "show");
    }

    #[test]
    fn test_dictate_maps_failures() {
        assert_eq!(dictate(&FixedListener(Some("by revenue")), "rank").unwrap(), "rank by revenue");

        let error = dictate(&FixedListener(None), "rank").unwrap_err();
        assert_eq!(error.notice(), "Voice error: Voice recognition failed");
    }

    #[test]
    fn test_rate_placeholder() {
        let speaker = CommandSpeaker::new("espeak", vec!["-s".to_string(), "{rate}".to_string()]);
        let args = speaker.args_for(&Utterance::new("hi", 0.95));
        assert_eq!(args, vec!["-s".to_string(), "166".to_string()]);
    }

    #[test]
    fn test_from_config() {
        let mut config = VoiceConfig::default();
        assert!(CommandSpeaker::from_config(&config).is_none());
        assert!(CommandListener::from_config(&config).is_none());

        config.speak_command = Some("  ".to_string());
        assert!(CommandSpeaker::from_config(&config).is_none());

        config.speak_command = Some("say".to_string());
        config.listen_command = Some("listen".to_string());
        assert!(CommandSpeaker::from_config(&config).is_some());
        assert!(CommandListener::from_config(&config).is_some());
    }

    #[cfg(unix)]
    #[test]
    fn test_speaker_fails_when_program_ignores_stdin() {
        // `true` exits without reading, so the pipe closes mid-write
        let speaker = CommandSpeaker::new("true", Vec::new());
        let text = "word ".repeat(200_000);

        let result = speaker.speak(&Utterance::new(text, 1.0));
        match result {
            Err(ConsoleError::Voice { message }) => assert!(message.starts_with("Failed to send text")),
            other => panic!("Expected voice error, got {other:?}"),
        }
    }

    #[test]
    fn test_silent_speaker_errors() {
        let result = SilentSpeaker.speak(&Utterance::new("text", 1.0));
        assert!(matches!(result, Err(ConsoleError::Voice { .. })));
    }
}
