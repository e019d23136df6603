/// Holder for the most recent analysis text.
///
/// Written by the renderer when it shows an analysis, read by the speak
/// action. Speaking stays disabled until the first analysis arrives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisSlot {
    last: Option<String>,
    speak_enabled: bool,
}

impl AnalysisSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored analysis and enable speaking
    pub fn store<S: Into<String>>(&mut self, text: S) {
        self.last = Some(text.into());
        self.speak_enabled = true;
    }

    /// Last stored analysis, if it is non-empty
    pub fn last(&self) -> Option<&str> {
        self.last.as_deref().filter(|text| !text.is_empty())
    }

    pub fn speak_enabled(&self) -> bool {
        self.speak_enabled
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
