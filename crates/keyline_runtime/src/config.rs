//! Configuration for the REPL and batch runner.

/// Default prompt, matching the classic console input prompt.
pub const DEFAULT_PROMPT: &str = ">>> ";

/// Configuration for a [`Repl`](crate::Repl).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplConfig {
    /// Prompt printed before each input line.
    pub prompt: String,

    /// Whether to print the welcome banner on start.
    pub show_banner: bool,

    /// Number of lines kept in the editor history.
    pub history_size: usize,

    /// Abort a script at its first failing line.
    pub stop_on_error: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            show_banner: true,
            history_size: 1000,
            stop_on_error: false,
        }
    }
}

impl ReplConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration for unattended script runs: no banner, and
    /// the first failure aborts.
    #[must_use]
    pub fn batch() -> Self {
        Self {
            show_banner: false,
            stop_on_error: true,
            ..Self::default()
        }
    }

    /// Builder method to set the prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Builder method to show or hide the banner.
    #[must_use]
    pub fn with_banner(mut self, show: bool) -> Self {
        self.show_banner = show;
        self
    }

    /// Builder method to set history size.
    #[must_use]
    pub fn with_history_size(mut self, size: usize) -> Self {
        self.history_size = size;
        self
    }

    /// Builder method to abort scripts on the first failure.
    #[must_use]
    pub fn with_stop_on_error(mut self, stop: bool) -> Self {
        self.stop_on_error = stop;
        self
    }
}
