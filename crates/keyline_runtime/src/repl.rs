//! The main REPL implementation.

use crate::config::ReplConfig;
use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use keyline_dispatch::{Dispatcher, LineTokenizer, Resolution};
use keyline_foundation::{Error, ErrorContext, Result};
use std::fs;
use std::path::Path;

/// Words the REPL handles itself before consulting the registry.
const BUILTINS: [&str; 3] = ["help", "exit", "quit"];

/// What happened to one line of input.
#[derive(Debug)]
pub enum LineOutcome {
    /// Blank line or `#` comment.
    Skipped,
    /// `help` output, one signature per line.
    Help(Vec<String>),
    /// `exit` or `quit`.
    Exit,
    /// A command ran.
    Dispatched(Resolution),
}

/// Counts from one script run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptSummary {
    /// Lines that dispatched a command.
    pub executed: usize,
    /// Lines that failed to dispatch.
    pub failed: usize,
}

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Commands available to the user.
    dispatcher: Dispatcher,

    /// Prompt, banner, and script settings.
    config: ReplConfig,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(dispatcher: Dispatcher, config: ReplConfig) -> Result<Self> {
        let editor = RustylineEditor::new(config.history_size)?;
        Ok(Self::with_editor(editor, dispatcher, config))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(editor: E, dispatcher: Dispatcher, config: ReplConfig) -> Self {
        Self {
            editor,
            dispatcher,
            config,
        }
    }

    /// Returns the dispatcher commands are run through.
    #[must_use]
    pub const fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Returns the line editor.
    #[must_use]
    pub const fn editor(&self) -> &E {
        &self.editor
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &ReplConfig {
        &self.config
    }

    /// Runs the REPL loop until EOF or `exit`.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally.
    pub fn run(&mut self) -> Result<()> {
        if self.config.show_banner {
            self.print_banner();
        }

        while self.read_eval_print()? {}

        println!("\nGoodbye!");
        Ok(())
    }

    /// Executes one read-eval-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_eval_print(&mut self) -> Result<bool> {
        // Actions may register commands, so refresh every round
        let mut keywords = self.dispatcher.keywords();
        keywords.extend(BUILTINS.iter().map(ToString::to_string));
        self.editor.set_keywords(keywords);

        let line = match self.editor.read_line(&self.config.prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => {
                println!();
                return Ok(true);
            }
            ReadResult::Eof => return Ok(false),
        };

        if line.trim().is_empty() {
            return Ok(true);
        }
        self.editor.add_history(&line);

        match self.execute_line(&line) {
            Ok(LineOutcome::Exit) => return Ok(false),
            Ok(LineOutcome::Help(lines)) => {
                for line in lines {
                    println!("  {line}");
                }
            }
            Ok(LineOutcome::Skipped | LineOutcome::Dispatched(_)) => {}
            Err(e) => self.print_error(&e),
        }

        Ok(true)
    }

    /// Executes a single line: a built-in, a comment, or a command.
    ///
    /// # Errors
    ///
    /// Returns the dispatch failure if the line names an unknown command or
    /// its arguments fit no overload.
    pub fn execute_line(&self, line: &str) -> Result<LineOutcome> {
        let tokens = LineTokenizer::tokenize(line);
        let Some(first) = tokens.first() else {
            return Ok(LineOutcome::Skipped);
        };
        if first.starts_with('#') {
            return Ok(LineOutcome::Skipped);
        }

        match (first.as_str(), tokens.len()) {
            ("exit" | "quit", 1) => return Ok(LineOutcome::Exit),
            ("help", 1) => return Ok(LineOutcome::Help(self.dispatcher.signatures())),
            ("help", 2) => {
                let keyword = &tokens[1];
                let usage = self.dispatcher.usage(keyword);
                if usage.is_empty() {
                    return Err(Error::command_not_found(keyword.as_str()));
                }
                return Ok(LineOutcome::Help(usage));
            }
            _ => {}
        }

        let resolution = self.dispatcher.dispatch(&tokens)?;
        log::info!("executed `{}`", resolution.signature());
        Ok(LineOutcome::Dispatched(resolution))
    }

    /// Executes every line of a script file.
    ///
    /// Failing lines are reported with their path and line number. With
    /// `stop_on_error` set the first failure is returned instead; otherwise
    /// the run continues and the failure is counted. `exit` ends the script.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, or the first failing
    /// line when `stop_on_error` is set.
    pub fn execute_script(&self, path: &Path) -> Result<ScriptSummary> {
        let source = path.display().to_string();
        let contents =
            fs::read_to_string(path).map_err(|e| Error::io(source.clone(), e.to_string()))?;
        log::info!("running script {source}");

        let mut summary = ScriptSummary::default();
        for (index, line) in contents.lines().enumerate() {
            match self.execute_line(line) {
                Ok(LineOutcome::Exit) => break,
                Ok(LineOutcome::Help(lines)) => {
                    for line in lines {
                        println!("  {line}");
                    }
                }
                Ok(LineOutcome::Dispatched(_)) => summary.executed += 1,
                Ok(LineOutcome::Skipped) => {}
                Err(e) => {
                    let e = e.with_context(
                        ErrorContext::new()
                            .with_source(source.as_str())
                            .with_line(index + 1)
                            .with_input(line.trim()),
                    );
                    if self.config.stop_on_error {
                        return Err(e);
                    }
                    self.print_error(&e);
                    summary.failed += 1;
                }
            }
        }

        Ok(summary)
    }

    /// Prints the welcome banner.
    #[allow(clippy::unused_self)]
    fn print_banner(&self) {
        println!("\x1b[1;36mKeyline\x1b[0m v{}", env!("CARGO_PKG_VERSION"));
        println!("Type `help` to list commands, `exit` or Ctrl+D to leave.\n");
    }

    /// Prints an error message, with context when available.
    #[allow(clippy::unused_self)]
    fn print_error(&self, error: &Error) {
        let label = if error.is_internal() {
            "Internal error"
        } else {
            "Error"
        };
        eprintln!("\x1b[31m{label}: {error}\x1b[0m");
        if let Some(context) = &error.context {
            eprintln!("  {context}");
        }
    }
}
