//! Registration and dispatch facade.
//!
//! The registry sits behind a readers-writer lock. Each dispatch takes an
//! O(1) snapshot under the read lock and matches against that, so a
//! registration that starts after the dispatch never affects it, and the
//! action runs without holding the lock.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard};

use keyline_foundation::{Result, Value};

use crate::command::CommandDescriptor;
use crate::matcher::{Matcher, Resolution};
use crate::param::ParamKind;
use crate::registry::CommandRegistry;
use crate::tokenizer::LineTokenizer;

/// Shared command table plus the dispatch entry points.
///
/// Cloning a dispatcher yields another handle to the same registry.
#[derive(Clone, Debug, Default)]
pub struct Dispatcher {
    registry: Arc<RwLock<CommandRegistry>>,
}

impl Dispatcher {
    /// Creates a dispatcher with no commands.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a dispatcher over an already populated registry.
    #[must_use]
    pub fn from_registry(registry: CommandRegistry) -> Self {
        Self {
            registry: Arc::new(RwLock::new(registry)),
        }
    }

    /// Registers a command overload.
    pub fn register(&self, descriptor: CommandDescriptor) -> Arc<CommandDescriptor> {
        log::debug!("registering `{descriptor}`");
        self.registry
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .register(descriptor)
    }

    /// Builds and registers a command overload from its parts.
    pub fn register_command<F>(
        &self,
        keyword: impl Into<String>,
        params: Vec<ParamKind>,
        action: F,
    ) -> Arc<CommandDescriptor>
    where
        F: Fn(&[Value]) + Send + Sync + 'static,
    {
        self.register(CommandDescriptor::new(keyword, params, action))
    }

    /// A point-in-time copy of the registry.
    #[must_use]
    pub fn snapshot(&self) -> CommandRegistry {
        self.read().clone()
    }

    /// Resolves `tokens` to one overload without running its action.
    ///
    /// # Errors
    ///
    /// Returns the matcher's failure when no single overload fits.
    pub fn resolve<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Resolution> {
        let snapshot = self.snapshot();
        Matcher::resolve(&snapshot, tokens)
    }

    /// Resolves `tokens` and runs the winning overload's action.
    ///
    /// # Errors
    ///
    /// Returns the matcher's failure when no single overload fits; the
    /// action is not invoked in that case.
    pub fn dispatch<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Resolution> {
        let resolution = self.resolve(tokens)?;
        resolution.invoke();
        Ok(resolution)
    }

    /// Tokenizes one input line and dispatches it.
    ///
    /// # Errors
    ///
    /// See [`dispatch`](Self::dispatch).
    pub fn dispatch_line(&self, line: &str) -> Result<Resolution> {
        self.dispatch(&LineTokenizer::tokenize(line))
    }

    /// Distinct registered keywords in registration order.
    #[must_use]
    pub fn keywords(&self) -> Vec<String> {
        self.read().keywords()
    }

    /// Signatures of every overload of `keyword`.
    #[must_use]
    pub fn usage(&self, keyword: &str) -> Vec<String> {
        self.read().usage(keyword)
    }

    /// Signatures of every registered overload.
    #[must_use]
    pub fn signatures(&self) -> Vec<String> {
        self.read().iter().map(|cmd| cmd.signature()).collect()
    }

    fn read(&self) -> RwLockReadGuard<'_, CommandRegistry> {
        self.registry.read().unwrap_or_else(PoisonError::into_inner)
    }
}
