//! Command registry.
//!
//! An append-only, registration-ordered collection of command descriptors.
//! Overloads are grouped implicitly by keyword. The backing store is a
//! persistent vector, so cloning a registry (taking a snapshot for one
//! dispatch) is O(1) and later registrations never show up in the snapshot.

use std::sync::Arc;

use keyline_foundation::Value;

use crate::command::CommandDescriptor;
use crate::param::ParamKind;

/// Registry of all defined commands.
#[derive(Clone, Debug, Default)]
pub struct CommandRegistry {
    commands: im::Vector<Arc<CommandDescriptor>>,
}

impl CommandRegistry {
    /// Creates a new empty command registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a command. Duplicates are kept; ties are settled at match time.
    pub fn register(&mut self, descriptor: CommandDescriptor) -> Arc<CommandDescriptor> {
        let descriptor = Arc::new(descriptor);
        self.commands.push_back(Arc::clone(&descriptor));
        descriptor
    }

    /// Builds and registers a command from its parts.
    pub fn register_command<F>(
        &mut self,
        keyword: impl Into<String>,
        params: Vec<ParamKind>,
        action: F,
    ) -> Arc<CommandDescriptor>
    where
        F: Fn(&[Value]) + Send + Sync + 'static,
    {
        self.register(CommandDescriptor::new(keyword, params, action))
    }

    /// All overloads registered under `keyword`, in registration order.
    #[must_use]
    pub fn lookup(&self, keyword: &str) -> Vec<Arc<CommandDescriptor>> {
        self.commands
            .iter()
            .filter(|cmd| cmd.keyword() == keyword)
            .cloned()
            .collect()
    }

    /// Returns true if at least one command answers to `keyword`.
    #[must_use]
    pub fn contains(&self, keyword: &str) -> bool {
        self.commands.iter().any(|cmd| cmd.keyword() == keyword)
    }

    /// Distinct keywords in order of first registration.
    #[must_use]
    pub fn keywords(&self) -> Vec<String> {
        let mut keywords: Vec<String> = Vec::new();
        for cmd in &self.commands {
            if !keywords.iter().any(|k| k == cmd.keyword()) {
                keywords.push(cmd.keyword().to_string());
            }
        }
        keywords
    }

    /// Signatures of every overload of `keyword`.
    #[must_use]
    pub fn usage(&self, keyword: &str) -> Vec<String> {
        self.lookup(keyword)
            .iter()
            .map(|cmd| cmd.signature())
            .collect()
    }

    /// Returns all registered commands.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<CommandDescriptor>> {
        self.commands.iter()
    }

    /// Number of registered commands, overloads counted separately.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns true if nothing has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
