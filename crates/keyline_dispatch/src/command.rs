//! Command descriptors.
//!
//! A descriptor binds a keyword and an ordered parameter list to the action
//! invoked when an input line resolves to it.

use std::fmt;
use std::sync::Arc;

use keyline_foundation::Value;

use crate::param::ParamKind;

/// Callable invoked with the converted arguments of a matched command.
pub type Action = Arc<dyn Fn(&[Value]) + Send + Sync>;

/// A registered command overload. Immutable once built.
#[derive(Clone)]
pub struct CommandDescriptor {
    keyword: String,
    params: Vec<ParamKind>,
    action: Action,
}

impl CommandDescriptor {
    /// Creates a descriptor for `keyword` with the given parameters and action.
    #[must_use]
    pub fn new<F>(keyword: impl Into<String>, params: Vec<ParamKind>, action: F) -> Self
    where
        F: Fn(&[Value]) + Send + Sync + 'static,
    {
        Self::with_action(keyword, params, Arc::new(action))
    }

    /// Creates a descriptor that shares an existing action.
    #[must_use]
    pub fn with_action(keyword: impl Into<String>, params: Vec<ParamKind>, action: Action) -> Self {
        Self {
            keyword: keyword.into(),
            params,
            action,
        }
    }

    /// The keyword (first token) this command answers to.
    #[must_use]
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// The declared parameters, in order.
    #[must_use]
    pub fn params(&self) -> &[ParamKind] {
        &self.params
    }

    /// Number of declared parameters.
    ///
    /// Arrays consume a variable number of tokens, so this is not the
    /// number of argument tokens the command accepts.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Keyword followed by each parameter's display form.
    #[must_use]
    pub fn signature(&self) -> String {
        self.to_string()
    }

    /// Runs the action with already converted arguments.
    pub fn invoke(&self, args: &[Value]) {
        (self.action)(args);
    }
}

impl fmt::Display for CommandDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword)?;
        for param in &self.params {
            write!(f, " {param}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for CommandDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandDescriptor")
            .field("keyword", &self.keyword)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}
