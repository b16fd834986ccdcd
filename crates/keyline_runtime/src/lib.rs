//! REPL, batch scripts, and CLI for Keyline.
//!
//! This crate provides:
//! - [`Repl`] - Interactive read-dispatch-print loop over a [`Dispatcher`]
//! - [`ReplConfig`] - Prompt, banner, history, and script settings
//! - [`LineEditor`] - Swappable line input, backed by rustyline
//! - [`register_demo_commands`] - A sample command set for the CLI
//!
//! [`Dispatcher`]: keyline_dispatch::Dispatcher

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod demo;
pub mod editor;
pub mod repl;

pub use config::{DEFAULT_PROMPT, ReplConfig};
pub use demo::register_demo_commands;
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use repl::{LineOutcome, Repl, ScriptSummary};
