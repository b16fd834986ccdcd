//! Grammar-driven command dispatch.
//!
//! This crate matches one tokenized input line against a library of
//! overloaded commands and runs the single overload that fits.
//!
//! # Architecture
//!
//! ```text
//! "scoreboard players add steve 5"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → ["scoreboard", "players", "add", "steve", "5"]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ REGISTRY        │  → every overload registered under "scoreboard"
//! │ LOOKUP          │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ CANDIDATE       │  → overloads whose parameters accept the tokens
//! │ NARROWING       │    (scoreboard objectives ... drops out at "players")
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ PRIORITY        │  → one winner, or AmbiguousCommand
//! │ TIE-BREAK       │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ ACTION          │  → action(["players", "add", "steve", 5])
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`param`] - Parameter kinds: validation, conversion, priority
//! - [`command`] - Command descriptors
//! - [`registry`] - Append-only command registry
//! - [`matcher`] - Overload resolution
//! - [`dispatcher`] - Shared registry with dispatch entry points
//! - [`tokenizer`] - Whitespace tokenization of input lines

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod command;
pub mod dispatcher;
pub mod matcher;
pub mod param;
pub mod registry;
pub mod tokenizer;

// Re-export main types for convenience
pub use command::{Action, CommandDescriptor};
pub use dispatcher::Dispatcher;
pub use matcher::{Matcher, Resolution};
pub use param::ParamKind;
pub use registry::CommandRegistry;
pub use tokenizer::LineTokenizer;
