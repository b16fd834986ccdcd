//! Core value and error types for Keyline.
//!
//! This crate provides:
//! - [`Value`] - The converted argument value handed to command actions
//! - [`ValueType`] - The type a parameter converts its tokens into
//! - [`Error`] - Structured dispatch errors with optional context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod types;
pub mod value;

pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use types::ValueType;
pub use value::Value;
