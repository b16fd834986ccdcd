//! Keyline - Grammar-driven command dispatcher
//!
//! This crate re-exports all layers of the Keyline system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: keyline_runtime    - REPL, batch scripts, CLI
//! Layer 1: keyline_dispatch   - Parameters, registry, overload matching
//! Layer 0: keyline_foundation - Core types (Value, ValueType, Error)
//! ```

pub use keyline_dispatch as dispatch;
pub use keyline_foundation as foundation;
pub use keyline_runtime as runtime;
