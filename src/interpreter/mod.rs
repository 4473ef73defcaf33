//! Pseudocode interpreter execution engine
//!
//! This module provides the core execution logic:
//! - [`engine`]: Main interpreter with statement dispatch
//! - [`errors`]: Runtime error types
//! - [`terminal`]: Captured program output
//!
//! # Execution Model
//!
//! The interpreter walks the statement tree and executes statements one at a time
//! against a single flat [`Environment`](crate::memory::Environment). Each run owns
//! its environment, output, loop-label stack and pending-break register; nothing is
//! shared between runs.
//!
//! # Tracing
//!
//! Every executed statement emits a `trace` event; labeled loop entry and break
//! handling emit `debug` events. Install a `tracing` subscriber to see them.

pub mod engine;
pub mod errors;
pub mod expressions;
mod jumps;
mod loops;
pub mod ops;
mod statements;
pub mod terminal;

pub use engine::Interpreter;
pub use errors::RuntimeError;
