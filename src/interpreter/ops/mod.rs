//! Operator implementations
//!
//! - [`binary`]: arithmetic and comparison on evaluated operands
//! - [`assign`]: variable and array-element assignment

pub mod assign;
pub mod binary;
