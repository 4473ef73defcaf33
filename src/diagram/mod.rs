//! Nassi–Shneiderman diagram generation
//!
//! This module turns a statement tree into an abstract symbol tree:
//! - [`symbols`]: The symbol vocabulary handed to external renderers
//! - [`generator`]: The statement-to-symbol translation
//! - [`config`]: Notation and caption settings
//!
//! Turning symbols into a document (TikZ, SVG, ...) is left to the renderer.

pub mod config;
pub mod generator;
pub mod symbols;

pub use config::{DiagramConfig, DiagramLabels, ENGLISH_LABELS, GERMAN_LABELS};
pub use generator::DiagramGenerator;
pub use symbols::{Branch, Diagram, Symbol};
