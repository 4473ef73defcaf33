//! Nassi–Shneiderman diagram symbols
//!
//! A [`Symbol`] tree is the complete interface between the generator and whatever
//! renders the diagram. Texts inside symbols are already rendered in the configured
//! [`Notation`](crate::program::render::Notation).

use serde::{Deserialize, Serialize};

/// A captioned sub-diagram, used by the selective symbols
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    pub caption: String,
    pub body: Box<Symbol>,
}

impl Branch {
    pub fn new(caption: impl Into<String>, body: Symbol) -> Self {
        Branch {
            caption: caption.into(),
            body: Box::new(body),
        }
    }
}

/// Diagram symbols
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "symbol", rename_all = "snake_case")]
pub enum Symbol {
    /// A single action box
    Imperative { text: String },
    /// Selection with only a "yes" branch
    MonadicSelective { condition: String, branch: Branch },
    /// Selection with "yes" and "no" branches
    DyadicSelective {
        condition: String,
        yes: Branch,
        no: Branch,
    },
    /// Multi-way selection, one branch per case
    MultipleExclusiveSelective {
        discriminant: String,
        branches: Vec<Branch>,
    },
    PreTestedIteration { header: String, body: Box<Symbol> },
    PostTestedIteration { footer: String, body: Box<Symbol> },
    ContinuousIteration { body: Box<Symbol> },
    /// Captioned grouping of a sub-diagram
    Block { caption: String, body: Box<Symbol> },
    /// Exit from the named loop
    Termination { label: String },
    /// Symbols stacked top to bottom
    Serial { children: Vec<Symbol> },
}

impl Symbol {
    pub fn imperative(text: impl Into<String>) -> Self {
        Symbol::Imperative { text: text.into() }
    }

    /// Number of symbols in this tree, counting `self` but not `Serial` wrappers
    pub fn count(&self) -> usize {
        match self {
            Symbol::Imperative { .. } | Symbol::Termination { .. } => 1,
            Symbol::MonadicSelective { branch, .. } => 1 + branch.body.count(),
            Symbol::DyadicSelective { yes, no, .. } => 1 + yes.body.count() + no.body.count(),
            Symbol::MultipleExclusiveSelective { branches, .. } => {
                1 + branches.iter().map(|b| b.body.count()).sum::<usize>()
            }
            Symbol::PreTestedIteration { body, .. }
            | Symbol::PostTestedIteration { body, .. }
            | Symbol::ContinuousIteration { body }
            | Symbol::Block { body, .. } => 1 + body.count(),
            Symbol::Serial { children } => children.iter().map(Symbol::count).sum(),
        }
    }
}

/// A complete diagram, ready to hand to a renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagram {
    pub root: Symbol,
}

impl Diagram {
    pub fn new(root: Symbol) -> Self {
        Diagram { root }
    }

    pub fn into_root(self) -> Symbol {
        self.root
    }
}
