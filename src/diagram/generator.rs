//! Statement tree to diagram translation
//!
//! The generator is a pure structural map: it never evaluates an expression, it only
//! renders expressions and templates as text in the configured notation.
//!
//! # Block collapsing
//!
//! Statements flagged `hidden_from_diagram` are dropped first. A block with exactly one
//! remaining statement becomes that statement's symbol; any other block becomes a
//! [`Symbol::Serial`] of the remaining symbols. The rule applies to every nested block.

use super::config::DiagramConfig;
use super::symbols::{Branch, Symbol};
use crate::program::ast::{
    ArrayLength, AssignTarget, BinaryOperator, InputType, Statement, StatementKind,
};
use crate::program::render::Notation;

/// Builds diagram symbols for statements
pub struct DiagramGenerator<'a> {
    config: &'a DiagramConfig,
}

impl<'a> DiagramGenerator<'a> {
    pub fn new(config: &'a DiagramConfig) -> Self {
        DiagramGenerator { config }
    }

    fn notation(&self) -> Notation {
        self.config.notation
    }

    /// Generate the symbol for a block, applying the collapsing rule
    pub fn generate_block(&self, block: &[Statement]) -> Symbol {
        let mut children: Vec<Symbol> = block
            .iter()
            .filter(|stmt| !stmt.hidden_from_diagram)
            .map(|stmt| self.generate(stmt))
            .collect();

        if children.len() == 1 {
            if let Some(only) = children.pop() {
                return only;
            }
        }
        Symbol::Serial { children }
    }

    /// Generate the symbol for one statement, ignoring its hidden flag
    pub fn generate(&self, stmt: &Statement) -> Symbol {
        let n = self.notation();
        let labels = &self.config.labels;

        match &stmt.kind {
            StatementKind::Input { target, input_type } => {
                let mut text = format!("{}: {}", labels.input, n.identifier(target));
                if let InputType::Array(array_type) = input_type {
                    let length = match &array_type.length {
                        ArrayLength::Fixed(len) => len.to_string(),
                        ArrayLength::Variable(name) => n.identifier(name),
                    };
                    text.push_str(&format!("[{}]", length));
                }
                Symbol::imperative(text)
            }

            StatementKind::Output { text } => {
                Symbol::imperative(format!("{}: {}", labels.output, text.render(n)))
            }

            StatementKind::Assign { target, value } => {
                let target = match target {
                    AssignTarget::Variable(name) => n.identifier(name),
                    AssignTarget::Element { array, index } => {
                        format!("{}[{}]", n.identifier(array), index.render(n))
                    }
                };
                Symbol::imperative(n.math(&format!("{} := {}", target, value.render(n))))
            }

            StatementKind::If {
                condition,
                then_block,
                else_block,
            } => {
                let condition = format!("{}?", n.math(&condition.render(n)));
                let yes = Branch::new(labels.yes.clone(), self.generate_block(then_block));
                match else_block {
                    Some(else_block) if !else_block.is_empty() => Symbol::DyadicSelective {
                        condition,
                        yes,
                        no: Branch::new(labels.no.clone(), self.generate_block(else_block)),
                    },
                    _ => Symbol::MonadicSelective {
                        condition,
                        branch: yes,
                    },
                }
            }

            StatementKind::While {
                condition,
                body,
                label,
            } => Symbol::PreTestedIteration {
                header: self.loop_caption(label.as_deref(), &condition.render(n)),
                body: Box::new(self.generate_block(body)),
            },

            StatementKind::DoWhile {
                body,
                condition,
                label,
            } => Symbol::PostTestedIteration {
                footer: self.loop_caption(label.as_deref(), &condition.render(n)),
                body: Box::new(self.generate_block(body)),
            },

            // TODO: show the label once renderers accept a caption on continuous iterations
            StatementKind::Loop { body, .. } => Symbol::ContinuousIteration {
                body: Box::new(self.generate_block(body)),
            },

            StatementKind::Break { label } => Symbol::Termination {
                label: n.text(label),
            },

            StatementKind::DocumentedBlock { caption, block } => Symbol::Block {
                caption: n.text(caption),
                body: Box::new(self.generate_block(block)),
            },

            StatementKind::Match { value, arms } => Symbol::MultipleExclusiveSelective {
                discriminant: n.math(&value.render(n)),
                branches: arms
                    .iter()
                    .map(|arm| {
                        let op = n.operator(BinaryOperator::from(arm.operator));
                        let caption = n.math(&format!("{} {}", op, arm.compare.render(n)));
                        Branch::new(caption, self.generate_block(&arm.body))
                    })
                    .collect(),
            },
        }
    }

    /// `label: condition`, or just the condition for unlabeled loops
    fn loop_caption(&self, label: Option<&str>, condition: &str) -> String {
        let n = self.notation();
        match label {
            Some(label) => format!("{}: {}", n.text(label), n.math(condition)),
            None => n.math(condition),
        }
    }
}
