//! Textual rendering of expressions
//!
//! Expressions are rendered in one of two [`Notation`]s:
//!
//! - [`Notation::Plain`]: unicode infix math, e.g. `(a + b) · c`
//! - [`Notation::Latex`]: LaTeX math-mode source, e.g. `(\texttt{a} + \texttt{b}) \cdot \texttt{c}`
//!
//! Both use the operator symbols from [`BinaryOperator`] and the same parenthesization
//! rule: a child binary expression is parenthesized iff its precedence is strictly lower
//! than its parent's.

use super::ast::{BinaryOperator, Expression};
use crate::memory::value::format_float;
use serde::{Deserialize, Serialize};

/// Target notation for rendered text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Notation {
    #[default]
    Plain,
    Latex,
}

impl Notation {
    pub fn operator(self, op: BinaryOperator) -> &'static str {
        match self {
            Notation::Plain => op.math_symbol(),
            Notation::Latex => op.latex_symbol(),
        }
    }

    /// Render a variable name as a typewriter token
    pub fn identifier(self, name: &str) -> String {
        match self {
            Notation::Plain => name.to_string(),
            Notation::Latex => format!(r"\texttt{{{}}}", escape_latex(name)),
        }
    }

    /// Render free text (captions, labels)
    pub fn text(self, text: &str) -> String {
        match self {
            Notation::Plain => text.to_string(),
            Notation::Latex => escape_latex(text),
        }
    }

    /// Render an inline placeholder token inside free text
    pub fn placeholder(self, token: &str) -> String {
        match self {
            Notation::Plain => format!("`{}`", token),
            Notation::Latex => format!(r"\texttt{{{}}}", escape_latex(token)),
        }
    }

    /// Wrap rendered math so it can be embedded in free text
    pub fn math(self, math: &str) -> String {
        match self {
            Notation::Plain => math.to_string(),
            Notation::Latex => format!("${}$", math),
        }
    }

    fn float(self, x: f64) -> String {
        match self {
            Notation::Plain => format_float(x),
            // Integral floats drop the fraction; decimal comma
            Notation::Latex => {
                if x.is_finite() && x.fract() == 0.0 {
                    format!("{:.0}", x)
                } else {
                    x.to_string().replace('.', "{,}")
                }
            }
        }
    }

    fn boolean(self, b: bool) -> String {
        match self {
            Notation::Plain => b.to_string(),
            Notation::Latex => format!(r"\texttt{{{}}}", b),
        }
    }
}

/// Escape the characters LaTeX treats specially in running text
pub fn escape_latex(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '_' | '%' | '&' | '#' | '$' | '{' | '}' => {
                escaped.push('\\');
                escaped.push(ch);
            }
            '\\' => escaped.push_str(r"\textbackslash{}"),
            '^' => escaped.push_str(r"\textasciicircum{}"),
            '~' => escaped.push_str(r"\textasciitilde{}"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

impl Expression {
    /// Render in the given notation
    pub fn render(&self, notation: Notation) -> String {
        match self {
            Expression::IntLiteral(n) => n.to_string(),
            Expression::FloatLiteral(x) => notation.float(*x),
            Expression::BoolLiteral(b) => notation.boolean(*b),
            Expression::Variable(name) => notation.identifier(name),
            Expression::ArrayElement { array, index } => {
                format!("{}[{}]", notation.identifier(array), index.render(notation))
            }
            Expression::Binary { left, op, right } => {
                let left_text = Self::render_operand(left, *op, notation);
                let right_text = Self::render_operand(right, *op, notation);
                format!("{} {} {}", left_text, notation.operator(*op), right_text)
            }
        }
    }

    /// Plain infix rendering, e.g. `(a + b) · c`
    pub fn render_math(&self) -> String {
        self.render(Notation::Plain)
    }

    /// LaTeX math-mode rendering
    pub fn to_latex(&self) -> String {
        self.render(Notation::Latex)
    }

    fn render_operand(child: &Expression, parent: BinaryOperator, notation: Notation) -> String {
        match child {
            Expression::Binary { op, .. } if op.precedence() < parent.precedence() => {
                format!("({})", child.render(notation))
            }
            _ => child.render(notation),
        }
    }
}
