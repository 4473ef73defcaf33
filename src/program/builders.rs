//! Construction helpers for program trees
//!
//! Expressions are built with free functions:
//!
//! ```
//! use nassi::program::builders::*;
//!
//! // (n - 1) * 2
//! let expr = mul(sub(var("n"), int(1)), int(2));
//! assert_eq!(expr.render_math(), "(n - 1) · 2");
//! ```
//!
//! Statements are built with the associated constructors on [`Statement`].

use super::ast::*;
use super::interpolation::InterpolatedString;

pub fn int(n: i64) -> Expression {
    Expression::IntLiteral(n)
}

pub fn float(x: f64) -> Expression {
    Expression::FloatLiteral(x)
}

pub fn boolean(b: bool) -> Expression {
    Expression::BoolLiteral(b)
}

pub fn var(name: impl Into<String>) -> Expression {
    Expression::Variable(name.into())
}

/// `array[index]`
pub fn element(array: impl Into<String>, index: impl Into<Expression>) -> Expression {
    Expression::ArrayElement {
        array: array.into(),
        index: Box::new(index.into()),
    }
}

pub fn binary(
    left: impl Into<Expression>,
    op: BinaryOperator,
    right: impl Into<Expression>,
) -> Expression {
    Expression::Binary {
        left: Box::new(left.into()),
        op,
        right: Box::new(right.into()),
    }
}

pub fn add(left: impl Into<Expression>, right: impl Into<Expression>) -> Expression {
    binary(left, BinaryOperator::Add, right)
}

pub fn sub(left: impl Into<Expression>, right: impl Into<Expression>) -> Expression {
    binary(left, BinaryOperator::Subtract, right)
}

pub fn mul(left: impl Into<Expression>, right: impl Into<Expression>) -> Expression {
    binary(left, BinaryOperator::Multiply, right)
}

pub fn div(left: impl Into<Expression>, right: impl Into<Expression>) -> Expression {
    binary(left, BinaryOperator::Divide, right)
}

pub fn modulo(left: impl Into<Expression>, right: impl Into<Expression>) -> Expression {
    binary(left, BinaryOperator::Modulus, right)
}

pub fn gt(left: impl Into<Expression>, right: impl Into<Expression>) -> Expression {
    binary(left, BinaryOperator::GreaterThan, right)
}

pub fn lt(left: impl Into<Expression>, right: impl Into<Expression>) -> Expression {
    binary(left, BinaryOperator::LessThan, right)
}

pub fn eq(left: impl Into<Expression>, right: impl Into<Expression>) -> Expression {
    binary(left, BinaryOperator::Equal, right)
}

pub fn ne(left: impl Into<Expression>, right: impl Into<Expression>) -> Expression {
    binary(left, BinaryOperator::NotEqual, right)
}

pub fn ge(left: impl Into<Expression>, right: impl Into<Expression>) -> Expression {
    binary(left, BinaryOperator::GreaterOrEqual, right)
}

pub fn le(left: impl Into<Expression>, right: impl Into<Expression>) -> Expression {
    binary(left, BinaryOperator::LessOrEqual, right)
}

impl Statement {
    pub fn input(target: impl Into<String>, input_type: impl Into<InputType>) -> Self {
        StatementKind::Input {
            target: target.into(),
            input_type: input_type.into(),
        }
        .into()
    }

    /// Print an interpolated line of text
    pub fn output(text: impl Into<String>) -> Self {
        StatementKind::Output {
            text: InterpolatedString::new(text),
        }
        .into()
    }

    pub fn assign(target: impl Into<AssignTarget>, value: impl Into<Expression>) -> Self {
        StatementKind::Assign {
            target: target.into(),
            value: value.into(),
        }
        .into()
    }

    pub fn if_then(condition: Expression, then_block: Block) -> Self {
        StatementKind::If {
            condition,
            then_block,
            else_block: None,
        }
        .into()
    }

    pub fn if_then_else(condition: Expression, then_block: Block, else_block: Block) -> Self {
        StatementKind::If {
            condition,
            then_block,
            else_block: Some(else_block),
        }
        .into()
    }

    /// Pre-tested loop
    pub fn while_loop(condition: Expression, body: Block) -> Self {
        StatementKind::While {
            condition,
            body,
            label: None,
        }
        .into()
    }

    pub fn labeled_while(label: impl Into<String>, condition: Expression, body: Block) -> Self {
        StatementKind::While {
            condition,
            body,
            label: Some(label.into()),
        }
        .into()
    }

    /// Post-tested loop
    pub fn do_while(body: Block, condition: Expression) -> Self {
        StatementKind::DoWhile {
            body,
            condition,
            label: None,
        }
        .into()
    }

    pub fn labeled_do_while(label: impl Into<String>, body: Block, condition: Expression) -> Self {
        StatementKind::DoWhile {
            body,
            condition,
            label: Some(label.into()),
        }
        .into()
    }

    /// Unconditional loop, left only through `Break`
    pub fn endless_loop(body: Block) -> Self {
        StatementKind::Loop { body, label: None }.into()
    }

    pub fn labeled_loop(label: impl Into<String>, body: Block) -> Self {
        StatementKind::Loop {
            body,
            label: Some(label.into()),
        }
        .into()
    }

    pub fn break_to(label: impl Into<String>) -> Self {
        StatementKind::Break {
            label: label.into(),
        }
        .into()
    }

    pub fn documented(caption: impl Into<String>, block: Block) -> Self {
        StatementKind::DocumentedBlock {
            caption: caption.into(),
            block,
        }
        .into()
    }

    pub fn match_on(value: Expression, arms: Vec<MatchArm>) -> Self {
        StatementKind::Match { value, arms }.into()
    }

    /// Keep this statement out of the diagram
    pub fn hidden(mut self) -> Self {
        self.hidden_from_diagram = true;
        self
    }
}
