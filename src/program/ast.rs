// Syntax tree definitions for pseudocode programs

use super::interpolation::InterpolatedString;
use crate::memory::Value;
use std::fmt;

/// A sequence of statements executed (and drawn) in order
pub type Block = Vec<Statement>;

/// Scalar types an `Input` statement can declare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Integer,
    Float,
    Boolean,
}

impl PrimitiveType {
    /// Check whether a value has exactly this type
    pub fn admits(self, value: &Value) -> bool {
        matches!(
            (self, value),
            (PrimitiveType::Integer, Value::Integer(_))
                | (PrimitiveType::Float, Value::Float(_))
                | (PrimitiveType::Boolean, Value::Boolean(_))
        )
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PrimitiveType::Integer => "integer",
            PrimitiveType::Float => "float",
            PrimitiveType::Boolean => "boolean",
        };
        f.write_str(name)
    }
}

/// Length of an input array: a constant, or the name of a variable holding it
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ArrayLength {
    Fixed(usize),
    Variable(String),
}

/// Array descriptor used by `Input` to validate incoming arrays
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArrayType {
    pub element: PrimitiveType,
    pub length: ArrayLength,
}

impl ArrayType {
    pub fn fixed(element: PrimitiveType, length: usize) -> Self {
        ArrayType {
            element,
            length: ArrayLength::Fixed(length),
        }
    }

    pub fn sized_by(element: PrimitiveType, variable: impl Into<String>) -> Self {
        ArrayType {
            element,
            length: ArrayLength::Variable(variable.into()),
        }
    }
}

/// Declared type of an `Input` target
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum InputType {
    Primitive(PrimitiveType),
    Array(ArrayType),
}

impl From<PrimitiveType> for InputType {
    fn from(t: PrimitiveType) -> Self {
        InputType::Primitive(t)
    }
}

impl From<ArrayType> for InputType {
    fn from(t: ArrayType) -> Self {
        InputType::Array(t)
    }
}

impl fmt::Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputType::Primitive(t) => write!(f, "{}", t),
            InputType::Array(ArrayType {
                element,
                length: ArrayLength::Fixed(n),
            }) => write!(f, "array of {} {}s", n, element),
            InputType::Array(ArrayType {
                element,
                length: ArrayLength::Variable(name),
            }) => write!(f, "array of '{}' {}s", name, element),
        }
    }
}

/// Binary operators
///
/// Each operator carries its evaluation rule (see `interpreter::ops::binary`) and its
/// display symbols, so execution and rendering always agree on what an expression means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    // Arithmetic
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulus,
    // Comparison
    GreaterThan,
    LessThan,
    Equal,
    NotEqual,
    GreaterOrEqual,
    LessOrEqual,
}

impl BinaryOperator {
    /// Plain ASCII spelling
    pub fn ascii(self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Modulus => "MOD",
            BinaryOperator::GreaterThan => ">",
            BinaryOperator::LessThan => "<",
            BinaryOperator::Equal => "==",
            BinaryOperator::NotEqual => "!=",
            BinaryOperator::GreaterOrEqual => ">=",
            BinaryOperator::LessOrEqual => "<=",
        }
    }

    /// Mathematical symbol used by plain-text rendering
    pub fn math_symbol(self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "·",
            BinaryOperator::Divide => "/",
            BinaryOperator::Modulus => "MOD",
            BinaryOperator::GreaterThan => ">",
            BinaryOperator::LessThan => "<",
            BinaryOperator::Equal => "=",
            BinaryOperator::NotEqual => "≠",
            BinaryOperator::GreaterOrEqual => "≥",
            BinaryOperator::LessOrEqual => "≤",
        }
    }

    /// LaTeX math-mode symbol
    pub fn latex_symbol(self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => r"\cdot",
            BinaryOperator::Divide => "/",
            BinaryOperator::Modulus => r"\:\texttt{MOD}\:",
            BinaryOperator::GreaterThan => ">",
            BinaryOperator::LessThan => "<",
            BinaryOperator::Equal => "=",
            BinaryOperator::NotEqual => r"\neq",
            BinaryOperator::GreaterOrEqual => r"\geq",
            BinaryOperator::LessOrEqual => r"\leq",
        }
    }

    /// Binding strength: relational 0, additive 1, multiplicative 2
    pub fn precedence(self) -> u8 {
        match self {
            BinaryOperator::Add | BinaryOperator::Subtract => 1,
            BinaryOperator::Multiply | BinaryOperator::Divide | BinaryOperator::Modulus => 2,
            BinaryOperator::GreaterThan
            | BinaryOperator::LessThan
            | BinaryOperator::Equal
            | BinaryOperator::NotEqual
            | BinaryOperator::GreaterOrEqual
            | BinaryOperator::LessOrEqual => 0,
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ascii())
    }
}

/// The comparison operators a `Match` arm may use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationalOperator {
    Equal,
    NotEqual,
    LessThan,
    LessOrEqual,
    GreaterThan,
    GreaterOrEqual,
}

impl From<RelationalOperator> for BinaryOperator {
    fn from(op: RelationalOperator) -> Self {
        match op {
            RelationalOperator::Equal => BinaryOperator::Equal,
            RelationalOperator::NotEqual => BinaryOperator::NotEqual,
            RelationalOperator::LessThan => BinaryOperator::LessThan,
            RelationalOperator::LessOrEqual => BinaryOperator::LessOrEqual,
            RelationalOperator::GreaterThan => BinaryOperator::GreaterThan,
            RelationalOperator::GreaterOrEqual => BinaryOperator::GreaterOrEqual,
        }
    }
}

/// Expressions
///
/// Expressions are side-effect free: evaluating one never changes the environment.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    IntLiteral(i64),
    FloatLiteral(f64),
    BoolLiteral(bool),
    Variable(String),
    ArrayElement {
        array: String,
        index: Box<Expression>,
    },
    Binary {
        left: Box<Expression>,
        op: BinaryOperator,
        right: Box<Expression>,
    },
}

impl From<i64> for Expression {
    fn from(n: i64) -> Self {
        Expression::IntLiteral(n)
    }
}

impl From<f64> for Expression {
    fn from(x: f64) -> Self {
        Expression::FloatLiteral(x)
    }
}

impl From<bool> for Expression {
    fn from(b: bool) -> Self {
        Expression::BoolLiteral(b)
    }
}

/// Left-hand side of an assignment
#[derive(Debug, Clone, PartialEq)]
pub enum AssignTarget {
    Variable(String),
    Element { array: String, index: Expression },
}

impl AssignTarget {
    pub fn element(array: impl Into<String>, index: impl Into<Expression>) -> Self {
        AssignTarget::Element {
            array: array.into(),
            index: index.into(),
        }
    }
}

impl From<&str> for AssignTarget {
    fn from(name: &str) -> Self {
        AssignTarget::Variable(name.to_string())
    }
}

impl From<String> for AssignTarget {
    fn from(name: String) -> Self {
        AssignTarget::Variable(name)
    }
}

/// One guarded branch of a `Match` statement
#[derive(Debug, Clone, PartialEq)]
pub struct MatchArm {
    pub operator: RelationalOperator,
    pub compare: Expression,
    pub body: Block,
}

impl MatchArm {
    pub fn new(operator: RelationalOperator, compare: impl Into<Expression>, body: Block) -> Self {
        MatchArm {
            operator,
            compare: compare.into(),
            body,
        }
    }
}

/// Statement variants
#[derive(Debug, Clone, PartialEq)]
pub enum StatementKind {
    Input {
        target: String,
        input_type: InputType,
    },
    Output {
        text: InterpolatedString,
    },
    Assign {
        target: AssignTarget,
        value: Expression,
    },
    If {
        condition: Expression,
        then_block: Block,
        else_block: Option<Block>,
    },
    While {
        condition: Expression,
        body: Block,
        label: Option<String>,
    },
    DoWhile {
        body: Block,
        condition: Expression,
        label: Option<String>,
    },
    Loop {
        body: Block,
        label: Option<String>,
    },
    Break {
        label: String,
    },
    DocumentedBlock {
        caption: String,
        block: Block,
    },
    Match {
        value: Expression,
        arms: Vec<MatchArm>,
    },
}

/// A node of the program tree
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub kind: StatementKind,
    /// Skip this statement when drawing the diagram; execution is unaffected
    pub hidden_from_diagram: bool,
}

impl Statement {
    /// Short name of the statement variant, used in trace output and errors
    pub fn kind_name(&self) -> &'static str {
        match &self.kind {
            StatementKind::Input { .. } => "Input",
            StatementKind::Output { .. } => "Output",
            StatementKind::Assign { .. } => "Assign",
            StatementKind::If { .. } => "If",
            StatementKind::While { .. } => "While",
            StatementKind::DoWhile { .. } => "DoWhile",
            StatementKind::Loop { .. } => "Loop",
            StatementKind::Break { .. } => "Break",
            StatementKind::DocumentedBlock { .. } => "DocumentedBlock",
            StatementKind::Match { .. } => "Match",
        }
    }
}

impl From<StatementKind> for Statement {
    fn from(kind: StatementKind) -> Self {
        Statement {
            kind,
            hidden_from_diagram: false,
        }
    }
}
