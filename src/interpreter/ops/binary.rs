use crate::interpreter::errors::RuntimeError;
use crate::memory::value::Value;
use crate::program::ast::{BinaryOperator, RelationalOperator};

/// Numeric operands after kind promotion
enum Operands {
    Ints(i64, i64),
    Floats(f64, f64),
}

/// Promote to float if either side is a float; None for non-numeric operands
#[inline]
fn numeric_operands(left: &Value, right: &Value) -> Option<Operands> {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => Some(Operands::Ints(*a, *b)),
        _ => Some(Operands::Floats(left.as_number()?, right.as_number()?)),
    }
}

fn type_error(op: BinaryOperator, left: &Value, right: &Value) -> RuntimeError {
    RuntimeError::TypeError {
        operator: op.ascii().to_string(),
        left: left.kind(),
        right: right.kind(),
    }
}

fn describe(op: BinaryOperator, a: impl std::fmt::Display, b: impl std::fmt::Display) -> String {
    format!("{} {} {}", a, op.ascii(), b)
}

/// Integer division rounding toward negative infinity
#[inline]
fn floor_div(a: i64, b: i64) -> Option<i64> {
    let quotient = a.checked_div(b)?;
    if a.wrapping_rem(b) != 0 && ((a < 0) != (b < 0)) {
        quotient.checked_sub(1)
    } else {
        Some(quotient)
    }
}

/// Integer modulus whose result takes the sign of the divisor
#[inline]
fn floor_mod(a: i64, b: i64) -> i64 {
    let remainder = a.wrapping_rem(b);
    if remainder != 0 && ((remainder < 0) != (b < 0)) {
        remainder + b
    } else {
        remainder
    }
}

/// Evaluate `left op right` on already-evaluated operands
pub(crate) fn apply_binary_op(
    op: BinaryOperator,
    left: &Value,
    right: &Value,
) -> Result<Value, RuntimeError> {
    let operands = numeric_operands(left, right).ok_or_else(|| type_error(op, left, right))?;

    match op {
        BinaryOperator::Add => checked_add_values(operands),
        BinaryOperator::Subtract => checked_sub_values(operands),
        BinaryOperator::Multiply => checked_mul_values(operands),
        BinaryOperator::Divide => checked_div_values(operands),
        BinaryOperator::Modulus => match operands {
            Operands::Ints(a, b) => checked_mod_values(a, b),
            Operands::Floats(..) => Err(type_error(op, left, right)),
        },
        BinaryOperator::GreaterThan => compare_values(RelationalOperator::GreaterThan, operands),
        BinaryOperator::LessThan => compare_values(RelationalOperator::LessThan, operands),
        BinaryOperator::Equal => compare_values(RelationalOperator::Equal, operands),
        BinaryOperator::NotEqual => compare_values(RelationalOperator::NotEqual, operands),
        BinaryOperator::GreaterOrEqual => {
            compare_values(RelationalOperator::GreaterOrEqual, operands)
        }
        BinaryOperator::LessOrEqual => compare_values(RelationalOperator::LessOrEqual, operands),
    }
}

#[inline]
fn checked_add_values(operands: Operands) -> Result<Value, RuntimeError> {
    match operands {
        Operands::Ints(a, b) => a
            .checked_add(b)
            .map(Value::Integer)
            .ok_or_else(|| RuntimeError::IntegerOverflow {
                operation: describe(BinaryOperator::Add, a, b),
            }),
        Operands::Floats(a, b) => Ok(Value::Float(a + b)),
    }
}

#[inline]
fn checked_sub_values(operands: Operands) -> Result<Value, RuntimeError> {
    match operands {
        Operands::Ints(a, b) => a
            .checked_sub(b)
            .map(Value::Integer)
            .ok_or_else(|| RuntimeError::IntegerOverflow {
                operation: describe(BinaryOperator::Subtract, a, b),
            }),
        Operands::Floats(a, b) => Ok(Value::Float(a - b)),
    }
}

#[inline]
fn checked_mul_values(operands: Operands) -> Result<Value, RuntimeError> {
    match operands {
        Operands::Ints(a, b) => a
            .checked_mul(b)
            .map(Value::Integer)
            .ok_or_else(|| RuntimeError::IntegerOverflow {
                operation: describe(BinaryOperator::Multiply, a, b),
            }),
        Operands::Floats(a, b) => Ok(Value::Float(a * b)),
    }
}

#[inline]
fn checked_div_values(operands: Operands) -> Result<Value, RuntimeError> {
    match operands {
        Operands::Ints(a, b) => {
            if b == 0 {
                return Err(RuntimeError::DivisionByZero {
                    operation: describe(BinaryOperator::Divide, a, b),
                });
            }
            floor_div(a, b)
                .map(Value::Integer)
                .ok_or_else(|| RuntimeError::IntegerOverflow {
                    operation: describe(BinaryOperator::Divide, a, b),
                })
        }
        Operands::Floats(a, b) => {
            if b == 0.0 {
                return Err(RuntimeError::DivisionByZero {
                    operation: describe(BinaryOperator::Divide, a, b),
                });
            }
            Ok(Value::Float(a / b))
        }
    }
}

#[inline]
fn checked_mod_values(a: i64, b: i64) -> Result<Value, RuntimeError> {
    if b == 0 {
        return Err(RuntimeError::DivisionByZero {
            operation: describe(BinaryOperator::Modulus, a, b),
        });
    }
    Ok(Value::Integer(floor_mod(a, b)))
}

#[inline]
fn compare_values(op: RelationalOperator, operands: Operands) -> Result<Value, RuntimeError> {
    let holds = match operands {
        Operands::Ints(a, b) => compare(op, a, b),
        Operands::Floats(a, b) => compare(op, a, b),
    };
    Ok(Value::Boolean(holds))
}

fn compare<T: PartialOrd>(op: RelationalOperator, a: T, b: T) -> bool {
    match op {
        RelationalOperator::GreaterThan => a > b,
        RelationalOperator::LessThan => a < b,
        RelationalOperator::Equal => a == b,
        RelationalOperator::NotEqual => a != b,
        RelationalOperator::GreaterOrEqual => a >= b,
        RelationalOperator::LessOrEqual => a <= b,
    }
}
