// Arithmetic and comparison tests

use nassi::program::builders::*;
use nassi::{Environment, Expression, RuntimeError, Value, ValueKind};

fn eval(expr: Expression) -> Result<Value, RuntimeError> {
    expr.evaluate(&Environment::new())
}

#[test]
fn test_integer_division_floors() {
    assert_eq!(eval(div(int(7), int(2))), Ok(Value::Integer(3)));
    assert_eq!(eval(div(int(-7), int(2))), Ok(Value::Integer(-4)));
    assert_eq!(eval(div(int(7), int(-2))), Ok(Value::Integer(-4)));
    assert_eq!(eval(div(int(6), int(3))), Ok(Value::Integer(2)));
}

#[test]
fn test_modulus_takes_sign_of_divisor() {
    assert_eq!(eval(modulo(int(7), int(3))), Ok(Value::Integer(1)));
    assert_eq!(eval(modulo(int(-7), int(3))), Ok(Value::Integer(2)));
    assert_eq!(eval(modulo(int(7), int(-3))), Ok(Value::Integer(-2)));
}

#[test]
fn test_mixed_operands_promote_to_float() {
    assert_eq!(eval(add(int(1), float(2.5))), Ok(Value::Float(3.5)));
    assert_eq!(eval(div(int(7), float(2.0))), Ok(Value::Float(3.5)));
    assert_eq!(eval(mul(float(1.5), int(2))), Ok(Value::Float(3.0)));
    assert_eq!(eval(sub(float(0.5), float(0.25))), Ok(Value::Float(0.25)));
}

#[test]
fn test_precedence_follows_tree_shape() {
    // 2 + 3 * 4 and (2 + 3) * 4 are different trees
    assert_eq!(eval(add(int(2), mul(int(3), int(4)))), Ok(Value::Integer(14)));
    assert_eq!(eval(mul(add(int(2), int(3)), int(4))), Ok(Value::Integer(20)));
}

#[test]
fn test_relational_operators() {
    assert_eq!(eval(gt(int(3), int(2))), Ok(Value::Boolean(true)));
    assert_eq!(eval(lt(int(3), int(2))), Ok(Value::Boolean(false)));
    assert_eq!(eval(ge(int(2), int(2))), Ok(Value::Boolean(true)));
    assert_eq!(eval(le(float(2.5), int(2))), Ok(Value::Boolean(false)));
    assert_eq!(eval(eq(int(1), float(1.0))), Ok(Value::Boolean(true)));
    assert_eq!(eval(ne(int(1), int(2))), Ok(Value::Boolean(true)));
}

#[test]
fn test_booleans_are_not_operands() {
    let result = eval(add(boolean(true), int(1)));
    assert_eq!(
        result,
        Err(RuntimeError::TypeError {
            operator: "+".to_string(),
            left: ValueKind::Boolean,
            right: ValueKind::Integer,
        })
    );

    assert!(matches!(
        eval(eq(boolean(true), boolean(true))),
        Err(RuntimeError::TypeError { .. })
    ));
}

#[test]
fn test_modulus_rejects_floats() {
    assert!(matches!(
        eval(modulo(float(7.0), int(2))),
        Err(RuntimeError::TypeError {
            left: ValueKind::Float,
            ..
        })
    ));
}

#[test]
fn test_arrays_are_not_operands() {
    let env: Environment = [("xs", Value::array([1_i64, 2]))].into_iter().collect();
    let result = add(var("xs"), int(1)).evaluate(&env);
    assert!(matches!(
        result,
        Err(RuntimeError::TypeError {
            left: ValueKind::Array,
            ..
        })
    ));
}

#[test]
fn test_division_by_zero() {
    assert!(matches!(
        eval(div(int(1), int(0))),
        Err(RuntimeError::DivisionByZero { .. })
    ));
    assert!(matches!(
        eval(div(float(1.0), float(0.0))),
        Err(RuntimeError::DivisionByZero { .. })
    ));
    assert!(matches!(
        eval(modulo(int(1), int(0))),
        Err(RuntimeError::DivisionByZero { .. })
    ));
}

#[test]
fn test_integer_overflow() {
    assert!(matches!(
        eval(add(int(i64::MAX), int(1))),
        Err(RuntimeError::IntegerOverflow { .. })
    ));
    assert!(matches!(
        eval(mul(int(i64::MAX), int(2))),
        Err(RuntimeError::IntegerOverflow { .. })
    ));
    assert!(matches!(
        eval(div(int(i64::MIN), int(-1))),
        Err(RuntimeError::IntegerOverflow { .. })
    ));
}

#[test]
fn test_variables_and_elements() {
    let env: Environment = [
        ("i", Value::Integer(2)),
        ("xs", Value::array([10_i64, 20, 30])),
        ("flag", Value::Boolean(true)),
    ]
    .into_iter()
    .collect();

    assert_eq!(
        add(element("xs", var("i")), element("xs", int(0))).evaluate(&env),
        Ok(Value::Integer(40))
    );
    assert_eq!(
        element("xs", sub(var("i"), int(3))).evaluate(&env),
        Err(RuntimeError::IndexOutOfBounds {
            array: "xs".to_string(),
            index: -1,
            length: 3,
        })
    );
    assert_eq!(
        element("xs", var("flag")).evaluate(&env),
        Err(RuntimeError::NonIntegerIndex {
            array: "xs".to_string(),
            got: ValueKind::Boolean,
        })
    );
    assert_eq!(
        element("i", int(0)).evaluate(&env),
        Err(RuntimeError::NotAnArray {
            name: "i".to_string(),
            kind: ValueKind::Integer,
        })
    );
    assert_eq!(
        var("missing").evaluate(&env),
        Err(RuntimeError::UndefinedVariable {
            name: "missing".to_string()
        })
    );
}

#[test]
fn test_evaluation_does_not_mutate_environment() {
    let env: Environment = [("n", Value::Integer(5))].into_iter().collect();
    let before = env.clone();

    let _ = add(var("n"), int(1)).evaluate(&env);
    let _ = div(var("n"), int(0)).evaluate(&env);

    assert_eq!(env, before);
}
