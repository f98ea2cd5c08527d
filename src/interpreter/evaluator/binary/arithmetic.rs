use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Extracts two numbers for an arithmetic operator, or reports both operand
/// types.
fn numeric_operands(op: BinaryOperator,
                    left: &Value,
                    right: &Value,
                    line: usize)
                    -> EvalResult<(f64, f64)> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok((*a, *b)),
        _ => Err(RuntimeError::TypeError { details: format!("cannot use '{op}' on {} and {}",
                                                            left.type_name(),
                                                            right.type_name()),
                                           line }),
    }
}

/// Adds two numbers, or concatenates when either side is a string.
///
/// Concatenation joins the display strings of both operands, so
/// `"I am " + 25` is `"I am 25"`.
///
/// # Errors
/// `TypeError` when neither operand is a string and not both are numbers.
pub fn add(left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
    if matches!(left, Value::Str(_)) || matches!(right, Value::Str(_)) {
        return Ok(Value::Str(format!("{left}{right}")));
    }
    let (a, b) = numeric_operands(BinaryOperator::Add, left, right, line)?;
    Ok(Value::Number(a + b))
}

/// Subtracts two numbers.
pub fn subtract(left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
    let (a, b) = numeric_operands(BinaryOperator::Sub, left, right, line)?;
    Ok(Value::Number(a - b))
}

/// Multiplies two numbers.
pub fn multiply(left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
    let (a, b) = numeric_operands(BinaryOperator::Mul, left, right, line)?;
    Ok(Value::Number(a * b))
}

/// Divides two numbers.
///
/// # Errors
/// - `DivisionByZero` if the divisor is zero (of either sign).
/// - `TypeError` for non-numeric operands.
///
/// # Example
/// ```
/// use thoughtscript::{
///     Value, error::RuntimeError, interpreter::evaluator::binary::arithmetic::divide,
/// };
///
/// assert_eq!(divide(&Value::Number(10.0), &Value::Number(4.0), 1),
///            Ok(Value::Number(2.5)));
/// assert_eq!(divide(&Value::Number(10.0), &Value::Number(0.0), 3),
///            Err(RuntimeError::DivisionByZero { line: 3 }));
/// ```
pub fn divide(left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
    let (a, b) = numeric_operands(BinaryOperator::Div, left, right, line)?;
    if b == 0.0 {
        return Err(RuntimeError::DivisionByZero { line });
    }
    Ok(Value::Number(a / b))
}
