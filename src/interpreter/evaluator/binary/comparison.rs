use std::cmp::Ordering;

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Evaluates `<`, `>`, `<=` or `>=`.
///
/// Two numbers compare numerically and two strings lexicographically by
/// character. Any comparison involving `NaN` is false.
///
/// # Errors
/// `TypeError` for any other pair of operand types.
///
/// # Example
/// ```
/// use thoughtscript::{
///     Value, ast::BinaryOperator, interpreter::evaluator::binary::comparison::compare_values,
/// };
///
/// let r = compare_values(BinaryOperator::LessEqual, &Value::Number(2.0), &Value::Number(2.0), 1);
/// assert_eq!(r, Ok(Value::Bool(true)));
///
/// let r = compare_values(BinaryOperator::Less, &Value::from("apple"), &Value::from("banana"), 1);
/// assert_eq!(r, Ok(Value::Bool(true)));
///
/// assert!(compare_values(BinaryOperator::Less, &Value::Null, &Value::Number(1.0), 1).is_err());
/// ```
pub fn compare_values(op: BinaryOperator,
                      left: &Value,
                      right: &Value,
                      line: usize)
                      -> EvalResult<Value> {
    let ordering = match (left, right) {
        (Value::Number(a), Value::Number(b)) => a.partial_cmp(b),
        (Value::Str(a), Value::Str(b)) => Some(a.cmp(b)),
        _ => {
            return Err(RuntimeError::TypeError { details: format!("cannot compare {} and {} with '{op}'",
                                                                  left.type_name(),
                                                                  right.type_name()),
                                                 line });
        },
    };

    let result = ordering.is_some_and(|ordering| match op {
                             BinaryOperator::Less => ordering == Ordering::Less,
                             BinaryOperator::Greater => ordering == Ordering::Greater,
                             BinaryOperator::LessEqual => ordering != Ordering::Greater,
                             BinaryOperator::GreaterEqual => ordering != Ordering::Less,
                             _ => false,
                         });

    Ok(Value::Bool(result))
}
