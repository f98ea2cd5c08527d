use crate::{
    ast::BinaryOperator,
    interpreter::{evaluator::utils::is_truthy, value::core::Value},
};

/// Combines two already evaluated operands with `and` or `or`.
///
/// The result is always a boolean computed from the truthiness of both sides.
/// Other operators yield `false`.
///
/// # Example
/// ```
/// use thoughtscript::{
///     Value, ast::BinaryOperator, interpreter::evaluator::binary::logic::eval_logic,
/// };
///
/// let v = eval_logic(BinaryOperator::And, &Value::Number(1.0), &Value::from("yes"));
/// assert_eq!(v, Value::Bool(true));
///
/// let v = eval_logic(BinaryOperator::Or, &Value::Null, &Value::Number(0.0));
/// assert_eq!(v, Value::Bool(false));
/// ```
#[must_use]
pub fn eval_logic(op: BinaryOperator, left: &Value, right: &Value) -> Value {
    let (left, right) = (is_truthy(left), is_truthy(right));

    Value::Bool(match op {
                    BinaryOperator::And => left && right,
                    BinaryOperator::Or => left || right,
                    _ => false,
                })
}
