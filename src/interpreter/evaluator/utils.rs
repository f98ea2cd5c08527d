use std::rc::Rc;

use crate::interpreter::value::core::Value;

/// Coerces a value to a boolean for conditions and logical operators.
///
/// `null`, `false`, `0` and the empty string are falsy. Everything else is
/// truthy, including empty lists and `NaN`.
///
/// # Example
/// ```
/// use thoughtscript::{Value, interpreter::evaluator::utils::is_truthy};
///
/// assert!(!is_truthy(&Value::Number(0.0)));
/// assert!(!is_truthy(&Value::from("")));
/// assert!(is_truthy(&Value::from(Vec::new())));
/// assert!(is_truthy(&Value::from("0")));
/// ```
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => *n != 0.0,
        Value::Str(s) => !s.is_empty(),
        _ => true,
    }
}

/// The equality used by `==`, `is` and `!=`.
///
/// `null` equals only `null`. Otherwise both sides must have the same type
/// and the same value; there is no coercion. Lists, memory maps and
/// intentions are equal only to themselves.
///
/// # Example
/// ```
/// use thoughtscript::{Value, interpreter::evaluator::utils::values_equal};
///
/// assert!(values_equal(&Value::Null, &Value::Null));
/// assert!(!values_equal(&Value::Null, &Value::Bool(false)));
/// assert!(!values_equal(&Value::Number(1.0), &Value::from("1")));
///
/// let list = Value::from(vec![Value::Number(1.0)]);
/// assert!(values_equal(&list, &list.clone()));
/// assert!(!values_equal(&list, &Value::from(vec![Value::Number(1.0)])));
/// ```
#[must_use]
pub fn values_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => a == b,
        (Value::Str(a), Value::Str(b)) => a == b,
        (Value::List(a), Value::List(b)) => Rc::ptr_eq(a, b),
        (Value::Memories(a), Value::Memories(b)) => Rc::ptr_eq(a, b),
        (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
        (Value::Builtin(a), Value::Builtin(b)) => a.name == b.name,
        _ => false,
    }
}
