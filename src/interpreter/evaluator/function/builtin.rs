use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{binary::arithmetic, core::EvalResult},
        value::core::Value,
    },
    util::num::usize_to_f64_checked,
};

/// Views the arguments as a fixed-size array.
///
/// The call site already checked the count against the builtin table; this
/// keeps each builtin safe when called directly.
fn arguments<'a, const N: usize>(name: &str,
                                 args: &'a [Value],
                                 line: usize)
                                 -> EvalResult<&'a [Value; N]> {
    args.try_into()
        .map_err(|_| RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                           expected: N,
                                                           found: args.len(),
                                                           line })
}

/// `add(a, b)`: same as `a + b`, including string concatenation.
///
/// # Example
/// ```
/// use thoughtscript::{Value, interpreter::evaluator::function::builtin::add};
///
/// let r = add(&[Value::Number(2.0), Value::Number(3.0)], 1).unwrap();
/// assert_eq!(r, Value::Number(5.0));
/// ```
pub fn add(args: &[Value], line: usize) -> EvalResult<Value> {
    let [a, b] = arguments::<2>("add", args, line)?;
    arithmetic::add(a, b, line)
}

/// `subtract(a, b)`: `a - b`.
pub fn subtract(args: &[Value], line: usize) -> EvalResult<Value> {
    let [a, b] = arguments::<2>("subtract", args, line)?;
    arithmetic::subtract(a, b, line)
}

/// `multiply(a, b)`: `a * b`.
pub fn multiply(args: &[Value], line: usize) -> EvalResult<Value> {
    let [a, b] = arguments::<2>("multiply", args, line)?;
    arithmetic::multiply(a, b, line)
}

/// `divide(a, b)`: `a / b`, failing on a zero divisor.
pub fn divide(args: &[Value], line: usize) -> EvalResult<Value> {
    let [a, b] = arguments::<2>("divide", args, line)?;
    arithmetic::divide(a, b, line)
}

/// `length(x)`: number of characters in a string or elements in a list.
///
/// # Example
/// ```
/// use thoughtscript::{Value, interpreter::evaluator::function::builtin::length};
///
/// assert_eq!(length(&[Value::from("héllo")], 1).unwrap(), Value::Number(5.0));
/// assert!(length(&[Value::Number(5.0)], 1).is_err());
/// ```
pub fn length(args: &[Value], line: usize) -> EvalResult<Value> {
    let [value] = arguments::<1>("length", args, line)?;

    let count = match value {
        Value::Str(s) => s.chars().count(),
        Value::List(items) => items.len(),
        other => {
            return Err(RuntimeError::TypeError { details: format!("length requires a string or an array, found {}",
                                                                  other.type_name()),
                                                 line });
        },
    };

    let too_long = RuntimeError::TypeError { details: "length is too large to represent".to_string(),
                                             line };
    Ok(Value::Number(usize_to_f64_checked(count, too_long)?))
}

/// `type(x)`: the canonical type name of `x`.
pub fn type_of(args: &[Value], line: usize) -> EvalResult<Value> {
    let [value] = arguments::<1>("type", args, line)?;
    Ok(Value::from(value.type_name()))
}

/// `isEven(n)`: whether `n` is divisible by two.
pub fn is_even(args: &[Value], line: usize) -> EvalResult<Value> {
    let [value] = arguments::<1>("isEven", args, line)?;
    let n = value.as_number("isEven", line)?;
    Ok(Value::Bool(n % 2.0 == 0.0))
}

/// `isOdd(n)`: whether `n` leaves a remainder when divided by two.
///
/// Fractional numbers are odd: `isOdd(2.5)` is `true`.
pub fn is_odd(args: &[Value], line: usize) -> EvalResult<Value> {
    let [value] = arguments::<1>("isOdd", args, line)?;
    let n = value.as_number("isOdd", line)?;
    Ok(Value::Bool(n % 2.0 != 0.0))
}

/// `uppercase(s)`
pub fn uppercase(args: &[Value], line: usize) -> EvalResult<Value> {
    let [value] = arguments::<1>("uppercase", args, line)?;
    Ok(Value::from(value.as_str("uppercase", line)?.to_uppercase()))
}

/// `lowercase(s)`
pub fn lowercase(args: &[Value], line: usize) -> EvalResult<Value> {
    let [value] = arguments::<1>("lowercase", args, line)?;
    Ok(Value::from(value.as_str("lowercase", line)?.to_lowercase()))
}
