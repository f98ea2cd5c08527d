use crate::{
    ast::{Node, UnaryOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Interpreter},
            utils::is_truthy,
        },
        value::core::Value,
    },
};

impl Interpreter {
    /// Evaluates the operand, then applies the operator with [`eval_unary`].
    ///
    /// [`eval_unary`]: Interpreter::eval_unary
    pub(crate) fn eval_unary_op(&mut self,
                                op: UnaryOperator,
                                operand: &Node,
                                line: usize)
                                -> EvalResult<Value> {
        let value = self.eval(operand)?;
        Self::eval_unary(op, &value, line)
    }

    /// Applies a unary operator to a value.
    ///
    /// - `Negate` requires a number.
    /// - `Not` accepts anything and inverts its truthiness.
    ///
    /// # Example
    /// ```
    /// use thoughtscript::{Interpreter, Value, ast::UnaryOperator};
    ///
    /// let v = Interpreter::eval_unary(UnaryOperator::Negate, &Value::Number(5.0), 1).unwrap();
    /// assert_eq!(v, Value::Number(-5.0));
    ///
    /// let v = Interpreter::eval_unary(UnaryOperator::Not, &Value::from(""), 1).unwrap();
    /// assert_eq!(v, Value::Bool(true));
    ///
    /// assert!(Interpreter::eval_unary(UnaryOperator::Negate, &Value::Null, 1).is_err());
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value, line: usize) -> EvalResult<Value> {
        match op {
            UnaryOperator::Negate => match value {
                Value::Number(n) => Ok(Value::Number(-n)),
                other => {
                    Err(RuntimeError::TypeError { details: format!("cannot negate {}",
                                                                   other.type_name()),
                                                  line })
                },
            },
            UnaryOperator::Not => Ok(Value::Bool(!is_truthy(value))),
        }
    }
}
