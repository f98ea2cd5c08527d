use crate::{
    ast::{BinaryOperator, Node},
    interpreter::{
        evaluator::{
            binary::{arithmetic, comparison::compare_values, logic::eval_logic},
            core::{EvalResult, Interpreter},
            utils::values_equal,
        },
        value::core::Value,
    },
};

impl Interpreter {
    /// Evaluates both operands, left first, then applies the operator with
    /// [`eval_binary`].
    ///
    /// Both operands are always evaluated, including for `and` and `or`.
    ///
    /// [`eval_binary`]: Interpreter::eval_binary
    pub(crate) fn eval_binary_op(&mut self,
                                 left: &Node,
                                 op: BinaryOperator,
                                 right: &Node,
                                 line: usize)
                                 -> EvalResult<Value> {
        let left = self.eval(left)?;
        let right = self.eval(right)?;
        Self::eval_binary(op, &left, &right, line)
    }

    /// Evaluates a binary operation between two values.
    ///
    /// Arithmetic goes to the `arithmetic` helpers, ordering to
    /// `compare_values`, equality to `values_equal` and the logical operators
    /// to `eval_logic`.
    ///
    /// # Example
    /// ```
    /// use thoughtscript::{Interpreter, Value, ast::BinaryOperator};
    ///
    /// let sum = Interpreter::eval_binary(BinaryOperator::Add,
    ///                                    &Value::Number(3.0),
    ///                                    &Value::Number(4.0),
    ///                                    1).unwrap();
    /// assert_eq!(sum, Value::Number(7.0));
    ///
    /// let greeting = Interpreter::eval_binary(BinaryOperator::Add,
    ///                                         &Value::from("I am "),
    ///                                         &Value::Number(25.0),
    ///                                         1).unwrap();
    /// assert_eq!(greeting, Value::from("I am 25"));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Or, Sub,
        };

        match op {
            Add => arithmetic::add(left, right, line),
            Sub => arithmetic::subtract(left, right, line),
            Mul => arithmetic::multiply(left, right, line),
            Div => arithmetic::divide(left, right, line),
            Less | Greater | LessEqual | GreaterEqual => compare_values(op, left, right, line),
            Equal => Ok(Value::Bool(values_equal(left, right))),
            NotEqual => Ok(Value::Bool(!values_equal(left, right))),
            And | Or => Ok(eval_logic(op, left, right)),
        }
    }
}
