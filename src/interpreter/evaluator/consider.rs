use crate::{
    ast::{Block, Node},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::{core::Value, environment::Environment},
    },
};

impl Interpreter {
    /// Evaluates a `consider` loop.
    ///
    /// The bounds are evaluated once. The loop variable takes `start`,
    /// `start + 1`, ... while it does not exceed `end`, so a `start` greater
    /// than `end` runs the body zero times. Every iteration runs in the same
    /// loop scope: variables the body defines carry over into the next
    /// iteration and vanish when the loop ends.
    ///
    /// # Parameters
    /// - `var`: Name of the loop variable.
    /// - `start`, `end`: Inclusive bounds.
    /// - `body`: The loop body.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// Always `null`.
    ///
    /// # Errors
    /// - `InvalidLoopBounds` if a bound is not a finite number.
    /// - Any error raised by the body.
    ///
    /// # Example
    /// ```
    /// use thoughtscript::Interpreter;
    ///
    /// let mut interpreter = Interpreter::new();
    /// interpreter.interpret("consider n from 1 to 3: express n").unwrap();
    ///
    /// assert_eq!(interpreter.output(), ["1", "2", "3"]);
    /// ```
    pub(crate) fn eval_consider(&mut self,
                                var: &str,
                                start: &Node,
                                end: &Node,
                                body: &Block,
                                line: usize)
                                -> EvalResult<Value> {
        let start = self.eval(start)?;
        let end = self.eval(end)?;

        let (Value::Number(start), Value::Number(end)) = (&start, &end) else {
            return Err(RuntimeError::InvalidLoopBounds { details: format!("bounds must be numbers, found {} and {}",
                                                                          start.type_name(),
                                                                          end.type_name()),
                                                         line });
        };
        let (start, end) = (*start, *end);

        if !start.is_finite() || !end.is_finite() {
            return Err(RuntimeError::InvalidLoopBounds { details: format!("bounds must be finite, found {start} and {end}"),
                                                         line });
        }

        let scope = Environment::child_of(&self.environment);
        self.in_scope(scope, |this| {
                let mut i = start;
                while i <= end {
                    this.environment
                        .borrow_mut()
                        .define(var, Value::Number(i));
                    this.eval_statements(&body.statements)?;
                    i += 1.0;
                }
                Ok(())
            })?;

        Ok(Value::Null)
    }
}
