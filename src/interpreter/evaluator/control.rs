use crate::{
    ast::{Block, Node},
    interpreter::{
        evaluator::{
            core::{EvalResult, Interpreter},
            utils::is_truthy,
        },
        value::core::Value,
    },
};

impl Interpreter {
    /// Evaluates an `if` statement.
    ///
    /// The condition is coerced with truthiness. Exactly one branch runs, in
    /// its own scope; without an `otherwise` branch a falsy condition runs
    /// nothing.
    ///
    /// # Returns
    /// The value of the branch that ran, or `null`.
    pub(crate) fn eval_if(&mut self,
                          condition: &Node,
                          then_block: &Block,
                          else_block: Option<&Block>)
                          -> EvalResult<Value> {
        let condition = self.eval(condition)?;

        if is_truthy(&condition) {
            self.eval_block(then_block)
        } else if let Some(else_block) = else_block {
            self.eval_block(else_block)
        } else {
            Ok(Value::Null)
        }
    }
}
