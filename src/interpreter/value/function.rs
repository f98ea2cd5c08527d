use crate::{
    ast::Block,
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{core::Value, environment::EnvRef},
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated argument values and the line number
/// of the call.
pub type BuiltinFn = fn(&[Value], usize) -> EvalResult<Value>;

/// A native function stored in the global scope like any other value.
#[derive(Debug, Clone, Copy)]
pub struct Builtin {
    /// The name it is bound to.
    pub name:  &'static str,
    /// The exact number of arguments it accepts.
    pub arity: usize,
    /// The native implementation.
    pub func:  BuiltinFn,
}

impl Builtin {
    /// Checks the argument count, then runs the native implementation.
    ///
    /// # Errors
    /// - `ArgumentCountMismatch` if `args` does not match the arity.
    /// - Whatever the implementation raises.
    pub fn call(&self, args: &[Value], line: usize) -> EvalResult<Value> {
        if args.len() != self.arity {
            return Err(RuntimeError::ArgumentCountMismatch { name: self.name.to_string(),
                                                             expected: self.arity,
                                                             found: args.len(),
                                                             line });
        }
        (self.func)(args, line)
    }
}

/// A user-defined function created by `define intention`.
///
/// It keeps a strong reference to the scope it was defined in, so it can be
/// called after that scope has ended. Calls bind parameters in a fresh scope
/// whose parent is `closure`, not the caller's scope.
pub struct ThoughtFunction {
    /// The name it was defined under.
    pub name:    String,
    /// Parameter names, bound positionally.
    pub params:  Vec<String>,
    /// The body evaluated on every call.
    pub body:    Block,
    /// The defining scope.
    pub closure: EnvRef,
}

impl std::fmt::Debug for ThoughtFunction {
    // The closure can reach this function again, so it is left out.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThoughtFunction")
         .field("name", &self.name)
         .field("params", &self.params)
         .finish_non_exhaustive()
    }
}
