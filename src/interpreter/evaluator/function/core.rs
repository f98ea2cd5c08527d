use std::rc::Rc;

use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Interpreter, MAX_CALL_DEPTH},
            function::builtin,
        },
        value::{
            core::Value,
            environment::Environment,
            function::{Builtin, ThoughtFunction},
        },
    },
};

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - the exact number of arguments,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BUILTIN_TABLE` (the `Builtin` values installed in the global scope),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: &[Builtin] = &[
            $(
                Builtin { name: $name, arity: $arity, func: $func },
            )*
        ];
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "add"       => { arity: 2, func: builtin::add },
    "subtract"  => { arity: 2, func: builtin::subtract },
    "multiply"  => { arity: 2, func: builtin::multiply },
    "divide"    => { arity: 2, func: builtin::divide },
    "length"    => { arity: 1, func: builtin::length },
    "type"      => { arity: 1, func: builtin::type_of },
    "isEven"    => { arity: 1, func: builtin::is_even },
    "isOdd"     => { arity: 1, func: builtin::is_odd },
    "uppercase" => { arity: 1, func: builtin::uppercase },
    "lowercase" => { arity: 1, func: builtin::lowercase },
}

/// Binds every builtin in `globals` under its name.
///
/// Builtins are ordinary bindings: a program may shadow them with `think`.
pub fn install_builtins(globals: &mut Environment) {
    for builtin in BUILTIN_TABLE {
        globals.define(builtin.name, Value::Builtin(*builtin));
    }
}

impl Interpreter {
    /// Evaluates a call.
    ///
    /// The callee name is resolved first, then the arguments are evaluated
    /// left to right, then the callee is invoked.
    ///
    /// # Errors
    /// - `UnknownVariable` if the name is unbound.
    /// - `NotCallable` if it is bound to something other than a function.
    /// - `ArgumentCountMismatch` on a wrong number of arguments.
    /// - Any error raised by the callee.
    pub(crate) fn eval_call(&mut self,
                            name: &str,
                            arguments: &[Node],
                            line: usize)
                            -> EvalResult<Value> {
        let callee = self.lookup(name, line)?;

        let args = arguments.iter()
                            .map(|argument| self.eval(argument))
                            .collect::<EvalResult<Vec<_>>>()?;

        match callee {
            Value::Builtin(builtin) => builtin.call(&args, line),
            Value::Function(function) => self.call_intention(&function, args, line),
            _ => Err(RuntimeError::NotCallable { name: name.to_string(),
                                                 line }),
        }
    }

    /// Executes an intention.
    ///
    /// A new scope nested in the intention's closure, not in the caller's
    /// scope, binds each parameter to its argument. The body runs directly in
    /// that scope and its last statement's value is the result.
    ///
    /// # Errors
    /// - `ArgumentCountMismatch` unless exactly one argument per parameter is
    ///   supplied.
    /// - `CallDepthExceeded` when [`MAX_CALL_DEPTH`] calls are already running.
    /// - Any error raised by the body.
    fn call_intention(&mut self,
                      function: &Rc<ThoughtFunction>,
                      args: Vec<Value>,
                      line: usize)
                      -> EvalResult<Value> {
        if args.len() != function.params.len() {
            return Err(RuntimeError::ArgumentCountMismatch { name: function.name.clone(),
                                                             expected: function.params.len(),
                                                             found: args.len(),
                                                             line });
        }

        if self.call_depth >= MAX_CALL_DEPTH {
            return Err(RuntimeError::CallDepthExceeded { name: function.name.clone(),
                                                         limit: MAX_CALL_DEPTH,
                                                         line });
        }

        let scope = Environment::child_of(&function.closure);
        {
            let mut frame = scope.borrow_mut();
            for (param, arg) in function.params.iter().zip(args) {
                frame.define(param, arg);
            }
        }

        self.call_depth += 1;
        let result = self.in_scope(scope, |this| this.eval_statements(&function.body.statements));
        self.call_depth -= 1;

        result
    }
}
