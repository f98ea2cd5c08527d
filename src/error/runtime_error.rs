use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to use a variable that is bound in no enclosing scope.
    #[error("Error on line {line}: Undefined variable '{name}'.")]
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called a name whose value is not a function.
    #[error("Error on line {line}: '{name}' is not a function.")]
    NotCallable {
        /// The called name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A value had an unexpected or incompatible type.
    #[error("Error on line {line}: Type error: {details}.")]
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Loop bounds did not evaluate to numbers.
    #[error("Error on line {line}: Invalid loop bounds: {details}.")]
    InvalidLoopBounds {
        /// Details describing why the bounds are invalid.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// The wrong number of arguments was supplied to a function.
    #[error("Error on line {line}: '{name}' expects {expected} argument(s), got {found}.")]
    ArgumentCountMismatch {
        /// The called name.
        name:     String,
        /// Number of declared parameters.
        expected: usize,
        /// Number of supplied arguments.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Intention calls nested deeper than the interpreter allows, usually a
    /// recursion without a reachable base case.
    #[error("Error on line {line}: Calling '{name}' exceeds the maximum call depth of {limit}.")]
    CallDepthExceeded {
        /// The intention being called.
        name:  String,
        /// The maximum call depth.
        limit: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Attempted division by zero.
    #[error("Error on line {line}: Division by zero.")]
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl RuntimeError {
    /// Gets the source line the error was raised on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnknownVariable { line, .. }
            | Self::NotCallable { line, .. }
            | Self::TypeError { line, .. }
            | Self::InvalidLoopBounds { line, .. }
            | Self::ArgumentCountMismatch { line, .. }
            | Self::CallDepthExceeded { line, .. }
            | Self::DivisionByZero { line } => *line,
        }
    }
}
