/// Lexing and parsing errors.
///
/// Defines all error types that can occur before evaluation starts: characters
/// the lexer does not recognise, integer literals that overflow, tokens the
/// grammar did not expect and missing indented blocks.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: unbound
/// names, non-callable values, type mismatches, arity mismatches and division
/// by zero.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
use thiserror::Error;

/// The flat error taxonomy exposed to hosting collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Unrecognised character or unrepresentable literal.
    Lexical,
    /// Expected token kind not found.
    Syntax,
    /// Unbound variable or non-callable callee.
    Name,
    /// Wrong operand type.
    Type,
    /// Wrong argument count.
    Arity,
    /// Division by zero.
    Arithmetic,
    /// Intention calls nested too deeply.
    Recursion,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Lexical => "LexicalError",
            Self::Syntax => "SyntaxError",
            Self::Name => "NameError",
            Self::Type => "TypeError",
            Self::Arity => "ArityError",
            Self::Arithmetic => "ArithmeticError",
            Self::Recursion => "RecursionError",
        };
        write!(f, "{name}")
    }
}

/// Any error produced while running ThoughtScript source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The source could not be tokenized or parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Evaluation was aborted.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// Classifies the error into the flat taxonomy.
    ///
    /// # Example
    /// ```
    /// use thoughtscript::{error::ErrorKind, run};
    ///
    /// let err = run("express divide(10, 0)").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::Arithmetic);
    ///
    /// let err = run("express missingVar").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::Name);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(e) if e.is_lexical() => ErrorKind::Lexical,
            Self::Parse(_) => ErrorKind::Syntax,
            Self::Runtime(e) => match e {
                RuntimeError::UnknownVariable { .. } | RuntimeError::NotCallable { .. } => {
                    ErrorKind::Name
                },
                RuntimeError::TypeError { .. } | RuntimeError::InvalidLoopBounds { .. } => {
                    ErrorKind::Type
                },
                RuntimeError::ArgumentCountMismatch { .. } => ErrorKind::Arity,
                RuntimeError::DivisionByZero { .. } => ErrorKind::Arithmetic,
                RuntimeError::CallDepthExceeded { .. } => ErrorKind::Recursion,
            },
        }
    }

    /// Renders the source line the error points at, with a caret under the
    /// column when the error knows it.
    ///
    /// Returns `None` when the position lies outside `source`.
    ///
    /// # Example
    /// ```
    /// use thoughtscript::run;
    ///
    /// let source = "think 1 as x\nexpress x @ 2";
    /// let err = run(source).unwrap_err();
    /// assert_eq!(err.context(source).unwrap(),
    ///            format!("2 | express x @ 2\n  | {}^", " ".repeat(10)));
    ///
    /// let err = run("express missingVar").unwrap_err();
    /// assert_eq!(err.context("express missingVar").unwrap(), "1 | express missingVar");
    /// ```
    #[must_use]
    pub fn context(&self, source: &str) -> Option<String> {
        let (line, column) = match self {
            Self::Parse(e) => {
                let (line, column) = e.position();
                (line, Some(column))
            },
            Self::Runtime(e) => (e.line(), None),
        };

        let text = source.lines().nth(line.checked_sub(1)?)?;
        let gutter = line.to_string();
        let mut rendered = format!("{gutter} | {text}");

        if let Some(column) = column.filter(|&column| column > 0) {
            // Tabs are kept so the caret lines up in a terminal.
            let padding = text.chars()
                              .take(column - 1)
                              .map(|c| if c == '\t' { '\t' } else { ' ' })
                              .collect::<String>();
            rendered.push_str(&format!("\n{} | {padding}^", " ".repeat(gutter.len())));
        }

        Some(rendered)
    }
}
