//! # thoughtscript
//!
//! ThoughtScript is a small scripting language whose statements read like
//! thoughts: `think`, `express`, `consider`, `remember`, `show` and
//! `define intention`. This crate holds its lexer, its indentation-aware
//! parser and its tree-walking interpreter.
//!
//! ```
//! let (_, output) = thoughtscript::run("consider n from 1 to 3:\n    express n * n").unwrap();
//!
//! assert_eq!(output, ["1", "4", "9"]);
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed code.
///
/// This module declares the `Node` enum and related types that represent the
/// syntactic structure of a program as a tree. The AST is built by the parser
/// and walked by the evaluator.
///
/// # Responsibilities
/// - Defines one node kind per statement and expression form.
/// - Attaches source line numbers to nodes for error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing or
/// evaluating a program, each carrying its source position, and the flat
/// `ErrorKind` tag hosts use to classify them.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line (and where known, column) numbers for context.
/// - Implements `std::error::Error` through `thiserror`.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and value
/// representations.
pub mod interpreter;
/// General utilities for safe numeric conversion and number formatting.
pub mod util;

pub use error::{Error, ErrorKind};
pub use interpreter::{evaluator::core::Interpreter, value::core::Value};

use crate::{
    ast::Node,
    error::ParseError,
    interpreter::lexer::{Token, tokenize as lex},
};

/// Runs `source` in a fresh interpreter.
///
/// Returns the value of the last top-level statement together with every
/// line written by `express` and `show`. Nothing is echoed to stdout.
///
/// # Errors
/// The first lexical, syntax or runtime error.
///
/// # Examples
/// ```
/// use thoughtscript::{ErrorKind, Value, run};
///
/// let (value, output) = run("think \"Alice\" as name\nexpress \"Hello, \" + name").unwrap();
/// assert_eq!(value, Value::from("Hello, Alice"));
/// assert_eq!(output, ["Hello, Alice"]);
///
/// let err = run("express missingVar").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::Name);
/// ```
pub fn run(source: &str) -> Result<(Value, Vec<String>), Error> {
    let mut interpreter = Interpreter::new();
    let value = interpreter.interpret(source)?;
    Ok((value, interpreter.output().to_vec()))
}

/// Converts source text into positioned tokens, ending with `Eof`.
///
/// # Errors
/// A lexical error for a character that starts no token.
pub fn tokenize(source: &str) -> Result<Vec<Token>, ParseError> {
    lex(source)
}

/// Parses source text into a `Node::Program` without evaluating it.
///
/// # Errors
/// The first lexical or syntax error.
pub fn parse(source: &str) -> Result<Node, ParseError> {
    Interpreter::parse(source)
}
