/// Binary operator evaluation logic.
///
/// Handles arithmetic, string concatenation, comparisons, equality and the
/// non-short-circuiting logical operators.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation and logical not.
pub mod unary;

/// Core evaluation logic and interpreter state.
///
/// Contains the `Interpreter`, the node dispatcher, the output buffer and
/// scope management.
pub mod core;

/// Evaluation of simple statements.
///
/// `think`, `express`, `remember`, `show`, identifiers and intention
/// definitions.
pub mod statement;

/// Evaluation of `consider` loops.
///
/// Runs the body once per integer in an inclusive ascending range, in a single
/// scope shared by every iteration.
pub mod consider;

/// Conditionals.
pub mod control;

/// Utility functions for evaluation.
///
/// Truthiness and the language's equality.
pub mod utils;

/// Function evaluation.
///
/// Handles calls to builtins and intentions, argument checking and the builtin
/// table.
pub mod function;
