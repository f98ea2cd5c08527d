/// The evaluator module executes AST nodes and produces values and output.
///
/// The evaluator walks the tree produced by the parser, keeps the chain of
/// scopes, performs arithmetic, comparisons and calls, and collects the lines
/// written by `express` and `show`.
///
/// # Responsibilities
/// - Evaluates every node kind through one dispatcher.
/// - Manages scopes for blocks, loops and intention calls, including memory
///   promotion when a scope ends.
/// - Reports runtime errors such as unbound names or division by zero.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces tokens for keywords,
/// literals, identifiers, punctuation and line breaks, each tagged with its
/// line and column.
///
/// # Responsibilities
/// - Converts the input character stream into positioned tokens.
/// - Resolves string escapes and distinguishes integer from real literals.
/// - Reports lexical errors for characters that start no token.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a recursive descent over the token stream. Expressions use a
/// fixed precedence ladder; statements are chosen by their leading keyword;
/// blocks are delimited by indentation.
///
/// # Responsibilities
/// - Converts tokens into `Node` trees.
/// - Decides block boundaries from the column of each line's first token.
/// - Reports syntax errors with the expected and the actual token kind.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the `Value` enum (null, booleans, numbers, strings,
/// lists, memory maps and callables), the scope records values live in, and
/// the callable types.
///
/// # Responsibilities
/// - Defines `Value` and its canonical display string.
/// - Defines `Environment`, the scope chain and the memory store.
/// - Defines intentions and builtins.
pub mod value;
