use std::iter::Peekable;

use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            binary::parse_logical_or,
            block::{expect_statement_end, skip_newlines},
            statement::parse_statement,
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest nesting of expressions and blocks the parser accepts.
///
/// Evaluation recurses once per level, so this bounds the stack a single
/// statement can use.
pub const MAX_NESTING_DEPTH: usize = 200;

/// Parses a whole token sequence into a `Node::Program`.
///
/// Blank lines are skipped. Each top-level statement starts a line and takes
/// the column of its first token as its indentation.
///
/// # Errors
/// Returns the first syntax error encountered.
///
/// # Example
/// ```
/// use thoughtscript::{
///     ast::Node,
///     interpreter::{lexer::tokenize, parser::parse_program},
/// };
///
/// let tokens = tokenize("think 1 as x\n\nexpress x\n").unwrap();
/// let Node::Program { statements } = parse_program(&tokens).unwrap() else {
///     unreachable!()
/// };
///
/// assert_eq!(statements.len(), 2);
/// ```
pub fn parse_program(tokens: &[Token]) -> ParseResult<Node> {
    let mut tokens = tokens.iter().peekable();
    let mut statements = Vec::new();

    loop {
        skip_newlines(&mut tokens);

        let indent = match tokens.peek() {
            None
            | Some(Token { kind: TokenKind::Eof,
                           .. }) => break,
            Some(token) => token.column,
        };

        statements.push(parse_statement(&mut tokens, indent, 0)?);
        expect_statement_end(&mut tokens)?;
    }

    Ok(Node::Program { statements })
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, logical or, and recursively descends through the
/// precedence hierarchy.
///
/// Grammar: `expression := logical_or`
///
/// `depth` is the nesting level the expression starts at.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_logical_or(tokens, depth)
}
