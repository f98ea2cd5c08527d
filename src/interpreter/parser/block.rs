use std::iter::Peekable;

use crate::{
    ast::Block,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{core::ParseResult, statement::parse_statement, utils::unexpected},
    },
};

/// Parses the block that follows a `:`.
///
/// If the next token sits on the same line as the colon, that inline statement
/// opens the block. The block then collects every following statement whose
/// line is indented deeper than `indent`, the indentation of the line that
/// opened the block. It also ends at `otherwise`, which belongs to an
/// enclosing `if`.
///
/// ```text
///     consider i from 1 to 3:
///         express i          # in the block
///         express i * 2      # in the block
///     express "done"         # not in the block
///
///     if ready: express 1     # in the block
///         express 2          # in the block
/// ```
///
/// # Parameters
/// - `tokens`: Token stream positioned right after the colon.
/// - `indent`: Indentation of the opening line.
/// - `colon`: The colon token, used for the block line and for errors.
/// - `depth`: Nesting depth of the statement that opened the block.
///
/// # Errors
/// - `ExpectedIndentedBlock` if no statement is indented under the opener.
/// - Propagates errors from the statements in the block.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>,
                          indent: usize,
                          colon: &Token,
                          depth: usize)
                          -> ParseResult<Block>
    where I: Iterator<Item = &'a Token> + Clone
{
    let line = colon.line;
    let mut statements = Vec::new();

    if let Some(token) = tokens.peek()
       && !matches!(token.kind, TokenKind::NewLine | TokenKind::Eof)
    {
        statements.push(parse_statement(tokens, indent, depth)?);
        expect_statement_end(tokens)?;
    }

    loop {
        // Line breaks are only consumed once the next line is known to belong
        // to this block; the enclosing statement needs them to end.
        let mut lookahead = tokens.clone();
        skip_newlines(&mut lookahead);

        let column = match lookahead.peek() {
            Some(token)
                if token.column > indent
                   && !matches!(token.kind, TokenKind::Eof | TokenKind::Otherwise) =>
            {
                token.column
            },
            _ => break,
        };

        *tokens = lookahead;
        statements.push(parse_statement(tokens, column, depth)?);
        expect_statement_end(tokens)?;
    }

    if statements.is_empty() {
        return Err(ParseError::ExpectedIndentedBlock { line,
                                                       column: colon.column });
    }

    Ok(Block { statements, line })
}

/// Consumes consecutive line breaks.
pub fn skip_newlines<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a Token>
{
    while tokens.next_if(|token| token.kind == TokenKind::NewLine)
                .is_some()
    {}
}

/// Checks that a statement is followed by a line break, the end of input or
/// an `otherwise`. The terminator itself is not consumed.
///
/// # Errors
/// `UnexpectedToken` when another statement starts on the same line.
pub fn expect_statement_end<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<()>
    where I: Iterator<Item = &'a Token>
{
    match tokens.peek() {
        None
        | Some(Token { kind: TokenKind::NewLine | TokenKind::Eof | TokenKind::Otherwise,
                       .. }) => Ok(()),
        Some(token) => Err(unexpected("NEWLINE", Some(token))),
    }
}
