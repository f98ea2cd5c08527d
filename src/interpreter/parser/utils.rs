use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{MAX_NESTING_DEPTH, ParseResult},
    },
};

/// Enters one more level of nesting at `token`.
///
/// # Errors
/// `NestingTooDeep` once `depth` reaches `MAX_NESTING_DEPTH`.
pub(in crate::interpreter::parser) fn descend(depth: usize, token: &Token) -> ParseResult<usize> {
    if depth >= MAX_NESTING_DEPTH {
        return Err(ParseError::NestingTooDeep { limit:  MAX_NESTING_DEPTH,
                                                line:   token.line,
                                                column: token.column, });
    }
    Ok(depth + 1)
}

/// Builds the syntax error for a token the grammar did not expect.
///
/// A missing token (the stream ran past `Eof`) is reported as `EOF` at
/// position `0:0`.
pub(in crate::interpreter::parser) fn unexpected(expected: &str,
                                                 found: Option<&Token>)
                                                 -> ParseError {
    match found {
        Some(token) => ParseError::UnexpectedToken { expected: expected.to_string(),
                                                     found:    token.kind.name().to_string(),
                                                     line:     token.line,
                                                     column:   token.column, },
        None => ParseError::UnexpectedToken { expected: expected.to_string(),
                                              found:    TokenKind::Eof.name().to_string(),
                                              line:     0,
                                              column:   0, },
    }
}

/// Consumes the next token if it has the given kind.
///
/// Only payload-free kinds (keywords and punctuation) are meaningful here.
///
/// # Errors
/// `UnexpectedToken` naming `kind` as expected and the actual token as found.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    kind: &TokenKind)
                                                    -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    if let Some(token) = tokens.next_if(|token| token.kind == *kind) {
        return Ok(token);
    }
    Err(unexpected(kind.name(), tokens.peek().copied()))
}

/// Parses a plain identifier and returns its name.
///
/// Reserved words never lex as identifiers, so no separate check is needed.
///
/// # Errors
/// `UnexpectedToken` if the next token is not an identifier.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<String>
    where I: Iterator<Item = &'a Token>
{
    match tokens.peek() {
        Some(Token { kind: TokenKind::Identifier(name),
                     .. }) => {
            let name = name.clone();
            tokens.next();
            Ok(name)
        },
        other => Err(unexpected("IDENTIFIER", other.copied())),
    }
}

/// Parses a comma-separated list of items until a closing token.
///
/// Shared by call arguments and intention parameters. An immediately
/// encountered closing token produces an empty list.
///
/// Grammar (simplified): `list := item ("," item)*`
///
/// # Errors
/// Propagates item errors; `UnexpectedToken` when neither `,` nor the closing
/// token follows an item.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &TokenKind)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut items = Vec::new();
    if tokens.next_if(|token| token.kind == *closing).is_some() {
        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.peek() {
            Some(Token { kind: TokenKind::Comma,
                         .. }) => {
                tokens.next();
            },
            Some(token) if token.kind == *closing => {
                tokens.next();
                break;
            },
            other => {
                let expected = format!("COMMA or {}", closing.name());
                return Err(unexpected(&expected, other.copied()));
            },
        }
    }
    Ok(items)
}
