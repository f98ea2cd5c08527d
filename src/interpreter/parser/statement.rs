use std::iter::Peekable;

use crate::{
    ast::Node,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            block::{parse_block, skip_newlines},
            core::{ParseResult, parse_expression},
            utils::{descend, expect, parse_identifier, unexpected},
        },
    },
};

/// Parses a single statement.
///
/// The leading keyword decides the form; any other token starts an expression
/// statement.
///
/// Grammar:
/// ```text
///     statement := think | express | consider | if | remember | show
///                | intention | expression
/// ```
///
/// # Parameters
/// - `tokens`: Token stream positioned at the first token of the statement.
/// - `indent`: Indentation of the line the statement starts on. Blocks opened
///   by the statement must be indented deeper than this.
/// - `depth`: Nesting depth of the enclosing blocks and expressions.
///
/// # Errors
/// `NestingTooDeep` once `depth` reaches
/// [`MAX_NESTING_DEPTH`](crate::interpreter::parser::core::MAX_NESTING_DEPTH).
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>,
                              indent: usize,
                              depth: usize)
                              -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    let Some(token) = tokens.peek().copied() else {
        return Err(unexpected("statement", None));
    };
    let depth = descend(depth, token)?;

    match token.kind {
        TokenKind::Think => parse_think(tokens, depth),
        TokenKind::Express => parse_express(tokens, depth),
        TokenKind::Consider => parse_consider(tokens, indent, depth),
        TokenKind::If => parse_if(tokens, indent, depth),
        TokenKind::Remember => parse_remember(tokens, depth),
        TokenKind::Show => parse_show(tokens, depth),
        TokenKind::Define => parse_intention(tokens, indent, depth),
        _ => parse_expression(tokens, depth),
    }
}

/// Parses `think <expr> [as <identifier>]`.
fn parse_think<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    let line = expect(tokens, &TokenKind::Think)?.line;
    let expr = parse_expression(tokens, depth)?;

    let name = if tokens.next_if(|token| token.kind == TokenKind::As)
                         .is_some()
    {
        Some(parse_identifier(tokens)?)
    } else {
        None
    };

    Ok(Node::Think { expr: Box::new(expr),
                     name,
                     line })
}

/// Parses `express <expr>`.
fn parse_express<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    let line = expect(tokens, &TokenKind::Express)?.line;
    let expr = parse_expression(tokens, depth)?;

    Ok(Node::Express { expr: Box::new(expr),
                       line })
}

/// Parses `consider <identifier> from <expr> to <expr> : <block>`.
fn parse_consider<'a, I>(tokens: &mut Peekable<I>,
                         indent: usize,
                         depth: usize)
                         -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    let line = expect(tokens, &TokenKind::Consider)?.line;
    let var = parse_identifier(tokens)?;

    expect(tokens, &TokenKind::From)?;
    let start = parse_expression(tokens, depth)?;
    expect(tokens, &TokenKind::To)?;
    let end = parse_expression(tokens, depth)?;

    let colon = expect(tokens, &TokenKind::Colon)?;
    let body = parse_block(tokens, indent, colon, depth)?;

    Ok(Node::Consider { var,
                        start: Box::new(start),
                        end: Box::new(end),
                        body,
                        line })
}

/// Parses `if <expr> : <block> [otherwise : <block>]`.
///
/// An `otherwise` on a later line attaches to this `if` only when its column
/// is at least the column of the `if` keyword, so nested conditionals pair up
/// by indentation:
///
/// ```text
///     if a:
///         if b:
///             express 1
///         otherwise:        # belongs to `if b`
///             express 2
///     otherwise:            # belongs to `if a`
///         express 3
/// ```
fn parse_if<'a, I>(tokens: &mut Peekable<I>,
                   indent: usize,
                   depth: usize)
                   -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    let if_token = expect(tokens, &TokenKind::If)?;
    let condition = parse_expression(tokens, depth)?;

    let colon = expect(tokens, &TokenKind::Colon)?;
    let then_block = parse_block(tokens, indent, colon, depth)?;

    let mut lookahead = tokens.clone();
    skip_newlines(&mut lookahead);

    let attaches = matches!(lookahead.peek(),
                            Some(token) if token.kind == TokenKind::Otherwise
                                           && token.column >= if_token.column);

    let else_block = if attaches {
        lookahead.next();
        *tokens = lookahead;

        let colon = expect(tokens, &TokenKind::Colon)?;
        Some(parse_block(tokens, indent, colon, depth)?)
    } else {
        None
    };

    Ok(Node::If { condition: Box::new(condition),
                  then_block,
                  else_block,
                  line: if_token.line })
}

/// Parses `remember <expr> as <expr>`.
fn parse_remember<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    let line = expect(tokens, &TokenKind::Remember)?.line;
    let value = parse_expression(tokens, depth)?;
    expect(tokens, &TokenKind::As)?;
    let key = parse_expression(tokens, depth)?;

    Ok(Node::Remember { value: Box::new(value),
                        key: Box::new(key),
                        line })
}

/// Parses `show <expr>`.
fn parse_show<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    let line = expect(tokens, &TokenKind::Show)?.line;
    let target = parse_expression(tokens, depth)?;

    Ok(Node::Show { target: Box::new(target),
                    line })
}

/// Parses an intention definition.
///
/// Grammar:
/// ```text
///     intention := "define" "intention" identifier
///                  ("with" identifier ("," identifier)*)? ":" block
/// ```
fn parse_intention<'a, I>(tokens: &mut Peekable<I>,
                          indent: usize,
                          depth: usize)
                          -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    let line = expect(tokens, &TokenKind::Define)?.line;
    expect(tokens, &TokenKind::Intention)?;
    let name = parse_identifier(tokens)?;

    let mut params = Vec::new();
    if tokens.next_if(|token| token.kind == TokenKind::With)
             .is_some()
    {
        params.push(parse_identifier(tokens)?);
        while tokens.next_if(|token| token.kind == TokenKind::Comma)
                    .is_some()
        {
            params.push(parse_identifier(tokens)?);
        }
    }

    let colon = expect(tokens, &TokenKind::Colon)?;
    let body = parse_block(tokens, indent, colon, depth)?;

    Ok(Node::Intention { name,
                         params,
                         body,
                         line })
}
