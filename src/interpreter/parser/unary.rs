use std::iter::Peekable;

use crate::{
    ast::{LiteralValue, Node, UnaryOperator},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{descend, expect, parse_comma_separated, unexpected},
        },
    },
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `-` (numeric negation)
/// - `not` and `!` (logical not)
///
/// Unary operators are right-associative, so `not -x` parses as `not (-x)`.
///
/// Grammar:
/// ```text
///     unary := ("-" | "not" | "!") unary
///            | primary
/// ```
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    let (op, token) = match tokens.peek().copied() {
        Some(token @ Token { kind: TokenKind::Minus,
                             .. }) => (UnaryOperator::Negate, token),
        Some(token @ Token { kind: TokenKind::Not | TokenKind::Bang,
                             .. }) => (UnaryOperator::Not, token),
        _ => return parse_primary(tokens, depth),
    };

    tokens.next();
    let operand = parse_unary(tokens, descend(depth, token)?)?;

    Ok(Node::UnaryOp { op,
                       operand: Box::new(operand),
                       line: token.line })
}

/// Parses a primary (atomic) expression.
///
/// Grammar (simplified):
/// ```text
///     primary := NUMBER | STRING | "true" | "false" | "null"
///              | identifier ("(" arguments ")")?
///              | "(" expression ")"
///              | "memories" | "even" | "odd"
/// ```
///
/// `memories` becomes the identifier of the same name; `even` and `odd` are
/// shorthands for the strings `"even"` and `"odd"`.
///
/// # Errors
/// `UnexpectedToken` with `expression` as the expected kind when the token
/// cannot start an expression.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    let Some(token) = tokens.peek().copied() else {
        return Err(unexpected("expression", None));
    };
    let line = token.line;

    let literal = match &token.kind {
        TokenKind::Integer(n) => LiteralValue::Integer(*n),
        TokenKind::Real(x) => LiteralValue::Real(*x),
        TokenKind::Str(s) => LiteralValue::Str(s.clone()),
        TokenKind::Bool(b) => LiteralValue::Bool(*b),
        TokenKind::Null => LiteralValue::Null,
        TokenKind::Even => LiteralValue::from("even"),
        TokenKind::Odd => LiteralValue::from("odd"),
        TokenKind::Memories => {
            tokens.next();
            return Ok(Node::Identifier { name: "memories".to_string(),
                                         line });
        },
        TokenKind::Identifier(name) => {
            tokens.next();
            return parse_identifier_or_call(tokens, name.clone(), line, depth);
        },
        TokenKind::LParen => return parse_grouping(tokens, descend(depth, token)?),
        _ => return Err(unexpected("expression", Some(token))),
    };

    tokens.next();
    Ok(Node::Literal { value: literal,
                       line })
}

/// Parses the rest of an identifier reference or a call after its name.
///
/// Grammar: `call := identifier "(" (expression ("," expression)*)? ")"`
fn parse_identifier_or_call<'a, I>(tokens: &mut Peekable<I>,
                                   name: String,
                                   line: usize,
                                   depth: usize)
                                   -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    let Some(open) = tokens.next_if(|token| token.kind == TokenKind::LParen) else {
        return Ok(Node::Identifier { name, line });
    };

    let depth = descend(depth, open)?;
    let arguments = parse_comma_separated(tokens,
                                          |tokens| parse_expression(tokens, depth),
                                          &TokenKind::RParen)?;

    Ok(Node::Call { name,
                    arguments,
                    line })
}

/// Parses `"(" expression ")"`.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    expect(tokens, &TokenKind::LParen)?;
    let expr = parse_expression(tokens, depth)?;
    expect(tokens, &TokenKind::RParen)?;

    Ok(expr)
}
