use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Node},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{core::ParseResult, unary::parse_unary, utils::descend},
    },
};

/// Parses one left-associative precedence level.
///
/// Repeatedly parses an operand with `next` and folds it into the left-hand
/// side while the upcoming token maps to one of `operators`. Every fold nests
/// the tree one level deeper.
fn parse_left_associative<'a, I>(tokens: &mut Peekable<I>,
                                 mut depth: usize,
                                 operators: &[BinaryOperator],
                                 next: fn(&mut Peekable<I>, usize) -> ParseResult<Node>)
                                 -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = next(tokens, depth)?;

    while let Some(token) = tokens.peek().copied()
          && let Some(op) = token_to_binary_operator(&token.kind)
          && operators.contains(&op)
    {
        tokens.next();
        depth = descend(depth, token)?;

        let right = next(tokens, depth)?;
        left = Node::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                line: token.line };
    }

    Ok(left)
}

/// Parses logical OR expressions.
///
/// Grammar: `logical_or := logical_and ("or" logical_and)*`
pub fn parse_logical_or<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_left_associative(tokens, depth, &[BinaryOperator::Or], parse_logical_and)
}

/// Parses logical AND expressions.
///
/// Grammar: `logical_and := equality ("and" equality)*`
pub fn parse_logical_and<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_left_associative(tokens, depth, &[BinaryOperator::And], parse_equality)
}

/// Parses equality expressions. The keyword `is` is an alias for `==`.
///
/// Grammar: `equality := comparison (("==" | "!=" | "is") comparison)*`
pub fn parse_equality<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_left_associative(tokens,
                           depth,
                           &[BinaryOperator::Equal, BinaryOperator::NotEqual],
                           parse_comparison)
}

/// Parses relational expressions.
///
/// Grammar: `comparison := additive (("<" | ">" | "<=" | ">=") additive)*`
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_left_associative(tokens,
                           depth,
                           &[BinaryOperator::Less,
                             BinaryOperator::Greater,
                             BinaryOperator::LessEqual,
                             BinaryOperator::GreaterEqual],
                           parse_additive)
}

/// Parses addition and subtraction expressions.
///
/// Grammar: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_left_associative(tokens,
                           depth,
                           &[BinaryOperator::Add, BinaryOperator::Sub],
                           parse_multiplicative)
}

/// Parses multiplication and division expressions.
///
/// Grammar: `multiplicative := unary (("*" | "/") unary)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_left_associative(tokens,
                           depth,
                           &[BinaryOperator::Mul, BinaryOperator::Div],
                           parse_unary)
}

/// Maps a token kind to its corresponding binary operator.
///
/// Returns `None` for every token that does not continue a binary expression.
///
/// # Example
/// ```
/// use thoughtscript::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenKind, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&TokenKind::Is),
///            Some(BinaryOperator::Equal));
/// assert_eq!(token_to_binary_operator(&TokenKind::Colon), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: &TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Star => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        TokenKind::Less => Some(BinaryOperator::Less),
        TokenKind::Greater => Some(BinaryOperator::Greater),
        TokenKind::LessEqual => Some(BinaryOperator::LessEqual),
        TokenKind::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        TokenKind::EqualEqual | TokenKind::Is => Some(BinaryOperator::Equal),
        TokenKind::BangEqual => Some(BinaryOperator::NotEqual),
        TokenKind::And => Some(BinaryOperator::And),
        TokenKind::Or => Some(BinaryOperator::Or),
        _ => None,
    }
}
