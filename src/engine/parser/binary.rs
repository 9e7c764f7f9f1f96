use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Node},
    engine::{
        lexer::Token,
        parser::{
            core::{ParseResult, ParserOptions, PowerAssociativity},
            factor::parse_factor,
        },
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with offset information.
/// - `options`: Parser configuration.
///
/// # Returns
/// A `Node::BinaryOp` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, options: &ParserOptions) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_multiplicative(tokens, options)?;
    loop {
        if let Some((token, pos)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            tokens.next();
            let right = parse_multiplicative(tokens, options)?;
            left = Node::BinaryOp { op,
                                    left: Box::new(left),
                                    right: Box::new(right),
                                    pos: *pos };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators: `*` and `/`.
///
/// The rule is: `multiplicative := exponent (("*" | "/") exponent)*`
///
/// # Parameters
/// - `tokens`: Token stream with offset information.
/// - `options`: Parser configuration.
///
/// # Returns
/// A binary expression tree combining exponent-level nodes.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>,
                                   options: &ParserOptions)
                                   -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_exponent(tokens, options)?;
    loop {
        if let Some((token, pos)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            tokens.next();
            let right = parse_exponent(tokens, options)?;
            left = Node::BinaryOp { op,
                                    left: Box::new(left),
                                    right: Box::new(right),
                                    pos: *pos };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses exponentiation expressions.
///
/// The rule is: `exponent := factor ("^" factor)*`
///
/// Grouping follows `options.power_associativity`. With `Left` (the
/// default), `a ^ b ^ c` folds like the other operators into
/// `(a ^ b) ^ c`. With `Right`, the right-hand side recurses into this
/// level, producing `a ^ (b ^ c)`.
///
/// # Parameters
/// - `tokens`: Token stream with offset information.
/// - `options`: Parser configuration.
///
/// # Returns
/// An exponentiation expression tree.
pub fn parse_exponent<'a, I>(tokens: &mut Peekable<I>, options: &ParserOptions) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_factor(tokens, options)?;
    while let Some((Token::Caret, pos)) = tokens.peek() {
        let pos = *pos;
        tokens.next();
        let right = match options.power_associativity {
            PowerAssociativity::Left => parse_factor(tokens, options)?,
            PowerAssociativity::Right => parse_exponent(tokens, options)?,
        };
        left = Node::BinaryOp { op: BinaryOperator::Pow,
                                left: Box::new(left),
                                right: Box::new(right),
                                pos };
    }
    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token represents one of
/// `+`, `-`, `*`, `/`, or `^`. Returns `None` for all other tokens.
///
/// # Parameters
/// - `token`: Token to convert.
///
/// # Example
/// ```
/// use solvra::{ast::BinaryOperator, engine::{lexer::Token, parser::binary::token_to_binary_operator}};
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Caret => Some(BinaryOperator::Pow),
        _ => None,
    }
}
