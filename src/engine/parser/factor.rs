use std::iter::Peekable;

use crate::{
    ast::{FunctionName, Node},
    engine::{
        lexer::Token,
        parser::core::{ParseResult, ParserOptions, parse_expression},
    },
    error::ParseError,
    util::num::parse_literal,
};

/// Parses a factor, the atomic level of the grammar.
///
/// Grammar:
/// ```text
///     factor := NUMBER
///             | VARIABLE
///             | FUNCTION "(" expression ")"
///             | "(" expression ")"
/// ```
/// The function dispatches on the leading token. Any other token at this
/// position is a parse error, as is running out of tokens.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a factor.
/// - `options`: Parser configuration.
///
/// # Returns
/// The parsed factor node, or a `ParseError` on failure.
pub(crate) fn parse_factor<'a, I>(tokens: &mut Peekable<I>,
                                  options: &ParserOptions)
                                  -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let peeked = tokens.peek()
                       .ok_or(ParseError::UnexpectedEndOfInput { pos: 0 })?;

    match peeked {
        (Token::Number(_), _) => parse_number(tokens),
        (Token::Variable(_), _) => parse_variable(tokens),
        (Token::Function(_), _) => parse_function_call(tokens, options),
        (Token::LParen, _) => parse_grouping(tokens, options),
        (token, pos) => Err(ParseError::UnexpectedToken { token: token.to_string(),
                                                          pos:   *pos, }),
    }
}

/// Parses a numeric literal into a `Node::Number`.
///
/// The literal text is converted to a value here; text the lexer admitted
/// but that does not form a valid number (such as `2.5.3`) fails with
/// `InvalidNumber` rather than being coerced.
fn parse_number<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Number(text), pos)) => Ok(Node::Number { value: parse_literal(text, *pos)?,
                                                              pos:   *pos, }),
        _ => unreachable!(),
    }
}

/// Parses a variable reference into a `Node::Variable`.
///
/// The name is not resolved here; binding happens at evaluation time
/// against the environment.
fn parse_variable<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Variable(name), pos)) => Ok(Node::Variable { name: name.clone(),
                                                                  pos:  *pos, }),
        _ => unreachable!(),
    }
}

/// Parses a function call of the form `name ( expression )`.
///
/// The function name must be followed by `(`; the argument is a full
/// expression; the closing `)` is required.
///
/// # Errors
/// Returns a `ParseError` if:
/// - `(` does not follow the function name,
/// - the argument fails to parse,
/// - the closing `)` is missing.
fn parse_function_call<'a, I>(tokens: &mut Peekable<I>,
                              options: &ParserOptions)
                              -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (name, pos) = match tokens.next() {
        Some((Token::Function(name), pos)) => (name.clone(), *pos),
        _ => unreachable!(),
    };

    let function =
        FunctionName::from_name(&name).ok_or_else(|| ParseError::UnexpectedToken { token:
                                                                                       name.clone(),
                                                                                   pos })?;

    match tokens.next() {
        Some((Token::LParen, _)) => {},
        _ => return Err(ParseError::ExpectedFunctionParen { name, pos }),
    }

    let argument = parse_expression(tokens, options)?;

    match tokens.next() {
        Some((Token::RParen, _)) => Ok(Node::FunctionCall { function,
                                                            argument: Box::new(argument),
                                                            pos }),
        _ => Err(ParseError::ExpectedClosingParen { pos }),
    }
}

/// Parses a parenthesized expression.
///
/// Expected form `( expression )`
///
/// The function consumes the opening parenthesis, parses the enclosed
/// expression, and then requires a closing `)`. Failure to find the closing
/// parenthesis yields `ParseError::ExpectedClosingParen`. Grouping produces
/// no node of its own; the inner expression is returned as-is.
///
/// Grammar: `grouping := "(" expression ")"`
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, options: &ParserOptions) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (_, pos) = *tokens.next().unwrap();
    let expr = parse_expression(tokens, options)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        _ => Err(ParseError::ExpectedClosingParen { pos }),
    }
}
