use std::iter::Peekable;

use crate::{
    ast::Node,
    engine::{lexer::Token, parser::binary::parse_additive},
    error::ParseError,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Controls how repeated `^` operators group.
///
/// By default exponentiation folds to the left like `*` and `/`, so
/// `2^3^2` means `(2^3)^2 = 64`. Standard mathematical convention groups
/// to the right, `2^(3^2) = 512`; hosts that want that convention opt into
/// `Right`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PowerAssociativity {
    /// `a ^ b ^ c` parses as `(a ^ b) ^ c`.
    #[default]
    Left,
    /// `a ^ b ^ c` parses as `a ^ (b ^ c)`.
    Right,
}

/// Configuration for a parse call.
#[derive(Debug, Clone, Default)]
pub struct ParserOptions {
    /// How repeated `^` operators group.
    pub power_associativity: PowerAssociativity,
}

/// Parses a complete token sequence into an AST with default options.
///
/// The whole sequence must form one expression; tokens left over after a
/// complete expression are an error.
///
/// # Parameters
/// - `tokens`: The `(Token, offset)` sequence produced by `tokenize`.
///
/// # Returns
/// The root of the parsed AST.
///
/// # Errors
/// Returns a `ParseError` describing the first grammar violation found.
///
/// # Example
/// ```
/// use solvra::engine::{lexer::tokenize, parser::core::parse};
///
/// let (tokens, _) = tokenize("2+3*4");
/// let root = parse(&tokens).unwrap();
///
/// assert_eq!(root.label(), "+");
/// assert_eq!(root.children().len(), 2);
/// ```
pub fn parse(tokens: &[(Token, usize)]) -> ParseResult<Node> {
    parse_with_options(tokens, &ParserOptions::default())
}

/// Parses a complete token sequence into an AST with explicit options.
///
/// # Parameters
/// - `tokens`: The `(Token, offset)` sequence produced by `tokenize`.
/// - `options`: Parser configuration.
///
/// # Returns
/// The root of the parsed AST.
///
/// # Errors
/// Returns a `ParseError` describing the first grammar violation found.
pub fn parse_with_options(tokens: &[(Token, usize)], options: &ParserOptions) -> ParseResult<Node> {
    let mut iter = tokens.iter().peekable();

    let root = parse_expression(&mut iter, options)?;

    match iter.peek() {
        Some((token, pos)) => {
            Err(ParseError::UnexpectedTrailingTokens { token: token.to_string(),
                                                       pos:   *pos, })
        },
        None => Ok(root),
    }
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing, used both at the top
/// level and for the contents of parentheses and function arguments.
/// It begins at the lowest-precedence level, addition, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, offset)` pairs.
/// - `options`: Parser configuration.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, options: &ParserOptions) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_additive(tokens, options)
}
