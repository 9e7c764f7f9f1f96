/// Core parsing logic and configuration.
///
/// Contains the parse entry points, the result alias, and the parser
/// options, including the exponentiation associativity mode.
pub mod core;

/// Binary operator parsing.
///
/// Implements the precedence ladder for `+`, `-`, `*`, `/`, and `^` as
/// left-folding grammar levels.
pub mod binary;

/// Factor parsing.
///
/// Parses the atoms of the grammar: numeric literals, variables, function
/// calls, and parenthesized sub-expressions.
pub mod factor;
