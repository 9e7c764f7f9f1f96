/// Core evaluation logic and the variable environment.
///
/// Contains the `Environment` type and the main tree-walking evaluation
/// entry point.
pub mod core;

/// Binary operator evaluation.
///
/// Implements evaluation for the arithmetic operators, including the
/// exact-zero division check.
pub mod binary;

/// Function evaluation.
///
/// Applies the recognized unary functions to an evaluated argument.
pub mod function;
