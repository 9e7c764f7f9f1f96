//! # solvra
//!
//! solvra is the core of an interactive scientific calculator. It lexes and
//! parses arithmetic expressions into an abstract syntax tree, evaluates
//! trees against a variable environment, and numerically solves
//! single-variable equations of the form `lhs = rhs` with Newton's method.
//!
//! The crate is a pure, single-threaded computation core: no I/O happens
//! outside the binary, every failure is an ordinary `Result`, and a shell
//! (graphical or otherwise) is expected to sit on top of the small
//! functional surface exposed here.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::engine::{
    evaluator::core::Environment,
    lexer::tokenize,
    parser::core::parse,
    solver::EquationSolver,
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Node` enum and related types that represent an
/// expression's syntactic structure as a tree. The AST is built by the
/// parser, evaluated by the evaluator, and walked structurally by rendering
/// layers through `label` and `children`.
///
/// # Responsibilities
/// - Defines the closed set of node variants.
/// - Attaches source offsets to nodes for error reporting.
/// - Provides display labels and child access for structural introspection.
pub mod ast;
/// Provides unified error types for lexing, parsing, evaluation and
/// solving.
///
/// This module defines all errors the core can signal. It standardizes
/// error reporting and carries detailed information about failures,
/// including error kinds, human-readable messages, and source offsets.
///
/// # Responsibilities
/// - Defines error enums for every failure mode.
/// - Attaches source offsets and detailed messages for user feedback.
/// - Integrates with the standard error-handling traits.
pub mod error;
/// Orchestrates lexing, parsing, evaluation, and equation solving.
///
/// This module ties together the processing stages and exposes the public
/// API for turning expression text into values and equations into roots.
///
/// # Responsibilities
/// - Coordinates the core components: lexer, parser, evaluator, solver.
/// - Provides entry points for each processing stage.
/// - Manages the flow of data and errors between stages.
pub mod engine;
/// General utilities for safe numeric conversion.
///
/// This module provides the conversion routines shared by the parser, such
/// as the checked conversion from literal text to a finite `f64`.
///
/// # Responsibilities
/// - Converts literal source text to values without silent coercion.
pub mod util;

/// Returns the result of evaluating an expression or solving an equation.
///
/// When `source` contains an `=`, the text is split at the first occurrence
/// and the two sides are handed to the equation solver; the returned value
/// is the converged root. Otherwise the text is tokenized, parsed, and
/// evaluated against `env`, and the returned value is the expression's
/// value.
///
/// The environment is shared across calls, so constants persist and the
/// solver's variable keeps its last value.
///
/// # Errors
/// Returns an error if parsing or evaluation fails, or if the solver
/// exhausts its iteration budget without converging.
///
/// # Examples
/// ```
/// use solvra::{engine::evaluator::core::Environment, get_result};
///
/// let mut env = Environment::with_constants();
///
/// // Expression mode: the value of the expression.
/// let value = get_result("2+3*4", &mut env).unwrap();
/// assert!((value - 14.0).abs() < 1e-9);
///
/// // Equation mode: the root of the equation.
/// let root = get_result("x+2=5", &mut env).unwrap();
/// assert!((root - 3.0).abs() < 1e-3);
/// ```
pub fn get_result(source: &str, env: &mut Environment) -> Result<f64, Box<dyn std::error::Error>> {
    if let Some((lhs, rhs)) = source.split_once('=') {
        let solver = EquationSolver::new();
        Ok(solver.solve(lhs, rhs, env)?)
    } else {
        let (tokens, _diagnostics) = tokenize(source);
        let root = parse(&tokens)?;
        Ok(env.eval(&root)?)
    }
}
