use std::collections::HashMap;

use crate::{ast::Node, error::EvalError};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Stores the variable bindings used to resolve names during evaluation.
///
/// An `Environment` maps variable names to numeric values. It is
/// longer-lived than any single tree: the same environment is shared across
/// repeated evaluations of one expression and across the iterations of one
/// solve call, which rebinds its free variable in place.
///
/// Evaluation never mutates the environment; only the orchestrating caller
/// (and the solver, through `set`) does.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    variables: HashMap<String, f64>,
}

impl Environment {
    /// Creates an empty environment with no bindings.
    #[must_use]
    pub fn new() -> Self {
        Self { variables: HashMap::new(), }
    }

    /// Creates an environment preloaded with the constants `pi` and `e`.
    ///
    /// # Example
    /// ```
    /// use solvra::engine::evaluator::core::Environment;
    ///
    /// let env = Environment::with_constants();
    ///
    /// assert_eq!(env.get("pi"), Some(std::f64::consts::PI));
    /// assert_eq!(env.get("e"), Some(std::f64::consts::E));
    /// ```
    #[must_use]
    pub fn with_constants() -> Self {
        let mut env = Self::new();
        env.set("pi", std::f64::consts::PI);
        env.set("e", std::f64::consts::E);
        env
    }

    /// Binds a variable to a value, replacing any previous binding.
    pub fn set(&mut self, name: &str, value: f64) {
        self.variables.insert(name.to_owned(), value);
    }

    /// Looks up a variable by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.variables.get(name).copied()
    }

    /// Returns `true` when the variable is bound.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Evaluates an AST against this environment.
    ///
    /// Evaluation is a pure function of the tree and the current environment
    /// contents: for a fixed environment, repeated calls yield bit-identical
    /// results. Children of a binary operation are evaluated left-to-right
    /// before being combined.
    ///
    /// # Parameters
    /// - `node`: Root of the tree to evaluate.
    ///
    /// # Returns
    /// The computed value.
    ///
    /// # Errors
    /// - `EvalError::UnknownVariable` when the tree references a name this
    ///   environment does not bind.
    /// - `EvalError::DivisionByZero` when a divisor evaluates to exactly
    ///   zero.
    ///
    /// # Example
    /// ```
    /// use solvra::engine::{evaluator::core::Environment, lexer::tokenize, parser::core::parse};
    ///
    /// let (tokens, _) = tokenize("x^2+1");
    /// let root = parse(&tokens).unwrap();
    ///
    /// let mut env = Environment::new();
    /// env.set("x", 3.0);
    ///
    /// assert!((env.eval(&root).unwrap() - 10.0).abs() < 1e-9);
    /// ```
    pub fn eval(&self, node: &Node) -> EvalResult<f64> {
        match node {
            Node::Number { value, .. } => Ok(*value),
            Node::Variable { name, pos } => {
                self.get(name)
                    .ok_or_else(|| EvalError::UnknownVariable { name: name.clone(),
                                                                pos:  *pos, })
            },
            Node::BinaryOp { op, left, right, pos } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, left, right, *pos)
            },
            Node::FunctionCall { function, argument, .. } => {
                let argument = self.eval(argument)?;
                Ok(Self::eval_function(*function, argument))
            },
        }
    }
}
