use crate::{ast::FunctionName, engine::evaluator::core::Environment};

impl Environment {
    /// Applies a recognized function to an already-evaluated argument.
    ///
    /// The trigonometric functions operate in radians. `log` is the base-10
    /// logarithm and `ln` the natural logarithm. Domain violations follow
    /// floating-point semantics rather than raising a typed error: `sqrt`
    /// of a negative argument and `log`/`ln` of a non-positive argument
    /// yield NaN or an infinity, which propagate through the surrounding
    /// computation.
    ///
    /// # Example
    /// ```
    /// use solvra::{ast::FunctionName, engine::evaluator::core::Environment};
    ///
    /// assert_eq!(Environment::eval_function(FunctionName::Sqrt, 9.0), 3.0);
    /// assert!((Environment::eval_function(FunctionName::Log, 100.0) - 2.0).abs() < 1e-12);
    ///
    /// assert!(Environment::eval_function(FunctionName::Sqrt, -1.0).is_nan());
    /// ```
    #[must_use]
    pub fn eval_function(function: FunctionName, argument: f64) -> f64 {
        use FunctionName::{Cos, Ln, Log, Sin, Sqrt, Tan};

        match function {
            Sin => argument.sin(),
            Cos => argument.cos(),
            Tan => argument.tan(),
            Log => argument.log10(),
            Ln => argument.ln(),
            Sqrt => argument.sqrt(),
        }
    }
}
