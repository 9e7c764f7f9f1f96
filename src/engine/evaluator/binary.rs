use crate::{
    ast::BinaryOperator,
    engine::evaluator::core::{Environment, EvalResult},
    error::EvalError,
};

impl Environment {
    /// Evaluates a binary arithmetic operation on two already-evaluated
    /// operands.
    ///
    /// Division is checked against an exactly-zero divisor; any nonzero
    /// divisor, however small, divides normally. Exponentiation uses the
    /// general floating-point power function, so non-integer and negative
    /// exponents follow IEEE semantics.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `pos`: Byte offset of the operator, for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<f64>` containing the computed value.
    ///
    /// # Example
    /// ```
    /// use solvra::{ast::BinaryOperator, engine::evaluator::core::Environment};
    ///
    /// let product = Environment::eval_binary(BinaryOperator::Mul, 1.5, 2.0, 0).unwrap();
    /// assert_eq!(product, 3.0);
    ///
    /// assert!(Environment::eval_binary(BinaryOperator::Div, 5.0, 0.0, 0).is_err());
    /// assert!(Environment::eval_binary(BinaryOperator::Div, 5.0, 0.0001, 0).is_ok());
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: f64, right: f64, pos: usize) -> EvalResult<f64> {
        use BinaryOperator::{Add, Div, Mul, Pow, Sub};

        match op {
            Add => Ok(left + right),
            Sub => Ok(left - right),
            Mul => Ok(left * right),
            Div => {
                if right == 0.0 {
                    Err(EvalError::DivisionByZero { pos })
                } else {
                    Ok(left / right)
                }
            },
            Pow => Ok(left.powf(right)),
        }
    }
}
