use crate::error::{EvalError, ParseError};

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while solving an equation.
pub enum SolveError {
    /// One side of the equation failed to parse.
    Parse(ParseError),
    /// Evaluating one side of the equation failed during iteration.
    Eval(EvalError),
    /// The iteration budget was exhausted without the residual dropping
    /// below the convergence tolerance.
    ConvergenceFailure {
        /// The number of iterations that were run.
        iterations: usize,
    },
}

impl std::fmt::Display for SolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Eval(e) => write!(f, "{e}"),
            Self::ConvergenceFailure { iterations } => {
                write!(f, "No root found after {iterations} iterations.")
            },
        }
    }
}

impl std::error::Error for SolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Eval(e) => Some(e),
            Self::ConvergenceFailure { .. } => None,
        }
    }
}

impl From<ParseError> for SolveError {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<EvalError> for SolveError {
    fn from(error: EvalError) -> Self {
        Self::Eval(error)
    }
}
