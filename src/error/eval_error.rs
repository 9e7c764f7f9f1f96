#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating an AST.
pub enum EvalError {
    /// Tried to use a variable that is not bound in the environment.
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The byte offset where the variable appears in the source.
        pos:  usize,
    },
    /// Attempted division by exactly zero.
    DivisionByZero {
        /// The byte offset of the division operator in the source.
        pos: usize,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name, pos } => {
                write!(f, "Error at position {pos}: Unknown variable '{name}'.")
            },
            Self::DivisionByZero { pos } => {
                write!(f, "Error at position {pos}: Division by zero.")
            },
        }
    }
}

impl std::error::Error for EvalError {}
