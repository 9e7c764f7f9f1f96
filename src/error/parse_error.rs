#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while parsing a token sequence.
pub enum ParseError {
    /// Found a token that cannot start or continue the current grammar rule.
    UnexpectedToken {
        /// The source text of the token encountered.
        token: String,
        /// The byte offset where the error occurred.
        pos:   usize,
    },
    /// Reached the end of input while a grammar rule was still incomplete.
    UnexpectedEndOfInput {
        /// The byte offset where the error occurred.
        pos: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The byte offset where the error occurred.
        pos: usize,
    },
    /// A function name was not followed by `(`.
    ExpectedFunctionParen {
        /// The function name.
        name: String,
        /// The byte offset where the error occurred.
        pos:  usize,
    },
    /// A numeric literal does not form a valid finite number
    /// (e.g. `2.5.3` or a lone `.`).
    InvalidNumber {
        /// The literal text as it appeared in the source.
        literal: String,
        /// The byte offset where the error occurred.
        pos:     usize,
    },
    /// Found extra tokens after parsing should have completed.
    UnexpectedTrailingTokens {
        /// The first extra token.
        token: String,
        /// The byte offset where the error occurred.
        pos:   usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, pos } => {
                write!(f, "Error at position {pos}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { pos } => {
                write!(f, "Error at position {pos}: Unexpected end of input.")
            },

            Self::ExpectedClosingParen { pos } => write!(f,
                                                         "Error at position {pos}: Expected closing parenthesis ')' but none found."),

            Self::ExpectedFunctionParen { name, pos } => write!(f,
                                                                "Error at position {pos}: Expected '(' after function name '{name}'."),

            Self::InvalidNumber { literal, pos } => {
                write!(f, "Error at position {pos}: Invalid numeric literal '{literal}'.")
            },

            Self::UnexpectedTrailingTokens { token, pos } => write!(f,
                                                                    "Error at position {pos}: Extra tokens after expression. Check your input: {token}"),
        }
    }
}

impl std::error::Error for ParseError {}
