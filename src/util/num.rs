use crate::error::ParseError;

/// Converts numeric literal text to an `f64` if and only if it forms a
/// finite number.
///
/// The lexer admits any run of digits and `.` characters as a number token,
/// so literals like `2.5.3` or a lone `.` reach this function and are
/// rejected here. Literals whose decimal value exceeds the `f64` range are
/// rejected as well rather than rounding to infinity.
///
/// ## Errors
/// Returns `ParseError::InvalidNumber` if the text is not a valid finite
/// number.
///
/// ## Parameters
/// - `text`: The literal text as lexed from the source.
/// - `pos`: Byte offset of the literal, for error reporting.
///
/// ## Example
/// ```
/// use solvra::util::num::parse_literal;
///
/// assert_eq!(parse_literal("2.5", 0).unwrap(), 2.5);
/// assert_eq!(parse_literal(".5", 0).unwrap(), 0.5);
///
/// assert!(parse_literal("2.5.3", 0).is_err());
/// assert!(parse_literal(".", 0).is_err());
/// ```
pub fn parse_literal(text: &str, pos: usize) -> Result<f64, ParseError> {
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ParseError::InvalidNumber { literal: text.to_owned(),
                                             pos }),
    }
}
