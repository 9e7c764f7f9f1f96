/// Safe numeric conversion helpers.
///
/// This module provides the checked conversion from literal source text to
/// `f64` used by the parser. Conversion failures are reported as parse
/// errors instead of being silently coerced.
pub mod num;
