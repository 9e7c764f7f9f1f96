/// The lexer module tokenizes expression text for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a sequence
/// of tokens, each corresponding to a meaningful element: numbers, variable
/// and function names, operators, and parentheses. This is the first stage
/// of processing, and it never fails: characters it does not recognize are
/// skipped with a diagnostic.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source offsets.
/// - Classifies words as recognized functions or variables.
/// - Reports skipped characters as structured diagnostics.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser consumes the token sequence through a single forward cursor
/// with one token of lookahead and constructs an AST honoring operator
/// precedence and associativity. The grammar is fully predictive; no
/// backtracking occurs.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates the grammar, reporting errors with source offsets.
/// - Exposes the exponentiation associativity mode as configuration.
pub mod parser;
/// The evaluator module computes the value of an AST.
///
/// The evaluator walks the tree and combines the evaluated children of each
/// node, resolving variable references against an environment of bindings.
/// Evaluation is pure and deterministic for fixed environment contents.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Resolves variables through the `Environment`.
/// - Reports evaluation errors such as division by zero or unknown
///   variables.
pub mod evaluator;
/// The solver module finds numeric roots of single-variable equations.
///
/// The solver parses the two sides of an equation independently and runs a
/// bounded Newton iteration over the shared environment, varying one free
/// variable until the sides agree within a tolerance.
///
/// # Responsibilities
/// - Orchestrates parsing of both equation sides.
/// - Runs the Newton iteration with configurable parameters.
/// - Reports convergence failure when the iteration budget is exhausted.
pub mod solver;
