use solvra::{
    ast::Node,
    engine::{
        evaluator::core::Environment,
        lexer::{Token, tokenize},
        parser::core::{ParserOptions, PowerAssociativity, parse, parse_with_options},
        solver::{EquationSolver, SolverConfig},
    },
    error::{EvalError, ParseError, SolveError},
    get_result,
};

const TOLERANCE: f64 = 1e-9;

fn parse_source(source: &str) -> Result<Node, ParseError> {
    let (tokens, _) = tokenize(source);
    parse(&tokens)
}

fn evaluate(source: &str) -> Result<f64, Box<dyn std::error::Error>> {
    let root = parse_source(source)?;
    Ok(Environment::with_constants().eval(&root)?)
}

fn assert_evaluates_to(source: &str, expected: f64) {
    match evaluate(source) {
        Ok(value) => assert!((value - expected).abs() < TOLERANCE,
                             "'{source}' evaluated to {value}, expected {expected}"),
        Err(e) => panic!("'{source}' failed to evaluate: {e}"),
    }
}

fn assert_parse_fails(source: &str) -> ParseError {
    match parse_source(source) {
        Ok(root) => panic!("'{source}' parsed to {root} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn basic_arithmetic_and_precedence() {
    assert_evaluates_to("2+3*4", 14.0);
    assert_evaluates_to("8-5", 3.0);
    assert_evaluates_to("10/2", 5.0);
    assert_evaluates_to("7*9", 63.0);
    assert_evaluates_to("2^10", 1024.0);
    assert_evaluates_to("10-4-3", 3.0);
    assert_evaluates_to("100/10/2", 5.0);
}

#[test]
fn grouping_overrides_precedence() {
    assert_evaluates_to("(2+3)*4", 20.0);
    assert_evaluates_to("2*(3+4)", 14.0);
    assert_evaluates_to("((2))", 2.0);
}

#[test]
fn power_folds_left_by_default() {
    // (2^3)^2, not 2^(3^2).
    assert_evaluates_to("2^3^2", 64.0);
}

#[test]
fn power_associativity_is_configurable() {
    let (tokens, _) = tokenize("2^3^2");
    let options = ParserOptions { power_associativity: PowerAssociativity::Right, };

    let root = parse_with_options(&tokens, &options).unwrap();
    let value = Environment::new().eval(&root).unwrap();

    assert!((value - 512.0).abs() < TOLERANCE);
}

#[test]
fn division_by_exact_zero_fails() {
    let root = parse_source("5/0").unwrap();
    let error = Environment::new().eval(&root).unwrap_err();

    assert!(matches!(error, EvalError::DivisionByZero { .. }));

    assert_evaluates_to("5/0.0001", 50000.0);
}

#[test]
fn unknown_variable_is_reported_by_name() {
    let root = parse_source("y+1").unwrap();

    match Environment::new().eval(&root) {
        Err(EvalError::UnknownVariable { name, .. }) => assert_eq!(name, "y"),
        other => panic!("expected an unknown-variable error, got {other:?}"),
    }
}

#[test]
fn bound_variables_resolve() {
    let root = parse_source("x^2+1").unwrap();

    let mut env = Environment::new();
    env.set("x", 3.0);

    assert!((env.eval(&root).unwrap() - 10.0).abs() < TOLERANCE);
}

#[test]
fn unary_functions() {
    assert_evaluates_to("sin(0)", 0.0);
    assert_evaluates_to("cos(0)", 1.0);
    assert_evaluates_to("tan(0)", 0.0);
    assert_evaluates_to("sqrt(9)", 3.0);
    assert_evaluates_to("log(100)", 2.0);
    assert_evaluates_to("ln(e)", 1.0);
    assert_evaluates_to("sqrt(2)*sqrt(2)", 2.0);
}

#[test]
fn preloaded_constants() {
    assert_evaluates_to("pi", std::f64::consts::PI);
    assert_evaluates_to("sin(pi)", 0.0);
    assert_evaluates_to("2*e", 2.0 * std::f64::consts::E);
}

#[test]
fn sqrt_of_negative_propagates_nan() {
    let root = parse_source("sqrt(0-1)").unwrap();
    let value = Environment::new().eval(&root).unwrap();

    assert!(value.is_nan());
}

#[test]
fn unbalanced_parentheses_fail() {
    let error = assert_parse_fails("(2+3");
    assert!(matches!(error, ParseError::ExpectedClosingParen { .. }));

    let error = assert_parse_fails("sqrt(9");
    assert!(matches!(error, ParseError::ExpectedClosingParen { .. }));
}

#[test]
fn function_requires_parenthesis() {
    match assert_parse_fails("sin 0") {
        ParseError::ExpectedFunctionParen { name, .. } => assert_eq!(name, "sin"),
        other => panic!("expected a function-parenthesis error, got {other:?}"),
    }
}

#[test]
fn malformed_literals_fail_at_parse_time() {
    // The lexer admits any run of digits and dots; conversion rejects it.
    match assert_parse_fails("2.5.3") {
        ParseError::InvalidNumber { literal, .. } => assert_eq!(literal, "2.5.3"),
        other => panic!("expected an invalid-number error, got {other:?}"),
    }

    assert!(matches!(assert_parse_fails("."), ParseError::InvalidNumber { .. }));
}

#[test]
fn stray_tokens_fail() {
    assert!(matches!(assert_parse_fails("2 3"),
                     ParseError::UnexpectedTrailingTokens { .. }));
    assert!(matches!(assert_parse_fails("2+*3"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(assert_parse_fails(""), ParseError::UnexpectedEndOfInput { .. }));
}

#[test]
fn tokens_keep_their_source_text() {
    let (tokens, diagnostics) = tokenize("sqrt(9) + rate");

    assert!(diagnostics.is_empty());
    assert_eq!(tokens[0], (Token::Function("sqrt".to_owned()), 0));
    assert_eq!(tokens[1], (Token::LParen, 4));
    assert_eq!(tokens[2], (Token::Number("9".to_owned()), 5));
    assert_eq!(tokens[4], (Token::Plus, 8));
    assert_eq!(tokens[5], (Token::Variable("rate".to_owned()), 10));
}

#[test]
fn words_prefixed_by_function_names_are_variables() {
    let (tokens, _) = tokenize("sinx");
    assert_eq!(tokens[0].0, Token::Variable("sinx".to_owned()));

    let (tokens, _) = tokenize("sqrt2");
    assert_eq!(tokens[0].0, Token::Variable("sqrt2".to_owned()));
}

#[test]
fn unrecognized_characters_are_skipped_with_diagnostics() {
    let (tokens, diagnostics) = tokenize("5 $ + 3");

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].character, '$');
    assert_eq!(diagnostics[0].pos, 2);

    // The remaining tokens still form a valid expression.
    let value = Environment::new().eval(&parse(&tokens).unwrap()).unwrap();
    assert!((value - 8.0).abs() < TOLERANCE);

    // '=' is not a token either; callers split equations before lexing.
    let (_, diagnostics) = tokenize("a=b");
    assert_eq!(diagnostics[0].character, '=');
}

#[test]
fn evaluation_is_idempotent() {
    let root = parse_source("sin(x)+2.5*x^2").unwrap();

    let mut env = Environment::with_constants();
    env.set("x", 0.7);

    let first = env.eval(&root).unwrap();
    let second = env.eval(&root).unwrap();

    assert_eq!(first.to_bits(), second.to_bits());
}

#[test]
fn leaf_labels_round_trip() {
    assert_eq!(parse_source("55").unwrap().label(), "55");
    assert_eq!(parse_source("2.50").unwrap().label(), "2.5");
    assert_eq!(parse_source("55.0").unwrap().label(), "55");
    assert_eq!(parse_source("salary").unwrap().label(), "salary");
}

#[test]
fn structural_introspection() {
    let root = parse_source("2+3*4").unwrap();

    assert_eq!(root.label(), "+");
    let children = root.children();
    assert_eq!(children.len(), 2);
    assert_eq!(children[0].label(), "2");
    assert_eq!(children[1].label(), "*");

    let call = parse_source("sqrt(9)").unwrap();
    assert_eq!(call.label(), "sqrt");
    assert_eq!(call.children().len(), 1);

    // Parentheses leave no node behind.
    let grouped = parse_source("(2+3)*4").unwrap();
    assert_eq!(grouped.label(), "*");
    assert_eq!(grouped.children()[0].label(), "+");
}

#[test]
fn solver_converges_on_linear_equations() {
    let mut env = Environment::with_constants();

    let root = EquationSolver::new().solve("x+2", "5", &mut env).unwrap();
    assert!((root - 3.0).abs() < 1e-3);

    let root = EquationSolver::new().solve("2*x", "10", &mut env).unwrap();
    assert!((root - 5.0).abs() < 1e-3);

    // The last guess stays bound in the shared environment.
    assert!(env.contains("x"));
}

#[test]
fn solver_converges_on_nonlinear_equations() {
    let mut env = Environment::with_constants();

    let root = EquationSolver::new().solve("x^2", "9", &mut env).unwrap();
    assert!((root - 3.0).abs() < 1e-2);
}

#[test]
fn solver_reports_convergence_failure() {
    let mut env = Environment::with_constants();

    // f(x) = 5 - 3 never approaches zero; the budget runs out.
    let error = EquationSolver::new().solve("x*0+5", "3", &mut env)
                                     .unwrap_err();

    assert!(matches!(error, SolveError::ConvergenceFailure { iterations: 500 }));
}

#[test]
fn solver_propagates_parse_and_eval_failures() {
    let mut env = Environment::with_constants();

    let error = EquationSolver::new().solve("(x+2", "5", &mut env).unwrap_err();
    assert!(matches!(error, SolveError::Parse(_)));

    let error = EquationSolver::new().solve("x+y", "5", &mut env).unwrap_err();
    assert!(matches!(error,
                     SolveError::Eval(EvalError::UnknownVariable { .. })));
}

#[test]
fn solver_honors_custom_configuration() {
    // Starting left of zero, Newton lands on the negative root.
    let config = SolverConfig { initial_guess: -1.0,
                                ..SolverConfig::default() };

    let mut env = Environment::with_constants();
    let root = EquationSolver::with_config(config).solve("x^2", "9", &mut env)
                                                  .unwrap();

    assert!((root + 3.0).abs() < 1e-2);
}

#[test]
fn get_result_dispatches_on_equals() {
    let mut env = Environment::with_constants();

    let value = get_result("(2+3)*4", &mut env).unwrap();
    assert!((value - 20.0).abs() < TOLERANCE);

    let root = get_result("x+2=5", &mut env).unwrap();
    assert!((root - 3.0).abs() < 1e-3);

    assert!(get_result("(2+3", &mut env).is_err());
}
