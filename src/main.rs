use std::fs;

use clap::{Parser, ValueEnum};
use solvra::{
    engine::{evaluator::core::Environment, solver::EquationSolver},
    error::SolveError,
    get_result,
};

/// Log level for the application.
#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    const fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

/// solvra evaluates scientific expressions and numerically solves
/// single-variable equations such as `x+1=5`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells solvra to read the input from a file instead of the argument.
    #[arg(short, long)]
    file: bool,

    /// Log level.
    #[arg(short, long, value_enum, default_value = "warn")]
    log_level: LogLevel,

    contents: String,
}

fn main() {
    let args = Args::parse();

    env_logger::Builder::from_default_env().filter_level(args.log_level.to_level_filter())
                                           .init();

    let source = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let mut env = Environment::with_constants();

    if let Some((lhs, rhs)) = source.split_once('=') {
        match EquationSolver::new().solve(lhs, rhs, &mut env) {
            Ok(root) => println!("x = {root}"),
            Err(SolveError::ConvergenceFailure { .. }) => println!("No Solution"),
            Err(e) => eprintln!("{e}"),
        }
    } else {
        // The calculator treats a bare `x` in expression mode as 0 until an
        // equation has bound it.
        if !env.contains("x") {
            env.set("x", 0.0);
        }

        match get_result(&source, &mut env) {
            Ok(value) => println!("{value}"),
            Err(e) => eprintln!("{e}"),
        }
    }
}
