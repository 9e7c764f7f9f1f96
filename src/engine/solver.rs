use log::{debug, info};

use crate::{
    ast::Node,
    engine::{evaluator::core::Environment, lexer::tokenize, parser::core::parse},
    error::SolveError,
};

/// Default iteration budget for one solve call.
pub const MAX_ITERATIONS: usize = 500;
/// Default residual magnitude below which a guess is accepted as a root.
pub const CONVERGENCE_TOLERANCE: f64 = 1e-4;
/// Default step used for the numeric derivative estimate.
pub const DERIVATIVE_STEP: f64 = 1e-4;
/// Default starting guess for the bound variable.
pub const INITIAL_GUESS: f64 = 1.0;
/// Default slope magnitude below which a region is treated as flat.
pub const FLAT_SLOPE_THRESHOLD: f64 = 1e-9;
/// Default slope substituted when a flat region is detected.
pub const FLAT_SLOPE_FALLBACK: f64 = 1e-5;

/// Tunable parameters of the Newton iteration.
///
/// The defaults favor interactive responsiveness: a fixed starting point,
/// a fixed residual tolerance, and a bounded iteration count. The
/// flat-slope substitution keeps the update step finite on flat regions;
/// it is a stabilizer, not a guarantee of a good step.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Name of the variable the solver binds and varies.
    pub variable:             String,
    /// Maximum number of Newton iterations before giving up.
    pub max_iterations:       usize,
    /// Residual magnitude accepted as convergence.
    pub tolerance:            f64,
    /// Step used to estimate the local slope numerically.
    pub derivative_step:      f64,
    /// Value of the variable at the first iteration.
    pub initial_guess:        f64,
    /// Slope magnitude below which the slope is considered degenerate.
    pub flat_slope_threshold: f64,
    /// Slope substituted for a degenerate one.
    pub flat_slope_fallback:  f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self { variable:             "x".to_owned(),
               max_iterations:       MAX_ITERATIONS,
               tolerance:            CONVERGENCE_TOLERANCE,
               derivative_step:      DERIVATIVE_STEP,
               initial_guess:        INITIAL_GUESS,
               flat_slope_threshold: FLAT_SLOPE_THRESHOLD,
               flat_slope_fallback:  FLAT_SLOPE_FALLBACK, }
    }
}

/// Solves single-variable equations numerically with Newton's method.
///
/// The solver parses the two sides of an equation independently and drives
/// them toward a common value by varying one free variable in the caller's
/// environment. It searches from one fixed starting point and stops at the
/// first guess whose residual falls below the tolerance; it makes no
/// attempt to find every root, and the answer is only as good as the
/// tolerance and the starting guess.
pub struct EquationSolver {
    config: SolverConfig,
}

impl EquationSolver {
    /// Creates a solver with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self { config: SolverConfig::default(), }
    }

    /// Creates a solver with an explicit configuration.
    #[must_use]
    pub const fn with_config(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Solves `lhs_source = rhs_source` for the configured variable.
    ///
    /// Both sides are parsed independently and share `env`; the solver
    /// rebinds the variable in `env` before every evaluation, so the last
    /// guess remains bound after the call.
    ///
    /// # Parameters
    /// - `lhs_source`: Text of the left-hand side.
    /// - `rhs_source`: Text of the right-hand side.
    /// - `env`: Environment shared by both sides.
    ///
    /// # Returns
    /// The converged value of the variable.
    ///
    /// # Errors
    /// - `SolveError::Parse` when either side fails to parse.
    /// - `SolveError::Eval` when an evaluation fails mid-iteration (for
    ///   example, an unbound variable other than the solved one).
    /// - `SolveError::ConvergenceFailure` when the iteration budget is
    ///   exhausted without convergence.
    ///
    /// # Example
    /// ```
    /// use solvra::engine::{evaluator::core::Environment, solver::EquationSolver};
    ///
    /// let mut env = Environment::with_constants();
    /// let root = EquationSolver::new().solve("x+2", "5", &mut env).unwrap();
    ///
    /// assert!((root - 3.0).abs() < 1e-3);
    /// ```
    pub fn solve(&self,
                 lhs_source: &str,
                 rhs_source: &str,
                 env: &mut Environment)
                 -> Result<f64, SolveError> {
        let lhs = Self::parse_side(lhs_source)?;
        let rhs = Self::parse_side(rhs_source)?;

        debug!("solving {lhs} = {rhs} for {}", self.config.variable);

        self.find_root(&lhs, &rhs, env)
    }

    /// Runs the Newton iteration on two already-parsed trees.
    ///
    /// Each iteration evaluates the residual `f(x) = lhs − rhs` at the
    /// current guess, accepts the guess once `|f(x)|` falls below the
    /// tolerance, estimates the local slope from a forward difference, and
    /// steps to `x − f(x) / slope`. A slope flatter than the configured
    /// threshold is replaced by the fallback slope so the step stays
    /// finite.
    ///
    /// # Errors
    /// - `SolveError::Eval` when evaluating either side fails.
    /// - `SolveError::ConvergenceFailure` when the budget runs out.
    pub fn find_root(&self,
                     lhs: &Node,
                     rhs: &Node,
                     env: &mut Environment)
                     -> Result<f64, SolveError> {
        let mut x = self.config.initial_guess;

        for iteration in 0..self.config.max_iterations {
            let y = self.residual(lhs, rhs, env, x)?;

            if y.abs() < self.config.tolerance {
                info!("converged to {} = {x} after {iteration} iterations",
                      self.config.variable);
                return Ok(x);
            }

            let y_plus = self.residual(lhs, rhs, env, x + self.config.derivative_step)?;
            let mut slope = (y_plus - y) / self.config.derivative_step;

            if slope.abs() < self.config.flat_slope_threshold {
                slope = self.config.flat_slope_fallback;
            }

            x -= y / slope;
            debug!("iteration {iteration}: residual = {y}, next guess = {x}");
        }

        Err(SolveError::ConvergenceFailure { iterations: self.config.max_iterations, })
    }

    /// Evaluates the residual `lhs − rhs` with the variable bound to
    /// `guess`.
    fn residual(&self,
                lhs: &Node,
                rhs: &Node,
                env: &mut Environment,
                guess: f64)
                -> Result<f64, SolveError> {
        env.set(&self.config.variable, guess);
        Ok(env.eval(lhs)? - env.eval(rhs)?)
    }

    fn parse_side(source: &str) -> Result<Node, SolveError> {
        let (tokens, _diagnostics) = tokenize(source);
        Ok(parse(&tokens)?)
    }
}

impl Default for EquationSolver {
    fn default() -> Self {
        Self::new()
    }
}
