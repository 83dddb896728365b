use std::collections::HashMap;
use std::f64::consts::{E, FRAC_PI_2, FRAC_PI_4, PI};

use crate::{ast::Expr, error::RuntimeError};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Named constants available in every evaluation context.
pub const CONSTANTS: &[(&str, f64)] = &[("pi", PI),
                                        ("e", E),
                                        ("pi_2", FRAC_PI_2),
                                        ("pi_4", FRAC_PI_4)];

/// Stores the evaluation context.
///
/// This struct holds the mapping from variable names to their bound
/// double-precision values. It is populated once, before any expression is
/// evaluated, and stays fixed afterwards: `eval` takes `&self` and nothing
/// mutates the bindings during evaluation.
///
/// ## Usage
///
/// A `Context` starts out containing only the named constants. The caller
/// binds its variables with [`Context::define`] and then reuses the context
/// for evaluating any number of expressions.
pub struct Context {
    variables: HashMap<String, f64>,
}

#[allow(clippy::new_without_default)]
impl Context {
    /// Creates a new evaluation context containing only the built-in
    /// constants `pi`, `e`, `pi_2` and `pi_4`.
    #[must_use]
    pub fn new() -> Self {
        let mut variables = HashMap::new();
        for (name, value) in CONSTANTS {
            variables.insert((*name).to_string(), *value);
        }

        Self { variables }
    }

    /// Binds a variable name to a value.
    ///
    /// An existing binding for the same name, including a constant, is
    /// replaced. Bindings are established before the first evaluation; the
    /// evaluator itself never calls this.
    ///
    /// # Parameters
    /// - `name`: Variable name.
    /// - `value`: Value to bind.
    ///
    /// # Example
    /// ```
    /// use mathex::interpreter::evaluator::core::Context;
    ///
    /// let mut context = Context::new();
    /// context.define("x", 10.0);
    ///
    /// assert_eq!(context.get_variable("x"), Some(10.0));
    /// ```
    pub fn define(&mut self, name: &str, value: f64) {
        self.variables.insert(name.to_string(), value);
    }

    /// Retrieves the value bound to a variable name.
    ///
    /// Returns `None` if the name is not bound.
    ///
    /// # Example
    /// ```
    /// use mathex::interpreter::evaluator::core::Context;
    ///
    /// let context = Context::new();
    ///
    /// assert_eq!(context.get_variable("pi"), Some(std::f64::consts::PI));
    /// assert_eq!(context.get_variable("q"), None);
    /// ```
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Option<f64> {
        self.variables.get(name).copied()
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// walks the tree in post order and dispatches based on expression
    /// variant: literals, variables, unary and binary operations, and
    /// function calls. Evaluation has no side effects; the same tree against
    /// the same context always produces the same result.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The computed double-precision value.
    ///
    /// # Errors
    /// Returns a `RuntimeError` when a variable or function name cannot be
    /// resolved, or when a function is called with the wrong number of
    /// arguments. Arithmetic itself never fails: division by zero and domain
    /// errors produce IEEE-754 infinities and NaN, which are legitimate
    /// results.
    ///
    /// # Example
    /// ```
    /// use mathex::{ast::Expr, interpreter::evaluator::core::Context};
    ///
    /// let context = Context::new();
    /// let expr = Expr::Literal { value:  2.5,
    ///                            offset: 0, };
    ///
    /// assert_eq!(context.eval(&expr).unwrap(), 2.5);
    /// ```
    pub fn eval(&self, expr: &Expr) -> EvalResult<f64> {
        match expr {
            Expr::Literal { value, .. } => Ok(*value),
            Expr::Variable { name, offset } => self.eval_variable(name, *offset),
            Expr::UnaryOp { op, expr, .. } => Ok(Self::eval_unary(*op, self.eval(expr)?)),
            Expr::BinaryOp { left, op, right, .. } => {
                let lval = self.eval(left)?;
                let rval = self.eval(right)?;
                Ok(Self::eval_binary(*op, lval, rval))
            },
            Expr::FunctionCall { name,
                                 arguments,
                                 offset, } => self.eval_function_call(name, arguments, *offset),
        }
    }

    /// Looks up a variable by name.
    ///
    /// If the variable is not bound, an `UnknownVariable` error is returned.
    /// Names are resolved only here, at evaluation time; parsing accepts any
    /// identifier.
    ///
    /// # Parameters
    /// - `name`: Variable name.
    /// - `offset`: Byte offset for error reporting.
    ///
    /// # Returns
    /// The bound value, if found.
    fn eval_variable(&self, name: &str, offset: usize) -> EvalResult<f64> {
        self.get_variable(name).ok_or_else(|| {
                                   tracing::debug!("variable '{name}' is not bound");
                                   RuntimeError::UnknownVariable { name: name.to_string(),
                                                                   offset }
                               })
    }
}
