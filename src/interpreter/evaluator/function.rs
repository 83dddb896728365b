use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
};

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated argument values, one per declared
/// argument, and returns the computed value. Builtins cannot fail: domain
/// errors surface as IEEE-754 NaN or infinity.
type BuiltinFn = fn(&[f64]) -> f64;

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - the exact number of arguments the function accepts,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:literal,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: usize,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// The names of every built-in function, in table order.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "min"   => { arity: 2, func: |args| args[0].min(args[1]) },
    "max"   => { arity: 2, func: |args| args[0].max(args[1]) },
    "logn"  => { arity: 2, func: |args| args[1].ln() / args[0].ln() },
    "log"   => { arity: 1, func: |args| args[0].ln() },
    "ceil"  => { arity: 1, func: |args| args[0].ceil() },
    "floor" => { arity: 1, func: |args| args[0].floor() },
    "abs"   => { arity: 1, func: |args| args[0].abs() },
    "cos"   => { arity: 1, func: |args| args[0].cos() },
    "sin"   => { arity: 1, func: |args| args[0].sin() },
    "exp"   => { arity: 1, func: |args| args[0].exp() },
    "round" => { arity: 1, func: |args| args[0].round() },
    "pow"   => { arity: 2, func: |args| args[0].powf(args[1]) },
    "sqrt"  => { arity: 1, func: |args| args[0].sqrt() },
    "tan"   => { arity: 1, func: |args| args[0].tan() },
    "ncr"   => { arity: 2, func: ncr },
}

/// Computes the binomial coefficient C(n, r) by the multiplicative formula.
///
/// Both arguments are truncated toward zero before use. `r` greater than `n`
/// yields 0, and `r` of 0 yields 1.
#[allow(clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss)]
fn ncr(args: &[f64]) -> f64 {
    let n = args[0] as i64;
    let mut r = args[1] as i64;

    if r > n {
        return 0.0;
    }
    if r * 2 > n {
        r = n - r;
    }
    if r == 0 {
        return 1.0;
    }

    let mut result = n as u64;
    for i in 2..=r {
        result = result.wrapping_mul((n - i + 1) as u64) / i as u64;
    }
    result as f64
}

impl Context {
    /// Evaluates a function call.
    ///
    /// The name is looked up in the static builtin table, the argument count
    /// is checked against the declared arity, and the argument expressions
    /// are evaluated in order before dispatching to the native
    /// implementation.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `arguments`: Argument expressions.
    /// - `offset`: Byte offset for error reporting.
    ///
    /// # Returns
    /// The function result or an error if lookup or arity checking fails.
    pub(crate) fn eval_function_call(&self,
                                     name: &str,
                                     arguments: &[Expr],
                                     offset: usize)
                                     -> EvalResult<f64> {
        let Some(builtin) = BUILTIN_TABLE.iter().find(|b| b.name == name) else {
            tracing::debug!("function '{name}' does not exist");
            return Err(RuntimeError::UnknownFunction { name: name.to_string(),
                                                       offset });
        };

        if arguments.len() != builtin.arity {
            tracing::debug!("function '{name}' expects {} arguments, but got {}",
                            builtin.arity,
                            arguments.len());
            return Err(RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                             expected: builtin.arity,
                                                             found: arguments.len(),
                                                             offset });
        }

        let mut args = Vec::with_capacity(arguments.len());
        for expr in arguments {
            args.push(self.eval(expr)?);
        }

        Ok((builtin.func)(&args))
    }
}
