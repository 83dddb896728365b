use crate::{ast::BinaryOperator, interpreter::evaluator::core::Context};

impl Context {
    /// Evaluates a binary arithmetic operation.
    ///
    /// All operators work in IEEE-754 double precision with no special-case
    /// guarding: division by zero yields a signed infinity, `0 / 0` yields
    /// NaN, and overflow saturates to infinity, exactly as a native math
    /// library would behave. `%` is the floating-point remainder (`fmod`
    /// semantics) and `^` is `powf`.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// The computed value.
    ///
    /// # Example
    /// ```
    /// use mathex::{ast::BinaryOperator, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::eval_binary(BinaryOperator::Mul, 1.5, 2.0), 3.0);
    /// assert_eq!(Context::eval_binary(BinaryOperator::Rem, 7.5, 2.0), 1.5);
    /// assert!(Context::eval_binary(BinaryOperator::Div, 1.0, 0.0).is_infinite());
    /// ```
    #[must_use]
    pub fn eval_binary(op: BinaryOperator, left: f64, right: f64) -> f64 {
        match op {
            BinaryOperator::Add => left + right,
            BinaryOperator::Sub => left - right,
            BinaryOperator::Mul => left * right,
            BinaryOperator::Div => left / right,
            BinaryOperator::Rem => left % right,
            BinaryOperator::Pow => left.powf(right),
        }
    }
}
