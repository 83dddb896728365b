/// Core evaluation logic and the evaluation context.
///
/// Contains the `Context` type holding variable bindings, and the dispatching
/// `eval` entry point.
pub mod core;

/// Unary operator evaluation.
///
/// Handles the operations that take a single operand: negation and identity.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements evaluation for all binary arithmetic operations in IEEE-754
/// double precision.
pub mod binary;

/// Built-in function table and call dispatch.
///
/// Declares the fixed set of native math functions, their arities, and the
/// lookup performed for every function call.
pub mod function;
