//! # mathex
//!
//! mathex is a line-oriented evaluator for floating-point arithmetic
//! expressions. It parses and evaluates one expression at a time against a
//! fixed set of named variables, with support for built-in math functions,
//! named constants, and IEEE-754 double-precision semantics throughout.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{evaluator::core::Context, lexer::tokenize, parser::core::parse_line};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and related types that represent the
/// syntactic structure of an expression as a tree. The AST is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression types for all language constructs.
/// - Attaches source offsets to AST nodes for error reporting.
/// - Enables exhaustive handling of parsed expressions.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines all errors that can be raised while processing an
/// input line. It standardizes error reporting and carries detailed
/// information about failures, including error kinds, descriptions, and
/// source offsets for debugging and user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches byte offsets and detailed messages for context.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together lexing, parsing, evaluation, and error handling
/// to provide a complete engine for expression evaluation. It exposes the
/// public API for interpreting expressions.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, and evaluator.
/// - Provides entry points for parsing and evaluating expressions.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Evaluates one expression line against a prepared context.
///
/// The line is tokenized, parsed into a single expression tree, and
/// evaluated against the context's variable bindings. Each call builds a
/// fresh tree; the context is never modified, so the same line against the
/// same context always yields a bit-identical result.
///
/// # Errors
/// Returns the lexical, parse, or runtime error that stopped the line from
/// producing a value. IEEE-754 special values (infinity, NaN) arising from
/// the arithmetic itself are results, not errors.
///
/// # Examples
/// ```
/// use mathex::{evaluate, interpreter::evaluator::core::Context};
///
/// let mut context = Context::new();
/// context.define("x", 3.0);
///
/// // Simple expression: power binds tighter than unary minus.
/// let result = evaluate("-x^2", &context).unwrap();
/// assert_eq!(result, -9.0);
///
/// // Example with an intentional error (unknown variable).
/// let result = evaluate("x + q", &context);
/// assert!(result.is_err());
/// ```
pub fn evaluate(expression: &str, context: &Context) -> Result<f64, Box<dyn std::error::Error>> {
    let tokens = tokenize(expression)?;

    let mut iter = tokens.iter().peekable();
    let expr = parse_line(&mut iter)?;

    Ok(context.eval(&expr)?)
}
