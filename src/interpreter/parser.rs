/// Core parsing entry points.
///
/// Declares the parser result type and the functions that parse one complete
/// input line into a single expression tree, rejecting trailing input.
pub mod core;

/// Binary operator parsing.
///
/// Implements the binary levels of the precedence ladder: additive,
/// multiplicative, and exponentiation, together with the token-to-operator
/// mapping.
pub mod binary;

/// Unary operator and primary expression parsing.
///
/// Handles prefix `-` and `+`, function-call syntax, parenthesized
/// sub-expressions, and the literal/identifier leaves of the grammar.
pub mod unary;

/// Utility functions for the parser.
///
/// Provides shared helpers, such as parsing the comma-separated argument
/// list of a function call.
pub mod utils;
