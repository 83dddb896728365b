/// Lexical errors.
///
/// Defines the error type raised while tokenizing an input line. A lexical
/// error means a character in the line does not begin any recognized token;
/// the whole line is rejected.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while parsing a token sequence into
/// an expression tree. Parse errors include unexpected tokens, unterminated
/// parentheses, and extra input after a complete expression.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors cover unknown variables, unknown functions, and calls with the
/// wrong number of arguments.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
