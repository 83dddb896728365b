/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, applies arithmetic operators, resolves
/// variables against the evaluation context, and dispatches calls to built-in
/// functions. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Resolves variables and built-in functions by name.
/// - Reports runtime errors such as unknown names or wrong argument counts.
pub mod evaluator;
/// The lexer module tokenizes an input line for further parsing.
///
/// The lexer (tokenizer) reads the raw line and produces a sequence of
/// tokens, each corresponding to a meaningful element such as a number,
/// identifier, operator, or delimiter. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source offsets.
/// - Handles numeric literals, identifiers, and operators.
/// - Reports lexical errors for unrecognized characters.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token sequence produced by the lexer and
/// constructs an AST that represents the syntactic structure of the
/// expression, honoring operator precedence and associativity.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates correct grammar and syntax, reporting errors with offsets.
/// - Supports arithmetic, function calls, and grouping.
pub mod parser;
