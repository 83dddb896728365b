use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::parse_additive},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, addition, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, offset)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_additive(tokens)
}

/// Parses one input line as a single complete expression.
///
/// The entire token sequence must be consumed: an expression followed by
/// anything other than end of input is rejected, so `1 + 2 3` fails rather
/// than silently evaluating `1 + 2`. An empty token sequence is an
/// unexpected end of input.
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, offset)` pairs.
///
/// # Returns
/// The root of the expression tree for the line.
///
/// # Errors
/// - `UnexpectedTrailingTokens` if tokens remain after a complete expression.
/// - Propagates any errors from expression parsing.
///
/// # Example
/// ```
/// use mathex::interpreter::{lexer::tokenize, parser::core::parse_line};
///
/// let tokens = tokenize("(1 + 2) * 3").unwrap();
/// assert!(parse_line(&mut tokens.iter().peekable()).is_ok());
///
/// let tokens = tokenize("1 + 2 3").unwrap();
/// assert!(parse_line(&mut tokens.iter().peekable()).is_err());
/// ```
pub fn parse_line<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let expr = parse_expression(tokens)?;

    match tokens.peek() {
        Some((token, offset)) => {
            Err(ParseError::UnexpectedTrailingTokens { token:  format!("{token:?}"),
                                                       offset: *offset, })
        },
        None => Ok(expr),
    }
}
