use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::parse_power,
            core::{ParseResult, parse_expression},
            utils::parse_arguments,
        },
    },
};

/// Parses a unary expression.
///
/// Supports the prefix operators `-` (numeric negation) and `+` (identity).
/// Unary operators are right-associative, so an input like `--x` is parsed
/// as `-(-x)`.
///
/// Prefix operators bind tighter than multiplication but looser than
/// exponentiation: the operand of a unary operator is a power expression,
/// so `-3 ^ 2` parses as `-(3 ^ 2)`.
///
/// Grammar:
/// ```text
///     unary := ("-" | "+") unary
///            | power
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::UnaryOp`] or a power-level expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Minus, offset)) = tokens.peek() {
        tokens.next();
        let expr = parse_unary(tokens)?;
        Ok(Expr::UnaryOp { op:     UnaryOperator::Negate,
                           expr:   Box::new(expr),
                           offset: *offset, })
    } else if let Some((Token::Plus, offset)) = tokens.peek() {
        tokens.next();
        let expr = parse_unary(tokens)?;
        Ok(Expr::UnaryOp { op:     UnaryOperator::Plus,
                           expr:   Box::new(expr),
                           offset: *offset, })
    } else {
        parse_power(tokens)
    }
}

/// Parses a primary expression, then promotes it to a function call when an
/// argument list follows.
///
/// Only an identifier can be called: `sin(x)` is a call, while `(1)(2)`
/// leaves the trailing `(` unconsumed for the caller to reject. The argument
/// list may be empty; whether the argument count fits the function is
/// checked at evaluation time, where the function is looked up.
///
/// Grammar:
/// ```text
///     call := identifier "(" arguments ")"
///           | primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::FunctionCall`] or the primary expression unchanged.
pub(crate) fn parse_call<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let callee = parse_primary(tokens)?;

    if let Expr::Variable { name, offset } = &callee
       && let Some((Token::LParen, _)) = tokens.peek()
    {
        tokens.next();
        let arguments = parse_arguments(tokens, *offset)?;

        return Ok(Expr::FunctionCall { name: name.clone(),
                                       arguments,
                                       offset: *offset });
    }

    Ok(callee)
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - numeric literals
/// - identifiers
/// - parenthesized expressions
///
/// This function does not handle unary operators or call syntax.
///
/// Grammar:
/// ```text
///     primary := number
///              | identifier
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::Number(value), offset)) => {
            let expr = Expr::Literal { value:  *value,
                                       offset: *offset, };
            tokens.next();
            Ok(expr)
        },

        Some((Token::Identifier(name), offset)) => {
            let expr = Expr::Variable { name:   name.clone(),
                                        offset: *offset, };
            tokens.next();
            Ok(expr)
        },

        Some((Token::LParen, _)) => parse_grouping(tokens),

        Some((token, offset)) => {
            Err(ParseError::ExpectedExpression { token:  format!("{token:?}"),
                                                 offset: *offset, })
        },

        None => Err(ParseError::UnexpectedEndOfInput { offset: 0 }),
    }
}

/// Parses a parenthesized expression.
///
/// Expected form `( expression )`
///
/// The function consumes the opening parenthesis, parses the enclosed
/// expression, and then requires a closing `)`. Failure to find the closing
/// parenthesis yields `ParseError::ExpectedClosingParen`.
///
/// Grammar: `grouping := "(" expression ")"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `(`.
///
/// # Returns
/// The inner expression as-is (no wrapper node).
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (_, offset) = *tokens.next().unwrap();
    let expr = parse_expression(tokens)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        _ => Err(ParseError::ExpectedClosingParen { offset }),
    }
}
