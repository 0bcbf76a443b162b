use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, descend, parse_expression},
    },
};

/// Parses a unary expression.
///
/// Supports the prefix operators `-` and `+`. They are right-associative, so
/// `-+-x` is parsed as `-(+(-x))`. A prefix sign binds looser than `**` on
/// its right: `-2**2` is `-(2**2)`.
///
/// Grammar:
/// ```text
///     unary := ("-" | "+") unary
///            | power
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `depth`: Current nesting depth.
///
/// # Returns
/// An [`Expr::UnaryOp`] or a power-level expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let op = match tokens.peek() {
        Some((Token::Minus, _)) => UnaryOperator::Negate,
        Some((Token::Plus, _)) => UnaryOperator::Plus,
        _ => return parse_power(tokens, depth),
    };
    let Some((_, position)) = tokens.next() else {
        return Err(ParseError::UnexpectedEndOfInput);
    };
    let expr = parse_unary(tokens, descend(depth, *position)?)?;
    Ok(Expr::UnaryOp { op,
                       expr: Box::new(expr),
                       position: *position })
}

/// Parses exponentiation.
///
/// The exponent is itself a unary expression, which makes the operator
/// right-associative (`2**3**2` is `2**(3**2)`) and allows a signed exponent
/// (`2**-1`).
///
/// Grammar: `power := primary ("**" unary)?`
///
/// # Parameters
/// - `tokens`: Token stream.
/// - `depth`: Current nesting depth.
///
/// # Returns
/// An exponentiation expression tree, or the primary expression alone.
fn parse_power<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let base = parse_primary(tokens, depth)?;
    if let Some((Token::DoubleStar, position)) = tokens.peek() {
        tokens.next();
        let exponent = parse_unary(tokens, descend(depth, *position)?)?;
        return Ok(Expr::BinaryOp { left:     Box::new(base),
                                   op:       BinaryOperator::Pow,
                                   right:    Box::new(exponent),
                                   position: *position, });
    }
    Ok(base)
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar:
/// - numeric literals
/// - names
/// - parenthesized expressions
///
/// Grammar:
/// ```text
///     primary := NUMBER
///              | IDENTIFIER
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
/// - `depth`: Current nesting depth.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Number(value), position)) => Ok(Expr::Literal { value:    value.clone(),
                                                                     position: *position, }),
        Some((Token::Identifier(name), position)) => Ok(Expr::Name { name:     name.clone(),
                                                                     position: *position, }),
        Some((Token::LParen, position)) => {
            parse_grouping(tokens, *position, descend(depth, *position)?)
        },
        Some((tok, position)) => Err(ParseError::UnexpectedToken { token:    tok.to_string(),
                                                                   position: *position, }),
        None => Err(ParseError::UnexpectedEndOfInput),
    }
}

/// Parses the remainder of a parenthesized expression.
///
/// The opening `(` has already been consumed; `open` is its position, used
/// when the closing `)` is missing.
///
/// Grammar: `grouping := "(" expression ")"`
///
/// # Errors
/// - `ExpectedClosingParen` if the group is not closed.
/// - Any error from the inner expression.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, open: usize, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let expr = parse_expression(tokens, depth)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        _ => Err(ParseError::ExpectedClosingParen { position: open }),
    }
}
