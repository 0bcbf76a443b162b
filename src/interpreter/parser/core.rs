use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::parse_additive},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest nesting the parser accepts, counting parentheses, signs and
/// exponents. Flat operator chains do not nest.
pub const MAX_DEPTH: usize = 500;

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, addition, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, position)` pairs.
/// - `depth`: Current nesting depth, checked against [`MAX_DEPTH`].
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_additive(tokens, depth)
}

/// Increments the nesting depth, failing once it passes [`MAX_DEPTH`].
pub(in crate::interpreter::parser) fn descend(depth: usize, position: usize) -> ParseResult<usize> {
    if depth >= MAX_DEPTH {
        return Err(ParseError::TooDeeplyNested { position });
    }
    Ok(depth + 1)
}

/// Parses a complete token stream into a single expression.
///
/// Unlike [`parse_expression`], this requires every token to be consumed, so
/// `1 2` or `(1))` are rejected instead of silently truncated.
///
/// # Errors
/// - `UnexpectedEndOfInput` for an empty token stream.
/// - `UnexpectedTrailingTokens` if tokens remain after the expression.
/// - `TooDeeplyNested` past [`MAX_DEPTH`] levels of nesting.
/// - Any error from sub-expression parsing.
///
/// # Example
/// ```
/// use calctk::interpreter::{lexer::tokenize, parser::core::parse};
///
/// let tokens = tokenize("2*(3+4)").unwrap();
/// assert!(parse(&tokens).is_ok());
///
/// let tokens = tokenize("2*(3+").unwrap();
/// assert!(parse(&tokens).is_err());
/// ```
pub fn parse(tokens: &[(Token, usize)]) -> ParseResult<Expr> {
    let mut iter = tokens.iter().peekable();
    let expr = parse_expression(&mut iter, 0)?;

    match iter.next() {
        None => Ok(expr),
        Some((token, position)) => {
            Err(ParseError::UnexpectedTrailingTokens { token:    token.to_string(),
                                                       position: *position, })
        },
    }
}
