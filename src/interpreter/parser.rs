/// Parser entry points.
///
/// Holds the `ParseResult` alias, the expression entry point and the
/// top-level driver that insists on consuming the whole input.
pub mod core;

/// Binary operator parsing.
///
/// Implements the left-associative additive and multiplicative precedence
/// levels.
pub mod binary;

/// Unary, power and primary parsing.
///
/// Handles prefix signs, right-associative exponentiation, literals, names
/// and parenthesized groups.
pub mod unary;
