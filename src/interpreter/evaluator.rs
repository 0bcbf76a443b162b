/// Core evaluation logic for expressions and values.
///
/// Contains the tree walk, the `EvalResult` alias and the final check that the
/// result is a finite number.
pub mod core;

/// Unary operator evaluation.
///
/// Handles prefix negation and unary plus.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements addition, subtraction, multiplication, true division and
/// exponentiation with integer-to-real promotion.
pub mod binary;
