//! # calctk
//!
//! calctk is the core of a keypad calculator. It evaluates arithmetic
//! expressions built from numeric literals, `+ - * / **`, unary signs and
//! parentheses, formats the result for a fixed-width display, and provides the
//! keypad entry rules and calculation history that sit on top of it.
//!
//! Evaluation is a pure function of the expression text. Every failure
//! (malformed syntax, undefined names, division by zero, invalid values)
//! collapses into a single [`EvaluationError`](error::EvaluationError), and
//! [`calculate`] turns that into the [`SENTINEL`] string.

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
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::EvaluationError,
    format::{format_result, render_value},
    interpreter::{evaluator::core::eval_finite, lexer::tokenize, parser::core::parse, value::core::Value},
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator types that represent
/// an expression as a tree. The AST is built by the parser and traversed by
/// the evaluator.
pub mod ast;
/// Provides the error types for parsing and evaluation.
///
/// Parse and runtime errors keep their details (kind and byte offset) for
/// logging, while the public API wraps both in one `EvaluationError`.
pub mod error;
/// Result rendering and the display length rule.
///
/// Turns values into text and rewrites text longer than the display allows
/// into five-digit scientific notation.
pub mod format;
/// Bounded, in-memory log of successful calculations.
pub mod history;
/// Orchestrates lexing, parsing and evaluation.
///
/// This module ties together the lexer, parser, evaluator and value type to
/// provide the arithmetic-only evaluation pipeline.
pub mod interpreter;
/// Keypad entry composition.
///
/// Applies the button-grid rules that decide which key presses may extend
/// the entry, and runs the evaluation when `=` is pressed.
pub mod keypad;
/// General utilities for numeric conversion.
pub mod util;

/// The value [`calculate`] returns when an expression cannot be evaluated.
///
/// It can never be mistaken for a number, so callers can compare against it
/// and show their own localized message instead.
pub const SENTINEL: &str = "__ERR__";

/// Evaluates an expression to a number.
///
/// The text is tokenized, parsed as a whole, and evaluated. The result must
/// be finite.
///
/// # Errors
/// Returns an [`EvaluationError`] for malformed syntax, undefined names,
/// division by zero, integers too large to handle, and non-finite or complex
/// results.
///
/// # Examples
/// ```
/// use calctk::{evaluate_value, interpreter::value::core::Value};
///
/// assert_eq!(evaluate_value("7 * 6").unwrap(), Value::from(42));
/// assert_eq!(evaluate_value("1 / 4").unwrap(), Value::Real(0.25));
/// assert!(evaluate_value("x + 1").is_err());
/// ```
pub fn evaluate_value(expression: &str) -> Result<Value, EvaluationError> {
    let tokens = tokenize(expression)?;
    let expr = parse(&tokens)?;
    Ok(eval_finite(&expr)?)
}

/// Evaluates an expression and formats the result for display.
///
/// Results longer than fifteen characters are shown in scientific notation
/// with five fractional digits.
///
/// # Errors
/// Returns an [`EvaluationError`] under the same conditions as
/// [`evaluate_value`].
///
/// # Examples
/// ```
/// use calctk::evaluate;
///
/// assert_eq!(evaluate("4 / 2").unwrap(), "2.0");
/// assert_eq!(evaluate("2 ** 200").unwrap(), "1.60694E+60");
/// assert!(evaluate("10 / 0").is_err());
/// ```
pub fn evaluate(expression: &str) -> Result<String, EvaluationError> {
    let value = evaluate_value(expression)?;
    Ok(format_result(&render_value(&value))?)
}

/// Evaluates an expression and returns either the formatted result or
/// [`SENTINEL`].
///
/// This never fails and never panics, whatever the input.
///
/// # Examples
/// ```
/// use calctk::{SENTINEL, calculate};
///
/// assert_eq!(calculate("1+1"), "2");
/// assert_eq!(calculate("2*(3+"), SENTINEL);
/// assert_eq!(calculate("abc"), SENTINEL);
/// ```
#[must_use]
pub fn calculate(expression: &str) -> String {
    evaluate(expression).unwrap_or_else(|_| SENTINEL.to_string())
}
