/// Evaluation failures as a single tagged result.
///
/// Wraps the lexing/parsing and runtime failures into the one error type the
/// public API returns. The caller never needs to tell them apart, but the
/// wrapped error still carries the details for logging.
pub mod evaluation_error;
/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of an
/// expression: unknown characters, malformed literals, unexpected tokens and
/// unbalanced parentheses.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating a parsed
/// expression, such as division by zero, undefined names or results that are
/// not finite numbers.
pub mod runtime_error;

pub use evaluation_error::EvaluationError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
