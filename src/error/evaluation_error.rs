use thiserror::Error;

use crate::error::{ParseError, RuntimeError};

/// The single failure type of the evaluator.
///
/// Undefined names, division by zero, malformed syntax and invalid values all
/// end up here. [`crate::calculate`] collapses every variant to
/// [`crate::SENTINEL`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvaluationError {
    /// The expression could not be tokenized or parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The expression parsed but could not be evaluated.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
