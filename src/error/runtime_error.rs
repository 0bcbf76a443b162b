use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Referenced a name; expressions have no variables or functions.
    #[error("Error at position {position}: Unknown name '{name}'.")]
    UnknownName {
        /// The name as written.
        name:     String,
        /// Byte offset where the name starts.
        position: usize,
    },
    /// Attempted division by zero, or raised zero to a negative power.
    #[error("Error at position {position}: Division by zero.")]
    DivisionByZero {
        /// Byte offset of the operator.
        position: usize,
    },
    /// A negative base raised to a fractional power has no real value.
    #[error("Error at position {position}: Result is a complex number.")]
    ComplexResult {
        /// Byte offset of the operator.
        position: usize,
    },
    /// An integer grew past the size limit, or is too large to convert to a
    /// real.
    #[error("Error at position {position}: Integer too large.")]
    IntegerOverflow {
        /// Byte offset of the operator.
        position: usize,
    },
    /// The final value is infinite or not a number.
    #[error("Error: Result {value} is not a finite number.")]
    NonFiniteResult {
        /// The offending value.
        value: f64,
    },
    /// Text could not be read back as a number while formatting.
    #[error("Error: '{text}' is not a valid number.")]
    InvalidNumber {
        /// The text that failed to convert.
        text: String,
    },
}
