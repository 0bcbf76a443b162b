use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur during lexing or parsing.
///
/// Positions are byte offsets into the expression text.
pub enum ParseError {
    /// A character that is not part of the expression grammar.
    #[error("Error at position {position}: Unexpected character '{text}'.")]
    UnexpectedCharacter {
        /// The offending source text.
        text:     String,
        /// Byte offset where the error occurred.
        position: usize,
    },
    /// A numeric literal that is not valid, such as `012`.
    #[error("Error at position {position}: Invalid numeric literal '{text}'.")]
    InvalidLiteral {
        /// The literal as written.
        text:     String,
        /// Byte offset where the error occurred.
        position: usize,
    },
    /// Found an unexpected token while parsing.
    #[error("Error at position {position}: Unexpected token: {token}.")]
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// Byte offset where the error occurred.
        position: usize,
    },
    /// Reached the end of input while an operand was still expected.
    #[error("Error: Unexpected end of input.")]
    UnexpectedEndOfInput,
    /// A closing parenthesis `)` was expected but not found.
    #[error("Error at position {position}: Expected closing parenthesis ')' but none found.")]
    ExpectedClosingParen {
        /// Byte offset of the unmatched `(`.
        position: usize,
    },
    /// Parentheses, signs or exponents nested too deeply to parse.
    #[error("Error at position {position}: Expression is nested too deeply.")]
    TooDeeplyNested {
        /// Byte offset of the token that went one level too deep.
        position: usize,
    },
    /// Found extra tokens after a complete expression.
    #[error("Error at position {position}: Extra tokens after expression: {token}.")]
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:    String,
        /// Byte offset where the error occurred.
        position: usize,
    },
}
