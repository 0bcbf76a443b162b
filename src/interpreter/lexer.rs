use dashu::integer::IBig;
use logos::Logos;

use crate::ast::LiteralValue;

/// Represents a lexical token in an expression.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// The set is deliberately small: numbers, names, the arithmetic operators
/// and parentheses. Anything else fails to lex.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14`, `1.`, `.5` or `1.5E+20`.
    #[regex(r"[0-9]+\.[0-9]*([eE][+-]?[0-9]+)?", parse_real)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_real)]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+", parse_real)]
    #[regex(r"[0-9]+", parse_integer)]
    Number(LiteralValue),
    /// Names such as `abc`. They lex and parse, but never evaluate.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `**`
    #[token("**")]
    DoubleStar,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Spaces, tabs, feeds and line breaks.
    #[regex(r"[ \t\f\r\n]+", logos::skip)]
    Ignored,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(LiteralValue::Integer(n)) => write!(f, "{n}"),
            Self::Number(LiteralValue::Real(r)) => write!(f, "{r}"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::DoubleStar => write!(f, "'**'"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Star => write!(f, "'*'"),
            Self::Slash => write!(f, "'/'"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::Ignored => Ok(()),
        }
    }
}

/// Parses a real literal from the current token slice.
///
/// Literals with an empty integer or fractional part (`.5`, `1.`, `1.e3`)
/// are padded with a zero before conversion.
///
/// # Returns
/// - `Some(LiteralValue::Real)`: The parsed value.
/// - `None`: If the slice is not a valid float.
fn parse_real(lex: &logos::Lexer<Token>) -> Option<LiteralValue> {
    let slice = lex.slice();
    let mut text = String::with_capacity(slice.len() + 2);
    if slice.starts_with('.') {
        text.push('0');
    }
    for (i, c) in slice.char_indices() {
        text.push(c);
        if c == '.' && !slice[i + 1..].starts_with(|next: char| next.is_ascii_digit()) {
            text.push('0');
        }
    }
    text.parse().ok().map(LiteralValue::Real)
}

/// Parses an integer literal from the current token slice.
///
/// A multi-digit literal may not start with `0` unless every digit is `0`.
/// The value is exact whatever its length.
///
/// # Returns
/// - `Some(LiteralValue::Integer)`: The parsed value.
/// - `None`: If the literal has a forbidden leading zero.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<LiteralValue> {
    let slice = lex.slice();
    if slice.len() > 1 && slice.starts_with('0') && slice.bytes().any(|b| b != b'0') {
        return None;
    }
    IBig::from_str_radix(slice, 10).ok().map(LiteralValue::Integer)
}

/// Tokenizes an expression into `(Token, position)` pairs.
///
/// The position is the byte offset where the token starts.
///
/// # Errors
/// Returns a [`ParseError`](crate::error::ParseError) for the first slice
/// that is not a token: `InvalidLiteral` when it looks numeric, otherwise
/// `UnexpectedCharacter`.
///
/// # Example
/// ```
/// use calctk::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("2 ** 3").unwrap();
/// assert_eq!(tokens[1], (Token::DoubleStar, 2));
/// assert!(tokenize("2 ^ 3").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, crate::error::ParseError> {
    use crate::error::ParseError;

    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let position = lexer.span().start;
        if let Ok(tok) = token {
            tokens.push((tok, position));
        } else {
            let text = lexer.slice().to_string();
            return Err(if text.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
                           ParseError::InvalidLiteral { text, position }
                       } else {
                           ParseError::UnexpectedCharacter { text, position }
                       });
        }
    }

    Ok(tokens)
}
