/// The evaluator module computes the value of a parsed expression.
///
/// The evaluator walks the AST, performs the arithmetic with integer-to-real
/// promotion, and reports runtime errors such as division by zero or
/// undefined names. It has no state: the same tree always yields the same
/// value.
pub mod evaluator;
/// The lexer module tokenizes expression text for further parsing.
///
/// The lexer reads the raw text and produces a stream of tokens (numbers,
/// names, operators and parentheses), each tagged with its byte offset. This
/// is the first stage of evaluation.
///
/// # Responsibilities
/// - Converts the input character stream into positioned tokens.
/// - Validates numeric literal syntax.
/// - Reports characters that are not part of the grammar.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A recursive-descent parser over `+ - * / **`, unary signs and
/// parentheses. Nothing outside that grammar is accepted, so evaluation
/// can never reach anything but arithmetic.
pub mod parser;
/// The value module defines the runtime number type.
pub mod value;
