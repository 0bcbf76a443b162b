use thiserror::Error;
use tracing::{debug, trace};

use crate::{SENTINEL, evaluate, history::History};

/// Longest entry the keypad will extend; keys that would grow a longer
/// entry are ignored.
pub const MAX_ENTRY_LEN: usize = 15;

/// The entry shown before any key is pressed and after `Clear`.
pub const INITIAL_ENTRY: &str = "0";

/// An operator key and the text it appends.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// The power key, appending `**`.
    Pow,
    /// The square root key, appending `**(1/2)`.
    SquareRoot,
}

impl Operator {
    /// The text appended to the entry.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "**",
            Self::SquareRoot => "**(1/2)",
        }
    }
}

/// A key on the calculator's button grid.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Key {
    /// A decimal digit, `0` through `9`. Larger values are ignored.
    Digit(u8),
    /// The decimal point.
    Dot,
    /// An arithmetic operator.
    Operator(Operator),
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// Resets the entry to `0`.
    Clear,
    /// Deletes the last character.
    Backspace,
    /// Evaluates the entry.
    Equals,
}

/// Errors raised while reading key presses from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeypadError {
    /// A character that does not map to any key.
    #[error("Unknown key '{0}'.")]
    UnknownKey(char),
}

impl TryFrom<char> for Key {
    type Error = KeypadError;

    /// Maps a character to a key: digits, `.`, `+ - * /`, `^` for power, `r`
    /// for square root, parentheses, `c` for clear, `<` for backspace and
    /// `=`.
    fn try_from(c: char) -> Result<Self, Self::Error> {
        let key = match c {
            '0'..='9' => Self::Digit(c as u8 - b'0'),
            '.' => Self::Dot,
            '+' => Self::Operator(Operator::Add),
            '-' => Self::Operator(Operator::Sub),
            '*' => Self::Operator(Operator::Mul),
            '/' => Self::Operator(Operator::Div),
            '^' => Self::Operator(Operator::Pow),
            'r' | 'R' => Self::Operator(Operator::SquareRoot),
            '(' => Self::OpenParen,
            ')' => Self::CloseParen,
            'c' | 'C' => Self::Clear,
            '<' => Self::Backspace,
            '=' => Self::Equals,
            _ => return Err(KeypadError::UnknownKey(c)),
        };
        Ok(key)
    }
}

/// The calculator entry and the rules for composing it from key presses.
///
/// The keypad keeps most malformed expressions from being typed at all: no
/// doubled operators, no parenthesis in a position where it cannot be
/// valid, and no growth past [`MAX_ENTRY_LEN`] characters. Pressing `=`
/// evaluates the entry; a failure leaves [`SENTINEL`] in the entry, which
/// blocks every key except digits and `Clear`.
///
/// # Example
/// ```
/// use calctk::keypad::Keypad;
///
/// let mut keypad = Keypad::new();
/// keypad.press_all("12+3*(4-1)=").unwrap();
///
/// assert_eq!(keypad.entry(), "21");
/// assert_eq!(keypad.history().latest().unwrap().expression, "12+3*(4-1)");
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    entry:   String,
    history: History,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates a keypad showing `0` with an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::with_history(History::new())
    }

    /// Creates a keypad showing `0` that records into `history`.
    #[must_use]
    pub fn with_history(history: History) -> Self {
        Self { entry: INITIAL_ENTRY.to_string(),
               history }
    }

    /// The current entry text.
    #[must_use]
    pub fn entry(&self) -> &str {
        &self.entry
    }

    /// Whether the last evaluation failed and the entry holds the sentinel.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.entry == SENTINEL
    }

    /// The calculations recorded so far.
    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    /// Mutable access to the history, e.g. to clear it.
    pub const fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    /// Applies a single key press.
    pub fn press(&mut self, key: Key) {
        trace!(?key, entry = %self.entry, "key pressed");
        match key {
            Key::Digit(digit) => self.push_digit(digit),
            Key::Dot => self.push_dot(),
            Key::Operator(op) => self.push_operator(op),
            Key::OpenParen => self.open_paren(),
            Key::CloseParen => self.close_paren(),
            Key::Clear => INITIAL_ENTRY.clone_into(&mut self.entry),
            Key::Backspace => self.backspace(),
            Key::Equals => self.equals(),
        }
    }

    /// Applies every key in `keys`, skipping whitespace.
    ///
    /// # Errors
    /// `UnknownKey` for the first character that is not a key. Keys before
    /// it have already been applied.
    pub fn press_all(&mut self, keys: &str) -> Result<(), KeypadError> {
        for c in keys.chars().filter(|c| !c.is_whitespace()) {
            self.press(Key::try_from(c)?);
        }
        Ok(())
    }

    /// Replaces the entry with the expression of history entry `index`.
    ///
    /// Returns `false`, leaving the entry alone, if there is no such entry.
    pub fn recall(&mut self, index: usize) -> bool {
        match self.history.get(index) {
            Some(entry) => {
                self.entry.clone_from(&entry.expression);
                true
            },
            None => false,
        }
    }

    fn has_room(&self) -> bool {
        self.entry.chars().count() < MAX_ENTRY_LEN
    }

    fn ends_with_any(&self, chars: &str) -> bool {
        self.entry.chars().last().is_some_and(|last| chars.contains(last))
    }

    fn push_digit(&mut self, digit: u8) {
        let Some(digit) = char::from_digit(u32::from(digit), 10) else {
            trace!(digit, "ignored digit key out of range");
            return;
        };
        if self.is_error() {
            self.entry.clear();
        }
        if self.entry == INITIAL_ENTRY {
            self.entry = digit.to_string();
        } else if self.has_room() {
            self.entry.push(digit);
        }
    }

    fn push_dot(&mut self) {
        if self.is_error() || self.entry.is_empty() {
            return;
        }
        if !self.ends_with_any(".+-/*") && self.has_room() {
            self.entry.push('.');
        }
    }

    fn push_operator(&mut self, op: Operator) {
        if self.is_error() || self.entry.is_empty() {
            return;
        }
        if !self.ends_with_any("+-*/") && self.has_room() {
            self.entry.push_str(op.as_str());
        }
    }

    fn open_paren(&mut self) {
        if self.is_error() {
            return;
        }
        if self.entry == INITIAL_ENTRY {
            self.entry = "(".to_string();
        } else if self.ends_with_any("+-/*") && self.has_room() {
            self.entry.push('(');
        }
    }

    fn close_paren(&mut self) {
        if self.is_error() {
            return;
        }
        let opened = self.entry.matches('(').count();
        let closed = self.entry.matches(')').count();
        if opened <= closed {
            return;
        }
        if !self.entry.is_empty() && !self.ends_with_any("+-/*(") && self.has_room() {
            self.entry.push(')');
        }
    }

    fn backspace(&mut self) {
        if self.is_error() {
            return;
        }
        if self.entry.chars().count() == 1 {
            INITIAL_ENTRY.clone_into(&mut self.entry);
        } else {
            self.entry.pop();
        }
    }

    fn equals(&mut self) {
        if self.is_error() {
            return;
        }
        let expression = std::mem::take(&mut self.entry);
        match evaluate(&expression) {
            Ok(result) => {
                debug!(%expression, %result, "evaluated");
                self.history.record(&expression, &result);
                self.entry = result;
            },
            Err(error) => {
                debug!(%expression, %error, "evaluation failed");
                SENTINEL.clone_into(&mut self.entry);
            },
        }
    }
}
