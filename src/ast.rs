use dashu::integer::IBig;

/// Represents a literal value in an expression.
///
/// `LiteralValue` covers the raw numeric constants that can appear directly in
/// source text. Integer literals keep their exact value at any size;
/// everything with a decimal point or exponent is a real.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// An exact integer literal.
    Integer(IBig),
    /// A 64-bit floating-point literal.
    Real(f64),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(IBig::from(value))
    }
}

impl From<IBig> for LiteralValue {
    fn from(value: IBig) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// Every node records the byte offset it was parsed from so that runtime
/// errors can point back into the source text.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Literal {
        /// The constant value.
        value:    LiteralValue,
        /// Byte offset in the source text.
        position: usize,
    },
    /// Reference to a name. Parsed, but never bound to a value.
    Name {
        /// The name as written.
        name:     String,
        /// Byte offset in the source text.
        position: usize,
    },
    /// A unary operation (e.g. negation).
    UnaryOp {
        /// The unary operator to apply.
        op:       UnaryOperator,
        /// The operand expression.
        expr:     Box<Self>,
        /// Byte offset of the operator.
        position: usize,
    },
    /// A binary operation (addition, subtraction, etc.).
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Byte offset of the operator.
        position: usize,
    },
}

impl Expr {
    /// Gets the source position from `self`.
    /// ## Example
    /// ```
    /// use calctk::ast::Expr;
    ///
    /// let expr = Expr::Name { name:     "x".to_string(),
    ///                         position: 5, };
    ///
    /// assert_eq!(expr.position(), 5);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Literal { position, .. }
            | Self::Name { position, .. }
            | Self::UnaryOp { position, .. }
            | Self::BinaryOp { position, .. } => *position,
        }
    }

    /// Moves the children of `self` onto `pending`, leaving leaves behind.
    fn detach_children(&mut self, pending: &mut Vec<Self>) {
        let placeholder = || Self::Literal { value:    LiteralValue::Real(0.0),
                                             position: 0, };
        match self {
            Self::UnaryOp { expr, .. } => pending.push(std::mem::replace(expr.as_mut(), placeholder())),
            Self::BinaryOp { left, right, .. } => {
                pending.push(std::mem::replace(left.as_mut(), placeholder()));
                pending.push(std::mem::replace(right.as_mut(), placeholder()));
            },
            Self::Literal { .. } | Self::Name { .. } => {},
        }
    }
}

/// Long operator chains build trees thousands of nodes deep, so nodes are
/// released from a work list instead of recursively.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut expr) = pending.pop() {
            expr.detach_children(&mut pending);
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// True division (`/`), always producing a real.
    Div,
    /// Exponentiation (`**`)
    Pow,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Unary plus (e.g. `+x`), which leaves the value unchanged.
    Plus,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{Add, Div, Mul, Pow, Sub};
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Pow => "**",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
            Self::Plus => write!(f, "+"),
        }
    }
}
