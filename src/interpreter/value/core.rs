use dashu::integer::IBig;

use crate::{ast::LiteralValue, format::render_value, util::num::ibig_to_f64};

/// Represents a runtime value in the evaluator.
///
/// Integers are exact at any size. Reals are `f64`; an integer meets one
/// only by conversion to the nearest `f64`, which fails for integers beyond
/// the `f64` range.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An exact integer.
    Integer(IBig),
    /// A double precision floating-point number.
    Real(f64),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(IBig::from(v))
    }
}

impl From<IBig> for Value {
    fn from(v: IBig) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<LiteralValue> for Value {
    fn from(literal: LiteralValue) -> Self {
        match literal {
            LiteralValue::Integer(n) => Self::Integer(n),
            LiteralValue::Real(r) => Self::Real(r),
        }
    }
}

impl Value {
    /// Converts the value to an `f64`.
    ///
    /// Integers round to the nearest representable float.
    ///
    /// # Returns
    /// - `Some(f64)`: The value as a real.
    /// - `None`: For an integer too large for a finite `f64`.
    ///
    /// # Example
    /// ```
    /// use calctk::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::from(10).to_real(), Some(10.0));
    /// assert_eq!(Value::Real(2.5).to_real(), Some(2.5));
    /// ```
    #[must_use]
    pub fn to_real(&self) -> Option<f64> {
        match self {
            Self::Integer(n) => ibig_to_f64(n),
            Self::Real(r) => Some(*r),
        }
    }

    /// Whether the value is a finite number. Integers always are.
    #[must_use]
    pub const fn is_finite(&self) -> bool {
        match self {
            Self::Integer(_) => true,
            Self::Real(r) => r.is_finite(),
        }
    }

    /// Whether the value is below zero. `-0.0` is not.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        match self {
            Self::Integer(n) => *n < IBig::ZERO,
            Self::Real(r) => *r < 0.0,
        }
    }

    /// Whether the value equals zero, including `-0.0`.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Integer(n) => *n == IBig::ZERO,
            Self::Real(r) => *r == 0.0,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", render_value(self))
    }
}
