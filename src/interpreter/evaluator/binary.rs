use dashu::{integer::IBig, rational::RBig};

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
    util::num::{MAX_INTEGER_BITS, ibig_to_usize, is_even, magnitude_bits},
};

/// Evaluates a binary operation between two values.
///
/// Routes `+`, `-` and `*` to exact integer or real arithmetic, `/` to
/// [`eval_div`] and `**` to [`eval_pow`].
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `position`: Byte offset of the operator for error reporting.
///
/// # Example
/// ```
/// use calctk::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::eval_binary, value::core::Value},
/// };
///
/// let result = eval_binary(BinaryOperator::Add, &Value::from(3), &Value::from(4), 0);
/// assert_eq!(result.unwrap(), Value::from(7));
///
/// let result = eval_binary(BinaryOperator::Mul, &Value::Real(1.5), &Value::from(2), 0);
/// assert_eq!(result.unwrap(), Value::Real(3.0));
/// ```
pub fn eval_binary(op: BinaryOperator,
                   left: &Value,
                   right: &Value,
                   position: usize)
                   -> EvalResult<Value> {
    use BinaryOperator::{Add, Div, Mul, Pow, Sub};

    match op {
        Add => eval_arithmetic(left, right, position, |a, b| a + b, |a, b| a + b),
        Sub => eval_arithmetic(left, right, position, |a, b| a - b, |a, b| a - b),
        Mul => eval_arithmetic(left, right, position, |a, b| a * b, |a, b| a * b),
        Div => eval_div(left, right, position),
        Pow => eval_pow(left, right, position),
    }
}

/// Applies `exact` to two integers, or `real` once either operand is a
/// real.
fn eval_arithmetic(left: &Value,
                   right: &Value,
                   position: usize,
                   exact: fn(&IBig, &IBig) -> IBig,
                   real: fn(f64, f64) -> f64)
                   -> EvalResult<Value> {
    if let (Value::Integer(a), Value::Integer(b)) = (left, right) {
        return bounded_integer(exact(a, b), position);
    }
    let (a, b) = to_reals(left, right, position)?;
    Ok(Value::Real(real(a, b)))
}

/// Converts both operands to `f64`.
///
/// # Errors
/// `IntegerOverflow` if an integer operand is beyond the `f64` range.
fn to_reals(left: &Value, right: &Value, position: usize) -> EvalResult<(f64, f64)> {
    let overflow = || RuntimeError::IntegerOverflow { position };
    Ok((left.to_real().ok_or_else(overflow)?, right.to_real().ok_or_else(overflow)?))
}

fn bounded_integer(n: IBig, position: usize) -> EvalResult<Value> {
    if magnitude_bits(&n) > MAX_INTEGER_BITS {
        return Err(RuntimeError::IntegerOverflow { position });
    }
    Ok(Value::Integer(n))
}

/// Evaluates true division. The result is always real.
///
/// Two integers are divided exactly and rounded once, so operands far beyond
/// the `f64` range still divide correctly.
///
/// # Errors
/// - `DivisionByZero` when the divisor is zero, for integers and reals alike.
/// - `IntegerOverflow` when the quotient of two integers, or an integer
///   divided by a real, is beyond the `f64` range.
///
/// # Example
/// ```
/// use calctk::interpreter::{evaluator::binary::eval_div, value::core::Value};
///
/// assert_eq!(eval_div(&Value::from(4), &Value::from(2), 0).unwrap(),
///            Value::Real(2.0));
/// assert!(eval_div(&Value::from(1), &Value::Real(0.0), 0).is_err());
/// ```
pub fn eval_div(left: &Value, right: &Value, position: usize) -> EvalResult<Value> {
    if right.is_zero() {
        return Err(RuntimeError::DivisionByZero { position });
    }
    if let (Value::Integer(a), Value::Integer(b)) = (left, right) {
        let quotient = RBig::from(a.clone()) / RBig::from(b.clone());
        let quotient = quotient.to_f64().value();
        if !quotient.is_finite() {
            return Err(RuntimeError::IntegerOverflow { position });
        }
        return Ok(Value::Real(quotient));
    }
    let (a, b) = to_reals(left, right, position)?;
    Ok(Value::Real(a / b))
}

/// Evaluates an exponentiation operation.
///
/// An integer raised to a non-negative integer stays an exact integer. A
/// negative integer exponent, or any real operand, produces a real.
///
/// # Errors
/// - `DivisionByZero` when zero is raised to a negative power.
/// - `ComplexResult` when a negative base is raised to a fractional power.
/// - `IntegerOverflow` when an exact result would pass the integer size
///   limit.
/// - `NonFiniteResult` when a real power overflows.
///
/// # Example
/// ```
/// use calctk::interpreter::{evaluator::binary::eval_pow, value::core::Value};
///
/// assert_eq!(eval_pow(&Value::from(2), &Value::from(10), 0).unwrap(),
///            Value::from(1024));
/// assert_eq!(eval_pow(&Value::from(2), &Value::from(-1), 0).unwrap(),
///            Value::Real(0.5));
/// assert!(eval_pow(&Value::from(0), &Value::from(-1), 0).is_err());
/// ```
pub fn eval_pow(base: &Value, exponent: &Value, position: usize) -> EvalResult<Value> {
    if base.is_zero() && exponent.is_negative() {
        return Err(RuntimeError::DivisionByZero { position });
    }

    match (base, exponent) {
        (Value::Integer(b), Value::Integer(e)) if *e >= IBig::ZERO => integer_pow(b, e, position),
        _ => {
            let (b, e) = to_reals(base, exponent, position)?;
            let result = b.powf(e);
            if result.is_nan() && !b.is_nan() && !e.is_nan() {
                return Err(RuntimeError::ComplexResult { position });
            }
            if result.is_infinite() && b.is_finite() && e.is_finite() {
                return Err(RuntimeError::NonFiniteResult { value: result });
            }
            Ok(Value::Real(result))
        },
    }
}

/// Raises an integer to a non-negative integer power exactly.
///
/// Bases `0`, `1` and `-1` never grow, so any exponent is accepted for them.
fn integer_pow(base: &IBig, exponent: &IBig, position: usize) -> EvalResult<Value> {
    let magnitude = magnitude_bits(base);
    if magnitude <= 1 {
        let n = if *exponent == IBig::ZERO {
            IBig::ONE
        } else if magnitude == 0 {
            IBig::ZERO
        } else if *base > IBig::ZERO || is_even(exponent) {
            IBig::ONE
        } else {
            -IBig::ONE
        };
        return Ok(Value::Integer(n));
    }

    // |base| >= 2^(magnitude-1), so the result needs at least that many bits
    // per unit of exponent.
    let exponent = ibig_to_usize(exponent).filter(|e| {
                                              (magnitude - 1).saturating_mul(*e) < MAX_INTEGER_BITS
                                          })
                                          .ok_or(RuntimeError::IntegerOverflow { position })?;
    bounded_integer(base.pow(exponent), position)
}
