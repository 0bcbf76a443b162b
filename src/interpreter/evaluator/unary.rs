use crate::{ast::UnaryOperator, interpreter::value::core::Value};

/// Evaluates a unary operation on a value.
///
/// Integers negate exactly. Unary plus returns the value unchanged.
///
/// # Example
/// ```
/// use calctk::{
///     ast::UnaryOperator,
///     interpreter::{evaluator::unary::eval_unary, value::core::Value},
/// };
///
/// assert_eq!(eval_unary(UnaryOperator::Negate, &Value::from(5)),
///            Value::from(-5));
/// assert_eq!(eval_unary(UnaryOperator::Plus, &Value::Real(2.5)),
///            Value::Real(2.5));
/// ```
#[must_use]
pub fn eval_unary(op: UnaryOperator, value: &Value) -> Value {
    match (op, value) {
        (UnaryOperator::Plus, _) => value.clone(),
        (UnaryOperator::Negate, Value::Integer(n)) => Value::Integer(-n),
        (UnaryOperator::Negate, Value::Real(r)) => Value::Real(-r),
    }
}
