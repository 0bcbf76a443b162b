use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::{binary::eval_binary, unary::eval_unary},
        value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates an expression tree and returns the resulting value.
///
/// Operands are evaluated left to right, so the leftmost failure is the one
/// reported. The left spine of a binary operation is walked in a loop, so a
/// flat chain such as `1+1+...+1` costs no stack however long it is.
/// Intermediate infinities are allowed (`1/(1e308*10)` is `0.0`); use
/// [`eval_finite`] to reject a non-finite final result.
///
/// # Example
/// ```
/// use calctk::{
///     interpreter::{evaluator::core::eval, lexer::tokenize, parser::core::parse, value::core::Value},
/// };
///
/// let tokens = tokenize("2 * (3 + 4)").unwrap();
/// let expr = parse(&tokens).unwrap();
/// assert_eq!(eval(&expr).unwrap(), Value::from(14));
/// ```
pub fn eval(expr: &Expr) -> EvalResult<Value> {
    match expr {
        Expr::Literal { value, .. } => Ok(Value::from(value.clone())),
        Expr::Name { name, position } => Err(RuntimeError::UnknownName { name:     name.clone(),
                                                                          position: *position, }),
        Expr::UnaryOp { op, expr, .. } => Ok(eval_unary(*op, &eval(expr)?)),
        Expr::BinaryOp { .. } => eval_chain(expr),
    }
}

/// Evaluates a binary operation by collecting its left spine, evaluating the
/// innermost left operand, then folding in each right operand in order.
fn eval_chain(expr: &Expr) -> EvalResult<Value> {
    let mut spine = Vec::new();
    let mut node = expr;
    while let Expr::BinaryOp { left,
                               op,
                               right,
                               position, } = node
    {
        spine.push((*op, right.as_ref(), *position));
        node = left.as_ref();
    }

    let mut acc = eval(node)?;
    for (op, right, position) in spine.into_iter().rev() {
        let right = eval(right)?;
        acc = eval_binary(op, &acc, &right, position)?;
    }
    Ok(acc)
}

/// Evaluates an expression tree and requires a finite result.
///
/// # Errors
/// Everything [`eval`] reports, plus `NonFiniteResult` when the value is
/// infinite or NaN.
pub fn eval_finite(expr: &Expr) -> EvalResult<Value> {
    let value = eval(expr)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(RuntimeError::NonFiniteResult { value: value.to_real().unwrap_or(f64::NAN) })
    }
}
