//! Control flow evaluation (if/else, blocks).

use quill_ir::ExprId;

use crate::errors::{non_boolean_condition, EvalError, EvalResult};
use crate::value::Value;

/// Truthiness of an `if` condition: `true`, or a non-zero number.
///
/// Strings, arrays, objects and callables are not conditions.
#[allow(
    clippy::float_cmp,
    reason = "only exact zero is falsy"
)]
pub fn is_truthy(value: &Value) -> Result<bool, EvalError> {
    match value {
        Value::Bool(b) => Ok(*b),
        Value::Int(n) => Ok(*n != 0),
        Value::Float(f) => Ok(*f != 0.0),
        other => Err(non_boolean_condition(other.type_name())),
    }
}

/// Evaluate an if/else expression. Exactly one branch runs.
pub fn eval_if<F>(
    cond: ExprId,
    then_branch: ExprId,
    else_branch: Option<ExprId>,
    mut eval_fn: F,
) -> EvalResult
where
    F: FnMut(ExprId) -> EvalResult,
{
    let cond_val = eval_fn(cond)?;
    if is_truthy(&cond_val)? {
        eval_fn(then_branch)
    } else if let Some(else_expr) = else_branch {
        eval_fn(else_expr)
    } else {
        Ok(Value::Void)
    }
}

/// Evaluate statements in order, yielding the last value (void if empty).
pub fn eval_block<F>(stmts: &[ExprId], mut eval_fn: F) -> EvalResult
where
    F: FnMut(ExprId) -> EvalResult,
{
    let mut result = Value::Void;
    for &stmt in stmts {
        result = eval_fn(stmt)?;
    }
    Ok(result)
}
