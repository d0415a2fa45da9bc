//! Function call helpers: argument count checks and parameter binding.

use quill_ir::Name;

use crate::environment::{ScopeArena, ScopeId};
use crate::errors::{dangling_scope, wrong_arg_count, EvalError};
use crate::value::Value;

/// Require exactly `expected` arguments.
pub fn check_arg_count(name: &str, expected: usize, got: usize) -> Result<(), EvalError> {
    if expected == got {
        Ok(())
    } else {
        Err(wrong_arg_count(name, expected, got))
    }
}

/// Bind positional arguments to parameter names in a fresh call scope.
///
/// Counts must already have been checked.
pub fn bind_parameters(
    scopes: &mut ScopeArena,
    call_scope: ScopeId,
    params: &[Name],
    args: Vec<Value>,
) -> Result<(), EvalError> {
    for (&param, arg) in params.iter().zip(args) {
        scopes
            .set(call_scope, param, arg)
            .map_err(|_| dangling_scope())?;
    }
    Ok(())
}
