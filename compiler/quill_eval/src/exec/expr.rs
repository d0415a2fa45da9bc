//! Expression helpers: annotations and indexing.

use quill_ir::TypeTag;

use crate::errors::{annotation_mismatch, index_out_of_bounds, type_mismatch, EvalError, EvalResult};
use crate::value::Value;

/// Check a value against the type tag on a `let` binding or typed field.
pub fn check_type_tag(binding: &str, tag: TypeTag, value: &Value) -> Result<(), EvalError> {
    if value.matches_tag(tag) {
        Ok(())
    } else {
        Err(annotation_mismatch(binding, tag, value.type_name()))
    }
}

/// `receiver[index]`: array receiver, integer index, in range.
pub fn index_value(receiver: &Value, index: &Value) -> EvalResult {
    let Value::Array(items) = receiver else {
        return Err(type_mismatch("array", receiver.type_name()));
    };
    let Value::Int(i) = *index else {
        return Err(type_mismatch("int", index.type_name()));
    };
    usize::try_from(i)
        .ok()
        .and_then(|at| items.get(at))
        .cloned()
        .ok_or_else(|| index_out_of_bounds(i, items.len()))
}
