//! Native functions bound in every global scope.
//!
//! - `map(fn, array)`: apply `fn` to each element, in order
//! - `len(x)`: element count of an array, character count of a string
//! - `print(x)` / `println(x)`: write `x` through the print handler

use quill_ir::{Name, StringInterner};
use rustc_hash::FxHashMap;

use crate::errors::{integer_overflow, not_callable, type_mismatch, EvalResult};
use crate::exec::call::check_arg_count;
use crate::interpreter::Interpreter;
use crate::value::{NativeFn, Value};

const BUILTINS: &[(&str, NativeFn)] = &[
    ("map", map),
    ("len", len),
    ("print", print),
    ("println", println),
];

/// Bindings for a fresh global scope.
pub(crate) fn builtin_bindings(interner: &StringInterner) -> FxHashMap<Name, Value> {
    BUILTINS
        .iter()
        .map(|&(name, func)| (interner.intern(name), Value::native(name, func)))
        .collect()
}

fn map(interp: &mut Interpreter, args: &[Value]) -> EvalResult {
    check_arg_count("map", 2, args.len())?;
    let func = &args[0];
    if !func.is_callable() {
        return Err(not_callable(func.type_name()));
    }
    let Value::Array(items) = &args[1] else {
        return Err(type_mismatch("array", args[1].type_name()));
    };

    let mut mapped = Vec::with_capacity(items.len());
    for item in items.iter() {
        mapped.push(interp.call_value(func, vec![item.clone()])?);
    }
    Ok(Value::array(mapped))
}

fn len(_interp: &mut Interpreter, args: &[Value]) -> EvalResult {
    check_arg_count("len", 1, args.len())?;
    let count = match &args[0] {
        Value::Array(items) => items.len(),
        Value::Str(s) => s.chars().count(),
        other => return Err(type_mismatch("array or string", other.type_name())),
    };
    i64::try_from(count)
        .map(Value::Int)
        .map_err(|_| integer_overflow("len"))
}

fn print(interp: &mut Interpreter, args: &[Value]) -> EvalResult {
    check_arg_count("print", 1, args.len())?;
    let text = args[0].display_value(interp.interner());
    interp.print_handler().print(&text);
    Ok(Value::Void)
}

fn println(interp: &mut Interpreter, args: &[Value]) -> EvalResult {
    check_arg_count("println", 1, args.len())?;
    let text = args[0].display_value(interp.interner());
    interp.print_handler().println(&text);
    Ok(Value::Void)
}
