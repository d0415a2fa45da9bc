//! Callable values: user closures and host-provided natives.

use std::fmt;

use quill_ir::{ExprId, Name, SharedArena};

use super::Heap;
use crate::environment::ScopeId;
use crate::errors::EvalResult;
use crate::interpreter::Interpreter;
use crate::value::Value;

/// A user-defined function paired with the scope it was declared in.
///
/// `arena` keeps the body reachable after the program that declared the
/// function has finished; calls evaluate `body` against it.
#[derive(Clone)]
pub struct FunctionValue {
    /// Declared name, `None` for lambdas.
    pub name: Option<Name>,
    pub params: Heap<Vec<Name>>,
    pub body: ExprId,
    /// Captured defining scope.
    pub closure: ScopeId,
    pub arena: SharedArena,
}

impl FunctionValue {
    pub fn new(
        name: Option<Name>,
        params: Vec<Name>,
        body: ExprId,
        closure: ScopeId,
        arena: SharedArena,
    ) -> Self {
        FunctionValue {
            name,
            params: Heap::new(params),
            body,
            closure,
            arena,
        }
    }

    /// Number of declared parameters.
    #[inline]
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

impl PartialEq for FunctionValue {
    /// Identity: same body, same arena, same captured scope.
    fn eq(&self, other: &Self) -> bool {
        self.body == other.body
            && self.closure == other.closure
            && self.arena.ptr_eq(&other.arena)
    }
}

impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionValue")
            .field("name", &self.name)
            .field("params", &self.params)
            .field("body", &self.body)
            .field("closure", &self.closure)
            .finish_non_exhaustive()
    }
}

/// Signature of a host-provided function.
///
/// Natives receive already-evaluated arguments and validate their own
/// count and types.
pub type NativeFn = fn(&mut Interpreter, &[Value]) -> EvalResult;

/// A host-provided callable such as `map`.
#[derive(Clone, Copy)]
pub struct NativeFunction {
    pub name: &'static str,
    pub func: NativeFn,
}

impl NativeFunction {
    pub const fn new(name: &'static str, func: NativeFn) -> Self {
        NativeFunction { name, func }
    }
}

impl PartialEq for NativeFunction {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NativeFunction({})", self.name)
    }
}
