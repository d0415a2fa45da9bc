//! Function call evaluation methods for the Interpreter.

use quill_ir::{ExprRange, Name};

use super::Interpreter;
use crate::environment::ScopeId;
use crate::errors::{dangling_scope, not_callable, EvalResult};
use crate::exec::call::{bind_parameters, check_arg_count};
use crate::value::{FunctionValue, Value};

impl Interpreter {
    /// `name(args...)`: look the callee up, then evaluate arguments in the
    /// caller's scope.
    pub(super) fn eval_call(&mut self, scope: ScopeId, func: Name, args: ExprRange) -> EvalResult {
        let callee = self.read_variable(scope, func)?;
        if !callee.is_callable() {
            return Err(not_callable(callee.type_name()));
        }
        let args = self.eval_args(args, scope)?;
        self.call_value(&callee, args)
    }

    /// Call a function value with evaluated arguments.
    ///
    /// Used by call expressions and by natives such as `map`.
    pub fn call_value(&mut self, func: &Value, args: Vec<Value>) -> EvalResult {
        match func {
            Value::Function(f) => self.call_function(f, args),
            Value::Native(native) => (native.func)(self, &args),
            other => Err(not_callable(other.type_name())),
        }
    }

    /// Run a user function in a fresh scope parented on its closure.
    #[tracing::instrument(level = "debug", skip_all, fields(arity = func.arity()))]
    pub(super) fn call_function(&mut self, func: &FunctionValue, args: Vec<Value>) -> EvalResult {
        let name = func.name.map_or("", |n| self.interner.lookup(n));
        check_arg_count(name, func.arity(), args.len())?;
        if !self.scopes.is_live(func.closure) {
            return Err(dangling_scope());
        }

        let call_scope = self.scopes.alloc(Some(func.closure));
        bind_parameters(&mut self.scopes, call_scope, &func.params, args)?;
        self.eval_in(&func.arena, func.body, call_scope)
    }
}
