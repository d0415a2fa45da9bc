//! Tree-walking interpreter for Quill programs.
//!
//! # Module Structure
//!
//! - `builder`: `InterpreterBuilder` and defaults
//! - `function_call`: user function, native and method calls
//! - `references`: variable reads, `ref` and `:=`
//! - `objects`: class declarations, instantiation, field access
//!
//! Per-construct helpers that do not need the interpreter live in
//! `crate::exec`.

mod builder;
mod function_call;
mod objects;
mod references;

use std::mem;

use quill_ir::{ExprId, ExprKind, ExprRange, Name, SharedArena, SharedInterner, StringInterner};

use crate::environment::{ArenaStats, ScopeArena, ScopeError, ScopeId};
use crate::errors::{dangling_scope, undeclared_assignment, undefined_variable, EvalError, EvalResult};
use crate::exec::control::{eval_block, eval_if};
use crate::exec::expr::{check_type_tag, index_value};
use crate::operators::evaluate_binary;
use crate::print_handler::SharedPrintHandler;
use crate::value::{FunctionValue, Value};

pub use builder::{InterpreterBuilder, DEFAULT_MAX_REFERENCE_HOPS};

/// Tree-walking interpreter.
///
/// Owns the scope arena and the global scope. Programs are evaluated unit by
/// unit against the global scope; values produced by one program (closures,
/// classes, instances) stay valid for later programs until collected.
pub struct Interpreter {
    interner: SharedInterner,
    /// Arena of the code currently executing. Swapped on calls into
    /// functions declared by another program.
    arena: SharedArena,
    scopes: ScopeArena,
    global: ScopeId,
    max_reference_hops: usize,
    print_handler: SharedPrintHandler,
}

impl Interpreter {
    /// Create an interpreter with default configuration.
    pub fn new(interner: &SharedInterner) -> Self {
        InterpreterBuilder::new(interner).build()
    }

    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }

    /// The global scope, where top-level units run and builtins live.
    pub fn global(&self) -> ScopeId {
        self.global
    }

    pub fn scopes(&self) -> &ScopeArena {
        &self.scopes
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Output captured by a buffering print handler.
    pub fn print_output(&self) -> String {
        self.print_handler.output()
    }

    /// Read a global binding by name, without resolving references.
    pub fn lookup_global(&self, name: &str) -> Option<Value> {
        let name = self.interner.get(name)?;
        self.scopes.get_local(self.global, name).ok().flatten()
    }

    /// Bind a value in the global scope.
    pub fn define_global(&mut self, name: &str, value: Value) -> Result<(), EvalError> {
        let name = self.interner.intern(name);
        self.set_binding(self.global, name, value)
    }

    /// Evaluate top-level units in the global scope.
    ///
    /// Stops at the first failure. Returns the last unit's value, void if
    /// there are none.
    pub fn eval_program(&mut self, arena: &SharedArena, units: &[ExprId]) -> EvalResult {
        self.arena = arena.clone();
        let global = self.global;
        eval_block(units, |unit| self.eval(unit, global))
    }

    /// Evaluate every top-level unit, continuing past failures.
    pub fn eval_each(&mut self, arena: &SharedArena, units: &[ExprId]) -> Vec<EvalResult> {
        self.arena = arena.clone();
        let global = self.global;
        units
            .iter()
            .map(|&unit| {
                let result = self.eval(unit, global);
                if let Err(err) = &result {
                    tracing::debug!(error = %err, "top-level unit failed");
                }
                result
            })
            .collect()
    }

    /// Reclaim scopes unreachable from the global scope and `roots`.
    ///
    /// Call only between top-level units: any `ScopeId` held outside the
    /// global scope and `roots` may be invalidated.
    pub fn collect_garbage(&mut self, roots: &[Value]) -> ArenaStats {
        let mut root_scopes = vec![self.global];
        for value in roots {
            value.visit_scopes(&mut |scope| root_scopes.push(scope));
        }
        let reclaimed = self.scopes.collect(root_scopes);
        let stats = self.scopes.stats();
        tracing::debug!(
            reclaimed,
            live = stats.live,
            free = stats.free,
            capacity = stats.capacity,
            "collected scopes"
        );
        stats
    }

    /// Evaluate one expression of the current arena in `scope`.
    ///
    /// Errors without a span get the span of the innermost failing node.
    pub fn eval(&mut self, id: ExprId, scope: ScopeId) -> EvalResult {
        let expr = *self.arena.get_expr(id);
        self.eval_kind(expr.kind, scope).map_err(|err| {
            if err.span.is_none() {
                err.with_span(expr.span)
            } else {
                err
            }
        })
    }

    /// Evaluate an expression belonging to another arena.
    fn eval_in(&mut self, arena: &SharedArena, id: ExprId, scope: ScopeId) -> EvalResult {
        let caller = mem::replace(&mut self.arena, arena.clone());
        let result = self.eval(id, scope);
        self.arena = caller;
        result
    }

    fn eval_kind(&mut self, kind: ExprKind, scope: ScopeId) -> EvalResult {
        match kind {
            // Literals
            ExprKind::Int(n) => Ok(Value::int(n)),
            ExprKind::Float(bits) => Ok(Value::float(f64::from_bits(bits))),
            ExprKind::Bool(b) => Ok(Value::bool(b)),
            ExprKind::String(s) => Ok(Value::string(self.interner.lookup(s))),

            // Variables
            ExprKind::Ident(name) => self.read_variable(scope, name),
            ExprKind::Let { name, ty, init } => {
                let value = self.eval(init, scope)?;
                if let Some(tag) = ty {
                    check_type_tag(self.interner.lookup(name), tag, &value)?;
                }
                self.set_binding(scope, name, value)?;
                Ok(Value::Void)
            }
            ExprKind::Assign { name, value } => {
                let value = self.eval(value, scope)?;
                self.scopes
                    .assign(scope, name, value)
                    .map_err(|err| match err {
                        ScopeError::Undefined => undeclared_assignment(self.interner.lookup(name)),
                        ScopeError::Dangling(_) => dangling_scope(),
                    })?;
                Ok(Value::Void)
            }
            ExprKind::Ref(name) => self.take_reference(scope, name),
            ExprKind::AssignRef { name, value } => self.assign_through_reference(scope, name, value),

            // Operators and control flow
            ExprKind::Binary { op, left, right } => {
                let left = self.eval(left, scope)?;
                let right = self.eval(right, scope)?;
                evaluate_binary(&left, &right, op)
            }
            ExprKind::If {
                cond,
                then_branch,
                else_branch,
            } => eval_if(cond, then_branch, else_branch, |e| self.eval(e, scope)),
            ExprKind::Block(stmts) => {
                let block_scope = self.scopes.alloc(Some(scope));
                let arena = self.arena.clone();
                eval_block(arena.get_expr_list(stmts), |e| self.eval(e, block_scope))
            }

            // Functions
            ExprKind::Function { name, params, body } => {
                let params = self.arena.get_params(params).to_vec();
                let func = Value::function(FunctionValue::new(
                    Some(name),
                    params,
                    body,
                    scope,
                    self.arena.clone(),
                ));
                self.set_binding(scope, name, func.clone())?;
                Ok(func)
            }
            ExprKind::Lambda { param, body } => Ok(Value::function(FunctionValue::new(
                None,
                vec![param],
                body,
                scope,
                self.arena.clone(),
            ))),
            ExprKind::Call { func, args } => self.eval_call(scope, func, args),

            // Collections
            ExprKind::Array(elements) => Ok(Value::array(self.eval_args(elements, scope)?)),
            ExprKind::Index { receiver, index } => {
                let receiver = self.eval(receiver, scope)?;
                let index = self.eval(index, scope)?;
                index_value(&receiver, &index)
            }

            // Objects
            ExprKind::Class(class) => self.declare_class(class, scope),
            ExprKind::New { class, args } => self.instantiate(scope, class, args),
            ExprKind::MethodCall {
                receiver,
                method,
                args,
            } => self.eval_method_call(scope, receiver, method, args),
            ExprKind::FieldAccess { receiver, field } => self.eval_field_access(scope, receiver, field),
        }
    }

    /// Evaluate a list of expressions left to right.
    fn eval_args(&mut self, args: ExprRange, scope: ScopeId) -> Result<Vec<Value>, EvalError> {
        let arena = self.arena.clone();
        arena
            .get_expr_list(args)
            .iter()
            .map(|&arg| self.eval(arg, scope))
            .collect()
    }

    /// `set` with scope errors converted.
    fn set_binding(&mut self, scope: ScopeId, name: Name, value: Value) -> Result<(), EvalError> {
        self.scopes
            .set(scope, name, value)
            .map_err(|err| self.scope_error(err, name))
    }

    fn scope_error(&self, err: ScopeError, name: Name) -> EvalError {
        match err {
            ScopeError::Undefined => undefined_variable(self.interner.lookup(name)),
            ScopeError::Dangling(scope) => {
                tracing::debug!(?scope, name = self.interner.lookup(name), "dangling scope");
                dangling_scope()
            }
        }
    }
}
