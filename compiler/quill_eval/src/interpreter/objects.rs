//! Class declarations, instantiation, field access and method calls.

use quill_ir::{ClassId, ExprId, ExprRange, Name};
use rustc_hash::FxHashMap;

use super::Interpreter;
use crate::environment::ScopeId;
use crate::errors::{
    field_not_found, method_not_found, too_many_constructor_args, type_mismatch, EvalResult,
};
use crate::exec::expr::check_type_tag;
use crate::value::{ClassValue, FunctionValue, InstanceValue, Value};

impl Interpreter {
    /// `class Name { ... }`: register the class in `scope`.
    pub(super) fn declare_class(&mut self, id: ClassId, scope: ScopeId) -> EvalResult {
        let arena = self.arena.clone();
        let decl = arena.get_class(id);
        let class = ClassValue::new(
            decl.name,
            decl.fields.clone(),
            decl.methods.iter().copied(),
            scope,
            arena.clone(),
        );
        tracing::debug!(
            class = self.interner.lookup(decl.name),
            fields = class.fields.len(),
            methods = class.methods.len(),
            "registered class"
        );

        let value = Value::class(class);
        self.set_binding(scope, decl.name, value.clone())?;
        Ok(value)
    }

    /// `new Name(args...)`.
    ///
    /// Arguments bind to fields positionally. Omitted fields take their
    /// default expression, evaluated in a child of the new storage scope,
    /// else the default for their type tag.
    pub(super) fn instantiate(&mut self, scope: ScopeId, class: Name, args: ExprRange) -> EvalResult {
        let class_value = self.read_variable(scope, class)?;
        let class = match class_value {
            Value::Class(class) => class,
            other => return Err(type_mismatch("class", other.type_name())),
        };
        let class_name = self.interner.lookup(class.name);
        if args.len() > class.fields.len() {
            return Err(too_many_constructor_args(
                class_name,
                class.fields.len(),
                args.len(),
            ));
        }

        let args = self.eval_args(args, scope)?;
        let storage = self.scopes.alloc(Some(class.scope));
        let mut args = args.into_iter();
        for field in &class.fields {
            let value = if let Some(value) = args.next() {
                if let Some(tag) = field.ty {
                    check_type_tag(self.interner.lookup(field.name), tag, &value)?;
                }
                value
            } else if let Some(default) = field.default {
                // Declarations inside a default must not become fields.
                let default_scope = self.scopes.alloc(Some(storage));
                self.eval_in(&class.arena, default, default_scope)?
            } else {
                Value::default_for(field.ty)
            };
            self.set_binding(storage, field.name, value)?;
        }

        let methods: FxHashMap<Name, FunctionValue> = class
            .methods
            .values()
            .map(|method| {
                let params = class.arena.get_params(method.params).to_vec();
                let bound = FunctionValue::new(
                    Some(method.name),
                    params,
                    method.body,
                    storage,
                    class.arena.clone(),
                );
                (method.name, bound)
            })
            .collect();

        tracing::debug!(class = class_name, ?storage, "instantiated");
        Ok(Value::instance(InstanceValue::new(class, storage, methods)))
    }

    /// `receiver.field`: read from the instance's storage only.
    pub(super) fn eval_field_access(
        &mut self,
        scope: ScopeId,
        receiver: ExprId,
        field: Name,
    ) -> EvalResult {
        let instance = match self.eval(receiver, scope)? {
            Value::Instance(instance) => instance,
            other => return Err(type_mismatch("instance", other.type_name())),
        };
        let value = self
            .scopes
            .get_local(instance.storage, field)
            .map_err(|err| self.scope_error(err, field))?
            .ok_or_else(|| {
                field_not_found(
                    self.interner.lookup(field),
                    self.interner.lookup(instance.class_name()),
                )
            })?;
        self.resolve(value)
    }

    /// `receiver.method(args...)`.
    pub(super) fn eval_method_call(
        &mut self,
        scope: ScopeId,
        receiver: ExprId,
        method: Name,
        args: ExprRange,
    ) -> EvalResult {
        let instance = match self.eval(receiver, scope)? {
            Value::Instance(instance) => instance,
            other => return Err(type_mismatch("instance", other.type_name())),
        };
        let Some(bound) = instance.methods.get(&method).cloned() else {
            return Err(method_not_found(
                self.interner.lookup(method),
                self.interner.lookup(instance.class_name()),
            ));
        };
        let args = self.eval_args(args, scope)?;
        self.call_function(&bound, args)
    }
}
