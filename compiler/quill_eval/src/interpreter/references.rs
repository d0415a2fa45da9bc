//! Variable reads, `ref name` and `name := value`.
//!
//! A binding may hold a `Value::Reference` to another slot. Reads follow the
//! chain to the first non-reference value; `:=` follows it to the last slot
//! and writes there. Both walks stop after `max_reference_hops`
//! dereferences.

use quill_ir::{ExprId, Name};

use super::Interpreter;
use crate::environment::ScopeId;
use crate::errors::{
    dangling_scope, not_a_reference, reference_chain_too_deep, undefined_variable, EvalError,
    EvalResult,
};
use crate::value::{ScopeRef, Value};

impl Interpreter {
    /// Read a variable, resolving references.
    pub(super) fn read_variable(&self, scope: ScopeId, name: Name) -> EvalResult {
        let value = self
            .scopes
            .get(scope, name)
            .map_err(|err| self.scope_error(err, name))?;
        self.resolve(value)
    }

    /// Follow references until a non-reference value.
    pub fn resolve(&self, value: Value) -> EvalResult {
        let mut current = value;
        let mut hops = 0;
        while let Value::Reference(target) = current {
            if hops == self.max_reference_hops {
                return Err(reference_chain_too_deep(self.max_reference_hops));
            }
            hops += 1;
            current = self.read_slot(target)?;
        }
        Ok(current)
    }

    /// The slot a reference ultimately designates: the first slot in the
    /// chain whose value is not itself a reference.
    fn resolve_slot(&self, start: ScopeRef) -> Result<ScopeRef, EvalError> {
        let mut target = start;
        let mut hops = 0;
        loop {
            if hops == self.max_reference_hops {
                return Err(reference_chain_too_deep(self.max_reference_hops));
            }
            hops += 1;
            match self.read_slot(target)? {
                Value::Reference(next) => target = next,
                _ => return Ok(target),
            }
        }
    }

    /// Raw value stored in a slot.
    fn read_slot(&self, target: ScopeRef) -> EvalResult {
        match self.scopes.get_local(target.scope, target.name) {
            Ok(Some(value)) => Ok(value),
            Ok(None) => Err(undefined_variable(self.interner.lookup(target.name))),
            Err(_) => Err(dangling_scope()),
        }
    }

    /// `ref name`: capture the scope that owns `name`.
    pub(super) fn take_reference(&self, scope: ScopeId, name: Name) -> EvalResult {
        let target = self
            .scopes
            .get_ref(scope, name)
            .map_err(|err| self.scope_error(err, name))?;
        Ok(Value::reference(target))
    }

    /// `name := value`: write through the reference held by `name`.
    ///
    /// `name` is read raw; it must hold a reference. The right-hand side is
    /// evaluated before the chain is walked.
    pub(super) fn assign_through_reference(
        &mut self,
        scope: ScopeId,
        name: Name,
        value: ExprId,
    ) -> EvalResult {
        let raw = self
            .scopes
            .get(scope, name)
            .map_err(|err| self.scope_error(err, name))?;
        let Value::Reference(first) = raw else {
            return Err(not_a_reference(self.interner.lookup(name)));
        };

        let value = self.eval(value, scope)?;
        let slot = self.resolve_slot(first)?;
        self.set_binding(slot.scope, slot.name, value)?;
        Ok(Value::Void)
    }
}
