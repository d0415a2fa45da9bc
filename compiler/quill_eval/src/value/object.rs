//! Class definitions and instances.
//!
//! Objects are built from the same primitives as the rest of the language:
//! an instance's fields live in a scope of its own, and its methods are
//! ordinary closures over that scope. A field write inside a method is a
//! plain assignment that lands in the instance's storage.

use std::fmt;

use quill_ir::{FieldDecl, MethodDecl, Name, SharedArena};
use rustc_hash::FxHashMap;

use super::{FunctionValue, Heap};
use crate::environment::ScopeId;

/// A class declaration after evaluation. Immutable once registered.
#[derive(Clone)]
pub struct ClassValue {
    pub name: Name,
    /// Fields in declaration order.
    pub fields: Vec<FieldDecl>,
    /// Method templates, bound to an instance at `new`.
    pub methods: FxHashMap<Name, MethodDecl>,
    /// Scope the class was declared in; parent of every instance's storage.
    pub scope: ScopeId,
    /// Arena holding field defaults and method bodies.
    pub arena: SharedArena,
}

impl ClassValue {
    pub fn new(
        name: Name,
        fields: Vec<FieldDecl>,
        methods: impl IntoIterator<Item = MethodDecl>,
        scope: ScopeId,
        arena: SharedArena,
    ) -> Self {
        ClassValue {
            name,
            fields,
            methods: methods.into_iter().map(|m| (m.name, m)).collect(),
            scope,
            arena,
        }
    }
}

impl PartialEq for ClassValue {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.scope == other.scope && self.arena.ptr_eq(&other.arena)
    }
}

impl fmt::Debug for ClassValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassValue")
            .field("name", &self.name)
            .field("fields", &self.fields.len())
            .field("methods", &self.methods.len())
            .field("scope", &self.scope)
            .finish_non_exhaustive()
    }
}

/// An instance of a class.
///
/// Clones alias the same storage scope: a mutation through one handle is
/// visible through every other.
#[derive(Clone)]
pub struct InstanceValue {
    pub class: Heap<ClassValue>,
    /// Private field storage, parented on the class's defining scope.
    pub storage: ScopeId,
    /// Methods closed over `storage`.
    pub methods: Heap<FxHashMap<Name, FunctionValue>>,
}

impl InstanceValue {
    pub fn new(
        class: Heap<ClassValue>,
        storage: ScopeId,
        methods: FxHashMap<Name, FunctionValue>,
    ) -> Self {
        InstanceValue {
            class,
            storage,
            methods: Heap::new(methods),
        }
    }

    /// Name of the instance's class.
    #[inline]
    pub fn class_name(&self) -> Name {
        self.class.name
    }
}

impl PartialEq for InstanceValue {
    fn eq(&self, other: &Self) -> bool {
        self.storage == other.storage
    }
}

impl fmt::Debug for InstanceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstanceValue")
            .field("class", &self.class.name)
            .field("storage", &self.storage)
            .finish_non_exhaustive()
    }
}
