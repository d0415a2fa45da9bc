//! Scopes for variable binding in the interpreter.
//!
//! Every scope lives in one `ScopeArena` and is addressed by a `ScopeId`.
//! Closures, references and instances hold ids, so a scope stays usable for
//! as long as any value names it, independent of the Rust call stack.
//!
//! Slots are never freed implicitly. `ScopeArena::collect` (see `collect.rs`)
//! reclaims unreachable scopes; each reclaimed slot gets a new generation, so
//! a stale id fails with `ScopeError::Dangling` instead of aliasing whatever
//! scope reuses the slot.

mod collect;

use std::fmt;

use quill_ir::Name;
use rustc_hash::FxHashMap;

use crate::value::{ScopeRef, Value};

/// Generation-checked handle to a scope.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct ScopeId {
    index: u32,
    generation: u32,
}

impl ScopeId {
    #[inline]
    fn index(self) -> usize {
        self.index as usize
    }
}

impl fmt::Debug for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScopeId({}v{})", self.index, self.generation)
    }
}

/// Failure of a scope operation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScopeError {
    /// Name not bound anywhere in the chain.
    Undefined,
    /// The scope was reclaimed by collection.
    Dangling(ScopeId),
}

/// One scope's bindings and its lexical parent.
#[derive(Clone, Debug, Default)]
struct ScopeRecord {
    bindings: FxHashMap<Name, Value>,
    parent: Option<ScopeId>,
}

#[derive(Clone, Debug)]
struct Slot {
    generation: u32,
    /// `None` while the slot is on the free list.
    record: Option<ScopeRecord>,
}

/// Occupancy snapshot of a `ScopeArena`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ArenaStats {
    /// Scopes currently allocated.
    pub live: usize,
    /// Reclaimed slots waiting for reuse.
    pub free: usize,
    /// Total slots ever created.
    pub capacity: usize,
}

/// Arena of lexical scopes.
#[derive(Clone, Debug, Default)]
pub struct ScopeArena {
    slots: Vec<Slot>,
    free: Vec<u32>,
}

impl ScopeArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate an empty scope with the given parent.
    ///
    /// # Panics
    /// Panics if the arena exceeds `u32::MAX` slots.
    pub fn alloc(&mut self, parent: Option<ScopeId>) -> ScopeId {
        self.alloc_with(parent, FxHashMap::default())
    }

    /// Allocate a scope seeded with `bindings`.
    ///
    /// # Panics
    /// Panics if the arena exceeds `u32::MAX` slots.
    pub fn alloc_with(
        &mut self,
        parent: Option<ScopeId>,
        bindings: FxHashMap<Name, Value>,
    ) -> ScopeId {
        let record = ScopeRecord { bindings, parent };

        let id = if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.record = Some(record);
            ScopeId {
                index,
                generation: slot.generation,
            }
        } else {
            let index = u32::try_from(self.slots.len())
                .unwrap_or_else(|_| panic!("scope arena exceeded u32::MAX slots"));
            self.slots.push(Slot {
                generation: 0,
                record: Some(record),
            });
            ScopeId {
                index,
                generation: 0,
            }
        };

        tracing::trace!(scope = ?id, ?parent, "alloc scope");
        id
    }

    fn record(&self, id: ScopeId) -> Result<&ScopeRecord, ScopeError> {
        match self.slots.get(id.index()) {
            Some(Slot {
                generation,
                record: Some(record),
            }) if *generation == id.generation => Ok(record),
            _ => Err(ScopeError::Dangling(id)),
        }
    }

    fn record_mut(&mut self, id: ScopeId) -> Result<&mut ScopeRecord, ScopeError> {
        match self.slots.get_mut(id.index()) {
            Some(Slot {
                generation,
                record: Some(record),
            }) if *generation == id.generation => Ok(record),
            _ => Err(ScopeError::Dangling(id)),
        }
    }

    /// True if `id` still names a live scope.
    pub fn is_live(&self, id: ScopeId) -> bool {
        self.record(id).is_ok()
    }

    /// Lexical parent of a scope.
    pub fn parent(&self, id: ScopeId) -> Result<Option<ScopeId>, ScopeError> {
        Ok(self.record(id)?.parent)
    }

    /// Number of links between `id` and the root of its chain.
    pub fn depth(&self, id: ScopeId) -> Result<usize, ScopeError> {
        let mut depth = 0;
        let mut current = self.record(id)?.parent;
        while let Some(scope) = current {
            depth += 1;
            current = self.record(scope)?.parent;
        }
        Ok(depth)
    }

    /// Look a name up, starting at `scope` and walking parent links.
    pub fn get(&self, scope: ScopeId, name: Name) -> Result<Value, ScopeError> {
        let owner = self.owner(scope, name)?;
        self.get_local(owner, name)?.ok_or(ScopeError::Undefined)
    }

    /// Read a binding of `scope` itself, without walking the chain.
    pub fn get_local(&self, scope: ScopeId, name: Name) -> Result<Option<Value>, ScopeError> {
        Ok(self.record(scope)?.bindings.get(&name).cloned())
    }

    /// Bind or overwrite `name` in `scope` only.
    pub fn set(&mut self, scope: ScopeId, name: Name, value: Value) -> Result<(), ScopeError> {
        self.record_mut(scope)?.bindings.insert(name, value);
        Ok(())
    }

    /// Capability for the slot `name` resolves to from `scope`.
    pub fn get_ref(&self, scope: ScopeId, name: Name) -> Result<ScopeRef, ScopeError> {
        let owner = self.owner(scope, name)?;
        Ok(ScopeRef::new(owner, name))
    }

    /// Overwrite an existing binding in the scope that owns it.
    pub fn assign(&mut self, scope: ScopeId, name: Name, value: Value) -> Result<(), ScopeError> {
        let owner = self.owner(scope, name)?;
        self.set(owner, name, value)
    }

    /// Find the nearest scope in the chain that binds `name`.
    fn owner(&self, scope: ScopeId, name: Name) -> Result<ScopeId, ScopeError> {
        let mut current = scope;
        loop {
            let record = self.record(current)?;
            if record.bindings.contains_key(&name) {
                return Ok(current);
            }
            match record.parent {
                Some(parent) => current = parent,
                None => return Err(ScopeError::Undefined),
            }
        }
    }

    /// Current occupancy.
    pub fn stats(&self) -> ArenaStats {
        ArenaStats {
            live: self.slots.len() - self.free.len(),
            free: self.free.len(),
            capacity: self.slots.len(),
        }
    }
}
