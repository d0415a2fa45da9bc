//! Reference cells.

use quill_ir::Name;

use crate::environment::ScopeId;

/// Capability to read and write one named slot of one scope.
///
/// Produced by `ref name`: `scope` is the scope that owns `name`, found by
/// walking the chain at the time the reference was taken. Reads and `:=`
/// writes through the reference always hit that slot, even after the scope
/// that took the reference has gone.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ScopeRef {
    pub scope: ScopeId,
    pub name: Name,
}

impl ScopeRef {
    #[inline]
    pub const fn new(scope: ScopeId, name: Name) -> Self {
        ScopeRef { scope, name }
    }
}
