//! Mark-and-sweep collection of unreachable scopes.

use super::{ScopeArena, ScopeId};

impl ScopeArena {
    /// Reclaim every scope not reachable from `roots`.
    ///
    /// Reachability follows parent links and every scope handle held by a
    /// bound value (closures, references, classes, instances, array
    /// elements). Reclaimed slots get a new generation and go on the free
    /// list. Dangling roots are ignored. Returns the number of scopes
    /// reclaimed.
    ///
    /// Scope ids held outside the arena and outside `roots` are invalidated
    /// if their scope is reclaimed, so callers collect only when no
    /// evaluation is in progress.
    pub fn collect(&mut self, roots: impl IntoIterator<Item = ScopeId>) -> usize {
        let mut marked = vec![false; self.slots.len()];
        let mut worklist: Vec<ScopeId> = roots.into_iter().collect();

        // Mark
        while let Some(id) = worklist.pop() {
            let Ok(record) = self.record(id) else {
                continue;
            };
            let seen = &mut marked[id.index()];
            if *seen {
                continue;
            }
            *seen = true;

            if let Some(parent) = record.parent {
                worklist.push(parent);
            }
            for value in record.bindings.values() {
                value.visit_scopes(&mut |scope| worklist.push(scope));
            }
        }

        // Sweep
        let mut reclaimed = 0;
        for ((index, slot), live) in (0u32..).zip(self.slots.iter_mut()).zip(marked) {
            if slot.record.is_some() && !live {
                slot.record = None;
                slot.generation = slot.generation.wrapping_add(1);
                self.free.push(index);
                reclaimed += 1;
            }
        }

        tracing::trace!(reclaimed, "sweep finished");
        reclaimed
    }
}
