//! `InterpreterBuilder` for creating configured `Interpreter` instances.

use quill_ir::{SharedArena, SharedInterner};

use super::Interpreter;
use crate::builtins::builtin_bindings;
use crate::environment::ScopeArena;
use crate::print_handler::{stdout_handler, SharedPrintHandler};

/// Default bound on reference-chain hops.
///
/// Reading through up to this many references succeeds; one more fails with
/// `ReferenceChainTooDeep`. The bound also stops self-referential slots such
/// as `let a = ref a`.
pub const DEFAULT_MAX_REFERENCE_HOPS: usize = 10;

/// Builder for creating Interpreter instances with various configurations.
///
/// ```text
/// let interp = InterpreterBuilder::new(&interner)
///     .max_reference_hops(32)
///     .print_handler(buffer_handler())
///     .build();
/// ```
pub struct InterpreterBuilder {
    interner: SharedInterner,
    max_reference_hops: usize,
    print_handler: Option<SharedPrintHandler>,
}

impl InterpreterBuilder {
    pub fn new(interner: &SharedInterner) -> Self {
        Self {
            interner: interner.clone(),
            max_reference_hops: DEFAULT_MAX_REFERENCE_HOPS,
            print_handler: None,
        }
    }

    /// Set the maximum number of references followed by one read.
    #[must_use]
    pub fn max_reference_hops(mut self, hops: usize) -> Self {
        self.max_reference_hops = hops;
        self
    }

    /// Set where `print` and `println` write. Default is stdout.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Build the interpreter, with builtins bound in a fresh global scope.
    pub fn build(self) -> Interpreter {
        let mut scopes = ScopeArena::new();
        let global = scopes.alloc_with(None, builtin_bindings(&self.interner));

        Interpreter {
            interner: self.interner,
            arena: SharedArena::default(),
            scopes,
            global,
            max_reference_hops: self.max_reference_hops,
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
        }
    }
}
