//! Quill Eval - tree-walking evaluator for the Quill language.
//!
//! # Architecture
//!
//! - `ScopeArena`: every lexical scope, addressed by generation-checked
//!   `ScopeId`s; mark-and-sweep collection on demand
//! - `Value`: runtime values; closures, references and objects hold scope ids
//! - `evaluate_binary`: direct enum-based binary operator dispatch
//! - `Interpreter`: walks an `ExprArena` from `quill_ir`
//!
//! Parsing is out of scope: hosts build programs with `quill_ir::AstBuilder`
//! (or their own parser) and hand the evaluator an arena plus top-level ids.
//!
//! ```text
//! let interner = SharedInterner::default();
//! let mut b = AstBuilder::new(&interner);
//! let two = b.int(2);
//! let three = b.int(3);
//! let sum = b.binary(BinaryOp::Add, two, three);
//! let arena = b.finish();
//!
//! let mut interp = Interpreter::new(&interner);
//! assert_eq!(interp.eval_program(&arena, &[sum]), Ok(Value::int(5)));
//! ```

mod builtins;
mod environment;
pub mod errors;
mod exec;
mod interpreter;
mod operators;
mod print_handler;
mod tracing_setup;
mod value;

pub use environment::{ArenaStats, ScopeArena, ScopeError, ScopeId};
pub use errors::{EvalError, EvalErrorKind, EvalNote, EvalResult};
pub use interpreter::{Interpreter, InterpreterBuilder, DEFAULT_MAX_REFERENCE_HOPS};
pub use operators::evaluate_binary;
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, PrintHandlerImpl, SharedPrintHandler,
};
pub use tracing_setup::init_tracing;
pub use value::{
    ClassValue, FunctionValue, Heap, InstanceValue, NativeFn, NativeFunction, ScopeRef, Value,
};

#[cfg(test)]
mod tests;
