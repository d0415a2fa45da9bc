//! Execution helpers for the Quill interpreter.
//!
//! - `expr`: type-tag checks and array indexing
//! - `call`: argument count checks and parameter binding
//! - `control`: truthiness, if/else and blocks
//!
//! These modules hold the logic that does not need the whole `Interpreter`;
//! the interpreter delegates to them.

pub mod call;
pub mod control;
pub mod expr;
