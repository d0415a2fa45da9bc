//! Flat AST types using arena allocation.
//!
//! - No `Box<Expr>`, use `ExprId(u32)` indices
//! - Declarations with variable-size bodies (classes) live in a side table
//!   addressed by `ClassId`
//!
//! # Module Structure
//!
//! - `expr`: Core expression types (`Expr`, `ExprKind`)
//! - `operators`: Binary operators
//! - `class`: Class declarations (fields, methods)
//! - `types`: Runtime type tags used by `let` annotations and typed fields

mod class;
mod expr;
mod operators;
mod types;

pub use class::{ClassDecl, FieldDecl, MethodDecl};
pub use expr::{Expr, ExprKind};
pub use operators::BinaryOp;
pub use types::TypeTag;

#[cfg(test)]
mod tests;
