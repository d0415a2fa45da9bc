//! Quill IR - AST types consumed by the Quill evaluator.
//!
//! This crate contains the data structures a parser hands to the runtime:
//! - Spans for source locations
//! - Names for interned identifiers
//! - AST nodes (`Expr`, `ExprKind`, `ClassDecl`)
//! - Arena allocation for expressions
//! - `AstBuilder` for constructing programs without concrete syntax
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: identifiers and string literals are `Name(u32)`
//! - **Flatten Everything**: no `Box<Expr>`, children are `ExprId(u32)` indices
//!
//! Float literals are stored as `u64` bits so `ExprKind` stays `Copy + Eq + Hash`.

mod arena;
pub mod ast;
mod builder;
mod expr_id;
mod interner;
mod name;
mod span;

pub use arena::{ExprArena, SharedArena};
pub use ast::{BinaryOp, ClassDecl, Expr, ExprKind, FieldDecl, MethodDecl, TypeTag};
pub use builder::{AstBuilder, ClassBuilder};
pub use expr_id::{ClassId, ExprId, ExprRange, ParamRange};
pub use interner::{InternError, SharedInterner, StringInterner};
pub use name::Name;
pub use span::Span;
