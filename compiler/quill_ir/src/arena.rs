//! Expression arena.
//!
//! Owns every node of a program plus the side tables for variable-length
//! children. Function and class values keep a `SharedArena` handle so their
//! bodies stay reachable after the program that declared them finished.

// Arc is the implementation of SharedArena
#![expect(
    clippy::disallowed_types,
    reason = "Arc is the implementation of SharedArena"
)]

use std::ops::Deref;
use std::sync::Arc;

use crate::{ClassDecl, ClassId, Expr, ExprId, ExprRange, Name, ParamRange};

/// Flat storage for one program's AST.
#[derive(Clone, Default, Debug)]
pub struct ExprArena {
    exprs: Vec<Expr>,
    expr_lists: Vec<ExprId>,
    params: Vec<Name>,
    classes: Vec<ClassDecl>,
}

/// Convert a table length to a `u32` index.
///
/// # Panics
/// Panics if a table exceeds `u32::MAX` entries.
fn to_index(len: usize) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("expression arena exceeded u32::MAX entries"))
}

impl ExprArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate an expression, returning its id.
    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let id = ExprId::new(to_index(self.exprs.len()));
        self.exprs.push(expr);
        id
    }

    /// Allocate a contiguous list of expression ids.
    pub fn alloc_expr_list(&mut self, ids: impl IntoIterator<Item = ExprId>) -> ExprRange {
        let start = to_index(self.expr_lists.len());
        self.expr_lists.extend(ids);
        let len = to_index(self.expr_lists.len()) - start;
        ExprRange::new(start, len)
    }

    /// Allocate a contiguous list of parameter names.
    pub fn alloc_params(&mut self, names: impl IntoIterator<Item = Name>) -> ParamRange {
        let start = to_index(self.params.len());
        self.params.extend(names);
        let len = to_index(self.params.len()) - start;
        ParamRange::new(start, len)
    }

    /// Allocate a class declaration.
    pub fn alloc_class(&mut self, class: ClassDecl) -> ClassId {
        let id = ClassId::new(to_index(self.classes.len()));
        self.classes.push(class);
        id
    }

    /// Get an expression by id.
    ///
    /// # Panics
    /// Panics if `id` was not allocated in this arena.
    #[inline]
    pub fn get_expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    #[inline]
    pub fn get_expr_list(&self, range: ExprRange) -> &[ExprId] {
        let start = range.start as usize;
        &self.expr_lists[start..start + range.len()]
    }

    #[inline]
    pub fn get_params(&self, range: ParamRange) -> &[Name] {
        let start = range.start as usize;
        &self.params[start..start + range.len()]
    }

    #[inline]
    pub fn get_class(&self, id: ClassId) -> &ClassDecl {
        &self.classes[id.index()]
    }

    /// Number of expressions allocated.
    pub fn expr_count(&self) -> usize {
        self.exprs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }
}

/// Shared, immutable handle to a finished `ExprArena`.
#[derive(Clone, Debug, Default)]
pub struct SharedArena(Arc<ExprArena>);

impl SharedArena {
    pub fn new(arena: ExprArena) -> Self {
        SharedArena(Arc::new(arena))
    }

    /// True if both handles point at the same arena.
    pub fn ptr_eq(&self, other: &SharedArena) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for SharedArena {
    type Target = ExprArena;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<ExprArena> for SharedArena {
    fn from(arena: ExprArena) -> Self {
        SharedArena::new(arena)
    }
}
