//! Expression Types
//!
//! Quill has no separate statement type: declarations and assignments are
//! expressions that evaluate to void (or to the declared value).

use std::fmt;

use super::operators::BinaryOp;
use super::types::TypeTag;
use crate::{ClassId, ExprId, ExprRange, Name, ParamRange, Span};

/// Expression node.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

/// Expression variants.
///
/// All children are indices, not boxes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    /// Integer literal: 42
    Int(i64),

    /// Float literal: 3.14 (stored as bits for Hash)
    Float(u64),

    /// Boolean literal: true, false
    Bool(bool),

    /// String literal (interned)
    String(Name),

    /// Variable reference
    Ident(Name),

    /// Binary operation: left op right
    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },

    /// `if cond then a else b`
    If {
        cond: ExprId,
        then_branch: ExprId,
        else_branch: Option<ExprId>,
    },

    /// `{ stmt; stmt; ... }`
    Block(ExprRange),

    /// `let name: ty = init`
    Let {
        name: Name,
        ty: Option<TypeTag>,
        init: ExprId,
    },

    /// `name = value` (name must already be declared)
    Assign { name: Name, value: ExprId },

    /// `func name(params) = body`
    Function {
        name: Name,
        params: ParamRange,
        body: ExprId,
    },

    /// `name(args...)`
    Call { func: Name, args: ExprRange },

    /// `class Name { fields; methods }`
    Class(ClassId),

    /// `new Name(args...)`
    New { class: Name, args: ExprRange },

    /// `receiver.method(args...)`
    MethodCall {
        receiver: ExprId,
        method: Name,
        args: ExprRange,
    },

    /// `receiver.field`
    FieldAccess { receiver: ExprId, field: Name },

    /// `[a, b, c]`
    Array(ExprRange),

    /// `receiver[index]`
    Index { receiver: ExprId, index: ExprId },

    /// `lambda param -> body`
    Lambda { param: Name, body: ExprId },

    /// `ref name`
    Ref(Name),

    /// `name := value`
    AssignRef { name: Name, value: ExprId },
}

impl ExprKind {
    /// Encode a float literal.
    #[inline]
    pub fn float(value: f64) -> Self {
        ExprKind::Float(value.to_bits())
    }
}
