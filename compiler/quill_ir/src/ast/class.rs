//! Class declarations.
//!
//! A class body may only contain field declarations and method declarations;
//! the types below make anything else unrepresentable.

use crate::{ExprId, Name, ParamRange, Span, TypeTag};

/// A field declaration: `balance: int = 0`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct FieldDecl {
    pub name: Name,
    /// Optional runtime type tag.
    pub ty: Option<TypeTag>,
    /// Optional default expression, used when the constructor omits the field.
    pub default: Option<ExprId>,
}

/// A method declaration: `deposit(amount) = { ... }`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct MethodDecl {
    pub name: Name,
    pub params: ParamRange,
    pub body: ExprId,
}

/// A class declaration.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ClassDecl {
    pub name: Name,
    /// Fields in declaration order; constructor arguments bind positionally.
    pub fields: Vec<FieldDecl>,
    pub methods: Vec<MethodDecl>,
    pub span: Span,
}
