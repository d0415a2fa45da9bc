//! Programmatic AST construction.
//!
//! `AstBuilder` is the seam between an external parser and the evaluator:
//! one constructor per node kind, interning names on the way in. Nodes get
//! `Span::DUMMY` unless the caller sets a span with [`AstBuilder::at`].

use crate::{
    BinaryOp, ClassDecl, Expr, ExprArena, ExprId, ExprKind, FieldDecl, MethodDecl, Name,
    SharedArena, SharedInterner, Span, TypeTag,
};

/// Builds an `ExprArena` node by node.
pub struct AstBuilder {
    arena: ExprArena,
    interner: SharedInterner,
    span: Span,
}

impl AstBuilder {
    pub fn new(interner: &SharedInterner) -> Self {
        AstBuilder {
            arena: ExprArena::new(),
            interner: interner.clone(),
            span: Span::DUMMY,
        }
    }

    /// Use `span` for every node allocated from now on.
    pub fn at(&mut self, span: Span) -> &mut Self {
        self.span = span;
        self
    }

    /// Intern a name.
    pub fn name(&self, name: &str) -> Name {
        self.interner.intern(name)
    }

    fn alloc(&mut self, kind: ExprKind) -> ExprId {
        self.arena.alloc_expr(Expr::new(kind, self.span))
    }

    // Literals

    pub fn int(&mut self, value: i64) -> ExprId {
        self.alloc(ExprKind::Int(value))
    }

    pub fn float(&mut self, value: f64) -> ExprId {
        self.alloc(ExprKind::float(value))
    }

    pub fn bool(&mut self, value: bool) -> ExprId {
        self.alloc(ExprKind::Bool(value))
    }

    pub fn string(&mut self, value: &str) -> ExprId {
        let name = self.name(value);
        self.alloc(ExprKind::String(name))
    }

    pub fn ident(&mut self, name: &str) -> ExprId {
        let name = self.name(name);
        self.alloc(ExprKind::Ident(name))
    }

    // Operators and control flow

    pub fn binary(&mut self, op: BinaryOp, left: ExprId, right: ExprId) -> ExprId {
        self.alloc(ExprKind::Binary { op, left, right })
    }

    pub fn if_else(&mut self, cond: ExprId, then_branch: ExprId, else_branch: ExprId) -> ExprId {
        self.alloc(ExprKind::If {
            cond,
            then_branch,
            else_branch: Some(else_branch),
        })
    }

    pub fn if_then(&mut self, cond: ExprId, then_branch: ExprId) -> ExprId {
        self.alloc(ExprKind::If {
            cond,
            then_branch,
            else_branch: None,
        })
    }

    pub fn block(&mut self, stmts: &[ExprId]) -> ExprId {
        let range = self.arena.alloc_expr_list(stmts.iter().copied());
        self.alloc(ExprKind::Block(range))
    }

    // Bindings

    pub fn let_var(&mut self, name: &str, init: ExprId) -> ExprId {
        let name = self.name(name);
        self.alloc(ExprKind::Let {
            name,
            ty: None,
            init,
        })
    }

    pub fn let_typed(&mut self, name: &str, ty: TypeTag, init: ExprId) -> ExprId {
        let name = self.name(name);
        self.alloc(ExprKind::Let {
            name,
            ty: Some(ty),
            init,
        })
    }

    pub fn assign(&mut self, name: &str, value: ExprId) -> ExprId {
        let name = self.name(name);
        self.alloc(ExprKind::Assign { name, value })
    }

    pub fn reference(&mut self, name: &str) -> ExprId {
        let name = self.name(name);
        self.alloc(ExprKind::Ref(name))
    }

    pub fn assign_ref(&mut self, name: &str, value: ExprId) -> ExprId {
        let name = self.name(name);
        self.alloc(ExprKind::AssignRef { name, value })
    }

    // Functions

    pub fn function(&mut self, name: &str, params: &[&str], body: ExprId) -> ExprId {
        let name = self.name(name);
        let params = self.params(params);
        self.alloc(ExprKind::Function { name, params, body })
    }

    pub fn call(&mut self, func: &str, args: &[ExprId]) -> ExprId {
        let func = self.name(func);
        let args = self.arena.alloc_expr_list(args.iter().copied());
        self.alloc(ExprKind::Call { func, args })
    }

    pub fn lambda(&mut self, param: &str, body: ExprId) -> ExprId {
        let param = self.name(param);
        self.alloc(ExprKind::Lambda { param, body })
    }

    fn params(&mut self, params: &[&str]) -> crate::ParamRange {
        let names: Vec<Name> = params.iter().map(|p| self.interner.intern(p)).collect();
        self.arena.alloc_params(names)
    }

    // Collections

    pub fn array(&mut self, elements: &[ExprId]) -> ExprId {
        let range = self.arena.alloc_expr_list(elements.iter().copied());
        self.alloc(ExprKind::Array(range))
    }

    pub fn index(&mut self, receiver: ExprId, index: ExprId) -> ExprId {
        self.alloc(ExprKind::Index { receiver, index })
    }

    // Objects

    /// Start a class declaration; finish it with [`ClassBuilder::finish`].
    pub fn class(&mut self, name: &str) -> ClassBuilder<'_> {
        let name = self.name(name);
        let span = self.span;
        ClassBuilder {
            builder: self,
            decl: ClassDecl {
                name,
                fields: Vec::new(),
                methods: Vec::new(),
                span,
            },
        }
    }

    pub fn new_object(&mut self, class: &str, args: &[ExprId]) -> ExprId {
        let class = self.name(class);
        let args = self.arena.alloc_expr_list(args.iter().copied());
        self.alloc(ExprKind::New { class, args })
    }

    pub fn method_call(&mut self, receiver: ExprId, method: &str, args: &[ExprId]) -> ExprId {
        let method = self.name(method);
        let args = self.arena.alloc_expr_list(args.iter().copied());
        self.alloc(ExprKind::MethodCall {
            receiver,
            method,
            args,
        })
    }

    pub fn field(&mut self, receiver: ExprId, field: &str) -> ExprId {
        let field = self.name(field);
        self.alloc(ExprKind::FieldAccess { receiver, field })
    }

    /// Borrow the arena being built.
    pub fn arena(&self) -> &ExprArena {
        &self.arena
    }

    /// Finish building, returning a shareable arena.
    pub fn finish(self) -> SharedArena {
        SharedArena::new(self.arena)
    }
}

/// Accumulates fields and methods for one class declaration.
pub struct ClassBuilder<'b> {
    builder: &'b mut AstBuilder,
    decl: ClassDecl,
}

impl ClassBuilder<'_> {
    /// Declare a field with an optional type tag.
    #[must_use]
    pub fn field(mut self, name: &str, ty: Option<TypeTag>) -> Self {
        let name = self.builder.name(name);
        self.decl.fields.push(FieldDecl {
            name,
            ty,
            default: None,
        });
        self
    }

    /// Declare a field with a default expression.
    #[must_use]
    pub fn field_with_default(mut self, name: &str, ty: Option<TypeTag>, default: ExprId) -> Self {
        let name = self.builder.name(name);
        self.decl.fields.push(FieldDecl {
            name,
            ty,
            default: Some(default),
        });
        self
    }

    /// Declare a method.
    #[must_use]
    pub fn method(mut self, name: &str, params: &[&str], body: ExprId) -> Self {
        let name = self.builder.name(name);
        let params = self.builder.params(params);
        self.decl.methods.push(MethodDecl { name, params, body });
        self
    }

    /// Allocate the declaration and return the `class` expression.
    pub fn finish(self) -> ExprId {
        let class = self.builder.arena.alloc_class(self.decl);
        self.builder.alloc(ExprKind::Class(class))
    }
}
