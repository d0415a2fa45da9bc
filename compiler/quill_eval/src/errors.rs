//! Error types for evaluation.
//!
//! `EvalErrorKind` is the structured category; `EvalError` carries the kind,
//! its rendered message, the span of the failing node and optional notes.
//! Errors are built through the `#[cold]` factory functions below rather
//! than by hand, so the kind and the message never disagree.

use quill_ir::{BinaryOp, Span, TypeTag};
use std::fmt;

use crate::value::Value;

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    // Access
    #[error("undefined variable: {name}")]
    NameNotFound { name: String },
    #[error("no field `{field}` on {class} instance")]
    FieldNotFound { field: String, class: String },
    #[error("no method `{method}` on {class} instance")]
    MethodNotFound { method: String, class: String },
    #[error("index {index} out of bounds for array of length {len}")]
    IndexOutOfBounds { index: i64, len: usize },

    // Type
    #[error("type mismatch: expected {expected}, got {got}")]
    TypeMismatch { expected: String, got: String },
    #[error("`{name}` does not hold a reference")]
    NotAReference { name: String },

    // Arithmetic
    #[error("division by zero")]
    DivisionByZero,
    #[error("integer overflow in {operation}")]
    IntegerOverflow { operation: String },

    // References and scopes
    #[error("reference chain longer than {limit} hops")]
    ReferenceChainTooDeep { limit: usize },
    #[error("scope was reclaimed by collection")]
    DanglingScope,
}

impl EvalErrorKind {
    /// True for the type-mismatch family, which includes `:=` on a
    /// non-reference binding.
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Self::TypeMismatch { .. } | Self::NotAReference { .. })
    }
}

/// Additional context note attached to an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalNote {
    pub message: String,
}

impl EvalNote {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    /// Structured error category.
    pub kind: EvalErrorKind,
    /// Human-readable message, equal to `kind.to_string()`.
    pub message: String,
    /// Source location of the node that failed.
    pub span: Option<Span>,
    /// Secondary information, such as how to fix the error.
    pub notes: Vec<EvalNote>,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            message,
            span: None,
            notes: Vec::new(),
        }
    }

    /// Attach a source span to this error.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Add a context note to this error.
    #[must_use]
    pub fn with_note(mut self, note: EvalNote) -> Self {
        self.notes.push(note);
        self
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(span) = self.span {
            write!(f, " at {span}")?;
        }
        for note in &self.notes {
            write!(f, "\n  note: {}", note.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for EvalError {}

// Access

/// Variable not bound anywhere in the scope chain.
#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NameNotFound {
        name: name.to_string(),
    })
}

/// Assignment to a name that was never declared.
#[cold]
pub fn undeclared_assignment(name: &str) -> EvalError {
    undefined_variable(name).with_note(EvalNote::new(format!(
        "declare `{name}` with `let` before assigning to it"
    )))
}

#[cold]
pub fn field_not_found(field: &str, class: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::FieldNotFound {
        field: field.to_string(),
        class: class.to_string(),
    })
}

#[cold]
pub fn method_not_found(method: &str, class: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::MethodNotFound {
        method: method.to_string(),
        class: class.to_string(),
    })
}

#[cold]
pub fn index_out_of_bounds(index: i64, len: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IndexOutOfBounds { index, len })
}

// Type

/// Generic type mismatch.
#[cold]
pub fn type_mismatch(expected: &str, got: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        expected: expected.to_string(),
        got: got.to_string(),
    })
}

/// Called something that is not a function.
#[cold]
pub fn not_callable(type_name: &str) -> EvalError {
    type_mismatch("function", type_name)
}

/// Call with the wrong number of arguments.
#[cold]
pub fn wrong_arg_count(name: &str, expected: usize, got: usize) -> EvalError {
    let arg_word = if expected == 1 {
        "argument"
    } else {
        "arguments"
    };
    let err = type_mismatch(&format!("{expected} {arg_word}"), &got.to_string());
    if name.is_empty() {
        err
    } else {
        err.with_note(EvalNote::new(format!("in call to `{name}`")))
    }
}

/// A `let` annotation or a typed field that the value does not satisfy.
#[cold]
pub fn annotation_mismatch(binding: &str, tag: TypeTag, got: &str) -> EvalError {
    type_mismatch(tag.as_str(), got).with_note(EvalNote::new(format!(
        "`{binding}` is annotated as {tag}"
    )))
}

/// An `if` condition that is neither a boolean nor a number.
#[cold]
pub fn non_boolean_condition(got: &str) -> EvalError {
    type_mismatch("bool or number", got)
}

/// Operator applied to operands it does not support.
#[cold]
pub fn invalid_binary_op(op: BinaryOp, left: &str, right: &str) -> EvalError {
    type_mismatch(
        &format!("operands supported by `{}`", op.as_symbol()),
        &format!("{left} and {right}"),
    )
}

/// `new` with more arguments than the class declares fields.
#[cold]
pub fn too_many_constructor_args(class: &str, fields: usize, got: usize) -> EvalError {
    type_mismatch(
        &format!("at most {fields} constructor arguments"),
        &got.to_string(),
    )
    .with_note(EvalNote::new(format!("{class} declares {fields} fields")))
}

#[cold]
pub fn not_a_reference(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotAReference {
        name: name.to_string(),
    })
}

// Arithmetic

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

#[cold]
pub fn integer_overflow(operation: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow {
        operation: operation.to_string(),
    })
}

// References and scopes

#[cold]
pub fn reference_chain_too_deep(limit: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ReferenceChainTooDeep { limit })
}

#[cold]
pub fn dangling_scope() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DanglingScope)
}
