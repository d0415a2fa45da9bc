//! Runtime values for the Quill interpreter.
//!
//! # Allocation
//!
//! Heap-backed payloads go through factory methods on `Value`. `Heap<T>`
//! has a `pub(super)` constructor, so code outside this module cannot
//! allocate one directly:
//!
//! ```text
//! let s = Value::string("hello");          // OK
//! let a = Value::array(vec![]);            // OK
//! let s = Value::Str(Heap::new(...));      // ERROR: Heap::new is pub(super)
//! ```
//!
//! # Scope handles
//!
//! Closures, references, classes and instances hold `ScopeId`s into the
//! interpreter's `ScopeArena`, never borrows. `Value::visit_scopes` reports
//! those handles to the collector.

mod function;
mod heap;
mod object;
mod reference;

use std::fmt;

use quill_ir::{StringInterner, TypeTag};

pub use function::{FunctionValue, NativeFn, NativeFunction};
pub use heap::Heap;
pub use object::{ClassValue, InstanceValue};
pub use reference::ScopeRef;

use crate::environment::ScopeId;

/// Runtime value.
#[derive(Clone, Default)]
pub enum Value {
    // Primitives
    Int(i64),
    Float(f64),
    Bool(bool),
    /// The "no value" of empty blocks, `let`, assignments and an `if`
    /// whose missing else branch was taken.
    #[default]
    Void,

    // Heap types
    Str(Heap<String>),
    /// Fixed-length array. Elements are replaced by rebuilding the array.
    Array(Heap<Vec<Value>>),

    // Callables
    Function(FunctionValue),
    Native(NativeFunction),

    // Scope-backed
    Reference(ScopeRef),
    Class(Heap<ClassValue>),
    Instance(InstanceValue),
}

impl Value {
    // Factory methods

    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    #[inline]
    pub fn float(f: f64) -> Self {
        Value::Float(f)
    }

    #[inline]
    pub fn bool(b: bool) -> Self {
        Value::Bool(b)
    }

    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    #[inline]
    pub fn array(items: Vec<Value>) -> Self {
        Value::Array(Heap::new(items))
    }

    #[inline]
    pub fn function(func: FunctionValue) -> Self {
        Value::Function(func)
    }

    #[inline]
    pub fn native(name: &'static str, func: NativeFn) -> Self {
        Value::Native(NativeFunction::new(name, func))
    }

    #[inline]
    pub fn reference(target: ScopeRef) -> Self {
        Value::Reference(target)
    }

    #[inline]
    pub fn class(class: ClassValue) -> Self {
        Value::Class(Heap::new(class))
    }

    #[inline]
    pub fn instance(instance: InstanceValue) -> Self {
        Value::Instance(instance)
    }

    // Queries

    /// Type name used in diagnostics and type-tag checks.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Bool(_) => "bool",
            Value::Void => "void",
            Value::Str(_) => "string",
            Value::Array(_) => "array",
            Value::Function(_) => "function",
            Value::Native(_) => "native function",
            Value::Reference(_) => "reference",
            Value::Class(_) => "class",
            Value::Instance(_) => "instance",
        }
    }

    /// Check this value against a `let` or field type annotation.
    pub fn matches_tag(&self, tag: TypeTag) -> bool {
        matches!(
            (tag, self),
            (TypeTag::Int, Value::Int(_))
                | (TypeTag::Float, Value::Float(_))
                | (TypeTag::Bool, Value::Bool(_))
                | (TypeTag::Str, Value::Str(_))
        )
    }

    /// Default value of an omitted class field.
    ///
    /// Untyped fields default to integer zero.
    pub fn default_for(tag: Option<TypeTag>) -> Self {
        match tag {
            Some(TypeTag::Str) => Value::string(""),
            Some(TypeTag::Float) => Value::Float(0.0),
            Some(TypeTag::Bool) => Value::Bool(false),
            Some(TypeTag::Int) | None => Value::Int(0),
        }
    }

    /// True for user functions and natives.
    pub fn is_callable(&self) -> bool {
        matches!(self, Value::Function(_) | Value::Native(_))
    }

    /// Report every scope handle this value keeps alive.
    pub fn visit_scopes(&self, visit: &mut impl FnMut(ScopeId)) {
        match self {
            Value::Function(func) => visit(func.closure),
            Value::Reference(target) => visit(target.scope),
            Value::Class(class) => visit(class.scope),
            Value::Instance(instance) => {
                visit(instance.storage);
                visit(instance.class.scope);
                for method in instance.methods.values() {
                    visit(method.closure);
                }
            }
            Value::Array(items) => {
                for item in items.iter() {
                    item.visit_scopes(visit);
                }
            }
            Value::Int(_)
            | Value::Float(_)
            | Value::Bool(_)
            | Value::Void
            | Value::Str(_)
            | Value::Native(_) => {}
        }
    }

    /// Render for user output, resolving interned names.
    ///
    /// Same as `Display` for data; callables and objects show their names.
    pub fn display_value(&self, interner: &StringInterner) -> String {
        match self {
            Value::Array(items) => {
                let inner: Vec<_> = items.iter().map(|v| v.display_value(interner)).collect();
                format!("[{}]", inner.join(", "))
            }
            Value::Function(func) => match func.name {
                Some(name) => format!("<function {}>", interner.lookup(name)),
                None => "<lambda>".to_string(),
            },
            Value::Reference(target) => format!("<ref {}>", interner.lookup(target.name)),
            Value::Class(class) => format!("<class {}>", interner.lookup(class.name)),
            Value::Instance(instance) => {
                format!("<{} instance>", interner.lookup(instance.class_name()))
            }
            _ => self.to_string(),
        }
    }
}

/// Format a float so integral values keep a fractional part: `2.0`, not `2`.
fn fmt_float(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_finite() && n.fract() == 0.0 {
        write!(f, "{n:.1}")
    } else {
        write!(f, "{n}")
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(n) => fmt_float(f, *n),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Void => write!(f, "void"),
            Value::Str(s) => write!(f, "{}", &**s),
            Value::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Function(func) => match func.name {
                Some(_) => write!(f, "<function>"),
                None => write!(f, "<lambda>"),
            },
            Value::Native(native) => write!(f, "<native {}>", native.name),
            Value::Reference(_) => write!(f, "<ref>"),
            Value::Class(_) => write!(f, "<class>"),
            Value::Instance(_) => write!(f, "<instance>"),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "Int({n})"),
            Value::Float(n) => write!(f, "Float({n:?})"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Void => write!(f, "Void"),
            Value::Str(s) => write!(f, "Str({:?})", &**s),
            Value::Array(items) => write!(f, "Array({:?})", &**items),
            Value::Function(func) => write!(f, "{func:?}"),
            Value::Native(native) => write!(f, "{native:?}"),
            Value::Reference(target) => write!(f, "Reference({target:?})"),
            Value::Class(class) => write!(f, "{:?}", &**class),
            Value::Instance(instance) => write!(f, "{instance:?}"),
        }
    }
}

impl PartialEq for Value {
    /// Structural equality on data, identity on closures and objects.
    ///
    /// `Int(1) != Float(1.0)` here; the language's `==` operator promotes.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Void, Value::Void) => true,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => a == b,
            (Value::Native(a), Value::Native(b)) => a == b,
            (Value::Reference(a), Value::Reference(b)) => a == b,
            (Value::Class(a), Value::Class(b)) => a == b,
            (Value::Instance(a), Value::Instance(b)) => a == b,
            _ => false,
        }
    }
}
