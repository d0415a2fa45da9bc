//! Runtime type tags.
//!
//! Quill has no static type checker. A tag is a light runtime assertion on a
//! `let` binding or a constructor argument, and it picks the default value
//! of an omitted class field.

use std::fmt;

/// Type annotation accepted by `let x: <tag> = ...` and typed class fields.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeTag {
    Int,
    Float,
    Bool,
    Str,
}

impl TypeTag {
    /// Parse the source spelling of a tag.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "int" => Some(Self::Int),
            "float" => Some(Self::Float),
            "bool" => Some(Self::Bool),
            "string" => Some(Self::Str),
            _ => None,
        }
    }

    /// Source spelling, used in diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::Bool => "bool",
            Self::Str => "string",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
