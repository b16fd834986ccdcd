//! Type descriptors for converted argument values.

use std::fmt;

/// The type of value a parameter produces once its tokens are converted.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// 64-bit signed integer.
    Int,
    /// 64-bit floating point.
    Float,
    /// String type.
    String,
    /// Homogeneous list type.
    List(Box<ValueType>),
}

impl ValueType {
    /// Creates a list type with the given element type.
    #[must_use]
    pub fn list(element: ValueType) -> Self {
        Self::List(Box::new(element))
    }

    /// Returns the element type if this is a list type.
    #[must_use]
    pub fn element(&self) -> Option<&ValueType> {
        match self {
            Self::List(elem) => Some(elem),
            _ => None,
        }
    }

    /// Returns true for the scalar types (everything except lists).
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        !matches!(self, Self::List(_))
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int => write!(f, "int"),
            Self::Float => write!(f, "float"),
            Self::String => write!(f, "str"),
            Self::List(elem) => write!(f, "list<{elem}>"),
        }
    }
}
