//! Type descriptors for injection requests
//!
//! A [`TypeDescriptor`] is the generator's view of a type appearing in an
//! injection request. It carries just enough structure for binding
//! construction (generic arity and argument access) and for rendering source
//! names, without tying the generator to any reflection mechanism.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Bound carried by a wildcard type argument
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WildcardBound {
    /// `?`
    Unbounded,
    /// `? extends T`
    Extends(Box<TypeDescriptor>),
    /// `? super T`
    Super(Box<TypeDescriptor>),
}

/// Structural description of a requested type
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TypeDescriptor {
    /// Named class or interface, by binary name (e.g. `com.example.Outer$Inner`)
    Class { name: String },

    /// Primitive type such as `int` or `boolean`
    Primitive(String),

    /// Generic instantiation such as `Provider<String>`
    Parameterized {
        raw: String,
        arguments: Vec<TypeDescriptor>,
    },

    /// Array of the component type
    Array(Box<TypeDescriptor>),

    /// Wildcard type argument
    Wildcard(WildcardBound),

    /// Type variable such as `T`
    TypeVariable(String),

    /// Local or anonymous class; has no name usable from generated code
    Local { name: String, anonymous: bool },
}

impl TypeDescriptor {
    pub fn class(name: impl Into<String>) -> Self {
        TypeDescriptor::Class { name: name.into() }
    }

    pub fn primitive(name: impl Into<String>) -> Self {
        TypeDescriptor::Primitive(name.into())
    }

    pub fn parameterized(raw: impl Into<String>, arguments: Vec<TypeDescriptor>) -> Self {
        TypeDescriptor::Parameterized {
            raw: raw.into(),
            arguments,
        }
    }

    pub fn array(component: TypeDescriptor) -> Self {
        TypeDescriptor::Array(Box::new(component))
    }

    pub fn wildcard() -> Self {
        TypeDescriptor::Wildcard(WildcardBound::Unbounded)
    }

    pub fn wildcard_extends(bound: TypeDescriptor) -> Self {
        TypeDescriptor::Wildcard(WildcardBound::Extends(Box::new(bound)))
    }

    pub fn wildcard_super(bound: TypeDescriptor) -> Self {
        TypeDescriptor::Wildcard(WildcardBound::Super(Box::new(bound)))
    }

    pub fn type_variable(name: impl Into<String>) -> Self {
        TypeDescriptor::TypeVariable(name.into())
    }

    pub fn local(name: impl Into<String>) -> Self {
        TypeDescriptor::Local {
            name: name.into(),
            anonymous: false,
        }
    }

    pub fn anonymous(name: impl Into<String>) -> Self {
        TypeDescriptor::Local {
            name: name.into(),
            anonymous: true,
        }
    }

    /// Whether this is a generic instantiation, even one with no arguments
    pub fn is_parameterized(&self) -> bool {
        matches!(self, TypeDescriptor::Parameterized { .. })
    }

    /// Number of type arguments; zero for anything not parameterized
    pub fn arity(&self) -> usize {
        self.type_arguments().len()
    }

    pub fn type_arguments(&self) -> &[TypeDescriptor] {
        match self {
            TypeDescriptor::Parameterized { arguments, .. } => arguments,
            _ => &[],
        }
    }

    /// Name of the raw (erased) class, if this type has one
    pub fn raw_name(&self) -> Option<&str> {
        match self {
            TypeDescriptor::Class { name } => Some(name.as_str()),
            TypeDescriptor::Parameterized { raw, .. } => Some(raw.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDescriptor::Class { name } => write!(f, "{}", name),
            TypeDescriptor::Primitive(name) => write!(f, "{}", name),
            TypeDescriptor::Parameterized { raw, arguments } => {
                write!(f, "{}<", raw)?;
                for (i, arg) in arguments.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ">")
            }
            TypeDescriptor::Array(component) => write!(f, "{}[]", component),
            TypeDescriptor::Wildcard(WildcardBound::Unbounded) => write!(f, "?"),
            TypeDescriptor::Wildcard(WildcardBound::Extends(bound)) => {
                write!(f, "? extends {}", bound)
            }
            TypeDescriptor::Wildcard(WildcardBound::Super(bound)) => write!(f, "? super {}", bound),
            TypeDescriptor::TypeVariable(name) => write!(f, "{}", name),
            TypeDescriptor::Local { name, anonymous } => {
                if *anonymous {
                    write!(f, "<anonymous {}>", name)
                } else {
                    write!(f, "<local {}>", name)
                }
            }
        }
    }
}
