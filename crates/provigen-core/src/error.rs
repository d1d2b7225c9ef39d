use std::fmt;

use thiserror::Error;

use crate::key::Key;
use crate::types::TypeDescriptor;

/// Why a key cannot back a `Provider<T>` binding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    NotParameterized,
    WrongArity { found: usize },
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedReason::NotParameterized => write!(f, "type is not parameterized"),
            MalformedReason::WrongArity { found } => {
                write!(f, "expected exactly one type argument, found {}", found)
            }
        }
    }
}

/// A key's type does not have the single-argument `Provider<T>` shape
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Malformed provider binding for {key}: {reason}")]
pub struct MalformedBindingError {
    pub key: Key,
    pub reason: MalformedReason,
}

/// Why a type has no source-level name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnrepresentableReason {
    Wildcard,
    TypeVariable,
    LocalClass,
    AnonymousClass,
}

impl fmt::Display for UnrepresentableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnrepresentableReason::Wildcard => write!(f, "wildcard types cannot be named"),
            UnrepresentableReason::TypeVariable => {
                write!(f, "type variables are not in scope in generated code")
            }
            UnrepresentableReason::LocalClass => write!(f, "local classes cannot be named"),
            UnrepresentableReason::AnonymousClass => write!(f, "anonymous classes cannot be named"),
        }
    }
}

/// A type has no textual form usable in generated source
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("No source name for type {ty}: {reason}")]
pub struct UnrepresentableTypeError {
    pub ty: TypeDescriptor,
    pub reason: UnrepresentableReason,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error(transparent)]
    MalformedBinding(#[from] MalformedBindingError),

    #[error(transparent)]
    UnrepresentableType(#[from] UnrepresentableTypeError),
}
