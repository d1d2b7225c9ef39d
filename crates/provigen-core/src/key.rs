//! Injection keys and binding qualifiers
//!
//! A [`Key`] identifies one injection request: the requested type plus an
//! optional [`Qualifier`]. Keys are immutable values compared structurally,
//! so they can be used directly as map keys and graph nodes.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::TypeDescriptor;

/// Fully qualified name of the standard `@Named` qualifier
pub const NAMED_ANNOTATION: &str = "com.google.inject.name.Named";

/// A qualifier annotation instance with its element values
///
/// Element values are kept in their source form (e.g. `"x"` including the
/// quotes for a string element) so that equality matches annotation equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Annotation {
    annotation_type: String,
    values: BTreeMap<String, String>,
}

impl Annotation {
    pub fn new(annotation_type: impl Into<String>) -> Self {
        Self {
            annotation_type: annotation_type.into(),
            values: BTreeMap::new(),
        }
    }

    /// `@Named("name")`
    pub fn named(name: &str) -> Self {
        Self::new(NAMED_ANNOTATION).with_value("value", format!("{:?}", name))
    }

    pub fn with_value(mut self, element: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(element.into(), value.into());
        self
    }

    pub fn annotation_type(&self) -> &str {
        &self.annotation_type
    }

    pub fn value(&self, element: &str) -> Option<&str> {
        self.values.get(element).map(String::as_str)
    }

    pub fn values(&self) -> &BTreeMap<String, String> {
        &self.values
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}(", self.annotation_type)?;
        for (i, (element, value)) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", element, value)?;
        }
        write!(f, ")")
    }
}

/// Optional qualifier attached to a [`Key`]
///
/// An instance and a marker type are mutually exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum Qualifier {
    #[default]
    None,
    /// Annotation instance, compared by type and element values
    Instance(Annotation),
    /// Annotation type only, compared by type name
    Marker(String),
}

impl Qualifier {
    pub fn is_none(&self) -> bool {
        matches!(self, Qualifier::None)
    }

    /// Annotation type name for either qualified variant
    pub fn annotation_type(&self) -> Option<&str> {
        match self {
            Qualifier::None => None,
            Qualifier::Instance(annotation) => Some(annotation.annotation_type()),
            Qualifier::Marker(annotation_type) => Some(annotation_type.as_str()),
        }
    }
}

impl fmt::Display for Qualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Qualifier::None => Ok(()),
            Qualifier::Instance(annotation) => write!(f, "{}", annotation),
            Qualifier::Marker(annotation_type) => write!(f, "@{}", annotation_type),
        }
    }
}

/// A (type, qualifier) pair identifying an injection request
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Key {
    ty: TypeDescriptor,
    qualifier: Qualifier,
}

impl Key {
    /// Unqualified key for `ty`
    pub fn of(ty: TypeDescriptor) -> Self {
        Self {
            ty,
            qualifier: Qualifier::None,
        }
    }

    pub fn annotated_with(ty: TypeDescriptor, annotation: Annotation) -> Self {
        Self {
            ty,
            qualifier: Qualifier::Instance(annotation),
        }
    }

    pub fn marked_with(ty: TypeDescriptor, annotation_type: impl Into<String>) -> Self {
        Self {
            ty,
            qualifier: Qualifier::Marker(annotation_type.into()),
        }
    }

    pub fn with_qualifier(ty: TypeDescriptor, qualifier: Qualifier) -> Self {
        Self { ty, qualifier }
    }

    /// Key for `inner` carrying the same qualifier as `base`
    ///
    /// An annotation instance is carried over as that same instance, a marker
    /// type as that marker type; an unqualified base gives an unqualified key.
    pub fn with_same_qualifier(inner: TypeDescriptor, base: &Key) -> Self {
        match &base.qualifier {
            Qualifier::Instance(annotation) => Key::annotated_with(inner, annotation.clone()),
            Qualifier::Marker(annotation_type) => Key::marked_with(inner, annotation_type.clone()),
            Qualifier::None => Key::of(inner),
        }
    }

    pub fn ty(&self) -> &TypeDescriptor {
        &self.ty
    }

    pub fn qualifier(&self) -> &Qualifier {
        &self.qualifier
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.qualifier.is_none() {
            write!(f, "Key<{}>", self.ty)
        } else {
            write!(f, "Key<{}, {}>", self.ty, self.qualifier)
        }
    }
}
