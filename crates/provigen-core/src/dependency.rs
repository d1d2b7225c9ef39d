//! Edges of the binding graph

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::key::Key;

/// Directed edge from the key being bound to a key it needs
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Dependency {
    source: Key,
    target: Key,
    optional: bool,
    /// Target is only instantiated when the source's creator is invoked
    lazy: bool,
}

impl Dependency {
    pub fn new(source: Key, target: Key, optional: bool, lazy: bool) -> Self {
        Self {
            source,
            target,
            optional,
            lazy,
        }
    }

    /// Required edge whose target is resolved on demand
    pub fn lazy_required(source: Key, target: Key) -> Self {
        Self::new(source, target, false, true)
    }

    pub fn from(&self) -> &Key {
        &self.source
    }

    pub fn to(&self) -> &Key {
        &self.target
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    pub fn is_lazy(&self) -> bool {
        self.lazy
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)?;
        match (self.optional, self.lazy) {
            (true, true) => write!(f, " [optional, lazy]"),
            (true, false) => write!(f, " [optional]"),
            (false, true) => write!(f, " [lazy]"),
            (false, false) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TypeDescriptor;

    #[test]
    fn test_lazy_required() {
        let from = Key::of(TypeDescriptor::parameterized(
            "com.google.inject.Provider",
            vec![TypeDescriptor::class("java.lang.String")],
        ));
        let to = Key::of(TypeDescriptor::class("java.lang.String"));
        let dep = Dependency::lazy_required(from.clone(), to.clone());

        assert_eq!(dep.from(), &from);
        assert_eq!(dep.to(), &to);
        assert!(!dep.is_optional());
        assert!(dep.is_lazy());
        assert_eq!(
            dep.to_string(),
            "Key<com.google.inject.Provider<java.lang.String>> -> Key<java.lang.String> [lazy]"
        );
    }
}
