//! Accessor-method name allocation
//!
//! Every key reachable from the injector gets exactly one accessor method in
//! the generated output. Bindings refer to each other only through these
//! names, so allocation must be stable: asking twice for the same key yields
//! the same name, and two distinct keys never share one.

use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, PoisonError};

use provigen_core::Key;

use crate::GeneratorConfig;

/// Assigns accessor method names to keys for one generation pass
pub trait NameAllocator: Send + Sync {
    /// Name of the no-argument method returning an instance for `key`
    fn getter_method_name(&self, key: &Key) -> String;
}

#[derive(Debug, Default)]
struct Allocation {
    by_key: HashMap<Key, String>,
    used: HashSet<String>,
}

/// Default [`NameAllocator`] deriving readable names from the key text
///
/// Names are `<prefix><sanitised key>`; a collision between distinct keys
/// is resolved by appending `_2`, `_3`, and so on in allocation order.
#[derive(Debug)]
pub struct NameGenerator {
    prefix: String,
    allocation: Mutex<Allocation>,
}

impl NameGenerator {
    pub fn new() -> Self {
        Self::with_prefix("get_")
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            allocation: Mutex::new(Allocation::default()),
        }
    }

    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::with_prefix(config.getter_prefix.clone())
    }

    /// Number of distinct keys named so far
    pub fn len(&self) -> usize {
        self.lock().by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Allocation> {
        // Allocation is updated atomically under the lock, so a poisoned
        // guard still holds a consistent map.
        self.allocation.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn base_name(&self, key: &Key) -> String {
        let mut text = key.ty().to_string();
        if !key.qualifier().is_none() {
            text.push('_');
            text.push_str(&key.qualifier().to_string());
        }
        format!("{}{}", self.prefix, sanitize_identifier(&text))
    }
}

impl Default for NameGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl NameAllocator for NameGenerator {
    fn getter_method_name(&self, key: &Key) -> String {
        let mut allocation = self.lock();
        if let Some(name) = allocation.by_key.get(key) {
            tracing::trace!("NameGenerator: cache hit for {} -> {}", key, name);
            return name.clone();
        }

        let base = self.base_name(key);
        let mut name = base.clone();
        let mut counter = 2;
        while allocation.used.contains(&name) {
            name = format!("{}_{}", base, counter);
            counter += 1;
        }

        tracing::trace!("NameGenerator: allocated {} for {}", name, key);
        allocation.used.insert(name.clone());
        allocation.by_key.insert(key.clone(), name.clone());
        name
    }
}

/// Replace every run of non-identifier characters with a single `_`
fn sanitize_identifier(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_underscore = false;
    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_underscore && !out.is_empty() {
                out.push('_');
            }
            pending_underscore = false;
            out.push(c);
        } else {
            pending_underscore = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use provigen_core::{Annotation, TypeDescriptor};

    #[test]
    fn test_sanitize_identifier() {
        assert_eq!(sanitize_identifier("java.lang.String"), "java_lang_String");
        assert_eq!(
            sanitize_identifier("com.google.inject.Provider<? extends a.Foo>"),
            "com_google_inject_Provider_extends_a_Foo"
        );
        assert_eq!(sanitize_identifier("int[]"), "int");
        assert_eq!(sanitize_identifier("Outer$Inner"), "Outer_Inner");
    }

    #[test]
    fn test_stable_per_key() {
        let names = NameGenerator::new();
        let key = Key::of(TypeDescriptor::class("java.lang.String"));

        let first = names.getter_method_name(&key);
        let second = names.getter_method_name(&key);
        assert_eq!(first, "get_java_lang_String");
        assert_eq!(first, second);
        assert_eq!(names.len(), 1);
    }

    #[test]
    fn test_qualifier_in_name() {
        let names = NameGenerator::new();
        let key = Key::annotated_with(TypeDescriptor::class("com.example.Foo"), Annotation::named("x"));
        assert_eq!(
            names.getter_method_name(&key),
            "get_com_example_Foo_com_google_inject_name_Named_value_x"
        );
    }

    #[test]
    fn test_colliding_keys_get_distinct_names() {
        let names = NameGenerator::new();
        // `int[]` and `int` sanitise to the same text
        let scalar = Key::of(TypeDescriptor::primitive("int"));
        let array = Key::of(TypeDescriptor::array(TypeDescriptor::primitive("int")));

        assert_eq!(names.getter_method_name(&scalar), "get_int");
        assert_eq!(names.getter_method_name(&array), "get_int_2");
        assert_eq!(names.getter_method_name(&scalar), "get_int");
    }

    #[test]
    fn test_custom_prefix() {
        let names = NameGenerator::with_prefix("provide_");
        let key = Key::of(TypeDescriptor::class("java.lang.String"));
        assert_eq!(names.getter_method_name(&key), "provide_java_lang_String");
    }
}
