//! Binding representations and creator-method generation
//!
//! The graph builder turns each requested key into a [`Binding`], records the
//! dependencies it reports in a [`BindingGraph`], and finally asks every binding
//! to write its creator method through a [`SourceWriter`].

pub mod binding;
pub mod config;
pub mod error;
pub mod graph;
pub mod names;
pub mod source_name;
pub mod writer;

use provigen_core::Key;

pub use binding::{Binding, GenerationContext, ImplicitProviderBinding};
pub use config::GeneratorConfig;
pub use error::CodegenError;
pub use graph::BindingGraph;
pub use names::{NameAllocator, NameGenerator};
pub use source_name::{SourceNameResolver, TypeNameResolver};
pub use writer::{MethodWriter, SourceWriter};

/// Implicit binding for `key` if its type is a configured provider type
///
/// Returns `None` for keys that are not provider shaped. A provider key with
/// the wrong number of type arguments yields an error rather than `None`.
pub fn implicit_provider_binding(
    config: &GeneratorConfig,
    key: &Key,
) -> Option<Result<ImplicitProviderBinding, CodegenError>> {
    if !config.is_provider_type(key.ty()) {
        return None;
    }
    Some(ImplicitProviderBinding::new(key.clone()).map_err(CodegenError::from))
}
