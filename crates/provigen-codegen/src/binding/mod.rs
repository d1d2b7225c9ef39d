//! Binding strategies
//!
//! A binding knows how to supply a value for one key. The graph builder asks
//! each binding for its dependencies while analysing the graph, and later asks
//! it to write the creator method that produces the value.

mod implicit_provider;

use std::collections::BTreeSet;
use std::fmt::Debug;

use provigen_core::Dependency;

pub use implicit_provider::ImplicitProviderBinding;

use crate::names::NameAllocator;
use crate::source_name::TypeNameResolver;
use crate::writer::SourceWriter;
use crate::CodegenError;

/// Collaborators shared by every binding during one generation pass
#[derive(Clone, Copy)]
pub struct GenerationContext<'a> {
    pub names: &'a dyn NameAllocator,
    pub types: &'a dyn TypeNameResolver,
}

impl<'a> GenerationContext<'a> {
    pub fn new(names: &'a dyn NameAllocator, types: &'a dyn TypeNameResolver) -> Self {
        Self { names, types }
    }
}

/// Common contract for all binding kinds
pub trait Binding: Debug + Send + Sync {
    /// Edges from the bound key to every key it needs
    fn dependencies(&self) -> BTreeSet<Dependency>;

    /// Write the method that creates the bound value
    ///
    /// Nothing is written when this fails.
    fn write_creator_method(
        &self,
        out: &mut dyn SourceWriter,
        signature: &str,
        ctx: &GenerationContext<'_>,
    ) -> Result<(), CodegenError>;
}
