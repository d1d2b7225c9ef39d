//! Binding for `Provider<T>` that forwards to the binding for `T`

use std::collections::BTreeSet;

use provigen_core::{Dependency, Key, MalformedBindingError, MalformedReason};
use tracing::instrument;

use super::{Binding, GenerationContext};
use crate::writer::SourceWriter;
use crate::CodegenError;

/// Supplies `Provider<T> [@Q]` by delegating to the accessor for `T [@Q]`
///
/// The qualifier on the provider key moves to the target key, so
/// `@Named("x") Provider<Foo>` forwards to `@Named("x") Foo`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImplicitProviderBinding {
    provider_key: Key,
    target_key: Key,
}

impl ImplicitProviderBinding {
    pub fn new(provider_key: Key) -> Result<Self, MalformedBindingError> {
        let provider_type = provider_key.ty();
        if !provider_type.is_parameterized() {
            return Err(MalformedBindingError {
                key: provider_key,
                reason: MalformedReason::NotParameterized,
            });
        }

        let target_type = match provider_type.type_arguments() {
            [target] => target.clone(),
            arguments => {
                let found = arguments.len();
                return Err(MalformedBindingError {
                    key: provider_key,
                    reason: MalformedReason::WrongArity { found },
                });
            }
        };

        let target_key = Key::with_same_qualifier(target_type, &provider_key);
        tracing::debug!("Implicit provider binding {} -> {}", provider_key, target_key);

        Ok(Self {
            provider_key,
            target_key,
        })
    }

    pub fn provider_key(&self) -> &Key {
        &self.provider_key
    }

    pub fn target_key(&self) -> &Key {
        &self.target_key
    }
}

impl Binding for ImplicitProviderBinding {
    fn dependencies(&self) -> BTreeSet<Dependency> {
        BTreeSet::from([Dependency::lazy_required(
            self.provider_key.clone(),
            self.target_key.clone(),
        )])
    }

    #[instrument(skip_all, fields(key = %self.provider_key))]
    fn write_creator_method(
        &self,
        out: &mut dyn SourceWriter,
        signature: &str,
        ctx: &GenerationContext<'_>,
    ) -> Result<(), CodegenError> {
        let provider_type_name = ctx.types.source_name(self.provider_key.ty())?;
        let target_type_name = ctx.types.source_name(self.target_key.ty())?;
        let getter = ctx.names.getter_method_name(&self.target_key);

        tracing::debug!("Writing implicit provider for {} via {}()", self.target_key, getter);

        let body = format!(
            "return new {provider}() {{\n  public {target} get() {{\n    return {getter}();\n  }}\n}};",
            provider = provider_type_name,
            target = target_type_name,
            getter = getter,
        );
        out.write_method(signature, &body)
    }
}
