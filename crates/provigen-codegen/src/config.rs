//! Generator configuration

use provigen_core::TypeDescriptor;
use serde::{Deserialize, Serialize};

use crate::CodegenError;

/// Configuration for creator-method generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Raw type names treated as `Provider<T>`
    pub provider_types: Vec<String>,
    /// Spaces per indentation level in emitted methods
    pub indent_size: usize,
    /// Prefix for allocated accessor method names
    pub getter_prefix: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            provider_types: vec![
                "com.google.inject.Provider".to_string(),
                "javax.inject.Provider".to_string(),
            ],
            indent_size: 2,
            getter_prefix: "get_".to_string(),
        }
    }
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML document; missing fields take their defaults
    pub fn from_toml_str(source: &str) -> Result<Self, CodegenError> {
        let config: GeneratorConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), CodegenError> {
        if self.provider_types.is_empty() {
            return Err(CodegenError::Config(
                "provider_types must name at least one type".to_string(),
            ));
        }
        let prefix_ok = self
            .getter_prefix
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
            && self
                .getter_prefix
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_');
        if !prefix_ok {
            return Err(CodegenError::Config(format!(
                "getter_prefix '{}' is not a valid identifier prefix",
                self.getter_prefix
            )));
        }
        Ok(())
    }

    /// Whether `ty` is one of the configured provider types
    ///
    /// Matches on the raw name only, so a raw or mis-parameterized provider is
    /// still recognised and rejected later with a proper diagnostic.
    pub fn is_provider_type(&self, ty: &TypeDescriptor) -> bool {
        ty.raw_name()
            .is_some_and(|raw| self.provider_types.iter().any(|p| p == raw))
    }
}
