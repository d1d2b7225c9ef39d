//! Error types for binding construction and creator-method generation

use provigen_core::{MalformedBindingError, UnrepresentableTypeError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodegenError {
    #[error(transparent)]
    Malformed(#[from] MalformedBindingError),

    #[error(transparent)]
    Unrepresentable(#[from] UnrepresentableTypeError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Format error: {0}")]
    Fmt(#[from] std::fmt::Error),
}

impl From<toml::de::Error> for CodegenError {
    fn from(err: toml::de::Error) -> Self {
        CodegenError::Config(err.to_string())
    }
}
