//! Key, qualifier and dependency model for provigen

pub mod dependency;
pub mod error;
pub mod key;
pub mod types;

pub use dependency::Dependency;
pub use error::{
    CoreError, MalformedBindingError, MalformedReason, UnrepresentableReason,
    UnrepresentableTypeError,
};
pub use key::{Annotation, Key, Qualifier};
pub use types::{TypeDescriptor, WildcardBound};
