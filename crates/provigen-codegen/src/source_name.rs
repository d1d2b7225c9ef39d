//! Source-level names for type descriptors
//!
//! Generated code can only mention types that have a canonical name visible
//! from the injector implementation. Wildcards are allowed as type arguments
//! but not on their own; type variables and local or anonymous classes are
//! never nameable.

use provigen_core::{TypeDescriptor, UnrepresentableReason, UnrepresentableTypeError, WildcardBound};

/// Renders types as source text
pub trait TypeNameResolver: Send + Sync {
    fn source_name(&self, ty: &TypeDescriptor) -> Result<String, UnrepresentableTypeError>;
}

/// Default [`TypeNameResolver`] producing canonical Java-style names
#[derive(Debug, Clone, Copy, Default)]
pub struct SourceNameResolver;

impl SourceNameResolver {
    pub fn new() -> Self {
        Self
    }

    fn render(&self, ty: &TypeDescriptor, in_argument: bool) -> Result<String, UnrepresentableReason> {
        match ty {
            TypeDescriptor::Class { name } => Ok(canonical(name)),
            TypeDescriptor::Primitive(name) => Ok(name.clone()),
            TypeDescriptor::Parameterized { raw, arguments } => {
                if arguments.is_empty() {
                    return Ok(canonical(raw));
                }
                let rendered = arguments
                    .iter()
                    .map(|arg| self.render(arg, true))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(format!("{}<{}>", canonical(raw), rendered.join(", ")))
            }
            TypeDescriptor::Array(component) => Ok(format!("{}[]", self.render(component, false)?)),
            TypeDescriptor::Wildcard(bound) => {
                if !in_argument {
                    return Err(UnrepresentableReason::Wildcard);
                }
                match bound {
                    WildcardBound::Unbounded => Ok("?".to_string()),
                    WildcardBound::Extends(upper) => {
                        Ok(format!("? extends {}", self.render(upper, false)?))
                    }
                    WildcardBound::Super(lower) => Ok(format!("? super {}", self.render(lower, false)?)),
                }
            }
            TypeDescriptor::TypeVariable(_) => Err(UnrepresentableReason::TypeVariable),
            TypeDescriptor::Local { anonymous: true, .. } => Err(UnrepresentableReason::AnonymousClass),
            TypeDescriptor::Local { anonymous: false, .. } => Err(UnrepresentableReason::LocalClass),
        }
    }
}

impl TypeNameResolver for SourceNameResolver {
    fn source_name(&self, ty: &TypeDescriptor) -> Result<String, UnrepresentableTypeError> {
        self.render(ty, false).map_err(|reason| UnrepresentableTypeError {
            ty: ty.clone(),
            reason,
        })
    }
}

/// Binary member-class names use `$`; source uses `.`
fn canonical(binary_name: &str) -> String {
    binary_name.replace('$', ".")
}
