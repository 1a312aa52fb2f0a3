//! Name-keyed descriptor registry.
//!
//! Descriptors for named types are registered once and cached by type name;
//! [`TypeDescriptor::Ref`] resolves through the registry at generation time.
//! This is the explicit stand-in for runtime reflection: the introspection
//! cost is paid at registration, not per generation call.

use crate::descriptor::TypeDescriptor;
use std::collections::HashMap;

/// Registry of named type descriptors.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    types: HashMap<String, TypeDescriptor>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style registration. Re-registering a name replaces the
    /// previous descriptor.
    pub fn with(mut self, name: impl Into<String>, ty: impl Into<TypeDescriptor>) -> Self {
        self.register(name, ty);
        self
    }

    pub fn register(&mut self, name: impl Into<String>, ty: impl Into<TypeDescriptor>) {
        self.types.insert(name.into(), ty.into());
    }

    pub fn get(&self, name: &str) -> Option<&TypeDescriptor> {
        self.types.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::Composite;

    #[test]
    fn test_register_and_resolve() {
        let registry = Registry::new()
            .with("Product", Composite::new("Product").field("name", TypeDescriptor::word()))
            .with("Tags", TypeDescriptor::list(TypeDescriptor::word()));

        assert_eq!(registry.len(), 2);
        assert!(registry.contains("Product"));
        assert!(registry.get("Missing").is_none());
        assert!(matches!(registry.get("Tags"), Some(TypeDescriptor::List(_))));
    }

    #[test]
    fn test_reregistration_replaces() {
        let mut registry = Registry::new();
        registry.register("T", TypeDescriptor::int(0, 1));
        registry.register("T", TypeDescriptor::bool());

        assert_eq!(registry.len(), 1);
        assert!(matches!(
            registry.get("T"),
            Some(TypeDescriptor::Primitive(crate::descriptor::Primitive::Bool))
        ));
    }
}
