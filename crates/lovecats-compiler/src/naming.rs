//! Type-name normalization and namespace prefixing.

use crate::registry::TypeRegistry;

/// Names native to the annotation language. Never prefixed.
pub const BUILTIN_TYPES: [&str; 9] = [
    "string", "number", "boolean", "table", "function", "userdata", "thread", "nil", "any",
];

pub fn is_builtin(name: &str) -> bool {
    BUILTIN_TYPES.contains(&name)
}

/// Applies the naming rules against a frozen registry.
#[derive(Clone, Copy, Debug)]
pub struct TypeNamer<'a> {
    registry: &'a TypeRegistry,
    namespace: &'a str,
}

impl<'a> TypeNamer<'a> {
    pub fn new(registry: &'a TypeRegistry, namespace: &'a str) -> Self {
        Self {
            registry,
            namespace,
        }
    }

    /// Fold a plural into its singular when the singular is already recognized.
    ///
    /// `numbers` becomes `number`, `Images` becomes `Image` if `Image` was seen.
    /// Anything else is returned unchanged, including `Images` when `Image`
    /// never occurs.
    pub fn normalize<'n>(&self, name: &'n str) -> &'n str {
        match name.strip_suffix('s') {
            Some(singular) if is_builtin(singular) || self.registry.is_known(singular) => {
                singular
            }
            _ => name,
        }
    }

    /// Prefix declared type and enum names. Used by the diagnostic listing.
    pub fn namespace_if_defined(&self, name: &str) -> String {
        if !name.contains('.') && self.registry.is_defined(name) {
            self.qualify(name)
        } else {
            name.to_string()
        }
    }

    /// Prefix any known name. Used by the diagnostic listing.
    pub fn namespace_if_known(&self, name: &str) -> String {
        if !name.contains('.') && self.registry.is_known(name) {
            self.qualify(name)
        } else {
            name.to_string()
        }
    }

    /// Prefix rule for annotation output.
    pub fn namespace_for_emission(&self, name: &str) -> String {
        let passthrough = name.contains('.')
            || name.starts_with('{')
            || is_builtin(name)
            || self.registry.is_descriptive(name);

        if !passthrough && self.registry.is_known(name) {
            self.qualify(name)
        } else {
            name.to_string()
        }
    }

    /// `<namespace>.<name>`, unconditionally.
    pub fn qualify(&self, name: &str) -> String {
        format!("{}.{}", self.namespace, name)
    }
}
