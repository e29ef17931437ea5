//! Type collection pass.
//!
//! Walks the whole API tree once and records every type name it sees. The
//! resulting [`TypeRegistry`] is frozen before emission starts: a name's
//! classification must not depend on where in the tree it is printed.

use std::collections::BTreeSet;

use lovecats_core::{Api, Function, Module, TypeDef, TypeExpr};

/// Classification sets built by the collection pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TypeRegistry {
    /// Bare names seen in scalar or union position, plus declared names.
    known: BTreeSet<String>,
    /// Names declared by a type or enum node.
    defined: BTreeSet<String>,
    /// Whole phrases with internal whitespace. Disjoint from `known`.
    descriptive: BTreeSet<String>,
}

impl TypeRegistry {
    /// Run the collection pass over `api`.
    pub fn collect(api: &Api) -> Self {
        let registry = collect_module(Self::default(), &api.root);
        tracing::debug!(
            known = registry.known.len(),
            defined = registry.defined.len(),
            descriptive = registry.descriptive.len(),
            "collected type registry"
        );
        registry
    }

    pub fn is_known(&self, name: &str) -> bool {
        self.known.contains(name)
    }

    pub fn is_defined(&self, name: &str) -> bool {
        self.defined.contains(name)
    }

    pub fn is_descriptive(&self, text: &str) -> bool {
        self.descriptive.contains(text)
    }

    /// Known names in sorted order.
    pub fn known(&self) -> impl Iterator<Item = &str> {
        self.known.iter().map(String::as_str)
    }

    /// Defined names in sorted order.
    pub fn defined(&self) -> impl Iterator<Item = &str> {
        self.defined.iter().map(String::as_str)
    }

    /// Descriptive phrases in sorted order.
    pub fn descriptive(&self) -> impl Iterator<Item = &str> {
        self.descriptive.iter().map(String::as_str)
    }

    fn with_definition(mut self, name: &str) -> Self {
        self.known.insert(name.to_string());
        self.defined.insert(name.to_string());
        self
    }

    fn with_type(mut self, ty: &TypeExpr) -> Self {
        match ty {
            TypeExpr::Scalar(name) => {
                if !name.is_empty() {
                    self.known.insert(name.clone());
                }
                self
            }
            TypeExpr::Union(members) => {
                self.known.extend(members.iter().cloned());
                self
            }
            TypeExpr::Descriptive(text) => {
                self.descriptive.insert(text.clone());
                self
            }
            TypeExpr::InlineTable { declared, fields } => fields
                .iter()
                .fold(self.with_type(declared), |acc, field| acc.with_type(&field.ty)),
        }
    }
}

fn collect_module(acc: TypeRegistry, module: &Module) -> TypeRegistry {
    let acc = module.types.iter().fold(acc, collect_type);
    let acc = module
        .enums
        .iter()
        .fold(acc, |acc, e| acc.with_definition(&e.name));
    let acc = module
        .functions
        .iter()
        .chain(&module.callbacks)
        .fold(acc, collect_function);
    module.modules.iter().fold(acc, collect_module)
}

fn collect_type(acc: TypeRegistry, ty: &TypeDef) -> TypeRegistry {
    let acc = acc.with_definition(&ty.name);
    ty.functions.iter().fold(acc, collect_function)
}

fn collect_function(acc: TypeRegistry, function: &Function) -> TypeRegistry {
    function.variants.iter().fold(acc, |acc, variant| {
        let acc = variant
            .arguments
            .iter()
            .fold(acc, |acc, arg| acc.with_type(&arg.ty));
        variant
            .returns
            .iter()
            .fold(acc, |acc, ret| acc.with_type(&ret.ty))
    })
}
