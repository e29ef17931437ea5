//! Owned API tree built from the deserialization layer.

use crate::type_expr::{TableField, TypeExpr};
use crate::{
    RawApi, RawArgument, RawConstant, RawEnum, RawField, RawFunction, RawModule, RawReturn,
    RawType, RawVariant,
};

/// A complete API description.
#[derive(Clone, Debug)]
pub struct Api {
    pub version: Option<String>,
    pub root: Module,
}

/// A namespace of types, enums, functions and nested modules.
///
/// `name` is the short name as declared (`graphics`); the dot-qualified path is
/// derived while walking the tree.
#[derive(Clone, Debug, Default)]
pub struct Module {
    pub name: String,
    pub description: String,
    pub types: Vec<TypeDef>,
    pub enums: Vec<EnumDef>,
    pub functions: Vec<Function>,
    pub callbacks: Vec<Function>,
    pub modules: Vec<Module>,
}

#[derive(Clone, Debug)]
pub struct TypeDef {
    pub name: String,
    pub description: String,
    pub supertypes: Vec<String>,
    /// Instance methods.
    pub functions: Vec<Function>,
}

#[derive(Clone, Debug)]
pub struct EnumDef {
    pub name: String,
    pub description: String,
    pub constants: Vec<Constant>,
}

#[derive(Clone, Debug)]
pub struct Constant {
    pub name: String,
    pub description: String,
}

#[derive(Clone, Debug)]
pub struct Function {
    pub name: String,
    pub description: String,
    pub variants: Vec<Variant>,
}

/// One call signature of a function.
#[derive(Clone, Debug, Default)]
pub struct Variant {
    pub arguments: Vec<Argument>,
    pub returns: Vec<Return>,
    pub description: Option<String>,
}

#[derive(Clone, Debug)]
pub struct Argument {
    /// May hold several comma-joined names, or `...` for varargs.
    pub name: String,
    pub ty: TypeExpr,
    pub description: String,
    /// Presence makes the parameter optional.
    pub default: Option<String>,
}

#[derive(Clone, Debug)]
pub struct Return {
    pub name: String,
    pub ty: TypeExpr,
    pub description: String,
}

impl Api {
    pub fn from_raw(raw: RawApi) -> Self {
        Self {
            version: raw.version,
            root: Module::from_raw(raw.module),
        }
    }
}

impl Module {
    pub fn from_raw(raw: RawModule) -> Self {
        Self {
            name: raw.name,
            description: raw.description,
            types: raw.types.into_iter().map(TypeDef::from_raw).collect(),
            enums: raw.enums.into_iter().map(EnumDef::from_raw).collect(),
            functions: raw.functions.into_iter().map(Function::from_raw).collect(),
            callbacks: raw.callbacks.into_iter().map(Function::from_raw).collect(),
            modules: raw.modules.into_iter().map(Module::from_raw).collect(),
        }
    }
}

impl TypeDef {
    pub fn from_raw(raw: RawType) -> Self {
        Self {
            name: raw.name,
            description: raw.description,
            supertypes: raw.supertypes,
            functions: raw.functions.into_iter().map(Function::from_raw).collect(),
        }
    }
}

impl EnumDef {
    pub fn from_raw(raw: RawEnum) -> Self {
        Self {
            name: raw.name,
            description: raw.description,
            constants: raw.constants.into_iter().map(Constant::from_raw).collect(),
        }
    }
}

impl Constant {
    pub fn from_raw(raw: RawConstant) -> Self {
        Self {
            name: raw.name,
            description: raw.description,
        }
    }
}

impl Function {
    pub fn from_raw(raw: RawFunction) -> Self {
        Self {
            name: raw.name,
            description: raw.description,
            variants: raw.variants.into_iter().map(Variant::from_raw).collect(),
        }
    }
}

impl Variant {
    pub fn from_raw(raw: RawVariant) -> Self {
        Self {
            arguments: raw.arguments.into_iter().map(Argument::from_raw).collect(),
            returns: raw.returns.into_iter().map(Return::from_raw).collect(),
            description: raw.description,
        }
    }
}

impl Argument {
    pub fn from_raw(raw: RawArgument) -> Self {
        Self {
            name: raw.name,
            ty: TypeExpr::with_table(&raw.type_name, fields_from_raw(raw.table)),
            description: raw.description,
            default: raw.default,
        }
    }

    pub fn is_vararg(&self) -> bool {
        self.name == "..."
    }

    pub fn is_optional(&self) -> bool {
        self.default.is_some()
    }
}

impl Return {
    pub fn from_raw(raw: RawReturn) -> Self {
        Self {
            name: raw.name,
            ty: TypeExpr::with_table(&raw.type_name, fields_from_raw(raw.table)),
            description: raw.description,
        }
    }
}

fn fields_from_raw(fields: Vec<RawField>) -> Vec<TableField> {
    fields
        .into_iter()
        .map(|f| TableField {
            name: f.name,
            ty: TypeExpr::parse(&f.type_name),
        })
        .collect()
}
