//! Test utilities shared by the unit test modules.

use lovecats_core::{Api, Argument, TypeExpr, parse_api};

use crate::emit::{Config, Emitter, Unit};
use crate::registry::TypeRegistry;

/// Parse an API description that is known to be valid.
pub fn api(json: &str) -> Api {
    parse_api(json).expect("test api json must parse")
}

/// Collect and emit every module with the default config.
pub fn emit_units(json: &str) -> Vec<Unit> {
    let api = api(json);
    let registry = TypeRegistry::collect(&api);
    let config = Config::default();
    Emitter::new(&registry, &config)
        .emit(&api)
        .expect("emission must succeed")
}

/// Emitted text of the module with dot-qualified `name`.
pub fn emit_unit(json: &str, name: &str) -> String {
    emit_units(json)
        .into_iter()
        .find(|unit| unit.name == name)
        .map(|unit| unit.contents)
        .unwrap_or_else(|| panic!("no unit named `{name}`"))
}

/// Plain argument with a parsed type and no description.
pub fn arg(name: &str, ty: &str) -> Argument {
    Argument {
        name: name.to_string(),
        ty: TypeExpr::parse(ty),
        description: String::new(),
        default: None,
    }
}
