#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for the LÖVE API description.
//!
//! Two layers:
//! - **Deserialization layer**: 1:1 mapping to the love-api JSON layout
//! - **Model layer**: owned tree with every type string parsed into a [`TypeExpr`]

mod colors;
mod model;
mod type_expr;

#[cfg(test)]
mod colors_tests;
#[cfg(test)]
mod lib_tests;

pub use colors::{Colors, Tone};
pub use model::{Api, Argument, Constant, EnumDef, Function, Module, Return, TypeDef, Variant};
pub use type_expr::{TableField, TypeExpr};

// ============================================================================
// Deserialization Layer
// ============================================================================

/// Raw root object: the top-level module plus its release version.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct RawApi {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(flatten)]
    pub module: RawModule,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct RawModule {
    #[serde(default = "default_root_name")]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub types: Vec<RawType>,
    #[serde(default)]
    pub enums: Vec<RawEnum>,
    #[serde(default)]
    pub functions: Vec<RawFunction>,
    #[serde(default)]
    pub callbacks: Vec<RawFunction>,
    #[serde(default)]
    pub modules: Vec<RawModule>,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct RawType {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub supertypes: Vec<String>,
    #[serde(default)]
    pub functions: Vec<RawFunction>,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct RawEnum {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub constants: Vec<RawConstant>,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct RawConstant {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct RawFunction {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub variants: Vec<RawVariant>,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct RawVariant {
    #[serde(default)]
    pub arguments: Vec<RawArgument>,
    #[serde(default)]
    pub returns: Vec<RawReturn>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct RawArgument {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub default: Option<String>,
    #[serde(default)]
    pub table: Vec<RawField>,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct RawReturn {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub table: Vec<RawField>,
}

/// Field of an inline table shape. Field descriptions are not rendered.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct RawField {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
}

fn default_root_name() -> String {
    "love".to_string()
}

/// Parse love-api JSON content into the model layer.
pub fn parse_api(json: &str) -> Result<Api, serde_json::Error> {
    let raw: RawApi = serde_json::from_str(json)?;
    Ok(Api::from_raw(raw))
}

/// Parse love-api JSON from a reader into the model layer.
pub fn read_api<R: std::io::Read>(reader: R) -> Result<Api, serde_json::Error> {
    let raw: RawApi = serde_json::from_reader(reader)?;
    Ok(Api::from_raw(raw))
}
