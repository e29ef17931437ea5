//! Declared type strings, parsed once at ingestion.
//!
//! The API description spells types as free text: `number`, `Image or Canvas`,
//! `string and number`, `light userdata`. [`TypeExpr::parse`] folds those into a
//! closed set of shapes so rendering never has to look at raw strings again.

/// Connectives that join alternatives of a union.
const CONNECTIVES: [&str; 2] = [" or ", " and "];

/// A parsed type declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeExpr {
    /// A single bare name (`number`, `Image`, `Images`, `{x:number}`).
    Scalar(String),
    /// Alternatives in declared order, connectives removed.
    Union(Vec<String>),
    /// A free-form phrase with internal whitespace, kept verbatim.
    Descriptive(String),
    /// A one-level table shape.
    ///
    /// `declared` is the type string written next to the shape (usually
    /// `table`). Rendering uses the fields; collection records both.
    InlineTable {
        declared: Box<TypeExpr>,
        fields: Vec<TableField>,
    },
}

/// A named field of an inline table shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableField {
    pub name: String,
    /// Never a [`TypeExpr::InlineTable`]: shapes are one level deep.
    pub ty: TypeExpr,
}

impl TypeExpr {
    /// Classify a declared type string.
    ///
    /// Surrounding whitespace is trimmed first, so `" number "` is a scalar and
    /// not a descriptive phrase.
    pub fn parse(raw: &str) -> Self {
        let text = raw.trim();

        if is_union(text) {
            return TypeExpr::Union(union_members(text));
        }

        if text.contains(char::is_whitespace) {
            return TypeExpr::Descriptive(text.to_string());
        }

        TypeExpr::Scalar(text.to_string())
    }

    /// Build the expression for a declaration that may carry a table shape.
    pub fn with_table(raw: &str, fields: Vec<TableField>) -> Self {
        let declared = Self::parse(raw);
        if fields.is_empty() {
            declared
        } else {
            TypeExpr::InlineTable {
                declared: Box::new(declared),
                fields,
            }
        }
    }
}

fn is_union(text: &str) -> bool {
    text.contains('|') || CONNECTIVES.iter().any(|c| text.contains(c))
}

/// Split a union declaration into its member names.
///
/// `and` is treated as `or`; both connective words are dropped, as are pipe
/// separators.
fn union_members(text: &str) -> Vec<String> {
    text.replace(" and ", " or ")
        .split(|c: char| c.is_whitespace() || c == '|')
        .filter(|token| !token.is_empty() && *token != "or")
        .map(str::to_string)
        .collect()
}
