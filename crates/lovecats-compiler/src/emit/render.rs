//! Rendering of parsed type expressions.

use lovecats_core::{TableField, TypeExpr};

use crate::naming::TypeNamer;

/// Rendered in place of an empty declaration.
const UNTYPED: &str = "any";

impl TypeNamer<'_> {
    /// Full rendering, as used for return values and table fields.
    ///
    /// Unions keep every member in order, each folded and prefixed on its own.
    pub fn render_type(&self, ty: &TypeExpr) -> String {
        match ty {
            TypeExpr::InlineTable { fields, .. } => self.render_table(fields),
            TypeExpr::Descriptive(text) => text.clone(),
            TypeExpr::Scalar(name) => self.render_name(name),
            TypeExpr::Union(members) => members
                .iter()
                .map(|m| self.render_name(m))
                .collect::<Vec<_>>()
                .join("|"),
        }
    }

    /// Rendering for a documented parameter.
    ///
    /// Only the first alternative of a union is shown.
    pub fn render_param_type(&self, ty: &TypeExpr) -> String {
        match ty {
            TypeExpr::Union(members) => match members.first() {
                Some(first) if !first.starts_with('{') => self.render_name(first),
                _ => self.render_type(ty),
            },
            _ => self.render_type(ty),
        }
    }

    /// `{field:Type, field:Type}`; shapes are one level deep.
    pub fn render_table(&self, fields: &[TableField]) -> String {
        let body = fields
            .iter()
            .map(|f| {
                let ty = match &f.ty {
                    TypeExpr::InlineTable { .. } => "table".to_string(),
                    other => self.render_type(other),
                };
                format!("{}:{}", f.name, ty)
            })
            .collect::<Vec<_>>()
            .join(", ");
        format!("{{{}}}", body)
    }

    fn render_name(&self, name: &str) -> String {
        if name.is_empty() {
            return UNTYPED.to_string();
        }
        if name.starts_with('{') {
            return name.to_string();
        }
        self.namespace_for_emission(self.normalize(name))
    }
}
