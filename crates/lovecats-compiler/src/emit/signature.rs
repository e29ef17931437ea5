//! Function blocks: parameters, returns and overloads.

use lovecats_core::{Argument, Function, Return, Variant};

use super::Emitter;
use super::emitter::{one_line, push_description};
use crate::{Error, Result};

/// Rendered after `fun(...)` when an overload returns nothing.
const NO_RETURN: &str = "nil";

/// What a function block hangs off.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Owner<'o> {
    /// Module-level function; holds the dot-qualified module path.
    Module(&'o str),
    /// Instance method; holds the owning type name.
    Type(&'o str),
}

impl Owner<'_> {
    /// `love.graphics.draw` or `Canvas:getFormat`.
    pub fn member_path(&self, member: &str) -> String {
        match self {
            Owner::Module(path) => format!("{}.{}", path, member),
            Owner::Type(name) => format!("{}:{}", name, member),
        }
    }
}

/// Split comma-joined parameter names into sibling arguments.
///
/// Each sibling keeps the original type, description and default. The
/// vararg marker `...` is never split.
pub fn expand_arguments(arguments: &[Argument]) -> Vec<Argument> {
    arguments
        .iter()
        .flat_map(|arg| {
            if arg.is_vararg() || !arg.name.contains(',') {
                return vec![arg.clone()];
            }
            arg.name
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(|name| Argument {
                    name: name.to_string(),
                    ..arg.clone()
                })
                .collect()
        })
        .collect()
}

/// Expand every variant, then order by argument count and return count.
///
/// Both descending; the sort is stable so remaining ties keep declared order.
/// The first variant is the primary signature.
pub fn order_variants(variants: &[Variant]) -> Vec<Variant> {
    let mut ordered: Vec<Variant> = variants
        .iter()
        .map(|v| Variant {
            arguments: expand_arguments(&v.arguments),
            returns: v.returns.clone(),
            description: v.description.clone(),
        })
        .collect();
    ordered.sort_by(|a, b| {
        b.arguments
            .len()
            .cmp(&a.arguments.len())
            .then_with(|| b.returns.len().cmp(&a.returns.len()))
    });
    ordered
}

impl Emitter<'_> {
    /// Annotation block for one function.
    ///
    /// Returns `None` when the function has no variants and malformed input
    /// is configured to be skipped.
    pub(super) fn function_block(
        &self,
        function: &Function,
        owner: Owner<'_>,
    ) -> Result<Option<String>> {
        let path = owner.member_path(&function.name);
        let mut variants = order_variants(&function.variants).into_iter();

        let Some(primary) = variants.next() else {
            if self.config.skip_malformed {
                tracing::warn!(function = %path, "skipping function without variants");
                return Ok(None);
            }
            return Err(Error::MissingVariants { function: path });
        };

        let mut out = String::new();
        self.push_header(&mut out, &function.description, &path);

        for arg in &primary.arguments {
            self.push_param(&mut out, arg);
        }
        for ret in &primary.returns {
            self.push_return(&mut out, ret);
        }
        for variant in variants {
            self.push_overload(&mut out, &variant, &function.description, owner);
        }

        let names = primary
            .arguments
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!("function {}({}) end\n", path, names));

        Ok(Some(out))
    }

    fn push_param(&self, out: &mut String, arg: &Argument) {
        let ty = self.namer.render_param_type(&arg.ty);

        let mut description = one_line(&arg.description);
        if let Some(default) = &arg.default {
            if !description.is_empty() {
                description.push(' ');
            }
            description.push_str(&format!("(Default: `{}`)", default));
        }

        let mut line = if arg.is_vararg() {
            format!("---@vararg {}", ty)
        } else {
            format!("---@param {} {}{}", arg.name, ty, optional_marker(arg))
        };
        if !description.is_empty() {
            line.push_str(" # ");
            line.push_str(&description);
        }
        out.push_str(&line);
        out.push('\n');
    }

    fn push_return(&self, out: &mut String, ret: &Return) {
        let mut line = format!("---@return {}", self.namer.render_type(&ret.ty));
        if !ret.name.is_empty() {
            line.push(' ');
            line.push_str(&ret.name);
        }
        let description = one_line(&ret.description);
        if !description.is_empty() {
            line.push_str(" # ");
            line.push_str(&description);
        }
        out.push_str(&line);
        out.push('\n');
    }

    /// `---@overload fun(...):returns`, varargs omitted.
    fn push_overload(
        &self,
        out: &mut String,
        variant: &Variant,
        shared_description: &str,
        owner: Owner<'_>,
    ) {
        if let Some(description) = variant.description.as_deref() {
            if description != shared_description {
                push_description(out, description);
            }
        }

        let mut params = Vec::new();
        if let Owner::Type(name) = owner {
            params.push(format!("self: {}", self.namer.namespace_for_emission(name)));
        }
        for arg in variant.arguments.iter().filter(|a| !a.is_vararg()) {
            params.push(format!(
                "{}: {}{}",
                arg.name,
                self.namer.render_param_type(&arg.ty),
                optional_marker(arg)
            ));
        }

        let returns = if variant.returns.is_empty() {
            NO_RETURN.to_string()
        } else {
            variant
                .returns
                .iter()
                .map(|r| self.namer.render_type(&r.ty))
                .collect::<Vec<_>>()
                .join(", ")
        };

        out.push_str(&format!(
            "---@overload fun({}):{}\n",
            params.join(", "),
            returns
        ));
    }
}

fn optional_marker(arg: &Argument) -> &'static str {
    if arg.is_optional() { "?" } else { "" }
}
