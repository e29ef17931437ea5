//! Class and enum blocks.

use lovecats_core::{EnumDef, TypeDef};

use super::Emitter;
use super::emitter::one_line;
use super::signature::Owner;
use crate::Result;

impl Emitter<'_> {
    /// Class declaration, backing local, then one block per method.
    pub(super) fn class_block(&self, ty: &TypeDef) -> Result<String> {
        let mut out = String::new();
        self.push_header(&mut out, &ty.description, &ty.name);

        let class_name = self.namer.namespace_for_emission(&ty.name);
        if ty.supertypes.is_empty() {
            out.push_str(&format!("---@class {}\n", class_name));
        } else {
            let supertypes = ty
                .supertypes
                .iter()
                .map(|s| self.namer.namespace_for_emission(s))
                .collect::<Vec<_>>()
                .join(", ");
            out.push_str(&format!("---@class {}: {}\n", class_name, supertypes));
        }
        out.push_str(&format!("local {} = {{}}\n", ty.name));

        for function in &ty.functions {
            if let Some(block) = self.function_block(function, Owner::Type(&ty.name))? {
                out.push('\n');
                out.push_str(&block);
            }
        }

        Ok(out)
    }

    /// Alias declaration with one literal line per constant.
    pub(super) fn enum_block(&self, e: &EnumDef) -> String {
        let mut out = String::new();
        self.push_header(&mut out, &e.description, &e.name);
        out.push_str(&format!(
            "---@alias {}\n",
            self.namer.namespace_for_emission(&e.name)
        ));

        for constant in &e.constants {
            let mut line = format!("---| '\"{}\"'", constant.name);
            let description = one_line(&constant.description);
            if !description.is_empty() {
                line.push_str(" # ");
                line.push_str(&description);
            }
            out.push_str(&line);
            out.push('\n');
        }

        out
    }
}
