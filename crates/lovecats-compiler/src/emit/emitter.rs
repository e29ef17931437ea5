//! Core emitter struct and module assembly.

use lovecats_core::{Api, Module};

use super::Config;
use super::signature::Owner;
use crate::Result;
use crate::naming::TypeNamer;
use crate::registry::TypeRegistry;

/// Annotation text for one module.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Unit {
    /// Dot-qualified module path (`love.graphics`).
    pub name: String,
    pub contents: String,
}

impl Unit {
    /// File name of this unit under the output root.
    pub fn file_name(&self) -> String {
        format!("{}.lua", self.name)
    }
}

/// LuaCATS emitter over a frozen type registry.
pub struct Emitter<'a> {
    pub(super) namer: TypeNamer<'a>,
    pub(super) config: &'a Config,
}

impl<'a> Emitter<'a> {
    pub fn new(registry: &'a TypeRegistry, config: &'a Config) -> Self {
        Self {
            namer: TypeNamer::new(registry, &config.namespace),
            config,
        }
    }

    /// Emit one unit per module, parent before children.
    pub fn emit(&self, api: &Api) -> Result<Vec<Unit>> {
        let mut units = Vec::new();
        self.emit_module(&api.root, None, &mut units)?;
        Ok(units)
    }

    fn emit_module(
        &self,
        module: &Module,
        parent: Option<&str>,
        units: &mut Vec<Unit>,
    ) -> Result<()> {
        let path = match parent {
            Some(parent) => format!("{}.{}", parent, module.name),
            None => module.name.clone(),
        };

        // Reserve the slot so the parent lands ahead of its children.
        let slot = units.len();
        units.push(Unit {
            name: path.clone(),
            contents: String::new(),
        });

        let mut blocks = Vec::new();
        for ty in &module.types {
            blocks.push(self.class_block(ty)?);
        }
        for e in &module.enums {
            blocks.push(self.enum_block(e));
        }

        for child in &module.modules {
            self.emit_module(child, Some(&path), units)?;
        }

        for function in module.functions.iter().chain(&module.callbacks) {
            if let Some(block) = self.function_block(function, Owner::Module(&path))? {
                blocks.push(block);
            }
        }

        let mut out = String::from("---@meta\n\n");
        push_description(&mut out, &module.description);
        out.push_str(&format!("---@class {}\n", path));
        out.push_str(&format!("{} = {{}}\n", path));
        for block in &blocks {
            out.push('\n');
            out.push_str(block);
        }

        tracing::debug!(module = %path, blocks = blocks.len(), "emitted module");
        units[slot].contents = out;
        Ok(())
    }

    /// Description, separator, documentation link, separator.
    ///
    /// Both separators are written even when the description is empty.
    pub(super) fn push_header(&self, out: &mut String, description: &str, link_target: &str) {
        push_description(out, description);
        out.push_str("---\n");
        out.push_str(&format!(
            "---[Open in Browser]({}{})\n",
            self.config.doc_base_url, link_target
        ));
        out.push_str("---\n");
    }
}

/// One `---` comment line per description line.
pub(super) fn push_description(out: &mut String, text: &str) {
    for line in text.lines() {
        out.push_str("---");
        out.push_str(line.trim_end());
        out.push('\n');
    }
}

/// Collapse embedded line breaks so the text fits on a single annotation line.
pub(super) fn one_line(text: &str) -> String {
    text.split(['\r', '\n'])
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
