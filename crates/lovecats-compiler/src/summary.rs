//! Diagnostic listing of the type classification.

use lovecats_core::{Api, Colors, Tone};

use crate::emit::Config;
use crate::naming::TypeNamer;
use crate::registry::TypeRegistry;

/// Snapshot of the classification sets plus derived listings.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct DebugSummary {
    pub version: Option<String>,
    pub known_types: Vec<String>,
    pub defined_types: Vec<String>,
    pub descriptive_types: Vec<String>,
    /// Capitalized declared names, prefixed.
    pub defined_capitalized: Vec<String>,
    /// Capitalized names referenced but never declared, prefixed.
    pub undefined_capitalized: Vec<String>,
}

/// Run the collection pass and summarize its result.
pub fn debug_summary(api: &Api, config: &Config) -> DebugSummary {
    let registry = TypeRegistry::collect(api);
    let namer = TypeNamer::new(&registry, &config.namespace);

    let defined_capitalized = registry
        .defined()
        .filter(|name| is_capitalized(name))
        .map(|name| namer.namespace_if_defined(name))
        .collect();
    let undefined_capitalized = registry
        .known()
        .filter(|name| is_capitalized(name) && !registry.is_defined(name))
        .map(|name| namer.namespace_if_known(name))
        .collect();

    DebugSummary {
        version: api.version.clone(),
        known_types: registry.known().map(str::to_string).collect(),
        defined_types: registry.defined().map(str::to_string).collect(),
        descriptive_types: registry.descriptive().map(str::to_string).collect(),
        defined_capitalized,
        undefined_capitalized,
    }
}

fn is_capitalized(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_ascii_uppercase())
}

impl DebugSummary {
    /// Human-readable listing, one section per set.
    pub fn render(&self, colors: Colors) -> String {
        let mut out = String::new();

        if let Some(version) = &self.version {
            out.push_str(&format!("{} {}\n\n", colors.paint(Tone::Heading, "version"), version));
        }

        let sections: [(&str, &[String], Tone); 5] = [
            ("known types", &self.known_types, Tone::TypeName),
            ("defined types", &self.defined_types, Tone::TypeName),
            ("descriptive types", &self.descriptive_types, Tone::Phrase),
            ("defined (capitalized)", &self.defined_capitalized, Tone::TypeName),
            ("undefined (capitalized)", &self.undefined_capitalized, Tone::TypeName),
        ];

        for (i, (title, items, tone)) in sections.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            let heading = format!("{} ({})", title, items.len());
            out.push_str(&colors.paint(Tone::Heading, &heading));
            out.push('\n');
            for item in items.iter() {
                out.push_str(&format!("  {}\n", colors.paint(*tone, item)));
            }
        }

        out
    }
}
