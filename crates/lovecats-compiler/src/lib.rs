//! lovecats compiler: type collection and annotation emission.
//!
//! This crate turns a LÖVE API description into LuaCATS stub files:
//! - `registry` - collection pass building the frozen type classification
//! - `naming` - plural folding and namespace prefixing rules
//! - `emit` - class, enum, function and module block generation
//! - `output` - writing one file per module through an [`OutputSink`]
//! - `summary` - diagnostic listing of the classification sets

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod emit;
pub mod naming;
pub mod output;
pub mod registry;
pub mod summary;

#[cfg(test)]
mod output_tests;

#[cfg(test)]
pub mod test_utils;

use std::path::PathBuf;

pub use emit::{Config, Emitter, Unit};
pub use naming::TypeNamer;
pub use output::{FsSink, MemorySink, OutputSink, generate, generate_into};
pub use registry::TypeRegistry;
pub use summary::{DebugSummary, debug_summary};

/// Errors that can occur while generating annotations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The output root could not be created.
    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A module file could not be written.
    #[error("failed to write {}: {source}", .path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A function declares no call variants.
    #[error("function `{function}` has no variants")]
    MissingVariants { function: String },
}

/// Result type for generation.
pub type Result<T> = std::result::Result<T, Error>;
