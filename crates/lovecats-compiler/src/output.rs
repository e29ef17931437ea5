//! Writing emitted units to an output root.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use lovecats_core::Api;

use crate::emit::{Config, Emitter};
use crate::registry::TypeRegistry;
use crate::{Error, Result};

/// Destination for generated files.
pub trait OutputSink {
    /// Create `path` and its parents. Must succeed if it already exists.
    fn create_dir(&mut self, path: &Path) -> io::Result<()>;

    /// Truncate-and-write `contents` to `path`.
    fn write_file(&mut self, path: &Path, contents: &str) -> io::Result<()>;
}

/// Writes to the local filesystem.
#[derive(Clone, Copy, Debug, Default)]
pub struct FsSink;

impl OutputSink for FsSink {
    fn create_dir(&mut self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn write_file(&mut self, path: &Path, contents: &str) -> io::Result<()> {
        fs::write(path, contents)
    }
}

/// Keeps generated files in memory, keyed by path.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    pub dirs: Vec<PathBuf>,
    pub files: BTreeMap<PathBuf, String>,
}

impl OutputSink for MemorySink {
    fn create_dir(&mut self, path: &Path) -> io::Result<()> {
        if !self.dirs.iter().any(|d| d == path) {
            self.dirs.push(path.to_path_buf());
        }
        Ok(())
    }

    fn write_file(&mut self, path: &Path, contents: &str) -> io::Result<()> {
        self.files.insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }
}

/// Generate one annotation file per module under `out_dir`.
pub fn generate(api: &Api, out_dir: &Path, config: &Config) -> Result<Vec<PathBuf>> {
    generate_into(api, out_dir, config, &mut FsSink)
}

/// Generate into an arbitrary sink. Returns the written paths in emission order.
///
/// Collection and emission finish before the first write, so a malformed
/// input never leaves a partial module set behind.
pub fn generate_into(
    api: &Api,
    out_dir: &Path,
    config: &Config,
    sink: &mut impl OutputSink,
) -> Result<Vec<PathBuf>> {
    let registry = TypeRegistry::collect(api);
    let units = Emitter::new(&registry, config).emit(api)?;

    sink.create_dir(out_dir).map_err(|source| Error::CreateDir {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(units.len());
    for unit in &units {
        let path = out_dir.join(unit.file_name());
        sink.write_file(&path, &unit.contents)
            .map_err(|source| Error::WriteFile {
                path: path.clone(),
                source,
            })?;
        tracing::info!("wrote {}", path.display());
        written.push(path);
    }

    Ok(written)
}
