use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use lovecats_core::{Api, read_api};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid API description in '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Load an API description from a JSON file, or stdin for `-`.
pub fn load_api(path: &Path) -> Result<Api, LoadError> {
    let parsed = if path.as_os_str() == "-" {
        read_api(io::stdin().lock())
    } else {
        let file = File::open(path).map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        read_api(BufReader::new(file))
    };

    parsed.map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
