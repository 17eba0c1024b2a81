//! Reading JSON inputs from files or stdin.

use crate::error::{LabError, Result};
use serde::de::DeserializeOwned;
use std::io::Read;
use std::path::Path;

/// Path value that selects stdin.
pub const STDIN: &str = "-";

/// Reads and decodes a JSON document. `-` reads from stdin.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = if path == Path::new(STDIN) {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|source| LabError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        buffer
    } else {
        std::fs::read_to_string(path).map_err(|source| LabError::Io {
            path: path.to_path_buf(),
            source,
        })?
    };

    serde_json::from_str(&raw).map_err(|source| LabError::Json {
        path: path.to_path_buf(),
        source,
    })
}
