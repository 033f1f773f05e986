//! Loading of plain-text sequence files.
//!
//! One file holds one sequence; surrounding whitespace is stripped and the
//! record is named after the file stem. Anything beyond that (FASTA headers,
//! multi-record files) is out of scope here.

use std::path::{Path, PathBuf};

use thiserror::Error;

use orfscan_core::Sequence;

#[derive(Debug, Error)]
pub enum LoadError {
    /// Missing files, permission problems and undecodable content all land
    /// here; callers only need to know the source was unreadable.
    #[error("cannot read sequence file `{}`", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Read a single whitespace-trimmed sequence from `path`.
pub fn load_sequence(path: impl AsRef<Path>) -> Result<Sequence, LoadError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "sequence".to_string());

    Ok(Sequence::new(name, content.trim()))
}
