use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::debug;

use super::error::RefactorError;

/// Python source text together with the path it was read from.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    pub text: String,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        SourceFile {
            path: path.into(),
            text: text.into(),
        }
    }

    /// Read a file from disk. The file is only ever read, never written back.
    pub fn read(path: impl AsRef<Path>) -> Result<Self, RefactorError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| RefactorError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = text.len(), "read source file");
        Ok(SourceFile::new(path, text))
    }
}
