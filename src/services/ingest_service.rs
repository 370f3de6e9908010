use std::fs;
use std::path::PathBuf;

#[cfg(test)]
use mockall::automock;

use crate::error::{CompareError, Result};

/// Supplies the raw text of a named document.
#[cfg_attr(test, automock)]
pub trait TextSource {
    fn read_text(&self, name: &str) -> Result<String>;
}

/// Reads documents from files under a data directory.
#[derive(Debug, Clone)]
pub struct FileTextSource {
    data_dir: PathBuf,
}

impl FileTextSource {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn resolve(&self, name: &str) -> PathBuf {
        self.data_dir.join(name)
    }
}

impl TextSource for FileTextSource {
    /// Returns the file's contents with surrounding whitespace trimmed.
    fn read_text(&self, name: &str) -> Result<String> {
        let path = self.resolve(name);
        let buf = fs::read_to_string(&path).map_err(|source| CompareError::Io {
            path: path.clone(),
            source,
        })?;
        tracing::debug!("Ingested {} bytes from {}", buf.len(), path.display());
        Ok(buf.trim().to_string())
    }
}
