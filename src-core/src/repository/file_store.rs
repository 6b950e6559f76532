//! File List Store
//!
//! Plain-text list file, one record per line (see `record`).

use std::fs;
use std::path::{Path, PathBuf};

use super::record::{format_records, parse_records};
use super::traits::ListStore;
use crate::domain::{DomainError, DomainResult, Item};

/// File-backed implementation of `ListStore`
#[derive(Debug, Clone)]
pub struct FileListStore {
    path: PathBuf,
}

impl FileListStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ListStore for FileListStore {
    fn load(&self) -> DomainResult<Vec<Item>> {
        let bytes = fs::read(&self.path).map_err(|e| DomainError::io(&self.path, e))?;
        let content = String::from_utf8_lossy(&bytes);
        let items = parse_records(&content);
        log::info!("Loaded {} item(s) from {}", items.len(), self.path.display());
        Ok(items)
    }

    fn save(&self, items: &[Item]) -> DomainResult<()> {
        fs::write(&self.path, format_records(items)).map_err(|e| DomainError::io(&self.path, e))?;
        log::info!("Saved {} item(s) to {}", items.len(), self.path.display());
        Ok(())
    }
}
