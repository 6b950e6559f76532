//! List Persistence Operations
//!
//! Save/load for the hierarchical list on top of any `ListStore`.

use std::path::Path;

use super::file_store::FileListStore;
use super::traits::ListStore;
use crate::domain::{DomainResult, HierarchicalList};

/// Trait for persisting a whole list
pub trait ListPersistenceOperations {
    /// Write every item, in order
    fn save_to<S: ListStore>(&self, store: &S) -> DomainResult<()>;

    /// Replace the list with the stored items and reset the selection.
    ///
    /// The list is untouched when the store can't be read.
    fn load_from<S: ListStore>(&mut self, store: &S) -> DomainResult<usize>;

    fn save_to_file(&self, path: impl AsRef<Path>) -> DomainResult<()> {
        self.save_to(&FileListStore::new(path.as_ref()))
    }

    fn load_from_file(&mut self, path: impl AsRef<Path>) -> DomainResult<usize> {
        self.load_from(&FileListStore::new(path.as_ref()))
    }
}

impl ListPersistenceOperations for HierarchicalList {
    fn save_to<S: ListStore>(&self, store: &S) -> DomainResult<()> {
        store.save(self.items())
    }

    fn load_from<S: ListStore>(&mut self, store: &S) -> DomainResult<usize> {
        let items = store.load()?;
        let count = items.len();
        self.replace_items(items);
        Ok(count)
    }
}
