//! Repository Layer - Core Traits
//!
//! Defines the abstract interface for list persistence.
//! The file store is the shipped implementation.

use crate::domain::{DomainResult, Item};

/// Storage backend for a whole item sequence
///
/// Items come back in stored order; ids are issued by the list that adopts
/// them, not by the store.
pub trait ListStore {
    /// Read every stored item. Fails only when the backing data can't be read.
    fn load(&self) -> DomainResult<Vec<Item>>;

    /// Replace the stored sequence with `items`
    fn save(&self, items: &[Item]) -> DomainResult<()>;
}
