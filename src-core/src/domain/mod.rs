//! Domain Layer
//!
//! Contains the item entity and the hierarchical list that owns it.
//! This layer does no I/O.

mod entity;
mod hierarchy;
mod item;
mod list;
mod positioning;

pub use entity::{DomainError, DomainResult, Entity};
pub use item::{Item, ItemId, Priority};
pub use list::HierarchicalList;

// Re-export operation traits so they come along with the list
pub use hierarchy::HierarchyOperations;
pub use positioning::PositioningOperations;
