//! tewduwu core
//!
//! Layered architecture:
//! - domain: the item entity and the depth-annotated hierarchical list
//! - repository: list persistence (flat record file)
//! - commands: input actions applied to the list
//!
//! ```
//! use tewduwu_core::{HierarchicalList, HierarchyOperations, PositioningOperations, Priority};
//!
//! let mut list = HierarchicalList::new();
//! list.add_item("Ship release", 0, Priority::High);
//! list.add_item("Write changelog", 1, Priority::None);
//! list.add_item("Reply to email", 0, Priority::Low);
//!
//! list.move_item_down(0);
//! assert_eq!(list.get(0).unwrap().text, "Reply to email");
//! assert_eq!(list.selected_index(), 1);
//!
//! assert!(list.select_first_child());
//! assert_eq!(list.selected_item().unwrap().text, "Write changelog");
//! ```

pub mod commands;
pub mod domain;
pub mod repository;

pub use commands::{dispatch, Action};
pub use domain::{
    DomainError, DomainResult, Entity, HierarchicalList, HierarchyOperations, Item, ItemId,
    PositioningOperations, Priority,
};
pub use repository::{FileListStore, ListPersistenceOperations, ListStore};
