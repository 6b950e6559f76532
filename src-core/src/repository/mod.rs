//! Repository Layer
//!
//! Persistence abstractions and the flat-file implementation.

mod traits;
mod record;
mod file_store;
mod list_persistence;


pub use traits::ListStore;
pub use record::{format_record, format_records, parse_record, parse_records};
pub use file_store::FileListStore;
pub use list_persistence::ListPersistenceOperations;
