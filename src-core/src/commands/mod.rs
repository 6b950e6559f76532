//! Commands Layer
//!
//! Handlers that bridge presentation input to the domain list.

mod list_cmd;

pub use list_cmd::*;
