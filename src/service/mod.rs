//! Tool operations over the catalog
//!
//! Each operation fetches and parses the catalog from scratch, then
//! renders a text result. Failures become error results, never panics.

pub mod listing;
pub mod render;
pub mod tools;
pub mod types;

pub use listing::{list_entries, CategoryGroup, Listing};
pub use tools::ToolService;
pub use types::ToolResult;
