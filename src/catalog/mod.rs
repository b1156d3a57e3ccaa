//! Catalog parsing
//!
//! Turns the awesome-mcp-servers README into typed [`Entry`] records:
//! - Section headings become categories
//! - List items become entries
//! - Marker glyphs become language, hosting and platform tags

pub mod markers;
pub mod parser;
pub mod types;

pub use markers::{Marker, Tag, MARKERS};
pub use parser::{categories, parse_catalog, CatalogParser, ParseState};
pub use types::{CategoryCount, Entry, HostingType, Platform};
