//! mcpscout - MCP server catalog finder
//!
//! Parses the awesome-mcp-servers README into typed entries and ranks
//! them against a free-text problem description.
//!
//! # Architecture
//!
//! - **catalog**: Markdown → [`catalog::Entry`] records
//! - **ranking**: lexical relevance scoring and ordering
//! - **source**: retrieval of the raw document (HTTP or file)
//! - **service**: the list, recommend and categories operations

pub mod errors;
pub mod catalog;
pub mod ranking;
pub mod source;
pub mod service;

// Re-export commonly used types
pub use errors::{Result, ScoutError};
pub use catalog::{parse_catalog, Entry, HostingType, Platform};
pub use ranking::{rank, HostingPreference, RankRequest, Recommendation};
pub use service::{ToolResult, ToolService};

pub mod cli;
pub mod config;
