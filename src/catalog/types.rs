//! Type definitions for catalog entries
//!
//! An [`Entry`] is one listed MCP server. Entries only live for the
//! duration of a single request.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a server runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostingType {
    Cloud,
    Local,
}

/// Operating systems a server explicitly supports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    #[serde(rename = "macOS")]
    MacOs,
    Windows,
    Linux,
}

/// One parsed catalog item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Link label (e.g., "crystaldba/postgres-mcp")
    pub name: String,

    /// Description with marker glyphs removed
    pub description: String,

    /// Language tags (e.g., "Python", "TypeScript/JavaScript")
    #[serde(default)]
    pub languages: Vec<String>,

    /// Empty means unspecified
    #[serde(default)]
    pub hosting_types: Vec<HostingType>,

    #[serde(default)]
    pub platforms: Vec<Platform>,

    /// Heading the entry was listed under, empty if none
    pub category: String,

    pub link: String,

    /// Only set by ranking
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relevance_score: Option<u32>,
}

/// Number of entries listed under one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

impl Entry {
    /// Check whether the entry declares the given hosting type
    pub fn has_hosting(&self, hosting: HostingType) -> bool {
        self.hosting_types.contains(&hosting)
    }

    /// Return a copy carrying a relevance score
    pub fn with_score(mut self, score: u32) -> Self {
        self.relevance_score = Some(score);
        self
    }
}

impl HostingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            HostingType::Cloud => "cloud",
            HostingType::Local => "local",
        }
    }
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::MacOs => "macOS",
            Platform::Windows => "Windows",
            Platform::Linux => "Linux",
        }
    }
}

impl fmt::Display for HostingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
