//! The list, recommend and categories operations
//!
//! Each call fetches the document, parses it from scratch and renders a
//! [`ToolResult`]. Retrieval failures and bad arguments are converted into
//! failed results at this boundary.

use std::time::Instant;
use tracing::{info, warn};

use crate::catalog::{categories, parse_catalog, CategoryCount, Entry};
use crate::errors::{Result, ScoutError};
use crate::ranking::{rank, RankRequest, Recommendation};
use crate::service::listing::{list_entries, Listing};
use crate::service::render::{render_categories, render_listing, render_recommendation};
use crate::service::types::ToolResult;
use crate::source::CatalogSource;

pub const LIST_TOOL: &str = "list";
pub const RECOMMEND_TOOL: &str = "recommend";
pub const CATEGORIES_TOOL: &str = "categories";

/// Catalog operations backed by a document source
pub struct ToolService<S> {
    source: S,
}

impl<S: CatalogSource> ToolService<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Fetch and parse the catalog
    pub async fn fetch_entries(&self) -> Result<Vec<Entry>> {
        let text = self.source.fetch().await?;
        let entries = parse_catalog(&text);
        info!(
            source = %self.source.describe(),
            entries = entries.len(),
            "Loaded MCP server catalog"
        );
        Ok(entries)
    }

    /// Catalog grouped by category, optionally filtered
    pub async fn list_catalog(&self, category: Option<&str>) -> Result<Listing> {
        let entries = self.fetch_entries().await?;
        Ok(list_entries(entries, category))
    }

    /// Ranked recommendations for a problem description
    pub async fn recommend_servers(&self, request: &RankRequest) -> Result<Recommendation> {
        request.validate()?;
        let entries = self.fetch_entries().await?;
        Ok(rank(&entries, request))
    }

    /// Category names with entry counts
    pub async fn category_counts(&self) -> Result<Vec<CategoryCount>> {
        let entries = self.fetch_entries().await?;
        Ok(categories(&entries))
    }

    /// `list(category?)` rendered as text
    pub async fn list(&self, category: Option<&str>) -> ToolResult {
        let start = Instant::now();
        match self.list_catalog(category).await {
            Ok(listing) => ToolResult::success(LIST_TOOL, render_listing(&listing), start.elapsed()),
            Err(e) => failure(LIST_TOOL, e, start),
        }
    }

    /// `recommend(problem, maxResults?, language?, hosting?)` rendered as text
    pub async fn recommend(&self, request: &RankRequest) -> ToolResult {
        let start = Instant::now();
        match self.recommend_servers(request).await {
            Ok(recommendation) => ToolResult::success(
                RECOMMEND_TOOL,
                render_recommendation(&request.problem, &recommendation),
                start.elapsed(),
            ),
            Err(e) => failure(RECOMMEND_TOOL, e, start),
        }
    }

    /// `categories()` rendered as text
    pub async fn categories(&self) -> ToolResult {
        let start = Instant::now();
        match self.category_counts().await {
            Ok(counts) => {
                ToolResult::success(CATEGORIES_TOOL, render_categories(&counts), start.elapsed())
            }
            Err(e) => failure(CATEGORIES_TOOL, e, start),
        }
    }
}

fn failure(tool: &str, error: ScoutError, start: Instant) -> ToolResult {
    warn!(tool, error = %error, "Tool call failed");
    let message = if error.is_retrieval() {
        format!("Failed to fetch MCP server catalog: {}", error)
    } else {
        error.to_string()
    };
    ToolResult::failure(tool, message, start.elapsed())
}
