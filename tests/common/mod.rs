//! Shared test sources for integration tests

use async_trait::async_trait;
use mcpscout::source::CatalogSource;
use mcpscout::{Result, ScoutError};

pub const FIXTURE: &str = include_str!("../fixtures/catalog.md");

/// Serves a fixed document, or fails like an unreachable upstream
pub struct FixtureSource {
    text: Option<String>,
}

impl FixtureSource {
    pub fn new(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
        }
    }

    pub fn catalog() -> Self {
        Self::new(FIXTURE)
    }

    pub fn unreachable() -> Self {
        Self { text: None }
    }
}

#[async_trait]
impl CatalogSource for FixtureSource {
    async fn fetch(&self) -> Result<String> {
        self.text
            .clone()
            .ok_or(ScoutError::Retrieval { status: 502 })
    }

    fn describe(&self) -> String {
        "fixture".to_string()
    }
}
