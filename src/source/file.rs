//! Local copy of the catalog, for offline use
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::errors::Result;
use crate::source::{check_size, CatalogSource};

/// Reads the catalog Markdown from disk
pub struct FileCatalogSource {
    path: PathBuf,
    max_bytes: usize,
}

impl FileCatalogSource {
    pub fn new(path: impl Into<PathBuf>, max_bytes: usize) -> Self {
        Self {
            path: path.into(),
            max_bytes,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CatalogSource for FileCatalogSource {
    async fn fetch(&self) -> Result<String> {
        debug!(path = %self.path.display(), "Reading catalog file");
        let text = tokio::fs::read_to_string(&self.path).await?;
        check_size(text, self.max_bytes)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
