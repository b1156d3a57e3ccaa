//! Catalog document retrieval
//!
//! The parser only needs raw text. A [`CatalogSource`] produces it or
//! fails with a retrieval error; retries are the caller's business.

pub mod client;
pub mod file;

use async_trait::async_trait;

use crate::errors::{Result, ScoutError};

pub use client::{HttpCatalogSource, DEFAULT_CATALOG_URL};
pub use file::FileCatalogSource;

/// Producer of the raw catalog Markdown
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the full document text
    async fn fetch(&self) -> Result<String>;

    /// Human-readable origin, used in logs
    fn describe(&self) -> String;
}

#[async_trait]
impl<S: CatalogSource + ?Sized> CatalogSource for Box<S> {
    async fn fetch(&self) -> Result<String> {
        (**self).fetch().await
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Reject documents above `max_bytes`
pub(crate) fn check_size(text: String, max_bytes: usize) -> Result<String> {
    if text.len() > max_bytes {
        return Err(ScoutError::DocumentTooLarge {
            size: text.len(),
            max: max_bytes,
        });
    }
    Ok(text)
}
