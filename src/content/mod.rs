pub mod cache;
pub mod error;
pub mod model;
pub mod parse;
pub mod rich_text;
pub mod sanity;

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use cache::ContentCache;
use error::ContentError;
use model::{Documents, Screen};

/// Where documents come from. The HTTP client in production, fakes in
/// tests.
#[async_trait]
pub trait ContentBackend: Send + Sync {
    /// Newest modification stamp in the dataset, optionally only among
    /// documents changed after `since`.
    async fn latest_update(&self, since: Option<&str>) -> Result<Option<String>, ContentError>;

    async fn fetch_documents(&self) -> Result<Documents, ContentError>;
}

/// Produces screen snapshots, refetching documents only when the dataset
/// changed since the cached snapshot.
pub struct ContentService<B> {
    backend: B,
    cache: ContentCache,
}

impl<B: ContentBackend> ContentService<B> {
    pub fn new(backend: B, cache: ContentCache) -> Self {
        Self { backend, cache }
    }

    pub async fn fetch_screens(&self) -> Result<Arc<Vec<Screen>>, ContentError> {
        let cached_stamp = self.cache.last_modified();
        let cached = self.cache.screens();

        let latest = self.backend.latest_update(cached_stamp.as_deref()).await?;

        if let Some(screens) = cached {
            let changed = latest.as_ref().is_some_and(|stamp| Some(stamp) != cached_stamp.as_ref());
            if !changed {
                info!(last_modified = ?cached_stamp, "content_cache_hit");
                return Ok(screens);
            }
        }

        let documents = self.backend.fetch_documents().await?;
        let screens = parse::screens(documents);
        info!(last_modified = ?latest, screens = screens.len(), "content_fetched");

        Ok(self.cache.store(latest, screens))
    }
}
