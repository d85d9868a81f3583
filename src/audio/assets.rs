use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::info;

use crate::{audio::error::AudioError, content::model::AssetRef};

#[derive(Clone, Default)]
pub struct AssetCache {
    cache: Arc<RwLock<HashMap<AssetRef, Arc<[u8]>>>>,
}

impl AssetCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, asset: &AssetRef) -> Option<Arc<[u8]>> {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(asset)
            .cloned()
    }

    pub fn insert(&self, asset: AssetRef, bytes: Arc<[u8]>) {
        self.cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(asset, bytes);
    }
}

/// Resolves asset references to bytes: URLs over HTTP, anything else from
/// the assets directory.
pub struct AssetLoader {
    http: reqwest::Client,
    root: PathBuf,
    cache: AssetCache,
}

impl AssetLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            http: reqwest::Client::new(),
            root: root.into(),
            cache: AssetCache::new(),
        }
    }

    pub async fn load(&self, asset: &AssetRef) -> Result<Arc<[u8]>, AudioError> {
        if let Some(bytes) = self.cache.get(asset) {
            info!(asset = asset.as_str(), "asset_cache_hit");
            return Ok(bytes);
        }

        let bytes: Arc<[u8]> = if asset.is_remote() {
            self.download(asset).await?.into()
        } else {
            let path = self.root.join(asset.as_str().trim_start_matches('/'));
            tokio::fs::read(&path)
                .await
                .map_err(|e| AudioError::AssetNotFound(format!("{}: {e}", path.display())))?
                .into()
        };

        info!(asset = asset.as_str(), bytes = bytes.len(), "asset_loaded");
        self.cache.insert(asset.clone(), bytes.clone());
        Ok(bytes)
    }

    async fn download(&self, asset: &AssetRef) -> Result<Vec<u8>, AudioError> {
        let network = |e: reqwest::Error| AudioError::NetworkError(e.to_string());
        let response = self
            .http
            .get(asset.as_str())
            .send()
            .await
            .map_err(network)?
            .error_for_status()
            .map_err(network)?;
        Ok(response.bytes().await.map_err(network)?.to_vec())
    }
}
