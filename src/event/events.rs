use std::sync::Arc;

use crate::{content::model::Screen, router::trigger::Trigger};

/// Results of background work, delivered back to the UI loop.
#[derive(Debug, Clone)]
pub enum Event {
    ContentFetched(Arc<Vec<Screen>>),
    FetchError(String),
    AssetLoaded(Arc<Trigger>, Arc<[u8]>),
    AssetError(Arc<Trigger>, String),
}
