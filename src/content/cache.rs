use std::sync::{Arc, PoisonError, RwLock};

use super::model::Screen;

#[derive(Debug, Default)]
struct Entry {
    last_modified: Option<String>,
    screens: Option<Arc<Vec<Screen>>>,
}

/// Last fetched snapshot and the modification stamp it was fetched at.
/// Owned by whoever builds the content service; clones share the entry.
#[derive(Clone, Default)]
pub struct ContentCache {
    entry: Arc<RwLock<Entry>>,
}

impl ContentCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_modified(&self) -> Option<String> {
        self.entry
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .last_modified
            .clone()
    }

    pub fn screens(&self) -> Option<Arc<Vec<Screen>>> {
        self.entry
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .screens
            .clone()
    }

    pub fn store(&self, last_modified: Option<String>, screens: Vec<Screen>) -> Arc<Vec<Screen>> {
        let screens = Arc::new(screens);
        let mut entry = self.entry.write().unwrap_or_else(PoisonError::into_inner);
        entry.last_modified = last_modified;
        entry.screens = Some(screens.clone());
        screens
    }
}
