use std::sync::Arc;

use crate::content::model::Screen;

/// What is on screen right now. The single source of truth for navigation.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RouterState {
    #[default]
    Home,
    NotFound,
    Showing(Arc<Screen>),
}

impl RouterState {
    pub fn screen(&self) -> Option<&Arc<Screen>> {
        match self {
            RouterState::Showing(screen) => Some(screen),
            _ => None,
        }
    }

    pub fn is_showing(&self) -> bool {
        matches!(self, RouterState::Showing(_))
    }
}
