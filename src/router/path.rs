use super::{catalog::Catalog, state::RouterState};

pub const HOME_PATH: &str = "/";

/// The address bar and its back/forward stack.
pub trait History {
    fn location(&self) -> &str;
    fn push(&mut self, path: String);
}

/// Maps a path onto router state. Used at boot and for every external
/// navigation; it never has side effects.
pub fn derive(path: &str, catalog: &Catalog) -> RouterState {
    if path.is_empty() {
        return RouterState::Home;
    }
    let Some(target) = path.strip_prefix('/') else {
        return RouterState::NotFound;
    };
    if target.is_empty() {
        return RouterState::Home;
    }

    match catalog.by_target(target) {
        Some(screen) => RouterState::Showing(screen.clone()),
        None => RouterState::NotFound,
    }
}

/// The path a state lives at. `NotFound` has none: whatever unmatched path
/// got us there stays in the address bar.
pub fn path_for(state: &RouterState) -> Option<String> {
    match state {
        RouterState::Home => Some(HOME_PATH.to_string()),
        RouterState::NotFound => None,
        RouterState::Showing(screen) => Some(screen.path()),
    }
}

/// Writes the path for `state` into `history` unless it is already there.
/// Returns whether an entry was pushed.
pub fn sync<H: History + ?Sized>(history: &mut H, state: &RouterState) -> bool {
    match path_for(state) {
        Some(path) if path != history.location() => {
            history.push(path);
            true
        }
        _ => false,
    }
}

/// In-process history with browser semantics: pushing drops any forward
/// entries, back and forward move a cursor.
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    entries: Vec<String>,
    cursor: usize,
}

impl MemoryHistory {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![initial.into()],
            cursor: 0,
        }
    }

    pub fn back(&mut self) -> Option<&str> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(&self.entries[self.cursor])
    }

    pub fn forward(&mut self) -> Option<&str> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(&self.entries[self.cursor])
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new(HOME_PATH)
    }
}

impl History for MemoryHistory {
    fn location(&self) -> &str {
        &self.entries[self.cursor]
    }

    fn push(&mut self, path: String) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(path);
        self.cursor += 1;
    }
}
