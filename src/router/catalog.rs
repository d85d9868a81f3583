use std::collections::{HashMap, hash_map::Entry};
use std::sync::Arc;

use tracing::{debug, warn};

use crate::content::model::Screen;

use super::{error::RouteError, normalize::normalize};

/// Screens of one content snapshot, indexed by command token and target.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    screens: Vec<Arc<Screen>>,
    by_command: HashMap<String, usize>,
    by_target: HashMap<String, usize>,
}

impl Catalog {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Indexes `screens` in order. The first screen to declare a command
    /// keeps it; a repeated target is malformed content and fails the build.
    pub fn build(screens: Vec<Screen>) -> Result<Self, RouteError> {
        let mut catalog = Self::empty();

        for screen in screens {
            let index = catalog.screens.len();

            match catalog.by_target.entry(screen.target.clone()) {
                Entry::Occupied(_) => return Err(RouteError::DuplicateTarget(screen.target)),
                Entry::Vacant(slot) => {
                    slot.insert(index);
                }
            }

            for command in &screen.commands {
                let token = normalize(command);
                if token.is_empty() {
                    continue;
                }

                match catalog.by_command.entry(token) {
                    Entry::Occupied(owner) => {
                        debug!(
                            command = command.as_str(),
                            owner = catalog.screens[*owner.get()].target.as_str(),
                            shadowed = screen.target.as_str(),
                            "catalog_command_shadowed"
                        );
                    }
                    Entry::Vacant(slot) => {
                        slot.insert(index);
                    }
                }
            }

            catalog.screens.push(Arc::new(screen));
        }

        Ok(catalog)
    }

    /// Builds from whatever the content layer produced; no snapshot at all
    /// degrades to an empty catalog instead of failing.
    pub fn from_snapshot(snapshot: Option<&[Screen]>) -> Result<Self, RouteError> {
        match snapshot {
            Some(screens) => Self::build(screens.to_vec()),
            None => {
                warn!(error = %RouteError::MissingContent, "catalog_empty");
                Ok(Self::empty())
            }
        }
    }

    pub fn by_command(&self, token: &str) -> Option<&Arc<Screen>> {
        self.by_command.get(token).map(|&index| &self.screens[index])
    }

    pub fn by_target(&self, target: &str) -> Option<&Arc<Screen>> {
        self.by_target.get(target).map(|&index| &self.screens[index])
    }

    pub fn screens(&self) -> impl Iterator<Item = &Arc<Screen>> {
        self.screens.iter()
    }

    /// Screens that show up in the command listing, in catalog order.
    pub fn listed(&self) -> impl Iterator<Item = &Arc<Screen>> {
        self.screens
            .iter()
            .filter(|screen| !screen.hidden && screen.is_navigable())
    }

    pub fn len(&self) -> usize {
        self.screens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::fixtures::{audio, shows, text};

    #[test]
    fn lookups_by_command_and_target() {
        let catalog = Catalog::build(vec![shows(), audio("secret", &["synare"], true)]).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.by_command("tour").unwrap().target, "shows");
        assert_eq!(catalog.by_command("synare").unwrap().target, "secret");
        assert_eq!(catalog.by_target("shows").unwrap().target, "shows");
        assert!(catalog.by_command("shows ").is_none());
        assert!(catalog.by_target("tour").is_none());
    }

    #[test]
    fn commands_are_indexed_by_token() {
        let catalog = Catalog::build(vec![text("fortune", &["Tell My Future"], false)]).unwrap();
        assert_eq!(catalog.by_command("tellmyfuture").unwrap().target, "fortune");
    }

    #[test]
    fn first_screen_keeps_a_shared_command() {
        let catalog = Catalog::build(vec![
            text("first", &["hello"], false),
            text("second", &["hello", "bye"], false),
        ])
        .unwrap();

        assert_eq!(catalog.by_command("hello").unwrap().target, "first");
        assert_eq!(catalog.by_command("bye").unwrap().target, "second");
    }

    #[test]
    fn duplicate_target_fails_fast() {
        let err = Catalog::build(vec![shows(), text("shows", &["gigs"], false)]).unwrap_err();
        assert_eq!(err, RouteError::DuplicateTarget("shows".to_string()));
    }

    #[test]
    fn empty_aliases_are_not_indexed() {
        let catalog = Catalog::build(vec![text("blank", &["", "  ", "?"], false)]).unwrap();
        assert!(catalog.by_command("").is_none());
        assert_eq!(catalog.by_target("blank").unwrap().target, "blank");
    }

    #[test]
    fn listed_skips_hidden_and_audio() {
        let catalog = Catalog::build(vec![
            text("hidden", &["psst"], true),
            shows(),
            audio("horn", &["horn"], false),
            text("fortune", &["fortune"], false),
        ])
        .unwrap();

        let listed: Vec<&str> = catalog.listed().map(|s| s.target.as_str()).collect();
        assert_eq!(listed, vec!["shows", "fortune"]);
    }

    #[test]
    fn missing_snapshot_degrades_to_empty() {
        let catalog = Catalog::from_snapshot(None).unwrap();
        assert!(catalog.is_empty());
    }
}
