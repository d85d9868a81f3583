//! Command-driven navigation: typed text in, current screen and ambient
//! triggers out, with the address bar kept in step.

pub mod catalog;
pub mod error;
pub mod normalize;
pub mod path;
pub mod state;
pub mod trigger;

use nucleo_matcher::{
    Config, Matcher,
    pattern::{CaseMatching, Normalization, Pattern},
};
use tracing::{debug, info};

use catalog::Catalog;
use error::RouteError;
use normalize::{BACK_COMMAND, normalize};
use path::{History, MemoryHistory, derive, sync};
use state::RouterState;
use trigger::TriggerChannel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Accepted,
    Rejected,
}

impl CommandOutcome {
    pub fn is_accepted(self) -> bool {
        self == CommandOutcome::Accepted
    }
}

pub struct CommandRouter<H = MemoryHistory> {
    catalog: Catalog,
    state: RouterState,
    error: Option<RouteError>,
    history: H,
    triggers: TriggerChannel,
}

impl<H: History> CommandRouter<H> {
    /// Starts at whatever the history currently points at.
    pub fn new(catalog: Catalog, history: H, triggers: TriggerChannel) -> Self {
        let state = derive(history.location(), &catalog);
        info!(
            path = history.location(),
            screens = catalog.len(),
            "router_started"
        );

        Self {
            catalog,
            state,
            error: None,
            history,
            triggers,
        }
    }

    pub fn accept(&mut self, raw: &str) -> CommandOutcome {
        let token = normalize(raw);

        if token == BACK_COMMAND {
            self.transition(RouterState::Home);
            return CommandOutcome::Accepted;
        }

        let Some(screen) = self.catalog.by_command(&token).cloned() else {
            debug!(token = token.as_str(), "command_rejected");
            self.error = Some(RouteError::UnrecognizedCommand(token));
            return CommandOutcome::Rejected;
        };

        match screen.asset() {
            Some(asset) => {
                let generation = self.triggers.emit(asset.clone());
                debug!(asset = asset.as_str(), generation, "command_triggered");
            }
            None => self.transition(RouterState::Showing(screen)),
        }

        CommandOutcome::Accepted
    }

    /// Back/forward landed somewhere: follow the address bar.
    pub fn navigate_external(&mut self) {
        self.state = derive(self.history.location(), &self.catalog);
        self.error = None;
        debug!(path = self.history.location(), "router_followed_history");
    }

    /// Swaps in a fresh content snapshot and re-reads the current path
    /// against it.
    pub fn replace_catalog(&mut self, catalog: Catalog) {
        self.catalog = catalog;
        self.state = derive(self.history.location(), &self.catalog);
    }

    pub fn available_commands(&self) -> Vec<&str> {
        match self.state {
            RouterState::Showing(_) => vec![BACK_COMMAND],
            RouterState::Home | RouterState::NotFound => self
                .catalog
                .listed()
                .filter_map(|screen| screen.primary_command())
                .collect(),
        }
    }

    /// Closest listed alias to a rejected input. Hidden and audio commands
    /// are never offered.
    pub fn suggest(&self, raw: &str) -> Option<&str> {
        let needle = raw.trim();
        if needle.is_empty() {
            return None;
        }

        let candidates = self
            .catalog
            .listed()
            .flat_map(|screen| screen.commands.iter().map(String::as_str));

        let mut matcher = Matcher::new(Config::DEFAULT);
        let pattern = Pattern::parse(needle, CaseMatching::Ignore, Normalization::Smart);

        pattern
            .match_list(candidates, &mut matcher)
            .into_iter()
            .next()
            .map(|(alias, _)| alias)
    }

    pub fn current_screen(&self) -> &RouterState {
        &self.state
    }

    pub fn error(&self) -> Option<&RouteError> {
        self.error.as_ref()
    }

    pub fn path(&self) -> &str {
        self.history.location()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn triggers(&self) -> &TriggerChannel {
        &self.triggers
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut H {
        &mut self.history
    }

    fn transition(&mut self, next: RouterState) {
        self.state = next;
        self.error = None;
        if sync(&mut self.history, &self.state) {
            debug!(path = self.history.location(), "history_pushed");
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::content::model::{
        AssetRef, ResultKind, Screen, ScreenContent, Show, TextCommand,
    };
    use crate::content::rich_text::RichText;
    use chrono::NaiveDate;

    pub fn shows() -> Screen {
        Screen {
            target: "shows".into(),
            commands: vec!["shows".into(), "tour".into()],
            hidden: false,
            content: ScreenContent::Shows(vec![Show {
                title: "Release party".into(),
                start_date: NaiveDate::from_ymd_opt(2026, 11, 14).unwrap(),
                city: "Ghent".into(),
                country: "Belgium".into(),
                link: None,
            }]),
        }
    }

    pub fn text(target: &str, commands: &[&str], hidden: bool) -> Screen {
        Screen {
            target: target.into(),
            commands: commands.iter().map(|c| c.to_string()).collect(),
            hidden,
            content: ScreenContent::Text(TextCommand {
                kind: ResultKind::Single,
                result: RichText::default(),
            }),
        }
    }

    pub fn audio(target: &str, commands: &[&str], hidden: bool) -> Screen {
        Screen {
            target: target.into(),
            commands: commands.iter().map(|c| c.to_string()).collect(),
            hidden,
            content: ScreenContent::Audio(AssetRef::new(format!("{target}.mp3"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixtures::{audio, shows, text};
    use path::HOME_PATH;

    fn router_at(path: &str) -> CommandRouter {
        let catalog = Catalog::build(vec![
            shows(),
            text("tell-my-future", &["tell my future", "fortune"], false),
            text("where-am-i", &["where am i"], true),
            audio("secret", &["synare", "synare me"], true),
        ])
        .unwrap();
        CommandRouter::new(catalog, MemoryHistory::new(path), TriggerChannel::new())
    }

    fn target(router: &CommandRouter) -> Option<&str> {
        router
            .current_screen()
            .screen()
            .map(|screen| screen.target.as_str())
    }

    #[test]
    fn boot_state_follows_the_initial_path() {
        assert_eq!(*router_at("/").current_screen(), RouterState::Home);
        assert_eq!(target(&router_at("/shows")), Some("shows"));
        assert_eq!(*router_at("/missing").current_screen(), RouterState::NotFound);
    }

    #[test]
    fn every_primary_alias_navigates_from_home() {
        let mut router = router_at("/");
        let listed: Vec<(String, String)> = router
            .catalog()
            .listed()
            .map(|s| (s.commands[0].clone(), s.target.clone()))
            .collect();

        for (alias, expected) in listed {
            router.accept(BACK_COMMAND);
            assert_eq!(router.accept(&alias), CommandOutcome::Accepted);
            assert_eq!(target(&router), Some(expected.as_str()));
            assert_eq!(router.path(), format!("/{expected}"));
        }
    }

    #[test]
    fn back_always_goes_home() {
        for path in ["/", "/shows", "/missing", "/where-am-i"] {
            let mut router = router_at(path);
            assert!(router.accept("BACK").is_accepted());
            assert_eq!(*router.current_screen(), RouterState::Home);
            assert_eq!(router.path(), HOME_PATH);
        }

        let mut empty = CommandRouter::new(
            Catalog::empty(),
            MemoryHistory::new("/shows"),
            TriggerChannel::new(),
        );
        assert!(empty.accept("back").is_accepted());
        assert_eq!(*empty.current_screen(), RouterState::Home);
    }

    #[test]
    fn without_content_only_back_is_accepted() {
        let mut router = CommandRouter::new(
            Catalog::from_snapshot(None).unwrap(),
            MemoryHistory::new("/"),
            TriggerChannel::new(),
        );

        for command in ["shows", "about", "synare"] {
            assert_eq!(router.accept(command), CommandOutcome::Rejected);
            assert_eq!(*router.current_screen(), RouterState::Home);
        }
        assert!(router.available_commands().is_empty());
        assert!(router.suggest("shows").is_none());
        assert_eq!(router.accept("back"), CommandOutcome::Accepted);
        assert!(router.error().is_none());
        assert_eq!(router.history().len(), 1);
    }

    #[test]
    fn unknown_command_is_rejected_without_moving() {
        for path in ["/", "/shows", "/missing"] {
            let mut router = router_at(path);
            let before = router.current_screen().clone();
            let entries = router.history().len();

            assert_eq!(router.accept("qxz123"), CommandOutcome::Rejected);
            assert_eq!(*router.current_screen(), before);
            assert_eq!(router.history().len(), entries);
            assert_eq!(
                router.error(),
                Some(&RouteError::UnrecognizedCommand("qxz123".into()))
            );
        }
    }

    #[test]
    fn empty_input_is_rejected() {
        let mut router = router_at("/");
        assert_eq!(router.accept("   "), CommandOutcome::Rejected);
        assert_eq!(router.error(), Some(&RouteError::UnrecognizedCommand(String::new())));
    }

    #[test]
    fn error_clears_on_transition_and_back() {
        let mut router = router_at("/");
        router.accept("nope");
        assert!(router.error().is_some());
        router.accept("tour");
        assert!(router.error().is_none());

        router.accept("nope");
        router.accept("back");
        assert!(router.error().is_none());
    }

    #[test]
    fn audio_command_leaves_the_error_flag_alone() {
        let mut router = router_at("/");
        router.accept("nope");
        assert!(router.accept("synare").is_accepted());
        assert!(router.error().is_some());
    }

    #[test]
    fn spelling_variants_reach_the_same_screen() {
        for raw in ["Tell My Future", "tell my future", "TELLMYFUTURE", "tellMyFuture"] {
            let mut router = router_at("/");
            assert!(router.accept(raw).is_accepted(), "input {raw:?}");
            assert_eq!(target(&router), Some("tell-my-future"));
        }
    }

    #[test]
    fn audio_command_triggers_without_navigating() {
        let mut router = router_at("/shows");
        let mut observer = router.triggers().observe();

        assert!(router.accept("Synare Me").is_accepted());
        assert_eq!(target(&router), Some("shows"));
        assert_eq!(router.path(), "/shows");
        assert_eq!(observer.poll().unwrap().asset.as_str(), "secret.mp3");

        router.accept("synare");
        assert_eq!(observer.poll().unwrap().asset.as_str(), "secret.mp3");
    }

    #[test]
    fn commands_work_from_any_screen() {
        let mut router = router_at("/shows");
        assert!(router.accept("fortune").is_accepted());
        assert_eq!(target(&router), Some("tell-my-future"));
        assert!(router.accept("where am i").is_accepted());
        assert_eq!(target(&router), Some("where-am-i"));
    }

    #[test]
    fn repeating_a_command_pushes_one_entry() {
        let mut router = router_at("/");
        router.accept("shows");
        router.accept("tour");
        router.accept("SHOWS");
        assert_eq!(router.history().entries(), ["/", "/shows"]);
    }

    #[test]
    fn available_commands_depend_on_state() {
        let mut router = router_at("/");
        assert_eq!(router.available_commands(), vec!["shows", "tell my future"]);

        router.accept("where am i");
        assert_eq!(router.available_commands(), vec!["back"]);

        let not_found = router_at("/missing");
        assert_eq!(not_found.available_commands(), vec!["shows", "tell my future"]);
    }

    #[test]
    fn external_navigation_rederives_state_without_side_effects() {
        let mut router = router_at("/");
        let mut observer = router.triggers().observe();
        router.accept("shows");
        router.accept("fortune");
        router.accept("bogus");

        assert_eq!(router.history_mut().back(), Some("/shows"));
        router.navigate_external();
        assert_eq!(target(&router), Some("shows"));
        assert!(router.error().is_none());
        assert_eq!(router.history().len(), 3);

        router.history_mut().back();
        router.navigate_external();
        assert_eq!(*router.current_screen(), RouterState::Home);

        router.history_mut().forward();
        router.navigate_external();
        assert_eq!(target(&router), Some("shows"));
        assert!(observer.poll().is_none());
    }

    #[test]
    fn not_found_path_stays_in_the_address_bar() {
        let mut router = router_at("/nowhere");
        router.accept("nothing here");
        assert_eq!(router.path(), "/nowhere");
        assert_eq!(router.history().len(), 1);
    }

    #[test]
    fn replacing_the_catalog_rederives_the_current_path() {
        let mut router = router_at("/");
        router.accept("fortune");

        router.replace_catalog(Catalog::build(vec![shows()]).unwrap());
        assert_eq!(*router.current_screen(), RouterState::NotFound);
        assert!(router.accept("tour").is_accepted());
        assert_eq!(target(&router), Some("shows"));
    }

    #[test]
    fn suggestions_only_offer_listed_aliases() {
        let router = router_at("/");
        assert_eq!(router.suggest("shw"), Some("shows"));
        assert_eq!(router.suggest("tou"), Some("tour"));
        assert_eq!(router.suggest("syn"), None);
        assert_eq!(router.suggest("where"), None);
        assert_eq!(router.suggest("  "), None);
        assert_eq!(router.suggest("qxz123"), None);
    }
}
