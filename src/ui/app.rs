use std::sync::Arc;
use std::time::Instant;

use color_eyre::eyre::WrapErr;
use flume::{Receiver, Sender};
use ratatui::{Frame, text::Text};
use tracing::{info, warn};

use crate::{
    audio::{ambient::AmbientPlayer, playback::PlaybackEngine},
    config::AppConfig,
    content::{
        ContentService, cache::ContentCache, model::Screen, sanity::SanityClient,
    },
    event::events::Event,
    router::{
        CommandOutcome, CommandRouter, catalog::Catalog, path::MemoryHistory,
        trigger::TriggerChannel,
    },
    ui::{components::prompt::CommandInput, screens},
    util::task::TaskManager,
};

use super::{tui, util::handler::EventHandler};

/// Content as seen by the boot sequence.
#[derive(Debug, Clone, Default)]
pub enum BootContent {
    #[default]
    Pending,
    Ready(Arc<Vec<Screen>>),
    Missing,
}

pub struct App {
    pub event_rx: Receiver<Event>,
    pub event_tx: Sender<Event>,
    pub config: AppConfig,
    pub content: Arc<ContentService<SanityClient>>,
    pub triggers: TriggerChannel,
    pub ambient: AmbientPlayer,
    pub router: Option<CommandRouter>,
    pub input: CommandInput,
    pub screen: Text<'static>,
    pub scroll: u16,
    pub suggestion: Option<String>,
    pub task_manager: TaskManager,
    pub boot_started: Instant,
    pub boot_content: BootContent,
    pub initial_path: String,
    pub frame: u64,
    pub has_focus: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig, initial_path: String) -> color_eyre::Result<Self> {
        let engine = PlaybackEngine::new(config.audio.volume)
            .inspect_err(|e| warn!(error = %e, "ambient_player_without_output"))
            .ok();
        Self::with_engine(config, initial_path, engine)
    }

    pub fn with_engine(
        config: AppConfig,
        initial_path: String,
        engine: Option<PlaybackEngine>,
    ) -> color_eyre::Result<Self> {
        let (event_tx, event_rx) = flume::unbounded();
        let client = SanityClient::new(&config.sanity).wrap_err("Cannot reach the CMS")?;
        let content = Arc::new(ContentService::new(client, ContentCache::new()));
        let triggers = TriggerChannel::new();
        let ambient = AmbientPlayer::new(engine, &config.audio, &triggers);

        Ok(Self {
            event_rx,
            event_tx,
            config,
            content,
            triggers,
            ambient,
            router: None,
            input: CommandInput::default(),
            screen: Text::default(),
            scroll: 0,
            suggestion: None,
            task_manager: TaskManager::new(),
            boot_started: Instant::now(),
            boot_content: BootContent::Pending,
            initial_path,
            frame: 0,
            has_focus: true,
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = tui::Tui::new()?;
        tui.enter()?;

        self.boot_started = Instant::now();
        self.fetch_content();

        while !self.should_quit {
            tui.draw(|f| {
                self.ui(f);
            })?;

            EventHandler::handle_events(self, &mut tui).await?;
        }

        self.task_manager.abort_all();
        self.ambient.stop();
        tui.exit()?;
        Ok(())
    }

    fn ui(&self, frame: &mut Frame) {
        frame.render_widget(self, frame.area());
    }

    pub fn is_booting(&self) -> bool {
        self.router.is_none()
    }

    pub fn fetch_content(&mut self) {
        let content = self.content.clone();
        let tx = self.event_tx.clone();

        self.task_manager.spawn(
            "content_fetch",
            tokio::spawn(async move {
                match content.fetch_screens().await {
                    Ok(screens) => {
                        let _ = tx.send(Event::ContentFetched(screens));
                    }
                    Err(e) => {
                        let _ = tx.send(Event::FetchError(e.to_string()));
                    }
                }
            }),
        );
    }

    /// Builds the router once the splash has run its full length and the
    /// content fetch has settled either way.
    pub fn finish_boot(&mut self) -> color_eyre::Result<()> {
        if !self.is_booting() || self.boot_started.elapsed() < self.config.boot_delay {
            return Ok(());
        }

        let snapshot = match &self.boot_content {
            BootContent::Pending => return Ok(()),
            BootContent::Ready(screens) => Some(screens.as_slice()),
            BootContent::Missing => None,
        };

        let catalog = Catalog::from_snapshot(snapshot).wrap_err("Malformed content")?;
        let history = MemoryHistory::new(self.initial_path.clone());
        self.router = Some(CommandRouter::new(catalog, history, self.triggers.clone()));
        self.refresh_screen();
        info!(path = self.initial_path.as_str(), "boot_finished");
        Ok(())
    }

    /// A new snapshot arrived after boot: swap it in under the current path.
    pub fn apply_content(&mut self, screens: Arc<Vec<Screen>>) -> color_eyre::Result<()> {
        let Some(router) = &mut self.router else {
            self.boot_content = BootContent::Ready(screens);
            return self.finish_boot();
        };

        let catalog = Catalog::build(screens.to_vec()).wrap_err("Malformed content")?;
        router.replace_catalog(catalog);
        self.refresh_screen();
        Ok(())
    }

    pub fn content_failed(&mut self, error: &str) -> color_eyre::Result<()> {
        warn!(error, "content_fetch_failed");
        if self.is_booting() {
            self.boot_content = BootContent::Missing;
            return self.finish_boot();
        }
        Ok(())
    }

    pub fn submit(&mut self) {
        let command = self.input.take();
        let Some(router) = &mut self.router else {
            return;
        };

        let before = self.triggers.latest().map(|t| t.generation);
        let outcome = router.accept(&command);
        let triggered = self.triggers.latest().map(|t| t.generation) != before;

        self.suggestion = match outcome {
            CommandOutcome::Rejected => router.suggest(&command).map(String::from),
            CommandOutcome::Accepted => None,
        };

        if outcome.is_accepted() && !triggered {
            self.refresh_screen();
        }
        self.start_triggers();
    }

    pub fn history_back(&mut self) {
        self.follow_history(|history| history.back().is_some());
    }

    pub fn history_forward(&mut self) {
        self.follow_history(|history| history.forward().is_some());
    }

    fn follow_history(&mut self, step: impl FnOnce(&mut MemoryHistory) -> bool) {
        let Some(router) = &mut self.router else {
            return;
        };

        if step(router.history_mut()) {
            router.navigate_external();
            self.suggestion = None;
            self.refresh_screen();
        }
    }

    /// Kicks off loading for a pending trigger. A newer trigger aborts the
    /// load of an older one.
    pub fn start_triggers(&mut self) {
        let Some(trigger) = self.ambient.poll() else {
            return;
        };

        let loader = self.ambient.loader();
        let tx = self.event_tx.clone();
        self.task_manager.spawn(
            "asset_load",
            tokio::spawn(async move {
                match loader.load(&trigger.asset).await {
                    Ok(bytes) => {
                        let _ = tx.send(Event::AssetLoaded(trigger, bytes));
                    }
                    Err(e) => {
                        let _ = tx.send(Event::AssetError(trigger, e.to_string()));
                    }
                }
            }),
        );
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        let max = self.screen.lines.len().saturating_sub(1) as u16;
        self.scroll = (self.scroll + 1).min(max);
    }

    fn refresh_screen(&mut self) {
        if let Some(router) = &self.router {
            self.screen = screens::render(router.current_screen(), &mut rand::rng());
            self.scroll = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::{fixtures::shows, state::RouterState};
    use std::time::Duration;

    fn app(boot_ms: &str, path: &str) -> App {
        let config = AppConfig::from_lookup(|key| match key {
            "SANITY_PROJECT_ID" => Some("abc123".into()),
            "RETROTERM_BOOT_MS" => Some(boot_ms.into()),
            _ => None,
        })
        .unwrap();
        App::with_engine(config, path.into(), None).unwrap()
    }

    #[test]
    fn boot_waits_for_content() {
        let mut app = app("0", "/shows");
        app.finish_boot().unwrap();
        assert!(app.is_booting());

        app.apply_content(Arc::new(vec![shows()])).unwrap();
        assert!(!app.is_booting());

        let router = app.router.as_ref().unwrap();
        assert!(router.current_screen().is_showing());
        assert_eq!(router.path(), "/shows");
        assert!(!app.screen.lines.is_empty());
    }

    #[test]
    fn boot_waits_for_the_splash() {
        let mut app = app("60000", "/");
        app.apply_content(Arc::new(vec![shows()])).unwrap();
        assert!(app.is_booting());
        assert!(matches!(app.boot_content, BootContent::Ready(_)));

        // splash over
        app.config.boot_delay = Duration::ZERO;
        app.finish_boot().unwrap();
        let router = app.router.as_ref().unwrap();
        assert_eq!(router.current_screen(), &RouterState::Home);
        assert_eq!(router.available_commands(), vec!["shows"]);
    }

    #[test]
    fn failed_fetch_boots_without_content() {
        let mut app = app("0", "/shows");
        app.content_failed("offline").unwrap();

        let router = app.router.as_ref().unwrap();
        assert_eq!(router.current_screen(), &RouterState::NotFound);
        assert!(router.catalog().is_empty());
    }

    #[test]
    fn failed_reload_keeps_the_catalog() {
        let mut app = app("0", "/shows");
        app.apply_content(Arc::new(vec![shows()])).unwrap();
        app.content_failed("offline").unwrap();

        let router = app.router.as_ref().unwrap();
        assert_eq!(router.catalog().len(), 1);
        assert!(router.current_screen().is_showing());
    }

    #[test]
    fn reload_swaps_the_catalog_in_place() {
        let mut app = app("0", "/shows");
        app.apply_content(Arc::new(vec![shows()])).unwrap();
        app.apply_content(Arc::new(vec![])).unwrap();

        let router = app.router.as_ref().unwrap();
        assert_eq!(router.current_screen(), &RouterState::NotFound);
        assert_eq!(router.path(), "/shows");
    }

    #[test]
    fn typed_commands_update_screen_and_suggestion() {
        let mut app = app("0", "/");
        app.apply_content(Arc::new(vec![shows()])).unwrap();

        app.input.insert_str("tur");
        app.submit();
        assert_eq!(app.suggestion.as_deref(), Some("tour"));
        assert!(app.screen.lines.is_empty());

        app.input.insert_str("tour");
        app.submit();
        assert!(app.suggestion.is_none());
        assert!(!app.screen.lines.is_empty());
        assert_eq!(app.input.value(), "");

        app.history_back();
        assert!(app.screen.lines.is_empty());
    }
}
