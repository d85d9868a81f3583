use ratatui::crossterm::event::KeyEvent;
use tracing::{debug, warn};

use crate::{
    event::events::Event,
    ui::{
        app::App,
        input::{InputAction, InputHandler},
        tui::{TerminalEvent, Tui},
    },
};

pub struct EventHandler;

impl EventHandler {
    pub async fn handle_events(app: &mut App, tui: &mut Tui) -> color_eyre::Result<()> {
        if let Some(evt) = tui.next().await {
            Self::handle_event(app, evt, tui)?;
        }

        while let Ok(evt) = app.event_rx.try_recv() {
            Self::handle_action(app, evt)?;
        }

        Ok(())
    }

    pub fn handle_event(app: &mut App, evt: TerminalEvent, tui: &mut Tui) -> color_eyre::Result<()> {
        match evt {
            TerminalEvent::Init => {}
            TerminalEvent::FocusGained => {
                app.has_focus = true;
                tui.clear()?;
            }
            TerminalEvent::FocusLost => app.has_focus = false,
            TerminalEvent::Key(key) => Self::handle_key_event(app, key),
            TerminalEvent::Paste(text) => {
                if !app.is_booting() {
                    app.input.insert_str(&text);
                }
            }
            TerminalEvent::Resize(..) => {}
            TerminalEvent::Tick => {
                app.frame = app.frame.wrapping_add(1);
                app.finish_boot()?;
            }
        }

        Ok(())
    }

    pub fn handle_action(app: &mut App, evt: Event) -> color_eyre::Result<()> {
        match evt {
            Event::ContentFetched(screens) => {
                debug!(screens = screens.len(), "content_fetched");
                app.apply_content(screens)?;
            }
            Event::FetchError(error) => app.content_failed(&error)?,
            Event::AssetLoaded(trigger, bytes) => {
                if let Err(e) = app.ambient.play(&trigger, &bytes) {
                    warn!(asset = trigger.asset.as_str(), error = %e, "ambient_playback_failed");
                }
            }
            Event::AssetError(trigger, error) => {
                warn!(asset = trigger.asset.as_str(), error, "asset_load_failed");
            }
        }

        Ok(())
    }

    fn handle_key_event(app: &mut App, key: KeyEvent) {
        let Some(action) = InputHandler::handle_key(key) else {
            return;
        };

        if action == InputAction::Quit {
            app.should_quit = true;
            return;
        }

        // The splash only listens for quit.
        if app.is_booting() {
            return;
        }

        match action {
            InputAction::Quit => {}
            InputAction::Submit => app.submit(),
            InputAction::Insert(c) => app.input.insert(c),
            InputAction::Backspace => app.input.backspace(),
            InputAction::ClearLine => app.input.clear(),
            InputAction::HistoryBack => app.history_back(),
            InputAction::HistoryForward => app.history_forward(),
            InputAction::ScrollUp => app.scroll_up(),
            InputAction::ScrollDown => app.scroll_down(),
            InputAction::Refresh => app.fetch_content(),
        }
    }
}
