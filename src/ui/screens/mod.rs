//! Pure renderers for each kind of screen content.

pub mod about;
pub mod contact;
pub mod music;
pub mod rich_text;
pub mod shows;
pub mod text;

use rand::Rng;
use ratatui::{
    style::Style,
    text::{Span, Text},
};

use crate::{
    content::{model::ScreenContent, rich_text::uri_looks_safe},
    router::state::RouterState,
    util::colors,
};

pub fn render<R: Rng + ?Sized>(state: &RouterState, rng: &mut R) -> Text<'static> {
    match state {
        RouterState::Home => Text::default(),
        RouterState::NotFound => Text::from("not found"),
        RouterState::Showing(screen) => Text::from(match &screen.content {
            ScreenContent::About(about) => about::lines(about),
            ScreenContent::Shows(shows) => shows::lines(shows),
            ScreenContent::Music(releases) => music::lines(releases),
            ScreenContent::Contact(contact) => contact::lines(contact),
            ScreenContent::Text(command) => text::lines(command, rng),
            // only reachable by starting at an audio path; nothing to show
            ScreenContent::Audio(_) => Vec::new(),
        }),
    }
}

/// Printed target of a link, since styled text alone cannot be followed.
/// Unsafe URLs print nothing.
pub fn link_target(url: &str) -> Option<Span<'static>> {
    uri_looks_safe(url)
        .then(|| Span::styled(format!("↗ {url}"), Style::default().fg(colors::PHOSPHOR_DIM)))
}
