use rand::Rng;
use ratatui::text::Line;

use crate::content::model::{ResultKind, TextCommand};

use super::rich_text;

/// A `random` command shows one of its paragraphs, chosen per call.
pub fn lines<R: Rng + ?Sized>(command: &TextCommand, rng: &mut R) -> Vec<Line<'static>> {
    match command.kind {
        ResultKind::Single => rich_text::lines(&command.result),
        ResultKind::Random => command
            .result
            .pick_paragraph(rng)
            .map(|block| vec![rich_text::block_line(block)])
            .unwrap_or_default(),
    }
}
