use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::{content::model::About, util::colors};

use super::{link_target, rich_text};

pub fn lines(about: &About) -> Vec<Line<'static>> {
    let mut lines = rich_text::lines(&about.bio);

    if !about.socials.is_empty() && !lines.is_empty() {
        lines.push(Line::default());
    }

    for social in &about.socials {
        let label = format!("• {}", social.text);
        match link_target(&social.url) {
            Some(target) => lines.push(Line::from(vec![
                Span::styled(
                    label,
                    Style::default()
                        .fg(colors::LINK)
                        .add_modifier(Modifier::UNDERLINED),
                ),
                Span::raw(" "),
                target,
            ])),
            None => lines.push(Line::from(label)),
        }
    }

    lines
}
