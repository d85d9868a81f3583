use ratatui::{
    style::{Modifier, Style},
    text::Line,
};

use crate::{content::model::Show, util::colors};

use super::link_target;

const DATE_FORMAT: &str = "%d.%b.%Y";

pub fn lines(shows: &[Show]) -> Vec<Line<'static>> {
    if shows.is_empty() {
        return vec![Line::from("no upcoming shows")];
    }

    let mut lines = Vec::with_capacity(shows.len() * 3);
    for show in shows {
        if !lines.is_empty() {
            lines.push(Line::default());
        }

        let heading = format!("{} ({})", show.title, show.start_date.format(DATE_FORMAT));
        let target = show.link.as_deref().and_then(link_target);
        lines.push(match target {
            Some(_) => Line::styled(
                heading,
                Style::default()
                    .fg(colors::LINK)
                    .add_modifier(Modifier::UNDERLINED),
            ),
            None => Line::from(heading),
        });
        lines.push(Line::from(format!("{}, {}", show.city, show.country)));
        if let Some(target) = target {
            lines.push(Line::from(target));
        }
    }

    lines
}
