use chrono::Datelike;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::{content::model::Release, util::colors};

use super::link_target;

pub fn lines(releases: &[Release]) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(releases.len() * 2);

    for release in releases {
        let text = format!(
            "{} ({}) // {}",
            release.name,
            release.release_date.year(),
            release.label
        );
        match release.link.as_deref().and_then(link_target) {
            Some(target) => {
                lines.push(Line::styled(
                    text,
                    Style::default()
                        .fg(colors::LINK)
                        .add_modifier(Modifier::UNDERLINED),
                ));
                lines.push(Line::from(vec![Span::raw("  "), target]));
            }
            None => lines.push(Line::from(text)),
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn release_lines() {
        let releases = vec![
            Release {
                name: "Pyramids".into(),
                label: "Self-released".into(),
                release_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                link: Some("https://listen.example".into()),
            },
            Release {
                name: "Obelisk".into(),
                label: "Wavelength".into(),
                release_date: NaiveDate::from_ymd_opt(2022, 9, 9).unwrap(),
                link: None,
            },
        ];

        let lines = lines(&releases);
        let rendered: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
        assert_eq!(
            rendered,
            vec![
                "Pyramids (2024) // Self-released",
                "  ↗ https://listen.example",
                "Obelisk (2022) // Wavelength",
            ]
        );
        assert_eq!(lines[0].style.fg, Some(colors::LINK));
        assert_eq!(lines[2].style.fg, None);
    }
}
