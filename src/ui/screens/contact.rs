use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::{content::model::Contact, util::colors};

use super::link_target;

pub fn lines(contact: &Contact) -> Vec<Line<'static>> {
    let link = Style::default()
        .fg(colors::LINK)
        .add_modifier(Modifier::UNDERLINED);
    let mut lines = Vec::new();

    for member in &contact.team {
        if !lines.is_empty() {
            lines.push(Line::default());
        }

        lines.push(Line::from(format!(
            "{} {} // {}",
            member.first_name, member.last_name, member.role
        )));

        if let Some(company) = &member.company_name {
            match member.company_url.as_deref().and_then(link_target) {
                Some(target) => lines.push(Line::from(vec![
                    Span::styled(company.clone(), link),
                    Span::raw(" "),
                    target,
                ])),
                None => lines.push(Line::from(company.clone())),
            }
        }

        lines.push(Line::styled(member.email.clone(), link));
    }

    lines
}
