use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::{
    content::rich_text::{Block, Mark, RichText},
    util::colors,
};

use super::link_target;

pub fn lines(text: &RichText) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut previous_was_list = false;

    for block in text.blocks().iter().filter(|block| block.kind == "block") {
        let is_list = block.list_item.is_some();
        if !lines.is_empty() && !(is_list && previous_was_list) {
            lines.push(Line::default());
        }
        lines.push(block_line(block));
        previous_was_list = is_list;
    }

    lines
}

pub fn block_line(block: &Block) -> Line<'static> {
    let mut spans = Vec::with_capacity(block.children.len() + 1);

    if block.list_item.is_some() {
        spans.push(Span::raw("• "));
    }

    let base = match block.style.as_deref() {
        Some(style) if style.starts_with('h') => Style::default().add_modifier(Modifier::BOLD),
        Some("blockquote") => Style::default().add_modifier(Modifier::ITALIC),
        _ => Style::default(),
    };

    for span in &block.children {
        let mut target = None;
        let style = span
            .marks
            .iter()
            .fold(base, |style, mark| match block.resolve_mark(mark) {
                Mark::Strong => style.add_modifier(Modifier::BOLD),
                Mark::Emphasis => style.add_modifier(Modifier::ITALIC),
                Mark::Underline => style.add_modifier(Modifier::UNDERLINED),
                Mark::StrikeThrough => style.add_modifier(Modifier::CROSSED_OUT),
                Mark::Code => style.add_modifier(Modifier::REVERSED),
                Mark::Link { url, .. } => {
                    target = link_target(url);
                    style.fg(colors::LINK).add_modifier(Modifier::UNDERLINED)
                }
                Mark::Unknown => style,
            });
        spans.push(Span::styled(span.text.clone(), style));
        if let Some(target) = target {
            spans.push(Span::raw(" "));
            spans.push(target);
        }
    }

    Line::from(spans)
}
