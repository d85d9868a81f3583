use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Widget, Wrap},
};

use crate::{
    router::CommandRouter,
    ui::{
        app::App,
        components::{boot::BootScreen, prompt::Prompt},
    },
    util::colors,
};

const CURSOR_BLINK_FRAMES: u64 = 15;

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        buf.set_style(area, Style::new().bg(colors::BACKGROUND).fg(colors::PHOSPHOR));

        let Some(router) = &self.router else {
            BootScreen::new(self.frame, &self.config.title).render(area, buf);
            return;
        };

        let frame = Block::new()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::new().fg(colors::PHOSPHOR_DIM))
            .title_top(Line::from(format!(" {} ", self.config.title)).alignment(Alignment::Left))
            .title_top(Line::from(format!(" {} ", router.path())).alignment(Alignment::Right))
            .padding(Padding::horizontal(1));
        let inner = frame.inner(area);
        frame.render(area, buf);

        let [screen, commands, error, prompt] = Layout::vertical([
            Constraint::Min(1),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new(self.screen.clone())
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .render(screen, buf);

        commands_line(router).render(commands, buf);

        if router.error().is_some() {
            error_line(self.suggestion.as_deref()).render(error, buf);
        }

        let blink_on = (self.frame / CURSOR_BLINK_FRAMES) % 2 == 0;
        Prompt::new(&self.input)
            .show_cursor(self.has_focus && blink_on)
            .render(prompt, buf);
    }
}

fn commands_line(router: &CommandRouter) -> Paragraph<'static> {
    let dim = Style::new().fg(colors::PHOSPHOR_DIM);
    let mut spans = vec![Span::styled("Available: ", dim)];

    for (i, command) in router.available_commands().into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", dim));
        }
        spans.push(Span::styled(
            command.to_string(),
            Style::new().add_modifier(Modifier::BOLD),
        ));
    }

    Paragraph::new(Line::from(spans)).wrap(Wrap { trim: true })
}

fn error_line(suggestion: Option<&str>) -> Line<'static> {
    let warning = Style::new().fg(colors::WARNING);
    let mut spans = vec![Span::styled("⚠ Unrecognized command", warning)];

    if let Some(suggestion) = suggestion {
        spans.push(Span::styled(
            format!(" (did you mean: {suggestion})"),
            warning.add_modifier(Modifier::DIM),
        ));
    }

    Line::from(spans)
}
