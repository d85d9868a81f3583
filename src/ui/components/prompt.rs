use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use crate::util::colors;

const LABEL: &str = "Command: ";
const CURSOR: &str = "█";

/// The line being typed. Only ever appended to or trimmed from the end,
/// like the terminal it imitates.
#[derive(Debug, Clone, Default)]
pub struct CommandInput {
    value: String,
}

impl CommandInput {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn insert(&mut self, c: char) {
        if !c.is_control() {
            self.value.push(c);
        }
    }

    /// Pasted text stops at the first line break.
    pub fn insert_str(&mut self, text: &str) {
        let line = text.lines().next().unwrap_or_default();
        line.chars().for_each(|c| self.insert(c));
    }

    pub fn backspace(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.value)
    }

    /// Columns from the start of the prompt to the cursor, trailing spaces
    /// included.
    pub fn cursor_column(&self) -> usize {
        LABEL.width() + self.value.width()
    }
}

pub struct Prompt<'a> {
    input: &'a CommandInput,
    show_cursor: bool,
}

impl<'a> Prompt<'a> {
    pub fn new(input: &'a CommandInput) -> Self {
        Self {
            input,
            show_cursor: true,
        }
    }

    pub fn show_cursor(mut self, show_cursor: bool) -> Self {
        self.show_cursor = show_cursor;
        self
    }
}

impl Widget for Prompt<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let line = Line::from(vec![
            Span::styled(LABEL, Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(self.input.value().to_string()),
        ])
        .style(Style::default().fg(colors::PHOSPHOR));
        buf.set_line(area.x, area.y, &line, area.width);

        let column = self.input.cursor_column() as u16;
        if self.show_cursor && column < area.width {
            buf.set_string(
                area.x + column,
                area.y,
                CURSOR,
                Style::default().fg(colors::PHOSPHOR),
            );
        }
    }
}
