use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use crate::util::colors;

const LOGO: [&str; 16] = [
    r"       /\",
    r"      //\\",
    r"     ///\\\",
    r"    ////\\\\",
    r"   /////\\\\\",
    r"  //////\\\\\\",
    r" ///////\\\\\\\",
    r"////////\\\\\\\\",
    r" \\\\\\\///////",
    r"  \\\\\\//////",
    r"   \\\\\/////",
    r"    \\\\////",
    r"     ||||||",
    r"      ||||",
    r"       ||",
    r"       vv",
];

/// Logo plus title scrolling up through the screen, one row per frame.
pub struct BootScreen<'a> {
    frame: u64,
    title: &'a str,
}

impl<'a> BootScreen<'a> {
    pub fn new(frame: u64, title: &'a str) -> Self {
        Self { frame, title }
    }

    /// Row of the top of the logo relative to the area, negative once it
    /// has scrolled past the top.
    fn top(&self, height: u16) -> i32 {
        let travel = Self::height() + u64::from(height);
        let line = self.frame % travel;
        i32::from(height) - line as i32
    }

    fn height() -> u64 {
        // logo, blank line, title
        LOGO.len() as u64 + 2
    }
}

impl Widget for BootScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let style = Style::default().fg(colors::PHOSPHOR);
        let top = self.top(area.height);
        let width = LOGO.iter().map(|line| line.width()).max().unwrap_or(0) as u16;
        let left = area.x + area.width.saturating_sub(width) / 2;

        let rows = LOGO
            .iter()
            .map(|line| (*line, left, style))
            .chain(std::iter::once(("", left, style)))
            .chain(std::iter::once((
                self.title,
                area.x + area.width.saturating_sub(self.title.width() as u16) / 2,
                style.add_modifier(Modifier::BOLD),
            )));

        for (offset, (text, x, style)) in rows.enumerate() {
            let y = top + offset as i32;
            if y < 0 || y >= i32::from(area.height) {
                continue;
            }
            buf.set_stringn(x, area.y + y as u16, text, area.width as usize, style);
        }
    }
}
