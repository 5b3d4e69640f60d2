use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

pub const LABEL: &str = "Suggestions: ";
const GAP: usize = 1;

/// The row of completion candidates above the prompt.
pub struct Suggestions<'a> {
    pub names: &'a [String],
    pub theme: &'a Theme,
}

impl Widget for Suggestions<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.names.is_empty() {
            return;
        }
        let mut spans = vec![Span::styled(LABEL, self.theme.suggestion_label)];
        for (i, name) in self.names.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" ".repeat(GAP)));
            }
            spans.push(Span::styled(format!(" {name} "), self.theme.suggestion));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

/// Which candidate sits under `column` (relative to the row start).
pub fn suggestion_at(names: &[String], column: u16) -> Option<usize> {
    let column = usize::from(column);
    let mut x = LABEL.width();
    for (i, name) in names.iter().enumerate() {
        let width = name.width() + 2;
        if column >= x && column < x + width {
            return Some(i);
        }
        x += width + GAP;
    }
    None
}
