use crate::app::state::{AppState, View};
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

const TERMINAL_HINTS: &[(&str, &str)] = &[
    ("Enter", "run"),
    ("Tab", "complete"),
    ("↑↓", "history"),
    ("Esc", "clear line"),
    ("PgUp/PgDn", "scroll"),
    ("F2", "theme"),
    ("^C", "quit"),
];

const DESKTOP_HINTS: &[(&str, &str)] = &[
    ("Enter/t", "terminal"),
    ("v", "verse"),
    ("F2", "theme"),
    ("q", "quit"),
];

pub struct Footer<'a> {
    pub state: &'a AppState<'a>,
    pub theme: &'a Theme,
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let state = self.state;

        let hints = match state.view {
            View::Terminal => TERMINAL_HINTS,
            View::Desktop => DESKTOP_HINTS,
        };

        let mut right = vec![Span::styled(
            format!(" {} ", state.palette_type.label()),
            theme.footer,
        )];
        if state.visits > 0 {
            right.push(Span::styled(format!(" visit #{} ", state.visits), theme.footer));
        }
        let right_width: usize = right.iter().map(Span::width).sum();

        let available_width = usize::from(area.width).saturating_sub(right_width);
        let mut spans = vec![Span::raw(" ")];
        let mut current_width = 1;
        for (key, label) in hints {
            let key_span = Span::styled(format!(" {key} "), theme.footer_key);
            let label_span = Span::styled(format!(" {label} "), theme.footer);
            let width = key_span.width() + label_span.width();
            if current_width + width > available_width {
                break;
            }
            current_width += width;
            spans.push(key_span);
            spans.push(label_span);
        }

        if current_width + right_width <= usize::from(area.width) {
            spans.push(Span::raw(
                " ".repeat(usize::from(area.width) - current_width - right_width),
            ));
            spans.extend(right);
        }

        Paragraph::new(Line::from(spans))
            .style(theme.footer)
            .render(area, buf);
    }
}
