use crate::app::state::SystemStatus;
use crate::content::Prompt;
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct StatusBar<'a> {
    pub status: &'a SystemStatus,
    pub prompt: &'a Prompt,
    pub theme: &'a Theme,
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let status = self.status;

        let left = vec![
            Span::styled(" ● ONLINE ", theme.status_online),
            Span::styled(
                format!(" {}@{} ", self.prompt.user, self.prompt.host),
                theme.status_bar,
            ),
        ];

        let battery_style = if status.battery_percent() <= 25 {
            theme.status_warn
        } else {
            theme.status_metric
        };
        let right = vec![
            Span::styled(format!(" CPU {:>2}% ", status.cpu), theme.status_metric),
            Span::styled(format!(" BAT {}% ", status.battery_percent()), battery_style),
            Span::styled(format!(" {} ", status.now.format("%H:%M:%S")), theme.status_bar),
            Span::styled(format!(" {} ", status.now.format("%b %-d")), theme.status_warn),
        ];

        let used: usize = left.iter().chain(right.iter()).map(Span::width).sum();
        let mut spans = left;
        if used <= usize::from(area.width) {
            let padding = usize::from(area.width) - used;
            spans.push(Span::styled(" ".repeat(padding), theme.status_bar));
            spans.extend(right);
        }

        Paragraph::new(Line::from(spans))
            .style(theme.status_bar)
            .render(area, buf);
    }
}
