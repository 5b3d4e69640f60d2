use crate::app::state::OwnerCard;
use crate::components::helpers::{centered_rect_fixed_height, draw_drop_shadow};
use crate::components::output::wrap_text;
use crate::content::profile::Quote;
use crate::theme::Theme;
use chrono::{DateTime, Local};
use unicode_width::UnicodeWidthStr;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

const BUTTON: &str = "[ Open Terminal ]";
const CARD_HEIGHT: u16 = 9;
const VERSE_WIDTH: u16 = 40;

pub struct DesktopLayout {
    pub menu_bar: Rect,
    pub card: Rect,
    pub button: Rect,
    pub verse: Option<Rect>,
}

/// Where everything on the desktop goes. Shared by drawing and mouse
/// hit-testing.
pub fn desktop_layout(area: Rect, verse: Option<&Quote>) -> DesktopLayout {
    let menu_bar = Rect { height: area.height.min(1), ..area };
    let body = Rect {
        y: area.y.saturating_add(menu_bar.height),
        height: area.height.saturating_sub(menu_bar.height),
        ..area
    };

    let card = centered_rect_fixed_height(60, CARD_HEIGHT, body);
    let inner = Block::default().borders(Borders::ALL).inner(card);
    let button_width = (BUTTON.width() as u16).min(inner.width);
    let button = Rect {
        x: inner.x + inner.width.saturating_sub(button_width) / 2,
        y: inner.y.saturating_add(5),
        width: button_width,
        height: u16::from(inner.height > 5),
    };

    let verse = verse.and_then(|quote| {
        let width = VERSE_WIDTH.min(body.width / 2);
        if width < 12 {
            return None;
        }
        let text_rows = wrap_text(&quote.text, usize::from(width - 4)).len() as u16;
        let height = (text_rows + 4).min(body.height.saturating_sub(1));
        Some(Rect {
            x: body.right().saturating_sub(width + 2),
            y: body.y.saturating_add(1),
            width,
            height,
        })
    });

    DesktopLayout {
        menu_bar,
        card,
        button,
        verse,
    }
}

pub struct Desktop<'a> {
    pub owner: &'a OwnerCard,
    pub show_verse: bool,
    pub now: DateTime<Local>,
    pub battery: u8,
    pub theme: &'a Theme,
}

impl Widget for Desktop<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let verse = self.owner.verse_of_day.as_ref().filter(|_| self.show_verse);
        let layout = desktop_layout(area, verse);

        Block::default().style(theme.desktop).render(area, buf);

        // --- Menu bar ---
        let right = format!("BAT {}%  {} ", self.battery, self.now.format("%a %H:%M"));
        let mut spans = vec![
            Span::styled(" ◆ ", theme.menu_bar_logo),
            Span::styled("Portfolio  ", theme.menu_bar),
        ];
        let left_width: usize = spans.iter().map(Span::width).sum();
        let padding = usize::from(area.width).saturating_sub(left_width + right.width());
        spans.push(Span::styled(" ".repeat(padding), theme.menu_bar));
        spans.push(Span::styled(right, theme.menu_bar));
        Paragraph::new(Line::from(spans))
            .style(theme.menu_bar)
            .render(layout.menu_bar, buf);

        // --- Owner card ---
        if layout.card.width > 2 && layout.card.height > 2 {
            draw_drop_shadow(buf, layout.card, area);
            Clear.render(layout.card, buf);
            let lines = vec![
                Line::default(),
                Line::styled(self.owner.name.clone(), theme.card_title),
                Line::styled(self.owner.role.clone(), theme.card),
                Line::styled(self.owner.location.clone(), theme.dimmed),
                Line::default(),
                Line::styled(BUTTON, theme.button),
                Line::styled("Enter or t to open", theme.dimmed),
            ];
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .style(theme.card)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(theme.border_focus)
                        .style(theme.card),
                )
                .render(layout.card, buf);
        }

        // --- Verse of the day ---
        if let (Some(quote), Some(rect)) = (verse, layout.verse) {
            Clear.render(rect, buf);
            let mut lines: Vec<Line> = wrap_text(&quote.text, usize::from(rect.width.saturating_sub(4)))
                .into_iter()
                .map(|row| Line::styled(row, theme.quote))
                .collect();
            lines.push(Line::styled(format!("- {}", quote.source), theme.quote_source));
            Paragraph::new(lines)
                .style(theme.card)
                .block(
                    Block::default()
                        .title(Line::from(vec![
                            Span::raw(" "),
                            Span::styled("Daily Verse", theme.card_title),
                            Span::raw(" "),
                        ]))
                        .title_bottom(Line::from(vec![
                            Span::raw(" "),
                            Span::styled("v", theme.footer_key),
                            Span::raw(": hide "),
                        ]))
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(theme.border)
                        .padding(ratatui::widgets::Padding::horizontal(1))
                        .style(theme.card),
                )
                .render(rect, buf);
        }
    }
}
