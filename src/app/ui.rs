use crate::app::state::{AppState, View};
use crate::components::desktop::Desktop;
use crate::components::footer::Footer;
use crate::components::status_bar::StatusBar;
use crate::components::suggestions::Suggestions;
use crate::components::terminal_view::{max_scroll, prompt_spans, prompt_width, TerminalView};

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

pub struct AppLayout {
    pub status: Rect,
    pub window: Rect,
    pub history: Rect,
    pub suggestions: Rect,
    pub prompt: Rect,
    pub footer: Rect,
}

pub fn get_layout(area: Rect, show_suggestions: bool) -> AppLayout {
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Status bar
            Constraint::Min(0),    // Terminal window
            Constraint::Length(1), // Footer
        ])
        .split(area);

    let inner = Block::default().borders(Borders::ALL).inner(main[1]);
    let body = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),                              // History
            Constraint::Length(u16::from(show_suggestions)), // Suggestions
            Constraint::Length(1),                           // Prompt
        ])
        .split(inner);

    AppLayout {
        status: main[0],
        window: main[1],
        history: body[0],
        suggestions: body[1],
        prompt: body[2],
        footer: main[2],
    }
}

/// Desktop area and footer.
pub fn get_desktop_layout(area: Rect) -> (Rect, Rect) {
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    (main[0], main[1])
}

pub fn draw(f: &mut Frame, app_state: &mut AppState) {
    if f.area().width == 0 || f.area().height == 0 {
        return;
    }
    let theme = app_state.theme.clone();

    if app_state.view == View::Desktop {
        let (desktop, footer) = get_desktop_layout(f.area());
        f.render_widget(
            Desktop {
                owner: &app_state.owner,
                show_verse: app_state.show_verse,
                now: app_state.status.now,
                battery: app_state.status.battery_percent(),
                theme: &theme,
            },
            desktop,
        );
        f.render_widget(
            Footer {
                state: app_state,
                theme: &theme,
            },
            footer,
        );
        return;
    }

    let show_suggestions = !app_state.console.suggestions().is_empty();
    let layout = get_layout(f.area(), show_suggestions);

    // --- Status bar ---
    f.render_widget(
        StatusBar {
            status: &app_state.status,
            prompt: &app_state.prompt,
            theme: &theme,
        },
        layout.status,
    );

    // --- Window ---
    let window = Block::default()
        .title(Line::from(vec![
            Span::raw(" "),
            Span::styled("●", theme.error),
            Span::raw(" "),
            Span::styled("●", theme.spinner),
            Span::raw(" "),
            Span::styled("●", theme.border_focus),
            Span::raw(" "),
            Span::styled(
                format!(" {}-Portfolio-Terminal ", app_state.owner.name.replace(' ', "-")),
                theme.title,
            ),
            Span::raw(" "),
        ]))
        .title_bottom(Line::from(vec![
            Span::raw(" "),
            Span::styled(app_state.owner.location.clone(), theme.dimmed),
            Span::raw(" "),
        ]))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border_focus)
        .style(theme.card);
    f.render_widget(window, layout.window);

    // --- History ---
    let blocks = app_state.history_cache.rows(
        app_state.console.history().records(),
        &app_state.prompt,
        &theme,
        app_state.palette_type,
        layout.history.width,
        app_state.frame_count,
    );
    let view = TerminalView {
        blocks: &blocks,
        scroll: app_state.scroll,
    };
    app_state.scroll = app_state
        .scroll
        .min(max_scroll(view.total_rows(), layout.history.height));
    f.render_widget(
        TerminalView {
            scroll: app_state.scroll,
            ..view
        },
        layout.history,
    );

    // --- Suggestions ---
    if show_suggestions {
        f.render_widget(
            Suggestions {
                names: app_state.console.suggestions(),
                theme: &theme,
            },
            layout.suggestions,
        );
    }

    // --- Prompt ---
    let prompt_cols = prompt_width(&app_state.prompt).min(layout.prompt.width);
    let prompt_area = Rect {
        width: prompt_cols,
        ..layout.prompt
    };
    let input_area = Rect {
        x: layout.prompt.x + prompt_cols,
        width: layout.prompt.width - prompt_cols,
        ..layout.prompt
    };
    f.render_widget(
        Paragraph::new(Line::from(prompt_spans(&app_state.prompt, &theme))),
        prompt_area,
    );

    let text_area = &mut app_state.input.text_area;
    text_area.set_style(theme.input);
    text_area.set_cursor_style(if app_state.status.cursor_visible {
        theme.cursor
    } else {
        theme.input
    });
    text_area.set_placeholder_style(theme.dimmed);
    text_area.set_placeholder_text(if app_state.console.is_pending() {
        "Processing command..."
    } else {
        "Type a command... (try 'help')"
    });
    f.render_widget(&app_state.input.text_area, input_area);

    // --- Footer ---
    f.render_widget(
        Footer {
            state: app_state,
            theme: &theme,
        },
        layout.footer,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buf = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn layout_reserves_suggestion_row_only_when_needed() {
        let area = Rect::new(0, 0, 80, 24);
        let without = get_layout(area, false);
        assert_eq!(without.suggestions.height, 0);
        assert_eq!(without.prompt.y, 21);

        let with = get_layout(area, true);
        assert_eq!(with.suggestions.height, 1);
        assert_eq!(with.suggestions.y, 20);
        assert_eq!(with.history.height, without.history.height - 1);
    }

    #[test]
    fn draws_welcome_and_prompt() {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let mut state = AppState::for_tests();
        terminal.draw(|f| draw(f, &mut state)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("ONLINE"));
        assert!(text.contains("mucyo@portfolio-terminal:~$"));
        assert!(text.contains("try 'help'"));
    }

    #[test]
    fn scroll_is_clamped_on_draw() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut state = AppState::for_tests();
        state.scroll = u16::MAX;
        terminal.draw(|f| draw(f, &mut state)).unwrap();
        assert!(state.scroll < u16::MAX);
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        for (w, h) in [(1, 1), (3, 2), (10, 3), (200, 2)] {
            let mut terminal = Terminal::new(TestBackend::new(w, h)).unwrap();
            let mut state = AppState::for_tests();
            state.console.update_input("h");
            terminal.draw(|f| draw(f, &mut state)).unwrap();
            state.view = View::Desktop;
            terminal.draw(|f| draw(f, &mut state)).unwrap();
        }
    }
}
