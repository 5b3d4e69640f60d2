use crate::app::{
    action::Action,
    keymap::KeyMap,
    state::{AppState, View},
    ui,
};
use crate::components::desktop::desktop_layout;
use crate::components::helpers::hit;
use crate::components::suggestions::suggestion_at;
use crossterm::event::{Event, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::layout::{Rect, Size};

const WHEEL_STEP: u16 = 3;

pub fn map_event_to_action(
    event: Event,
    app_state: &AppState<'_>,
    terminal_size: Size,
) -> Option<Action> {
    let area = Rect::new(0, 0, terminal_size.width, terminal_size.height);

    match event {
        Event::Resize(w, h) => Some(Action::Resize(w, h)),
        Event::Key(key) => {
            if key.kind == KeyEventKind::Release {
                return None;
            }
            map_key(key, app_state.view, &app_state.keymap)
        }
        Event::Mouse(mouse) => match (app_state.view, mouse.kind) {
            (View::Terminal, MouseEventKind::ScrollUp) => Some(Action::ScrollUp(WHEEL_STEP)),
            (View::Terminal, MouseEventKind::ScrollDown) => Some(Action::ScrollDown(WHEEL_STEP)),
            (View::Terminal, MouseEventKind::Down(MouseButton::Left)) => {
                let names = app_state.console.suggestions();
                let layout = ui::get_layout(area, !names.is_empty());
                if !hit(layout.suggestions, mouse.column, mouse.row) {
                    return None;
                }
                suggestion_at(names, mouse.column - layout.suggestions.x)
                    .and_then(|i| names.get(i))
                    .map(|name| Action::AcceptSuggestion(name.clone()))
            }
            (View::Desktop, MouseEventKind::Down(MouseButton::Left)) => {
                let (desktop, _) = ui::get_desktop_layout(area);
                let verse = app_state
                    .owner
                    .verse_of_day
                    .as_ref()
                    .filter(|_| app_state.show_verse);
                let layout = desktop_layout(desktop, verse);
                if hit(layout.button, mouse.column, mouse.row) {
                    Some(Action::ShowTerminal)
                } else if layout
                    .verse
                    .is_some_and(|rect| hit(rect, mouse.column, mouse.row))
                {
                    Some(Action::ToggleVerse)
                } else {
                    None
                }
            }
            _ => None,
        },
        _ => None,
    }
}

fn map_key(key: crossterm::event::KeyEvent, view: View, keymap: &KeyMap) -> Option<Action> {
    if let Some(action) = keymap.get_action(key, view) {
        return Some(action);
    }
    match view {
        View::Terminal => Some(Action::TextAreaInput(key)),
        View::Desktop => None,
    }
}
