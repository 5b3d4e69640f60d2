use super::action::Action;
use super::state::View;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

pub const SCROLL_PAGE: u16 = 10;

pub struct KeyMap {
    // View -> (Key -> Action). Keys not found in the terminal map go to
    // the line editor.
    pub terminal: HashMap<KeyEvent, Action>,
    pub desktop: HashMap<KeyEvent, Action>,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyMap {
    pub fn new() -> Self {
        let mut terminal = HashMap::new();
        let mut desktop = HashMap::new();

        // --- Terminal ---
        terminal.insert(key(KeyCode::Enter), Action::Submit);
        terminal.insert(key(KeyCode::Tab), Action::Complete);
        terminal.insert(key(KeyCode::Up), Action::HistoryBack);
        terminal.insert(key(KeyCode::Down), Action::HistoryForward);
        terminal.insert(key(KeyCode::Esc), Action::CancelLine);
        terminal.insert(key(KeyCode::PageUp), Action::ScrollUp(SCROLL_PAGE));
        terminal.insert(key(KeyCode::PageDown), Action::ScrollDown(SCROLL_PAGE));
        terminal.insert(key(KeyCode::F(2)), Action::CycleTheme);
        terminal.insert(ctrl('c'), Action::Quit);
        terminal.insert(ctrl('d'), Action::Quit);

        // --- Desktop ---
        desktop.insert(key(KeyCode::Enter), Action::ShowTerminal);
        desktop.insert(plain('t'), Action::ShowTerminal);
        desktop.insert(plain('v'), Action::ToggleVerse);
        desktop.insert(plain('q'), Action::Quit);
        desktop.insert(key(KeyCode::Esc), Action::Quit);
        desktop.insert(key(KeyCode::F(2)), Action::CycleTheme);
        desktop.insert(ctrl('c'), Action::Quit);

        Self { terminal, desktop }
    }

    pub fn get_action(&self, event: KeyEvent, view: View) -> Option<Action> {
        // Strip kind/state so lookups match the keys inserted above.
        let event = KeyEvent::new(event.code, event.modifiers);
        match view {
            View::Terminal => self.terminal.get(&event).cloned(),
            View::Desktop => self.desktop.get(&event).cloned(),
        }
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

fn plain(c: char) -> KeyEvent {
    key(KeyCode::Char(c))
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}
