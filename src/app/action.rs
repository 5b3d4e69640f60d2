use crate::domain::history::RecordId;
use crossterm::event::KeyEvent;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Resize(u16, u16),
    Quit,

    // --- Prompt ---
    TextAreaInput(KeyEvent),
    Submit,
    Complete,
    HistoryBack,
    HistoryForward,
    CancelLine,
    AcceptSuggestion(String),

    // --- Output ---
    ScrollUp(u16),
    ScrollDown(u16),

    // --- Console timers ---
    ResolvePending(RecordId),

    // --- Views ---
    ShowDesktop,
    ShowTerminal,
    GoHome,
    ToggleVerse,
    CycleTheme,
}

impl Action {
    /// Actions that change the prompt line.
    pub fn edits_line(&self) -> bool {
        matches!(
            self,
            Action::TextAreaInput(_)
                | Action::Complete
                | Action::HistoryBack
                | Action::HistoryForward
                | Action::CancelLine
                | Action::AcceptSuggestion(_)
        )
    }
}
