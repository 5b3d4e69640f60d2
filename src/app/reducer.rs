use super::{
    action::Action,
    command::Command,
    state::{AppState, View},
};
use crate::domain::console::{Direction, Submission};
use crate::domain::registry::ViewHook;
use std::time::{Duration, Instant};

/// Pause between a view command's output and the switch it asks for.
pub const DESKTOP_DELAY: Duration = Duration::from_millis(500);
pub const HOME_DELAY: Duration = Duration::from_millis(600);
pub const QUIT_DELAY: Duration = Duration::from_millis(400);

pub fn update(state: &mut AppState, action: Action) -> Option<Command> {
    // The prompt is locked while a command is processing.
    if action.edits_line() && state.console.is_pending() {
        log::trace!("dropping {action:?} while a command is pending");
        return None;
    }
    match action {
        // --- System ---
        Action::Tick => {
            state.frame_count = state.frame_count.wrapping_add(1);
            state.status.tick(Instant::now());
        }
        Action::Resize(_, _) => {}
        Action::Quit => state.should_quit = true,

        // --- Prompt ---
        Action::TextAreaInput(key) => {
            if state.view != View::Terminal {
                return None;
            }
            state.input.text_area.input(key);
            let text = state.input.text();
            if state.input.is_multiline() {
                state.input.set_text(&text);
            }
            state.console.update_input(&text);
        }
        Action::Submit => {
            let line = state.input.text();
            let submission = state.console.submit(&line);
            sync_input(state);
            match submission {
                Submission::Scheduled { id, delay } => {
                    state.scroll = 0;
                    return Some(Command::Delay(
                        delay,
                        Box::new(Action::ResolvePending(id)),
                    ));
                }
                Submission::Cleared => state.scroll = 0,
                Submission::Ignored | Submission::Rejected => {}
            }
        }
        Action::Complete => {
            state.console.complete();
            sync_input(state);
        }
        Action::HistoryBack => {
            state.console.navigate_history(Direction::Back);
            sync_input(state);
        }
        Action::HistoryForward => {
            state.console.navigate_history(Direction::Forward);
            sync_input(state);
        }
        Action::CancelLine => {
            state.console.cancel_line();
            sync_input(state);
        }
        Action::AcceptSuggestion(name) => {
            state.console.accept_suggestion(&name);
            sync_input(state);
        }

        // --- Output ---
        Action::ScrollUp(amount) => state.scroll = state.scroll.saturating_add(amount),
        Action::ScrollDown(amount) => state.scroll = state.scroll.saturating_sub(amount),

        // --- Console timers ---
        Action::ResolvePending(id) => {
            let hook = state.console.resolve(id);
            state.scroll = 0;
            return hook.and_then(|hook| apply_hook(state, hook));
        }

        // --- Views ---
        Action::ShowDesktop => state.view = View::Desktop,
        Action::ShowTerminal => state.view = View::Terminal,
        Action::GoHome => {
            state.console.go_home();
            sync_input(state);
            state.scroll = 0;
        }
        Action::ToggleVerse => state.show_verse = !state.show_verse,
        Action::CycleTheme => state.set_palette(state.palette_type.next()),
    }
    None
}

fn apply_hook(state: &mut AppState, hook: ViewHook) -> Option<Command> {
    log::debug!("applying view hook {hook:?}");
    match hook {
        ViewHook::ShowDesktop => Some(Command::Delay(DESKTOP_DELAY, Box::new(Action::ShowDesktop))),
        ViewHook::ShowTerminal => {
            state.view = View::Terminal;
            None
        }
        ViewHook::Home => Some(Command::Delay(HOME_DELAY, Box::new(Action::GoHome))),
        ViewHook::Quit => Some(Command::Delay(QUIT_DELAY, Box::new(Action::Quit))),
    }
}

/// The console owns the line; the text area mirrors it.
fn sync_input(state: &mut AppState) {
    if state.input.text() != state.console.input() {
        let text = state.console.input().to_string();
        state.input.set_text(&text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::console::Phase;
    use crate::theme::PaletteType;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn type_line(state: &mut AppState, line: &str) {
        for c in line.chars() {
            update(
                state,
                Action::TextAreaInput(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)),
            );
        }
    }

    /// Submit `line` and fire its resolution immediately.
    fn run(state: &mut AppState, line: &str) -> Option<Command> {
        type_line(state, line);
        match update(state, Action::Submit) {
            Some(Command::Delay(_, action)) => update(state, *action),
            other => other,
        }
    }

    #[test]
    fn typing_feeds_console_and_suggestions() {
        let mut state = AppState::for_tests();
        type_line(&mut state, "ab");
        assert_eq!(state.console.input(), "ab");
        assert_eq!(state.console.suggestions(), ["about"]);
    }

    #[test]
    fn submit_schedules_resolution() {
        let mut state = AppState::for_tests();
        type_line(&mut state, "about");
        let Some(Command::Delay(_, action)) = update(&mut state, Action::Submit) else {
            panic!("expected a delayed resolution");
        };
        let Action::ResolvePending(id) = *action else {
            panic!("expected ResolvePending, got {action:?}");
        };
        assert_eq!(state.console.phase(), Phase::Pending { id });
        assert_eq!(state.input.text(), "");

        assert_eq!(update(&mut state, Action::ResolvePending(id)), None);
        assert_eq!(state.console.phase(), Phase::Idle);
    }

    #[test]
    fn prompt_is_locked_while_pending() {
        let mut state = AppState::for_tests();
        type_line(&mut state, "about");
        let Some(Command::Delay(_, resolve)) = update(&mut state, Action::Submit) else {
            panic!("submit should schedule a resolution");
        };

        type_line(&mut state, "skills");
        update(&mut state, Action::HistoryBack);
        update(&mut state, Action::AcceptSuggestion("help".into()));
        assert_eq!(state.input.text(), "");
        assert_eq!(state.console.input(), "");
        assert_eq!(update(&mut state, Action::Submit), None);

        update(&mut state, *resolve);
        type_line(&mut state, "skills");
        assert_eq!(state.input.text(), "skills");
    }

    #[test]
    fn clear_empties_history_without_command() {
        let mut state = AppState::for_tests();
        run(&mut state, "about");
        type_line(&mut state, "clear");
        assert_eq!(update(&mut state, Action::Submit), None);
        assert!(state.console.history().is_empty());
    }

    #[test]
    fn mac_switches_view_after_a_pause() {
        let mut state = AppState::for_tests();
        let command = run(&mut state, "mac");
        assert_eq!(
            command,
            Some(Command::Delay(DESKTOP_DELAY, Box::new(Action::ShowDesktop)))
        );
        assert_eq!(state.view, View::Terminal);
        update(&mut state, Action::ShowDesktop);
        assert_eq!(state.view, View::Desktop);
    }

    #[test]
    fn terminal_switches_back_immediately() {
        let mut state = AppState::for_tests();
        type_line(&mut state, "terminal");
        let Some(Command::Delay(_, action)) = update(&mut state, Action::Submit) else {
            panic!("expected a delayed resolution");
        };
        state.view = View::Desktop;
        assert_eq!(update(&mut state, *action), None);
        assert_eq!(state.view, View::Terminal);
    }

    #[test]
    fn home_resets_to_welcome() {
        let mut state = AppState::for_tests();
        run(&mut state, "about");
        let command = run(&mut state, "home");
        assert_eq!(
            command,
            Some(Command::Delay(HOME_DELAY, Box::new(Action::GoHome)))
        );
        update(&mut state, Action::GoHome);
        assert_eq!(state.console.history().len(), 1);
        assert!(state.console.history().commands().is_empty());
    }

    #[test]
    fn exit_quits_after_a_pause() {
        let mut state = AppState::for_tests();
        let Some(Command::Delay(_, action)) = run(&mut state, "exit") else {
            panic!("expected a delayed quit");
        };
        update(&mut state, *action);
        assert!(state.should_quit);
    }

    #[test]
    fn history_keys_recall_commands() {
        let mut state = AppState::for_tests();
        run(&mut state, "about");
        run(&mut state, "skills");
        update(&mut state, Action::HistoryBack);
        assert_eq!(state.input.text(), "skills");
        update(&mut state, Action::HistoryBack);
        assert_eq!(state.input.text(), "about");
        update(&mut state, Action::HistoryForward);
        assert_eq!(state.input.text(), "skills");
        update(&mut state, Action::CancelLine);
        assert_eq!(state.input.text(), "");
    }

    #[test]
    fn tab_completes_unique_prefix() {
        let mut state = AppState::for_tests();
        type_line(&mut state, "sk");
        update(&mut state, Action::Complete);
        assert_eq!(state.input.text(), "skills");
        assert_eq!(state.input.text_area.cursor(), (0, 6));
    }

    #[test]
    fn accept_suggestion_fills_line() {
        let mut state = AppState::for_tests();
        type_line(&mut state, "h");
        update(&mut state, Action::AcceptSuggestion("home".into()));
        assert_eq!(state.input.text(), "home");
        assert!(state.console.suggestions().is_empty());
    }

    #[test]
    fn scrolling_saturates_and_resets_on_submit() {
        let mut state = AppState::for_tests();
        update(&mut state, Action::ScrollDown(5));
        assert_eq!(state.scroll, 0);
        update(&mut state, Action::ScrollUp(10));
        assert_eq!(state.scroll, 10);
        type_line(&mut state, "about");
        update(&mut state, Action::Submit);
        assert_eq!(state.scroll, 0);
    }

    #[test]
    fn theme_cycles() {
        let mut state = AppState::for_tests();
        assert_eq!(state.palette_type, PaletteType::CatppuccinMocha);
        update(&mut state, Action::CycleTheme);
        assert_eq!(state.palette_type, PaletteType::Nord);
        assert_eq!(state.theme, crate::theme::Theme::from_palette_type(PaletteType::Nord));
    }

    #[test]
    fn typing_is_ignored_on_desktop() {
        let mut state = AppState::for_tests().with_view(View::Desktop);
        type_line(&mut state, "ab");
        assert_eq!(state.console.input(), "");
        update(&mut state, Action::ToggleVerse);
        assert!(!state.show_verse);
    }
}
