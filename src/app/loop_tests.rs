use super::*;
use crate::app::action::Action;
use crate::app::command::Command;
use crate::app::state::AppState;
use crate::domain::history::RecordId;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use rand::{Rng, SeedableRng};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::time::Duration;
use tokio::sync::mpsc;

fn key(code: KeyCode) -> Result<Event, std::io::Error> {
    Ok(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
}

fn ctrl_c() -> Result<Event, std::io::Error> {
    Ok(Event::Key(KeyEvent::new(
        KeyCode::Char('c'),
        KeyModifiers::CONTROL,
    )))
}

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

#[tokio::test]
async fn test_delay_command_sends_action_later() {
    let (tx, mut rx) = mpsc::channel(1);
    let id = RecordId(7);

    handle_command(
        Command::Delay(
            Duration::from_millis(20),
            Box::new(Action::ResolvePending(id)),
        ),
        tx,
    );

    assert!(rx.try_recv().is_err());
    let action = tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("delayed action never arrived");
    assert_eq!(action, Some(Action::ResolvePending(id)));
}

#[tokio::test]
async fn test_delay_after_receiver_dropped_is_harmless() {
    let (tx, rx) = mpsc::channel(1);
    drop(rx);
    handle_command(
        Command::Delay(Duration::from_millis(1), Box::new(Action::Tick)),
        tx,
    );
    tokio::time::sleep(Duration::from_millis(20)).await;
}

#[tokio::test]
async fn test_submitted_command_resolves_on_screen() {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    let app_state = AppState::for_tests();
    let (event_tx, event_rx) = mpsc::channel(100);

    let feeder = tokio::spawn(async move {
        for c in "about".chars() {
            event_tx.send(key(KeyCode::Char(c))).await.unwrap();
        }
        event_tx.send(key(KeyCode::Enter)).await.unwrap();
        // Long enough for the resolution timer to fire and redraw.
        tokio::time::sleep(Duration::from_millis(300)).await;
        event_tx.send(ctrl_c()).await.unwrap();
    });

    tokio::time::timeout(
        Duration::from_secs(10),
        run_loop_with_events(&mut terminal, app_state, event_rx),
    )
    .await
    .expect("loop did not stop")
    .unwrap();
    feeder.await.unwrap();

    let text = screen_text(&terminal);
    assert!(text.contains("mucyo@portfolio-terminal:~$ about"));
    assert!(text.contains("About MUCYO Prince"));
    assert!(!text.contains("processing..."));
}

#[tokio::test]
async fn test_exit_command_stops_the_loop() {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let app_state = AppState::for_tests();
    let (event_tx, event_rx) = mpsc::channel(100);

    for c in "exit".chars() {
        event_tx.send(key(KeyCode::Char(c))).await.unwrap();
    }
    event_tx.send(key(KeyCode::Enter)).await.unwrap();

    // Keep the sender alive; only the delayed quit may end the loop.
    let result = tokio::time::timeout(
        Duration::from_secs(10),
        run_loop_with_events(&mut terminal, app_state, event_rx),
    )
    .await;
    drop(event_tx);

    match result {
        Ok(res) => res.unwrap(),
        Err(_) => panic!("exit never quit the loop"),
    }
}

#[tokio::test]
async fn test_event_source_error_is_returned() {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let (event_tx, event_rx) = mpsc::channel(1);
    event_tx
        .send(Err(std::io::Error::other("tty gone")))
        .await
        .unwrap();

    let result = run_loop_with_events(&mut terminal, AppState::for_tests(), event_rx).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_keystroke_fuzzing() {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let app_state = AppState::for_tests();

    let (event_tx, event_rx) = mpsc::channel(100);

    // Spawn a task to feed random events
    let fuzzer_handle = tokio::spawn(async move {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        let words = ["help", "about", "clear", "mac", "home", "xyz123", "quote", "date"];
        for _ in 0..10000 {
            let event = match rng.gen_range(0..100) {
                0..=5 => {
                    let w = rng.gen_range(10..200);
                    let h = rng.gen_range(10..100);
                    Event::Resize(w, h)
                }
                6..=15 => generate_random_mouse(&mut rng, ratatui::layout::Size::new(80, 24)),
                16..=18 => {
                    // Whole commands so the pending/resolve path gets exercised.
                    let word = words[rng.gen_range(0..words.len())];
                    for c in word.chars() {
                        if event_tx.send(key(KeyCode::Char(c))).await.is_err() {
                            return;
                        }
                    }
                    Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
                }
                _ => generate_random_key(&mut rng),
            };
            if event_tx.send(Ok(event)).await.is_err() {
                break;
            }
            // Yield to allow the loop to process events
            if rng.gen_bool(0.1) {
                tokio::task::yield_now().await;
            }
        }
        // Back to the shell, then quit
        let _ = event_tx.send(key(KeyCode::Char('t'))).await;
        let _ = event_tx.send(ctrl_c()).await;
    });

    // Run the real loop (with a test backend)
    let result = tokio::time::timeout(
        std::time::Duration::from_secs(30),
        run_loop_with_events(&mut terminal, app_state, event_rx),
    )
    .await;

    match result {
        Ok(res) => res.unwrap(),
        Err(_) => panic!("Fuzzer timed out - possible deadlock or too slow"),
    }

    fuzzer_handle.await.unwrap();
}

fn generate_random_key<R: Rng>(rng: &mut R) -> Event {
    let code = match rng.gen_range(0..22) {
        0 => KeyCode::Esc,
        1 => KeyCode::Enter,
        2 => KeyCode::Left,
        3 => KeyCode::Right,
        4 => KeyCode::Up,
        5 => KeyCode::Down,
        6 => KeyCode::Home,
        7 => KeyCode::End,
        8 => KeyCode::PageUp,
        9 => KeyCode::PageDown,
        10 => KeyCode::Tab,
        11 => KeyCode::BackTab,
        12 => KeyCode::Delete,
        13 => KeyCode::Backspace,
        14 => KeyCode::F(2),
        _ => {
            let c = rng.gen_range(b' '..=b'~') as char;
            KeyCode::Char(c)
        }
    };

    let mut modifiers = KeyModifiers::empty();
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::CONTROL);
    }
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::ALT);
    }
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::SHIFT);
    }
    // Keep the quit chords for the end of the run.
    if matches!(code, KeyCode::Char('c' | 'd')) {
        modifiers.remove(KeyModifiers::CONTROL);
    }

    Event::Key(KeyEvent::new(code, modifiers))
}

fn generate_random_mouse<R: Rng>(rng: &mut R, size: ratatui::layout::Size) -> Event {
    use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
    let kind = match rng.gen_range(0..5) {
        0 => MouseEventKind::Down(MouseButton::Left),
        1 => MouseEventKind::Down(MouseButton::Right),
        2 => MouseEventKind::ScrollUp,
        3 => MouseEventKind::ScrollDown,
        _ => MouseEventKind::Moved,
    };

    let column = rng.gen_range(0..size.width);
    let row = rng.gen_range(0..size.height);

    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::empty(),
    })
}
