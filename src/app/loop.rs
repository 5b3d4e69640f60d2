use crate::app::{
    action::Action, command::Command, input::map_event_to_action, reducer, state::AppState, ui,
};

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::interval;

const TICK_RATE: Duration = Duration::from_millis(250);

pub async fn run_loop<B: Backend>(terminal: &mut Terminal<B>, app_state: AppState<'_>) -> Result<()> {
    // User input channel
    let (event_tx, event_rx) = mpsc::channel(100);
    tokio::task::spawn_blocking(move || loop {
        match event::read() {
            Ok(evt) => {
                if event_tx.blocking_send(Ok(evt)).is_err() {
                    break;
                }
            }
            Err(e) => {
                let _ = event_tx.blocking_send(Err(e));
                break;
            }
        }
    });

    run_loop_with_events(terminal, app_state, event_rx).await
}

pub async fn run_loop_with_events<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app_state: AppState<'_>,
    mut event_rx: mpsc::Receiver<Result<Event, std::io::Error>>,
) -> Result<()> {
    let (action_tx, mut action_rx) = mpsc::channel(100);
    let mut interval = interval(TICK_RATE);

    loop {
        // --- 1. Render ---
        terminal.draw(|f| {
            ui::draw(f, &mut app_state);
        })?;

        // --- 2. Event Handling ---
        let action = tokio::select! {
            _ = interval.tick() => Some(Action::Tick),

            // User Input
            Some(res) = event_rx.recv() => {
                let event = res?;
                map_event_to_action(event, &app_state, terminal.size()?)
            },

            // Timers
            Some(a) = action_rx.recv() => Some(a),
        };

        // --- 3. Update ---
        if let Some(action) = action {
            if let Action::Quit = action {
                break;
            }

            let command = reducer::update(&mut app_state, action);
            if app_state.should_quit {
                break;
            }

            if let Some(cmd) = command {
                handle_command(cmd, action_tx.clone());
            }
        }
    }

    Ok(())
}

pub(crate) fn handle_command(command: Command, tx: mpsc::Sender<Action>) {
    match command {
        Command::Delay(delay, action) => {
            tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                // The loop may already be gone; nothing to do then.
                let _ = tx.send(*action).await;
            });
        }
    }
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod tests;
