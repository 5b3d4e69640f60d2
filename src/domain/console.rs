//! The interpreter loop behind the fake shell.
//!
//! `Console` is a small state machine: `Idle` until a non-empty line is
//! submitted, then `Pending` until the caller reports that the simulated
//! processing delay elapsed. Timers live outside; `submit` only says how
//! long to wait and `resolve` is called when the wait is over. `clear`
//! skips the pending stage entirely.

use crate::domain::chime::Chime;
use crate::domain::history::{HistoryBuffer, RecordId};
use crate::domain::latency::LatencySource;
use crate::domain::output::Output;
use crate::domain::registry::{Registry, ViewHook};
use crate::domain::suggest::{completion, suggest, Completion};
use std::sync::Arc;
use std::time::Duration;

pub const CLEAR_COMMAND: &str = "clear";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Pending { id: RecordId },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Blank line; nothing happened.
    Ignored,
    /// A command is already pending; the line was left untouched.
    Rejected,
    /// History wiped synchronously.
    Cleared,
    /// A pending record exists; call `resolve(id)` after `delay`.
    Scheduled { id: RecordId, delay: Duration },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Back,
    Forward,
}

pub struct Console {
    registry: Arc<Registry>,
    history: HistoryBuffer,
    welcome: Output,
    input: String,
    cursor: Option<usize>,
    suggestions: Vec<String>,
    phase: Phase,
    latency: Box<dyn LatencySource>,
    chime: Box<dyn Chime>,
}

impl Console {
    pub fn new(
        registry: Arc<Registry>,
        welcome: Output,
        latency: Box<dyn LatencySource>,
        chime: Box<dyn Chime>,
    ) -> Self {
        let mut history = HistoryBuffer::new();
        history.reset_to_welcome(welcome.clone());
        Self {
            registry,
            history,
            welcome,
            input: String::new(),
            cursor: None,
            suggestions: Vec::new(),
            phase: Phase::Idle,
            latency,
            chime,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.phase, Phase::Pending { .. })
    }

    pub fn submit(&mut self, raw: &str) -> Submission {
        let command = raw.trim().to_lowercase();
        if command.is_empty() {
            return Submission::Ignored;
        }
        if let Phase::Pending { id } = self.phase {
            log::debug!("rejecting {command:?}: {id} still pending");
            return Submission::Rejected;
        }

        self.reset_line();

        if command == CLEAR_COMMAND {
            self.history.clear();
            self.ring();
            return Submission::Cleared;
        }

        let id = self.history.append(&command);
        let delay = self.latency.next_delay();
        self.phase = Phase::Pending { id };
        log::debug!("submitted {command:?} as {id}, resolving in {delay:?}");
        Submission::Scheduled { id, delay }
    }

    /// Finish the pending command. Ids that are not the pending one are
    /// ignored, so a late or repeated timer cannot disturb the history.
    pub fn resolve(&mut self, id: RecordId) -> Option<ViewHook> {
        if self.phase != (Phase::Pending { id }) {
            log::debug!("ignoring resolution of {id}: not pending");
            return None;
        }
        self.phase = Phase::Idle;

        let command = self.history.get(id)?.command.clone();
        let (output, hook) = match self.registry.lookup(&command) {
            Some(entry) => (entry.produce(), entry.hook),
            None => (Output::not_found(&command), None),
        };

        if let Err(e) = self.history.resolve(id, output) {
            log::warn!("could not resolve {id}: {e}");
            return None;
        }
        self.ring();
        hook
    }

    /// Drop everything and show the welcome screen again.
    pub fn go_home(&mut self) {
        self.history.reset_to_welcome(self.welcome.clone());
        self.phase = Phase::Idle;
        self.cursor = None;
    }

    pub fn update_input(&mut self, text: &str) {
        self.input = text.to_string();
        self.suggestions = suggest(&self.registry, text);
        if text.is_empty() {
            self.cursor = None;
        }
    }

    pub fn accept_suggestion(&mut self, choice: &str) {
        self.input = choice.to_string();
        self.suggestions.clear();
    }

    /// Tab completion. Never picks among ambiguous matches.
    pub fn complete(&mut self) {
        let matches = suggest(&self.registry, &self.input);
        match completion(&matches) {
            Completion::Complete(name) => {
                self.input = name;
                self.suggestions.clear();
            }
            Completion::Partial(prefix) => {
                if prefix.chars().count() > self.input.trim().chars().count() {
                    self.input = prefix;
                }
                self.suggestions = matches;
            }
            Completion::None => {}
        }
    }

    pub fn navigate_history(&mut self, direction: Direction) {
        let cursor = match direction {
            Direction::Back => self.history.previous(self.cursor),
            Direction::Forward => self.history.next(self.cursor),
        };
        if cursor == self.cursor {
            return;
        }

        self.cursor = cursor;
        self.input = cursor
            .and_then(|c| self.history.command_at(c))
            .unwrap_or_default()
            .to_string();
        self.suggestions.clear();
    }

    pub fn cancel_line(&mut self) {
        self.input.clear();
        self.suggestions.clear();
        self.cursor = None;
    }

    fn reset_line(&mut self) {
        self.input.clear();
        self.suggestions.clear();
        self.cursor = None;
    }

    fn ring(&mut self) {
        if let Err(e) = self.chime.ring() {
            log::debug!("chime failed: {e}");
        }
    }
}
