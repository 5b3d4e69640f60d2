use crate::domain::output::Output;
use chrono::{DateTime, Local};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(pub u64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    /// The greeting seeded at startup. Never part of command navigation.
    Welcome,
    Command,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRecord {
    pub id: RecordId,
    pub command: String,
    /// `None` while the command is pending.
    pub output: Option<Output>,
    pub submitted_at: DateTime<Local>,
    pub kind: RecordKind,
}

impl HistoryRecord {
    pub fn is_pending(&self) -> bool {
        self.output.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HistoryError {
    #[error("no history record {0}")]
    UnknownRecord(RecordId),
    #[error("history record {0} is already resolved")]
    AlreadyResolved(RecordId),
}

/// Ordered log of submitted commands and their outputs.
///
/// Navigation cursors count from the newest command: `Some(0)` is the
/// most recent submission, `None` is the fresh input line.
#[derive(Debug, Clone, Default)]
pub struct HistoryBuffer {
    records: Vec<HistoryRecord>,
    next_id: u64,
}

impl HistoryBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate_id(&mut self) -> RecordId {
        let id = RecordId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn append(&mut self, command: &str) -> RecordId {
        let id = self.allocate_id();
        self.records.push(HistoryRecord {
            id,
            command: command.to_string(),
            output: None,
            submitted_at: Local::now(),
            kind: RecordKind::Command,
        });
        id
    }

    pub fn resolve(&mut self, id: RecordId, output: Output) -> Result<(), HistoryError> {
        // Records are appended in id order, so a binary search finds them.
        let idx = self
            .records
            .binary_search_by_key(&id, |r| r.id)
            .map_err(|_| HistoryError::UnknownRecord(id))?;
        let record = &mut self.records[idx];
        if !record.is_pending() {
            return Err(HistoryError::AlreadyResolved(id));
        }
        record.output = Some(output);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn reset_to_welcome(&mut self, welcome: Output) {
        self.records.clear();
        let id = self.allocate_id();
        self.records.push(HistoryRecord {
            id,
            command: String::new(),
            output: Some(welcome),
            submitted_at: Local::now(),
            kind: RecordKind::Welcome,
        });
    }

    pub fn records(&self) -> &[HistoryRecord] {
        &self.records
    }

    pub fn get(&self, id: RecordId) -> Option<&HistoryRecord> {
        self.records
            .binary_search_by_key(&id, |r| r.id)
            .ok()
            .map(|idx| &self.records[idx])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn pending(&self) -> impl Iterator<Item = &HistoryRecord> {
        self.records.iter().filter(|r| r.is_pending())
    }

    /// Submitted command texts, oldest first, without the welcome record.
    pub fn commands(&self) -> Vec<&str> {
        self.records
            .iter()
            .filter(|r| r.kind == RecordKind::Command)
            .map(|r| r.command.as_str())
            .collect()
    }

    fn command_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.kind == RecordKind::Command)
            .count()
    }

    /// Step toward older commands, stopping at the oldest.
    pub fn previous(&self, cursor: Option<usize>) -> Option<usize> {
        let count = self.command_count();
        if count == 0 {
            return None;
        }
        match cursor {
            None => Some(0),
            Some(i) if i + 1 < count => Some(i + 1),
            Some(_) => Some(count - 1),
        }
    }

    /// Step toward newer commands; past the newest is the fresh line.
    pub fn next(&self, cursor: Option<usize>) -> Option<usize> {
        match cursor {
            Some(i) if i > 0 => Some((i - 1).min(self.command_count().saturating_sub(1))),
            _ => None,
        }
    }

    pub fn command_at(&self, cursor: usize) -> Option<&str> {
        self.records
            .iter()
            .rev()
            .filter(|r| r.kind == RecordKind::Command)
            .nth(cursor)
            .map(|r| r.command.as_str())
    }
}
