use crate::components::output::{render_output, wrap_text};
use crate::content::Prompt;
use crate::domain::history::{HistoryRecord, RecordId, RecordKind};
use crate::theme::{PaletteType, Theme};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use unicode_width::UnicodeWidthStr;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn spinner_frame(frame_count: u64) -> &'static str {
    SPINNER[(frame_count % SPINNER.len() as u64) as usize]
}

pub fn prompt_spans(prompt: &Prompt, theme: &Theme) -> Vec<Span<'static>> {
    vec![
        Span::styled(format!("{}@{}", prompt.user, prompt.host), theme.prompt_user),
        Span::styled(":~$", theme.prompt_path),
        Span::raw(" "),
    ]
}

pub fn prompt_width(prompt: &Prompt) -> u16 {
    let len = prompt.to_string().width() + 1;
    u16::try_from(len).unwrap_or(u16::MAX)
}

/// One history record as display rows: the echoed prompt line (not for
/// the welcome record), then the output or a spinner while pending.
pub fn record_lines(
    record: &HistoryRecord,
    prompt: &Prompt,
    theme: &Theme,
    width: u16,
    frame_count: u64,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    if record.kind == RecordKind::Command {
        let prompt_len = usize::from(prompt_width(prompt));
        let command_width = usize::from(width).saturating_sub(prompt_len).max(1);
        for (i, chunk) in wrap_text(&record.command, command_width)
            .into_iter()
            .enumerate()
        {
            let mut spans = if i == 0 {
                prompt_spans(prompt, theme)
            } else {
                vec![Span::raw(" ".repeat(prompt_len))]
            };
            spans.push(Span::styled(chunk, theme.command));
            lines.push(Line::from(spans));
        }
    }

    match &record.output {
        Some(output) => lines.extend(render_output(output, theme, width)),
        None => lines.push(Line::from(vec![
            Span::styled(format!("{} ", spinner_frame(frame_count)), theme.spinner),
            Span::styled("processing...", theme.dimmed),
        ])),
    }
    lines.push(Line::default());
    lines
}

pub type RecordRows = Arc<[Line<'static>]>;

/// Rendered rows of resolved records, kept across frames. Only pending
/// records (the spinner) are rendered again on every draw.
#[derive(Debug, Default)]
pub struct HistoryCache {
    key: Option<(u16, PaletteType)>,
    rows: HashMap<RecordId, RecordRows>,
}

impl HistoryCache {
    /// Rows for every record in order. Entries for records no longer in
    /// the history are evicted; a new width or palette drops everything.
    pub fn rows(
        &mut self,
        records: &[HistoryRecord],
        prompt: &Prompt,
        theme: &Theme,
        palette: PaletteType,
        width: u16,
        frame_count: u64,
    ) -> Vec<RecordRows> {
        if self.key != Some((width, palette)) {
            self.rows.clear();
            self.key = Some((width, palette));
        }
        let live: HashSet<RecordId> = records.iter().map(|record| record.id).collect();
        self.rows.retain(|id, _| live.contains(id));

        records
            .iter()
            .map(|record| -> RecordRows {
                if record.is_pending() {
                    return record_lines(record, prompt, theme, width, frame_count).into();
                }
                self.rows
                    .entry(record.id)
                    .or_insert_with(|| record_lines(record, prompt, theme, width, 0).into())
                    .clone()
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Largest useful scroll offset for `total` rows in a pane `height` tall.
pub fn max_scroll(total: usize, height: u16) -> u16 {
    let overflow = total.saturating_sub(usize::from(height));
    u16::try_from(overflow).unwrap_or(u16::MAX)
}

/// History pane anchored to the bottom, `scroll` rows up from the end.
/// Only the rows that land inside the pane are copied out of `blocks`.
pub struct TerminalView<'a> {
    pub blocks: &'a [RecordRows],
    pub scroll: u16,
}

impl TerminalView<'_> {
    pub fn total_rows(&self) -> usize {
        self.blocks.iter().map(|b| b.len()).sum()
    }

    fn visible(&self, height: u16) -> Vec<Line<'static>> {
        let max = usize::from(max_scroll(self.total_rows(), height));
        let top = max - usize::from(self.scroll).min(max);
        let bottom = top + usize::from(height);

        let mut lines = Vec::with_capacity(usize::from(height));
        let mut offset = 0;
        for block in self.blocks {
            let end = offset + block.len();
            if end > top && offset < bottom {
                let from = top.saturating_sub(offset);
                let to = (bottom - offset).min(block.len());
                lines.extend_from_slice(&block[from..to]);
            }
            offset = end;
            if offset >= bottom {
                break;
            }
        }
        lines
    }
}

impl Widget for TerminalView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.visible(area.height)).render(area, buf);
    }
}
