//! Turns structured command output into styled, pre-wrapped lines.
//!
//! Wrapping happens here rather than in `Paragraph` so the history pane
//! knows exactly how many rows it holds when clamping the scroll offset.

use crate::domain::output::{Block, Field, Output};
use crate::theme::Theme;
use ratatui::{
    style::Style,
    text::{Line, Span},
};
use std::borrow::Cow;
use unicode_width::UnicodeWidthStr;

const BULLET: &str = "• ";
const INDENT: usize = 2;

pub fn render_output(output: &Output, theme: &Theme, width: u16) -> Vec<Line<'static>> {
    let width = usize::from(width.max(1));
    let mut lines = Vec::new();
    for block in output.blocks() {
        render_block(block, theme, width, &mut lines);
    }
    lines
}

fn render_block(block: &Block, theme: &Theme, width: usize, out: &mut Vec<Line<'static>>) {
    match block {
        Block::Title { text } => styled_wrapped(out, text, theme.output_title, width, 0),
        Block::Heading { text } => styled_wrapped(out, text, theme.output_heading, width, 0),
        Block::Text { text } => styled_wrapped(out, text, theme.output_text, width, 0),
        Block::Error { text } => styled_wrapped(out, text, theme.error, width, 0),
        Block::Hint { text } => styled_wrapped(out, text, theme.hint, width, 0),
        Block::Bullets { items } => {
            for item in items {
                let body_width = width.saturating_sub(INDENT + BULLET.width()).max(1);
                for (i, chunk) in wrap_text(item, body_width).into_iter().enumerate() {
                    let marker = if i == 0 { BULLET } else { "  " };
                    out.push(Line::from(vec![
                        Span::raw(" ".repeat(INDENT)),
                        Span::styled(marker, theme.output_bullet),
                        Span::styled(chunk, theme.output_text),
                    ]));
                }
            }
        }
        Block::Fields { fields } => render_fields(fields, theme, width, out),
        Block::Quote { text, source } => {
            let quoted = format!("\"{text}\"");
            styled_wrapped(out, &quoted, theme.quote, width, INDENT);
            if !source.is_empty() {
                styled_wrapped(out, &format!("- {source}"), theme.quote_source, width, INDENT * 2);
            }
        }
        Block::Blank => out.push(Line::default()),
    }
}

fn render_fields(fields: &[Field], theme: &Theme, width: usize, out: &mut Vec<Line<'static>>) {
    let label_width = fields
        .iter()
        .map(|f| f.label.width())
        .max()
        .unwrap_or(0);
    // Labels wider than half the pane push values onto their own rows.
    let inline = label_width + 2 < width / 2;

    for field in fields {
        if inline {
            let value_width = width.saturating_sub(label_width + 2).max(1);
            for (i, chunk) in wrap_text(&field.value, value_width).into_iter().enumerate() {
                let label = if i == 0 {
                    let pad = label_width - field.label.width();
                    format!("{}{}: ", field.label, " ".repeat(pad))
                } else {
                    " ".repeat(label_width + 2)
                };
                out.push(Line::from(vec![
                    Span::styled(label, theme.field_label),
                    Span::styled(chunk, theme.field_value),
                ]));
            }
        } else {
            styled_wrapped(out, &format!("{}:", field.label), theme.field_label, width, 0);
            styled_wrapped(out, &field.value, theme.field_value, width, INDENT);
        }
    }
}

fn styled_wrapped(
    out: &mut Vec<Line<'static>>,
    text: &str,
    style: Style,
    width: usize,
    indent: usize,
) {
    let body_width = width.saturating_sub(indent).max(1);
    for chunk in wrap_text(text, body_width) {
        if indent == 0 {
            out.push(Line::styled(chunk, style));
        } else {
            out.push(Line::from(vec![
                Span::raw(" ".repeat(indent)),
                Span::styled(chunk, style),
            ]));
        }
    }
}

/// Greedy word wrap on display width. Words wider than `width` are
/// split. Always yields at least one (possibly empty) row.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if text.trim().is_empty() {
        return vec![String::new()];
    }
    let options = textwrap::Options::new(width.max(1))
        .break_words(true)
        .wrap_algorithm(textwrap::WrapAlgorithm::FirstFit);
    textwrap::wrap(text, options)
        .into_iter()
        .map(Cow::into_owned)
        .collect()
}
