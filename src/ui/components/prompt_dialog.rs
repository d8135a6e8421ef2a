//! Numeric prompt for the search target and the array size.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::dialog::DialogFrame;
use super::key_hints::{HintBar, KeyHint};
use super::theme::{ACCENT_ERROR, TEXT_BRIGHT, TEXT_MUTED};

const MAX_INPUT_LEN: usize = 12;

/// What the prompt is editing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Target,
    Size,
}

impl PromptKind {
    pub fn title(self) -> &'static str {
        match self {
            PromptKind::Target => "Search Target",
            PromptKind::Size => "Array Size",
        }
    }
}

/// Text buffer and validation message for the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptState {
    kind: PromptKind,
    input: String,
    hint: String,
    error: Option<String>,
}

impl PromptState {
    /// Open a prompt prefilled with `initial`; `hint` describes the valid range.
    pub fn new(kind: PromptKind, initial: &str, hint: impl Into<String>) -> Self {
        Self {
            kind,
            input: initial.to_string(),
            hint: hint.into(),
            error: None,
        }
    }

    pub fn kind(&self) -> PromptKind {
        self.kind
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Accept digits, and a leading minus sign for targets.
    pub fn insert_char(&mut self, c: char) -> bool {
        let accepted = self.input.len() < MAX_INPUT_LEN
            && (c.is_ascii_digit()
                || (c == '-' && self.kind == PromptKind::Target && self.input.is_empty()));
        if accepted {
            self.input.push(c);
            self.error = None;
        }
        accepted
    }

    pub fn backspace(&mut self) {
        self.input.pop();
        self.error = None;
    }

    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error = Some(error.into());
    }

    /// Parse the current input as an integer.
    pub fn parse<T: std::str::FromStr>(&self) -> Result<T, String> {
        self.input
            .trim()
            .parse()
            .map_err(|_| "Please enter a valid number".to_string())
    }
}

pub struct PromptDialog<'a> {
    state: &'a PromptState,
    hints: Vec<KeyHint>,
}

impl<'a> PromptDialog<'a> {
    pub fn new(state: &'a PromptState) -> Self {
        Self {
            state,
            hints: Vec::new(),
        }
    }

    pub fn hints(mut self, hints: Vec<KeyHint>) -> Self {
        self.hints = hints;
        self
    }
}

impl Widget for PromptDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = DialogFrame::new(self.state.kind.title(), 40, 7).render(area, buf);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(1),
            ])
            .split(inner);

        Paragraph::new(Line::from(Span::styled(
            self.state.hint.as_str(),
            Style::default().fg(TEXT_MUTED),
        )))
        .render(chunks[0], buf);

        Paragraph::new(Line::from(vec![
            Span::raw("> "),
            Span::styled(self.state.input.as_str(), Style::default().fg(TEXT_BRIGHT)),
            Span::raw("_"),
        ]))
        .render(chunks[1], buf);

        if let Some(error) = &self.state.error {
            Paragraph::new(Line::from(Span::styled(
                error.as_str(),
                Style::default().fg(ACCENT_ERROR),
            )))
            .render(chunks[2], buf);
        }

        HintBar::Dialog.render(&self.hints, chunks[3], buf);
    }
}
