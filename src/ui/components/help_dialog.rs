//! Help overlay listing the active keybindings, grouped by mode.

use std::collections::{BTreeMap, HashMap};

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::config::{KeyCombo, KeyContext, KeybindingConfig};
use crate::ui::action::Action;

use super::dialog::DialogFrame;
use super::key_hints::{HintBar, KeyHint};
use super::theme::{ACCENT_PRIMARY, ACCENT_WARNING, TEXT_SECONDARY};

/// A keybinding entry for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeybindingEntry {
    pub action_description: &'static str,
    pub key_display: String,
}

/// Entries for one section of the help overlay.
fn section_entries(
    bindings: &HashMap<KeyCombo, Action>,
) -> Vec<KeybindingEntry> {
    let mut by_action: BTreeMap<&'static str, Vec<String>> = BTreeMap::new();
    for (key, action) in bindings {
        by_action
            .entry(action.description())
            .or_default()
            .push(key.to_string());
    }

    by_action
        .into_iter()
        .map(|(action_description, mut keys)| {
            keys.sort();
            KeybindingEntry {
                action_description,
                key_display: keys.join(" / "),
            }
        })
        .collect()
}

/// State for the help dialog
#[derive(Debug, Clone, Default)]
pub struct HelpDialogState {
    sections: Vec<(&'static str, Vec<KeybindingEntry>)>,
    close_hints: Vec<KeyHint>,
}

impl HelpDialogState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Populate from the active keybindings
    pub fn populate(&mut self, config: &KeybindingConfig) {
        self.close_hints = KeyHint::resolve(config, KeyContext::Help, &[Action::ToggleHelp]);
        self.sections.clear();
        self.sections.push(("GLOBAL", section_entries(&config.global)));
        for context in KeyContext::all() {
            if let Some(bindings) = config.context.get(context) {
                let title = match context {
                    KeyContext::Replay => "REPLAY",
                    KeyContext::Prompt => "PROMPT",
                    KeyContext::Help => "HELP",
                };
                self.sections.push((title, section_entries(bindings)));
            }
        }
    }

    pub fn sections(&self) -> &[(&'static str, Vec<KeybindingEntry>)] {
        &self.sections
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for (title, entries) in &self.sections {
            if !lines.is_empty() {
                lines.push(Line::default());
            }
            lines.push(Line::from(Span::styled(
                *title,
                Style::default()
                    .fg(ACCENT_WARNING)
                    .add_modifier(Modifier::BOLD),
            )));
            for entry in entries {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("  {:<20}", entry.key_display),
                        Style::default().fg(ACCENT_PRIMARY),
                    ),
                    Span::styled(entry.action_description, Style::default().fg(TEXT_SECONDARY)),
                ]));
            }
        }
        lines
    }
}

/// Help dialog widget
pub struct HelpDialog<'a> {
    state: &'a HelpDialogState,
}

impl<'a> HelpDialog<'a> {
    pub fn new(state: &'a HelpDialogState) -> Self {
        Self { state }
    }
}

impl Widget for HelpDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = (area.width * 70 / 100).clamp(40, 60);
        let height = (area.height * 80 / 100).max(15);
        let inner = DialogFrame::new("Help - Keybindings", width, height).render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(inner);

        Paragraph::new(self.state.lines()).render(chunks[0], buf);
        HintBar::Dialog.render(&self.state.close_hints, chunks[1], buf);
    }
}
