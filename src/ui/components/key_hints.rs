//! Key hint rows built from the active keybindings.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::config::{KeyCombo, KeyContext, KeybindingConfig};
use crate::ui::action::Action;

use super::theme::{
    ACCENT_PRIMARY, FOOTER_BG, KEY_HINT_BG, TEXT_FAINT, TEXT_MUTED, TEXT_SECONDARY,
};

/// A bound key paired with the action it triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyHint {
    pub key: KeyCombo,
    pub action: Action,
}

impl KeyHint {
    /// Hints for `actions` in `context`, in order. Unbound actions are skipped
    /// so a user who removes a binding never sees a stale hint.
    pub fn resolve(
        bindings: &KeybindingConfig,
        context: KeyContext,
        actions: &[Action],
    ) -> Vec<KeyHint> {
        actions
            .iter()
            .filter_map(|&action| {
                bindings
                    .key_for(action, context)
                    .map(|key| KeyHint { key, action })
            })
            .collect()
    }
}

/// Where a row of hints is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintBar {
    /// Bottom bar: keys on a raised background, left aligned.
    Footer,
    /// Centered row inside a dialog, separated by bars.
    Dialog,
}

impl HintBar {
    pub fn line(self, hints: &[KeyHint]) -> Line<'static> {
        let mut spans = Vec::with_capacity(hints.len() * 3 + 1);
        if self == HintBar::Footer {
            spans.push(Span::raw(" "));
        }

        for (i, hint) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(match self {
                    HintBar::Footer => Span::raw("  "),
                    HintBar::Dialog => Span::styled(" │ ", Style::default().fg(TEXT_FAINT)),
                });
            }
            let (key, key_style, action_style) = match self {
                HintBar::Footer => (
                    format!(" {} ", hint.key),
                    Style::default().fg(TEXT_SECONDARY).bg(KEY_HINT_BG),
                    Style::default().fg(TEXT_MUTED),
                ),
                HintBar::Dialog => (
                    hint.key.to_string(),
                    Style::default().fg(ACCENT_PRIMARY),
                    Style::default().fg(TEXT_SECONDARY),
                ),
            };
            spans.push(Span::styled(key, key_style));
            spans.push(Span::styled(
                format!(" {}", hint.action.description()),
                action_style,
            ));
        }
        Line::from(spans)
    }

    pub fn render(self, hints: &[KeyHint], area: Rect, buf: &mut Buffer) {
        let paragraph = Paragraph::new(self.line(hints));
        match self {
            HintBar::Footer => paragraph.style(Style::default().bg(FOOTER_BG)),
            HintBar::Dialog => paragraph.alignment(Alignment::Center),
        }
        .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{default_keybindings, parse_key_notation};

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_resolve_skips_unbound_actions() {
        let hints = KeyHint::resolve(
            &default_keybindings(),
            KeyContext::Prompt,
            &[Action::Confirm, Action::NextStep, Action::Cancel],
        );
        let actions: Vec<Action> = hints.iter().map(|h| h.action).collect();
        assert_eq!(actions, vec![Action::Confirm, Action::Cancel]);
    }

    #[test]
    fn test_dialog_line() {
        let hints = KeyHint::resolve(
            &default_keybindings(),
            KeyContext::Prompt,
            &[Action::Confirm, Action::Cancel],
        );
        assert_eq!(text(&HintBar::Dialog.line(&hints)), "<CR> ok │ <Esc> cancel");
    }

    #[test]
    fn test_footer_line_pads_keys() {
        let hints = [KeyHint {
            key: parse_key_notation("g").unwrap(),
            action: Action::GenerateArray,
        }];
        assert_eq!(text(&HintBar::Footer.line(&hints)), "  g  generate");
    }
}
