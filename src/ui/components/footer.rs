use ratatui::{buffer::Buffer, layout::Rect};

use crate::config::{KeyContext, KeybindingConfig};
use crate::ui::action::Action;
use crate::ui::events::InputMode;

use super::key_hints::{HintBar, KeyHint};

/// Footer showing the keys for the current input mode.
///
/// Keys are looked up in the active bindings, so user overrides show up here.
pub struct Footer {
    hints: Vec<KeyHint>,
}

impl Footer {
    pub fn new(bindings: &KeybindingConfig, mode: InputMode) -> Self {
        let context = KeyContext::from_input_mode(mode);
        Self {
            hints: KeyHint::resolve(bindings, context, Self::actions_for(mode)),
        }
    }

    fn actions_for(mode: InputMode) -> &'static [Action] {
        match mode {
            InputMode::Normal => &[
                Action::GenerateArray,
                Action::StartSearch,
                Action::NextStep,
                Action::PrevStep,
                Action::ToggleAutoPlay,
                Action::RunToEnd,
                Action::ResetSearch,
                Action::EditTarget,
                Action::EditSize,
                Action::ToggleHelp,
                Action::Quit,
            ],
            InputMode::EditingTarget | InputMode::EditingSize => {
                &[Action::Confirm, Action::Cancel]
            }
            InputMode::ShowingHelp => &[Action::ToggleHelp],
        }
    }

    pub fn hints(&self) -> &[KeyHint] {
        &self.hints
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        HintBar::Footer.render(&self.hints, area, buf);
    }
}
