//! Default keybindings
//!
//! Used as the base layer; user bindings from `[keys]` are merged on top.

use std::collections::HashMap;

use super::keys::{KeyCombo, KeyContext, KeybindingConfig};
use crate::ui::action::Action;

/// Helper to insert a keybinding
fn bind(map: &mut HashMap<KeyCombo, Action>, key: &str, action: Action) {
    if let Ok(combo) = key.parse() {
        map.insert(combo, action);
    }
}

/// Create the default keybindings configuration
pub fn default_keybindings() -> KeybindingConfig {
    let mut config = KeybindingConfig::new();

    // ========== Global ==========
    bind(&mut config.global, "C-c", Action::Quit);
    bind(&mut config.global, "C-q", Action::Quit);

    // ========== Replay ==========
    let replay = config.context.entry(KeyContext::Replay).or_default();
    bind(replay, "q", Action::Quit);
    bind(replay, "?", Action::ToggleHelp);
    bind(replay, "g", Action::GenerateArray);
    bind(replay, "s", Action::StartSearch);
    bind(replay, "<CR>", Action::StartSearch);
    bind(replay, "c", Action::ToggleGuarantee);
    bind(replay, "t", Action::EditTarget);
    bind(replay, "n", Action::EditSize);

    bind(replay, "l", Action::NextStep);
    bind(replay, "<Right>", Action::NextStep);
    bind(replay, "h", Action::PrevStep);
    bind(replay, "<Left>", Action::PrevStep);
    bind(replay, "r", Action::ResetSearch);
    bind(replay, "<Home>", Action::ResetSearch);
    bind(replay, "e", Action::RunToEnd);
    bind(replay, "<End>", Action::RunToEnd);
    bind(replay, "p", Action::ToggleAutoPlay);
    bind(replay, "<Space>", Action::ToggleAutoPlay);
    bind(replay, "+", Action::SpeedUp);
    bind(replay, "=", Action::SpeedUp);
    bind(replay, "-", Action::SpeedDown);

    // ========== Prompt ==========
    let prompt = config.context.entry(KeyContext::Prompt).or_default();
    bind(prompt, "<CR>", Action::Confirm);
    bind(prompt, "<Esc>", Action::Cancel);
    bind(prompt, "<BS>", Action::Backspace);

    // ========== Help ==========
    let help = config.context.entry(KeyContext::Help).or_default();
    bind(help, "?", Action::ToggleHelp);
    bind(help, "<Esc>", Action::ToggleHelp);
    bind(help, "q", Action::ToggleHelp);

    config
}
