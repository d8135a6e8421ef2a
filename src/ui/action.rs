//! Actions that can be triggered by keybindings
//!
//! Each action is a single controller command or UI operation.

use serde::{Deserialize, Serialize};

/// All mappable UI actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // ========== Global ==========
    /// Quit the application
    Quit,
    /// Toggle the key help overlay
    ToggleHelp,

    // ========== Array & Search ==========
    /// Generate a new random sorted array
    GenerateArray,
    /// Trace a search for the current target
    StartSearch,
    /// Toggle whether generated arrays must contain the target
    ToggleGuarantee,
    /// Open the target prompt
    EditTarget,
    /// Open the array size prompt
    EditSize,

    // ========== Replay ==========
    /// Advance one step
    NextStep,
    /// Go back one step
    PrevStep,
    /// Rewind to the first step
    ResetSearch,
    /// Jump to the terminal step
    RunToEnd,
    /// Start/stop auto-play
    ToggleAutoPlay,
    /// Increase auto-play speed
    SpeedUp,
    /// Decrease auto-play speed
    SpeedDown,

    // ========== Prompt ==========
    /// Accept the prompt value
    Confirm,
    /// Close the prompt without changes
    Cancel,
    /// Delete the character before the cursor
    Backspace,
}

impl Action {
    /// Short description for help and key hints.
    pub fn description(self) -> &'static str {
        match self {
            Action::Quit => "quit",
            Action::ToggleHelp => "help",
            Action::GenerateArray => "generate",
            Action::StartSearch => "start",
            Action::ToggleGuarantee => "guarantee",
            Action::EditTarget => "target",
            Action::EditSize => "size",
            Action::NextStep => "next",
            Action::PrevStep => "prev",
            Action::ResetSearch => "reset",
            Action::RunToEnd => "end",
            Action::ToggleAutoPlay => "play",
            Action::SpeedUp => "faster",
            Action::SpeedDown => "slower",
            Action::Confirm => "ok",
            Action::Cancel => "cancel",
            Action::Backspace => "delete",
        }
    }
}

/// Parse an action name string into an Action
pub fn parse_action(name: &str) -> Option<Action> {
    match name {
        "quit" | "q" => Some(Action::Quit),
        "toggle_help" | "help" => Some(Action::ToggleHelp),
        "generate_array" | "generate" => Some(Action::GenerateArray),
        "start_search" | "start" => Some(Action::StartSearch),
        "toggle_guarantee" => Some(Action::ToggleGuarantee),
        "edit_target" => Some(Action::EditTarget),
        "edit_size" => Some(Action::EditSize),
        "next_step" | "next" => Some(Action::NextStep),
        "prev_step" | "previous" => Some(Action::PrevStep),
        "reset_search" | "reset" => Some(Action::ResetSearch),
        "run_to_end" => Some(Action::RunToEnd),
        "toggle_auto_play" | "play" => Some(Action::ToggleAutoPlay),
        "speed_up" => Some(Action::SpeedUp),
        "speed_down" => Some(Action::SpeedDown),
        "confirm" => Some(Action::Confirm),
        "cancel" => Some(Action::Cancel),
        "backspace" => Some(Action::Backspace),
        _ => None,
    }
}
