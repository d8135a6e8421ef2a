use crossterm::event::Event;

/// Application-level events
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Terminal input event
    Input(Event),

    /// Tick event for auto-play and redraws
    Tick,

    /// Input stream failed or closed
    InputClosed(String),
}

/// Input mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Replay controls
    #[default]
    Normal,
    /// Typing a new search target
    EditingTarget,
    /// Typing a new array size
    EditingSize,
    /// Showing help dialog
    ShowingHelp,
}

impl InputMode {
    pub fn is_prompt(self) -> bool {
        matches!(self, InputMode::EditingTarget | InputMode::EditingSize)
    }
}
