mod array_chart;
mod dialog;
mod footer;
mod help_dialog;
mod key_hints;
mod progress_bar;
mod prompt_dialog;
mod stats_panel;
mod step_log;
pub mod theme;

pub use array_chart::ArrayChart;
pub use dialog::DialogFrame;
pub use footer::Footer;
pub use help_dialog::{HelpDialog, HelpDialogState, KeybindingEntry};
pub use key_hints::{HintBar, KeyHint};
pub use progress_bar::ProgressBar;
pub use prompt_dialog::{PromptDialog, PromptKind, PromptState};
pub use stats_panel::StatsPanel;
pub use step_log::StepLog;
