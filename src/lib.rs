pub mod cli;
pub mod config;
pub mod search;
pub mod session;
pub mod ui;
pub mod util;

pub use config::Config;
pub use search::{
    Highlight, Nav, SearchStep, SearchTracer, SessionError, SortedArray, Status, StepNavigator,
    StepView, Trace, ViewModel,
};
pub use session::{SearchSession, SessionLimits};
pub use ui::App;
