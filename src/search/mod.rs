//! Binary search step recording and replay.
//!
//! - [`SearchTracer`] runs the search and records a [`Trace`]
//! - [`StepNavigator`] replays a trace with a saturating cursor
//! - [`StepView`] projects the current step into a [`ViewModel`]

pub mod array;
pub mod error;
pub mod navigator;
pub mod tracer;
pub mod view;

pub use array::SortedArray;
pub use error::SessionError;
pub use navigator::{Nav, StepNavigator};
pub use tracer::{Outcome, SearchStep, SearchTracer, Status, Trace};
pub use view::{Highlight, Progress, Stats, StepView, ViewModel};
