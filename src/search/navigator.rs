//! Cursor-based replay over a recorded trace.

use super::error::SessionError;
use super::tracer::{SearchStep, Trace};

/// Result of a navigation command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    /// The cursor moved.
    Moved,
    /// Already at the first step; nothing changed.
    AtStart,
    /// Already at the last step; nothing changed. Auto-play stops on this.
    AtEnd,
    /// No trace is bound; nothing changed.
    Unbound,
}

impl Nav {
    pub fn moved(self) -> bool {
        matches!(self, Nav::Moved)
    }
}

/// Holds a trace and a cursor into its steps.
///
/// When a trace is bound the cursor always satisfies
/// `0 <= cursor < trace.len()`. Every command saturates at the boundaries.
#[derive(Debug, Clone, Default)]
pub struct StepNavigator {
    trace: Option<Trace>,
    cursor: usize,
}

impl StepNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Navigator with `trace` already bound.
    pub fn with_trace(trace: Trace) -> Self {
        let mut navigator = Self::new();
        navigator.bind(trace);
        navigator
    }

    /// Replace the held trace and rewind to the first step.
    pub fn bind(&mut self, trace: Trace) {
        tracing::debug!(steps = trace.len(), "Bound new trace");
        self.trace = Some(trace);
        self.cursor = 0;
    }

    /// Drop the held trace.
    pub fn clear(&mut self) {
        self.trace = None;
        self.cursor = 0;
    }

    pub fn advance(&mut self) -> Nav {
        match &self.trace {
            None => Nav::Unbound,
            Some(trace) if self.cursor + 1 < trace.len() => {
                self.cursor += 1;
                Nav::Moved
            }
            Some(_) => Nav::AtEnd,
        }
    }

    pub fn retreat(&mut self) -> Nav {
        match &self.trace {
            None => Nav::Unbound,
            Some(_) if self.cursor > 0 => {
                self.cursor -= 1;
                Nav::Moved
            }
            Some(_) => Nav::AtStart,
        }
    }

    /// Rewind to the first step, keeping the trace.
    pub fn reset(&mut self) -> Nav {
        match &self.trace {
            None => Nav::Unbound,
            Some(_) if self.cursor == 0 => Nav::AtStart,
            Some(_) => {
                self.cursor = 0;
                Nav::Moved
            }
        }
    }

    /// Move straight to the terminal step.
    pub fn jump_to_end(&mut self) -> Nav {
        match &self.trace {
            None => Nav::Unbound,
            Some(trace) => {
                let last = trace.len().saturating_sub(1);
                if self.cursor == last {
                    Nav::AtEnd
                } else {
                    self.cursor = last;
                    Nav::Moved
                }
            }
        }
    }

    /// The step under the cursor.
    pub fn current(&self) -> Result<&SearchStep, SessionError> {
        self.trace
            .as_ref()
            .and_then(|trace| trace.step(self.cursor))
            .ok_or(SessionError::EmptyTrace)
    }

    /// True at the last step, or when nothing is bound.
    pub fn is_at_end(&self) -> bool {
        self.trace
            .as_ref()
            .map_or(true, |trace| self.cursor + 1 >= trace.len())
    }

    /// True at the first step, or when nothing is bound.
    pub fn is_at_start(&self) -> bool {
        self.cursor == 0
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn trace(&self) -> Option<&Trace> {
        self.trace.as_ref()
    }

    pub fn is_bound(&self) -> bool {
        self.trace.is_some()
    }

    /// Number of steps in the bound trace, 0 when unbound.
    pub fn len(&self) -> usize {
        self.trace.as_ref().map_or(0, Trace::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
