//! Read-only projection of a trace position into renderer-facing data.

use std::fmt;

use serde::Serialize;

use super::tracer::{SearchStep, Status, Trace};

/// Visual category of one array position at a given step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Highlight {
    InRange,
    Eliminated,
    CurrentMid,
    Found,
}

impl Highlight {
    /// Legend order.
    pub const ALL: [Highlight; 4] = [
        Highlight::InRange,
        Highlight::Eliminated,
        Highlight::CurrentMid,
        Highlight::Found,
    ];

    /// Classify position `index` for `step`.
    ///
    /// Precedence is FOUND, then CURRENT_MID, then ELIMINATED, then IN_RANGE.
    pub fn classify(step: &SearchStep, index: usize) -> Self {
        if step.mid == Some(index) {
            return if step.status == Status::Found {
                Highlight::Found
            } else {
                Highlight::CurrentMid
            };
        }

        match (step.left, step.right) {
            (Some(left), Some(right)) if index < left || index > right => Highlight::Eliminated,
            // right bound fell below zero: the interval is empty
            (Some(_), None) => Highlight::Eliminated,
            _ => Highlight::InRange,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Highlight::InRange => "In Search Range",
            Highlight::Eliminated => "Eliminated",
            Highlight::CurrentMid => "Current Middle",
            Highlight::Found => "Target Found",
        }
    }

    /// Single-character marker for plain-text output.
    pub fn glyph(self) -> char {
        match self {
            Highlight::InRange => '=',
            Highlight::Eliminated => '.',
            Highlight::CurrentMid => '^',
            Highlight::Found => '*',
        }
    }
}

/// 1-based "current of total" step counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub current: usize,
    pub total: usize,
}

impl Progress {
    /// Fraction complete in `0.0..=1.0`.
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.current as f64 / self.total as f64
        }
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step {} of {}", self.current, self.total)
    }
}

/// Counters shown alongside the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stats {
    /// Comparisons so far. Equals the cursor: every step after the initial
    /// one is counted.
    pub comparisons: usize,
    pub left: Option<usize>,
    pub right: Option<usize>,
    pub array_len: usize,
}

impl Stats {
    /// Current range as `[left, right]`, with `N/A` for unset bounds.
    pub fn range_label(&self) -> String {
        format!("[{}, {}]", bound_label(self.left), bound_label(self.right))
    }
}

fn bound_label(bound: Option<usize>) -> String {
    bound.map_or_else(|| "N/A".to_string(), |b| b.to_string())
}

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewModel {
    pub values: Vec<i64>,
    pub highlights: Vec<Highlight>,
    pub log: String,
    pub progress: Progress,
    pub stats: Stats,
    /// `None` when no search has been started.
    pub status: Option<Status>,
}

impl ViewModel {
    /// View of an array with no search started.
    pub fn empty(array: &[i64]) -> Self {
        Self {
            values: array.to_vec(),
            highlights: vec![Highlight::InRange; array.len()],
            log: String::new(),
            progress: Progress {
                current: 0,
                total: 0,
            },
            stats: Stats {
                comparisons: 0,
                left: None,
                right: None,
                array_len: array.len(),
            },
            status: None,
        }
    }

    /// Chart title, e.g. "Binary Search Visualization - Not Found".
    pub fn title(&self) -> String {
        match self.status {
            Some(status) => format!("Binary Search Visualization - {}", status.label()),
            None => "Binary Search Visualization".to_string(),
        }
    }

    /// Log lines in order, oldest first.
    pub fn log_lines(&self) -> impl Iterator<Item = &str> {
        self.log.lines()
    }

    /// One glyph per array position, see [`Highlight::glyph`].
    pub fn highlight_strip(&self) -> String {
        self.highlights.iter().map(|h| h.glyph()).collect()
    }
}

/// Projects `(array, trace, cursor)` into a [`ViewModel`].
pub struct StepView;

impl StepView {
    /// Build the view for the step at `cursor`.
    ///
    /// A cursor past the end is clamped to the last step.
    pub fn project(array: &[i64], trace: &Trace, cursor: usize) -> ViewModel {
        let steps = trace.steps();
        let Some(last) = steps.len().checked_sub(1) else {
            return ViewModel::empty(array);
        };
        let cursor = cursor.min(last);
        let step = &steps[cursor];

        let highlights = (0..array.len())
            .map(|i| Highlight::classify(step, i))
            .collect();

        let log = steps[..=cursor]
            .iter()
            .map(|s| s.message.as_str())
            .collect::<Vec<_>>()
            .join("\n");

        ViewModel {
            values: array.to_vec(),
            highlights,
            log,
            progress: Progress {
                current: cursor + 1,
                total: steps.len(),
            },
            stats: Stats {
                comparisons: cursor,
                left: step.left,
                right: step.right,
                array_len: array.len(),
            },
            status: Some(step.status),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::tracer::SearchTracer;

    const SCENARIO: [i64; 10] = [1, 5, 9, 12, 17, 23, 29, 34, 41, 50];

    fn strip(array: &[i64], target: i64, cursor: usize) -> String {
        let trace = SearchTracer::run(array, target);
        StepView::project(array, &trace, cursor).highlight_strip()
    }

    #[test]
    fn test_initial_step_all_in_range() {
        assert_eq!(strip(&SCENARIO, 23, 0), "==========");
    }

    #[test]
    fn test_mid_and_elimination_progression() {
        assert_eq!(strip(&SCENARIO, 23, 1), "====^=====");
        assert_eq!(strip(&SCENARIO, 23, 2), ".....==^==");
        assert_eq!(strip(&SCENARIO, 23, 3), ".....*=...");
    }

    #[test]
    fn test_not_found_eliminates_everything() {
        // terminal bounds are left=2, right=1
        assert_eq!(strip(&[2, 4, 6], 5, 3), "...");
        // right bound collapsed below zero
        assert_eq!(strip(&[2, 4, 6], 1, 3), "...");
    }

    #[test]
    fn test_log_includes_steps_up_to_cursor() {
        let trace = SearchTracer::run(&SCENARIO, 23);
        let view = StepView::project(&SCENARIO, &trace, 1);

        assert_eq!(
            view.log,
            "Starting search for 23 in array of size 10\n\
             Step 1: Array[4] = 17 < 23. Searching right half."
        );
        assert_eq!(view.log_lines().count(), 2);
    }

    #[test]
    fn test_progress_and_stats() {
        let trace = SearchTracer::run(&SCENARIO, 23);
        let view = StepView::project(&SCENARIO, &trace, 2);

        assert_eq!(view.progress.to_string(), "Step 3 of 4");
        assert_eq!(view.stats.comparisons, 2);
        assert_eq!(view.stats.range_label(), "[5, 9]");
        assert_eq!(view.stats.array_len, 10);
        assert_eq!(view.status, Some(Status::Searching));
        assert_eq!(view.title(), "Binary Search Visualization - Searching");
    }

    #[test]
    fn test_unset_bound_renders_na() {
        let trace = SearchTracer::run(&[], 3);
        let view = StepView::project(&[], &trace, 0);

        assert_eq!(view.stats.range_label(), "[0, N/A]");
        assert!(view.highlights.is_empty());
    }

    #[test]
    fn test_cursor_is_clamped() {
        let trace = SearchTracer::run(&SCENARIO, 23);
        let view = StepView::project(&SCENARIO, &trace, 99);

        assert_eq!(view.progress.current, 4);
        assert_eq!(view.status, Some(Status::Found));
    }

    #[test]
    fn test_empty_view() {
        let view = ViewModel::empty(&[1, 2, 3]);

        assert_eq!(view.progress.to_string(), "Step 0 of 0");
        assert_eq!(view.highlight_strip(), "===");
        assert_eq!(view.title(), "Binary Search Visualization");
        assert_eq!(view.progress.ratio(), 0.0);
    }

    #[test]
    fn test_found_takes_precedence_over_mid() {
        let step = SearchStep {
            left: Some(0),
            right: Some(2),
            mid: Some(1),
            outcome: crate::search::Outcome::Equal,
            status: Status::Found,
            message: String::new(),
        };
        assert_eq!(Highlight::classify(&step, 1), Highlight::Found);
        assert_eq!(Highlight::classify(&step, 0), Highlight::InRange);
    }
}
