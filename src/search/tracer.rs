//! Binary search with a recorded, replayable trace.
//!
//! [`SearchTracer::run`] executes a classic iterative binary search and keeps
//! a [`SearchStep`] for every decision point, plus a synthetic initial step
//! and (when the target is absent) a terminal "not found" step. The resulting
//! [`Trace`] is immutable and is what the navigator replays.

use std::cmp::Ordering;

use serde::Serialize;

/// Result of comparing `array[mid]` against the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// No comparison happened in this step (initial or not-found step).
    None,
    Equal,
    /// `array[mid] < target`: the right half is searched next.
    Less,
    /// `array[mid] > target`: the left half is searched next.
    Greater,
}

/// Lifecycle phase of a search at a given step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Searching,
    Found,
    NotFound,
}

impl Status {
    /// Human-readable label, e.g. "Not Found".
    pub fn label(self) -> &'static str {
        match self {
            Status::Searching => "Searching",
            Status::Found => "Found",
            Status::NotFound => "Not Found",
        }
    }

    pub fn is_terminal(self) -> bool {
        !matches!(self, Status::Searching)
    }
}

/// One recorded instant of the search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchStep {
    /// Lower bound of the active interval.
    pub left: Option<usize>,
    /// Upper bound of the active interval. `None` once the interval has
    /// collapsed below index 0 (or the array is empty).
    pub right: Option<usize>,
    /// Index compared in this step.
    pub mid: Option<usize>,
    pub outcome: Outcome,
    pub status: Status,
    pub message: String,
}

/// The full, ordered record of one search run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trace {
    target: i64,
    array_len: usize,
    comparisons: usize,
    found_index: Option<usize>,
    steps: Vec<SearchStep>,
}

impl Trace {
    pub fn target(&self) -> i64 {
        self.target
    }

    /// Length of the array the trace was recorded against.
    pub fn array_len(&self) -> usize {
        self.array_len
    }

    /// Number of element comparisons performed.
    pub fn comparisons(&self) -> usize {
        self.comparisons
    }

    pub fn found_index(&self) -> Option<usize> {
        self.found_index
    }

    pub fn is_found(&self) -> bool {
        self.found_index.is_some()
    }

    pub fn steps(&self) -> &[SearchStep] {
        &self.steps
    }

    pub fn step(&self, index: usize) -> Option<&SearchStep> {
        self.steps.get(index)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false for traces built by [`SearchTracer::run`].
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The terminal step (FOUND or NOT_FOUND).
    pub fn final_step(&self) -> Option<&SearchStep> {
        self.steps.last()
    }
}

/// Runs binary search and records every step.
pub struct SearchTracer;

impl SearchTracer {
    /// Trace a binary search for `target` over `array`.
    ///
    /// `array` must be sorted ascending. This is not checked: unsorted input
    /// produces a well-formed but meaningless trace.
    pub fn run(array: &[i64], target: i64) -> Trace {
        let len = array.len();
        let mut left = 0usize;
        let mut right = len.checked_sub(1);
        let mut comparisons = 0usize;
        let mut found_index = None;

        let mut steps = vec![SearchStep {
            left: Some(left),
            right,
            mid: None,
            outcome: Outcome::None,
            status: Status::Searching,
            message: format!("Starting search for {target} in array of size {len}"),
        }];

        while let Some(upper) = right.filter(|&upper| left <= upper) {
            let mid = left + (upper - left) / 2;
            let value = array[mid];
            comparisons += 1;

            match value.cmp(&target) {
                Ordering::Equal => {
                    found_index = Some(mid);
                    steps.push(SearchStep {
                        left: Some(left),
                        right: Some(upper),
                        mid: Some(mid),
                        outcome: Outcome::Equal,
                        status: Status::Found,
                        message: format!(
                            "Step {comparisons}: Found! Array[{mid}] = {value} equals target {target}"
                        ),
                    });
                    break;
                }
                Ordering::Less => {
                    steps.push(SearchStep {
                        left: Some(left),
                        right: Some(upper),
                        mid: Some(mid),
                        outcome: Outcome::Less,
                        status: Status::Searching,
                        message: format!(
                            "Step {comparisons}: Array[{mid}] = {value} < {target}. Searching right half."
                        ),
                    });
                    left = mid + 1;
                }
                Ordering::Greater => {
                    steps.push(SearchStep {
                        left: Some(left),
                        right: Some(upper),
                        mid: Some(mid),
                        outcome: Outcome::Greater,
                        status: Status::Searching,
                        message: format!(
                            "Step {comparisons}: Array[{mid}] = {value} > {target}. Searching left half."
                        ),
                    });
                    right = mid.checked_sub(1);
                }
            }
        }

        if found_index.is_none() {
            steps.push(SearchStep {
                left: Some(left),
                right,
                mid: None,
                outcome: Outcome::None,
                status: Status::NotFound,
                message: format!(
                    "Search complete: {target} not found in array after {comparisons} comparisons"
                ),
            });
        }

        tracing::debug!(
            target_value = target,
            size = len,
            steps = steps.len(),
            comparisons,
            found_index = ?found_index,
            "Traced binary search"
        );

        Trace {
            target,
            array_len: len,
            comparisons,
            found_index,
            steps,
        }
    }
}
