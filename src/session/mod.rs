//! Controller-owned search session.
//!
//! A [`SearchSession`] holds the current array, target, navigator and
//! auto-play state. The TUI and the CLI each own one and drive it with the
//! controller commands below; nothing here is global.

pub mod autoplay;
pub mod generate;

use std::time::{Duration, Instant};

use crate::search::{
    Nav, SessionError, SortedArray, StepNavigator, StepView, SearchTracer, Trace, ViewModel,
};

pub use autoplay::{play_to_end, step_delay, AutoPlay, BASE_STEP_DELAY};
pub use generate::ArrayGenerator;

/// Smallest array the generator will produce.
pub const MIN_ARRAY_SIZE: usize = 10;
/// Largest array the generator will produce.
pub const MAX_ARRAY_SIZE: usize = 50;

/// Accepted targets and array sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionLimits {
    pub min_value: i64,
    pub max_value: i64,
    pub min_size: usize,
    pub max_size: usize,
}

impl SessionLimits {
    /// Limits that accept any target and any size.
    pub fn unbounded() -> Self {
        Self {
            min_value: i64::MIN,
            max_value: i64::MAX,
            min_size: 0,
            max_size: usize::MAX,
        }
    }

    pub fn check_target(&self, value: i64) -> Result<i64, SessionError> {
        if (self.min_value..=self.max_value).contains(&value) {
            Ok(value)
        } else {
            Err(SessionError::InvalidTarget {
                value,
                min: self.min_value,
                max: self.max_value,
            })
        }
    }

    pub fn check_size(&self, size: usize) -> Result<usize, SessionError> {
        if (self.min_size..=self.max_size).contains(&size) {
            Ok(size)
        } else {
            Err(SessionError::InvalidSize {
                size,
                min: self.min_size,
                max: self.max_size,
            })
        }
    }

    /// Number of distinct values in the value range, saturated to `usize`.
    pub fn value_span(&self) -> usize {
        let span = i128::from(self.max_value) - i128::from(self.min_value) + 1;
        usize::try_from(span.max(0)).unwrap_or(usize::MAX)
    }
}

impl Default for SessionLimits {
    fn default() -> Self {
        Self {
            min_value: 1,
            max_value: 100,
            min_size: MIN_ARRAY_SIZE,
            max_size: MAX_ARRAY_SIZE,
        }
    }
}

/// Array, trace cursor and auto-play state for one interactive session.
#[derive(Debug, Clone)]
pub struct SearchSession {
    limits: SessionLimits,
    generator: ArrayGenerator,
    array: Option<SortedArray>,
    target: Option<i64>,
    navigator: StepNavigator,
    autoplay: AutoPlay,
}

impl SearchSession {
    pub fn new(limits: SessionLimits) -> Self {
        Self::with_generator(limits, ArrayGenerator::new())
    }

    pub fn with_generator(limits: SessionLimits, generator: ArrayGenerator) -> Self {
        Self {
            limits,
            generator,
            array: None,
            target: None,
            navigator: StepNavigator::new(),
            autoplay: AutoPlay::default(),
        }
    }

    pub fn limits(&self) -> &SessionLimits {
        &self.limits
    }

    /// Generate a fresh sorted array, discarding any running search.
    pub fn generate_array(
        &mut self,
        size: usize,
        guarantee_target: bool,
        target: i64,
    ) -> Result<&SortedArray, SessionError> {
        let guarantee = guarantee_target.then_some(target);
        let array = self.generator.generate(&self.limits, size, guarantee)?;
        tracing::info!(
            size,
            guarantee_target,
            target_value = target,
            "Generated sorted array"
        );
        Ok(self.replace_array(array))
    }

    /// Use a caller-supplied array, discarding any running search.
    pub fn set_array(&mut self, array: SortedArray) -> &SortedArray {
        tracing::info!(size = array.len(), "Loaded array");
        self.replace_array(array)
    }

    fn replace_array(&mut self, array: SortedArray) -> &SortedArray {
        self.autoplay.stop();
        self.navigator.clear();
        self.target = None;
        self.array.insert(array)
    }

    /// Trace a search for `target` over the current array and rewind to its
    /// first step.
    pub fn start_search(&mut self, target: i64) -> Result<&Trace, SessionError> {
        let array = self.array.as_ref().ok_or(SessionError::NoArray)?;
        let target = self.limits.check_target(target)?;
        let trace = SearchTracer::run(array.as_slice(), target);
        tracing::info!(
            target_value = target,
            steps = trace.len(),
            comparisons = trace.comparisons(),
            "Started search"
        );

        self.autoplay.stop();
        self.target = Some(target);
        self.navigator.bind(trace);
        self.navigator.trace().ok_or(SessionError::EmptyTrace)
    }

    /// Manual step forward. Stops auto-play.
    pub fn next(&mut self) -> Nav {
        self.autoplay.stop();
        self.navigator.advance()
    }

    /// Manual step backward. Stops auto-play.
    pub fn previous(&mut self) -> Nav {
        self.autoplay.stop();
        self.navigator.retreat()
    }

    /// Back to the first step of the current trace. Stops auto-play.
    pub fn reset(&mut self) -> Nav {
        self.autoplay.stop();
        self.navigator.reset()
    }

    /// Jump to the terminal step. Stops auto-play.
    pub fn run_to_end(&mut self) -> Nav {
        self.autoplay.stop();
        self.navigator.jump_to_end()
    }

    /// Advance without touching auto-play state; used by the drivers.
    pub fn advance(&mut self) -> Nav {
        self.navigator.advance()
    }

    /// Start or stop auto-play. Returns whether it is now playing.
    ///
    /// Starting at the last step is a no-op.
    pub fn toggle_autoplay(&mut self, now: Instant) -> Result<bool, SessionError> {
        if !self.navigator.is_bound() {
            return Err(SessionError::EmptyTrace);
        }
        if self.autoplay.is_playing() {
            self.autoplay.stop();
        } else if !self.navigator.is_at_end() {
            self.autoplay.start(now);
        }
        Ok(self.autoplay.is_playing())
    }

    /// Drive auto-play from a UI tick. Returns the navigation result when a
    /// step was due.
    pub fn tick(&mut self, now: Instant) -> Option<Nav> {
        if !self.autoplay.due(now) {
            return None;
        }
        let nav = self.navigator.advance();
        if self.navigator.is_at_end() {
            self.autoplay.stop();
            tracing::debug!("Auto-play stopped at end of trace");
        }
        Some(nav)
    }

    pub fn set_step_delay(&mut self, delay: Duration) {
        self.autoplay.set_delay(delay);
    }

    pub fn is_playing(&self) -> bool {
        self.autoplay.is_playing()
    }

    pub fn array(&self) -> Option<&SortedArray> {
        self.array.as_ref()
    }

    /// Target of the current search, if one was started.
    pub fn target(&self) -> Option<i64> {
        self.target
    }

    pub fn navigator(&self) -> &StepNavigator {
        &self.navigator
    }

    pub fn autoplay(&self) -> &AutoPlay {
        &self.autoplay
    }

    /// View of the current step, or `EmptyTrace` before any search.
    pub fn current_view(&self) -> Result<ViewModel, SessionError> {
        let trace = self.navigator.trace().ok_or(SessionError::EmptyTrace)?;
        let values = self.array.as_ref().map_or(&[][..], SortedArray::as_slice);
        Ok(StepView::project(values, trace, self.navigator.cursor()))
    }

    /// View of the current step, falling back to the bare array.
    pub fn view(&self) -> ViewModel {
        self.current_view().unwrap_or_else(|_| {
            ViewModel::empty(self.array.as_ref().map_or(&[][..], SortedArray::as_slice))
        })
    }
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new(SessionLimits::default())
    }
}
