//! Random sorted array generation.

use rand::rngs::StdRng;
use rand::seq::index::sample;
use rand::{Rng, SeedableRng};

use crate::search::{SessionError, SortedArray};

use super::SessionLimits;

/// Produces sorted arrays of distinct values within the session limits.
#[derive(Debug, Clone)]
pub struct ArrayGenerator {
    rng: StdRng,
}

impl ArrayGenerator {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic generator for reproducible arrays.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw `size` distinct values from `limits.min_value..=limits.max_value`.
    ///
    /// With `guarantee` set and absent from the draw, one random position is
    /// overwritten with it before sorting.
    pub fn generate(
        &mut self,
        limits: &SessionLimits,
        size: usize,
        guarantee: Option<i64>,
    ) -> Result<SortedArray, SessionError> {
        limits.check_size(size)?;
        let span = limits.value_span();
        if size > span {
            return Err(SessionError::InvalidSize {
                size,
                min: limits.min_size,
                max: span,
            });
        }
        if let Some(target) = guarantee {
            limits.check_target(target)?;
        }

        let mut values: Vec<i64> = sample(&mut self.rng, span, size)
            .into_iter()
            // offset < span, so this stays within min_value..=max_value
            .map(|offset| limits.min_value.saturating_add_unsigned(offset as u64))
            .collect();

        if let Some(target) = guarantee {
            if size > 0 && !values.contains(&target) {
                let slot = self.rng.random_range(0..size);
                values[slot] = target;
            }
        }

        Ok(SortedArray::from_unsorted(values))
    }
}

impl Default for ArrayGenerator {
    fn default() -> Self {
        Self::new()
    }
}
