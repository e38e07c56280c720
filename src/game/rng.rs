use crate::errors::{RngError, SimResult};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// The single randomness source for one game.
///
/// Every decision point consumes exactly one uniform draw in `[0, 1)`, so a
/// scripted sequence of draws replays a game exactly. Each draw carries a
/// short reason string that is traced at `trace` level.
#[derive(Debug, Clone)]
pub struct GameRng {
    source: RngSource,
}

#[derive(Debug, Clone)]
enum RngSource {
    Seeded(ChaCha8Rng),
    Scripted { outcomes: Vec<f64>, index: usize },
}

impl GameRng {
    /// A reproducible stream for `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self {
            source: RngSource::Seeded(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Replays `outcomes` in order. Running out is an error, not a wrap-around.
    pub fn new_for_test(outcomes: Vec<f64>) -> Self {
        Self {
            source: RngSource::Scripted { outcomes, index: 0 },
        }
    }

    /// Number of scripted draws not yet consumed (always `None` for seeded streams).
    pub fn remaining(&self) -> Option<usize> {
        match &self.source {
            RngSource::Seeded(_) => None,
            RngSource::Scripted { outcomes, index } => Some(outcomes.len() - index),
        }
    }

    pub fn next_outcome(&mut self, reason: &str) -> SimResult<f64> {
        let outcome = match &mut self.source {
            RngSource::Seeded(rng) => rng.random::<f64>(),
            RngSource::Scripted { outcomes, index } => {
                let outcome = outcomes.get(*index).copied().ok_or_else(|| {
                    RngError::Exhausted {
                        reason: reason.to_string(),
                    }
                })?;
                *index += 1;
                outcome
            }
        };

        tracing::trace!(outcome, reason, "rng draw");
        Ok(outcome)
    }

    /// True with probability `p`.
    pub fn chance(&mut self, p: f64, reason: &str) -> SimResult<bool> {
        Ok(self.next_outcome(reason)? < p)
    }

    /// Uniform pick from `items`.
    pub fn choose<T: Copy>(&mut self, items: &[T], reason: &str) -> SimResult<T> {
        if items.is_empty() {
            return Err(RngError::EmptyChoice {
                reason: reason.to_string(),
            }
            .into());
        }
        let roll = self.next_outcome(reason)?;
        let index = ((roll * items.len() as f64) as usize).min(items.len() - 1);
        Ok(items[index])
    }

    /// Index picked in proportion to `weights`.
    pub fn weighted_index(&mut self, weights: &[f64], reason: &str) -> SimResult<usize> {
        let total: f64 = weights.iter().filter(|w| **w > 0.0).sum();
        if total <= 0.0 {
            return Err(RngError::DegenerateWeights {
                reason: reason.to_string(),
            }
            .into());
        }

        let target = self.next_outcome(reason)? * total;
        let mut cumulative = 0.0;
        let mut last_positive = 0;
        for (i, weight) in weights.iter().enumerate() {
            if *weight <= 0.0 {
                continue;
            }
            cumulative += weight;
            last_positive = i;
            if target < cumulative {
                return Ok(i);
            }
        }

        // Rounding can leave `target` a hair above the final cumulative sum.
        Ok(last_positive)
    }
}
