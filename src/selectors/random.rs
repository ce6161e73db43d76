use std::cell::RefCell;

use rand::rngs::StdRng;
use rand::Rng;

use super::TipSelector;
use crate::error::{Result, TipError};
use crate::models::Tip;

/// Uniform random choice, each tip with probability `1 / len`
#[derive(Debug, Default)]
pub struct RandomTipSelector {
    /// Seeded generator; `None` draws from the thread-local generator
    rng: Option<RefCell<StdRng>>,
}

impl RandomTipSelector {
    pub fn new() -> Self {
        Self { rng: None }
    }

    /// Reproducible selector driven by a fixed seed
    #[cfg(test)]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Some(RefCell::new(rand::SeedableRng::seed_from_u64(seed))),
        }
    }

    fn random_index(&self, len: usize) -> usize {
        match &self.rng {
            Some(rng) => rng.borrow_mut().gen_range(0..len),
            None => rand::thread_rng().gen_range(0..len),
        }
    }
}

impl TipSelector for RandomTipSelector {
    /// Selecting from an empty list violates the precondition and is reported
    /// as a `Selection` error rather than answered with a placeholder.
    fn select<'a>(&self, tips: &'a [Tip]) -> Result<&'a Tip> {
        if tips.is_empty() {
            return Err(TipError::Selection(
                "cannot select a tip from an empty list".to_string(),
            ));
        }

        let index = self.random_index(tips.len());
        log::debug!("Selected tip {} of {}", index + 1, tips.len());

        Ok(&tips[index])
    }
}
