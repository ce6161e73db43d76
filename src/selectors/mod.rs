//! Tip selection strategies

pub mod poison;
pub mod random;

pub use poison::PoisonTipSelector;
pub use random::RandomTipSelector;

use crate::error::Result;
use crate::models::Tip;

/// Picks exactly one tip from a list
pub trait TipSelector {
    /// Choose a tip. `tips` must be non-empty.
    fn select<'a>(&self, tips: &'a [Tip]) -> Result<&'a Tip>;
}

impl<S: TipSelector + ?Sized> TipSelector for Box<S> {
    fn select<'a>(&self, tips: &'a [Tip]) -> Result<&'a Tip> {
        (**self).select(tips)
    }
}
