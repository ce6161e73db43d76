//! Orchestrators bind a loaded tip set to a selector and a formatter

pub mod default;
pub mod poison;

pub use default::DefaultTipOrchestrator;
pub use poison::PoisonTipOrchestrator;

use crate::error::Result;
use crate::formatters::TipFormatter;
use crate::loaders::TipLoader;
use crate::selectors::TipSelector;

/// Produces one formatted tip per call
pub trait TipOrchestrator<T> {
    fn get_tip(&self) -> Result<T>;
}

/// Constructor slot used by the builder
pub type OrchestratorFactory<T> = fn(
    Box<dyn TipLoader>,
    Box<dyn TipSelector>,
    Box<dyn TipFormatter<T>>,
) -> Result<Box<dyn TipOrchestrator<T>>>;
