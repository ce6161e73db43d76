//! Fluent assembly of a tip pipeline
//!
//! Every slot starts as a poison implementation, so a forgotten setter shows
//! up as a `Configuration` error the first time that slot is exercised.

use crate::error::Result;
use crate::formatters::{PoisonTipFormatter, TipFormatter};
use crate::loaders::{PoisonTipLoader, TipLoader};
use crate::orchestrator::{OrchestratorFactory, PoisonTipOrchestrator, TipOrchestrator};
use crate::selectors::{PoisonTipSelector, TipSelector};

/// Builder for a tip orchestrator producing `T`
pub struct DailyTipBuilder<T> {
    loader: Box<dyn TipLoader>,
    selector: Box<dyn TipSelector>,
    formatter: Box<dyn TipFormatter<T>>,
    orchestrator: OrchestratorFactory<T>,
}

impl<T: 'static> DailyTipBuilder<T> {
    pub fn new() -> Self {
        Self {
            loader: Box::new(PoisonTipLoader),
            selector: Box::new(PoisonTipSelector),
            formatter: Box::new(PoisonTipFormatter),
            orchestrator: PoisonTipOrchestrator::construct::<T>,
        }
    }

    pub fn with_loader(mut self, loader: impl TipLoader + 'static) -> Self {
        self.loader = Box::new(loader);
        self
    }

    pub fn with_selector(mut self, selector: impl TipSelector + 'static) -> Self {
        self.selector = Box::new(selector);
        self
    }

    pub fn with_formatter(mut self, formatter: impl TipFormatter<T> + 'static) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    pub fn with_orchestrator(mut self, orchestrator: OrchestratorFactory<T>) -> Self {
        self.orchestrator = orchestrator;
        self
    }

    /// Construct the orchestrator from the current slots.
    ///
    /// Slots are not checked; a poison loader fails here when the orchestrator
    /// loads eagerly, other poison slots fail on the first `get_tip`.
    pub fn build(self) -> Result<Box<dyn TipOrchestrator<T>>> {
        (self.orchestrator)(self.loader, self.selector, self.formatter)
    }
}

impl<T: 'static> Default for DailyTipBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
