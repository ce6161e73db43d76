use super::TipOrchestrator;
use crate::error::{Result, TipError};
use crate::formatters::TipFormatter;
use crate::loaders::TipLoader;
use crate::selectors::TipSelector;

/// Default orchestrator slot: fails on every `get_tip`
#[derive(Debug, Default, Clone, Copy)]
pub struct PoisonTipOrchestrator;

impl PoisonTipOrchestrator {
    /// `OrchestratorFactory` entry point; the dependencies are dropped unused
    pub fn construct<T: 'static>(
        _loader: Box<dyn TipLoader>,
        _selector: Box<dyn TipSelector>,
        _formatter: Box<dyn TipFormatter<T>>,
    ) -> Result<Box<dyn TipOrchestrator<T>>> {
        Ok(Box::new(PoisonTipOrchestrator))
    }
}

impl<T> TipOrchestrator<T> for PoisonTipOrchestrator {
    fn get_tip(&self) -> Result<T> {
        Err(TipError::Configuration("tip orchestrator".to_string()))
    }
}
