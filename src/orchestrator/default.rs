use super::TipOrchestrator;
use crate::error::Result;
use crate::formatters::TipFormatter;
use crate::loaders::TipLoader;
use crate::models::Tip;
use crate::selectors::TipSelector;

/// Snapshot of one load, answering every `get_tip` from the cached tips
pub struct DefaultTipOrchestrator<T> {
    tips: Vec<Tip>,
    collection_title: Option<String>,
    selector: Box<dyn TipSelector>,
    formatter: Box<dyn TipFormatter<T>>,
}

impl<T> DefaultTipOrchestrator<T> {
    /// Load tips and collection title once; the loader is not kept
    pub fn new(
        loader: &dyn TipLoader,
        selector: Box<dyn TipSelector>,
        formatter: Box<dyn TipFormatter<T>>,
    ) -> Result<Self> {
        let tips = loader.tips()?;
        let collection_title = loader.collection_title();

        log::debug!(
            "Orchestrator ready with {} tips (collection: {:?})",
            tips.len(),
            collection_title
        );

        Ok(Self {
            tips,
            collection_title,
            selector,
            formatter,
        })
    }
}

impl<T: 'static> DefaultTipOrchestrator<T> {
    /// `OrchestratorFactory` entry point
    pub fn construct(
        loader: Box<dyn TipLoader>,
        selector: Box<dyn TipSelector>,
        formatter: Box<dyn TipFormatter<T>>,
    ) -> Result<Box<dyn TipOrchestrator<T>>> {
        let orchestrator = Self::new(loader.as_ref(), selector, formatter)?;
        Ok(Box::new(orchestrator))
    }
}

impl<T> TipOrchestrator<T> for DefaultTipOrchestrator<T> {
    fn get_tip(&self) -> Result<T> {
        let tip = self.selector.select(&self.tips)?;
        self.formatter
            .format_tip(tip, self.collection_title.as_deref())
    }
}
