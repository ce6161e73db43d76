use super::TipSelector;
use crate::error::{Result, TipError};
use crate::models::Tip;

/// Default selector slot: fails on use
#[derive(Debug, Default, Clone, Copy)]
pub struct PoisonTipSelector;

impl TipSelector for PoisonTipSelector {
    fn select<'a>(&self, _tips: &'a [Tip]) -> Result<&'a Tip> {
        Err(TipError::Configuration("tip selector".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_fails_with_configuration_error() {
        let tips = vec![Tip::new("Title", "Body")];
        let result = PoisonTipSelector.select(&tips);

        assert!(matches!(result, Err(TipError::Configuration(_))));
    }
}
