use super::TipFormatter;
use crate::error::{Result, TipError};
use crate::models::Tip;

/// Default formatter slot: fails on use for every output type
#[derive(Debug, Default, Clone, Copy)]
pub struct PoisonTipFormatter;

impl<T> TipFormatter<T> for PoisonTipFormatter {
    fn format_tip(&self, _tip: &Tip, _category_title: Option<&str>) -> Result<T> {
        Err(TipError::Configuration("tip formatter".to_string()))
    }
}
