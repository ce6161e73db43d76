use super::TipLoader;
use crate::error::{Result, TipError};
use crate::models::Tip;

/// Default loader slot: fails on use
#[derive(Debug, Default, Clone, Copy)]
pub struct PoisonTipLoader;

impl TipLoader for PoisonTipLoader {
    fn tips(&self) -> Result<Vec<Tip>> {
        Err(TipError::Configuration("tip loader".to_string()))
    }
}
