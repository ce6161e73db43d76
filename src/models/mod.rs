//! Data models module
//!
//! Defines the Tip and TipCollection shapes passed between every pipeline stage.

pub mod tip;

pub use tip::{Tip, TipCollection};
