//! Terminal display module
//!
//! Decides whether styled terminal output should be produced.

mod terminal;

pub use terminal::color_enabled;
