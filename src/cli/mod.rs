//! Command-line interface module
//!
//! Implements all CLI commands using clap:
//! - (default): Show a random tip from the named collections
//! - bundle: Write the browser data script
//! - config init: Initialize configuration file

pub mod bundle;
pub mod config;
pub mod tip;
