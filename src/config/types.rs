use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::formatters::OutputFormat;

/// Daily tip configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding `<name>.json` tip collections
    pub collections_dir: PathBuf,

    /// Output format used when `--format` is not given
    pub format: OutputFormat,

    /// Directory where `daily-tip bundle` writes the browser data file
    pub bundle_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            collections_dir: PathBuf::from("./collections"),
            format: OutputFormat::Shell,
            bundle_dir: PathBuf::from("./dist/public"),
        }
    }
}
