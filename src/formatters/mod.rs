//! Tip formatters module
//!
//! Renders a selected tip into an output representation:
//! - MarkdownTipFormatter: Plain markdown with a heading hierarchy
//! - ShellTipFormatter: Terminal text with styling control sequences
//! - HtmlTipFormatter: HTML via a markdown engine
//! - PoisonTipFormatter: Fails on use, marks an unconfigured builder slot

pub mod html;
pub mod markdown;
pub mod poison;
pub mod shell;

pub use html::{CmarkRenderer, HtmlTipFormatter, MarkdownRenderer};
pub use markdown::MarkdownTipFormatter;
pub use poison::PoisonTipFormatter;
pub use shell::ShellTipFormatter;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::Tip;

/// Renders a tip, with an optional category title, into `T`
pub trait TipFormatter<T> {
    fn format_tip(&self, tip: &Tip, category_title: Option<&str>) -> Result<T>;
}

impl<T, F: TipFormatter<T> + ?Sized> TipFormatter<T> for Box<F> {
    fn format_tip(&self, tip: &Tip, category_title: Option<&str>) -> Result<T> {
        (**self).format_tip(tip, category_title)
    }
}

/// Output formats selectable at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Styled terminal text
    #[default]
    Shell,
    /// Raw markdown
    Markdown,
    /// HTML fragment
    Html,
}

impl OutputFormat {
    /// Formatter for this format. `colors` only affects the shell format.
    pub fn formatter(self, colors: bool) -> Box<dyn TipFormatter<String>> {
        match self {
            OutputFormat::Shell if colors => Box::new(ShellTipFormatter::new()),
            OutputFormat::Shell => Box::new(ShellTipFormatter::plain()),
            OutputFormat::Markdown => Box::new(MarkdownTipFormatter),
            OutputFormat::Html => Box::new(HtmlTipFormatter::new()),
        }
    }
}

/// An empty category title renders the same as none at all
pub(crate) fn category(category_title: Option<&str>) -> Option<&str> {
    category_title.filter(|title| !title.is_empty())
}
