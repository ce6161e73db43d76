//! Terminal formatting with crossterm styles (via termimad)

use std::fmt::Display;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use termimad::crossterm::style::{style, StyledContent, Stylize};

use super::{category, TipFormatter};
use crate::error::Result;
use crate::models::Tip;

const RULE_CHAR: char = '─';
const RULE_WIDTH: usize = 80;
const BULLET: char = '•';

// Applied in this order; each pass only sees what earlier passes left behind.
static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("bold pattern"));
static ITALIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*([^*\n]+?)\*").expect("italic pattern"));
static INLINE_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"`(.+?)`").expect("inline code pattern"));
static BULLET_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*[-*][ \t]+(.+)$").expect("bullet pattern"));

/// Tip framed by horizontal rules, with inline markdown turned into terminal styles
#[derive(Debug, Clone, Copy)]
pub struct ShellTipFormatter {
    colors: bool,
}

impl ShellTipFormatter {
    pub fn new() -> Self {
        Self { colors: true }
    }

    /// Same layout and markup handling, without control sequences
    pub fn plain() -> Self {
        Self { colors: false }
    }

    fn paint<D: Display>(&self, content: StyledContent<D>) -> String {
        if self.colors {
            content.to_string()
        } else {
            content.content().to_string()
        }
    }

    fn horizontal_rule(&self) -> String {
        let rule: String = std::iter::repeat(RULE_CHAR).take(RULE_WIDTH).collect();
        self.paint(style(rule).dark_grey())
    }

    fn format_title(&self, title: &str) -> String {
        self.paint(style(title).bold().cyan())
    }

    fn format_category(&self, category_title: &str) -> String {
        self.paint(style(category_title).bold().magenta())
    }

    fn format_markdown(&self, text: &str) -> String {
        let text = BOLD.replace_all(text, |caps: &Captures| self.paint(style(&caps[1]).bold()));
        let text = ITALIC.replace_all(&text, |caps: &Captures| {
            self.paint(style(&caps[1]).dark_grey())
        });
        let text = INLINE_CODE.replace_all(&text, |caps: &Captures| {
            self.paint(style(&caps[1]).yellow())
        });
        let text = BULLET_LINE.replace_all(&text, |caps: &Captures| {
            format!("  {} {}", self.paint(style(BULLET).cyan()), &caps[1])
        });

        text.into_owned()
    }
}

impl Default for ShellTipFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl TipFormatter<String> for ShellTipFormatter {
    fn format_tip(&self, tip: &Tip, category_title: Option<&str>) -> Result<String> {
        let rule = self.horizontal_rule();
        let title = self.format_title(&tip.title);
        let body = self.format_markdown(&tip.tip);

        let output = match category(category_title) {
            Some(category_title) => format!(
                "{rule}\n{}\n\n{title}\n\n{body}\n{rule}",
                self.format_category(category_title)
            ),
            None => format!("{rule}\n{title}\n\n{body}\n{rule}"),
        };

        Ok(output)
    }
}
