use once_cell::sync::Lazy;
use pulldown_cmark::{html, Options, Parser};
use regex::{Captures, Regex};

use super::{category, TipFormatter};
use crate::error::Result;
use crate::models::Tip;

/// A trailing ` *name*` on a title, as appended by the composite loader.
/// Anchored at the end so only the last italic span is demoted.
static COLLECTION_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s\*([^*]+)\*$").expect("collection suffix pattern"));

/// Markdown to HTML conversion
pub trait MarkdownRenderer {
    fn render_markdown(&self, markdown: &str) -> String;
}

/// CommonMark renderer with tables and strikethrough; raw HTML passes through
#[derive(Debug, Default, Clone, Copy)]
pub struct CmarkRenderer;

impl MarkdownRenderer for CmarkRenderer {
    fn render_markdown(&self, markdown: &str) -> String {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);

        let parser = Parser::new_ext(markdown, options);
        let mut output = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut output, parser);
        output
    }
}

/// HTML output built by assembling markdown and handing it to a `MarkdownRenderer`
pub struct HtmlTipFormatter {
    renderer: Box<dyn MarkdownRenderer>,
}

impl HtmlTipFormatter {
    pub fn new() -> Self {
        Self::with_renderer(CmarkRenderer)
    }

    pub fn with_renderer(renderer: impl MarkdownRenderer + 'static) -> Self {
        Self {
            renderer: Box::new(renderer),
        }
    }

    fn build_markdown(&self, tip: &Tip, category_title: Option<&str>) -> String {
        let title = format!("### {}", style_collection_name(&tip.title));

        match category(category_title) {
            Some(category_title) => format!(
                "<p class=\"category-title\">{}</p>\n\n{}\n\n{}",
                category_title, title, tip.tip
            ),
            None => format!("{}\n\n{}", title, tip.tip),
        }
    }
}

impl Default for HtmlTipFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl TipFormatter<String> for HtmlTipFormatter {
    fn format_tip(&self, tip: &Tip, category_title: Option<&str>) -> Result<String> {
        let markdown = self.build_markdown(tip, category_title);
        Ok(self.renderer.render_markdown(&markdown))
    }
}

/// Replace a trailing collection name with a small grey italic block
fn style_collection_name(title: &str) -> String {
    COLLECTION_SUFFIX
        .replace(title, |caps: &Captures| {
            format!(
                " <div style=\"font-size: 0.7em; color: #999; font-style: italic;\">{}</div>",
                &caps[1]
            )
        })
        .into_owned()
}
