use super::{category, TipFormatter};
use crate::error::Result;
use crate::models::Tip;

/// Plain markdown: `## category`, `### title`, then the body as-is.
///
/// Nothing is escaped; tip content is expected to be markdown already.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownTipFormatter;

impl TipFormatter<String> for MarkdownTipFormatter {
    fn format_tip(&self, tip: &Tip, category_title: Option<&str>) -> Result<String> {
        let mut output = String::new();

        if let Some(category) = category(category_title) {
            output.push_str(&format!("## {}\n\n", category));
        }

        output.push_str(&format!("### {}\n\n{}", tip.title, tip.tip));

        Ok(output)
    }
}
