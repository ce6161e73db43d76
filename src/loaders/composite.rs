use super::TipLoader;
use crate::error::Result;
use crate::models::{Tip, TipCollection};

/// Presents several loaders as one, keeping per-source identity in tip titles
#[derive(Debug, Clone)]
pub struct CompositeTipLoader {
    combined: TipCollection,
}

impl CompositeTipLoader {
    /// Combine loaders in order. Sub-loader failures surface here.
    pub fn new<I>(loaders: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: TipLoader,
    {
        let mut combined = TipCollection {
            title: String::new(),
            tips: Vec::new(),
        };

        for loader in loaders {
            merge_loader(&mut combined, &loader)?;
        }

        log::debug!(
            "Combined {} tips from collections [{}]",
            combined.tips.len(),
            combined.title
        );

        Ok(Self { combined })
    }
}

impl TipLoader for CompositeTipLoader {
    fn tips(&self) -> Result<Vec<Tip>> {
        Ok(self.combined.tips.clone())
    }

    /// Non-empty sub-loader titles joined with ", ", empty when none had one
    fn collection_title(&self) -> Option<String> {
        Some(self.combined.title.clone())
    }
}

fn merge_loader(acc: &mut TipCollection, loader: &impl TipLoader) -> Result<()> {
    let tips = loader.tips()?;

    match loader.collection_title() {
        Some(title) if !title.is_empty() => {
            acc.tips
                .extend(tips.iter().map(|tip| tip.with_collection(&title)));

            if !acc.title.is_empty() {
                acc.title.push_str(", ");
            }
            acc.title.push_str(&title);
        }
        _ => acc.tips.extend(tips),
    }

    Ok(())
}
