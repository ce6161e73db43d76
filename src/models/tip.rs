use serde::{Deserialize, Serialize};

/// A single displayable tip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tip {
    /// Short headline shown above the body
    pub title: String,
    /// Body text, may contain inline markdown (bold, italic, code, bullets)
    pub tip: String,
}

/// A named, ordered group of tips from one source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TipCollection {
    /// Human-readable collection name (e.g. "Leadership Tone")
    pub title: String,
    /// Tips in file order
    pub tips: Vec<Tip>,
}

impl Tip {
    pub fn new(title: impl Into<String>, tip: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            tip: tip.into(),
        }
    }

    /// Copy of this tip with the collection name appended to the title as `" *name*"`
    pub fn with_collection(&self, collection_title: &str) -> Self {
        Self {
            title: format!("{} *{}*", self.title, collection_title),
            tip: self.tip.clone(),
        }
    }
}
