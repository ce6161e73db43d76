//! Tip loaders module
//!
//! Implements the sources a pipeline can read tips from:
//! - JsonTipLoader: Parse a collection file eagerly at construction
//! - CompositeTipLoader: Flatten several loaders, tagging tips with their collection
//! - PoisonTipLoader: Fails on use, marks an unconfigured builder slot

pub mod composite;
pub mod json;
pub mod poison;

pub use composite::CompositeTipLoader;
pub use json::JsonTipLoader;
pub use poison::PoisonTipLoader;

use crate::error::Result;
use crate::models::Tip;

/// A source of tips
pub trait TipLoader {
    /// All tips from this source, identical on every call
    fn tips(&self) -> Result<Vec<Tip>>;

    /// Name of the source collection, if it has one.
    ///
    /// Loaders returning `None` contribute untagged tips when combined.
    fn collection_title(&self) -> Option<String> {
        None
    }
}

impl<L: TipLoader + ?Sized> TipLoader for Box<L> {
    fn tips(&self) -> Result<Vec<Tip>> {
        (**self).tips()
    }

    fn collection_title(&self) -> Option<String> {
        (**self).collection_title()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::TipLoader;
    use crate::error::Result;
    use crate::models::Tip;

    /// In-memory loader whose backing list stays mutable through a shared handle
    pub struct StaticLoader {
        pub tips: Rc<RefCell<Vec<Tip>>>,
        pub title: Option<String>,
    }

    impl StaticLoader {
        pub fn new(tips: Vec<Tip>, title: Option<&str>) -> Self {
            Self {
                tips: Rc::new(RefCell::new(tips)),
                title: title.map(str::to_string),
            }
        }
    }

    impl TipLoader for StaticLoader {
        fn tips(&self) -> Result<Vec<Tip>> {
            Ok(self.tips.borrow().clone())
        }

        fn collection_title(&self) -> Option<String> {
            self.title.clone()
        }
    }
}
