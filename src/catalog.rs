//! Collection catalog
//!
//! Discovers `<name>.json` tip collections in a directory and maps
//! collection names to files.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{Result, TipError};
use crate::loaders::json::read_collection;
use crate::models::TipCollection;

const COLLECTION_EXTENSION: &str = "json";

/// Subcommand names; a collection with one of these names cannot be selected
const RESERVED_NAMES: [&str; 2] = ["bundle", "config"];

/// Tip collections available in one directory
pub struct Catalog {
    dir: PathBuf,
}

impl Catalog {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Names of all collections, sorted
    pub fn names(&self) -> Result<Vec<String>> {
        if !self.dir.is_dir() {
            return Err(TipError::Load(format!(
                "Collections directory does not exist: {}",
                self.dir.display()
            )));
        }

        // Walk directory (max depth 1 - no recursion)
        let mut names: Vec<String> = WalkDir::new(&self.dir)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| collection_name(entry.path()))
            .filter(|name| {
                let reserved = RESERVED_NAMES.contains(&name.as_str());
                if reserved {
                    log::warn!("Skipping collection '{}': name is a subcommand", name);
                }
                !reserved
            })
            .collect();

        names.sort();
        Ok(names)
    }

    /// File backing a collection name (whether or not it exists)
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", name, COLLECTION_EXTENSION))
    }

    /// Paths for the requested names, or every name that is not a collection
    pub fn resolve(&self, names: &[String]) -> Result<Vec<PathBuf>> {
        let (found, missing): (Vec<_>, Vec<_>) = names
            .iter()
            .map(|name| (name, self.path_for(name)))
            .partition(|(_, path)| path.is_file());

        if !missing.is_empty() {
            return Err(TipError::UnknownCollections(
                missing.into_iter().map(|(name, _)| name.clone()).collect(),
            ));
        }

        Ok(found.into_iter().map(|(_, path)| path).collect())
    }

    /// Every collection keyed by name
    pub fn load_all(&self) -> Result<BTreeMap<String, TipCollection>> {
        let mut collections = BTreeMap::new();

        for name in self.names()? {
            let collection = read_collection(&self.path_for(&name))?;
            collections.insert(name, collection);
        }

        Ok(collections)
    }
}

fn collection_name(path: &Path) -> Option<String> {
    let is_collection = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == COLLECTION_EXTENSION);

    if !is_collection {
        return None;
    }

    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(str::to_string)
}
