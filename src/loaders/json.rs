use std::fs;
use std::path::Path;

use super::TipLoader;
use crate::error::{Result, TipError};
use crate::models::{Tip, TipCollection};

/// Loader backed by a JSON collection file, parsed once at construction
#[derive(Debug, Clone)]
pub struct JsonTipLoader {
    collection: TipCollection,
}

impl JsonTipLoader {
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let collection = read_collection(path)?;

        log::debug!(
            "Loaded {} tips from '{}' ({})",
            collection.tips.len(),
            path.display(),
            collection.title
        );

        Ok(Self { collection })
    }
}

impl TipLoader for JsonTipLoader {
    fn tips(&self) -> Result<Vec<Tip>> {
        Ok(self.collection.tips.clone())
    }

    fn collection_title(&self) -> Option<String> {
        Some(self.collection.title.clone())
    }
}

/// Read and validate a tip collection file
pub fn read_collection(path: &Path) -> Result<TipCollection> {
    let content = fs::read_to_string(path).map_err(|e| {
        TipError::Load(format!(
            "Cannot read tip collection '{}': {}",
            path.display(),
            e
        ))
    })?;

    serde_json::from_str(&content).map_err(|e| {
        TipError::Load(format!(
            "Invalid tip collection '{}': {}",
            path.display(),
            e
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const VALID: &str = r#"{
        "title": "Productivity Hacks",
        "tips": [
            {"title": "Batch email", "tip": "Check mail **twice** a day."},
            {"title": "Two minutes", "tip": "If it takes less than two minutes, do it now."}
        ]
    }"#;

    fn write_collection(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_loads_tips_and_title() {
        let temp = TempDir::new().unwrap();
        let path = write_collection(&temp, "productivity.json", VALID);

        let loader = JsonTipLoader::new(&path).unwrap();
        let tips = loader.tips().unwrap();

        assert_eq!(tips.len(), 2);
        assert_eq!(tips[0].title, "Batch email");
        assert_eq!(loader.collection_title().as_deref(), Some("Productivity Hacks"));
    }

    #[test]
    fn test_repeated_calls_return_same_tips() {
        let temp = TempDir::new().unwrap();
        let path = write_collection(&temp, "productivity.json", VALID);

        let loader = JsonTipLoader::new(&path).unwrap();
        assert_eq!(loader.tips().unwrap(), loader.tips().unwrap());
    }

    #[test]
    fn test_file_is_read_at_construction() {
        let temp = TempDir::new().unwrap();
        let path = write_collection(&temp, "productivity.json", VALID);

        let loader = JsonTipLoader::new(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(loader.tips().unwrap().len(), 2);
    }

    #[test]
    fn test_missing_file_is_load_error() {
        let result = JsonTipLoader::new("/nonexistent/collection.json");
        assert!(matches!(result, Err(TipError::Load(_))));
    }

    #[test]
    fn test_malformed_json_is_load_error() {
        let temp = TempDir::new().unwrap();
        let path = write_collection(&temp, "broken.json", "{ \"title\": ");

        let result = JsonTipLoader::new(&path);
        assert!(matches!(result, Err(TipError::Load(_))));
    }

    #[test]
    fn test_missing_tips_is_load_error() {
        let temp = TempDir::new().unwrap();
        let path = write_collection(&temp, "no-tips.json", r#"{"title": "Empty"}"#);

        let err = JsonTipLoader::new(&path).unwrap_err();
        assert!(matches!(err, TipError::Load(_)));
        assert!(err.to_string().contains("tips"));
    }

    #[test]
    fn test_missing_title_is_load_error() {
        let temp = TempDir::new().unwrap();
        let path = write_collection(&temp, "no-title.json", r#"{"tips": []}"#);

        let err = JsonTipLoader::new(&path).unwrap_err();
        assert!(matches!(err, TipError::Load(_)));
        assert!(err.to_string().contains("title"));
    }
}
