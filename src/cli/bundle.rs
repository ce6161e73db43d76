use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use crate::catalog::Catalog;
use crate::config;
use crate::error::Result;
use crate::models::TipCollection;

/// File name of the browser data script
pub const BUNDLE_FILE: &str = "tip-data.js";

/// Bundle every collection into `<out>/tip-data.js` for the browser page
pub fn run(
    config_path: Option<PathBuf>,
    collections_dir: Option<PathBuf>,
    out: Option<PathBuf>,
) -> Result<()> {
    let config = config::resolve(config_path.as_deref())?;
    let catalog = Catalog::new(collections_dir.unwrap_or(config.collections_dir));
    let out_dir = out.unwrap_or(config.bundle_dir);

    let collections = catalog.load_all()?;

    if collections.is_empty() {
        println!("No collection files found in {}", catalog.dir().display());
        return Ok(());
    }

    let script = render_bundle(&collections, Utc::now())?;

    fs::create_dir_all(&out_dir)?;
    let output_path = out_dir.join(BUNDLE_FILE);
    fs::write(&output_path, script)?;

    println!(
        "Collections bundled ({}): {}",
        collections.len(),
        output_path.display()
    );

    Ok(())
}

/// Script exposing the collections as `window.tipCollections`
fn render_bundle(
    collections: &BTreeMap<String, TipCollection>,
    generated_at: DateTime<Utc>,
) -> Result<String> {
    let json = serde_json::to_string_pretty(collections)?;

    Ok(format!(
        "// Generated by daily-tip on {}\nwindow.tipCollections = {};\n",
        generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
        json
    ))
}
