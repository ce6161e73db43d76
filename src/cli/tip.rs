use std::path::PathBuf;

use crate::builder::DailyTipBuilder;
use crate::catalog::Catalog;
use crate::config;
use crate::display;
use crate::error::{Result, TipError};
use crate::formatters::OutputFormat;
use crate::loaders::{CompositeTipLoader, JsonTipLoader, TipLoader};
use crate::orchestrator::DefaultTipOrchestrator;
use crate::selectors::RandomTipSelector;

/// Arguments of the default (tip) command
pub struct TipOptions {
    pub collections: Vec<String>,
    pub format: Option<OutputFormat>,
    pub config: Option<PathBuf>,
    pub collections_dir: Option<PathBuf>,
    pub help: bool,
}

/// Print one random tip; returns the process exit code
pub fn run(options: TipOptions) -> Result<i32> {
    let config = match config::resolve(options.config.as_deref()) {
        Ok(config) => config,
        Err(e) if options.help => {
            log::warn!("{}", e);
            config::Config::default()
        }
        Err(e) => return Err(e),
    };
    let catalog = Catalog::new(
        options
            .collections_dir
            .unwrap_or_else(|| config.collections_dir.clone()),
    );

    if options.help {
        print!("{}", usage(&catalog));
        return Ok(0);
    }

    if options.collections.is_empty() {
        print!("{}", usage(&catalog));
        return Ok(1);
    }

    let paths = match catalog.resolve(&options.collections) {
        Ok(paths) => paths,
        Err(e @ TipError::UnknownCollections(_)) => {
            eprintln!("Error: {}\n", e);
            print!("{}", usage(&catalog));
            return Ok(1);
        }
        Err(e) => return Err(e),
    };

    let format = options.format.unwrap_or(config.format);
    let orchestrator = DailyTipBuilder::<String>::new()
        .with_loader(build_loader(&paths)?)
        .with_selector(RandomTipSelector::new())
        .with_formatter(format.formatter(display::color_enabled()))
        .with_orchestrator(DefaultTipOrchestrator::construct)
        .build()?;

    println!("{}", orchestrator.get_tip()?);
    Ok(0)
}

/// One collection loads directly; several are combined and tagged
fn build_loader(paths: &[PathBuf]) -> Result<Box<dyn TipLoader>> {
    if let [path] = paths {
        return Ok(Box::new(JsonTipLoader::new(path)?));
    }

    let loaders = paths
        .iter()
        .map(|path| JsonTipLoader::new(path))
        .collect::<Result<Vec<_>>>()?;

    Ok(Box::new(CompositeTipLoader::new(loaders)?))
}

fn usage(catalog: &Catalog) -> String {
    let mut output = String::new();

    output.push_str("Usage: daily-tip [OPTIONS] <COLLECTION>...\n\n");
    output.push_str("Available collections:\n");

    let names = catalog.names().unwrap_or_else(|e| {
        log::warn!("{}", e);
        Vec::new()
    });

    if names.is_empty() {
        output.push_str(&format!(
            "  (none found in {})\n",
            catalog.dir().display()
        ));
    }
    for name in &names {
        output.push_str(&format!("  - {}\n", name));
    }

    output.push_str("\nOptions:\n");
    output.push_str("  -f, --format <FORMAT>         shell, markdown or html\n");
    output.push_str("  -c, --config <PATH>           Path to config file\n");
    output.push_str("      --collections-dir <DIR>   Directory containing the collections\n");
    output.push_str("  -h, --help                    Print this help\n");

    output.push_str("\nExamples:\n");
    output.push_str("  daily-tip leadership-tone\n");
    output.push_str("  daily-tip leadership-tone productivity-hacks\n");
    output.push_str("  daily-tip --format html productivity-hacks\n");

    output
}
