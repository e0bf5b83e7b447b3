use anyhow::{Context, Result};
use std::path::PathBuf;

use graphml_io::graphml::GraphMLReader;

use super::config::Config;

/// Display information about a GraphML file
pub fn run(file: PathBuf, json: bool, config: Option<PathBuf>) -> Result<()> {
    if !file.exists() {
        anyhow::bail!("File does not exist: {}", file.display());
    }

    let config = Config::load(config.as_deref())?;
    let reader = GraphMLReader::with_config(config.reader_config());
    let graph = reader
        .read(&file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let summary = graph.summary();
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&summary).context("Failed to serialize summary")?
        );
    } else {
        println!("GraphML File Information");
        println!("========================");
        println!("File: {}", file.display());
        println!();
        println!("{}", summary);
    }

    Ok(())
}
