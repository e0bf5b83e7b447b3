use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

use graphml_io::graphml::{GraphMLReader, GraphMLWriter};

use super::config::Config;

/// Read a GraphML file and write it back with dense node ids
pub fn run(
    input: PathBuf,
    output: PathBuf,
    config: Option<PathBuf>,
    indent: Option<usize>,
    compact: bool,
) -> Result<()> {
    // Validate input file exists
    if !input.exists() {
        anyhow::bail!("Input file does not exist: {}", input.display());
    }

    let config = Config::load(config.as_deref())?;
    let writer_config = config.writer_config(indent, compact);

    info!("GraphML Converter");
    info!("=================");
    info!("Input:  {}", input.display());
    info!("Output: {}", output.display());
    match writer_config.indent {
        Some(width) => info!("Indent: {} spaces", width),
        None => info!("Indent: none (compact)"),
    }

    let graph = GraphMLReader::with_config(config.reader_config())
        .read(&input)
        .with_context(|| format!("Failed to read {}", input.display()))?;

    GraphMLWriter::with_config(writer_config)
        .write(&graph, &output)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    info!("Conversion complete!");
    info!("  Nodes: {}", graph.number_of_nodes());
    info!("  Edges: {}", graph.number_of_edges());
    info!("  Directed: {}", graph.is_directed());
    info!("  Weighted: {}", graph.is_weighted());

    let file_size = std::fs::metadata(&output).map(|m| m.len()).unwrap_or(0);
    info!("  Output file size: {} bytes", file_size);

    Ok(())
}
