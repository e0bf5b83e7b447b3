//! # graphml
//!
//! Command-line front end for the `graphml-io` library.
//!
//! ## Usage
//!
//! ```bash
//! # Show the shape of a GraphML file
//! graphml info network.graphml
//!
//! # Re-write a file with dense node ids
//! graphml convert network.graphml normalized.graphml
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbosity());
    cli::dispatch(cli)
}
