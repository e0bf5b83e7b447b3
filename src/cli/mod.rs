use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod config;
mod convert;
mod info;

/// graphml - GraphML inspection and conversion
#[derive(Parser)]
#[command(name = "graphml")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display information about a GraphML file
    Info {
        /// Input GraphML file path
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,

        /// Load settings from a TOML config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// Read a GraphML file and write it back with dense node ids
    Convert {
        /// Input GraphML file path
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output GraphML file path
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Load settings from a TOML config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Indentation width in spaces
        #[arg(short = 'i', long, conflicts_with = "compact")]
        indent: Option<usize>,

        /// Write the document on a single line
        #[arg(long)]
        compact: bool,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Info { file, json, config } => info::run(file, json, config),
        Commands::Convert {
            input,
            output,
            config,
            indent,
            compact,
        } => convert::run(input, output, config, indent, compact),
    }
}
