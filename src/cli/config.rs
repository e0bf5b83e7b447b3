//! TOML configuration file support.
//!
//! Instead of passing flags on every invocation, settings can live in a file:
//!
//! ```toml
//! # graphml.toml
//! [reader]
//! input_buffer_size = 131072
//!
//! [writer]
//! indent = 4
//! compact = false
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use graphml_io::graphml::{ReaderConfig, WriterConfig};

/// Root configuration structure for graphml.toml files.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Reader settings.
    #[serde(default)]
    pub reader: ReaderSection,

    /// Writer settings.
    #[serde(default)]
    pub writer: WriterSection,
}

/// Configuration for reading GraphML input.
#[derive(Debug, Default, Deserialize)]
pub struct ReaderSection {
    /// Input buffer capacity in bytes.
    pub input_buffer_size: Option<usize>,
}

/// Configuration for writing GraphML output.
#[derive(Debug, Default, Deserialize)]
pub struct WriterSection {
    /// Indentation width in spaces.
    pub indent: Option<usize>,

    /// Write everything on a single line.
    pub compact: Option<bool>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }

    /// Load the file if one was given, otherwise use defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Reader configuration with file values applied.
    pub fn reader_config(&self) -> ReaderConfig {
        let mut config = ReaderConfig::default();
        if let Some(size) = self.reader.input_buffer_size {
            config.input_buffer_size = size;
        }
        config
    }

    /// Writer configuration; command-line values take precedence over the file.
    pub fn writer_config(&self, indent: Option<usize>, compact: bool) -> WriterConfig {
        if compact {
            return WriterConfig::compact();
        }
        if let Some(width) = indent.or(self.writer.indent) {
            return WriterConfig { indent: Some(width) };
        }
        if self.writer.compact == Some(true) {
            return WriterConfig::compact();
        }
        WriterConfig::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml = r#"
            [reader]
            input_buffer_size = 131072

            [writer]
            indent = 4
            compact = false
        "#;

        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.reader.input_buffer_size, Some(131_072));
        assert_eq!(config.writer.indent, Some(4));
        assert_eq!(config.writer.compact, Some(false));
        assert_eq!(config.reader_config().input_buffer_size, 131_072);
    }

    #[test]
    fn test_partial_config() {
        let toml = r#"
            [writer]
            compact = true
        "#;

        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.reader.input_buffer_size, None);
        assert_eq!(config.writer_config(None, false), WriterConfig::compact());
    }

    #[test]
    fn test_empty_config() {
        let config = Config::from_str("").unwrap();
        assert_eq!(config.writer.indent, None);
        assert_eq!(config.writer_config(None, false), WriterConfig::default());
    }

    #[test]
    fn test_flags_override_file() {
        let config = Config::from_str("[writer]\nindent = 8\n").unwrap();
        assert_eq!(config.writer_config(Some(1), false).indent, Some(1));
        assert_eq!(config.writer_config(None, true), WriterConfig::compact());
        assert_eq!(config.writer_config(None, false).indent, Some(8));
    }

    #[test]
    fn test_invalid_config() {
        assert!(Config::from_str("[writer]\nindent = \"wide\"\n").is_err());
    }
}
