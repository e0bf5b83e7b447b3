use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

use log::debug;
use quick_xml::events::Event;
use quick_xml::Reader;

use super::state::ParseState;
use super::GraphMLError;
use crate::graph::Graph;

/// Default input buffer size (64 KiB)
pub const DEFAULT_INPUT_BUFFER_SIZE: usize = 64 * 1024;

/// Configuration for [`GraphMLReader`]
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Capacity of the buffer wrapped around input files
    pub input_buffer_size: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            input_buffer_size: DEFAULT_INPUT_BUFFER_SIZE,
        }
    }
}

/// Streaming GraphML reader
///
/// Each call to [`read`](Self::read) or [`read_from`](Self::read_from) runs
/// a fresh [`ParseState`], so one reader can be reused for many documents.
#[derive(Debug, Clone, Default)]
pub struct GraphMLReader {
    config: ReaderConfig,
}

impl GraphMLReader {
    /// Create a reader with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reader with custom configuration
    pub fn with_config(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Read a GraphML file
    pub fn read<P: AsRef<Path>>(&self, path: P) -> Result<Graph, GraphMLError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| GraphMLError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Reading GraphML from {}", path.display());

        let reader = BufReader::with_capacity(self.config.input_buffer_size, file);
        self.read_from(reader)
    }

    /// Read GraphML from any buffered source
    pub fn read_from<R: BufRead>(&self, reader: R) -> Result<Graph, GraphMLError> {
        let mut xml = Reader::from_reader(reader);
        xml.config_mut().trim_text(true);

        let mut state = ParseState::new();
        let mut buf = Vec::new();
        loop {
            state.set_position(xml.buffer_position() as u64);
            match xml.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) => state.start_element(e)?,
                Ok(Event::Empty(ref e)) => {
                    state.start_element(e)?;
                    state.end_element(e.local_name().as_ref())?;
                }
                Ok(Event::Text(ref t)) => state.characters(&t.unescape()?),
                Ok(Event::CData(ref c)) => state.characters(std::str::from_utf8(c)?),
                Ok(Event::End(ref e)) => state.end_element(e.local_name().as_ref())?,
                Ok(Event::Eof) => break,
                Err(quick_xml::Error::Io(e)) => {
                    let e = Arc::try_unwrap(e)
                        .unwrap_or_else(|shared| io::Error::new(shared.kind(), shared.to_string()));
                    return Err(GraphMLError::IoError(e));
                }
                Err(e) => {
                    return Err(GraphMLError::Syntax {
                        position: xml.error_position() as u64,
                        source: e,
                    })
                }
                _ => {}
            }
            buf.clear();
        }

        state.finish()
    }

    /// Read GraphML from a string
    pub fn read_str(&self, xml: &str) -> Result<Graph, GraphMLError> {
        self.read_from(xml.as_bytes())
    }
}
