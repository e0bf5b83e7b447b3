//! # GraphML Codec
//!
//! Streaming reading and writing of GraphML, the XML-based graph interchange
//! format.
//!
//! ## Supported Subset
//!
//! ```text
//! graphml
//! ├── key* (for="edge" attr.name="weight" attr.type="double" marks edge weights)
//! └── graph (edgedefault="directed|undirected", id = graph name)
//!     ├── node* (id = external node id)
//!     └── edge* (source, target, optional directed)
//!         └── data? (key = weight key, text = weight)
//! ```
//!
//! Any other element or attribute is skipped.
//!
//! ## Ordering Contract
//!
//! Whether the graph is directed and whether it is weighted are decided when
//! `<graph>` opens. A weight `<key>` must therefore appear before `<graph>`;
//! one that appears later is reported in the log and otherwise ignored.
//!
//! Internal node ids are assigned in document order of `<node>` elements, so
//! the n-th node becomes node `n - 1`. The writer emits internal ids as
//! GraphML ids, which makes a write/read round trip the identity on ids.
//!
//! ## Example
//!
//! ```rust
//! use graphml_io::graphml::{GraphMLReader, GraphMLWriter};
//!
//! let xml = r#"<graphml><graph edgedefault="undirected" id="g1">
//!   <node id="a"/><node id="b"/>
//!   <edge id="e0" source="a" target="b"/>
//! </graph></graphml>"#;
//!
//! let graph = GraphMLReader::new().read_str(xml)?;
//! assert_eq!(graph.number_of_nodes(), 2);
//! assert!(graph.has_edge(0, 1));
//!
//! let out = GraphMLWriter::new().to_string(&graph)?;
//! assert!(out.contains(r#"<edge id="e0" source="0" target="1" directed="false"/>"#));
//! # Ok::<(), graphml_io::graphml::GraphMLError>(())
//! ```

use std::path::Path;

use crate::graph::Graph;

mod error;
mod helpers;
mod reader;
mod state;
mod writer;


pub use error::{ErrorKind, GraphMLError};
pub use reader::{GraphMLReader, ReaderConfig, DEFAULT_INPUT_BUFFER_SIZE};
pub use state::ParseState;
pub use writer::{GraphMLWriter, WriterConfig, WEIGHT_KEY_ID};

/// GraphML XML namespace
pub const GRAPHML_NAMESPACE: &str = "http://graphml.graphdrawing.org/xmlns";

/// XML Schema instance namespace
pub const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// Value of `xsi:schemaLocation` on written documents
pub const GRAPHML_SCHEMA_LOCATION: &str =
    "http://graphml.graphdrawing.org/xmlns http://graphml.graphdrawing.org/xmlns/1.0/graphml.xsd";

/// Read a GraphML file with default settings
pub fn read_graphml<P: AsRef<Path>>(path: P) -> Result<Graph, GraphMLError> {
    GraphMLReader::new().read(path)
}

/// Write a graph to a GraphML file with default settings
pub fn write_graphml<P: AsRef<Path>>(graph: &Graph, path: P) -> Result<(), GraphMLError> {
    GraphMLWriter::new().write(graph, path)
}
