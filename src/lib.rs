//! # graphml-io - GraphML Reading and Writing
//!
//! `graphml-io` reads GraphML documents into a compact in-memory graph and
//! writes graphs back out as GraphML.
//!
//! ## Key Features
//!
//! - **Streaming Reader**: Pull-parses the document with `quick-xml` and builds
//!   the graph incrementally; the whole document is never held in memory.
//!
//! - **Edge Weights**: A `<key for="edge" attr.name="weight" attr.type="double">`
//!   declaration makes the graph weighted; matching `<data>` values become edge
//!   weights.
//!
//! - **Dense Node Ids**: Document node ids are remapped to contiguous,
//!   zero-based ids in document order.
//!
//! - **Round Trip**: Written files read back to the same graph, node for node
//!   and edge for edge.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use graphml_io::graph::Graph;
//! use graphml_io::graphml::{read_graphml, write_graphml};
//!
//! let mut graph = Graph::new(3, true, false);
//! graph.set_name("triangle");
//! graph.add_edge_weighted(0, 1, 1.5)?;
//! graph.add_edge_weighted(1, 2, 2.0)?;
//! graph.add_edge_weighted(2, 0, 0.5)?;
//!
//! write_graphml(&graph, "triangle.graphml")?;
//! let back = read_graphml("triangle.graphml")?;
//! assert_eq!(back.weight(1, 2), 2.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Architecture
//!
//! - [`graph`]: Adjacency-list graph storage
//! - [`graphml`]: GraphML parse state machine, reader and writer

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod graph;
pub mod graphml;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::graph::{
        EdgeWeight, Graph, GraphError, GraphSummary, Node, DEFAULT_EDGE_WEIGHT, NULL_WEIGHT,
    };
    pub use crate::graphml::{
        read_graphml, write_graphml, ErrorKind, GraphMLError, GraphMLReader, GraphMLWriter,
        ReaderConfig, WriterConfig,
    };
}
