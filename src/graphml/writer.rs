use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use super::{GraphMLError, GRAPHML_NAMESPACE, GRAPHML_SCHEMA_LOCATION, XSI_NAMESPACE};
use crate::graph::Graph;

/// Id of the `<key>` element declaring edge weights in written documents
pub const WEIGHT_KEY_ID: &str = "d1";

/// Configuration for [`GraphMLWriter`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriterConfig {
    /// Indentation width in spaces; `None` writes everything on one line
    pub indent: Option<usize>,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self { indent: Some(2) }
    }
}

impl WriterConfig {
    /// Single-line output without indentation
    pub fn compact() -> Self {
        Self { indent: None }
    }
}

/// GraphML writer
///
/// Nodes are written with their internal id as GraphML id. Every edge gets a
/// `directed` attribute mirroring the whole graph.
#[derive(Debug, Default)]
pub struct GraphMLWriter {
    config: WriterConfig,
    edge_id_counter: u64,
}

impl GraphMLWriter {
    /// Create a writer with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer with custom configuration
    pub fn with_config(config: WriterConfig) -> Self {
        Self {
            config,
            edge_id_counter: 0,
        }
    }

    /// Write `graph` to a file, replacing any existing content
    pub fn write<P: AsRef<Path>>(&mut self, graph: &Graph, path: P) -> Result<(), GraphMLError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| GraphMLError::Create {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Writing GraphML to {}", path.display());

        let mut out = BufWriter::new(file);
        self.write_to(graph, &mut out)?;
        out.flush()?;
        Ok(())
    }

    /// Write `graph` to any sink
    pub fn write_to<W: Write>(&mut self, graph: &Graph, out: W) -> Result<(), GraphMLError> {
        self.edge_id_counter = 0;

        match self.config.indent {
            Some(width) => self.emit(graph, &mut Writer::new_with_indent(out, b' ', width)),
            None => self.emit(graph, &mut Writer::new(out)),
        }
    }

    /// Render `graph` as a GraphML string
    pub fn to_string(&mut self, graph: &Graph) -> Result<String, GraphMLError> {
        let mut buf = Vec::new();
        self.write_to(graph, &mut buf)?;
        String::from_utf8(buf).map_err(|e| GraphMLError::Utf8Error(e.utf8_error()))
    }

    fn emit<W: Write>(&mut self, graph: &Graph, w: &mut Writer<W>) -> Result<(), GraphMLError> {
        w.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

        let mut root = BytesStart::new("graphml");
        root.push_attribute(("xmlns", GRAPHML_NAMESPACE));
        root.push_attribute(("xmlns:xsi", XSI_NAMESPACE));
        root.push_attribute(("xsi:schemaLocation", GRAPHML_SCHEMA_LOCATION));
        w.write_event(Event::Start(root))?;

        let weighted = graph.is_weighted();
        if weighted {
            let mut key = BytesStart::new("key");
            key.push_attribute(("for", "edge"));
            key.push_attribute(("id", WEIGHT_KEY_ID));
            key.push_attribute(("attr.name", "weight"));
            key.push_attribute(("attr.type", "double"));
            w.write_event(Event::Empty(key))?;
        }

        let (edgedefault, directed) = if graph.is_directed() {
            ("directed", "true")
        } else {
            ("undirected", "false")
        };
        let mut graph_start = BytesStart::new("graph");
        graph_start.push_attribute(("edgedefault", edgedefault));
        graph_start.push_attribute(("id", graph.name()));
        w.write_event(Event::Start(graph_start))?;

        for u in graph.nodes() {
            let id = u.to_string();
            let mut node = BytesStart::new("node");
            node.push_attribute(("id", id.as_str()));
            w.write_event(Event::Empty(node))?;
        }

        for (u, v, weight) in graph.weighted_edges() {
            let id = format!("e{}", self.edge_id_counter);
            self.edge_id_counter += 1;
            let source = u.to_string();
            let target = v.to_string();

            let mut edge = BytesStart::new("edge");
            edge.push_attribute(("id", id.as_str()));
            edge.push_attribute(("source", source.as_str()));
            edge.push_attribute(("target", target.as_str()));
            edge.push_attribute(("directed", directed));

            if weighted {
                w.write_event(Event::Start(edge))?;
                let mut data = BytesStart::new("data");
                data.push_attribute(("key", WEIGHT_KEY_ID));
                w.write_event(Event::Start(data))?;
                w.write_event(Event::Text(BytesText::new(&weight.to_string())))?;
                w.write_event(Event::End(BytesEnd::new("data")))?;
                w.write_event(Event::End(BytesEnd::new("edge")))?;
            } else {
                w.write_event(Event::Empty(edge))?;
            }
        }

        w.write_event(Event::End(BytesEnd::new("graph")))?;
        w.write_event(Event::End(BytesEnd::new("graphml")))?;

        debug!(
            "Wrote {} nodes and {} edges",
            graph.number_of_nodes(),
            self.edge_id_counter
        );
        Ok(())
    }
}
