//! Event-driven GraphML parse state
//!
//! [`ParseState`] receives element and character events in document order
//! and builds a [`Graph`] incrementally. All accumulator state lives here, so
//! its lifetime is exactly one parse.

use std::collections::HashMap;

use log::{debug, info, warn};
use quick_xml::events::BytesStart;

use super::helpers::{get_attribute, require_attribute};
use super::GraphMLError;
use crate::graph::{EdgeWeight, Graph, Node, NULL_WEIGHT};

/// Incremental GraphML-to-graph state machine
///
/// Directedness and weightedness are frozen when `<graph>` opens: a weight
/// `<key>` declared after that point does not make the graph weighted.
#[derive(Debug, Default)]
pub struct ParseState {
    graph: Option<Graph>,
    /// External node id -> internal node id
    mapping: HashMap<String, Node>,
    /// Open edges as (source, target) external ids
    edge_stack: Vec<(String, String)>,
    weight_key: Option<String>,
    weighted: bool,
    pending_weight: EdgeWeight,
    capture_weight: bool,
    text: String,
    position: u64,
    keys_seen: usize,
}

impl ParseState {
    /// Create an empty parse state
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the byte offset of the event about to be processed
    pub fn set_position(&mut self, position: u64) {
        self.position = position;
    }

    /// Handle an element start tag
    pub fn start_element(&mut self, e: &BytesStart) -> Result<(), GraphMLError> {
        match e.local_name().as_ref() {
            b"graph" => self.open_graph(e),
            b"node" => self.open_node(e),
            b"edge" => self.open_edge(e),
            b"key" => self.open_key(e),
            b"data" => self.open_data(e),
            _ => Ok(()),
        }
    }

    /// Handle character data between tags
    pub fn characters(&mut self, text: &str) {
        self.text.push_str(text);
    }

    /// Handle an element end tag, given the element's local name
    pub fn end_element(&mut self, name: &[u8]) -> Result<(), GraphMLError> {
        let result = match name {
            b"edge" => self.close_edge(),
            b"data" => self.close_data(),
            _ => Ok(()),
        };
        self.text.clear();
        result
    }

    /// Finish the parse and hand over the completed graph
    pub fn finish(self) -> Result<Graph, GraphMLError> {
        if !self.edge_stack.is_empty() {
            return Err(GraphMLError::structure(
                format!("{} <edge> element(s) never closed", self.edge_stack.len()),
                self.position,
            ));
        }
        let graph = self.graph.ok_or_else(|| {
            GraphMLError::structure("document contains no <graph> element", self.position)
        })?;

        debug!(
            "Parsed GraphML: {} nodes, {} edges, {} key declaration(s)",
            graph.number_of_nodes(),
            graph.number_of_edges(),
            self.keys_seen
        );
        Ok(graph)
    }

    fn open_graph(&mut self, e: &BytesStart) -> Result<(), GraphMLError> {
        if self.graph.is_some() {
            return Err(GraphMLError::structure(
                "nested or repeated <graph> elements are not supported",
                self.position,
            ));
        }

        let directed = get_attribute(e, "edgedefault")?.as_deref() == Some("directed");
        if directed {
            info!("Identified graph as directed");
        }
        if self.weighted {
            info!("Identified graph as weighted");
        }

        let mut graph = Graph::new(0, self.weighted, directed);
        if let Some(id) = get_attribute(e, "id")?.filter(|id| !id.is_empty()) {
            graph.set_name(id);
        }
        self.graph = Some(graph);
        Ok(())
    }

    fn open_node(&mut self, e: &BytesStart) -> Result<(), GraphMLError> {
        let position = self.position;
        let id = require_attribute(e, "node", "id", position)?;
        let graph = self
            .graph
            .as_mut()
            .ok_or_else(|| GraphMLError::structure("<node> outside of <graph>", position))?;

        let u = graph.add_node();
        if let Some(previous) = self.mapping.insert(id, u) {
            warn!(
                "Duplicate node id at byte {}: node {} replaces node {}",
                position, u, previous
            );
        }
        Ok(())
    }

    fn open_edge(&mut self, e: &BytesStart) -> Result<(), GraphMLError> {
        let position = self.position;
        if self.graph.is_none() {
            return Err(GraphMLError::structure("<edge> outside of <graph>", position));
        }
        let source = require_attribute(e, "edge", "source", position)?;
        let target = require_attribute(e, "edge", "target", position)?;
        self.edge_stack.push((source, target));
        Ok(())
    }

    fn open_key(&mut self, e: &BytesStart) -> Result<(), GraphMLError> {
        self.keys_seen += 1;

        let is_weight = get_attribute(e, "for")?.as_deref() == Some("edge")
            && get_attribute(e, "attr.name")?.as_deref() == Some("weight")
            && get_attribute(e, "attr.type")?.as_deref() == Some("double");
        if !is_weight {
            return Ok(());
        }

        let id = get_attribute(e, "id")?.unwrap_or_default();
        if self.graph.is_some() {
            warn!(
                "Edge weight key '{}' at byte {} is declared after <graph>; graph stays unweighted",
                id, self.position
            );
        }
        match &self.weight_key {
            Some(existing) => debug!("Ignoring additional weight key '{}' (using '{}')", id, existing),
            None => self.weight_key = Some(id),
        }
        self.weighted = true;
        Ok(())
    }

    fn open_data(&mut self, e: &BytesStart) -> Result<(), GraphMLError> {
        let graph_weighted = self.graph.as_ref().is_some_and(Graph::is_weighted);
        if graph_weighted {
            let key = get_attribute(e, "key")?;
            if key.is_some() && key == self.weight_key {
                if self.edge_stack.is_empty() {
                    warn!(
                        "Weight <data> at byte {} is outside any <edge>; it applies to the next edge",
                        self.position
                    );
                }
                self.capture_weight = true;
            }
        }
        Ok(())
    }

    fn close_data(&mut self) -> Result<(), GraphMLError> {
        if !self.capture_weight {
            return Ok(());
        }
        self.capture_weight = false;

        let value = self.text.trim();
        self.pending_weight = value.parse().map_err(|_| GraphMLError::InvalidWeight {
            value: value.to_string(),
            position: self.position,
        })?;
        Ok(())
    }

    fn close_edge(&mut self) -> Result<(), GraphMLError> {
        let position = self.position;
        let (source, target) = self
            .edge_stack
            .pop()
            .ok_or_else(|| GraphMLError::structure("</edge> without matching <edge>", position))?;

        let u = self.resolve(source)?;
        let v = self.resolve(target)?;
        let weight = std::mem::replace(&mut self.pending_weight, NULL_WEIGHT);

        let graph = self
            .graph
            .as_mut()
            .ok_or_else(|| GraphMLError::structure("</edge> outside of <graph>", position))?;
        if graph.is_weighted() {
            graph.add_edge_weighted(u, v, weight)?;
        } else {
            graph.add_edge(u, v)?;
        }
        Ok(())
    }

    fn resolve(&self, id: String) -> Result<Node, GraphMLError> {
        match self.mapping.get(&id) {
            Some(&u) => Ok(u),
            None => Err(GraphMLError::UnknownNode {
                id,
                position: self.position,
            }),
        }
    }
}
