//! # In-memory graph storage
//!
//! A compact adjacency-list graph with dense, zero-based node identifiers.
//! Directedness and weightedness are fixed when the graph is constructed;
//! nodes are only ever appended, so identifiers stay contiguous.
//!
//! This is the storage the GraphML codec reads into and writes from. It is
//! intentionally small: node creation, edge insertion, weight lookup and
//! iteration in insertion order.

mod error;
mod summary;

pub use error::GraphError;
pub use summary::GraphSummary;

/// Node identifier (0-based, dense)
pub type Node = u64;

/// Edge weight type
pub type EdgeWeight = f64;

/// Weight reported for edges of unweighted graphs
pub const DEFAULT_EDGE_WEIGHT: EdgeWeight = 1.0;

/// Weight reported for node pairs that are not connected
pub const NULL_WEIGHT: EdgeWeight = 0.0;

/// A graph with dense node ids and a fixed directed/weighted configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    name: String,
    directed: bool,
    weighted: bool,
    /// Outgoing adjacency; undirected edges are recorded at both endpoints
    adjacency: Vec<Vec<(Node, EdgeWeight)>>,
    /// Edges in insertion order, each stored once
    edges: Vec<(Node, Node, EdgeWeight)>,
}

impl Graph {
    /// Create a graph with `n` isolated nodes
    pub fn new(n: u64, weighted: bool, directed: bool) -> Self {
        Self {
            name: String::new(),
            directed,
            weighted,
            adjacency: vec![Vec::new(); n as usize],
            edges: Vec::new(),
        }
    }

    /// Append a node and return its id
    pub fn add_node(&mut self) -> Node {
        self.adjacency.push(Vec::new());
        (self.adjacency.len() - 1) as Node
    }

    /// Insert the edge `(u, v)` with the default weight
    pub fn add_edge(&mut self, u: Node, v: Node) -> Result<(), GraphError> {
        self.add_edge_weighted(u, v, DEFAULT_EDGE_WEIGHT)
    }

    /// Insert the edge `(u, v)` with weight `w`
    ///
    /// On unweighted graphs the weight is discarded and every edge reports
    /// [`DEFAULT_EDGE_WEIGHT`].
    pub fn add_edge_weighted(&mut self, u: Node, v: Node, w: EdgeWeight) -> Result<(), GraphError> {
        self.check_node(u)?;
        self.check_node(v)?;

        let w = if self.weighted { w } else { DEFAULT_EDGE_WEIGHT };
        self.adjacency[u as usize].push((v, w));
        if !self.directed && u != v {
            self.adjacency[v as usize].push((u, w));
        }
        self.edges.push((u, v, w));
        Ok(())
    }

    fn check_node(&self, node: Node) -> Result<(), GraphError> {
        if self.has_node(node) {
            Ok(())
        } else {
            Err(GraphError::NodeOutOfRange {
                node,
                count: self.number_of_nodes(),
            })
        }
    }

    /// Set the graph name
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Graph name (empty if never set)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether edges are directed
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Whether edges carry weights
    pub fn is_weighted(&self) -> bool {
        self.weighted
    }

    /// Number of nodes
    pub fn number_of_nodes(&self) -> u64 {
        self.adjacency.len() as u64
    }

    /// Number of edges
    pub fn number_of_edges(&self) -> u64 {
        self.edges.len() as u64
    }

    /// Whether `node` exists
    pub fn has_node(&self, node: Node) -> bool {
        node < self.number_of_nodes()
    }

    /// Whether an edge joins `u` to `v` (in either direction when undirected)
    pub fn has_edge(&self, u: Node, v: Node) -> bool {
        self.find(u, v).is_some()
    }

    /// Node ids in increasing order
    pub fn nodes(&self) -> impl Iterator<Item = Node> + '_ {
        0..self.number_of_nodes()
    }

    /// Edges as `(source, target)` in insertion order
    pub fn edges(&self) -> impl Iterator<Item = (Node, Node)> + '_ {
        self.edges.iter().map(|&(u, v, _)| (u, v))
    }

    /// Edges with their weights, in insertion order
    pub fn weighted_edges(&self) -> impl Iterator<Item = (Node, Node, EdgeWeight)> + '_ {
        self.edges.iter().copied()
    }

    /// Weight of the edge `(u, v)`
    ///
    /// Returns [`NULL_WEIGHT`] if no such edge exists. With parallel edges the
    /// weight of the first inserted one is reported.
    pub fn weight(&self, u: Node, v: Node) -> EdgeWeight {
        self.find(u, v).unwrap_or(NULL_WEIGHT)
    }

    /// Total edge weight
    pub fn total_edge_weight(&self) -> EdgeWeight {
        self.edges.iter().map(|&(_, _, w)| w).sum()
    }

    /// Out-degree (degree for undirected graphs) of `node`
    pub fn degree(&self, node: Node) -> usize {
        self.adjacency
            .get(node as usize)
            .map(|adj| adj.len())
            .unwrap_or(0)
    }

    fn find(&self, u: Node, v: Node) -> Option<EdgeWeight> {
        self.adjacency
            .get(u as usize)?
            .iter()
            .find(|&&(x, _)| x == v)
            .map(|&(_, w)| w)
    }

    /// Summary of the graph's shape
    pub fn summary(&self) -> GraphSummary {
        GraphSummary::of(self)
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new(0, false, false)
    }
}
