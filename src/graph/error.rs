use super::Node;

/// Errors raised by graph mutation
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// An edge endpoint does not name an existing node
    #[error("node {node} out of range (graph has {count} nodes)")]
    NodeOutOfRange {
        /// The offending node id
        node: Node,
        /// Number of nodes in the graph at the time of the call
        count: u64,
    },
}
