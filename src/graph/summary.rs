use std::fmt;

use serde::Serialize;

use super::{EdgeWeight, Graph};

/// Shape of a graph, suitable for display or JSON output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphSummary {
    /// Graph name (may be empty)
    pub name: String,
    /// Whether edges are directed
    pub directed: bool,
    /// Whether edges carry weights
    pub weighted: bool,
    /// Number of nodes
    pub nodes: u64,
    /// Number of edges
    pub edges: u64,
    /// Number of self-loops
    pub self_loops: u64,
    /// Sum of all edge weights (weighted graphs only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_weight: Option<EdgeWeight>,
}

impl GraphSummary {
    /// Compute the summary of `graph`
    pub fn of(graph: &Graph) -> Self {
        Self {
            name: graph.name().to_string(),
            directed: graph.is_directed(),
            weighted: graph.is_weighted(),
            nodes: graph.number_of_nodes(),
            edges: graph.number_of_edges(),
            self_loops: graph.edges().filter(|(u, v)| u == v).count() as u64,
            total_weight: graph.is_weighted().then(|| graph.total_edge_weight()),
        }
    }
}

impl fmt::Display for GraphSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = if self.name.is_empty() { "<unnamed>" } else { &self.name };
        writeln!(f, "Graph: {}", name)?;
        writeln!(f, "  Directed: {}", self.directed)?;
        writeln!(f, "  Weighted: {}", self.weighted)?;
        writeln!(f, "  Nodes: {}", self.nodes)?;
        writeln!(f, "  Edges: {}", self.edges)?;
        write!(f, "  Self-loops: {}", self.self_loops)?;
        if let Some(total) = self.total_weight {
            write!(f, "\n  Total weight: {}", total)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_counts() {
        let mut g = Graph::new(3, true, true);
        g.set_name("g");
        g.add_edge_weighted(0, 1, 2.0).unwrap();
        g.add_edge_weighted(2, 2, 0.5).unwrap();

        let s = g.summary();
        assert_eq!(s.name, "g");
        assert_eq!(s.nodes, 3);
        assert_eq!(s.edges, 2);
        assert_eq!(s.self_loops, 1);
        assert_eq!(s.total_weight, Some(2.5));
    }

    #[test]
    fn test_summary_json_omits_weight_when_unweighted() {
        let g = Graph::new(1, false, false);
        let json = serde_json::to_string(&g.summary()).unwrap();
        assert!(!json.contains("total_weight"));
        assert!(json.contains("\"nodes\":1"));
    }

    #[test]
    fn test_summary_display() {
        let g = Graph::new(0, false, false);
        let text = g.summary().to_string();
        assert!(text.contains("<unnamed>"));
        assert!(text.contains("Edges: 0"));
    }
}
