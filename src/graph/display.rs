//! Plain-text dump of a graph.

use core::fmt;

use crate::graph::undirected::Graph;

/// Adapter returned by [`Graph::display`].
///
/// Prints one line per node listing the payloads of its incident edges,
/// then one line per edge naming both endpoint payloads:
///
/// ```text
/// Node: A has edges: 8 2
/// Node: B has edges: 8
/// Node: C has edges: 2
/// Node: D has no edges.
/// Edge 8 has endpoints A (head) and B (tail)
/// Edge 2 has endpoints A (head) and C (tail)
/// ```
pub struct GraphDisplay<'a, N, E> {
    graph: &'a Graph<N, E>,
}

impl<N, E> Graph<N, E>
where
    N: fmt::Display,
    E: fmt::Display,
{
    /// Returns a [`fmt::Display`] adapter that dumps nodes and edges.
    pub fn display(&self) -> GraphDisplay<'_, N, E> {
        GraphDisplay { graph: self }
    }
}

impl<N, E> fmt::Display for GraphDisplay<'_, N, E>
where
    N: fmt::Display,
    E: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let graph = self.graph;

        for &node in graph.nodes() {
            let Ok(view) = graph.node(node) else {
                continue;
            };
            write!(f, "Node: {}", view.payload())?;
            if view.degree() == 0 {
                writeln!(f, " has no edges.")?;
                continue;
            }
            write!(f, " has edges:")?;
            for &edge in view.incident_edges() {
                if let Ok(payload) = graph.edge_payload(edge) {
                    write!(f, " {payload}")?;
                }
            }
            writeln!(f)?;
        }

        for &edge in graph.edges() {
            let (Ok(payload), Ok(head), Ok(tail)) = (
                graph.edge_payload(edge),
                graph.node_payload(edge.head()),
                graph.node_payload(edge.tail()),
            ) else {
                continue;
            };
            writeln!(f, "Edge {payload} has endpoints {head} (head) and {tail} (tail)")?;
        }
        Ok(())
    }
}
