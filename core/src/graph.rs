use std::collections::HashMap;
use std::hash::Hash;

/// Undirected in-memory graph: adjacency lists keyed by node.
///
/// Neighbor lists keep insertion order and duplicates — adding the same
/// edge twice records it twice. Symmetry is maintained by construction:
/// `add_edge` appends to both endpoints' lists.
#[derive(Debug, Clone)]
pub struct Graph<N> {
    adjacency: HashMap<N, Vec<N>>,
}

impl<N: Eq + Hash + Clone> Graph<N> {
    pub fn new() -> Self {
        Self {
            adjacency: HashMap::new(),
        }
    }

    /// Pre-allocate for a known node count.
    pub fn with_capacity(node_count: usize) -> Self {
        Self {
            adjacency: HashMap::with_capacity(node_count),
        }
    }

    /// Add an undirected edge, creating either endpoint if absent.
    ///
    /// Self-loops are not special-cased: the node ends up in its own
    /// list twice, once per direction.
    pub fn add_edge(&mut self, source: N, destination: N) {
        self.adjacency
            .entry(source.clone())
            .or_default()
            .push(destination.clone());
        self.adjacency.entry(destination).or_default().push(source);
    }

    /// Neighbors of `node` in insertion order. Empty for unknown nodes.
    pub fn neighbors(&self, node: &N) -> &[N] {
        self.adjacency.get(node).map(|v| v.as_slice()).unwrap_or(&[])
    }

    pub fn contains(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Every `add_edge` call contributes exactly two neighbor entries,
    /// so the edge count is the entry total halved.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(|v| v.len()).sum::<usize>() / 2
    }
}

impl<N: Eq + Hash + Clone> Default for Graph<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_edge_symmetric() {
        let mut g = Graph::new();
        g.add_edge("A", "B");
        assert!(g.neighbors(&"A").contains(&"B"));
        assert!(g.neighbors(&"B").contains(&"A"));
    }

    #[test]
    fn test_add_edge_creates_endpoints() {
        let mut g = Graph::new();
        assert!(!g.contains(&1));
        g.add_edge(1, 2);
        assert!(g.contains(&1));
        assert!(g.contains(&2));
        assert_eq!(g.node_count(), 2);
    }

    #[test]
    fn test_duplicate_edge_duplicates_entries() {
        let mut g = Graph::new();
        g.add_edge(1, 2);
        g.add_edge(1, 2);
        assert_eq!(g.neighbors(&1), &[2, 2]);
        assert_eq!(g.neighbors(&2), &[1, 1]);
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn test_self_loop_recorded_twice() {
        let mut g = Graph::new();
        g.add_edge(5, 5);
        assert_eq!(g.neighbors(&5), &[5, 5]);
        assert_eq!(g.node_count(), 1);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_neighbor_insertion_order_preserved() {
        let mut g = Graph::new();
        g.add_edge(0, 3);
        g.add_edge(0, 1);
        g.add_edge(0, 2);
        assert_eq!(g.neighbors(&0), &[3, 1, 2]);
    }

    #[test]
    fn test_neighbors_of_unknown_node_empty() {
        let g: Graph<u32> = Graph::new();
        assert!(g.neighbors(&99).is_empty());
    }

    #[test]
    fn test_counts() {
        let mut g = Graph::new();
        for i in 0..5 {
            g.add_edge(i, i + 1);
        }
        assert_eq!(g.node_count(), 6);
        assert_eq!(g.edge_count(), 5);
    }
}
