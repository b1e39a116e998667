//! graphsort-core: two self-contained algorithm cores.
//!
//! A pure Rust library providing an array-backed binary max-heap with
//! in-place heap-sort, and an undirected adjacency-list graph with
//! breadth-first and depth-first path search.
//! No dependencies — this crate compiles standalone.
//!
//! Designed as the core for the graphsort demo driver, but usable
//! independently. The heap and the graph share no state: both are
//! single-threaded, in-memory structures mutated only by their own
//! call sequences.

mod graph;
mod heap;
mod search;

pub use graph::Graph;
pub use heap::{left, parent, right, Heap};
pub use search::{bfs, dfs};
