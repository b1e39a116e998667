use std::collections::{HashSet, VecDeque};
use std::hash::Hash;

use crate::graph::Graph;

/// Breadth-first path search from `start` to `goal`.
///
/// Explores in strict level order. The queue holds (node, path-so-far)
/// pairs; a node is marked visited when dequeued, so duplicate queue
/// entries are possible and discarded on dequeue. Neighbors are enqueued
/// in adjacency order.
///
/// The returned path has the minimum number of edges; among equal-length
/// paths the first one reachable under neighbor insertion order wins.
/// Returns `None` when the queue drains without reaching `goal`. A
/// `start` absent from the graph has no neighbors, so the search finds
/// only `start == goal`.
pub fn bfs<N>(graph: &Graph<N>, start: &N, goal: &N) -> Option<Vec<N>>
where
    N: Eq + Hash + Clone,
{
    let mut visited: HashSet<N> = HashSet::new();
    let mut queue: VecDeque<(N, Vec<N>)> = VecDeque::new();
    queue.push_back((start.clone(), vec![start.clone()]));

    while let Some((current, path)) = queue.pop_front() {
        if visited.contains(&current) {
            continue;
        }
        visited.insert(current.clone());

        if current == *goal {
            return Some(path);
        }

        for neighbor in graph.neighbors(&current) {
            if !visited.contains(neighbor) {
                let mut next = path.clone();
                next.push(neighbor.clone());
                queue.push_back((neighbor.clone(), next));
            }
        }
    }

    None
}

/// Depth-first path search from `start` to `goal`.
///
/// Follows one branch fully before backtracking. Visited nodes are never
/// unmarked, so the search yields the first path under the fixed
/// adjacency order — not all paths, and no shortest-path guarantee.
/// Returns `None` once every reachable node is exhausted.
pub fn dfs<N>(graph: &Graph<N>, start: &N, goal: &N) -> Option<Vec<N>>
where
    N: Eq + Hash + Clone,
{
    let mut visited: HashSet<N> = HashSet::new();
    let mut path: Vec<N> = Vec::new();
    if dfs_visit(graph, start, goal, &mut visited, &mut path) {
        Some(path)
    } else {
        None
    }
}

/// Recursive worker: marks `current`, extends the path, and pops it back
/// off when no child reaches the goal. The boolean result lets ancestor
/// frames stop iterating siblings once the goal is found.
fn dfs_visit<N>(
    graph: &Graph<N>,
    current: &N,
    goal: &N,
    visited: &mut HashSet<N>,
    path: &mut Vec<N>,
) -> bool
where
    N: Eq + Hash + Clone,
{
    visited.insert(current.clone());
    path.push(current.clone());

    if current == goal {
        return true;
    }

    for neighbor in graph.neighbors(current) {
        if !visited.contains(neighbor) && dfs_visit(graph, neighbor, goal, visited, path) {
            return true;
        }
    }

    path.pop();
    false
}
