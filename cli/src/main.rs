use std::fs;

use anyhow::{bail, Context, Result};
use graphsort_core::{bfs, dfs, Graph, Heap};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let mode = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match mode {
        "route" => {
            let (file, start, goal) = match (args.get(2), args.get(3), args.get(4)) {
                (Some(f), Some(s), Some(g)) => (f, s, g),
                _ => bail!("usage: graphsort route <file> <start> <goal>"),
            };
            let text = fs::read_to_string(file)
                .with_context(|| format!("failed to read edge list {}", file))?;
            let graph = build_graph(text.lines());
            println!(
                "{}: {} nodes, {} edges",
                file,
                graph.node_count(),
                graph.edge_count()
            );
            report("bfs", bfs(&graph, start, goal));
            report("dfs", dfs(&graph, start, goal));
        }
        "sort" => {
            if args.len() <= 2 {
                bail!("usage: graphsort sort <value>...");
            }
            let values = args[2..]
                .iter()
                .map(|s| {
                    s.parse::<i64>()
                        .with_context(|| format!("not an integer: {}", s))
                })
                .collect::<Result<Vec<i64>>>()?;
            let mut heap = Heap::new(values);
            heap.heap_sort();
            let sorted: Vec<String> = heap.as_slice().iter().map(|v| v.to_string()).collect();
            println!("{}", sorted.join(" "));
        }
        "help" | "--help" => usage(),
        other => {
            eprintln!("unknown mode: {}. Use --help for options.", other);
            usage();
        }
    }

    Ok(())
}

fn report(name: &str, result: Option<Vec<String>>) {
    match result {
        Some(path) => println!("{}: {}", name, path.join(" -> ")),
        None => println!("{}: no path found", name),
    }
}

/// Build an undirected graph from edge-list lines.
///
/// Each line with exactly three whitespace-separated tokens contributes
/// an edge between the first two; the third (a distance or label) is
/// ignored. Lines with any other token count are skipped — ingestion is
/// deliberately lenient.
fn build_graph<'a, I>(lines: I) -> Graph<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut graph = Graph::new();
    for line in lines {
        let mut tokens = line.split_whitespace();
        if let (Some(source), Some(destination), Some(_), None) =
            (tokens.next(), tokens.next(), tokens.next(), tokens.next())
        {
            graph.add_edge(source.to_string(), destination.to_string());
        }
    }
    graph
}

fn usage() {
    println!("Usage: graphsort <mode> [args]");
    println!();
    println!("Modes:");
    println!("  route <file> <start> <goal>   Find a path in an edge-list graph");
    println!("  sort <value>...               Heap-sort integer values");
    println!();
    println!("Edge-list format: one edge per line, three whitespace-separated");
    println!("tokens (source, destination, distance). The distance is ignored");
    println!("and malformed lines are skipped.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_graph_basic() {
        let g = build_graph(["Oradea Zerind 71", "Zerind Arad 75", "Arad Sibiu 140"]);
        assert_eq!(g.node_count(), 4);
        assert_eq!(g.edge_count(), 3);
        let path = bfs(&g, &"Oradea".to_string(), &"Sibiu".to_string()).unwrap();
        assert_eq!(path, vec!["Oradea", "Zerind", "Arad", "Sibiu"]);
    }

    #[test]
    fn test_build_graph_skips_malformed_lines() {
        let g = build_graph([
            "A B 1",
            "",
            "C D",          // two tokens
            "E F 2 extra",  // four tokens
            "   ",
            "B C 3",
        ]);
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.edge_count(), 2);
        assert!(!g.contains(&"D".to_string()));
        assert!(!g.contains(&"E".to_string()));
    }

    #[test]
    fn test_build_graph_third_token_ignored() {
        let g = build_graph(["A B not-a-number"]);
        assert_eq!(g.edge_count(), 1);
        assert!(g.neighbors(&"A".to_string()).contains(&"B".to_string()));
    }

    #[test]
    fn test_build_graph_empty_input() {
        let g = build_graph([]);
        assert_eq!(g.node_count(), 0);
        assert_eq!(bfs(&g, &"X".to_string(), &"Y".to_string()), None);
    }

    #[test]
    fn test_route_both_searches() {
        let g = build_graph(["A B 1", "B C 1", "A C 1"]);
        let start = "A".to_string();
        let goal = "C".to_string();
        // BFS takes the direct edge; DFS commits to the branch through B.
        assert_eq!(bfs(&g, &start, &goal), Some(vec!["A".into(), "C".into()]));
        assert_eq!(
            dfs(&g, &start, &goal),
            Some(vec!["A".into(), "B".into(), "C".into()])
        );
    }
}
