use log::warn;
use took::Timer;

use crate::graph::{Edge, Graph};
use crate::solver::disjoint_set::DisjointSet;
use crate::solver::MstResult;

/// Scans the edges in ascending weight order, accepting every edge that joins
/// two components. The operation count blends the per-edge considerations,
/// the disjoint-set counter, and an |E|·ceil(log2 |E|) estimate of the sort.
pub fn solve(graph: &Graph) -> MstResult {
    let timer = Timer::new();

    let mut sorted = graph.edges().to_vec();
    // stable sort keeps the input order among equal weights
    sorted.sort_by_key(|it| it.weight);

    let mut edges: Vec<Edge> = Vec::new();
    let mut total_weight = 0;
    let mut considerations = 0u64;
    let mut sets = DisjointSet::new(graph.num_nodes());

    for edge in sorted {
        considerations += 1;
        if sets.union(edge.from, edge.to) {
            edges.push(edge);
            total_weight += edge.weight;

            if edges.len() == graph.num_nodes() - 1 {
                break;
            }
        }
    }

    let time = timer.took();
    let operations = considerations + sets.operations() + sort_cost(graph.num_edges() as u64);

    let num_components = graph.num_nodes() - edges.len();
    if num_components > 1 {
        warn!(
            "graph is disconnected, returning a spanning forest with {} components",
            num_components
        );
    }

    MstResult {
        edges,
        total_weight,
        operations,
        time,
    }
}

fn sort_cost(num_edges: u64) -> u64 {
    if num_edges == 0 {
        return 0;
    }
    // smallest k with 2^k >= num_edges
    let log_factor = num_edges.next_power_of_two().trailing_zeros() as u64;
    num_edges * log_factor
}
