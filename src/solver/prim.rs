use std::cmp::Reverse;
use std::collections::BinaryHeap;

use fixedbitset::FixedBitSet;
use log::warn;
use took::Timer;

use crate::graph::{Edge, Graph, NodeId};
use crate::solver::MstResult;

/// Grows the tree from the first input node, repeatedly taking the cheapest
/// crossing edge off a min-queue. The operation count covers adjacency
/// construction (one per input edge), every queue push and pop, and every
/// incident-edge consideration after an acceptance.
pub fn solve(graph: &Graph) -> MstResult {
    let timer = Timer::new();

    let mut edges: Vec<Edge> = Vec::new();
    let mut total_weight = 0;
    let mut operations = 0u64;

    let adjacency = graph.adjacency();
    operations += graph.num_edges() as u64;

    let mut queue = BinaryHeap::new();
    let mut visited = FixedBitSet::with_capacity(graph.num_nodes());

    let start: NodeId = 0;
    visited.insert(start);
    let mut num_visited = 1;

    for &(to, weight) in adjacency.incident(start) {
        queue.push(Reverse((weight, start, to)));
        operations += 1;
    }

    while num_visited < graph.num_nodes() {
        let Reverse((weight, from, to)) = match queue.pop() {
            Some(entry) => entry,
            None => break,
        };
        operations += 1;

        if visited.contains(to) {
            continue;
        }

        edges.push(Edge { from, to, weight });
        total_weight += weight;
        visited.insert(to);
        num_visited += 1;

        for &(next, w) in adjacency.incident(to) {
            operations += 1;
            if !visited.contains(next) {
                queue.push(Reverse((w, to, next)));
            }
        }
    }

    let time = timer.took();
    if num_visited < graph.num_nodes() {
        warn!(
            "{} of {} nodes not reachable from '{}', returning a partial tree",
            graph.num_nodes() - num_visited,
            graph.num_nodes(),
            graph.label(start)
        );
    }

    MstResult {
        edges,
        total_weight,
        operations,
        time,
    }
}
