#[cfg(test)]
use std::fmt::Debug;

#[cfg(test)]
use crate::graph::{Graph, Weight};

pub mod logging;

#[cfg(test)]
pub fn assert_vec_eq<T: PartialEq + Eq + Debug>(expect: &Vec<T>, actual: &Vec<T>) {
    assert_eq!(
        expect.len(),
        actual.len(),
        "sizes of the vecs differ (expect: {}, actual: {})",
        expect.len(),
        actual.len()
    );
    for (idx, (x, y)) in expect.iter().zip(actual.iter()).enumerate() {
        assert_eq!(
            x, y,
            "vecs differ at index {} ({:?} != {:?})\n expect: {:?}\n actual: {:?}",
            idx, x, y, &expect, &actual
        );
    }
}

#[cfg(test)]
pub fn build_graph(labels: &[&str], edges: &[(&str, &str, Weight)]) -> Graph {
    Graph::new(
        labels.iter().map(|it| it.to_string()).collect(),
        edges
            .iter()
            .map(|(from, to, weight)| (from.to_string(), to.to_string(), *weight))
            .collect(),
    )
    .unwrap()
}
