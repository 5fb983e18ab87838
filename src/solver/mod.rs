use took::Took;

use crate::graph::{Edge, Weight};

pub mod disjoint_set;
pub mod kruskal;
pub mod prim;

/// Outcome of a single engine run: the accepted edges in selection order,
/// their summed weight, the operation count defined per algorithm, and the
/// wall-clock duration of the run.
pub struct MstResult {
    pub edges: Vec<Edge>,
    pub total_weight: Weight,
    pub operations: u64,
    pub time: Took,
}

impl MstResult {
    /// Full-precision duration in milliseconds; rounding is left to the
    /// serialization boundary.
    pub fn execution_time_ms(&self) -> f64 {
        self.time.as_std().as_secs_f64() * 1000.0
    }
}
