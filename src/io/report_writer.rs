use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::graph::{Graph, Weight};
use crate::solver::MstResult;

#[derive(Debug, Serialize)]
pub struct BatchReport {
    results: Vec<GraphReport>,
}

impl BatchReport {
    pub fn new(results: Vec<GraphReport>) -> Self {
        Self { results }
    }
}

#[derive(Debug, Serialize)]
pub struct GraphReport {
    graph_id: i64,
    input_stats: InputStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    prim: Option<AlgorithmReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    kruskal: Option<AlgorithmReport>,
}

impl GraphReport {
    pub fn new(
        id: i64,
        graph: &Graph,
        prim: Option<&MstResult>,
        kruskal: Option<&MstResult>,
    ) -> Self {
        Self {
            graph_id: id,
            input_stats: InputStats {
                vertices: graph.num_nodes(),
                edges: graph.num_edges(),
            },
            prim: prim.map(|it| AlgorithmReport::new(graph, it)),
            kruskal: kruskal.map(|it| AlgorithmReport::new(graph, it)),
        }
    }
}

#[derive(Debug, Serialize)]
struct InputStats {
    vertices: usize,
    edges: usize,
}

#[derive(Debug, Serialize)]
struct AlgorithmReport {
    mst_edges: Vec<EdgeReport>,
    total_cost: Weight,
    operations_count: u64,
    execution_time_ms: f64,
}

impl AlgorithmReport {
    fn new(graph: &Graph, result: &MstResult) -> Self {
        Self {
            mst_edges: result
                .edges
                .iter()
                .map(|it| EdgeReport {
                    from: graph.label(it.from).to_string(),
                    to: graph.label(it.to).to_string(),
                    weight: it.weight,
                })
                .collect(),
            total_cost: result.total_weight,
            operations_count: result.operations,
            execution_time_ms: round_to_hundredths(result.execution_time_ms()),
        }
    }
}

#[derive(Debug, Serialize)]
struct EdgeReport {
    from: String,
    to: String,
    weight: Weight,
}

// durations are rounded here and nowhere else
fn round_to_hundredths(ms: f64) -> f64 {
    (ms * 100.0).round() / 100.0
}

pub fn write_report(path: impl Into<String>, report: &BatchReport) -> Result<()> {
    let path = path.into();
    let file =
        File::create(&path).with_context(|| format!("cannot create report file {}", path))?;
    let mut writer = BufWriter::new(&file);
    serde_json::to_writer_pretty(&mut writer, report)
        .with_context(|| format!("cannot write report to {}", path))?;
    writer
        .flush()
        .with_context(|| format!("cannot write report to {}", path))
}

pub fn print_summary(report: &BatchReport) {
    println!();
    println!("=== MST Results ===");
    for result in &report.results {
        println!();
        println!("Graph {}:", result.graph_id);
        println!("  Vertices: {}", result.input_stats.vertices);
        println!("  Edges: {}", result.input_stats.edges);
        if let Some(ref prim) = result.prim {
            print_algorithm("Prim", prim);
        }
        if let Some(ref kruskal) = result.kruskal {
            print_algorithm("Kruskal", kruskal);
        }
    }
}

fn print_algorithm(name: &str, report: &AlgorithmReport) {
    println!("  {}:", name);
    println!("    Total Cost: {}", report.total_cost);
    println!("    Operations: {}", report.operations_count);
    println!("    Execution Time: {} ms", report.execution_time_ms);
    println!("    MST Edges:");
    for edge in &report.mst_edges {
        println!("      {} -> {} (weight: {})", edge.from, edge.to, edge.weight);
    }
}
