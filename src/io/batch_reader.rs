use std::fs::File;
use std::io::BufReader;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::graph::{Graph, Weight};

#[derive(Debug, Deserialize)]
struct BatchFile {
    graphs: Vec<GraphRecord>,
}

#[derive(Debug, Deserialize)]
struct GraphRecord {
    /// identifier echoed into the report
    id: i64,
    /// node labels in input order; the first one is Prim's start vertex
    nodes: Vec<String>,
    /// undirected weighted edges
    edges: Vec<EdgeRecord>,
}

#[derive(Debug, Deserialize)]
struct EdgeRecord {
    from: String,
    to: String,
    weight: Weight,
}

pub struct BatchGraph {
    pub id: i64,
    pub graph: Graph,
}

/**
Batch input format (JSON):

```json
{
  "graphs": [
    {
      "id": 1,
      "nodes": ["A", "B", "C"],
      "edges": [
        {"from": "A", "to": "B", "weight": 1},
        {"from": "B", "to": "C", "weight": 2}
      ]
    }
  ]
}
```

`nodes` is ordered and must be non-empty; edge endpoints must name listed
nodes. Weights are non-negative integers. Parallel edges and self-loops are
passed through as-is.
 */
pub fn load_batch(path: impl Into<String>) -> Result<Vec<BatchGraph>> {
    let path = path.into();
    let file = File::open(&path).with_context(|| format!("cannot open batch file {}", path))?;
    let batch: BatchFile = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("cannot parse batch file {}", path))?;

    batch
        .graphs
        .into_iter()
        .map(|record| {
            let id = record.id;
            let edges = record
                .edges
                .into_iter()
                .map(|it| (it.from, it.to, it.weight))
                .collect();
            let graph =
                Graph::new(record.nodes, edges).with_context(|| format!("invalid graph {}", id))?;
            Ok(BatchGraph { id, graph })
        })
        .collect()
}
