use crate::graph::END;
use crate::node::GraphNode;
use crate::{GraphError, GraphState};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::time::Instant;
use uuid::Uuid;

/// Immutable, runnable graph produced by [`StateGraph::compile`](crate::StateGraph::compile).
pub struct CompiledGraph {
    nodes: HashMap<String, Box<dyn GraphNode>>,
    successors: HashMap<String, String>,
    entry_point: String,
}

impl std::fmt::Debug for CompiledGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompiledGraph")
            .field("nodes", &self.nodes.keys().collect::<Vec<_>>())
            .field("successors", &self.successors)
            .field("entry_point", &self.entry_point)
            .finish()
    }
}

impl CompiledGraph {
    pub(crate) fn new(
        nodes: HashMap<String, Box<dyn GraphNode>>,
        successors: HashMap<String, String>,
        entry_point: String,
    ) -> Self {
        Self {
            nodes,
            successors,
            entry_point,
        }
    }

    /// Run the chain from the entry point and return the final state.
    pub async fn invoke(&self, initial: GraphState) -> Result<GraphState, GraphError> {
        let (state, _) = self.run(initial).await?;
        Ok(state)
    }

    /// Like [`invoke`](Self::invoke), but also returns per-run metadata.
    pub async fn run(&self, initial: GraphState) -> Result<(GraphState, RunSummary), GraphError> {
        let run_id = Uuid::new_v4();
        let started_at = Utc::now();
        let start = Instant::now();

        tracing::info!(%run_id, entry = %self.entry_point, "starting graph run");

        let mut state = initial;
        let mut current = self.entry_point.clone();
        let mut steps = 0usize;

        loop {
            // Compile validated every edge endpoint against the node map.
            let node = self
                .nodes
                .get(&current)
                .expect("compiled graph contains all edge endpoints");

            let node_start = Instant::now();
            state = node.run(state).await.map_err(|source| {
                tracing::error!(%run_id, node = %current, error = %source, "node failed");
                GraphError::Node {
                    node: current.clone(),
                    source,
                }
            })?;
            steps += 1;

            tracing::debug!(
                %run_id,
                node = %current,
                duration_ms = node_start.elapsed().as_millis() as u64,
                "node completed"
            );

            match self.successors.get(&current) {
                Some(next) if next == END => break,
                Some(next) => current = next.clone(),
                // A node without an outgoing edge ends the chain.
                None => break,
            }
        }

        let summary = RunSummary {
            run_id,
            started_at,
            duration_ms: start.elapsed().as_millis() as u64,
            steps,
        };

        tracing::info!(
            %run_id,
            steps = summary.steps,
            duration_ms = summary.duration_ms,
            "graph run completed"
        );

        Ok((state, summary))
    }
}

/// Metadata about one completed graph run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub duration_ms: u64,
    pub steps: usize,
}
