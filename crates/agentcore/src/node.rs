use crate::{GraphState, NodeError};
use async_trait::async_trait;

/// Core trait for a single step in a graph.
///
/// A node receives the current state by value and returns the state the
/// next node should see. Returning an error aborts the whole run; the
/// runner does not retry.
#[async_trait]
pub trait GraphNode: Send + Sync {
    async fn run(&self, state: GraphState) -> Result<GraphState, NodeError>;
}
