use agentcore::{GraphNode, GraphState, NodeError};
use async_trait::async_trait;

pub const WELCOME_MESSAGE: &str = "Welcome to the test agent";

/// Sets the fixed greeting on the state.
pub struct WelcomeNode;

#[async_trait]
impl GraphNode for WelcomeNode {
    async fn run(&self, state: GraphState) -> Result<GraphState, NodeError> {
        Ok(state.with_message(WELCOME_MESSAGE))
    }
}
