use agentcore::{GraphNode, GraphState, NodeError};
use async_trait::async_trait;

pub const QUESTION_TEXT: &str = "How's it going?";

/// Sets the fixed question on the state.
pub struct QuestionNode;

#[async_trait]
impl GraphNode for QuestionNode {
    async fn run(&self, state: GraphState) -> Result<GraphState, NodeError> {
        Ok(state.with_question(QUESTION_TEXT))
    }
}
