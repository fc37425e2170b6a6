use crate::{DisplayNode, OutputSink, QuestionNode, WelcomeNode};
use agentcore::{CompileError, CompiledGraph, GraphError, GraphState, StateGraph, END};

/// Build and compile the fixed demo topology:
/// `welcome → question → display → END`.
///
/// Rebuilt fresh on every call; nothing is cached across invocations.
pub fn create_graph(sink: OutputSink) -> Result<CompiledGraph, CompileError> {
    let mut workflow = StateGraph::new();

    workflow.add_node("welcome", WelcomeNode);
    workflow.add_node("question", QuestionNode);
    workflow.add_node("display", DisplayNode::new(sink));

    workflow.set_entry_point("welcome");
    workflow.add_edge("welcome", "question");
    workflow.add_edge("question", "display");
    workflow.add_edge("display", END);

    workflow.compile()
}

/// Run the demo pipeline once, starting from an empty state.
///
/// The name is scaffolding carried over from the original backend: no CSS
/// is analysed, and the returned state is always empty because the display
/// node discards what the earlier nodes accumulated.
pub async fn analyse_css(sink: OutputSink) -> Result<GraphState, GraphError> {
    tracing::debug!("running demo analysis pipeline");
    let graph = create_graph(sink)?;
    graph.invoke(GraphState::new()).await
}
