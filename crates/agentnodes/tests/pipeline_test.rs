use agentcore::{GraphNode, GraphState, NodeError};
use agentnodes::{
    analyse_css, DisplayNode, OutputSink, QuestionNode, WelcomeNode, QUESTION_TEXT,
    WELCOME_MESSAGE,
};
use std::io::Write;
use std::sync::{Arc, Mutex};

/// Writer that mirrors everything into a shared buffer the test can read.
#[derive(Clone)]
struct CaptureSink(Arc<Mutex<Vec<u8>>>);

impl Write for CaptureSink {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn capture_sink() -> (OutputSink, Arc<Mutex<Vec<u8>>>) {
    let buffer = Arc::new(Mutex::new(Vec::new()));
    let sink: OutputSink = Arc::new(Mutex::new(Box::new(CaptureSink(Arc::clone(&buffer)))));
    (sink, buffer)
}

fn captured(buffer: &Arc<Mutex<Vec<u8>>>) -> String {
    String::from_utf8(buffer.lock().unwrap().clone()).unwrap()
}

#[tokio::test]
async fn pipeline_prints_welcome_then_question() {
    let (sink, buffer) = capture_sink();

    let result = analyse_css(sink).await.unwrap();

    assert!(result.is_empty());
    assert_eq!(
        captured(&buffer),
        format!("{WELCOME_MESSAGE}\n{QUESTION_TEXT}\n")
    );
}

#[tokio::test]
async fn pipeline_is_idempotent_across_invocations() {
    let (first_sink, first_buffer) = capture_sink();
    let (second_sink, second_buffer) = capture_sink();

    let first = analyse_css(first_sink).await.unwrap();
    let second = analyse_css(second_sink).await.unwrap();

    assert_eq!(first, second);
    assert!(second.is_empty());
    assert_eq!(captured(&first_buffer), captured(&second_buffer));
}

#[tokio::test]
async fn welcome_node_sets_message() {
    let state = WelcomeNode.run(GraphState::new()).await.unwrap();
    assert_eq!(state.message.as_deref(), Some(WELCOME_MESSAGE));
    assert!(state.question.is_none());
}

#[tokio::test]
async fn question_node_sets_question_and_keeps_message() {
    let state = QuestionNode
        .run(GraphState::new().with_message("kept"))
        .await
        .unwrap();
    assert_eq!(state.message.as_deref(), Some("kept"));
    assert_eq!(state.question.as_deref(), Some(QUESTION_TEXT));
}

#[tokio::test]
async fn display_node_returns_empty_state() {
    let (sink, _) = capture_sink();
    let state = GraphState::new()
        .with_message(WELCOME_MESSAGE)
        .with_question(QUESTION_TEXT);

    let result = DisplayNode::new(sink).run(state).await.unwrap();

    assert!(result.is_empty());
}

#[tokio::test]
async fn display_node_requires_message() {
    let (sink, _) = capture_sink();

    let err = DisplayNode::new(sink)
        .run(GraphState::new().with_question(QUESTION_TEXT))
        .await
        .unwrap_err();

    match err {
        NodeError::MissingInput(field) => assert_eq!(field, "message"),
        other => panic!("unexpected error: {other:?}"),
    }
}
