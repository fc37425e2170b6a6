use agentcore::{GraphNode, GraphState, NodeError};
use async_trait::async_trait;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// Shared handle to the stream display output is written to.
///
/// Injectable so tests can capture the lines; production code uses
/// [`stdout_sink`].
pub type OutputSink = Arc<Mutex<Box<dyn Write + Send>>>;

/// Sink writing to the process stdout.
pub fn stdout_sink() -> OutputSink {
    Arc::new(Mutex::new(Box::new(io::stdout())))
}

/// Emits `message` then `question` to the sink, one line each, and returns
/// an empty state. The accumulated values are intentionally not forwarded;
/// callers only observe the side-effect output.
pub struct DisplayNode {
    sink: OutputSink,
}

impl DisplayNode {
    pub fn new(sink: OutputSink) -> Self {
        Self { sink }
    }
}

impl Default for DisplayNode {
    fn default() -> Self {
        Self::new(stdout_sink())
    }
}

#[async_trait]
impl GraphNode for DisplayNode {
    async fn run(&self, state: GraphState) -> Result<GraphState, NodeError> {
        let message = state
            .message
            .as_deref()
            .ok_or_else(|| NodeError::MissingInput("message".to_string()))?;
        let question = state
            .question
            .as_deref()
            .ok_or_else(|| NodeError::MissingInput("question".to_string()))?;

        let mut out = self
            .sink
            .lock()
            .map_err(|_| NodeError::ExecutionFailed("display sink poisoned".to_string()))?;
        writeln!(out, "{message}")?;
        writeln!(out, "{question}")?;
        out.flush()?;

        Ok(GraphState::new())
    }
}
