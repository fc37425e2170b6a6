use thiserror::Error;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("node '{node}' failed: {source}")]
    Node {
        node: String,
        #[source]
        source: NodeError,
    },

    #[error("compile error: {0}")]
    Compile(#[from] CompileError),
}

#[derive(Error, Debug)]
pub enum NodeError {
    #[error("missing required state field: {0}")]
    MissingInput(String),

    #[error("execution failed: {0}")]
    ExecutionFailed(String),

    #[error("output stream error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    #[error("entry point not set")]
    MissingEntryPoint,

    #[error("node not found: {0}")]
    NodeNotFound(String),

    #[error("node '{0}' already has an outgoing edge")]
    DuplicateEdge(String),

    #[error("cyclic dependency detected")]
    Cycle,
}
