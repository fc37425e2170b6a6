//! Core graph engine for the agent pipeline
//!
//! This crate provides the state type, the node trait, and the
//! build/compile/invoke machinery that the node library and the server
//! depend on. Execution is strictly sequential: each node has at most
//! one successor, and the runner threads the state through the chain
//! until it reaches the terminal marker.

mod error;
mod graph;
mod node;
mod runner;
mod state;

pub use error::{CompileError, GraphError, NodeError};
pub use graph::{StateGraph, END};
pub use node::GraphNode;
pub use runner::{CompiledGraph, RunSummary};
pub use state::GraphState;

/// Result type for graph operations
pub type Result<T> = std::result::Result<T, GraphError>;
