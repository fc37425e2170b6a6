use crate::node::GraphNode;
use crate::runner::CompiledGraph;
use crate::CompileError;
use petgraph::algo::toposort;
use petgraph::graph::DiGraph;
use std::collections::HashMap;

/// Designated terminal: an edge pointing here ends the run.
pub const END: &str = "__end__";

/// Builder for a linear chain of named nodes.
///
/// Register nodes with [`add_node`](Self::add_node), wire them with
/// [`add_edge`](Self::add_edge) (using [`END`] as the final target), pick a
/// start node with [`set_entry_point`](Self::set_entry_point), then
/// [`compile`](Self::compile) into a runnable [`CompiledGraph`].
pub struct StateGraph {
    nodes: HashMap<String, Box<dyn GraphNode>>,
    edges: Vec<(String, String)>,
    entry_point: Option<String>,
}

impl StateGraph {
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            edges: Vec::new(),
            entry_point: None,
        }
    }

    /// Register a node under a unique name. Re-registering a name replaces
    /// the previous node.
    pub fn add_node(&mut self, name: impl Into<String>, node: impl GraphNode + 'static) -> &mut Self {
        self.nodes.insert(name.into(), Box::new(node));
        self
    }

    /// Declare the node the run starts from.
    pub fn set_entry_point(&mut self, name: impl Into<String>) -> &mut Self {
        self.entry_point = Some(name.into());
        self
    }

    /// Add a directed edge. `to` may be [`END`]; everything else must be a
    /// registered node name by the time `compile` is called.
    pub fn add_edge(&mut self, from: impl Into<String>, to: impl Into<String>) -> &mut Self {
        self.edges.push((from.into(), to.into()));
        self
    }

    /// Validate the topology and produce an immutable, runnable graph.
    ///
    /// Rejects a missing or unknown entry point, edges touching unknown
    /// nodes, more than one outgoing edge per node, and cycles.
    pub fn compile(self) -> Result<CompiledGraph, CompileError> {
        let entry_point = self.entry_point.ok_or(CompileError::MissingEntryPoint)?;
        if !self.nodes.contains_key(&entry_point) {
            return Err(CompileError::NodeNotFound(entry_point));
        }

        let mut successors: HashMap<String, String> = HashMap::new();
        for (from, to) in &self.edges {
            if !self.nodes.contains_key(from) {
                return Err(CompileError::NodeNotFound(from.clone()));
            }
            if to != END && !self.nodes.contains_key(to) {
                return Err(CompileError::NodeNotFound(to.clone()));
            }
            if successors.insert(from.clone(), to.clone()).is_some() {
                return Err(CompileError::DuplicateEdge(from.clone()));
            }
        }

        Self::check_acyclic(&self.nodes, &self.edges)?;

        Ok(CompiledGraph::new(self.nodes, successors, entry_point))
    }

    /// Cycle check on the node-to-node edges (edges into END are ignored).
    fn check_acyclic(
        nodes: &HashMap<String, Box<dyn GraphNode>>,
        edges: &[(String, String)],
    ) -> Result<(), CompileError> {
        let mut graph = DiGraph::<&str, ()>::new();
        let mut indices = HashMap::new();

        for name in nodes.keys() {
            let idx = graph.add_node(name.as_str());
            indices.insert(name.as_str(), idx);
        }

        for (from, to) in edges {
            if to == END {
                continue;
            }
            // Endpoints were validated against the node map above.
            graph.add_edge(indices[from.as_str()], indices[to.as_str()], ());
        }

        if toposort(&graph, None).is_err() {
            return Err(CompileError::Cycle);
        }

        Ok(())
    }
}

impl Default for StateGraph {
    fn default() -> Self {
        Self::new()
    }
}
