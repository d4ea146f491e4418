//! Incremental graph builder.

use std::collections::{HashMap, HashSet};

use crate::capacity::Capacity;
use crate::error::{GraphError, GraphResult};
use crate::graph::FlowGraph;

/// Builder for constructing a graph incrementally.
///
/// Use `add_node` and `add_edge` to build up the graph, then call
/// `build()` to freeze it into an immutable `FlowGraph`.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    nodes: Vec<String>,
    node_index: HashMap<String, usize>,
    adjacency: Vec<Vec<(usize, Capacity)>>,
    /// Ordered pairs already present, by node index.
    pairs: HashSet<(usize, usize)>,
}

impl GraphBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node and return its index. Adding an existing label is a no-op
    /// that returns the index it already has.
    pub fn add_node(&mut self, name: impl Into<String>) -> usize {
        let name = name.into();
        if let Some(&idx) = self.node_index.get(&name) {
            return idx;
        }
        let idx = self.nodes.len();
        self.node_index.insert(name.clone(), idx);
        self.nodes.push(name);
        self.adjacency.push(Vec::new());
        idx
    }

    /// Add `origin -> destination`, creating missing endpoints.
    ///
    /// # Errors
    /// [`GraphError::DuplicateEdge`] if the ordered pair is already present.
    pub fn add_edge(
        &mut self,
        origin: impl Into<String>,
        destination: impl Into<String>,
        capacity: impl Into<Capacity>,
    ) -> GraphResult<()> {
        let o = self.add_node(origin);
        let d = self.add_node(destination);
        if !self.pairs.insert((o, d)) {
            return Err(GraphError::DuplicateEdge {
                origin: self.nodes[o].clone(),
                destination: self.nodes[d].clone(),
            });
        }
        self.adjacency[o].push((d, capacity.into()));
        Ok(())
    }

    /// Insert or overwrite the capacity of `origin -> destination` by index.
    /// An overwritten edge keeps its position.
    pub(crate) fn set_edge(&mut self, origin: usize, destination: usize, capacity: Capacity) {
        if self.pairs.insert((origin, destination)) {
            self.adjacency[origin].push((destination, capacity));
        } else if let Some(slot) = self.adjacency[origin]
            .iter_mut()
            .find(|(d, _)| *d == destination)
        {
            slot.1 = capacity;
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.pairs.len()
    }

    /// Freeze into an immutable graph.
    pub fn build(self) -> FlowGraph {
        FlowGraph {
            nodes: self.nodes,
            node_index: self.node_index,
            adjacency: self.adjacency,
        }
    }
}
