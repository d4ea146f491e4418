//! mf-graph: graph model layer for maxflow-lp.
//!
//! Provides:
//! - Directed capacity graph with stable insertion-order enumeration
//! - Builders from adjacency mappings, node/edge lists and line-oriented text
//! - Stable indexing for LP formulation
//!
//! # Example
//!
//! ```
//! use mf_graph::FlowGraph;
//!
//! let graph: FlowGraph = "A B 4\nA C 5\nB D 5\nC B 2\nC D 4".parse().unwrap();
//!
//! assert_eq!(graph.nodes(), ["A", "B", "C", "D"]);
//! assert_eq!(graph.edge_count(), 5);
//! assert_eq!(graph.source(), Some("A"));
//! assert_eq!(graph.sink(), Some("D"));
//! ```

pub mod builder;
pub mod capacity;
pub mod error;
pub mod export;
pub mod graph;
pub mod indexing;
pub mod parse;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use builder::GraphBuilder;
pub use capacity::Capacity;
pub use error::{GraphError, GraphResult};
pub use graph::{Edge, FlowGraph};
pub use indexing::{Arc, SolverIndex};
