//! Line-oriented text format.
//!
//! One edge per line: `<origin> <destination> <capacity>`, separated by a
//! single whitespace character, with an optional leading and trailing one.
//! Labels are word characters; the capacity is an integer or a decimal with
//! a single dot. Blank lines are skipped.
//!
//! ```text
//! A B 4
//! A C 5
//! B D 5
//! ```

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::builder::GraphBuilder;
use crate::capacity::Capacity;
use crate::error::{GraphError, GraphResult};
use crate::graph::FlowGraph;

static LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s?(\w+)\s(\w+)\s(\d+|\d+\.\d+)\s?$").expect("edge line pattern is valid")
});

/// Parse one non-blank line into (origin, destination, capacity).
fn parse_line(line_no: usize, line: &str) -> GraphResult<(String, String, Capacity)> {
    let malformed = || GraphError::Parse {
        line_no,
        line: line.to_string(),
    };
    let caps = LINE.captures(line).ok_or_else(malformed)?;
    let capacity = caps[3].parse::<Capacity>().map_err(|_| malformed())?;
    Ok((caps[1].to_string(), caps[2].to_string(), capacity))
}

impl FlowGraph {
    /// Build from line-oriented text.
    ///
    /// Node order: origins in order of first appearance, then destinations
    /// that are not origins, in order of first appearance.
    ///
    /// # Errors
    /// - [`GraphError::Parse`] for the first line that does not match; no graph is returned.
    /// - [`GraphError::DuplicateEdge`] if an ordered pair appears on two lines.
    pub fn parse_text(text: &str) -> GraphResult<Self> {
        let mut edges = Vec::new();
        for (i, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            edges.push(parse_line(i + 1, line)?);
        }

        let mut builder = GraphBuilder::new();
        for (origin, _, _) in &edges {
            builder.add_node(origin.as_str());
        }
        for (_, dest, _) in &edges {
            builder.add_node(dest.as_str());
        }
        for (origin, dest, cap) in edges {
            builder.add_edge(origin, dest, cap)?;
        }
        let graph = builder.build();
        tracing::debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "parsed graph text"
        );
        Ok(graph)
    }
}

impl FromStr for FlowGraph {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FlowGraph::parse_text(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_edge() {
        let g = FlowGraph::parse_text("\nA B 1\n").unwrap();
        let expected = FlowGraph::from_adjacency([("A", vec![("B", 1)]), ("B", vec![])]);
        assert_eq!(g, expected);
        assert_eq!(g.nodes(), ["A", "B"]);
    }

    #[test]
    fn origins_come_before_destinations() {
        let g = FlowGraph::parse_text("C D 1\nA C 2\nB A 3").unwrap();
        assert_eq!(g.nodes(), ["C", "A", "B", "D"]);
    }

    #[test]
    fn optional_surrounding_whitespace() {
        let g = FlowGraph::parse_text(" A B 4 \n\n  \nB C 2.5").unwrap();
        assert_eq!(g.capacity("A", "B"), Some(Capacity::Integer(4)));
        assert!(matches!(g.capacity("B", "C"), Some(Capacity::Decimal(v)) if v == 2.5));
    }

    #[test]
    fn crlf_line_endings() {
        let g = FlowGraph::parse_text("A B 4\r\nB C 2\r\n").unwrap();
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn missing_capacity_is_parse_error() {
        let err = FlowGraph::parse_text("A B 4\nA B").unwrap_err();
        assert_eq!(
            err,
            GraphError::Parse {
                line_no: 2,
                line: "A B".into()
            }
        );
    }

    #[test]
    fn rejects_malformed_lines() {
        for bad in ["A  B 4", "A B -4", "A B 4.", "A B 1.2.3", "A-B C 4", "A B C 4"] {
            assert!(
                matches!(FlowGraph::parse_text(bad), Err(GraphError::Parse { .. })),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn duplicate_line_is_duplicate_edge() {
        let err = FlowGraph::parse_text("A B 4\nA B 5").unwrap_err();
        assert!(matches!(err, GraphError::DuplicateEdge { .. }));
    }

    #[test]
    fn from_str_round_trip() {
        let g: FlowGraph = "A B 4\nA C 5\nB D 5\nC B 2\nC D 4".parse().unwrap();
        assert_eq!(g.nodes(), ["A", "B", "C", "D"]);
        assert_eq!(g.edge_count(), 5);
    }
}
