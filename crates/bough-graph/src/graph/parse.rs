//! Edge-list parsing.

use std::path::Path;
use std::str::FromStr;

use tracing::{debug, instrument};

use super::{GraphError, WeightedGraph};

fn fields(line: &str) -> impl Iterator<Item = &str> {
    let content = line.split_once('#').map_or(line, |(before, _)| before);
    content
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|field| !field.is_empty())
}

fn parse_field<T: FromStr>(line: usize, field: &str, what: &str) -> Result<T, GraphError> {
    field.parse().map_err(|_| GraphError::Parse {
        line,
        message: format!("expected {what}, found `{field}`"),
    })
}

impl WeightedGraph {
    /// Parse the edge-list format described in [`crate::graph`].
    ///
    /// # Errors
    ///
    /// [`GraphError::Parse`] for malformed lines or a missing vertex count;
    /// [`GraphError::InvalidVertex`] / [`GraphError::InvalidWeight`] for
    /// well-formed edges the graph rejects.
    pub fn parse(text: &str) -> Result<Self, GraphError> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(index, raw)| (index + 1, fields(raw).collect::<Vec<_>>()))
            .filter(|(_, parts)| !parts.is_empty());

        let Some((line, header)) = lines.next() else {
            return Err(GraphError::Parse {
                line: 0,
                message: "missing vertex count".to_string(),
            });
        };
        let [count] = header.as_slice() else {
            return Err(GraphError::Parse {
                line,
                message: format!(
                    "expected a single vertex count, found {} fields",
                    header.len()
                ),
            });
        };
        let mut graph = Self::new(parse_field(line, count, "a vertex count")?);

        for (line, parts) in lines {
            let [from, to, weight] = parts.as_slice() else {
                return Err(GraphError::Parse {
                    line,
                    message: format!("expected `from to weight`, found {} fields", parts.len()),
                });
            };
            graph.add_edge(
                parse_field(line, from, "a vertex index")?,
                parse_field(line, to, "a vertex index")?,
                parse_field(line, weight, "a weight")?,
            )?;
        }

        Ok(graph)
    }

    /// Read and parse an edge-list file.
    ///
    /// # Errors
    ///
    /// [`GraphError::Io`] if the file cannot be read, otherwise as
    /// [`Self::parse`].
    #[instrument]
    pub fn from_path(path: &Path) -> Result<Self, GraphError> {
        let text = std::fs::read_to_string(path).map_err(|source| GraphError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let graph = Self::parse(&text)?;
        debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "loaded graph"
        );
        Ok(graph)
    }
}

impl FromStr for WeightedGraph {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_count_and_edges() {
        let g = WeightedGraph::parse("# demo\n\n3\n0 1 1\n1,2,1.5  # trailing comment\n0 2 5\n")
            .expect("valid");
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.edge_weight(1, 2), Some(1.5));
    }

    #[test]
    fn vertex_count_only_is_an_edgeless_graph() {
        let g: WeightedGraph = "4\n".parse().expect("valid");
        assert_eq!(g.vertex_count(), 4);
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn empty_input_is_rejected() {
        let err = WeightedGraph::parse("# nothing\n").expect_err("no count");
        assert!(matches!(err, GraphError::Parse { line: 0, .. }));
    }

    #[test]
    fn malformed_lines_report_line_number() {
        let err = WeightedGraph::parse("2\n0 1\n").expect_err("two fields");
        assert!(matches!(err, GraphError::Parse { line: 2, .. }));

        let err = WeightedGraph::parse("2\n0 x 1\n").expect_err("bad index");
        match err {
            GraphError::Parse { line, message } => {
                assert_eq!(line, 2);
                assert!(message.contains("`x`"), "{message}");
            }
            other => panic!("unexpected error {other:?}"),
        }

        let err = WeightedGraph::parse("2 3\n").expect_err("two counts");
        assert!(matches!(err, GraphError::Parse { line: 1, .. }));
    }

    #[test]
    fn semantic_errors_propagate() {
        assert!(matches!(
            WeightedGraph::parse("2\n0 5 1\n"),
            Err(GraphError::InvalidVertex { vertex: 5, .. })
        ));
        assert!(matches!(
            WeightedGraph::parse("2\n0 1 -3\n"),
            Err(GraphError::InvalidWeight { .. })
        ));
    }

    #[test]
    fn from_path_reports_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = WeightedGraph::from_path(&dir.path().join("missing.txt")).expect_err("missing");
        assert!(matches!(err, GraphError::Io { .. }));
    }

    #[test]
    fn from_path_reads_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("g.txt");
        std::fs::write(&path, "2\n0 1 3\n").expect("write");
        let g = WeightedGraph::from_path(&path).expect("valid");
        assert!(g.has_edge(0, 1));
    }
}
