//! `bough paths`: shortest distances and predecessor sets from one vertex.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use bough_graph::{WeightedGraph, shortest_paths};
use clap::Args;
use serde::Serialize;
use tracing::instrument;

use crate::output::{OutputMode, fmt_distance, pretty_section, render_mode};

/// Arguments for `bough paths`.
#[derive(Args, Debug)]
pub struct PathsArgs {
    /// Edge-list file: vertex count, then `from to weight` per line.
    pub graph: PathBuf,

    /// Vertex to measure from.
    pub source: usize,

    /// Also list every shortest path to this vertex.
    #[arg(long, value_name = "VERTEX")]
    pub to: Option<usize>,
}

#[derive(Debug, Serialize)]
struct VertexRow {
    vertex: usize,
    distance: Option<f64>,
    predecessors: Vec<usize>,
    path_count: f64,
}

#[derive(Debug, Serialize)]
struct PathsReport {
    source: usize,
    vertices: Vec<VertexRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    paths: Option<Vec<Vec<usize>>>,
}

fn join(vertices: &[usize]) -> String {
    vertices
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Execute `bough paths`.
#[instrument(skip_all, fields(source = args.source))]
pub fn run_paths(args: &PathsArgs, output: OutputMode) -> Result<()> {
    let graph = WeightedGraph::from_path(&args.graph)
        .with_context(|| format!("failed to load graph {}", args.graph.display()))?;
    let sp = shortest_paths(&graph, args.source).context("invalid source vertex")?;

    let counts = sp.path_counts();
    let vertices = (0..graph.vertex_count())
        .map(|v| VertexRow {
            vertex: v,
            distance: sp.distance(v),
            predecessors: sp.predecessors(v).to_vec(),
            path_count: counts[v],
        })
        .collect();

    let paths = match args.to {
        Some(target) => {
            graph.check_vertex(target).context("invalid --to vertex")?;
            Some(sp.paths_to(target))
        }
        None => None,
    };

    let report = PathsReport {
        source: args.source,
        vertices,
        paths,
    };

    render_mode(
        output,
        &report,
        |r, w| {
            for row in &r.vertices {
                writeln!(
                    w,
                    "{} {} [{}]",
                    row.vertex,
                    fmt_distance(row.distance),
                    join(&row.predecessors)
                )?;
            }
            for path in r.paths.iter().flatten() {
                writeln!(w, "path {}", join(path))?;
            }
            Ok(())
        },
        |r, w| {
            pretty_section(w, &format!("Shortest paths from {}", r.source))?;
            writeln!(w, "{:>6}  {:>10}  {:>8}  predecessors", "vertex", "distance", "paths")?;
            for row in &r.vertices {
                writeln!(
                    w,
                    "{:>6}  {:>10}  {:>8}  {}",
                    row.vertex,
                    fmt_distance(row.distance),
                    row.path_count,
                    join(&row.predecessors)
                )?;
            }
            if let Some(paths) = &r.paths {
                writeln!(w)?;
                pretty_section(w, &format!("{} shortest path(s)", paths.len()))?;
                for path in paths {
                    let hops: Vec<_> = path.iter().map(ToString::to_string).collect();
                    writeln!(w, "  {}", hops.join(" -> "))?;
                }
            }
            Ok(())
        },
    )
}
