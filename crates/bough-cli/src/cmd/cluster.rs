//! `bough cluster`: agglomerative clustering of a weighted graph.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use bough_core::config::ClusterConfig;
use bough_graph::{Dendrogram, Linkage, WeightedGraph, hierarchical_clustering};
use clap::Args;
use serde::Serialize;
use tracing::instrument;

use crate::output::{OutputMode, pretty_kv, pretty_section, render_mode};

/// Arguments for `bough cluster`.
#[derive(Args, Debug)]
pub struct ClusterArgs {
    /// Edge-list file: vertex count, then `from to weight` per line.
    pub graph: PathBuf,

    /// `single` or `complete`. Defaults to `cluster.linkage` from config.
    #[arg(long)]
    pub linkage: Option<Linkage>,
}

#[derive(Debug, Serialize)]
struct ClusterReport {
    linkage: Linkage,
    vertices: usize,
    dendrogram: Option<Dendrogram>,
}

/// Indented outline of `tree`, one node per line.
fn write_tree(w: &mut dyn Write, tree: &Dendrogram, indent: &str) -> io::Result<()> {
    for (depth, node) in tree.walk() {
        let pad = indent.repeat(depth);
        match node.vertex() {
            Some(vertex) => writeln!(w, "{pad}{vertex}")?,
            None => match node.distance() {
                Some(distance) => writeln!(w, "{pad}+ {distance}")?,
                None => writeln!(w, "{pad}+ disconnected")?,
            },
        }
    }
    Ok(())
}

/// Execute `bough cluster`.
#[instrument(skip_all)]
pub fn run_cluster(args: &ClusterArgs, config: &ClusterConfig, output: OutputMode) -> Result<()> {
    let linkage = args.linkage.unwrap_or(config.linkage);
    let graph = WeightedGraph::from_path(&args.graph)
        .with_context(|| format!("failed to load graph {}", args.graph.display()))?;
    let dendrogram = hierarchical_clustering(&graph, linkage)?;

    let report = ClusterReport {
        linkage,
        vertices: graph.vertex_count(),
        dendrogram,
    };

    render_mode(
        output,
        &report,
        |r, w| match &r.dendrogram {
            Some(tree) => write_tree(w, tree, "  "),
            None => Ok(()),
        },
        |r, w| {
            pretty_section(w, &format!("Dendrogram ({} linkage)", r.linkage))?;
            pretty_kv(w, "vertices", r.vertices.to_string())?;
            match &r.dendrogram {
                Some(tree) => {
                    pretty_kv(w, "height", tree.height().to_string())?;
                    writeln!(w)?;
                    write_tree(w, tree, "│ ")
                }
                None => writeln!(w, "(empty graph)"),
            }
        },
    )
}
