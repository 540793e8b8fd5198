//! `bough centrality`: per-vertex closeness or betweenness scores.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use bough_graph::{
    NodeValues, WeightedGraph, betweenness_centrality, betweenness_centrality_normalised,
    closeness_centrality,
};
use clap::{Args, ValueEnum};
use serde::Serialize;
use tracing::instrument;

use crate::output::{OutputMode, pretty_section, render_mode};

/// Which score to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Measure {
    #[default]
    Closeness,
    Betweenness,
    /// Betweenness divided by `(n - 1)(n - 2)`.
    Normalised,
}

/// Arguments for `bough centrality`.
#[derive(Args, Debug)]
pub struct CentralityArgs {
    /// Edge-list file: vertex count, then `from to weight` per line.
    pub graph: PathBuf,

    #[arg(long, value_enum, default_value_t = Measure::Closeness)]
    pub measure: Measure,
}

#[derive(Debug, Serialize)]
struct CentralityReport {
    measure: Measure,
    values: NodeValues,
}

/// Execute `bough centrality`.
#[instrument(skip_all, fields(measure = ?args.measure))]
pub fn run_centrality(args: &CentralityArgs, output: OutputMode) -> Result<()> {
    let graph = WeightedGraph::from_path(&args.graph)
        .with_context(|| format!("failed to load graph {}", args.graph.display()))?;

    let values = match args.measure {
        Measure::Closeness => closeness_centrality(&graph),
        Measure::Betweenness => betweenness_centrality(&graph),
        Measure::Normalised => betweenness_centrality_normalised(&graph)?,
    };

    let report = CentralityReport {
        measure: args.measure,
        values,
    };

    render_mode(
        output,
        &report,
        |r, w| {
            for (vertex, value) in r.values.iter() {
                writeln!(w, "{vertex}: {value:.6}")?;
            }
            Ok(())
        },
        |r, w| {
            let heading = match r.measure {
                Measure::Closeness => "Closeness centrality",
                Measure::Betweenness => "Betweenness centrality",
                Measure::Normalised => "Normalised betweenness centrality",
            };
            pretty_section(w, heading)?;
            writeln!(w, "{:>6}  {:>12}", "vertex", "score")?;
            for (vertex, value) in r.values.iter() {
                writeln!(w, "{vertex:>6}  {value:>12.6}")?;
            }
            Ok(())
        },
    )
}
