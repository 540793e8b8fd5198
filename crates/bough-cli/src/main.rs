#![forbid(unsafe_code)]

mod cmd;
mod output;

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use bough_core::ErrorCode;
use bough_core::config::resolve_config;
use clap::{Parser, Subcommand};
use output::{CliError, OutputMode, render_error, resolve_output_mode};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "bough: word-frequency ranking and weighted graph analytics",
    long_about = None
)]
struct Cli {
    /// Emit JSON output instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Output format. Defaults to pretty on a terminal, text when piped.
    #[arg(long, global = true, value_enum)]
    format: Option<OutputMode>,

    /// Config file to use instead of `./bough.toml` or the user config.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    fn output_mode(&self) -> OutputMode {
        resolve_output_mode(self.format, self.json)
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = "Rank the most frequent words of a book",
        long_about = "Count words between the `*** START OF` and `*** END OF` lines of a \
                      plain-text book and print the most frequent ones.",
        after_help = "EXAMPLES:\n    # Top 10 words\n    bough words pg11.txt\n\n    # Top 25 words as JSON\n    bough words 25 pg11.txt --json"
    )]
    Words(cmd::words::WordsArgs),

    #[command(
        about = "Shortest paths from one vertex",
        long_about = "Run Dijkstra from SOURCE and print each vertex's distance and every \
                      predecessor on a shortest path.",
        after_help = "EXAMPLES:\n    # Distances from vertex 0\n    bough paths graph.txt 0\n\n    # Also list every shortest path to vertex 3\n    bough paths graph.txt 0 --to 3"
    )]
    Paths(cmd::paths::PathsArgs),

    #[command(
        about = "Closeness or betweenness centrality",
        after_help = "EXAMPLES:\n    # Closeness (default)\n    bough centrality graph.txt\n\n    # Normalised betweenness\n    bough centrality graph.txt --measure normalised"
    )]
    Centrality(cmd::centrality::CentralityArgs),

    #[command(
        about = "Hierarchical agglomerative clustering",
        long_about = "Cluster vertices using 1/weight as the distance between linked \
                      vertices and print the resulting dendrogram.",
        after_help = "EXAMPLES:\n    # Single linkage\n    bough cluster graph.txt\n\n    # Complete linkage as JSON\n    bough cluster graph.txt --linkage complete --json"
    )]
    Cluster(cmd::cluster::ClusterArgs),
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("BOUGH_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if env::var("DEBUG").is_ok() {
            "bough=debug,info"
        } else {
            "bough=info,warn"
        })
    });

    let format = env::var("BOUGH_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn run(cli: &Cli, output: OutputMode) -> Result<(), CliError> {
    let project_root = env::current_dir()
        .map_err(|err| CliError::with_code(err.to_string(), ErrorCode::InputReadFailed))?;
    let config = resolve_config(&project_root, cli.config.as_deref())
        .map_err(|err| CliError::with_code(format!("{err:#}"), ErrorCode::ConfigParseError))?;
    debug!(?config, "resolved config");

    let result = match &cli.command {
        Commands::Words(args) => cmd::words::run_words(args, &config.words, output, &project_root),
        Commands::Paths(args) => cmd::paths::run_paths(args, output),
        Commands::Centrality(args) => cmd::centrality::run_centrality(args, output),
        Commands::Cluster(args) => cmd::cluster::run_cluster(args, &config.cluster, output),
    };
    result.map_err(|err| CliError::from(&err))
}

fn main() -> anyhow::Result<ExitCode> {
    init_tracing();

    let cli = Cli::parse();
    let output = cli.output_mode();

    match run(&cli, output) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            debug!(code = ?err.error_code, "command failed");
            render_error(output, &err)?;
            Ok(ExitCode::FAILURE)
        }
    }
}
