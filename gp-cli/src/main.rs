#![deny(
    // Strict on purpose: anything these catch either gets fixed or gets an inline allow explaining
    // why it is fine.
    clippy::nursery,
    clippy::pedantic,
    missing_docs,
    clippy::missing_docs_in_private_items,
)]

//! `gpctl` – solve all-pairs shortest paths for a graph definition file and query the result.
//!
//! The input is a JSON or YAML [`GraphDefinition`]. Without a `--from/--to` query the full
//! distance matrix is printed; with one, the distance and a shortest path between the two
//! vertices are printed (and the matrix too when `--print-matrix` is given).
use std::io::{
    self,
    Write,
};
use std::path::PathBuf;

use anyhow::{
    Context,
    Result,
};
use clap::Parser;
use gp_core::{
    Algorithm,
    Graph,
    GraphDefinition,
    GraphError,
};
use itertools::Itertools;
use tracing::{
    info,
    instrument,
};

/// Solve all-pairs shortest paths on a weighted directed graph
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Graph definition serialized as JSON (`.json`) or YAML (`.yaml`/`.yml`).
    #[arg(short, long)]
    input: PathBuf,

    /// All-pairs shortest path algorithm to run.
    #[arg(short, long, default_value = "floyd-warshall", value_parser = parse_algorithm)]
    algorithm: Algorithm,

    /// Source vertex of a path query.
    #[arg(long, requires = "to")]
    from: Option<usize>,

    /// Target vertex of a path query.
    #[arg(long, requires = "from")]
    to: Option<usize>,

    /// Print the distance matrix even when a path query is given.
    #[arg(short = 'm', long)]
    print_matrix: bool,

    /// Logging verbosity level (`trace`, `debug`, `info`, `warn`, `error`).
    #[arg(short, long, default_value = "info")]
    verbosity: String,
}

/// Map `--algorithm` onto [`Algorithm`], surfacing the library's error text to clap.
fn parse_algorithm(s: &str) -> Result<Algorithm, String> {
    s.parse().map_err(|e: GraphError| e.to_string())
}

/// Load, solve and print according to `args`.
#[instrument(skip(out), fields(input = %args.input.display()))]
fn run(args: &Cli, out: &mut impl Write) -> Result<()> {
    let def = GraphDefinition::load(&args.input)
        .with_context(|| format!("could not load graph from {}", args.input.display()))?;
    let mut graph = Graph::try_from(def)?;
    info!(vertices = graph.vertex_count(), edges = graph.edge_count(), "loaded graph");

    graph.solve(args.algorithm)?;
    let solution = graph.solution()?;

    let query = args.from.zip(args.to);
    if args.print_matrix || query.is_none() {
        write!(out, "{solution}")?;
    }

    if let Some((from, to)) = query {
        let path = graph.path(from, to)?;
        writeln!(out, "distance {from} -> {to}: {}", graph.distance(from, to)?)?;
        if path.is_empty() {
            writeln!(out, "path: unreachable")?;
        } else {
            writeln!(out, "path: {}", path.iter().join(" -> "))?;
        }
    }
    Ok(())
}

/// Parse arguments, install logging and run.
fn main() -> Result<()> {
    let args = Cli::parse();
    gp_core::logging::setup(&args.verbosity);

    run(&args, &mut io::stdout().lock())
}

#[cfg(test)]
mod tests;
