mod error;
mod io;
mod render;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use mf_solver::{Formulation, MinilpSolver, solve_with};

use crate::error::CliResult;

#[derive(Parser)]
#[command(name = "mf-cli")]
#[command(about = "Maximum flow through a capacitated network, solved as a linear program", long_about = None)]
struct Cli {
    /// Log formulation and solver details (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve for the maximum flow from the first node to the last
    Solve {
        /// Edge list, one `origin destination capacity` per line
        graph_path: PathBuf,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Table)]
        format: Format,
        /// Solve options as YAML
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Print the LP arrays built for a graph
    Formulate {
        /// Edge list, one `origin destination capacity` per line
        graph_path: PathBuf,
    },
    /// Parse and validate a graph without solving
    Check {
        /// Edge list, one `origin destination capacity` per line
        graph_path: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Table,
    Json,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Solve {
            graph_path,
            format,
            config,
        } => cmd_solve(&graph_path, format, config.as_deref()),
        Commands::Formulate { graph_path } => cmd_formulate(&graph_path),
        Commands::Check { graph_path } => cmd_check(&graph_path),
    }
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_solve(graph_path: &Path, format: Format, config: Option<&Path>) -> CliResult<()> {
    let graph = io::load_graph(graph_path)?;
    let config = io::load_config(config)?;
    let assignment = solve_with(&graph, &MinilpSolver, &config)?;

    match format {
        Format::Table => {
            println!("{graph}\n");
            print!("{}", render::flow_table(&assignment));
            println!("Maximum flow: {}", render::format_flow(assignment.value));
        }
        Format::Json => println!("{}", render::flow_json(&assignment)?),
    }
    Ok(())
}

fn cmd_formulate(graph_path: &Path) -> CliResult<()> {
    let graph = io::load_graph(graph_path)?;
    let lp = Formulation::new(&graph).build();
    println!("{graph}\n");
    print!("{}", render::lp_arrays(&lp));
    Ok(())
}

fn cmd_check(graph_path: &Path) -> CliResult<()> {
    println!("Checking graph: {}", graph_path.display());
    let graph = io::load_graph(graph_path)?;
    graph.validate()?;

    println!("✓ Graph is valid");
    println!("  Nodes: {}", graph.node_count());
    println!("  Edges: {}", graph.edge_count());
    if let (Some(source), Some(sink)) = (graph.source(), graph.sink()) {
        println!("  Source: {source}");
        println!("  Sink: {sink}");
    }
    if !graph.is_ordered() {
        println!("  Note: adjacency is symmetric, so edge direction carries no information");
    }
    Ok(())
}
