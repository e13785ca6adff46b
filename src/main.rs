//! Command-line driver: builds one graph matrix and answers one query.
//!
//! Without `--edges` the built-in sample graph `a-b, b-c, f-y` is used and the
//! default query is a breadth-first check from `c` to `a`.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use graph_matrix::{
    read_connections_from_path, BreadthFirst, DepthFirst, GraphConfig, GraphMatrix, Traversal,
};

const SAMPLE_CONNECTIONS: [(&str, &str); 3] = [("a", "b"), ("b", "c"), ("f", "y")];

/// Answer connectivity queries over a graph given as a list of connections.
#[derive(Parser)]
#[command(name = "graph-matrix")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Edge-list file with one `from,to` connection per line (defaults to a built-in sample)
    #[arg(short, long)]
    edges: Option<PathBuf>,

    /// Treat connections as one-way edges
    #[arg(long)]
    directed: bool,

    /// Algorithm used for the yes/no query
    #[arg(short, long, value_enum, default_value_t = Method::Bfs)]
    method: Method,

    /// Print a depth-first path instead of a yes/no answer
    #[arg(short, long)]
    path: bool,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Source node
    #[arg(default_value = "c")]
    from: String,

    /// Target node
    #[arg(default_value = "a")]
    to: String,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Method {
    /// Depth-first search
    Dfs,
    /// Breadth-first search
    Bfs,
}

impl Method {
    fn traversal(self) -> Box<dyn Traversal<String>> {
        match self {
            Method::Dfs => Box::new(DepthFirst),
            Method::Bfs => Box::new(BreadthFirst),
        }
    }
}

fn run(cli: &Cli) -> graph_matrix::Result<String, String> {
    let connections: Vec<(String, String)> = match &cli.edges {
        Some(path) => read_connections_from_path(path)?,
        None => SAMPLE_CONNECTIONS
            .iter()
            .map(|(from, to)| (from.to_string(), to.to_string()))
            .collect(),
    };

    let config = GraphConfig::new().with_bidirectional(!cli.directed);
    let graph = GraphMatrix::with_config(connections, &config);

    if cli.path {
        let path = graph.find_path_from_to(&cli.from, &cli.to)?;
        return Ok(path.join(" -> "));
    }

    let traversal = cli.method.traversal();
    tracing::info!(
        method = traversal.name(),
        from = %cli.from,
        to = %cli.to,
        "running connectivity query"
    );

    let connected = traversal.are_connected(&graph, &cli.from, &cli.to)?;
    Ok(connected.to_string())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(answer) => {
            println!("{answer}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}: {e}", "error".red().bold());
            let mut source = std::error::Error::source(&e);
            while let Some(cause) = source {
                eprintln!("  {}: {cause}", "caused by".dimmed());
                source = std::error::Error::source(cause);
            }
            ExitCode::FAILURE
        }
    }
}
