//! MargaNav - terrain route solver CLI.
//!
//! Subcommands:
//!
//! - `solve`: single-process search with sharded worker threads
//! - `sweep`: full-grid relaxation reference solver
//! - `master`: distributed search coordinator over TCP followers
//! - `follower`: follower service answering one master's round exchanges

mod client;
mod error;
mod follower;
mod master;
mod service;
mod solve;
mod terrain;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing::error;

use bhumi_route::RouteConfig;
use error::Result;

#[derive(Parser)]
#[command(name = "marga-nav", version, about = "Terrain route planner")]
struct Cli {
    /// Optional TOML configuration file (cost model, workers, timeouts).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Solve a route in-process with sharded worker threads.
    Solve(SolveArgs),
    /// Solve a route with the full-grid sweep solver (slow, reference).
    Sweep(SolveArgs),
    /// Coordinate a distributed search over follower services.
    Master(MasterArgs),
    /// Serve one shard of a distributed search.
    Follower(FollowerArgs),
}

/// Arguments shared by the in-process solvers.
#[derive(Args)]
struct SolveArgs {
    /// Height map JSON file.
    #[arg(short = 'm', long)]
    height_map: PathBuf,

    /// Obstacle texture (PNG); pure black pixels are blocked.
    #[arg(short = 't', long)]
    texture: PathBuf,

    /// Source cell row.
    #[arg(long)]
    from_row: i32,

    /// Source cell column.
    #[arg(long)]
    from_col: i32,

    /// Destination cell row.
    #[arg(long)]
    to_row: i32,

    /// Destination cell column.
    #[arg(long)]
    to_col: i32,

    /// Output route JSON file.
    #[arg(short = 'o', long)]
    out: PathBuf,

    /// Worker thread count (defaults to available parallelism).
    #[arg(long)]
    workers: Option<usize>,
}

#[derive(Args)]
struct MasterArgs {
    /// Height map JSON file.
    #[arg(short = 'm', long)]
    height_map: PathBuf,

    /// Obstacle texture (PNG); pure black pixels are blocked.
    #[arg(short = 't', long)]
    texture: PathBuf,

    /// Source cell row.
    #[arg(long)]
    from_row: i32,

    /// Source cell column.
    #[arg(long)]
    from_col: i32,

    /// Destination cell row.
    #[arg(long)]
    to_row: i32,

    /// Destination cell column.
    #[arg(long)]
    to_col: i32,

    /// Output route JSON file.
    #[arg(short = 'o', long)]
    out: PathBuf,

    /// Follower addresses (host:port), one shard each.
    #[arg(long, required = true, value_delimiter = ',')]
    followers: Vec<String>,
}

#[derive(Args)]
struct FollowerArgs {
    /// Height map JSON file (for the grid dimensions).
    #[arg(short = 'm', long)]
    height_map: PathBuf,

    /// Destination cell row (must match the master's).
    #[arg(long)]
    to_row: i32,

    /// Destination cell column (must match the master's).
    #[arg(long)]
    to_col: i32,

    /// Address to listen on (host:port).
    #[arg(long)]
    listen: String,

    /// Total follower count in the cluster.
    #[arg(long)]
    shard_count: usize,

    /// This follower's shard index (0-based).
    #[arg(long)]
    shard_index: usize,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("marga_nav=info".parse().expect("static directive"))
                .add_directive("bhumi_route=info".parse().expect("static directive")),
        )
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        error!("{e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => RouteConfig::load(path)?,
        None => RouteConfig::default(),
    };

    match cli.command {
        Command::Solve(args) => solve::run(&args, &config),
        Command::Sweep(args) => solve::run_sweep(&args, &config),
        Command::Master(args) => master::run(&args, &config),
        Command::Follower(args) => follower::run(&args, &config),
    }
}
