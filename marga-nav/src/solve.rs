//! In-process solver commands.

use bhumi_route::{io, reconstruct, sweep, Cell, RelaxationEngine, RouteConfig};
use tracing::info;

use crate::error::Result;
use crate::terrain::load_field;
use crate::SolveArgs;

/// Run the sharded relaxation engine.
pub fn run(args: &SolveArgs, config: &RouteConfig) -> Result<()> {
    let field = load_field(&args.height_map, &args.texture, config.cost)?;
    let source = Cell::new(args.from_row, args.from_col);
    let dest = Cell::new(args.to_row, args.to_col);

    let workers = args.workers.unwrap_or(config.search.workers);
    let engine = RelaxationEngine::new(&field, workers);
    let report = engine.run(source, dest)?;

    let route = reconstruct(&report.distances, source, dest)?;
    info!(cells = route.cells.len(), "route reconstructed");
    println!("total cost: {:.2}", route.total_cost);
    io::write_route(&route, &args.out)?;
    Ok(())
}

/// Run the full-grid sweep solver.
pub fn run_sweep(args: &SolveArgs, config: &RouteConfig) -> Result<()> {
    let field = load_field(&args.height_map, &args.texture, config.cost)?;
    let source = Cell::new(args.from_row, args.from_col);
    let dest = Cell::new(args.to_row, args.to_col);

    if !field.is_valid(source) {
        return Err(bhumi_route::Error::InvalidEndpoint(source).into());
    }
    let distances = sweep(&field, dest)?;

    let route = reconstruct(&distances, source, dest)?;
    info!(cells = route.cells.len(), "route reconstructed");
    println!("total cost: {:.2}", route.total_cost);
    io::write_route(&route, &args.out)?;
    Ok(())
}
