//! Distributed search coordinator command.

use bhumi_route::{io, reconstruct, Cell, FollowerLink, MasterCoordinator, RouteConfig};
use tracing::info;

use crate::client::TcpLink;
use crate::error::Result;
use crate::terrain::load_field;
use crate::MasterArgs;

/// Connect to every follower, run the search, write the route.
pub fn run(args: &MasterArgs, config: &RouteConfig) -> Result<()> {
    let field = load_field(&args.height_map, &args.texture, config.cost)?;
    let source = Cell::new(args.from_row, args.from_col);
    let dest = Cell::new(args.to_row, args.to_col);

    let mut links: Vec<Box<dyn FollowerLink>> = Vec::with_capacity(args.followers.len());
    for addr in &args.followers {
        links.push(Box::new(TcpLink::connect(addr, &config.cluster)?));
    }
    info!(followers = links.len(), "cluster assembled");

    let mut master = MasterCoordinator::new(&field, links)?;
    let report = master.run(source, dest)?;

    let route = reconstruct(&report.distances, source, dest)?;
    info!(cells = route.cells.len(), "route reconstructed");
    println!("total cost: {:.2}", route.total_cost);
    io::write_route(&route, &args.out)?;
    Ok(())
}
