//! Follower service command.

use bhumi_route::{io, Cell, FollowerState, RouteConfig};

use crate::error::Result;
use crate::service;
use crate::FollowerArgs;

/// Build the replica and serve one master connection.
pub fn run(args: &FollowerArgs, _config: &RouteConfig) -> Result<()> {
    let heights = io::load_height_map(&args.height_map)?;
    let dest = Cell::new(args.to_row, args.to_col);
    let state = FollowerState::new(
        heights.rows(),
        heights.cols(),
        args.shard_count,
        args.shard_index,
        dest,
    )?;
    service::serve(&args.listen, state)
}
