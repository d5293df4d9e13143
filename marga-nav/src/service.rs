//! Follower TCP service.
//!
//! Serves exactly one master connection: round requests are read as
//! length-prefixed frames, applied to the replica, and answered with this
//! shard's local minimum. The master closing the connection means the
//! search is over and the process exits cleanly - one search per follower
//! process.

use std::io::ErrorKind;
use std::net::TcpListener;

use bhumi_route::cluster::wire::{read_frame, write_frame};
use bhumi_route::{Error, FollowerState, RoundRequest};
use tracing::info;

use crate::error::Result;

/// Listen, accept one master, and answer rounds until it disconnects.
pub fn serve(addr: &str, mut state: FollowerState) -> Result<()> {
    let listener = TcpListener::bind(addr)?;
    info!(%addr, shard = state.shard_index(), "follower listening");

    let (mut stream, peer) = listener.accept()?;
    stream.set_nodelay(true)?;
    info!(%peer, "master connected");

    loop {
        let request: RoundRequest = match read_frame(&mut stream) {
            Ok(request) => request,
            Err(Error::Io(e)) if e.kind() == ErrorKind::UnexpectedEof => {
                info!("master disconnected, search over");
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };
        let response = state.apply(&request);
        write_frame(&mut stream, &response)?;
    }
}
