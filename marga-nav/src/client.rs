//! TCP link from the master to one follower.

use std::io::ErrorKind;
use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

use bhumi_route::cluster::wire::{read_frame, write_frame};
use bhumi_route::{ClusterConfig, Error, FollowerLink, RoundRequest, RoundResponse};
use tracing::info;

use crate::error::{NavError, Result};

/// One follower connection, held for the lifetime of the search.
///
/// Connect, read and write deadlines come from the cluster configuration;
/// a missed deadline is a fatal transport error, exactly like any other
/// exchange failure.
pub struct TcpLink {
    stream: TcpStream,
}

impl TcpLink {
    /// Connect to a follower.
    pub fn connect(addr: &str, cluster: &ClusterConfig) -> Result<Self> {
        let target = addr
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| NavError::Other(format!("cannot resolve follower address {addr}")))?;
        let stream = TcpStream::connect_timeout(
            &target,
            Duration::from_millis(cluster.connect_timeout_ms),
        )?;
        stream.set_nodelay(true)?;
        let exchange = Some(Duration::from_millis(cluster.exchange_timeout_ms));
        stream.set_read_timeout(exchange)?;
        stream.set_write_timeout(exchange)?;
        info!(%addr, "follower connected");
        Ok(Self { stream })
    }
}

impl FollowerLink for TcpLink {
    fn exchange(&mut self, request: &RoundRequest) -> bhumi_route::Result<RoundResponse> {
        write_frame(&mut self.stream, request)?;
        match read_frame(&mut self.stream) {
            Err(Error::Io(e))
                if matches!(e.kind(), ErrorKind::TimedOut | ErrorKind::WouldBlock) =>
            {
                Err(Error::Timeout)
            }
            other => other,
        }
    }
}
