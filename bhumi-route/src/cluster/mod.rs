//! Distributed search: master coordinator, follower replica, and the wire
//! protocol between them.
//!
//! Every round is a full scatter/gather: the master broadcasts the
//! previous round's settle + relaxation deltas, each follower applies them
//! to its replica and answers its shard's local minimum, and the master
//! settles the global minimum. Replicas stay consistent because every
//! follower applies the same messages in the same order with the same
//! deterministic shard policy.

mod follower;
mod master;
mod protocol;
pub mod wire;

pub use follower::FollowerState;
pub use master::{FollowerLink, LocalFollowerLink, MasterCoordinator};
pub use protocol::{DistUpdate, RoundRequest, RoundResponse};
