//! Error types for the routing core.
//!
//! Every public solver entry point returns `Result<_, RoutingError>`.
//! Nothing is silently retried: a precondition violation is surfaced to
//! the caller before any solver loop starts.

use thiserror::Error;

/// Errors the routing core can report.
#[derive(Debug, Error, PartialEq)]
pub enum RoutingError {
    /// Fewer than 2 nodes for a capacity-aware solver, or a distance
    /// matrix that doesn't match the node count.
    #[error("graph has {0} node(s); a capacity-aware solver needs at least 2")]
    InvalidGraph(usize),

    /// A single house's demand exceeds the vehicle capacity. The
    /// originating C implementation warned and kept going, which left
    /// its route-building loop unable to terminate; this crate promotes
    /// the condition to a hard error instead, before any loop starts.
    #[error("house {house} demand {demand} exceeds capacity {capacity}")]
    InfeasibleDemand {
        house: usize,
        demand: i64,
        capacity: i64,
    },

    /// The demand vector's length doesn't match the number of houses
    /// implied by the graph (`N - 2`).
    #[error("distance matrix implies {nodes} nodes but {demands} demands were given")]
    MalformedInput { nodes: usize, demands: usize },
}
