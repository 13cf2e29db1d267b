//! Typed solution shapes returned by the solvers.
//!
//! `PathSolution` is produced by the exact and capacity-greedy solvers
//! (spec.md §4.2, §4.3); `MultiRouteSolution` by the CVRP sweep
//! (spec.md §4.4). Both derive `serde::Serialize`/`Deserialize` so a
//! hosting process can hand them to its own JSON formatter without this
//! crate needing to own that format.

use crate::graph::Graph;
use serde::{Deserialize, Serialize};

/// A single ordered sequence of node indices and its total distance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathSolution {
    pub path: Vec<usize>,
    pub total_distance: f64,
}

impl PathSolution {
    /// The empty solution returned for `N = 0` and for the
    /// no-finite-path case in spec.md §4.2.
    pub fn empty() -> Self {
        PathSolution {
            path: Vec::new(),
            total_distance: 0.0,
        }
    }

    /// Recomputes the path's total distance from `graph`, for testing
    /// the invariant that a solver's reported total matches the sum of
    /// its legs (spec.md §8).
    pub fn recomputed_distance(&self, graph: &Graph) -> f64 {
        self.path
            .windows(2)
            .map(|w| graph.distance(w[0], w[1]))
            .sum()
    }
}

/// A single vehicle trip: depot (node 0) to dump (node `N-1`),
/// visiting a subset of houses in between.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub path: Vec<usize>,
    pub distance: f64,
    pub total_quantity: i64,
}

impl Route {
    /// Interior nodes, i.e. the houses visited by this route (every
    /// node except the leading depot and trailing dump).
    pub fn houses(&self) -> &[usize] {
        if self.path.len() < 2 {
            &[]
        } else {
            &self.path[1..self.path.len() - 1]
        }
    }
}

/// A set of routes that together cover every house, produced by the
/// CVRP sweep (or by wrapping a single exact path when capacity is
/// unlimited; spec.md §4.4).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiRouteSolution {
    pub routes: Vec<Route>,
    pub total_distance: f64,
}

impl MultiRouteSolution {
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }
}
