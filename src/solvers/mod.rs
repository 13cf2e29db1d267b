//! Dispatcher (spec.md §4.5): picks the exact solver or the
//! capacity-aware greedy solver for a single-path request, based on
//! whether a positive capacity and a demand vector were supplied.
//!
//! CVRP is requested directly through [`cvrp::solve_cvrp`] — it is
//! "strictly the multi-route heuristic" (spec.md §4.5) and is not
//! reached through `solve_path`.

pub mod capacity;
pub mod cvrp;
pub mod exact;

use crate::demand::NO_CAPACITY;
use crate::error::RoutingError;
use crate::graph::Graph;
use crate::solution::PathSolution;

/// Single-path entry point. Runs the capacity-aware greedy solver
/// (§4.3) when `capacity` is a positive number, `demands` is
/// supplied, and the graph has more than one node; otherwise runs the
/// exact Held–Karp solver (§4.2).
///
/// `N <= 1` always takes the exact arm (spec.md §4.5: "`C ≤ 0` or
/// `N ≤ 1` → exact solver", matching
/// `original_source/src/pathFinder.c`'s `if (capacity <= 0 || n <= 1)`
/// guard) since the capacity solver's own precondition check rejects
/// fewer than two nodes outright.
pub fn solve_path(
    graph: &Graph,
    dump: usize,
    demands: Option<&[i64]>,
    capacity: Option<i64>,
) -> Result<PathSolution, RoutingError> {
    match (demands, capacity) {
        (Some(quantities), Some(c)) if c > 0 && graph.num_nodes() > 1 => {
            capacity::solve_capacity_path(graph, dump, quantities, c)
        }
        _ => {
            log::debug!("dispatcher: routing to exact solver (no positive capacity supplied)");
            Ok(exact::solve_exact_path(graph, dump))
        }
    }
}
