//! Capacity-aware greedy single-vehicle solver (spec.md §4.3).
//!
//! One vehicle visits every house in nearest-feasible order, returning
//! to the depot to empty whenever the next reachable house would not
//! fit, and finishes at the dump. Grounded in
//! `original_source/src/pathFinder.c`'s `solve_capacity_dis`, with the
//! zero-demand selection filter dropped (see `validate_capacity`'s
//! doc comment and DESIGN.md) so the loop always terminates.

use crate::demand::validate_capacity;
use crate::error::RoutingError;
use crate::graph::Graph;
use crate::solution::PathSolution;
use crate::solvers::exact::solve_exact_path;

/// Runs the capacity-aware greedy solver. `quantities` has one entry
/// per house, i.e. length `graph.num_nodes() - 2`, indexed by house
/// node index minus one.
///
/// `capacity <= 0` (including `NO_CAPACITY`) means no capacity
/// constraint applies, so the vehicle never has a reason to return to
/// the depot: delegate straight to the exact solver, the same
/// short-circuit `original_source/src/pathFinder.c` takes
/// (`if (capacity <= 0 || n <= 1) return solve_dis_only(...)`).
/// Without this, the selection filter `load + quantities[h] >
/// capacity` is true for every house whenever `capacity` is negative,
/// so no house is ever feasible and the loop returns to the depot
/// forever.
pub fn solve_capacity_path(
    graph: &Graph,
    dump: usize,
    quantities: &[i64],
    capacity: i64,
) -> Result<PathSolution, RoutingError> {
    let n = graph.num_nodes();

    if capacity <= 0 || n <= 1 {
        return Ok(solve_exact_path(graph, dump));
    }

    validate_capacity(n, quantities, capacity)?;

    let num_houses = quantities.len();
    let mut visited = vec![false; num_houses];
    let mut remaining = num_houses;

    let mut path = vec![0usize];
    let mut total_distance = 0.0;
    let mut u = 0usize;
    let mut load = 0i64;

    while remaining > 0 {
        let mut best: Option<(usize, f64)> = None;
        for house in 0..num_houses {
            if visited[house] {
                continue;
            }
            if load + quantities[house] > capacity {
                continue;
            }
            let node = house + 1;
            let d = graph.distance(u, node);
            match best {
                Some((_, best_d)) if d >= best_d => {}
                _ => best = Some((house, d)),
            }
        }

        match best {
            Some((house, d)) => {
                let node = house + 1;
                total_distance += d;
                visited[house] = true;
                remaining -= 1;
                load += quantities[house];
                u = node;
                path.push(node);
            }
            None => {
                log::debug!("capacity solver: saturated at load {}, returning to depot", load);
                total_distance += graph.distance(u, 0);
                u = 0;
                load = 0;
                path.push(0);
            }
        }
    }

    total_distance += graph.distance(u, dump);
    path.push(dump);

    Ok(PathSolution {
        path,
        total_distance,
    })
}
