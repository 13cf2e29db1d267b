//! CVRP sweep solver (spec.md §4.4): fills one truck at a time with a
//! nearest-feasible heuristic, closing a route when no unserved house
//! still fits or no feasible house remains.
//!
//! Grounded in `original_source/src/cvrp.c`'s `compare_houses` and its
//! BST-based unserved-house scan; here the unserved set is a plain
//! `Vec<bool>` (spec.md §9 says any container suffices) and candidates
//! are sorted with `ordered_float::OrderedFloat`, the same crate the
//! teacher uses for comparing `f64` distances.

use ordered_float::OrderedFloat;

use crate::demand::{is_unlimited, validate_capacity, EPSILON};
use crate::error::RoutingError;
use crate::graph::Graph;
use crate::solution::{MultiRouteSolution, Route};
use crate::solvers::exact::solve_exact_path;

/// Runs the CVRP sweep. `quantities` has one entry per house.
pub fn solve_cvrp(
    graph: &Graph,
    quantities: &[i64],
    capacity: i64,
    dump: usize,
) -> Result<MultiRouteSolution, RoutingError> {
    let n = graph.num_nodes();
    validate_capacity(n, quantities, capacity)?;

    if is_unlimited(capacity) {
        let path_solution = solve_exact_path(graph, dump);
        let total_quantity: i64 = quantities.iter().sum();
        let route = Route {
            path: path_solution.path,
            distance: path_solution.total_distance,
            total_quantity,
        };
        return Ok(MultiRouteSolution {
            total_distance: route.distance,
            routes: vec![route],
        });
    }

    let num_houses = quantities.len();
    let mut served = vec![false; num_houses];
    let mut remaining = num_houses;
    let mut routes = Vec::new();

    while remaining > 0 {
        let mut path = vec![0usize];
        let mut u = 0usize;
        let mut load = 0i64;
        let mut distance = 0.0;

        loop {
            let mut candidates: Vec<(usize, f64, i64)> = (0..num_houses)
                .filter(|&h| !served[h] && load + quantities[h] <= capacity)
                .map(|h| (h, graph.distance(u, h + 1), quantities[h]))
                .collect();

            if candidates.is_empty() {
                break;
            }

            candidates.sort_by_key(|&(_, d, _)| OrderedFloat(d));
            let nearest_distance = candidates[0].1;
            let best = candidates
                .iter()
                .filter(|&&(_, d, _)| d <= nearest_distance + EPSILON)
                .max_by_key(|&&(h, _, q)| (q, std::cmp::Reverse(h)))
                .copied()
                .expect("candidates is non-empty");

            let (house, d, q) = best;
            let node = house + 1;
            distance += d;
            served[house] = true;
            remaining -= 1;
            load += q;
            u = node;
            path.push(node);

            if load == capacity {
                break;
            }
            let any_fits = (0..num_houses).any(|h| !served[h] && quantities[h] <= capacity - load);
            if !any_fits {
                break;
            }
        }

        distance += graph.distance(u, dump);
        path.push(dump);

        routes.push(Route {
            total_quantity: load,
            distance,
            path,
        });
    }

    let total_distance = routes.iter().map(|r| r.distance).sum();
    Ok(MultiRouteSolution {
        routes,
        total_distance,
    })
}
