//! Capacity and demand constants shared by the capacity-aware solvers.
//!
//! Grounded in `original_source/src/cvrp.h` and `pathFinder.c`: the C
//! code used a bare `-1` for "no capacity limit" and a hand-rolled
//! epsilon for float comparisons. Both get named constants here.

use crate::error::RoutingError;

/// Sentinel capacity meaning "no limit" — the vehicle never returns to
/// the depot early. Passed through from `original_source/src/cvrp.h`'s
/// `NO_CAPACITY`.
pub const NO_CAPACITY: i64 = -1;

/// Tolerance for comparing accumulated floating-point distances during
/// tie-breaking in the CVRP sweep (spec.md §4.4).
pub const EPSILON: f64 = 1e-9;

/// `true` when `capacity` means "unlimited".
#[inline]
pub fn is_unlimited(capacity: i64) -> bool {
    capacity == NO_CAPACITY
}

/// Checks that every house's demand is non-negative and individually
/// fits within `capacity`, and that `quantities.len()` matches the
/// number of houses implied by `num_nodes` (`num_nodes - 2`).
///
/// Zero-demand houses are valid and must be visited: the originating
/// `pathFinder.c` filtered them out of its "houses visited" count,
/// which left `solve_capacity_dis`'s loop unable to terminate whenever
/// a zero-demand house existed. This crate never builds that filter in
/// the first place.
pub fn validate_capacity(
    num_nodes: usize,
    quantities: &[i64],
    capacity: i64,
) -> Result<(), RoutingError> {
    if num_nodes < 2 {
        return Err(RoutingError::InvalidGraph(num_nodes));
    }

    let expected_houses = num_nodes - 2;
    if quantities.len() != expected_houses {
        return Err(RoutingError::MalformedInput {
            nodes: num_nodes,
            demands: quantities.len(),
        });
    }

    if is_unlimited(capacity) {
        return Ok(());
    }

    for (index, &demand) in quantities.iter().enumerate() {
        if demand > capacity {
            // Report the 1-based node index, matching
            // `original_source/src/pathFinder.c:189`'s `i + 1` and
            // spec.md's own house numbering (`h in 1..N-2`).
            return Err(RoutingError::InfeasibleDemand {
                house: index + 1,
                demand,
                capacity,
            });
        }
    }

    Ok(())
}
