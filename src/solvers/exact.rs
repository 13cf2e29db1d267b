//! Held–Karp bitmask DP: the exact shortest Hamiltonian path from the
//! depot (node 0) to the dump (node `N-1`), visiting every node
//! exactly once.
//!
//! Ported from `original_source/src/tsp.c` (and the near-identical
//! `solve_dis_only` in `pathFinder.c`): `dp[mask][v]` is the minimum
//! cost of a path that starts at 0, has visited exactly the nodes in
//! `mask`, and is currently at `v`. The table is dense and flat
//! (`mask * n + v`), per spec.md §9's guidance against sparse hashing.

use crate::graph::Graph;
use crate::solution::PathSolution;

/// Above this node count the `2^N` state table would be too large to
/// build; spec.md §4.2 calls this "a deliberate guard, not a
/// correctness claim".
pub const MAX_EXACT_NODES: usize = 20;

/// Solves the exact Held–Karp path. `dump` is normally `graph.dump()`
/// but is taken explicitly so callers can't forget to pass it.
pub fn solve_exact_path(graph: &Graph, dump: usize) -> PathSolution {
    let n = graph.num_nodes();

    if n == 0 {
        return PathSolution::empty();
    }
    if n == 1 {
        return PathSolution {
            path: vec![0],
            total_distance: 0.0,
        };
    }
    if n > MAX_EXACT_NODES {
        log::debug!(
            "exact solver: {} nodes exceeds MAX_EXACT_NODES ({}), falling back to [0, dump]",
            n,
            MAX_EXACT_NODES
        );
        return PathSolution {
            path: vec![0, dump],
            total_distance: graph.distance(0, dump),
        };
    }

    let total_states = 1usize << n;
    let mut dp = vec![f64::INFINITY; total_states * n];
    let mut parent = vec![-1i32; total_states * n];

    dp[(1 << 0) * n + 0] = 0.0;

    for mask in 1..total_states {
        for cur in 0..n {
            if mask & (1 << cur) == 0 {
                continue;
            }
            let cur_cost = dp[mask * n + cur];
            if !cur_cost.is_finite() {
                continue;
            }
            for nxt in 0..n {
                if mask & (1 << nxt) != 0 {
                    continue;
                }
                let new_mask = mask | (1 << nxt);
                let cand = cur_cost + graph.distance(cur, nxt);
                if cand < dp[new_mask * n + nxt] {
                    dp[new_mask * n + nxt] = cand;
                    parent[new_mask * n + nxt] = cur as i32;
                }
            }
        }
    }

    let full_mask = total_states - 1;
    let best_cost = dp[full_mask * n + dump];

    if !best_cost.is_finite() {
        log::debug!("exact solver: no finite path to dump {}", dump);
        return PathSolution::empty();
    }

    let mut reversed = Vec::with_capacity(n);
    let mut cur_node = dump as i32;
    let mut cur_mask = full_mask;
    loop {
        reversed.push(cur_node as usize);
        if cur_node == 0 {
            break;
        }
        let prev = parent[cur_mask * n + cur_node as usize];
        cur_mask ^= 1 << cur_node;
        cur_node = prev;
    }
    reversed.reverse();

    PathSolution {
        path: reversed,
        total_distance: best_cost,
    }
}
