//! Deterministic synthetic instance generation, used by property tests
//! and the `demo` CLI subcommand.
//!
//! Grounded in the teacher's own seeded-randomness pattern for
//! construction heuristics (`pd-tsp-solver`'s use of `rand_chacha`):
//! a fixed seed gives reproducible instances across runs and machines.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::graph::{Graph, Metric, Point};

/// A generated instance: a graph plus a demand vector sized to its
/// house count (`graph.num_nodes() - 2`).
pub struct Instance {
    pub graph: Graph,
    pub demands: Vec<i64>,
}

/// Generates `num_houses` houses plus a depot and a dump, scattered
/// uniformly in `[0, extent) x [0, extent)`, with demand drawn from
/// `[min_demand, max_demand]`.
pub fn random_instance(
    seed: u64,
    num_houses: usize,
    extent: f64,
    min_demand: i64,
    max_demand: i64,
    metric: Metric,
) -> Instance {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let total_nodes = num_houses + 2;
    let points: Vec<Point> = (0..total_nodes)
        .map(|_| Point::new(rng.gen_range(0.0..extent), rng.gen_range(0.0..extent)))
        .collect();

    let demands: Vec<i64> = (0..num_houses)
        .map(|_| rng.gen_range(min_demand..=max_demand))
        .collect();

    Instance {
        graph: Graph::build(&points, metric),
        demands,
    }
}
