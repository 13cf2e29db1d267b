//! Waste Route Solver
//!
//! Routing core for a small waste-collection problem: a depot, a set
//! of houses with integer demand, and a dump. Three solvers share one
//! graph/distance model:
//!
//! - an exact shortest Hamiltonian-path solver (Held–Karp bitmask DP)
//! - a capacity-aware greedy single-vehicle solver with return-to-depot
//!   recovery
//! - a capacitated vehicle-routing (CVRP) sweep that fills one truck
//!   at a time
//!
//! # Example
//!
//! ```
//! use waste_route_solver::graph::{Graph, Metric, Point};
//! use waste_route_solver::solvers::solve_path;
//!
//! let points = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(1.0, 0.0),
//!     Point::new(1.0, 1.0),
//!     Point::new(0.0, 1.0),
//! ];
//! let graph = Graph::build(&points, Metric::Euclidean);
//! let solution = solve_path(&graph, graph.dump(), None, None).unwrap();
//! println!("path {:?}, length {:.2}", solution.path, solution.total_distance);
//! ```

pub mod demand;
pub mod error;
pub mod fixtures;
pub mod graph;
pub mod solution;
pub mod solvers;

pub use error::RoutingError;
pub use graph::Graph;
pub use solution::{MultiRouteSolution, PathSolution, Route};
pub use solvers::cvrp::solve_cvrp;
pub use solvers::solve_path;
