//! Whole-crate black-box checks for the six worked end-to-end
//! scenarios plus the boundary behaviors, exercised through the
//! public API rather than any solver's internals.

use waste_route_solver::graph::{Graph, Metric, Point};
use waste_route_solver::solvers::cvrp::solve_cvrp;
use waste_route_solver::solvers::solve_path;

#[test]
fn exact_tiny() {
    let points = [
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(1.0, 1.0),
        Point::new(0.0, 1.0),
    ];
    let g = Graph::build(&points, Metric::Euclidean);
    let sol = solve_path(&g, 3, None, None).unwrap();
    assert_eq!(sol.path, vec![0, 1, 2, 3]);
    assert!((sol.total_distance - 3.0).abs() < 1e-9);
}

#[test]
fn exact_with_detour() {
    let points = [
        Point::new(0.0, 0.0),
        Point::new(2.0, 0.0),
        Point::new(2.0, 2.0),
        Point::new(0.0, 0.0),
    ];
    let g = Graph::build(&points, Metric::Euclidean);
    let sol = solve_path(&g, 3, None, None).unwrap();
    let expected = 2.0 + 2.0 + 2.0 * 2.0_f64.sqrt();
    assert!((sol.total_distance - expected).abs() < 1e-9);
}

#[test]
fn grid_metric_scenario() {
    let points = [Point::new(0.0, 0.0), Point::new(3.0, 4.0), Point::new(6.0, 0.0)];
    let g = Graph::build(&points, Metric::Grid);
    let sol = solve_path(&g, 2, None, None).unwrap();
    assert!((sol.total_distance - 14.0).abs() < 1e-9);
}

#[test]
fn capacity_split_greedy() {
    let points = [
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(2.0, 0.0),
        Point::new(3.0, 0.0),
        Point::new(4.0, 0.0),
    ];
    let g = Graph::build(&points, Metric::Euclidean);
    let sol = solve_path(&g, 4, Some(&[2, 2, 2]), Some(3)).unwrap();
    assert_eq!(sol.path, vec![0, 1, 0, 2, 0, 3, 4]);
    assert!((sol.total_distance - 10.0).abs() < 1e-9);
}

#[test]
fn cvrp_sweep_scenario() {
    let points = [
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(2.0, 0.0),
        Point::new(3.0, 0.0),
        Point::new(4.0, 0.0),
    ];
    let g = Graph::build(&points, Metric::Euclidean);
    let sol = solve_cvrp(&g, &[2, 2, 2], 3, 4).unwrap();
    assert_eq!(sol.num_routes(), 3);
    for route in &sol.routes {
        assert_eq!(route.total_quantity, 2);
        assert_eq!(route.path.first(), Some(&0));
        assert_eq!(route.path.last(), Some(&4));
    }
}

#[test]
fn tie_break_by_quantity() {
    let points = [
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(2.0, 0.0),
    ];
    let g = Graph::build(&points, Metric::Euclidean);
    let sol = solve_cvrp(&g, &[1, 5], 10, 3).unwrap();
    // house 2 (quantity 5) must be picked before house 1 (quantity 1)
    // despite identical distance from the depot.
    assert_eq!(sol.routes[0].path[1], 2);
}

#[test]
fn boundary_n_zero() {
    let g = Graph::build(&[], Metric::Euclidean);
    let sol = solve_path(&g, 0, None, None).unwrap();
    assert_eq!(sol.path, Vec::<usize>::new());
    assert_eq!(sol.total_distance, 0.0);
}

#[test]
fn boundary_n_one() {
    let g = Graph::build(&[Point::new(5.0, 5.0)], Metric::Euclidean);
    let sol = solve_path(&g, 0, None, None).unwrap();
    assert_eq!(sol.path, vec![0]);
    assert_eq!(sol.total_distance, 0.0);
}

#[test]
fn boundary_n_two_depot_and_dump_only() {
    let points = [Point::new(0.0, 0.0), Point::new(3.0, 4.0)];
    let g = Graph::build(&points, Metric::Euclidean);
    let sol = solve_path(&g, 1, None, None).unwrap();
    assert_eq!(sol.path, vec![0, 1]);
    assert!((sol.total_distance - 5.0).abs() < 1e-12);
}

#[test]
fn boundary_n_twenty_one_falls_back() {
    let points: Vec<Point> = (0..21).map(|i| Point::new(i as f64, 0.0)).collect();
    let g = Graph::build(&points, Metric::Euclidean);
    let dump = g.dump();
    let sol = solve_path(&g, dump, None, None).unwrap();
    assert_eq!(sol.path, vec![0, dump]);
}

#[test]
fn exact_beats_or_matches_greedy_when_capacity_is_unconstrained() {
    let points = [
        Point::new(0.0, 0.0),
        Point::new(4.0, 1.0),
        Point::new(1.0, 6.0),
        Point::new(7.0, 7.0),
        Point::new(9.0, 2.0),
    ];
    let g = Graph::build(&points, Metric::Euclidean);
    let demands = vec![1, 2, 3];
    let total_demand: i64 = demands.iter().sum();

    let exact = solve_path(&g, 4, None, None).unwrap();
    let greedy = solve_path(&g, 4, Some(&demands), Some(total_demand)).unwrap();

    assert!(exact.total_distance <= greedy.total_distance + 1e-9);
}

#[test]
fn cvrp_with_no_capacity_matches_exact_path() {
    let points = [
        Point::new(0.0, 0.0),
        Point::new(4.0, 1.0),
        Point::new(1.0, 6.0),
        Point::new(7.0, 7.0),
        Point::new(9.0, 2.0),
    ];
    let g = Graph::build(&points, Metric::Euclidean);
    let demands = vec![1, 2, 3];

    let exact = solve_path(&g, 4, None, None).unwrap();
    let cvrp = solve_cvrp(&g, &demands, waste_route_solver::demand::NO_CAPACITY, 4).unwrap();

    assert_eq!(cvrp.num_routes(), 1);
    assert_eq!(cvrp.routes[0].path, exact.path);
    assert!((cvrp.total_distance - exact.total_distance).abs() < 1e-9);
}
