//! Waste Route Solver - Command Line Interface
//!
//! A thin demo harness over the three solvers: exact, capacity greedy,
//! and CVRP sweep.

use clap::{Parser, Subcommand, ValueEnum};
use waste_route_solver::demand::NO_CAPACITY;
use waste_route_solver::fixtures::random_instance;
use waste_route_solver::graph::{Graph, Metric as GraphMetric, Point};
use waste_route_solver::solvers::cvrp::solve_cvrp;
use waste_route_solver::solvers::solve_path;

use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "route-cli")]
#[command(author = "M2 AI2D Student")]
#[command(version = "1.0")]
#[command(about = "Exact and heuristic vehicle routing for a depot/house/dump instance")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a single-vehicle path (exact or capacity-greedy)
    Solve {
        #[arg(short, long)]
        instance: PathBuf,

        #[arg(short, long, value_enum, default_value = "exact")]
        mode: SolveMode,

        /// Vehicle capacity; ignored in exact mode
        #[arg(short, long)]
        capacity: Option<i64>,

        #[arg(short, long)]
        verbose: bool,
    },

    /// Solve with the CVRP sweep (multi-route)
    Cvrp {
        #[arg(short, long)]
        instance: PathBuf,

        #[arg(short, long)]
        capacity: i64,

        #[arg(short, long)]
        verbose: bool,
    },

    /// Generate a synthetic instance and solve it
    Demo {
        #[arg(long, default_value = "10")]
        houses: usize,

        #[arg(long, default_value = "100.0")]
        extent: f64,

        #[arg(long, default_value = "1")]
        min_demand: i64,

        #[arg(long, default_value = "10")]
        max_demand: i64,

        #[arg(long, value_enum, default_value = "euclidean")]
        metric: CliMetric,

        #[arg(long, default_value = "10")]
        capacity: i64,

        #[arg(long, default_value = "42")]
        seed: u64,

        #[arg(short, long, value_enum, default_value = "cvrp")]
        mode: DemoMode,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
enum SolveMode {
    Exact,
    Capacity,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
enum CliMetric {
    Euclidean,
    Grid,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
enum DemoMode {
    Path,
    Cvrp,
}

impl From<CliMetric> for GraphMetric {
    fn from(m: CliMetric) -> Self {
        match m {
            CliMetric::Euclidean => GraphMetric::Euclidean,
            CliMetric::Grid => GraphMetric::Grid,
        }
    }
}

/// An instance file is newline-separated: capacity, then `x y demand`
/// per line, depot first and dump last (demand ignored for the first
/// and final lines).
fn load_instance(path: &PathBuf) -> (Graph, Vec<i64>) {
    let contents = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("error reading {:?}: {}", path, e);
        std::process::exit(1);
    });

    let mut lines = contents.lines();
    let _capacity_hint = lines.next();

    let mut points = Vec::new();
    let mut demands = Vec::new();
    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split_whitespace().collect();
        let x: f64 = fields[0].parse().expect("bad x coordinate");
        let y: f64 = fields[1].parse().expect("bad y coordinate");
        let q: i64 = fields.get(2).map(|s| s.parse().unwrap_or(0)).unwrap_or(0);
        points.push(Point::new(x, y));
        demands.push(q);
    }

    let graph = Graph::build(&points, GraphMetric::Euclidean);
    // first and last demand entries belong to depot/dump, not houses
    let house_demands = demands[1..demands.len() - 1].to_vec();
    (graph, house_demands)
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            instance,
            mode,
            capacity,
            verbose,
        } => solve_command(&instance, mode, capacity, verbose),
        Commands::Cvrp {
            instance,
            capacity,
            verbose,
        } => cvrp_command(&instance, capacity, verbose),
        Commands::Demo {
            houses,
            extent,
            min_demand,
            max_demand,
            metric,
            capacity,
            seed,
            mode,
        } => demo_command(houses, extent, min_demand, max_demand, metric, capacity, seed, mode),
    }
}

fn solve_command(path: &PathBuf, mode: SolveMode, capacity: Option<i64>, verbose: bool) {
    println!("Loading instance from {:?}...", path);
    let (graph, demands) = load_instance(path);
    let dump = graph.dump();

    let start = Instant::now();
    let result = match mode {
        SolveMode::Exact => solve_path(&graph, dump, None, None),
        SolveMode::Capacity => solve_path(&graph, dump, Some(&demands), capacity),
    };
    let elapsed = start.elapsed();

    match result {
        Ok(solution) => {
            println!("\n========== Results ==========");
            println!("Mode: {:?}", mode);
            println!("Path length: {}", solution.path.len());
            println!("Total distance: {:.4}", solution.total_distance);
            println!("Time: {:.4}s", elapsed.as_secs_f64());
            if verbose {
                println!("Path: {:?}", solution.path);
            }
        }
        Err(e) => {
            eprintln!("Solver error: {}", e);
            std::process::exit(1);
        }
    }
}

fn cvrp_command(path: &PathBuf, capacity: i64, verbose: bool) {
    println!("Loading instance from {:?}...", path);
    let (graph, demands) = load_instance(path);
    let dump = graph.dump();

    let start = Instant::now();
    match solve_cvrp(&graph, &demands, capacity, dump) {
        Ok(solution) => {
            let elapsed = start.elapsed();
            println!("\n========== Results ==========");
            println!("Routes: {}", solution.num_routes());
            println!("Total distance: {:.4}", solution.total_distance);
            println!("Time: {:.4}s", elapsed.as_secs_f64());
            if verbose {
                for (i, route) in solution.routes.iter().enumerate() {
                    println!(
                        "  route {}: {:?} (qty {}, dist {:.4})",
                        i, route.path, route.total_quantity, route.distance
                    );
                }
            }
        }
        Err(e) => {
            eprintln!("Solver error: {}", e);
            std::process::exit(1);
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn demo_command(
    houses: usize,
    extent: f64,
    min_demand: i64,
    max_demand: i64,
    metric: CliMetric,
    capacity: i64,
    seed: u64,
    mode: DemoMode,
) {
    println!("Generating synthetic instance: {} houses, seed {}", houses, seed);
    let instance = random_instance(seed, houses, extent, min_demand, max_demand, metric.into());
    let dump = instance.graph.dump();

    match mode {
        DemoMode::Path => {
            let capacity = if capacity <= 0 { None } else { Some(capacity) };
            let demands = if capacity.is_some() { Some(instance.demands.as_slice()) } else { None };
            let solution = solve_path(&instance.graph, dump, demands, capacity).unwrap_or_else(|e| {
                eprintln!("Solver error: {}", e);
                std::process::exit(1);
            });
            println!("Path length: {}", solution.path.len());
            println!("Total distance: {:.4}", solution.total_distance);
        }
        DemoMode::Cvrp => {
            let capacity = if capacity <= 0 { NO_CAPACITY } else { capacity };
            let solution = solve_cvrp(&instance.graph, &instance.demands, capacity, dump)
                .unwrap_or_else(|e| {
                    eprintln!("Solver error: {}", e);
                    std::process::exit(1);
                });
            println!("Routes: {}", solution.num_routes());
            println!("Total distance: {:.4}", solution.total_distance);
        }
    }
}
