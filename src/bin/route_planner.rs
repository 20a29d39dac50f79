//! # route-planner CLI
//!
//! Plans the shortest road trip between two cities that passes through the
//! cities of a list of attractions.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::{error, info};

use waypoint_routing::graph::WeightedGraph;
use waypoint_routing::io::{load_roads_from_path, AttractionIndex};
use waypoint_routing::{PlannerConfig, RoutePlanner};

/// Command-line interface for route-planner
#[derive(Parser)]
#[command(name = "route-planner")]
#[command(about = "Shortest road route between two cities through a set of attractions")]
#[command(long_about = "Plans the minimum-distance route from a start city to a destination,
visiting the city of every requested attraction on the way:
  route-planner --roads roads.csv --attractions attractions.csv \\
      --from \"New York NY\" --to \"Miami FL\" --visit \"Liberty Bell, Hollywood Sign\"

Cities and attractions left out on the command line are asked for on stdin.")]
#[command(version)]
struct Cli {
    /// Road network CSV (`cityA,cityB,distance` with a header row)
    #[arg(long, default_value = "roads.csv")]
    roads: PathBuf,

    /// Attraction lookup CSV (`attraction,city` with a header row)
    #[arg(long, default_value = "attractions.csv")]
    attractions: PathBuf,

    /// Starting city, e.g. "New York NY"
    #[arg(long)]
    from: Option<String>,

    /// Destination city, e.g. "Miami FL"
    #[arg(long)]
    to: Option<String>,

    /// Comma-separated attractions to visit, e.g. "Hollywood Sign, Liberty Bell"
    #[arg(long)]
    visit: Option<String>,

    /// Maximum number of distinct waypoint cities
    #[arg(long, default_value_t = PlannerConfig::default().max_waypoints)]
    max_waypoints: usize,

    /// Compute the key-point matrix in parallel (needs the `parallel` feature)
    #[arg(long)]
    parallel: bool,

    /// Print the route as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    if let Err(e) = run() {
        error!("{e:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Stderr)
        .init();

    let index = AttractionIndex::from_path(&cli.attractions)
        .with_context(|| format!("failed to load attractions file {}", cli.attractions.display()))?;
    let graph = load_roads_from_path(&cli.roads)
        .with_context(|| format!("failed to load roads file {}", cli.roads.display()))?;

    let start = value_or_prompt(cli.from, "Enter starting city (format: City ST, e.g., New York NY): ")?;
    let end = value_or_prompt(cli.to, "Enter destination city (format: City ST, e.g., Miami FL): ")?;
    check_city(&graph, &start, "Starting")?;
    check_city(&graph, &end, "Destination")?;

    let visit = value_or_prompt(
        cli.visit,
        "Enter attractions (comma-separated, e.g., Hollywood Sign, Liberty Bell): ",
    )?;
    let attractions = split_attractions(&visit);

    let config = PlannerConfig {
        max_waypoints: cli.max_waypoints,
        parallel_matrix: cli.parallel,
    };
    let planner = RoutePlanner::with_config(&graph, config);

    match planner.plan_with_attractions(&start, &end, &attractions, &index) {
        Ok(route) if cli.json => {
            println!("{}", serde_json::to_string_pretty(&route)?);
        }
        Ok(route) => {
            println!("\n===== Optimal Route =====");
            println!("Start: {start}");
            println!("Destination: {end}");
            println!("Attractions: {attractions:?}");
            println!("Path: {}", route.cities().join(" -> "));
            println!("Total Distance: {:.1} miles", route.total_distance());
        }
        Err(e) if e.is_not_found() => {
            info!("planning failed: {e}");
            println!("No valid route found!");
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}

fn check_city(graph: &WeightedGraph, city: &str, role: &str) -> Result<()> {
    if !graph.has_city(city) {
        bail!("{role} city {city:?} does not exist in the road network");
    }
    Ok(())
}

fn split_attractions(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn value_or_prompt(value: Option<String>, prompt: &str) -> Result<String> {
    if let Some(v) = value {
        return Ok(v.trim().to_string());
    }
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    Ok(line.trim().to_string())
}
