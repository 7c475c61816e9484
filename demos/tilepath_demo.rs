//! Generates a random world, finds a random trip across it with every
//! strategy pairing, and replays a few pointer clicks.
//!
//! Usage: `tilepath-demo [CONFIG.json] [SEED]`. Set `RUST_LOG=debug` to see
//! search statistics.

use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tilepath_demos::{PAIRINGS, pairing_config, render_ascii};
use tilepath_paths::{SearchConfig, find_path};
use tilepath_world::{ClickRouter, TileMetrics, WorldConfig, generate, random_trip};

const MAX_ATTEMPTS: usize = 1000;
const CLICKS: usize = 3;

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut config_path: Option<PathBuf> = None;
    let mut seed = 42u64;
    for arg in std::env::args().skip(1) {
        match arg.parse::<u64>() {
            Ok(s) => seed = s,
            Err(_) => config_path = Some(PathBuf::from(arg)),
        }
    }

    let config = match &config_path {
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            serde_json::from_str::<WorldConfig>(&text)?
        }
        None => WorldConfig::default(),
    };
    log::info!("world config: {config:?}, seed {seed}");

    let mut rng = StdRng::seed_from_u64(seed);
    let grid = generate(&config, &mut rng)?;

    let Some(trip) = random_trip(&grid, &mut rng, &SearchConfig::cardinal(), MAX_ATTEMPTS)?
    else {
        println!("no reachable pair of tiles found");
        return Ok(());
    };
    println!("trip {} -> {}", trip.start, trip.goal);

    for (label, heuristic, diagonals) in PAIRINGS {
        let route = find_path(
            &grid,
            trip.start,
            trip.goal,
            &pairing_config(heuristic, diagonals),
        )?;
        println!(
            "\n{label}: {} tiles, cost {:.2}, {} expanded",
            route.len(),
            route.cost,
            route.expanded
        );
        print!("{}", render_ascii(&grid, &route));
    }

    let metrics = TileMetrics::from_config(&config)?;
    let (w_px, h_px) = metrics.world_size_px(&grid);
    let mut router = ClickRouter::new(metrics, SearchConfig::cardinal(), trip.goal);
    for _ in 0..CLICKS {
        let px = rng.random_range(0.0..w_px as f64);
        let py = rng.random_range(0.0..h_px as f64);
        let from = router.current();
        match router.click(&grid, px, py)? {
            Some(route) if route.is_empty() => {
                println!("\nclick ({px:.0}, {py:.0}) from {from}: unreachable");
            }
            Some(route) => {
                println!(
                    "\nclick ({px:.0}, {py:.0}) from {from}: {} tiles",
                    route.len()
                );
                print!("{}", render_ascii(&grid, &route));
            }
            None => println!("\nclick ({px:.0}, {py:.0}) is off the map"),
        }
    }
    Ok(())
}
