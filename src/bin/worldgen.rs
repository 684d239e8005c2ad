//! Prints a generated world as text
//!
//! Usage:
//!   cargo run --bin worldgen -- --seed 42
//!   cargo run --bin worldgen -- --config my_world.json --counts-only
//!
//! Legend: ' ' air, '.' dirt, '#' stone, '=' bedrock,
//! 'c' copper, 'i' iron, 'g' gold, 'D' diamond.

use clap::Parser;
use ore_miner::config::GameConfig;
use ore_miner::world::{self, TileKind};
use std::path::PathBuf;
use tracing_subscriber::filter::EnvFilter;

#[derive(Parser)]
#[command(name = "worldgen")]
#[command(about = "Generate an ore-miner world and print it as ASCII")]
struct Args {
    /// World seed (overrides the config file; random when absent)
    #[arg(long)]
    seed: Option<u64>,

    /// Path to a JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Only print the per-kind tile counts
    #[arg(long)]
    counts_only: bool,
}

const KINDS: [TileKind; 8] = [
    TileKind::Air,
    TileKind::Dirt,
    TileKind::Stone,
    TileKind::Bedrock,
    TileKind::OreCopper,
    TileKind::OreIron,
    TileKind::OreGold,
    TileKind::OreDiamond,
];

fn main() -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = GameConfig::load(args.config.as_deref())?;
    let seed = config.world.resolve_seed(args.seed);
    let grid = world::generate_world(&config.world, seed);

    println!("Seed: {}", seed);
    println!("Size: {}x{} tiles", grid.width, grid.height);

    if !args.counts_only {
        println!();
        for row in grid.ascii_rows() {
            println!("{}", row);
        }
    }

    println!();
    for kind in KINDS {
        println!("{:<12} {:>6}", format!("{:?}:", kind), grid.count_kind(kind));
    }

    Ok(())
}
