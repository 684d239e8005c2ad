// World module
//
// Tile definitions, the grid that owns them, and the generator that fills it.

pub mod generator;
pub mod grid;
pub mod tile;

pub use generator::TerrainGenerator;
pub use grid::{MineOutcome, WorldGrid};
pub use tile::{Tile, TileKind};

use crate::config::WorldConfig;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Generates the world described by `config` from a fixed seed
pub fn generate_world(config: &WorldConfig, seed: u64) -> WorldGrid {
    let mut rng = StdRng::seed_from_u64(seed);
    TerrainGenerator::new(&config.generation).generate(
        config.width,
        config.height,
        config.tile_size,
        &mut rng,
    )
}
