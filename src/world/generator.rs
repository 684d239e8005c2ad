// Procedural terrain generation
//
// Three passes over a fresh grid:
// 1. layering (sky, dirt, stone, bedrock)
// 2. random-walk caves carved through the stone band
// 3. ore placement, weighted by depth, with occasional veins
//
// The random source is always passed in so a seed fully determines the world.

use super::grid::WorldGrid;
use super::tile::TileKind;
use crate::config::GenerationConfig;
use crate::ore::OreType;
use rand::Rng;
use tracing::info;

/// Rows kept between a cave's start and the bottom of the stone band
const CAVE_START_MARGIN: usize = 5;

const NEIGHBOURS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

const CARDINALS: [(i32, i32); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

pub struct TerrainGenerator<'a> {
    config: &'a GenerationConfig,
}

impl<'a> TerrainGenerator<'a> {
    pub fn new(config: &'a GenerationConfig) -> Self {
        TerrainGenerator { config }
    }

    /// Builds a complete world
    ///
    /// Expects dimensions that passed [`crate::config::GameConfig::validate`].
    pub fn generate<R: Rng + ?Sized>(
        &self,
        width: usize,
        height: usize,
        tile_size: f32,
        rng: &mut R,
    ) -> WorldGrid {
        let mut grid = WorldGrid::new(width, height, tile_size, TileKind::Air);

        self.fill_layers(&mut grid, rng);
        let caves = self.carve_caves(&mut grid, rng);
        self.place_ores(&mut grid, rng);

        info!(
            width,
            height,
            caves,
            air = grid.count_kind(TileKind::Air),
            copper = grid.count_kind(TileKind::OreCopper),
            iron = grid.count_kind(TileKind::OreIron),
            gold = grid.count_kind(TileKind::OreGold),
            diamond = grid.count_kind(TileKind::OreDiamond),
            "world generated"
        );

        grid
    }

    fn fill_layers<R: Rng + ?Sized>(&self, grid: &mut WorldGrid, rng: &mut R) {
        let c = self.config;
        let bedrock_start = grid.height.saturating_sub(c.bedrock_rows);

        for y in 0..grid.height {
            for x in 0..grid.width {
                let kind = if y < c.surface_rows {
                    if y + 1 == c.surface_rows && rng.gen_bool(probability(c.surface_dirt_chance)) {
                        TileKind::Dirt
                    } else {
                        TileKind::Air
                    }
                } else if y < c.dirt_rows_end {
                    if rng.gen_bool(probability(c.shallow_dirt_chance)) {
                        TileKind::Dirt
                    } else {
                        TileKind::Stone
                    }
                } else if y < bedrock_start {
                    TileKind::Stone
                } else {
                    TileKind::Bedrock
                };
                grid.set_tile(x as i32, y as i32, kind);
            }
        }
    }

    /// Returns the number of caves carved
    fn carve_caves<R: Rng + ?Sized>(&self, grid: &mut WorldGrid, rng: &mut R) -> u32 {
        let c = self.config;
        let top = c.dirt_rows_end as i32;
        let bottom = grid.height as i32 - c.bedrock_rows as i32 - 1;
        let start_limit = grid.height as i32 - c.bedrock_rows as i32 - CAVE_START_MARGIN as i32;
        let right = grid.width as i32 - 2;

        if start_limit <= top || right < 1 {
            return 0;
        }

        let count = rng.gen_range(c.cave_count_min..=c.cave_count_max);
        for _ in 0..count {
            let mut x = rng.gen_range(0..grid.width as i32);
            let mut y = rng.gen_range(top..start_limit);
            let length = rng.gen_range(c.cave_length_min..=c.cave_length_max);

            for _ in 0..length {
                let radius = rng.gen_range(1..=c.cave_radius_max.max(1));
                for dy in -radius..=radius {
                    for dx in -radius..=radius {
                        let (tx, ty) = (x + dx, y + dy);
                        if !grid.in_bounds(tx, ty) || grid.tile_kind(tx, ty) == TileKind::Bedrock {
                            continue;
                        }
                        if rng.gen_bool(probability(c.cave_clear_chance)) {
                            grid.set_tile(tx, ty, TileKind::Air);
                        }
                    }
                }

                let (step_x, step_y) = CARDINALS[rng.gen_range(0..CARDINALS.len())];
                x = (x + step_x).clamp(1, right);
                y = (y + step_y).clamp(top, bottom);
            }
        }

        count
    }

    fn place_ores<R: Rng + ?Sized>(&self, grid: &mut WorldGrid, rng: &mut R) {
        for ore in OreType::ALL {
            let Some(rows) = self.ore_band(ore, grid.height) else {
                continue;
            };
            let kind = TileKind::from_ore(ore);

            for y in rows {
                let chance = self.placement_chance(ore, y);
                for x in 0..grid.width {
                    let (x, y) = (x as i32, y as i32);
                    if grid.tile_kind(x, y) != TileKind::Stone || !rng.gen_bool(chance) {
                        continue;
                    }

                    grid.set_tile(x, y, kind);
                    if rng.gen_bool(probability(self.config.vein_chance)) {
                        self.grow_vein(grid, x, y, kind, rng);
                    }
                }
            }
        }
    }

    fn grow_vein<R: Rng + ?Sized>(
        &self,
        grid: &mut WorldGrid,
        x: i32,
        y: i32,
        kind: TileKind,
        rng: &mut R,
    ) {
        for (dx, dy) in NEIGHBOURS {
            let (nx, ny) = (x + dx, y + dy);
            if grid.tile_kind(nx, ny) == TileKind::Stone
                && rng.gen_bool(probability(self.config.vein_spread_chance))
            {
                grid.set_tile(nx, ny, kind);
            }
        }
    }

    /// Rows an ore may be placed in, `None` when the world is too shallow for it
    pub fn ore_band(&self, ore: OreType, height: usize) -> Option<std::ops::RangeInclusive<usize>> {
        let deepest = height.checked_sub(self.config.ore_floor_margin)?;
        let shallowest = ore.min_depth();
        (shallowest <= deepest).then_some(shallowest..=deepest)
    }

    /// Per-tile conversion chance for stone in row `y`, growing with depth
    pub fn placement_chance(&self, ore: OreType, y: usize) -> f64 {
        let below = y.saturating_sub(ore.min_depth()) as f64;
        probability(ore.rarity() * (1.0 + below * self.config.depth_bonus_per_row))
    }
}

/// Clamps into the range `gen_bool` accepts
fn probability(p: f64) -> f64 {
    if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn generate(seed: u64) -> WorldGrid {
        let config = GenerationConfig::default();
        let mut rng = StdRng::seed_from_u64(seed);
        TerrainGenerator::new(&config).generate(100, 50, 32.0, &mut rng)
    }

    #[test]
    fn test_same_seed_same_world() {
        assert_eq!(generate(42).ascii_rows(), generate(42).ascii_rows());
        assert_ne!(generate(1).ascii_rows(), generate(2).ascii_rows());
    }

    #[test]
    fn test_bottom_rows_are_bedrock() {
        let grid = generate(7);
        for y in 48..50 {
            for x in 0..100 {
                assert_eq!(grid.tile_kind(x, y), TileKind::Bedrock);
            }
        }
        assert_eq!(grid.count_kind(TileKind::Bedrock), 200);
    }

    #[test]
    fn test_sky_rows() {
        let grid = generate(3);
        for y in 0..2 {
            for x in 0..100 {
                assert_eq!(grid.tile_kind(x, y), TileKind::Air);
            }
        }
        for x in 0..100 {
            let kind = grid.tile_kind(x, 2);
            assert!(kind == TileKind::Air || kind == TileKind::Dirt);
        }
    }

    #[test]
    fn test_ores_respect_depth_bands() {
        for seed in 0..5 {
            let grid = generate(seed);
            for (_, y, tile) in grid.iter_tiles() {
                if let Some(ore) = tile.kind.ore() {
                    // Veins may spill one row above the band
                    assert!(y + 1 >= ore.min_depth(), "{} at row {}", ore, y);
                    assert!(y <= 46, "{} at row {}", ore, y);
                }
            }
        }
    }

    #[test]
    fn test_caves_open_the_stone_band() {
        let grid = generate(11);
        let underground_air = grid
            .iter_tiles()
            .filter(|(_, y, tile)| *y >= 8 && tile.kind == TileKind::Air)
            .count();
        assert!(underground_air > 0);
    }

    #[test]
    fn test_placement_chance_grows_and_caps() {
        let config = GenerationConfig::default();
        let generator = TerrainGenerator::new(&config);

        let shallow = generator.placement_chance(OreType::Copper, 5);
        let deep = generator.placement_chance(OreType::Copper, 25);
        assert!((shallow - 0.15).abs() < 1e-9);
        assert!((deep - 0.3).abs() < 1e-9);

        let mut greedy = GenerationConfig::default();
        greedy.depth_bonus_per_row = 100.0;
        assert_eq!(TerrainGenerator::new(&greedy).placement_chance(OreType::Copper, 40), 1.0);
    }

    #[test]
    fn test_ore_band_limits() {
        let config = GenerationConfig::default();
        let generator = TerrainGenerator::new(&config);
        assert_eq!(generator.ore_band(OreType::Gold, 50), Some(15..=45));
        assert_eq!(generator.ore_band(OreType::Diamond, 20), None);
        assert_eq!(generator.ore_band(OreType::Copper, 3), None);
    }
}
