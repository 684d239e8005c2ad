use super::tile::{Tile, TileKind};
use crate::ore::OreType;
use crate::pickaxe::HARDNESS_THRESHOLD;
use tracing::debug;

/// What happened when a tile was mined
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MineOutcome {
    /// The tile was broken and replaced with air
    Mined {
        kind: TileKind,
        ore: Option<OreType>,
    },
    /// The target was already air
    NothingThere,
    /// Bedrock, or a coordinate outside the grid
    Unbreakable,
    /// The pickaxe is below the tile's hardness threshold
    TooWeak { required: f32, power: f32 },
}

impl MineOutcome {
    /// The ore dropped by this action, if any
    pub fn ore(&self) -> Option<OreType> {
        match self {
            MineOutcome::Mined { ore, .. } => *ore,
            _ => None,
        }
    }

    pub fn is_mined(&self) -> bool {
        matches!(self, MineOutcome::Mined { .. })
    }
}

/// World grid that stores tile data
///
/// Anything outside the grid reads as bedrock: solid and unbreakable.
#[derive(Debug, Clone)]
pub struct WorldGrid {
    tiles: Vec<Vec<Tile>>,
    pub width: usize,
    pub height: usize,
    /// Edge length of one tile in world pixels
    pub tile_size: f32,
}

impl WorldGrid {
    pub fn new(width: usize, height: usize, tile_size: f32, fill: TileKind) -> Self {
        let tiles = vec![vec![Tile::of(fill); width]; height];
        Self {
            tiles,
            width,
            height,
            tile_size,
        }
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    pub fn get_tile(&self, x: i32, y: i32) -> Option<&Tile> {
        if !self.in_bounds(x, y) {
            return None;
        }
        Some(&self.tiles[y as usize][x as usize])
    }

    /// Kind of the tile at (x, y); bedrock outside the grid
    pub fn tile_kind(&self, x: i32, y: i32) -> TileKind {
        self.get_tile(x, y).map_or(TileKind::Bedrock, |tile| tile.kind)
    }

    /// Whether (x, y) blocks movement; always true outside the grid
    pub fn is_solid(&self, x: i32, y: i32) -> bool {
        self.get_tile(x, y).is_none_or(|tile| tile.solid)
    }

    pub fn set_tile(&mut self, x: i32, y: i32, kind: TileKind) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        self.tiles[y as usize][x as usize] = Tile::of(kind);
        true
    }

    /// Breaks the tile at (x, y) with a pickaxe of the given power
    ///
    /// Air, bedrock and out-of-bounds targets are never modified, and neither
    /// is a tile the pickaxe is too weak for.
    pub fn mine_tile(&mut self, x: i32, y: i32, power: f32) -> MineOutcome {
        let Some(tile) = self.get_tile(x, y).copied() else {
            return MineOutcome::Unbreakable;
        };

        match tile.kind {
            TileKind::Air => return MineOutcome::NothingThere,
            TileKind::Bedrock => return MineOutcome::Unbreakable,
            _ => {}
        }

        let required = tile.hardness * HARDNESS_THRESHOLD;
        if power < required {
            debug!(x, y, ?tile.kind, power, required, "pickaxe too weak");
            return MineOutcome::TooWeak { required, power };
        }

        self.set_tile(x, y, TileKind::Air);
        let ore = tile.kind.ore();
        debug!(x, y, ?tile.kind, ?ore, "tile mined");

        MineOutcome::Mined { kind: tile.kind, ore }
    }

    /// Tile coordinates containing the world-space point
    pub fn world_to_tile(&self, world_x: f32, world_y: f32) -> (i32, i32) {
        (
            (world_x / self.tile_size).floor() as i32,
            (world_y / self.tile_size).floor() as i32,
        )
    }

    /// World-space position of a tile's top-left corner
    pub fn tile_to_world(&self, x: i32, y: i32) -> (f32, f32) {
        (x as f32 * self.tile_size, y as f32 * self.tile_size)
    }

    /// World-space centre of a tile
    pub fn tile_center(&self, x: i32, y: i32) -> (f32, f32) {
        let (left, top) = self.tile_to_world(x, y);
        let half = self.tile_size / 2.0;
        (left + half, top + half)
    }

    /// Size of the whole grid in world pixels
    pub fn pixel_size(&self) -> (f32, f32) {
        (self.width as f32 * self.tile_size, self.height as f32 * self.tile_size)
    }

    /// Number of tiles of a kind
    pub fn count_kind(&self, kind: TileKind) -> usize {
        self.tiles
            .iter()
            .flatten()
            .filter(|tile| tile.kind == kind)
            .count()
    }

    /// Every tile with its coordinates, row by row
    pub fn iter_tiles(&self) -> impl Iterator<Item = (usize, usize, &Tile)> {
        self.tiles
            .iter()
            .enumerate()
            .flat_map(|(y, row)| row.iter().enumerate().map(move |(x, tile)| (x, y, tile)))
    }

    /// One string per row using [`TileKind::symbol`]
    pub fn ascii_rows(&self) -> Vec<String> {
        self.tiles
            .iter()
            .map(|row| row.iter().map(|tile| tile.kind.symbol()).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_grid() -> WorldGrid {
        let mut grid = WorldGrid::new(4, 4, 32.0, TileKind::Stone);
        for x in 0..4 {
            grid.set_tile(x, 3, TileKind::Bedrock);
            grid.set_tile(x, 0, TileKind::Air);
        }
        grid.set_tile(1, 1, TileKind::OreCopper);
        grid.set_tile(2, 1, TileKind::OreDiamond);
        grid.set_tile(3, 2, TileKind::Dirt);
        grid
    }

    #[test]
    fn test_out_of_bounds_is_bedrock() {
        let grid = small_grid();
        assert_eq!(grid.tile_kind(-1, 0), TileKind::Bedrock);
        assert_eq!(grid.tile_kind(0, 4), TileKind::Bedrock);
        assert!(grid.is_solid(4, 0));
        assert!(grid.get_tile(0, -1).is_none());
        assert!(!grid.is_solid(0, 0));
    }

    #[test]
    fn test_mine_ore_drops_ore_and_leaves_air() {
        let mut grid = small_grid();
        let outcome = grid.mine_tile(1, 1, 1.0);

        assert_eq!(outcome.ore(), Some(OreType::Copper));
        assert_eq!(grid.tile_kind(1, 1), TileKind::Air);
    }

    #[test]
    fn test_mine_stone_and_dirt_drop_nothing() {
        let mut grid = small_grid();
        assert_eq!(
            grid.mine_tile(0, 1, 1.0),
            MineOutcome::Mined { kind: TileKind::Stone, ore: None }
        );
        assert_eq!(
            grid.mine_tile(3, 2, 1.0),
            MineOutcome::Mined { kind: TileKind::Dirt, ore: None }
        );
    }

    #[test]
    fn test_mining_air_twice_changes_nothing() {
        let mut grid = small_grid();
        assert!(grid.mine_tile(0, 1, 1.0).is_mined());
        let snapshot = grid.ascii_rows();

        assert_eq!(grid.mine_tile(0, 1, 1.0), MineOutcome::NothingThere);
        assert_eq!(grid.mine_tile(0, 1, 1.0), MineOutcome::NothingThere);
        assert_eq!(grid.ascii_rows(), snapshot);
    }

    #[test]
    fn test_bedrock_and_out_of_bounds_are_unbreakable() {
        let mut grid = small_grid();
        assert_eq!(grid.mine_tile(2, 3, 1000.0), MineOutcome::Unbreakable);
        assert_eq!(grid.tile_kind(2, 3), TileKind::Bedrock);
        assert_eq!(grid.mine_tile(-5, 2, 1000.0), MineOutcome::Unbreakable);
    }

    #[test]
    fn test_weak_pickaxe_is_rejected() {
        let mut grid = small_grid();
        // Diamond ore hardness 3.0 needs power 1.5
        let outcome = grid.mine_tile(2, 1, 1.0);
        assert_eq!(outcome, MineOutcome::TooWeak { required: 1.5, power: 1.0 });
        assert_eq!(grid.tile_kind(2, 1), TileKind::OreDiamond);

        assert_eq!(grid.mine_tile(2, 1, 2.0).ore(), Some(OreType::Diamond));
    }

    #[test]
    fn test_coordinate_conversion() {
        let grid = small_grid();
        assert_eq!(grid.world_to_tile(0.0, 0.0), (0, 0));
        assert_eq!(grid.world_to_tile(63.9, 32.0), (1, 1));
        assert_eq!(grid.world_to_tile(-1.0, 10.0), (-1, 0));
        assert_eq!(grid.tile_to_world(2, 3), (64.0, 96.0));
        assert_eq!(grid.tile_center(0, 0), (16.0, 16.0));
    }

    #[test]
    fn test_counts_and_ascii() {
        let grid = small_grid();
        assert_eq!(grid.count_kind(TileKind::Bedrock), 4);
        assert_eq!(grid.count_kind(TileKind::Air), 4);
        assert_eq!(grid.iter_tiles().count(), 16);
        assert_eq!(grid.ascii_rows()[1], "#cD#");
    }
}
