use crate::collision::{self, Aabb, Collidable};
use crate::config::PlayerConfig;
use crate::input::MoveInput;
use crate::inventory::Inventory;
use crate::ore::OreAmount;
use crate::pickaxe::{self, MIN_MINING_TIME, Pickaxe};
use crate::world::{MineOutcome, TileKind, WorldGrid};
use tracing::debug;

/// Which way the player is looking; decides the mining target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Tile offset one step in this direction
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }

    /// Direction for a movement axis; horizontal wins on diagonals
    pub fn from_axis(x: f32, y: f32) -> Option<Direction> {
        if x > 0.0 {
            Some(Direction::East)
        } else if x < 0.0 {
            Some(Direction::West)
        } else if y > 0.0 {
            Some(Direction::South)
        } else if y < 0.0 {
            Some(Direction::North)
        } else {
            None
        }
    }
}

/// Mining stats the shop can improve
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MiningStats {
    /// Seconds per action on hardness 1 with power 1, before pickaxe speed
    pub base_mine_time: f32,
    /// Reach in pixels
    pub range: f32,
    pub ore_multiplier: f32,
}

impl MiningStats {
    pub fn from_config(config: &PlayerConfig) -> Self {
        MiningStats {
            base_mine_time: config.base_mine_time,
            range: config.mining_range,
            ore_multiplier: 1.0,
        }
    }

    /// How many tiles past the player's own tile can be reached
    pub fn reach_tiles(&self, tile_size: f32) -> i32 {
        ((self.range / tile_size).floor() as i32).max(1)
    }

    /// Ore collected per mined ore tile
    pub fn ore_yield(&self) -> u32 {
        (self.ore_multiplier.floor() as u32).max(1)
    }
}

impl Default for MiningStats {
    fn default() -> Self {
        MiningStats::from_config(&PlayerConfig::default())
    }
}

/// What a mining action did
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MiningReport {
    pub target: (i32, i32),
    pub outcome: MineOutcome,
    /// Ore added to the inventory
    pub collected: Option<OreAmount>,
}

pub struct Player {
    /// Top-left corner in world pixels
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub speed: f32,
    pub velocity_x: f32,
    pub velocity_y: f32,
    pub facing: Direction,
    pub pickaxe: Pickaxe,
    pub inventory: Inventory,
    pub stats: MiningStats,
    /// Seconds left before the next mining action is allowed
    pub cooldown: f32,
}

impl Player {
    pub fn new(x: f32, y: f32, config: &PlayerConfig) -> Self {
        Player {
            x,
            y,
            size: config.size,
            speed: config.speed,
            velocity_x: 0.0,
            velocity_y: 0.0,
            facing: Direction::South,
            pickaxe: Pickaxe::default(),
            inventory: Inventory::new(),
            stats: MiningStats::from_config(config),
            cooldown: 0.0,
        }
    }

    /// Creates a player centred on tile (tx, ty)
    pub fn spawn_at_tile(grid: &WorldGrid, tx: i32, ty: i32, config: &PlayerConfig) -> Self {
        let (cx, cy) = grid.tile_center(tx, ty);
        let half = config.size / 2.0;
        Player::new(cx - half, cy - half, config)
    }

    /// Moves for one frame and ticks the mining cooldown
    ///
    /// A move that would overlap a solid tile is dropped entirely. Facing still
    /// follows the input so the player can turn toward a wall and mine it.
    pub fn update(&mut self, delta_time: f32, input: MoveInput, grid: &WorldGrid) {
        self.cooldown = (self.cooldown - delta_time).max(0.0);

        let (mut dx, mut dy) = input.axis();
        if let Some(direction) = Direction::from_axis(dx, dy) {
            self.facing = direction;
        }

        // Normalize diagonal movement to maintain consistent speed
        if dx != 0.0 && dy != 0.0 {
            let diagonal_factor = std::f32::consts::FRAC_1_SQRT_2;
            dx *= diagonal_factor;
            dy *= diagonal_factor;
        }

        self.velocity_x = dx * self.speed;
        self.velocity_y = dy * self.speed;
        if self.velocity_x == 0.0 && self.velocity_y == 0.0 {
            return;
        }

        let new_x = self.x + self.velocity_x * delta_time;
        let new_y = self.y + self.velocity_y * delta_time;
        let candidate = self.bounds().at(new_x, new_y);

        if collision::overlaps_solid(&candidate, grid) {
            self.velocity_x = 0.0;
            self.velocity_y = 0.0;
        } else {
            self.x = new_x;
            self.y = new_y;
        }
    }

    /// Tile containing the player's centre
    pub fn tile_position(&self, grid: &WorldGrid) -> (i32, i32) {
        let (cx, cy) = self.bounds().center();
        grid.world_to_tile(cx, cy)
    }

    /// First non-air tile in the facing direction within reach
    ///
    /// Falls back to the adjacent tile when everything in reach is air.
    pub fn mine_target(&self, grid: &WorldGrid) -> (i32, i32) {
        let (tx, ty) = self.tile_position(grid);
        let (ox, oy) = self.facing.offset();
        let reach = self.stats.reach_tiles(grid.tile_size);

        (1..=reach)
            .map(|step| (tx + ox * step, ty + oy * step))
            .find(|&(x, y)| grid.tile_kind(x, y) != TileKind::Air)
            .unwrap_or((tx + ox, ty + oy))
    }

    pub fn can_mine(&self) -> bool {
        self.cooldown <= 0.0
    }

    /// Mines the current target, `None` while the cooldown is running
    pub fn try_mine(&mut self, grid: &mut WorldGrid) -> Option<MiningReport> {
        if !self.can_mine() {
            return None;
        }

        let target = self.mine_target(grid);
        let hardness = grid
            .get_tile(target.0, target.1)
            .map_or(f32::INFINITY, |tile| tile.hardness);
        let outcome = grid.mine_tile(target.0, target.1, self.pickaxe.power());

        let mut collected = None;
        if outcome.is_mined() {
            if let Some(ore) = outcome.ore() {
                let amount = OreAmount::new(ore, self.stats.ore_yield());
                self.inventory.add_ore(amount.ore, amount.quantity);
                collected = Some(amount);
            }

            let time = pickaxe::mining_time(
                self.pickaxe.power(),
                hardness,
                self.stats.base_mine_time,
            );
            self.cooldown = time / self.pickaxe.speed();
            debug!(?target, cooldown = self.cooldown, "mining cooldown started");
        }

        Some(MiningReport {
            target,
            outcome,
            collected,
        })
    }

    /// Lowers the base mining time, never below the global minimum
    pub fn improve_mining_speed(&mut self, seconds: f32) {
        self.stats.base_mine_time = (self.stats.base_mine_time - seconds).max(MIN_MINING_TIME);
    }

    pub fn extend_mining_range(&mut self, pixels: f32) {
        self.stats.range += pixels;
    }

    pub fn boost_ore_multiplier(&mut self, amount: f32) {
        self.stats.ore_multiplier += amount;
    }

    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    pub fn velocity(&self) -> (f32, f32) {
        (self.velocity_x, self.velocity_y)
    }
}

impl Collidable for Player {
    fn bounds(&self) -> Aabb {
        Aabb::new(self.x, self.y, self.size, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ore::OreType;
    use crate::pickaxe::PickaxeTier;

    /// 7x7 air room: stone floor on row 4, bedrock on row 6
    fn room() -> WorldGrid {
        let mut grid = WorldGrid::new(7, 7, 32.0, TileKind::Air);
        for x in 0..7 {
            grid.set_tile(x, 4, TileKind::Stone);
            grid.set_tile(x, 5, TileKind::Stone);
            grid.set_tile(x, 6, TileKind::Bedrock);
        }
        grid
    }

    fn player_at(grid: &WorldGrid, tx: i32, ty: i32) -> Player {
        Player::spawn_at_tile(grid, tx, ty, &PlayerConfig::default())
    }

    #[test]
    fn test_spawn_is_centred() {
        let grid = room();
        let player = player_at(&grid, 3, 1);
        assert_eq!(player.position(), (100.0, 36.0));
        assert_eq!(player.tile_position(&grid), (3, 1));
        assert_eq!(player.facing, Direction::South);
    }

    #[test]
    fn test_diagonal_speed_is_normalised() {
        let grid = room();
        let mut player = player_at(&grid, 3, 2);
        let input = MoveInput {
            up: true,
            right: true,
            ..MoveInput::NONE
        };

        player.update(0.05, input, &grid);
        let (vx, vy) = player.velocity();
        let speed = (vx * vx + vy * vy).sqrt();
        assert!((speed - 150.0).abs() < 0.01);
        assert_eq!(player.facing, Direction::East);
    }

    #[test]
    fn test_moving_into_solid_tile_is_rejected() {
        let grid = room();
        let mut player = player_at(&grid, 3, 3);
        let start = player.position();
        let down = MoveInput {
            down: true,
            ..MoveInput::NONE
        };

        // The box bottom sits 4px above the floor; 0.1s at 150px/s is 15px
        player.update(0.1, down, &grid);
        assert_eq!(player.position(), start);
        assert_eq!(player.velocity(), (0.0, 0.0));
        assert_eq!(player.facing, Direction::South);
    }

    #[test]
    fn test_stops_short_of_a_wall() {
        let grid = room();
        let mut player = player_at(&grid, 3, 3);
        let down = MoveInput {
            down: true,
            ..MoveInput::NONE
        };
        let frame = 1.0 / 60.0;
        let step = 150.0 * frame;

        // 4px to the floor: the first 2.5px step fits, the second would overlap
        for _ in 0..10 {
            player.update(frame, down, &grid);
        }
        let gap = 128.0 - player.bounds().bottom();
        assert!(gap > 0.0 && gap < step, "gap {}", gap);
        assert_eq!(player.velocity(), (0.0, 0.0));
    }

    #[test]
    fn test_free_move() {
        let grid = room();
        let mut player = player_at(&grid, 3, 2);
        let left = MoveInput {
            left: true,
            ..MoveInput::NONE
        };

        player.update(0.1, left, &grid);
        assert!((player.x - 85.0).abs() < 0.001);
        assert_eq!(player.facing, Direction::West);
    }

    #[test]
    fn test_cannot_leave_the_world() {
        let grid = room();
        let mut player = player_at(&grid, 0, 0);
        let start = player.position();
        let up = MoveInput {
            up: true,
            ..MoveInput::NONE
        };

        player.update(0.1, up, &grid);
        assert_eq!(player.position(), start);
    }

    #[test]
    fn test_mine_target_skips_air_within_reach() {
        let mut grid = room();
        let mut player = player_at(&grid, 3, 2);
        // Range 40 on 32px tiles reaches one tile
        assert_eq!(player.mine_target(&grid), (3, 3));

        player.extend_mining_range(30.0);
        assert_eq!(player.mine_target(&grid), (3, 4));

        grid.set_tile(3, 3, TileKind::Dirt);
        assert_eq!(player.mine_target(&grid), (3, 3));
    }

    #[test]
    fn test_mining_ore_fills_inventory_and_starts_cooldown() {
        let mut grid = room();
        grid.set_tile(3, 4, TileKind::OreCopper);
        let mut player = player_at(&grid, 3, 3);

        let report = player.try_mine(&mut grid).unwrap();
        assert_eq!(report.target, (3, 4));
        assert_eq!(report.collected, Some(OreAmount::new(OreType::Copper, 1)));
        assert_eq!(player.inventory.count(OreType::Copper), 1);
        // 0.8 * 1.2 / 1.0, wood speed 1.0
        assert!((player.cooldown - 0.96).abs() < 1e-5);

        assert!(player.try_mine(&mut grid).is_none());

        player.update(1.0, MoveInput::NONE, &grid);
        assert!(player.can_mine());
    }

    #[test]
    fn test_multiplier_yield() {
        let mut grid = room();
        grid.set_tile(3, 4, TileKind::OreIron);
        let mut player = player_at(&grid, 3, 3);
        player.boost_ore_multiplier(0.5);
        assert_eq!(player.stats.ore_yield(), 1);
        player.boost_ore_multiplier(0.5);

        let report = player.try_mine(&mut grid).unwrap();
        assert_eq!(report.collected, Some(OreAmount::new(OreType::Iron, 2)));
    }

    #[test]
    fn test_too_weak_leaves_no_cooldown() {
        let mut grid = room();
        grid.set_tile(3, 4, TileKind::OreDiamond);
        let mut player = player_at(&grid, 3, 3);

        let report = player.try_mine(&mut grid).unwrap();
        assert!(matches!(report.outcome, MineOutcome::TooWeak { .. }));
        assert!(player.can_mine());

        player.pickaxe = Pickaxe::new(PickaxeTier::Stone);
        let report = player.try_mine(&mut grid).unwrap();
        assert_eq!(report.collected, Some(OreAmount::new(OreType::Diamond, 1)));
        // 0.8 * 3.0 / 2.0 = 1.2, stone speed 1.2
        assert!((player.cooldown - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_mining_speed_has_a_floor() {
        let grid = room();
        let mut player = player_at(&grid, 3, 2);
        for _ in 0..10 {
            player.improve_mining_speed(0.2);
        }
        assert_eq!(player.stats.base_mine_time, MIN_MINING_TIME);
    }
}
