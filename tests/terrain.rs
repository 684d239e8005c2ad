// Whole-world properties of generated terrain

use ore_miner::config::{GameConfig, WorldConfig};
use ore_miner::game::GameSession;
use ore_miner::input::{GameAction, MoveInput};
use ore_miner::world::{self, MineOutcome, TileKind};

const SEEDS: [u64; 6] = [0, 1, 7, 42, 1234, u64::MAX];

#[test]
fn every_world_is_framed_by_bedrock_below() {
    let config = WorldConfig::default();
    for seed in SEEDS {
        let grid = world::generate_world(&config, seed);
        assert_eq!(grid.width, 100);
        assert_eq!(grid.height, 50);
        for x in 0..100 {
            assert_eq!(grid.tile_kind(x, 48), TileKind::Bedrock, "seed {}", seed);
            assert_eq!(grid.tile_kind(x, 49), TileKind::Bedrock, "seed {}", seed);
        }
        // Nothing above the bottom two rows is bedrock
        assert_eq!(grid.count_kind(TileKind::Bedrock), 200, "seed {}", seed);
    }
}

#[test]
fn bedrock_survives_any_pickaxe() {
    let mut grid = world::generate_world(&WorldConfig::default(), 99);
    for x in 0..100 {
        assert_eq!(grid.mine_tile(x, 49, f32::MAX), MineOutcome::Unbreakable);
    }
    assert_eq!(grid.count_kind(TileKind::Bedrock), 200);
}

#[test]
fn ores_appear_and_deep_ores_stay_deep() {
    let config = WorldConfig::default();
    let mut copper = 0;
    for seed in SEEDS {
        let grid = world::generate_world(&config, seed);
        copper += grid.count_kind(TileKind::OreCopper);
        for (_, y, tile) in grid.iter_tiles() {
            if tile.kind == TileKind::OreDiamond {
                assert!(y >= 24, "diamond at row {} for seed {}", y, seed);
            }
        }
    }
    assert!(copper > 0);
}

#[test]
fn custom_sizes_are_respected() {
    let mut config = GameConfig::default();
    config.world.width = 40;
    config.world.height = 30;
    assert!(config.validate().is_ok());

    let grid = world::generate_world(&config.world, 3);
    assert_eq!(grid.ascii_rows().len(), 30);
    assert!(grid.ascii_rows().iter().all(|row| row.chars().count() == 40));
}

#[test]
fn dig_down_and_collect() {
    let mut session = GameSession::new(&GameConfig::default(), 42);
    let start_row = session.player.tile_position(&session.world).1;

    // Mine straight down, walking into each freshly dug hole
    let down = MoveInput {
        down: true,
        ..MoveInput::NONE
    };
    for _ in 0..200 {
        session.handle_action(GameAction::Mine);
        for _ in 0..10 {
            session.update(0.1, down);
        }
    }

    let (_, row) = session.player.tile_position(&session.world);
    assert!(row > start_row + 3, "player only reached row {}", row);
    assert!(row < 48);
}
