//! Ore Miner
//!
//! A 2D tile mining game: dig through a generated world, collect ore, and
//! spend it on pickaxe tiers and mining upgrades.
//!
//! The library holds every game rule and is free of any graphics backend.
//! The SDL2 front-end lives in the `ore-miner` binary (feature `gui`), and
//! the `worldgen` binary prints generated worlds as text.

pub mod collision;
pub mod color;
pub mod config;
pub mod game;
pub mod input;
pub mod inventory;
pub mod ore;
pub mod pickaxe;
pub mod player;
pub mod shop;
pub mod world;
