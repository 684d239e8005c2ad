//! Shop: pickaxe upgrades and the three mining-stat tracks
//!
//! Every purchase follows the same pattern: look at the inventory, decide,
//! then deduct the whole cost in one step. A refused purchase never touches
//! the inventory or the player's stats.

use crate::inventory::Inventory;
use crate::ore::{OreAmount, OreType};
use crate::pickaxe::{OreShortfall, PickaxeTier};
use crate::player::Player;
use std::fmt;
use tracing::{info, warn};

/// Highest cost-table row; later levels reuse it
const MAX_COST_ROW: usize = 4;

/// Stat tracks sold in the shop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpgradeTrack {
    MiningSpeed,
    MiningRange,
    OreMultiplier,
}

/// Static description of a track
#[derive(Debug, Clone, Copy)]
pub struct TrackInfo {
    pub name: &'static str,
    pub description: &'static str,
    /// Stat change per level
    pub step: f32,
    /// Cost rows by level as (Copper, Iron, Gold, Diamond)
    pub costs: [[u32; 4]; MAX_COST_ROW + 1],
}

const TRACK_TABLE: [TrackInfo; 3] = [
    TrackInfo {
        name: "Mining Speed",
        description: "-0.2s base mining time",
        step: 0.2,
        costs: [
            [10, 0, 0, 0],
            [20, 5, 0, 0],
            [50, 15, 3, 0],
            [100, 30, 10, 1],
            [200, 50, 20, 2],
        ],
    },
    TrackInfo {
        name: "Mining Range",
        description: "+15 px reach",
        step: 15.0,
        costs: [
            [15, 0, 0, 0],
            [30, 8, 0, 0],
            [60, 20, 5, 0],
            [120, 40, 15, 2],
            [250, 75, 30, 5],
        ],
    },
    TrackInfo {
        name: "Ore Multiplier",
        description: "+0.5x ore per tile",
        step: 0.5,
        costs: [
            [25, 5, 0, 0],
            [50, 15, 3, 0],
            [100, 40, 12, 1],
            [200, 80, 25, 3],
            [400, 150, 50, 10],
        ],
    },
];

impl UpgradeTrack {
    pub const ALL: [UpgradeTrack; 3] = [
        UpgradeTrack::MiningSpeed,
        UpgradeTrack::MiningRange,
        UpgradeTrack::OreMultiplier,
    ];

    pub fn info(self) -> &'static TrackInfo {
        &TRACK_TABLE[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }

    /// Track bound to number key `n` in the shop (1-based)
    pub fn from_hotkey(n: u8) -> Option<UpgradeTrack> {
        match n {
            1 => Some(UpgradeTrack::MiningSpeed),
            2 => Some(UpgradeTrack::MiningRange),
            3 => Some(UpgradeTrack::OreMultiplier),
            _ => None,
        }
    }

    /// Cost of buying the next level when `level` levels are already owned
    pub fn cost(self, level: u32) -> Vec<OreAmount> {
        let row = &self.info().costs[(level as usize).min(MAX_COST_ROW)];
        OreType::ALL
            .iter()
            .zip(row)
            .filter(|(_, quantity)| **quantity > 0)
            .map(|(&ore, &quantity)| OreAmount::new(ore, quantity))
            .collect()
    }

    fn apply(self, player: &mut Player) {
        let step = self.info().step;
        match self {
            UpgradeTrack::MiningSpeed => player.improve_mining_speed(step),
            UpgradeTrack::MiningRange => player.extend_mining_range(step),
            UpgradeTrack::OreMultiplier => player.boost_ore_multiplier(step),
        }
    }
}

impl fmt::Display for UpgradeTrack {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Errors that can occur during shop purchases
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShopError {
    /// The pickaxe is already at the last tier
    MaxTier,
    CannotAfford { shortfalls: Vec<OreShortfall> },
}

impl fmt::Display for ShopError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ShopError::MaxTier => write!(f, "Pickaxe is already at max tier"),
            ShopError::CannotAfford { shortfalls } => {
                let missing: Vec<String> = shortfalls
                    .iter()
                    .map(|s| format!("{} {}", s.missing(), s.ore))
                    .collect();
                write!(f, "Not enough ore, need {} more", missing.join(", "))
            }
        }
    }
}

impl std::error::Error for ShopError {}

impl From<ShopError> for String {
    fn from(error: ShopError) -> Self {
        error.to_string()
    }
}

/// What the shop shows for the next pickaxe
#[derive(Debug, Clone, PartialEq)]
pub struct PickaxeOffer {
    pub current: PickaxeTier,
    pub current_power: f32,
    /// `None` at the last tier
    pub next: Option<PickaxeTier>,
    pub recipe: Vec<OreAmount>,
    pub total_value: u32,
    pub affordable: bool,
}

/// Levels bought on each track
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Shop {
    levels: [u32; 3],
}

impl Shop {
    pub fn new() -> Self {
        Shop::default()
    }

    pub fn level(&self, track: UpgradeTrack) -> u32 {
        self.levels[track as usize]
    }

    /// Cost of the next level of `track`
    pub fn track_cost(&self, track: UpgradeTrack) -> Vec<OreAmount> {
        track.cost(self.level(track))
    }

    pub fn can_afford_track(&self, track: UpgradeTrack, inventory: &Inventory) -> bool {
        inventory.has_all(&self.track_cost(track))
    }

    pub fn pickaxe_offer(&self, player: &Player) -> PickaxeOffer {
        let pickaxe = &player.pickaxe;
        let plan = pickaxe.plan_upgrade(&player.inventory);
        PickaxeOffer {
            current: pickaxe.tier(),
            current_power: pickaxe.power(),
            next: plan.to,
            total_value: pickaxe.upgrade_cost(),
            affordable: plan.is_ready(),
            recipe: plan.deduction,
        }
    }

    /// Upgrades the player's pickaxe one tier
    pub fn buy_pickaxe(&self, player: &mut Player) -> Result<PickaxeTier, ShopError> {
        let Player {
            pickaxe, inventory, ..
        } = player;

        let plan = pickaxe.plan_upgrade(inventory);
        if plan.to.is_none() {
            return Err(ShopError::MaxTier);
        }
        if !plan.is_ready() {
            warn!(tier = %pickaxe.tier(), "pickaxe upgrade refused");
            return Err(ShopError::CannotAfford {
                shortfalls: plan.shortfalls,
            });
        }

        if !pickaxe.apply_plan(&plan, inventory) {
            return Err(ShopError::CannotAfford {
                shortfalls: plan.shortfalls,
            });
        }

        info!(tier = %pickaxe.tier(), "pickaxe upgraded");
        Ok(pickaxe.tier())
    }

    /// Buys the next level of a track, returning the new level
    pub fn buy_upgrade(&mut self, track: UpgradeTrack, player: &mut Player) -> Result<u32, ShopError> {
        let cost = self.track_cost(track);
        if player.inventory.apply_deduction(&cost).is_err() {
            warn!(%track, level = self.level(track), "upgrade refused");
            return Err(ShopError::CannotAfford {
                shortfalls: shortfalls(&cost, &player.inventory),
            });
        }

        track.apply(player);
        self.levels[track as usize] += 1;
        info!(%track, level = self.level(track), "upgrade bought");
        Ok(self.level(track))
    }
}

fn shortfalls(cost: &[OreAmount], inventory: &Inventory) -> Vec<OreShortfall> {
    cost.iter()
        .filter(|line| !inventory.has_enough(line.ore, line.quantity))
        .map(|line| OreShortfall {
            ore: line.ore,
            required: line.quantity,
            available: inventory.count(line.ore),
        })
        .collect()
}

/// "5 Copper, 3 Iron", or "Free" for an empty cost
pub fn format_cost(cost: &[OreAmount]) -> String {
    if cost.is_empty() {
        return "Free".to_string();
    }
    cost.iter()
        .map(|line| format!("{} {}", line.quantity, line.ore))
        .collect::<Vec<_>>()
        .join(", ")
}
