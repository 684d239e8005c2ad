//! Pickaxe tiers and the upgrade chain
//!
//! Tiers form a linear chain `Wood → Stone → Iron → Gold → Diamond`. Each
//! step has a fixed recipe. Upgrading is split in two so the transaction is
//! atomic:
//!
//! 1. [`Pickaxe::plan_upgrade`] looks at the inventory without touching it and
//!    returns an [`UpgradePlan`] (target tier, deduction list, shortfalls).
//! 2. [`Pickaxe::attempt_upgrade`] applies a ready plan in one step, or does
//!    nothing at all.

use crate::color::Rgb;
use crate::inventory::Inventory;
use crate::ore::{self, OreAmount, OreType};
use std::fmt;

/// Fastest a single mining action can ever be, in seconds
pub const MIN_MINING_TIME: f32 = 0.1;

/// Fraction of a tile's hardness a pickaxe's power must reach to break it
pub const HARDNESS_THRESHOLD: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PickaxeTier {
    Wood,
    Stone,
    Iron,
    Gold,
    Diamond,
}

/// Static properties of a tier
#[derive(Debug, Clone, Copy)]
pub struct TierProperties {
    pub name: &'static str,
    pub power: f32,
    pub speed: f32,
    pub color: Rgb,
    /// Ore consumed to advance from this tier to the next one
    pub recipe: &'static [OreAmount],
}

const TIER_TABLE: [TierProperties; 5] = [
    TierProperties {
        name: "Wooden Pickaxe",
        power: 1.0,
        speed: 1.0,
        color: Rgb::new(139, 69, 19),
        recipe: &[OreAmount::new(OreType::Copper, 5)],
    },
    TierProperties {
        name: "Stone Pickaxe",
        power: 2.0,
        speed: 1.2,
        color: Rgb::new(128, 128, 128),
        recipe: &[OreAmount::new(OreType::Copper, 8), OreAmount::new(OreType::Iron, 3)],
    },
    TierProperties {
        name: "Iron Pickaxe",
        power: 4.0,
        speed: 1.5,
        color: Rgb::new(192, 192, 192),
        recipe: &[OreAmount::new(OreType::Iron, 5), OreAmount::new(OreType::Gold, 2)],
    },
    TierProperties {
        name: "Golden Pickaxe",
        power: 7.0,
        speed: 2.0,
        color: Rgb::new(255, 215, 0),
        recipe: &[OreAmount::new(OreType::Gold, 3), OreAmount::new(OreType::Diamond, 1)],
    },
    TierProperties {
        name: "Diamond Pickaxe",
        power: 12.0,
        speed: 3.0,
        color: Rgb::new(185, 242, 255),
        recipe: &[],
    },
];

impl PickaxeTier {
    pub const ALL: [PickaxeTier; 5] = [
        PickaxeTier::Wood,
        PickaxeTier::Stone,
        PickaxeTier::Iron,
        PickaxeTier::Gold,
        PickaxeTier::Diamond,
    ];

    pub fn properties(self) -> &'static TierProperties {
        &TIER_TABLE[self as usize]
    }

    /// The tier this one upgrades into, `None` at the end of the chain
    pub fn next(self) -> Option<PickaxeTier> {
        match self {
            PickaxeTier::Wood => Some(PickaxeTier::Stone),
            PickaxeTier::Stone => Some(PickaxeTier::Iron),
            PickaxeTier::Iron => Some(PickaxeTier::Gold),
            PickaxeTier::Gold => Some(PickaxeTier::Diamond),
            PickaxeTier::Diamond => None,
        }
    }

    /// Short label ("Wood", "Stone", ...)
    pub fn label(self) -> &'static str {
        match self {
            PickaxeTier::Wood => "Wood",
            PickaxeTier::Stone => "Stone",
            PickaxeTier::Iron => "Iron",
            PickaxeTier::Gold => "Gold",
            PickaxeTier::Diamond => "Diamond",
        }
    }
}

impl fmt::Display for PickaxeTier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One ore type the inventory is short of
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OreShortfall {
    pub ore: OreType,
    pub required: u32,
    pub available: u32,
}

impl OreShortfall {
    pub fn missing(&self) -> u32 {
        self.required.saturating_sub(self.available)
    }
}

/// Result of checking an upgrade against a read-only view of the inventory
#[derive(Debug, Clone, PartialEq)]
pub struct UpgradePlan {
    pub from: PickaxeTier,
    /// `None` when `from` is already the last tier
    pub to: Option<PickaxeTier>,
    /// Exactly what to take from the inventory if the plan is applied
    pub deduction: Vec<OreAmount>,
    pub shortfalls: Vec<OreShortfall>,
}

impl UpgradePlan {
    /// True when the plan can be applied
    pub fn is_ready(&self) -> bool {
        self.to.is_some() && self.shortfalls.is_empty()
    }
}

/// The player's equipped pickaxe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pickaxe {
    tier: PickaxeTier,
}

impl Pickaxe {
    pub fn new(tier: PickaxeTier) -> Self {
        Pickaxe { tier }
    }

    pub fn tier(&self) -> PickaxeTier {
        self.tier
    }

    pub fn name(&self) -> &'static str {
        self.tier.properties().name
    }

    pub fn power(&self) -> f32 {
        self.tier.properties().power
    }

    pub fn speed(&self) -> f32 {
        self.tier.properties().speed
    }

    pub fn color(&self) -> Rgb {
        self.tier.properties().color
    }

    pub fn can_upgrade(&self) -> bool {
        self.tier.next().is_some()
    }

    /// Ore needed for the next tier (empty at Diamond)
    pub fn upgrade_recipe(&self) -> &'static [OreAmount] {
        self.tier.properties().recipe
    }

    /// Total ore value of the next upgrade, for display only
    pub fn upgrade_cost(&self) -> u32 {
        ore::total_value(self.upgrade_recipe())
    }

    /// True if this pickaxe is strong enough for a tile of `hardness`
    pub fn can_mine(&self, hardness: f32) -> bool {
        self.power() >= hardness * HARDNESS_THRESHOLD
    }

    /// Checks the next upgrade against `available` without modifying anything
    pub fn plan_upgrade(&self, available: &Inventory) -> UpgradePlan {
        let deduction = self.upgrade_recipe().to_vec();
        let shortfalls = deduction
            .iter()
            .filter(|line| !available.has_enough(line.ore, line.quantity))
            .map(|line| OreShortfall {
                ore: line.ore,
                required: line.quantity,
                available: available.count(line.ore),
            })
            .collect();

        UpgradePlan {
            from: self.tier,
            to: self.tier.next(),
            deduction,
            shortfalls,
        }
    }

    /// Upgrades one tier, consuming the full recipe, or changes nothing
    pub fn attempt_upgrade(&mut self, inventory: &mut Inventory) -> bool {
        let plan = self.plan_upgrade(inventory);
        self.apply_plan(&plan, inventory)
    }

    /// Applies a plan made by [`Pickaxe::plan_upgrade`]
    ///
    /// Refuses plans made for a different tier or plans that are not ready.
    /// The deduction goes through [`Inventory::apply_deduction`], so the
    /// inventory is either fully charged or untouched.
    pub fn apply_plan(&mut self, plan: &UpgradePlan, inventory: &mut Inventory) -> bool {
        let Some(next) = plan.to else {
            return false;
        };
        if plan.from != self.tier || !plan.is_ready() {
            return false;
        }
        if inventory.apply_deduction(&plan.deduction).is_err() {
            return false;
        }

        self.tier = next;
        true
    }
}

impl Default for Pickaxe {
    fn default() -> Self {
        Pickaxe::new(PickaxeTier::Wood)
    }
}

/// Seconds one mining action takes: `base × hardness / power`, at least [`MIN_MINING_TIME`]
pub fn mining_time(power: f32, hardness: f32, base_time: f32) -> f32 {
    if power <= 0.0 {
        return base_time * 10.0;
    }
    (base_time * hardness / power).max(MIN_MINING_TIME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_is_linear_and_terminal() {
        let mut tier = PickaxeTier::Wood;
        let mut steps = 0;
        while let Some(next) = tier.next() {
            assert!(next > tier);
            tier = next;
            steps += 1;
        }
        assert_eq!(tier, PickaxeTier::Diamond);
        assert_eq!(steps, 4);
    }

    #[test]
    fn test_wood_upgrade_scenario() {
        let mut pickaxe = Pickaxe::default();
        let mut inventory = Inventory::new();
        inventory.add_ore(OreType::Copper, 5);

        assert!(pickaxe.attempt_upgrade(&mut inventory));
        assert_eq!(pickaxe.tier(), PickaxeTier::Stone);
        assert_eq!(inventory.count(OreType::Copper), 0);

        // Stone -> Iron needs Copper 8 + Iron 3
        assert!(!pickaxe.attempt_upgrade(&mut inventory));
        assert_eq!(pickaxe.tier(), PickaxeTier::Stone);
    }

    #[test]
    fn test_partial_funds_deduct_nothing() {
        let mut pickaxe = Pickaxe::new(PickaxeTier::Stone);
        let mut inventory = Inventory::new();
        inventory.add_ore(OreType::Copper, 20);
        inventory.add_ore(OreType::Iron, 2);
        let before = inventory.clone();

        assert!(!pickaxe.attempt_upgrade(&mut inventory));
        assert_eq!(inventory, before);
        assert_eq!(pickaxe.tier(), PickaxeTier::Stone);
    }

    #[test]
    fn test_any_missing_unit_blocks_every_tier() {
        for tier in PickaxeTier::ALL.into_iter().filter(|t| t.next().is_some()) {
            let recipe = Pickaxe::new(tier).upgrade_recipe();
            for short in recipe {
                let mut pickaxe = Pickaxe::new(tier);
                let mut inventory = Inventory::new();
                for line in recipe {
                    let quantity = if line.ore == short.ore { line.quantity - 1 } else { line.quantity };
                    inventory.add_ore(line.ore, quantity);
                }
                let before = inventory.clone();

                assert!(!pickaxe.attempt_upgrade(&mut inventory), "{:?} short on {}", tier, short.ore);
                assert_eq!(pickaxe.tier(), tier);
                assert_eq!(inventory, before);
            }
        }
    }

    #[test]
    fn test_diamond_never_upgrades() {
        let mut pickaxe = Pickaxe::new(PickaxeTier::Diamond);
        let mut inventory = Inventory::new();
        for ore in OreType::ALL {
            inventory.add_ore(ore, 1000);
        }
        let before = inventory.clone();

        for _ in 0..3 {
            assert!(!pickaxe.attempt_upgrade(&mut inventory));
        }
        assert_eq!(pickaxe.tier(), PickaxeTier::Diamond);
        assert_eq!(inventory, before);
        assert!(!pickaxe.can_upgrade());
        assert_eq!(pickaxe.upgrade_cost(), 0);
    }

    #[test]
    fn test_plan_lists_shortfalls() {
        let pickaxe = Pickaxe::new(PickaxeTier::Iron);
        let mut inventory = Inventory::new();
        inventory.add_ore(OreType::Iron, 5);
        inventory.add_ore(OreType::Gold, 1);

        let plan = pickaxe.plan_upgrade(&inventory);
        assert!(!plan.is_ready());
        assert_eq!(plan.to, Some(PickaxeTier::Gold));
        assert_eq!(
            plan.shortfalls,
            vec![OreShortfall { ore: OreType::Gold, required: 2, available: 1 }]
        );
        assert_eq!(plan.shortfalls[0].missing(), 1);
    }

    #[test]
    fn test_stale_plan_is_rejected() {
        let mut pickaxe = Pickaxe::default();
        let mut inventory = Inventory::new();
        inventory.add_ore(OreType::Copper, 50);

        let plan = pickaxe.plan_upgrade(&inventory);
        assert!(pickaxe.apply_plan(&plan, &mut inventory));
        assert_eq!(inventory.count(OreType::Copper), 45);

        // Same plan again: it was made for Wood, the pickaxe is now Stone
        assert!(!pickaxe.apply_plan(&plan, &mut inventory));
        assert_eq!(inventory.count(OreType::Copper), 45);
        assert_eq!(pickaxe.tier(), PickaxeTier::Stone);
    }

    #[test]
    fn test_upgrade_cost_sums_ore_values() {
        assert_eq!(Pickaxe::new(PickaxeTier::Wood).upgrade_cost(), 5);
        assert_eq!(Pickaxe::new(PickaxeTier::Stone).upgrade_cost(), 8 + 9);
        assert_eq!(Pickaxe::new(PickaxeTier::Iron).upgrade_cost(), 15 + 16);
        assert_eq!(Pickaxe::new(PickaxeTier::Gold).upgrade_cost(), 24 + 20);
    }

    #[test]
    fn test_power_threshold() {
        let wood = Pickaxe::default();
        assert!(wood.can_mine(1.0));
        assert!(wood.can_mine(2.0));
        assert!(!wood.can_mine(3.0));
        assert!(!Pickaxe::new(PickaxeTier::Diamond).can_mine(f32::INFINITY));
    }

    #[test]
    fn test_mining_time() {
        assert_eq!(mining_time(1.0, 1.0, 0.8), 0.8);
        assert_eq!(mining_time(2.0, 1.0, 0.8), 0.4);
        assert_eq!(mining_time(12.0, 0.5, 0.8), MIN_MINING_TIME);
        assert_eq!(mining_time(0.0, 1.0, 0.8), 8.0);
    }
}
