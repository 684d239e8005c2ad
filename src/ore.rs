//! Ore reference data
//!
//! Every ore property lives in one static table indexed by [`OreType`].
//! Balance changes happen here and nowhere else.

use crate::color::Rgb;
use std::fmt;

/// Number of ore types (size of every per-ore array in the crate)
pub const ORE_COUNT: usize = 4;

/// The collectible ores, ordered from most common to rarest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OreType {
    Copper,
    Iron,
    Gold,
    Diamond,
}

/// Static properties shared by every ore of a type
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OreProperties {
    /// Display name shown in the HUD and shop
    pub name: &'static str,

    /// Worth of a single ore (used for inventory value and upgrade cost display)
    pub value: u32,

    /// Base placement probability for an eligible stone tile
    pub rarity: f64,

    /// Shallowest row this ore can generate in
    pub min_depth: usize,

    pub color: Rgb,
}

const ORE_TABLE: [OreProperties; ORE_COUNT] = [
    OreProperties {
        name: "Copper",
        value: 1,
        rarity: 0.15,
        min_depth: 5,
        color: Rgb::new(184, 115, 51),
    },
    OreProperties {
        name: "Iron",
        value: 3,
        rarity: 0.08,
        min_depth: 10,
        color: Rgb::new(169, 169, 169),
    },
    OreProperties {
        name: "Gold",
        value: 8,
        rarity: 0.03,
        min_depth: 15,
        color: Rgb::new(255, 215, 0),
    },
    OreProperties {
        name: "Diamond",
        value: 20,
        rarity: 0.008,
        min_depth: 25,
        color: Rgb::new(185, 242, 255),
    },
];

impl OreType {
    /// All ore types in placement order (descending rarity, ascending depth)
    pub const ALL: [OreType; ORE_COUNT] = [
        OreType::Copper,
        OreType::Iron,
        OreType::Gold,
        OreType::Diamond,
    ];

    /// Position of this ore in per-ore arrays
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn properties(self) -> &'static OreProperties {
        &ORE_TABLE[self.index()]
    }

    pub fn name(self) -> &'static str {
        self.properties().name
    }

    pub fn value(self) -> u32 {
        self.properties().value
    }

    pub fn rarity(self) -> f64 {
        self.properties().rarity
    }

    pub fn min_depth(self) -> usize {
        self.properties().min_depth
    }

    pub fn color(self) -> Rgb {
        self.properties().color
    }
}

impl fmt::Display for OreType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A quantity of one ore type: a single line of a recipe or a price
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OreAmount {
    pub ore: OreType,
    pub quantity: u32,
}

impl OreAmount {
    pub const fn new(ore: OreType, quantity: u32) -> Self {
        OreAmount { ore, quantity }
    }

    /// Combined worth of this line
    pub fn value(&self) -> u32 {
        self.ore.value() * self.quantity
    }
}

/// Sums the worth of a list of ore amounts
pub fn total_value(amounts: &[OreAmount]) -> u32 {
    amounts.iter().map(OreAmount::value).sum()
}
