use crate::color::Rgb;
use crate::ore::OreType;

/// Rows over which dirt and stone fade to their darkest shade
const SHADE_DEPTH_ROWS: f32 = 20.0;

/// How much of the colour is lost at full depth
const MAX_SHADE: f32 = 0.3;

/// Unique identifier for tile types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    Air,
    Dirt,
    Stone,
    Bedrock,
    OreCopper,
    OreIron,
    OreGold,
    OreDiamond,
}

/// One grid cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tile {
    pub kind: TileKind,
    pub hardness: f32,
    pub solid: bool,
    pub color: Rgb,
}

const fn tile(kind: TileKind, hardness: f32, solid: bool, color: Rgb) -> Tile {
    Tile { kind, hardness, solid, color }
}

const TILE_TABLE: [Tile; 8] = [
    tile(TileKind::Air, 0.0, false, Rgb::BLACK),
    tile(TileKind::Dirt, 0.5, true, Rgb::new(139, 69, 19)),
    tile(TileKind::Stone, 1.0, true, Rgb::new(128, 128, 128)),
    tile(TileKind::Bedrock, f32::INFINITY, true, Rgb::new(64, 64, 64)),
    tile(TileKind::OreCopper, 1.2, true, Rgb::new(184, 115, 51)),
    tile(TileKind::OreIron, 1.5, true, Rgb::new(169, 169, 169)),
    tile(TileKind::OreGold, 2.0, true, Rgb::new(255, 215, 0)),
    tile(TileKind::OreDiamond, 3.0, true, Rgb::new(185, 242, 255)),
];

impl TileKind {
    /// The ore this tile drops when mined
    pub fn ore(self) -> Option<OreType> {
        match self {
            TileKind::OreCopper => Some(OreType::Copper),
            TileKind::OreIron => Some(OreType::Iron),
            TileKind::OreGold => Some(OreType::Gold),
            TileKind::OreDiamond => Some(OreType::Diamond),
            _ => None,
        }
    }

    pub fn from_ore(ore: OreType) -> TileKind {
        match ore {
            OreType::Copper => TileKind::OreCopper,
            OreType::Iron => TileKind::OreIron,
            OreType::Gold => TileKind::OreGold,
            OreType::Diamond => TileKind::OreDiamond,
        }
    }

    pub fn is_ore(self) -> bool {
        self.ore().is_some()
    }

    /// Character used for text dumps of the world
    pub fn symbol(self) -> char {
        match self {
            TileKind::Air => ' ',
            TileKind::Dirt => '.',
            TileKind::Stone => '#',
            TileKind::Bedrock => '=',
            TileKind::OreCopper => 'c',
            TileKind::OreIron => 'i',
            TileKind::OreGold => 'g',
            TileKind::OreDiamond => 'D',
        }
    }
}

impl Tile {
    /// Fresh tile of the given kind with its table properties
    pub fn of(kind: TileKind) -> Tile {
        TILE_TABLE[kind as usize]
    }

    /// Render colour for this tile when it sits in `row`
    ///
    /// Dirt and stone get darker the deeper they are; everything else keeps
    /// its table colour.
    pub fn shaded_color(&self, row: usize) -> Rgb {
        match self.kind {
            TileKind::Dirt | TileKind::Stone => {
                let depth = (row as f32 / SHADE_DEPTH_ROWS).min(1.0);
                self.color.darken(1.0 - depth * MAX_SHADE)
            }
            _ => self.color,
        }
    }
}

impl Default for Tile {
    fn default() -> Self {
        Tile::of(TileKind::Air)
    }
}
