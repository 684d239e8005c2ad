//! Game configuration
//!
//! Everything tunable is loaded from a JSON file into serde structs. Every
//! field has a default, so a config file only needs the values it changes:
//!
//! ```json
//! { "world": { "seed": 42, "generation": { "cave_count_max": 20 } } }
//! ```
//!
//! Lookup order for [`GameConfig::load`]:
//! 1. an explicit path (missing file is an error)
//! 2. `<config dir>/ore-miner/config.json` when it exists
//! 3. built-in defaults

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Directory name under the platform config dir
const APP_DIR: &str = "ore-miner";
const CONFIG_FILE: &str = "config.json";

/// Rows below the stone band start that a cave walk must stay inside
const MIN_STONE_ROWS: usize = 6;

/// Errors that can occur while loading a config
#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: std::io::Error },
    Parse { path: PathBuf, source: serde_json::Error },
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "Failed to read {}: {}", path.display(), source)
            }
            ConfigError::Parse { path, source } => {
                write!(f, "Failed to parse {}: {}", path.display(), source)
            }
            ConfigError::Invalid(reason) => write!(f, "Invalid config: {}", reason),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<ConfigError> for String {
    fn from(error: ConfigError) -> Self {
        error.to_string()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub world: WorldConfig,
    pub player: PlayerConfig,
    pub window: WindowConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub width: usize,
    pub height: usize,
    pub tile_size: f32,
    /// Fixed seed; a random one is picked at startup when absent
    pub seed: Option<u64>,
    pub generation: GenerationConfig,
}

impl Default for WorldConfig {
    fn default() -> Self {
        WorldConfig {
            width: 100,
            height: 50,
            tile_size: 32.0,
            seed: None,
            generation: GenerationConfig::default(),
        }
    }
}

impl WorldConfig {
    /// Seed to generate with: `cli` first, then the configured seed, else random
    pub fn resolve_seed(&self, cli: Option<u64>) -> u64 {
        cli.or(self.seed).unwrap_or_else(rand::random)
    }
}

/// Terrain generator tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Rows of open sky; the last one is partly dirt
    pub surface_rows: usize,
    /// First row of the solid stone band
    pub dirt_rows_end: usize,
    pub bedrock_rows: usize,
    pub surface_dirt_chance: f64,
    pub shallow_dirt_chance: f64,
    pub cave_count_min: u32,
    pub cave_count_max: u32,
    pub cave_length_min: u32,
    pub cave_length_max: u32,
    pub cave_radius_max: i32,
    pub cave_clear_chance: f64,
    /// Chance that a placed ore grows a vein
    pub vein_chance: f64,
    /// Chance for each stone neighbour to join a vein
    pub vein_spread_chance: f64,
    /// Extra placement weight per row below an ore's minimum depth
    pub depth_bonus_per_row: f64,
    /// Rows above the bottom of the grid where ore stops generating
    pub ore_floor_margin: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        GenerationConfig {
            surface_rows: 3,
            dirt_rows_end: 8,
            bedrock_rows: 2,
            surface_dirt_chance: 0.7,
            shallow_dirt_chance: 0.8,
            cave_count_min: 8,
            cave_count_max: 12,
            cave_length_min: 20,
            cave_length_max: 49,
            cave_radius_max: 3,
            cave_clear_chance: 0.8,
            vein_chance: 0.3,
            vein_spread_chance: 0.4,
            depth_bonus_per_row: 0.05,
            ore_floor_margin: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Movement speed in pixels per second
    pub speed: f32,
    /// Edge length of the square collision box
    pub size: f32,
    /// Seconds one mining action takes on a hardness-1 tile with a power-1 pickaxe
    pub base_mine_time: f32,
    /// Reach in pixels from the player's centre
    pub mining_range: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        PlayerConfig {
            speed: 150.0,
            size: 24.0,
            base_mine_time: 0.8,
            mining_range: 40.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub target_fps: u32,
    /// Largest frame delta fed to the simulation, in seconds
    pub max_frame_delta: f32,
    /// How quickly the camera catches up with the player
    pub camera_speed: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            title: "Ore Miner".to_string(),
            width: 800,
            height: 600,
            target_fps: 60,
            max_frame_delta: 0.1,
            camera_speed: 3.0,
        }
    }
}

impl GameConfig {
    /// Loads and validates a config, see the module docs for the lookup order
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::load_from_file(path)?,
            None => match default_config_path().filter(|p| p.exists()) {
                Some(found) => Self::load_from_file(&found)?,
                None => {
                    info!("no config file found, using defaults");
                    GameConfig::default()
                }
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Reads a JSON config file without validating it
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Rejects values the generator or the game loop cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let world = &self.world;
        let generation = &world.generation;

        if world.width < 3 {
            return Err(ConfigError::Invalid(format!(
                "world width {} is below the minimum of 3",
                world.width
            )));
        }

        let min_height = generation.dirt_rows_end + generation.bedrock_rows + MIN_STONE_ROWS;
        if generation.bedrock_rows < 1 {
            return Err(ConfigError::Invalid(
                "bedrock_rows must be at least 1".to_string(),
            ));
        }

        if world.height < min_height {
            return Err(ConfigError::Invalid(format!(
                "world height {} leaves no stone band (need at least {})",
                world.height, min_height
            )));
        }

        if generation.surface_rows < 2 || generation.surface_rows > generation.dirt_rows_end {
            return Err(ConfigError::Invalid(
                "surface_rows must be at least 2 and not past dirt_rows_end".to_string(),
            ));
        }

        if generation.cave_count_min > generation.cave_count_max
            || generation.cave_length_min > generation.cave_length_max
        {
            return Err(ConfigError::Invalid("cave ranges have min above max".to_string()));
        }

        if generation.cave_radius_max < 1 {
            return Err(ConfigError::Invalid("cave_radius_max must be at least 1".to_string()));
        }

        if world.tile_size <= 0.0 || self.player.size <= 0.0 {
            return Err(ConfigError::Invalid("tile and player sizes must be positive".to_string()));
        }

        if self.player.size >= world.tile_size {
            return Err(ConfigError::Invalid(format!(
                "player size {} must be smaller than a one-tile gap of {}",
                self.player.size, world.tile_size
            )));
        }

        let max_delta = self.window.max_frame_delta;
        if !max_delta.is_finite() || max_delta <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "max_frame_delta {} must be a positive number of seconds",
                max_delta
            )));
        }

        Ok(())
    }
}

/// `<config dir>/ore-miner/config.json`, when the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}
