use crate::ore::OreType;
use std::fmt;

/// Errors that can occur during inventory operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// Tried to remove more ore than the inventory holds
    InsufficientOre {
        ore: OreType,
        requested: u32,
        available: u32,
    },
}

impl fmt::Display for InventoryError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InventoryError::InsufficientOre { ore, requested, available } => {
                write!(f, "Insufficient {} (requested: {}, available: {})", ore, requested, available)
            }
        }
    }
}

impl std::error::Error for InventoryError {}

impl From<InventoryError> for String {
    fn from(error: InventoryError) -> Self {
        error.to_string()
    }
}
