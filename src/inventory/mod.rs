// Inventory module
//
// The player's ore counter and the error type for failed withdrawals.

pub mod error;
pub mod inventory;

pub use error::InventoryError;
pub use inventory::Inventory;
