use super::error::InventoryError;
use crate::ore::{OreAmount, OreType, ORE_COUNT};

/// Ore counter owned by the player
///
/// Every ore type always has an entry (a fixed array indexed by
/// [`OreType::index`]), and counts are unsigned so they can never go negative.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    counts: [u32; ORE_COUNT],
}

impl Inventory {
    /// Creates an empty inventory
    pub fn new() -> Self {
        Inventory {
            counts: [0; ORE_COUNT],
        }
    }

    /// Adds ore unconditionally (saturates instead of wrapping)
    pub fn add_ore(&mut self, ore: OreType, quantity: u32) {
        let slot = &mut self.counts[ore.index()];
        *slot = slot.saturating_add(quantity);
    }

    /// Removes ore, returning false (and changing nothing) if there isn't enough
    pub fn remove_ore(&mut self, ore: OreType, quantity: u32) -> bool {
        self.try_remove_ore(ore, quantity).is_ok()
    }

    /// Removes ore, reporting exactly what was missing on failure
    pub fn try_remove_ore(&mut self, ore: OreType, quantity: u32) -> Result<(), InventoryError> {
        let available = self.count(ore);
        if available < quantity {
            return Err(InventoryError::InsufficientOre {
                ore,
                requested: quantity,
                available,
            });
        }

        self.counts[ore.index()] = available - quantity;
        Ok(())
    }

    pub fn count(&self, ore: OreType) -> u32 {
        self.counts[ore.index()]
    }

    pub fn has_enough(&self, ore: OreType, quantity: u32) -> bool {
        self.count(ore) >= quantity
    }

    /// True when every line of `amounts` is covered
    ///
    /// Lines naming the same ore are summed before checking.
    pub fn has_all(&self, amounts: &[OreAmount]) -> bool {
        self.first_shortfall(amounts).is_none()
    }

    /// Removes every line of `amounts`, or nothing at all
    ///
    /// All lines are validated against the current counts before any count
    /// is touched, so a failed deduction leaves the inventory unchanged.
    pub fn apply_deduction(&mut self, amounts: &[OreAmount]) -> Result<(), InventoryError> {
        if let Some(error) = self.first_shortfall(amounts) {
            return Err(error);
        }

        for amount in amounts {
            self.counts[amount.ore.index()] -= amount.quantity;
        }
        Ok(())
    }

    fn first_shortfall(&self, amounts: &[OreAmount]) -> Option<InventoryError> {
        let mut required = [0u32; ORE_COUNT];
        for amount in amounts {
            let slot = &mut required[amount.ore.index()];
            *slot = slot.saturating_add(amount.quantity);
        }

        OreType::ALL.iter().find_map(|&ore| {
            let requested = required[ore.index()];
            let available = self.count(ore);
            (available < requested).then_some(InventoryError::InsufficientOre {
                ore,
                requested,
                available,
            })
        })
    }

    /// Sum over ore types of count × fixed value
    pub fn total_value(&self) -> u32 {
        self.iter().fold(0u32, |total, (ore, count)| {
            total.saturating_add(count.saturating_mul(ore.value()))
        })
    }

    /// Number of ores of every type combined
    pub fn total_count(&self) -> u32 {
        self.counts.iter().fold(0u32, |total, &count| total.saturating_add(count))
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&count| count == 0)
    }

    /// Resets every count to zero
    pub fn clear(&mut self) {
        self.counts = [0; ORE_COUNT];
    }

    /// Iterates `(ore, count)` for every ore type, zeros included
    pub fn iter(&self) -> impl Iterator<Item = (OreType, u32)> + '_ {
        OreType::ALL.iter().map(|&ore| (ore, self.count(ore)))
    }

    /// One line per ore plus the total, as shown in the inventory panel
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .iter()
            .map(|(ore, count)| format!("{}: {}", ore, count))
            .collect();
        lines.push(format!("Total value: {}", self.total_value()));
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_inventory_is_empty() {
        let inventory = Inventory::new();
        assert!(inventory.is_empty());
        assert_eq!(inventory.iter().count(), ORE_COUNT);
        assert_eq!(inventory.total_value(), 0);
    }

    #[test]
    fn test_remove_then_fail_scenario() {
        let mut inventory = Inventory::new();
        inventory.add_ore(OreType::Copper, 5);

        assert!(inventory.remove_ore(OreType::Copper, 3));
        assert_eq!(inventory.count(OreType::Copper), 2);

        assert!(!inventory.remove_ore(OreType::Copper, 3));
        assert_eq!(inventory.count(OreType::Copper), 2);
    }

    #[test]
    fn test_try_remove_reports_shortfall() {
        let mut inventory = Inventory::new();
        inventory.add_ore(OreType::Gold, 1);

        let err = inventory.try_remove_ore(OreType::Gold, 4).unwrap_err();
        assert_eq!(
            err,
            InventoryError::InsufficientOre {
                ore: OreType::Gold,
                requested: 4,
                available: 1,
            }
        );
        assert_eq!(inventory.count(OreType::Gold), 1);
    }

    #[test]
    fn test_total_value_matches_fixed_values() {
        let mut inventory = Inventory::new();
        inventory.add_ore(OreType::Copper, 10);
        inventory.add_ore(OreType::Iron, 5);
        inventory.add_ore(OreType::Gold, 2);
        inventory.add_ore(OreType::Diamond, 1);

        // 10*1 + 5*3 + 2*8 + 1*20
        assert_eq!(inventory.total_value(), 61);

        inventory.remove_ore(OreType::Iron, 2);
        assert_eq!(inventory.total_value(), 55);
        assert_eq!(inventory.total_count(), 16);
    }

    #[test]
    fn test_apply_deduction_is_all_or_nothing() {
        let mut inventory = Inventory::new();
        inventory.add_ore(OreType::Copper, 8);
        inventory.add_ore(OreType::Iron, 2);
        let before = inventory.clone();

        let recipe = [OreAmount::new(OreType::Copper, 8), OreAmount::new(OreType::Iron, 3)];
        assert!(inventory.apply_deduction(&recipe).is_err());
        assert_eq!(inventory, before);

        inventory.add_ore(OreType::Iron, 1);
        assert!(inventory.apply_deduction(&recipe).is_ok());
        assert!(inventory.is_empty());
    }

    #[test]
    fn test_duplicate_lines_are_summed() {
        let mut inventory = Inventory::new();
        inventory.add_ore(OreType::Copper, 5);

        let lines = [OreAmount::new(OreType::Copper, 3), OreAmount::new(OreType::Copper, 3)];
        assert!(!inventory.has_all(&lines));
        assert!(inventory.apply_deduction(&lines).is_err());
        assert_eq!(inventory.count(OreType::Copper), 5);
    }

    #[test]
    fn test_add_saturates() {
        let mut inventory = Inventory::new();
        inventory.add_ore(OreType::Copper, u32::MAX);
        inventory.add_ore(OreType::Copper, 10);
        assert_eq!(inventory.count(OreType::Copper), u32::MAX);
    }

    #[test]
    fn test_clear() {
        let mut inventory = Inventory::new();
        inventory.add_ore(OreType::Diamond, 3);
        assert!(!inventory.is_empty());

        inventory.clear();
        assert!(inventory.is_empty());
    }

    #[test]
    fn test_summary_lines() {
        let mut inventory = Inventory::new();
        inventory.add_ore(OreType::Iron, 2);

        let lines = inventory.summary_lines();
        assert_eq!(lines[0], "Copper: 0");
        assert_eq!(lines[1], "Iron: 2");
        assert_eq!(lines.last().map(String::as_str), Some("Total value: 6"));
    }
}
