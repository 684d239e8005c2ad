// Backend-free input vocabulary
//
// The SDL front-end translates raw events into these types; the game session
// only ever sees `GameAction`s and a `MoveInput` per frame.

use crate::game::UiScreen;
use crate::shop::UpgradeTrack;

/// All discrete actions the game understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Mine,
    ToggleInventory,
    ToggleShop,
    /// Opens the pause screen, or backs out of whatever screen is open
    Pause,
    BuyPickaxe,
    BuyUpgrade(UpgradeTrack),
    ShowPickaxeInfo,
    ShowStatus,
    Quit,
}

/// Which key bindings are active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    Playing,
    Inventory,
    Shop,
    Paused,
}

impl From<UiScreen> for InputContext {
    fn from(screen: UiScreen) -> Self {
        match screen {
            UiScreen::Playing => InputContext::Playing,
            UiScreen::Inventory => InputContext::Inventory,
            UiScreen::Shop => InputContext::Shop,
            UiScreen::Paused => InputContext::Paused,
        }
    }
}

/// Held movement keys for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl MoveInput {
    pub const NONE: MoveInput = MoveInput {
        up: false,
        down: false,
        left: false,
        right: false,
    };

    /// Unit-axis direction; opposite keys cancel out
    pub fn axis(&self) -> (f32, f32) {
        let x = (self.right as i8 - self.left as i8) as f32;
        let y = (self.down as i8 - self.up as i8) as f32;
        (x, y)
    }

    pub fn is_idle(&self) -> bool {
        self.axis() == (0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis() {
        let input = MoveInput {
            up: true,
            right: true,
            ..MoveInput::NONE
        };
        assert_eq!(input.axis(), (1.0, -1.0));
        assert!(MoveInput::NONE.is_idle());
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let input = MoveInput {
            left: true,
            right: true,
            ..MoveInput::NONE
        };
        assert!(input.is_idle());
    }

    #[test]
    fn test_context_follows_screen() {
        assert_eq!(InputContext::from(UiScreen::Shop), InputContext::Shop);
        assert_eq!(InputContext::from(UiScreen::Playing), InputContext::Playing);
    }
}
