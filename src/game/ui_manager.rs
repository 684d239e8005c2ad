// UIManager struct
//
// Holds the UI state (open screen, status line) and builds every block of
// text the front-end draws. Nothing here knows how text is rendered.

use crate::input::GameAction;
use crate::player::Player;
use crate::shop::{self, Shop, UpgradeTrack};
use crate::world::WorldGrid;

use super::UiScreen;

pub const CONTROLS_HELP: &str =
    "WASD/Arrows: Move  Space: Mine  I: Inventory  B: Shop  P: Pickaxe  F1: Status  Esc: Pause";

/// Shop panel placement in screen pixels
pub const SHOP_PANEL: (i32, i32, u32, u32) = (100, 50, 600, 500);
const BUTTON_WIDTH: u32 = 200;
const BUTTON_HEIGHT: u32 = 40;
const BUTTON_GAP: i32 = 10;

/// Clickable area on a panel
#[derive(Debug, Clone, PartialEq)]
pub struct UiButton {
    pub action: GameAction,
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    pub label: String,
    pub enabled: bool,
}

impl UiButton {
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x
            && y >= self.y
            && x < self.x + self.width as i32
            && y < self.y + self.height as i32
    }
}

/// Action of the enabled button under (x, y), if any
pub fn button_at(buttons: &[UiButton], x: i32, y: i32) -> Option<GameAction> {
    buttons
        .iter()
        .find(|button| button.enabled && button.contains(x, y))
        .map(|button| button.action)
}

/// UIManager holds the UI state shared by every screen
#[derive(Debug, Clone, Default)]
pub struct UIManager {
    pub screen: UiScreen,
    /// Last feedback message, shown in the HUD
    pub status: String,
}

impl UIManager {
    pub fn new() -> Self {
        UIManager::default()
    }

    /// Opens `target`, or goes back to playing if it is already open
    pub fn toggle(&mut self, target: UiScreen) {
        self.screen = if self.screen == target {
            UiScreen::Playing
        } else {
            target
        };
    }

    /// Esc: pause while playing, otherwise return to playing
    pub fn escape(&mut self) {
        self.screen = match self.screen {
            UiScreen::Playing => UiScreen::Paused,
            _ => UiScreen::Playing,
        };
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = message.into();
    }

    /// Always-visible lines in the top-left corner
    pub fn hud_lines(&self, player: &Player) -> Vec<String> {
        let mut lines = vec![
            format!("Total Ore Value: {}", player.inventory.total_value()),
            format!("Ores: {}", player.inventory.total_count()),
            pickaxe_summary(player),
        ];
        if !self.status.is_empty() {
            lines.push(self.status.clone());
        }
        lines
    }

    pub fn inventory_panel(&self, player: &Player) -> Vec<String> {
        let mut lines = vec!["INVENTORY".to_string(), String::new()];
        lines.extend(player.inventory.summary_lines());
        lines.push(String::new());
        lines.push("Press I to close".to_string());
        lines
    }

    pub fn shop_panel(&self, shop: &Shop, player: &Player) -> Vec<String> {
        let offer = shop.pickaxe_offer(player);
        let mut lines = vec![
            "PICKAXE SHOP".to_string(),
            String::new(),
            format!("Current: {} (Power: {})", player.pickaxe.name(), offer.current_power),
        ];

        match offer.next {
            Some(next) => {
                lines.push(format!("Next: {} (Power: {})", next.properties().name, next.properties().power));
                lines.push(format!(
                    "Cost: {} (value {})",
                    shop::format_cost(&offer.recipe),
                    offer.total_value
                ));
                lines.push(if offer.affordable {
                    "[U] Upgrade available!".to_string()
                } else {
                    "[U] Not enough ore".to_string()
                });
            }
            None => lines.push("Maximum level reached!".to_string()),
        }

        lines.push(String::new());
        lines.push("UPGRADES".to_string());
        for (i, track) in UpgradeTrack::ALL.iter().enumerate() {
            lines.push(format!(
                "[{}] {} Lv {}: {} - {}",
                i + 1,
                track.name(),
                shop.level(*track),
                track.info().description,
                shop::format_cost(&shop.track_cost(*track))
            ));
        }

        lines.push(String::new());
        lines.push("Press B to close".to_string());
        lines
    }

    /// Buttons along the bottom of the shop panel
    pub fn shop_buttons(&self, shop: &Shop, player: &Player) -> Vec<UiButton> {
        let (panel_x, panel_y, _, panel_height) = SHOP_PANEL;
        let bottom = panel_y + panel_height as i32 - BUTTON_HEIGHT as i32 - BUTTON_GAP * 2;
        let row_above = bottom - BUTTON_HEIGHT as i32 - BUTTON_GAP;

        let mut buttons = vec![UiButton {
            action: GameAction::BuyPickaxe,
            x: panel_x + BUTTON_GAP * 2,
            y: row_above,
            width: BUTTON_WIDTH,
            height: BUTTON_HEIGHT,
            label: "Upgrade Pickaxe".to_string(),
            enabled: player.pickaxe.can_upgrade(),
        }];

        for (i, track) in UpgradeTrack::ALL.iter().enumerate() {
            let column = i as i32 * (BUTTON_WIDTH as i32 - BUTTON_GAP);
            buttons.push(UiButton {
                action: GameAction::BuyUpgrade(*track),
                x: panel_x + BUTTON_GAP + column,
                y: bottom,
                width: BUTTON_WIDTH - BUTTON_GAP as u32 * 2,
                height: BUTTON_HEIGHT,
                label: track.name().to_string(),
                enabled: shop.can_afford_track(*track, &player.inventory),
            });
        }

        buttons
    }

    pub fn pause_panel(&self) -> Vec<String> {
        vec!["GAME PAUSED".to_string(), "Press ESC to resume".to_string()]
    }
}

/// "Pickaxe: Wooden Pickaxe (Power: 1)"
pub fn pickaxe_summary(player: &Player) -> String {
    format!("Pickaxe: {} (Power: {})", player.pickaxe.name(), player.pickaxe.power())
}

/// Detailed pickaxe line for the info key
pub fn pickaxe_info(player: &Player) -> String {
    let pickaxe = &player.pickaxe;
    format!(
        "{} - Power: {}, Speed: {}x, Upgrade value: {}",
        pickaxe.name(),
        pickaxe.power(),
        pickaxe.speed(),
        pickaxe.upgrade_cost()
    )
}

/// Game status report for the status key
pub fn status_report(player: &Player, grid: &WorldGrid) -> Vec<String> {
    let (tx, ty) = player.tile_position(grid);
    vec![
        format!("Position: {:.0}, {:.0} (tile {}, {})", player.x, player.y, tx, ty),
        format!("Current Pickaxe: {}", player.pickaxe.name()),
        format!("Inventory Value: {}", player.inventory.total_value()),
    ]
}
