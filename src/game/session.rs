// GameSession: owns the whole game state and advances it
//
// The front-end feeds it one `MoveInput` per frame plus discrete
// `GameAction`s, then reads back the world, player, camera and UI text to
// draw. Everything runs on the loop thread.

use crate::config::GameConfig;
use crate::input::{GameAction, MoveInput};
use crate::player::{MiningReport, Player};
use crate::shop::{Shop, ShopError, UpgradeTrack};
use crate::world::{self, MineOutcome, WorldGrid};
use tracing::{debug, info};

use super::ui_manager::{self, UIManager};
use super::{Camera, FloatingTextInstance, UiScreen};

/// Row the player spawns in; the top rows are always open sky
const SPAWN_ROW: i32 = 1;

pub struct GameSession {
    pub world: WorldGrid,
    pub player: Player,
    pub shop: Shop,
    pub camera: Camera,
    pub ui: UIManager,
    pub floating_texts: Vec<FloatingTextInstance>,
    seed: u64,
    max_frame_delta: f32,
    running: bool,
}

impl GameSession {
    /// Generates the world from `seed` and places the player at the surface
    pub fn new(config: &GameConfig, seed: u64) -> Self {
        let world = world::generate_world(&config.world, seed);
        let spawn_column = world.width as i32 / 2;
        let player = Player::spawn_at_tile(&world, spawn_column, SPAWN_ROW, &config.player);

        let window = &config.window;
        let mut camera = Camera::new(window.width as f32, window.height as f32, window.camera_speed);
        camera.center_on(player_center(&player), world.pixel_size());

        info!(seed, x = player.x, y = player.y, "game session started");

        GameSession {
            world,
            player,
            shop: Shop::new(),
            camera,
            ui: UIManager::new(),
            floating_texts: Vec::new(),
            seed,
            max_frame_delta: window.max_frame_delta,
            running: true,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn screen(&self) -> UiScreen {
        self.ui.screen
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Dispatches one discrete action
    ///
    /// Mining only happens while playing, and purchases only while the shop
    /// is open.
    pub fn handle_action(&mut self, action: GameAction) {
        debug!(?action, screen = ?self.ui.screen, "action");

        match action {
            GameAction::Mine => {
                if self.ui.screen == UiScreen::Playing {
                    self.mine();
                }
            }
            GameAction::ToggleInventory => self.ui.toggle(UiScreen::Inventory),
            GameAction::ToggleShop => self.ui.toggle(UiScreen::Shop),
            GameAction::Pause => self.ui.escape(),
            GameAction::BuyPickaxe => {
                if self.ui.screen == UiScreen::Shop {
                    self.buy_pickaxe();
                }
            }
            GameAction::BuyUpgrade(track) => {
                if self.ui.screen == UiScreen::Shop {
                    self.buy_upgrade(track);
                }
            }
            GameAction::ShowPickaxeInfo => {
                let text = ui_manager::pickaxe_info(&self.player);
                info!("{}", text);
                self.ui.set_status(text);
            }
            GameAction::ShowStatus => {
                let report = ui_manager::status_report(&self.player, &self.world);
                for line in &report {
                    info!("{}", line);
                }
                self.ui.set_status(report.join(" | "));
            }
            GameAction::Quit => {
                info!("quit requested");
                self.running = false;
            }
        }
    }

    /// Advances one frame
    pub fn update(&mut self, delta_time: f32, input: MoveInput) {
        // min/max instead of clamp: a bad limit must not panic the loop
        let delta_time = delta_time.min(self.max_frame_delta).max(0.0);

        if self.ui.screen == UiScreen::Playing {
            self.player.update(delta_time, input, &self.world);
        }

        for text in self.floating_texts.iter_mut() {
            text.update(delta_time);
        }
        self.floating_texts.retain(|text| !text.is_expired());

        self.camera.follow(player_center(&self.player), self.world.pixel_size(), delta_time);
    }

    fn mine(&mut self) {
        let Some(report) = self.player.try_mine(&mut self.world) else {
            return;
        };
        self.report_mining(&report);
    }

    fn report_mining(&mut self, report: &MiningReport) {
        let message = match report.outcome {
            MineOutcome::NothingThere => "Nothing to mine here!".to_string(),
            MineOutcome::Unbreakable => "Bedrock is too hard to mine!".to_string(),
            MineOutcome::TooWeak { required, .. } => {
                format!("Pickaxe too weak to mine this block! (needs power {})", required)
            }
            MineOutcome::Mined { ore: Some(ore), .. } => format!("Mined {} ore!", ore),
            MineOutcome::Mined { ore: None, .. } => "Block mined successfully!".to_string(),
        };
        debug!(tile = ?report.target, "{}", message);
        self.ui.set_status(message);

        if let Some(amount) = report.collected {
            let (x, y) = self.world.tile_center(report.target.0, report.target.1);
            let text = format!("+{} {}", amount.quantity, amount.ore.name().to_uppercase());
            self.floating_texts
                .push(FloatingTextInstance::new(x, y, text, amount.ore.color()));
            info!(
                ore = %amount.ore,
                quantity = amount.quantity,
                total = self.player.inventory.count(amount.ore),
                "ore collected"
            );
        }
    }

    fn buy_pickaxe(&mut self) {
        let message = match self.shop.buy_pickaxe(&mut self.player) {
            Ok(_) => format!("Pickaxe upgraded to {}!", self.player.pickaxe.name()),
            Err(ShopError::MaxTier) => "Pickaxe is already at maximum level!".to_string(),
            Err(err) => err.to_string(),
        };
        self.ui.set_status(message);
    }

    fn buy_upgrade(&mut self, track: UpgradeTrack) {
        let message = match self.shop.buy_upgrade(track, &mut self.player) {
            Ok(level) => format!("{} upgraded to level {}!", track, level),
            Err(err) => err.to_string(),
        };
        self.ui.set_status(message);
    }

    /// Status, HUD and panel text for the current screen
    pub fn overlay_lines(&self) -> Vec<String> {
        match self.ui.screen {
            UiScreen::Playing => Vec::new(),
            UiScreen::Inventory => self.ui.inventory_panel(&self.player),
            UiScreen::Shop => self.ui.shop_panel(&self.shop, &self.player),
            UiScreen::Paused => self.ui.pause_panel(),
        }
    }

    pub fn hud_lines(&self) -> Vec<String> {
        self.ui.hud_lines(&self.player)
    }
}

fn player_center(player: &Player) -> (f32, f32) {
    (player.x + player.size / 2.0, player.y + player.size / 2.0)
}
