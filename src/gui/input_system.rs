use ore_miner::game::ui_manager::{self, UiButton};
use ore_miner::input::{GameAction, InputContext, MoveInput};
use ore_miner::shop::UpgradeTrack;
use sdl2::event::Event;
use sdl2::keyboard::{KeyboardState, Keycode, Scancode};
use sdl2::mouse::MouseButton;
use sdl2::EventPump;

/// InputSystem processes SDL2 events and produces GameActions
///
/// This system decouples raw input (keyboard, mouse) from game logic.
/// It translates SDL2 events into high-level GameAction commands that
/// the game loop can process.
///
/// # Architecture
///
/// Input processing happens in phases:
/// 1. The game loop sets the current InputContext from the open screen
/// 2. Poll SDL2 events
/// 3. Filter events based on context
/// 4. Translate events to GameActions
/// 5. Return actions to game loop for execution
///
/// Held movement keys are read separately each frame with [`move_input`].
pub struct InputSystem {
    /// Current input context
    pub context: InputContext,
}

impl InputSystem {
    /// Creates a new InputSystem starting in Playing context
    pub fn new() -> Self {
        InputSystem {
            context: InputContext::Playing,
        }
    }

    pub fn set_context(&mut self, context: InputContext) {
        self.context = context;
    }

    /// Process SDL2 events and return list of actions to handle
    ///
    /// `buttons` are the clickable buttons currently on screen; a left click
    /// on an enabled one produces its action.
    pub fn poll_events(&self, event_pump: &mut EventPump, buttons: &[UiButton]) -> Vec<GameAction> {
        let mut actions = Vec::new();

        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => {
                    actions.push(GameAction::Quit);
                }
                Event::KeyDown {
                    keycode: Some(key),
                    repeat: false,
                    ..
                } => {
                    if let Some(action) = map_key(self.context, key) {
                        actions.push(action);
                    }
                }
                Event::MouseButtonDown {
                    mouse_btn: MouseButton::Left,
                    x,
                    y,
                    ..
                } => {
                    if let Some(action) = ui_manager::button_at(buttons, x, y) {
                        actions.push(action);
                    }
                }
                _ => {
                    // Ignore other event types
                }
            }
        }

        actions
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}

/// Translates one key press for the given context
pub fn map_key(context: InputContext, key: Keycode) -> Option<GameAction> {
    match context {
        InputContext::Playing => playing_key(key),
        InputContext::Inventory => match key {
            Keycode::I | Keycode::Escape => Some(GameAction::ToggleInventory),
            _ => None,
        },
        InputContext::Shop => shop_key(key),
        InputContext::Paused => match key {
            Keycode::Escape => Some(GameAction::Pause),
            _ => None,
        },
    }
}

/// Keys during normal gameplay
fn playing_key(key: Keycode) -> Option<GameAction> {
    match key {
        Keycode::Space => Some(GameAction::Mine),
        Keycode::I => Some(GameAction::ToggleInventory),
        Keycode::B => Some(GameAction::ToggleShop),
        Keycode::P => Some(GameAction::ShowPickaxeInfo),
        Keycode::F1 => Some(GameAction::ShowStatus),
        Keycode::Escape => Some(GameAction::Pause),
        _ => None,
    }
}

/// Keys when the shop is open
fn shop_key(key: Keycode) -> Option<GameAction> {
    let hotkey = match key {
        Keycode::B | Keycode::Escape => return Some(GameAction::ToggleShop),
        Keycode::U | Keycode::Return => return Some(GameAction::BuyPickaxe),
        Keycode::Num1 => 1,
        Keycode::Num2 => 2,
        Keycode::Num3 => 3,
        _ => return None,
    };
    UpgradeTrack::from_hotkey(hotkey).map(GameAction::BuyUpgrade)
}

/// Held movement keys (WASD or arrows)
pub fn move_input(keyboard: &KeyboardState) -> MoveInput {
    let held = |a: Scancode, b: Scancode| keyboard.is_scancode_pressed(a) || keyboard.is_scancode_pressed(b);
    MoveInput {
        up: held(Scancode::W, Scancode::Up),
        down: held(Scancode::S, Scancode::Down),
        left: held(Scancode::A, Scancode::Left),
        right: held(Scancode::D, Scancode::Right),
    }
}
