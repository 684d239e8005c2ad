//! SDL2 front-end
//!
//! Everything that touches SDL2 lives here; the game itself is driven
//! through `ore_miner::game::GameSession`.
//!
//! - [`input_system`]: SDL events and keyboard state to `GameAction`s / `MoveInput`
//! - [`render`]: draws a session each frame
//! - [`text`]: 5x7 bitmap font

pub mod input_system;
pub mod render;
pub mod text;

pub use input_system::InputSystem;
