// Game module - Contains all game logic and state management
//
// This module contains:
// - session.rs: GameSession, which owns the world, player and shop
// - camera.rs: Camera following the player
// - types.rs: Shared enums and helper structs
// - ui_manager.rs: UI state and the text blocks the front-end draws

pub mod camera;
pub mod session;
pub mod types;
pub mod ui_manager;

// Re-export types for convenience
pub use camera::Camera;
pub use session::GameSession;
pub use types::*;
pub use ui_manager::UIManager;
