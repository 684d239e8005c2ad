// Shared enums and helper structs used throughout the game

use crate::color::Rgb;

/// Seconds a floating text stays on screen
pub const FLOATING_TEXT_LIFETIME: f32 = 1.0;

/// Pixels per second a floating text rises
const FLOATING_TEXT_RISE: f32 = 20.0;

/// Which screen is currently shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiScreen {
    #[default]
    Playing,
    Inventory,
    Shop,
    Paused,
}

/// Floating text instance for tracking animated text
#[derive(Debug, Clone, PartialEq)]
pub struct FloatingTextInstance {
    /// World position of the text's centre
    pub x: f32,
    pub y: f32,
    pub text: String,
    pub color: Rgb,
    pub lifetime: f32,
    pub max_lifetime: f32,
}

impl FloatingTextInstance {
    pub fn new(x: f32, y: f32, text: String, color: Rgb) -> Self {
        FloatingTextInstance {
            x,
            y,
            text,
            color,
            lifetime: 0.0,
            max_lifetime: FLOATING_TEXT_LIFETIME,
        }
    }

    /// Rise and age by one frame
    pub fn update(&mut self, delta_time: f32) {
        self.lifetime += delta_time;
        self.y -= FLOATING_TEXT_RISE * delta_time;
    }

    pub fn is_expired(&self) -> bool {
        self.lifetime >= self.max_lifetime
    }

    /// Opacity from 255 (new) down to 0 (expired)
    pub fn alpha(&self) -> u8 {
        let remaining = (1.0 - self.lifetime / self.max_lifetime).clamp(0.0, 1.0);
        (remaining * 255.0) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floating_text_rises_and_fades() {
        let mut text = FloatingTextInstance::new(10.0, 100.0, "+1 COPPER".to_string(), Rgb::WHITE);
        assert_eq!(text.alpha(), 255);

        text.update(0.5);
        assert_eq!(text.y, 90.0);
        assert_eq!(text.alpha(), 127);
        assert!(!text.is_expired());

        text.update(0.5);
        assert!(text.is_expired());
        assert_eq!(text.alpha(), 0);
    }
}
