/// Backend-independent RGB colour
///
/// The library only describes what colour things are; the front-end converts
/// this into whatever its graphics library wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Scales every channel by `factor` (clamped to 0.0..=1.0)
    pub fn darken(self, factor: f32) -> Self {
        let keep = factor.clamp(0.0, 1.0);
        let scale = |c: u8| (c as f32 * keep) as u8;
        Rgb::new(scale(self.r), scale(self.g), scale(self.b))
    }
}
