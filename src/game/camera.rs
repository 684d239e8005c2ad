// Camera that eases toward the player and stays inside the world

use crate::world::WorldGrid;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// World position of the view's top-left corner
    pub x: f32,
    pub y: f32,
    pub view_width: f32,
    pub view_height: f32,
    /// Fraction of the remaining distance covered per second
    pub speed: f32,
}

impl Camera {
    pub fn new(view_width: f32, view_height: f32, speed: f32) -> Self {
        Camera {
            x: 0.0,
            y: 0.0,
            view_width,
            view_height,
            speed,
        }
    }

    /// Jumps straight to `target` (a world point to centre on)
    pub fn center_on(&mut self, target: (f32, f32), world_size: (f32, f32)) {
        self.x = target.0 - self.view_width / 2.0;
        self.y = target.1 - self.view_height / 2.0;
        self.clamp_to(world_size);
    }

    /// Moves part of the way toward centring on `target`
    pub fn follow(&mut self, target: (f32, f32), world_size: (f32, f32), delta_time: f32) {
        let goal_x = target.0 - self.view_width / 2.0;
        let goal_y = target.1 - self.view_height / 2.0;
        let t = (self.speed * delta_time).clamp(0.0, 1.0);

        self.x += (goal_x - self.x) * t;
        self.y += (goal_y - self.y) * t;
        self.clamp_to(world_size);
    }

    fn clamp_to(&mut self, world_size: (f32, f32)) {
        let max_x = (world_size.0 - self.view_width).max(0.0);
        let max_y = (world_size.1 - self.view_height).max(0.0);
        self.x = self.x.clamp(0.0, max_x);
        self.y = self.y.clamp(0.0, max_y);
    }

    pub fn world_to_screen(&self, world_x: f32, world_y: f32) -> (i32, i32) {
        ((world_x - self.x).round() as i32, (world_y - self.y).round() as i32)
    }

    /// Inclusive tile rectangle `(min_x, min_y, max_x, max_y)` touching the view
    pub fn visible_tile_range(&self, grid: &WorldGrid) -> (i32, i32, i32, i32) {
        let (min_x, min_y) = grid.world_to_tile(self.x, self.y);
        let (max_x, max_y) = grid.world_to_tile(self.x + self.view_width, self.y + self.view_height);

        (
            min_x.max(0),
            min_y.max(0),
            max_x.min(grid.width as i32 - 1),
            max_y.min(grid.height as i32 - 1),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::TileKind;

    const WORLD: (f32, f32) = (3200.0, 1600.0);

    #[test]
    fn test_center_on_clamps_to_world() {
        let mut camera = Camera::new(800.0, 600.0, 3.0);
        camera.center_on((100.0, 100.0), WORLD);
        assert_eq!((camera.x, camera.y), (0.0, 0.0));

        camera.center_on((3200.0, 1600.0), WORLD);
        assert_eq!((camera.x, camera.y), (2400.0, 1000.0));

        camera.center_on((1600.0, 800.0), WORLD);
        assert_eq!((camera.x, camera.y), (1200.0, 500.0));
    }

    #[test]
    fn test_follow_eases_toward_target() {
        let mut camera = Camera::new(800.0, 600.0, 3.0);
        camera.follow((1400.0, 300.0), WORLD, 0.1);
        // Goal x is 1000; 30% of the way there
        assert!((camera.x - 300.0).abs() < 0.01);
        assert_eq!(camera.y, 0.0);

        // A huge step never overshoots
        camera.follow((1400.0, 300.0), WORLD, 10.0);
        assert!((camera.x - 1000.0).abs() < 0.01);
    }

    #[test]
    fn test_visible_tile_range() {
        let grid = WorldGrid::new(100, 50, 32.0, TileKind::Stone);
        let mut camera = Camera::new(800.0, 600.0, 3.0);
        assert_eq!(camera.visible_tile_range(&grid), (0, 0, 25, 18));

        camera.center_on((3200.0, 1600.0), grid.pixel_size());
        assert_eq!(camera.visible_tile_range(&grid), (75, 31, 99, 49));
    }

    #[test]
    fn test_world_to_screen_offsets_by_camera() {
        let mut camera = Camera::new(800.0, 600.0, 3.0);
        camera.center_on((1600.0, 800.0), WORLD);
        assert_eq!(camera.world_to_screen(1200.0, 500.0), (0, 0));
        assert_eq!(camera.world_to_screen(1210.0, 520.0), (10, 20));
    }
}
