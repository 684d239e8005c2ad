/// Collision detection against the tile grid
///
/// Moving things are axis-aligned boxes in world pixels. The world is a grid of
/// tiles, so a box collides when any tile it covers is solid.
///
/// # Architecture
///
/// - `Aabb`: a box in world space (`f32`, top-left origin)
/// - `Collidable` trait: anything that can report its current box
/// - `tile_span` / `overlaps_solid`: pure functions mapping a box onto the grid
///
/// Movement is all-or-nothing: the caller builds the box at the candidate
/// position and rejects the whole move if it overlaps anything solid.
use crate::world::WorldGrid;

/// Keeps a box flush against a tile edge from counting the next tile
const EDGE_EPSILON: f32 = 0.001;

/// Axis-aligned bounding box in world pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Aabb {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Aabb { x, y, width, height }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Same size, moved to a new top-left corner
    pub fn at(&self, x: f32, y: f32) -> Aabb {
        Aabb { x, y, ..*self }
    }
}

/// Trait for things that occupy space in the world.
///
/// # Example
///
/// ```ignore
/// impl Collidable for Player {
///     fn bounds(&self) -> Aabb {
///         Aabb::new(self.x, self.y, self.size, self.size)
///     }
/// }
/// ```
pub trait Collidable {
    /// The box at the current position
    fn bounds(&self) -> Aabb;
}

/// Inclusive tile ranges `((min_x, max_x), (min_y, max_y))` covered by a box.
///
/// The right and bottom edges are pulled in by a tiny epsilon so a box whose
/// edge sits exactly on a tile boundary does not reach into the next tile.
pub fn tile_span(bounds: &Aabb, tile_size: f32) -> ((i32, i32), (i32, i32)) {
    let min_x = (bounds.x / tile_size).floor() as i32;
    let max_x = ((bounds.right() - EDGE_EPSILON) / tile_size).floor() as i32;
    let min_y = (bounds.y / tile_size).floor() as i32;
    let max_y = ((bounds.bottom() - EDGE_EPSILON) / tile_size).floor() as i32;

    ((min_x, max_x.max(min_x)), (min_y, max_y.max(min_y)))
}

/// Whether any tile under the box is solid.
///
/// Tiles outside the grid count as solid, so this also keeps boxes inside the
/// world.
pub fn overlaps_solid(bounds: &Aabb, grid: &WorldGrid) -> bool {
    let ((min_x, max_x), (min_y, max_y)) = tile_span(bounds, grid.tile_size);

    (min_y..=max_y).any(|y| (min_x..=max_x).any(|x| grid.is_solid(x, y)))
}
