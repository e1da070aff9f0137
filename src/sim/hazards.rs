//! Food and obstacles for the active level

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::sdf::Rect;
use crate::settings::Playfield;

/// The single consumable on the field
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Food {
    /// Center of the food sprite
    pub pos: Vec2,
    /// Width and height, taken from the active level
    pub size: Vec2,
}

impl Food {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Hit box centered on the food
    pub fn bounds(&self) -> Rect {
        Rect::centered(self.pos, self.size)
    }

    /// Strictly inside the hit box
    pub fn is_eaten_by(&self, head: Vec2) -> bool {
        self.bounds().contains_strict(head)
    }
}

/// A static axis-aligned hazard, `(x, y, width, height)` in level files
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f32, f32, f32, f32)", into = "(f32, f32, f32, f32)")]
pub struct Obstacle(pub Rect);

impl Obstacle {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self(Rect::new(x, y, width, height))
    }

    pub fn rect(&self) -> Rect {
        self.0
    }

    /// Boundary points are not a hit
    #[inline]
    pub fn is_hit_by(&self, head: Vec2) -> bool {
        self.0.contains_strict(head)
    }
}

impl From<(f32, f32, f32, f32)> for Obstacle {
    fn from((x, y, width, height): (f32, f32, f32, f32)) -> Self {
        Self::new(x, y, width, height)
    }
}

impl From<Obstacle> for (f32, f32, f32, f32) {
    fn from(o: Obstacle) -> Self {
        (o.0.x, o.0.y, o.0.width, o.0.height)
    }
}

/// Seeded food placement, kept apart from the rest of the game logic
#[derive(Debug, Clone)]
pub struct FoodSpawner {
    rng: Pcg32,
    playfield: Playfield,
}

impl FoodSpawner {
    pub fn new(seed: u64, playfield: Playfield) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            playfield: playfield.normalized(),
        }
    }

    /// Next food center within the inclusive bounds, on whole pixels when
    /// the bounds hold one
    pub fn next_position(&mut self) -> Vec2 {
        let pf = self.playfield;
        let x = sample_axis(&mut self.rng, pf.min_x, pf.max_x);
        let y = sample_axis(&mut self.rng, pf.min_y, pf.max_y);
        Vec2::new(x, y)
    }

    /// Fresh food of the given size at a new random position
    pub fn spawn(&mut self, size: Vec2) -> Food {
        let food = Food::new(self.next_position(), size);
        log::debug!("Food spawned at ({}, {})", food.pos.x, food.pos.y);
        food
    }
}

/// Uniform coordinate in `min..=max` (ordered), preferring whole pixels
fn sample_axis(rng: &mut Pcg32, min: f32, max: f32) -> f32 {
    let (lo, hi) = (min.ceil(), max.floor());
    if lo <= hi {
        rng.random_range(lo as i32..=hi as i32) as f32
    } else if min < max {
        rng.random_range(min..=max)
    } else {
        min
    }
}
