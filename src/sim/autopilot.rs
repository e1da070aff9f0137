//! Scripted pointer for demo/attract mode
//!
//! Stands in for the hand tracker: glides toward the food at a bounded speed,
//! weaving a little so runs don't trace perfect straight lines, and sidesteps
//! obstacles in its path.

use glam::Vec2;

use super::level::Level;
use super::sdf::Rect;
use super::state::GameState;

/// Clearance kept from obstacle edges
const OBSTACLE_MARGIN: f32 = 12.0;

#[derive(Debug, Clone)]
pub struct Autopilot {
    pos: Vec2,
    /// Pixels per tick
    speed: f32,
    ticks: u32,
}

impl Autopilot {
    pub fn new(start: Vec2, speed: f32) -> Self {
        Self {
            pos: start,
            speed: speed.max(1.0),
            ticks: 0,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.pos
    }

    /// Next head position, chasing the current food
    pub fn steer(&mut self, state: &GameState, level: &Level) -> Vec2 {
        self.ticks = self.ticks.wrapping_add(1);

        let to_food = state.food.pos - self.pos;
        let mut dir = to_food.normalize_or_zero();
        if dir == Vec2::ZERO {
            dir = Vec2::X;
        }

        // Weave: oscillating sideways offset, fading out close to the food
        let t = self.ticks as f32 * 0.05;
        let weave = (t.sin() * 0.35 + (t * 0.7).sin() * 0.15) * (to_food.length() / 200.0).min(1.0);
        dir = (dir + dir.perp() * weave).normalize_or_zero();

        let mut next = self.pos + dir * self.speed;
        if blocked(next, level) {
            // Try both sidesteps, then backing off
            next = [dir.perp(), -dir.perp(), -dir]
                .into_iter()
                .map(|d| self.pos + d * self.speed)
                .find(|&p| !blocked(p, level))
                .unwrap_or(next);
        }

        self.pos = next;
        next
    }
}

fn blocked(p: Vec2, level: &Level) -> bool {
    level.obstacles.iter().any(|o| {
        let r = o.rect();
        Rect::new(
            r.x - OBSTACLE_MARGIN,
            r.y - OBSTACLE_MARGIN,
            r.width + 2.0 * OBSTACLE_MARGIN,
            r.height + 2.0 * OBSTACLE_MARGIN,
        )
        .contains_strict(p)
    })
}
