//! Game state and core simulation types
//!
//! Everything that survives between ticks lives here, owned by the game loop.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::hazards::{Food, FoodSpawner};
use super::trail::Trail;
use crate::settings::Settings;

/// Something that happened during a tick, for HUD/audio/logging collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Food eaten; carries the new score
    AteFood { score: u64 },
    /// Head touched the body outline
    HitSelf,
    /// Head entered the obstacle at this index in the level's list
    HitObstacle { index: usize },
    /// Moved to this level (1-based)
    LevelUp { level: usize },
    /// Target of the final level reached
    AllLevelsCleared,
    /// Timed mode budget exhausted
    TimeUp,
    /// Full reset performed
    Restarted,
}

/// Score, trail and food for one play session
#[derive(Debug, Clone)]
pub struct GameState {
    pub trail: Trail,
    pub food: Food,
    pub score: u64,
    /// Best score seen by this process; never cleared by resets
    pub high_score: u64,
    pub game_over: bool,
    /// Signed-distance band for self-collision
    pub self_hit_tolerance: f32,
    spawner: FoodSpawner,
}

impl GameState {
    /// Fresh game; `food_size` comes from the first level
    pub fn new(settings: &Settings, seed: u64, food_size: Vec2) -> Self {
        let mut spawner = FoodSpawner::new(seed, settings.playfield);
        let food = spawner.spawn(food_size);
        Self {
            trail: Trail::new(settings.starting_capacity),
            food,
            score: 0,
            high_score: 0,
            game_over: false,
            self_hit_tolerance: settings.self_hit_tolerance,
            spawner,
        }
    }

    /// Move the food somewhere new, resized for the active level
    pub fn respawn_food(&mut self, size: Vec2) {
        self.food = self.spawner.spawn(size);
    }

    /// Apply one food event: new food, longer trail, more points
    pub fn consume_food(&mut self, food_score: u64, growth_bonus: f32, next_size: Vec2) {
        self.respawn_food(next_size);
        self.trail.grow(growth_bonus);
        self.score += food_score;
        log::debug!(
            "Food eaten: score {}, capacity {}",
            self.score,
            self.trail.max_length()
        );
    }

    pub fn update_high_score(&mut self) {
        self.high_score = self.high_score.max(self.score);
    }

    /// End the session. Idempotent.
    pub fn force_game_over(&mut self) {
        self.update_high_score();
        self.game_over = true;
    }

    /// Clear trail and food, optionally the score, and resume play
    pub fn reset(&mut self, reset_score: bool, food_size: Vec2) {
        self.trail.clear();
        if reset_score {
            self.score = 0;
        }
        self.game_over = false;
        self.respawn_food(food_size);
    }

    /// Level advance: score and high score carry over
    pub fn partial_reset(&mut self, food_size: Vec2) {
        self.reset(false, food_size);
    }
}
