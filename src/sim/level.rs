//! Level table and progression
//!
//! Levels are immutable records; the manager only moves an index forward
//! through them, or back to the start on a full reset.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::hazards::Obstacle;
use crate::consts::*;

/// Scoring, growth and hazard parameters for one level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    /// Score needed to leave this level
    pub target_score: u64,
    /// Points per food eaten
    #[serde(default = "default_food_score")]
    pub food_score: u64,
    /// Trail capacity added per food eaten
    #[serde(default = "default_growth_bonus")]
    pub growth_bonus: f32,
    #[serde(default)]
    pub obstacles: Vec<Obstacle>,
    /// Food hit box while this level is active
    #[serde(default = "default_food_size")]
    pub food_size: Vec2,
}

fn default_food_score() -> u64 {
    DEFAULT_FOOD_SCORE
}

fn default_growth_bonus() -> f32 {
    DEFAULT_GROWTH_BONUS
}

fn default_food_size() -> Vec2 {
    Vec2::splat(DEFAULT_FOOD_SIZE)
}

impl Level {
    pub fn new(target_score: u64) -> Self {
        Self {
            target_score,
            food_score: DEFAULT_FOOD_SCORE,
            growth_bonus: DEFAULT_GROWTH_BONUS,
            obstacles: Vec::new(),
            food_size: default_food_size(),
        }
    }

    pub fn with_food_score(mut self, food_score: u64) -> Self {
        self.food_score = food_score;
        self
    }

    pub fn with_growth_bonus(mut self, growth_bonus: f32) -> Self {
        self.growth_bonus = growth_bonus;
        self
    }

    pub fn with_obstacles(mut self, obstacles: Vec<Obstacle>) -> Self {
        self.obstacles = obstacles;
        self
    }

    pub fn with_food_size(mut self, width: f32, height: f32) -> Self {
        self.food_size = Vec2::new(width, height);
        self
    }
}

/// Built-in progression: rising targets, shrinking food, smaller growth, more obstacles
pub fn default_levels() -> Vec<Level> {
    vec![
        Level::new(10)
            .with_growth_bonus(50.0)
            .with_food_size(70.0, 70.0),
        Level::new(25)
            .with_growth_bonus(40.0)
            .with_obstacles(vec![Obstacle::new(300.0, 300.0, 50.0, 50.0)])
            .with_food_size(60.0, 60.0),
        Level::new(50)
            .with_growth_bonus(30.0)
            .with_obstacles(vec![
                Obstacle::new(200.0, 200.0, 70.0, 70.0),
                Obstacle::new(500.0, 500.0, 50.0, 50.0),
            ])
            .with_food_size(50.0, 50.0),
        Level::new(100)
            .with_growth_bonus(20.0)
            .with_obstacles(vec![
                Obstacle::new(100.0, 100.0, 100.0, 100.0),
                Obstacle::new(400.0, 400.0, 60.0, 60.0),
                Obstacle::new(700.0, 300.0, 80.0, 80.0),
            ])
            .with_food_size(45.0, 45.0),
    ]
}

/// Position within a fixed, non-empty level table
#[derive(Debug, Clone)]
pub struct LevelManager {
    levels: Vec<Level>,
    current: usize,
}

impl LevelManager {
    /// `None` for an empty table
    pub fn new(levels: Vec<Level>) -> Option<Self> {
        if levels.is_empty() {
            return None;
        }
        Some(Self { levels, current: 0 })
    }

    pub fn current(&self) -> &Level {
        &self.levels[self.current]
    }

    /// 0-based index of the active level
    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Always false; the table is never empty
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn is_final(&self) -> bool {
        self.current + 1 == self.levels.len()
    }

    pub fn is_level_completed(&self, score: u64) -> bool {
        score >= self.current().target_score
    }

    /// Move to the next level; `false` when already on the last one
    pub fn advance(&mut self) -> bool {
        if self.is_final() {
            return false;
        }
        self.current += 1;
        true
    }

    pub fn reset(&mut self) {
        self.current = 0;
    }
}

impl Default for LevelManager {
    fn default() -> Self {
        Self {
            levels: default_levels(),
            current: 0,
        }
    }
}
