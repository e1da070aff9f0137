//! Render-facing snapshot of one frame
//!
//! The renderer draws the trail as a thick polyline with a filled head marker,
//! the food sprite centered on `food`, filled obstacle rectangles, and the
//! score/level/game-over HUD. This struct is everything it needs.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::settings::PlayMode;
use crate::sim::hazards::{Food, Obstacle};
use crate::sim::level::LevelManager;
use crate::sim::state::GameState;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameView {
    /// Tail first
    pub trail: Vec<Vec2>,
    pub head: Option<Vec2>,
    pub food: Food,
    pub obstacles: Vec<Obstacle>,
    pub score: u64,
    pub high_score: u64,
    /// 1-based, as shown on the HUD
    pub level: usize,
    pub level_count: usize,
    pub game_over: bool,
    /// Countdown for timed mode
    pub seconds_left: Option<u32>,
    /// Countdown is low enough to flash
    pub timer_urgent: bool,
}

impl FrameView {
    pub fn capture(state: &GameState, levels: &LevelManager, mode: PlayMode, elapsed_secs: f32) -> Self {
        let seconds_left = mode.remaining_secs(elapsed_secs);
        Self {
            trail: state.trail.to_vec(),
            head: state.trail.head(),
            food: state.food,
            obstacles: levels.current().obstacles.clone(),
            score: state.score,
            high_score: state.high_score,
            level: levels.current_index() + 1,
            level_count: levels.len(),
            game_over: state.game_over,
            // Frozen at zero once the game is over
            seconds_left: seconds_left.map(|s| if state.game_over { 0 } else { s }),
            timer_urgent: !state.game_over && mode.is_urgent(elapsed_secs),
        }
    }

    /// HUD lines in draw order
    pub fn hud_lines(&self) -> Vec<String> {
        if self.game_over {
            return vec![
                "Game Over".to_string(),
                format!("Your Score: {}", self.score),
                format!("High Score: {}", self.high_score),
            ];
        }

        let mut lines = vec![
            format!("Score: {}", self.score),
            format!("High Score: {}", self.high_score),
            format!("Level: {}", self.level),
        ];
        if let Some(left) = self.seconds_left {
            lines.push(format!("Time Left: {}s", left));
        }
        lines
    }
}
