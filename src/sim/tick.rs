//! Per-frame game update
//!
//! One tick consumes one externally tracked head position and advances the
//! game state, collisions and level progression deterministically.

use glam::Vec2;

use super::collision::evaluate;
use super::level::LevelManager;
use super::state::{GameEvent, GameState};

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Tracked pointer position; `None` when the tracker lost it this frame
    pub head: Option<Vec2>,
    /// Restart the session from the first level
    pub restart: bool,
    /// Timed mode budget ran out
    pub time_up: bool,
}

impl TickInput {
    pub fn head(pos: Vec2) -> Self {
        Self {
            head: Some(pos),
            ..Default::default()
        }
    }
}

/// Advance the game by one frame
pub fn tick(state: &mut GameState, levels: &mut LevelManager, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if input.restart {
        full_reset(state, levels);
        events.push(GameEvent::Restarted);
        return events;
    }

    if input.time_up && !state.game_over {
        state.force_game_over();
        events.push(GameEvent::TimeUp);
        log::info!("Time up with score {}", state.score);
    }

    // Game over freezes the trail; only the view changes
    if state.game_over {
        return events;
    }

    if let Some(head) = input.head {
        state.trail.advance(head);
        evaluate(state, levels.current(), &mut events);
    }

    if !state.game_over && levels.is_level_completed(state.score) {
        if levels.advance() {
            state.partial_reset(levels.current().food_size);
            let level = levels.current_index() + 1;
            events.push(GameEvent::LevelUp { level });
            log::info!("Level {} reached with score {}", level, state.score);
        } else {
            state.force_game_over();
            events.push(GameEvent::AllLevelsCleared);
            log::info!("All {} levels cleared with score {}", levels.len(), state.score);
        }
    }

    events
}

/// Restart from the first level with a zero score; the high score survives
pub fn full_reset(state: &mut GameState, levels: &mut LevelManager) {
    levels.reset();
    state.reset(true, levels.current().food_size);
    log::info!("Game restarted (high score {})", state.high_score);
}
