//! Game settings and play modes
//!
//! Loaded from an optional JSON file; any missing field falls back to its
//! default when the document is parsed.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::level::{Level, LevelManager, default_levels};

/// Inclusive bounds for food placement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            min_x: PLAYFIELD_MIN_X,
            max_x: PLAYFIELD_MAX_X,
            min_y: PLAYFIELD_MIN_Y,
            max_y: PLAYFIELD_MAX_Y,
        }
    }
}

impl Playfield {
    /// Bounds with min/max swapped back into order
    pub fn normalized(self) -> Self {
        Self {
            min_x: self.min_x.min(self.max_x),
            max_x: self.min_x.max(self.max_x),
            min_y: self.min_y.min(self.max_y),
            max_y: self.min_y.max(self.max_y),
        }
    }
}

/// How a session ends besides collisions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayMode {
    /// Play until a collision or the last level is cleared
    Endless,
    /// Also ends when the wall-clock budget runs out
    Timed { limit_secs: u32 },
}

impl Default for PlayMode {
    fn default() -> Self {
        PlayMode::Timed {
            limit_secs: TIMED_MODE_LIMIT_SECS,
        }
    }
}

impl PlayMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayMode::Endless => "Endless",
            PlayMode::Timed { .. } => "Timed",
        }
    }

    /// Whole seconds left, `None` in endless mode
    pub fn remaining_secs(&self, elapsed_secs: f32) -> Option<u32> {
        match *self {
            PlayMode::Endless => None,
            PlayMode::Timed { limit_secs } => {
                let elapsed = elapsed_secs.max(0.0).floor() as u32;
                Some(limit_secs.saturating_sub(elapsed))
            }
        }
    }

    pub fn is_expired(&self, elapsed_secs: f32) -> bool {
        self.remaining_secs(elapsed_secs) == Some(0)
    }

    /// Low on time; the HUD flashes the countdown
    pub fn is_urgent(&self, elapsed_secs: f32) -> bool {
        self.remaining_secs(elapsed_secs)
            .is_some_and(|left| left <= TIMER_URGENT_SECS)
    }
}

/// Game configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Food placement seed; `None` lets the runner pick one
    pub seed: Option<u64>,
    /// Trail arc-length capacity at the start of every level
    pub starting_capacity: f32,
    pub playfield: Playfield,
    /// Self-collision band half-width, in the trail's coordinate units
    pub self_hit_tolerance: f32,
    pub mode: PlayMode,
    /// Ordered level table
    pub levels: Vec<Level>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            starting_capacity: STARTING_CAPACITY,
            playfield: Playfield::default(),
            self_hit_tolerance: SELF_HIT_TOLERANCE,
            mode: PlayMode::default(),
            levels: default_levels(),
        }
    }
}

impl Settings {
    /// Parse a JSON document
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Settings>(json).map(Settings::sanitized)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    return settings;
                }
                Err(e) => log::warn!("Invalid settings in {}: {}", path.display(), e),
            },
            Err(e) => log::warn!("Cannot read {}: {}", path.display(), e),
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Clamp values that would break the game rather than just make it odd
    fn sanitized(mut self) -> Self {
        self.playfield = self.playfield.normalized();
        if self.starting_capacity < 0.0 {
            log::warn!("Negative starting capacity {}, using 0", self.starting_capacity);
            self.starting_capacity = 0.0;
        }
        if self.self_hit_tolerance < 0.0 {
            self.self_hit_tolerance = self.self_hit_tolerance.abs();
        }
        self
    }

    /// Level manager over the configured table, or the built-in one if empty
    pub fn level_manager(&self) -> LevelManager {
        LevelManager::new(self.levels.clone()).unwrap_or_else(|| {
            log::warn!("Empty level table, using built-in levels");
            LevelManager::default()
        })
    }
}
