//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per externally supplied head position
//! - Seeded RNG only (food placement)
//! - No rendering, tracking or wall-clock dependencies

pub mod autopilot;
pub mod collision;
pub mod hazards;
pub mod level;
pub mod sdf;
pub mod state;
pub mod tick;
pub mod trail;

pub use autopilot::Autopilot;
pub use collision::{CollisionResult, Contacts, detect, evaluate};
pub use hazards::{Food, FoodSpawner, Obstacle};
pub use level::{Level, LevelManager, default_levels};
pub use sdf::{Rect, distance, distance_to_segment, point_in_polygon, sd_polygon};
pub use state::{GameEvent, GameState};
pub use tick::{TickInput, full_reset, tick};
pub use trail::Trail;
