//! Trail Snake - rules engine for a pointer-steered snake
//!
//! Core modules:
//! - `sim`: Deterministic simulation (trail, collisions, levels, game state)
//! - `view`: Render-facing snapshot of a frame
//! - `settings`: Data-driven configuration and play modes

pub mod settings;
pub mod sim;
pub mod view;

pub use settings::{Playfield, PlayMode, Settings};
pub use sim::sdf::distance;
pub use view::FrameView;

/// Game configuration constants
pub mod consts {
    /// Frame rate the demo runner simulates (one tick per captured frame)
    pub const FRAME_RATE: f32 = 60.0;
    /// Seconds per simulated frame
    pub const FRAME_DT: f32 = 1.0 / FRAME_RATE;

    /// Arc-length capacity of a fresh trail
    pub const STARTING_CAPACITY: f32 = 50.0;

    /// Food placement bounds (inclusive, pixel space)
    pub const PLAYFIELD_MIN_X: f32 = 100.0;
    pub const PLAYFIELD_MAX_X: f32 = 1000.0;
    pub const PLAYFIELD_MIN_Y: f32 = 100.0;
    pub const PLAYFIELD_MAX_Y: f32 = 600.0;

    /// Signed-distance band [-t, t] that counts as the head touching its body.
    /// Tied to the rendered stroke; scale it with the coordinate units.
    pub const SELF_HIT_TOLERANCE: f32 = 1.0;

    /// Level defaults, used when a level record omits a field
    pub const DEFAULT_FOOD_SIZE: f32 = 70.0;
    pub const DEFAULT_FOOD_SCORE: u64 = 1;
    pub const DEFAULT_GROWTH_BONUS: f32 = 50.0;

    /// Timed mode budget (seconds)
    pub const TIMED_MODE_LIMIT_SECS: u32 = 60;
    /// Remaining seconds at which the HUD timer starts flashing
    pub const TIMER_URGENT_SECS: u32 = 10;
}
