//! Collision detection for the snake head
//!
//! Three independent checks run every frame: food, the snake's own body, and
//! the level's obstacles. Detection is pure (`detect`); `evaluate` applies the
//! outcome to the game state.

use glam::Vec2;

use super::hazards::Food;
use super::level::Level;
use super::sdf::sd_polygon;
use super::state::{GameEvent, GameState};
use super::trail::Trail;

/// Points nearest the head left out of the body outline, so the segment
/// right behind the head never counts as a hit
const NECK_POINTS: usize = 2;

/// Most significant outcome of a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionResult {
    None,
    AteFood,
    HitSelf,
    HitObstacle,
}

/// Raw results of all three checks for one head position
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Contacts {
    pub ate_food: bool,
    pub hit_self: bool,
    /// Index of the first obstacle containing the head
    pub hit_obstacle: Option<usize>,
}

impl Contacts {
    /// Self/obstacle hits end the game
    pub fn is_fatal(&self) -> bool {
        self.hit_self || self.hit_obstacle.is_some()
    }

    /// Fatal hits outrank food
    pub fn result(&self) -> CollisionResult {
        if self.hit_self {
            CollisionResult::HitSelf
        } else if self.hit_obstacle.is_some() {
            CollisionResult::HitObstacle
        } else if self.ate_food {
            CollisionResult::AteFood
        } else {
            CollisionResult::None
        }
    }
}

/// Signed distance from the head to the outline of the older body points,
/// or `None` if the trail is too short to form one
pub fn body_distance(trail: &Trail) -> Option<f32> {
    if trail.len() <= NECK_POINTS {
        return None;
    }
    let head = trail.head()?;
    let body: Vec<Vec2> = trail.points().take(trail.len() - NECK_POINTS).collect();
    Some(sd_polygon(head, &body))
}

/// Run all three checks against the trail's head
pub fn detect(trail: &Trail, food: &Food, level: &Level, tolerance: f32) -> Contacts {
    let Some(head) = trail.head() else {
        return Contacts::default();
    };

    let ate_food = food.is_eaten_by(head);

    let hit_self = body_distance(trail).is_some_and(|d| (-tolerance..=tolerance).contains(&d));

    let hit_obstacle = level.obstacles.iter().position(|o| o.is_hit_by(head));

    Contacts {
        ate_food,
        hit_self,
        hit_obstacle,
    }
}

/// Detect and apply this frame's collisions
///
/// Food is applied even when a fatal hit lands on the same frame.
pub fn evaluate(state: &mut GameState, level: &Level, events: &mut Vec<GameEvent>) -> CollisionResult {
    let contacts = detect(&state.trail, &state.food, level, state.self_hit_tolerance);

    if contacts.ate_food {
        state.consume_food(level.food_score, level.growth_bonus, level.food_size);
        events.push(GameEvent::AteFood { score: state.score });
    }

    if contacts.hit_self {
        events.push(GameEvent::HitSelf);
    }
    if let Some(index) = contacts.hit_obstacle {
        events.push(GameEvent::HitObstacle { index });
    }

    if contacts.is_fatal() {
        state.force_game_over();
        log::info!(
            "Game over ({:?}) with score {}, high score {}",
            contacts.result(),
            state.score,
            state.high_score
        );
    }

    contacts.result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::hazards::Obstacle;

    fn trail_through(points: &[[f32; 2]], capacity: f32) -> Trail {
        let mut trail = Trail::new(capacity);
        for &p in points {
            trail.advance(Vec2::from(p));
        }
        trail
    }

    /// State with food parked far from the test paths
    fn state_with_trail(trail: Trail) -> GameState {
        let mut state = GameState::new(&Settings::default(), 99, Vec2::splat(70.0));
        state.food = Food::new(Vec2::new(900.0, 550.0), Vec2::splat(70.0));
        state.trail = trail;
        state
    }

    #[test]
    fn test_self_collision_on_closed_loop() {
        // Loop around a 40x20 box, head back on the starting corner
        let trail = trail_through(
            &[
                [100.0, 100.0],
                [120.0, 100.0],
                [140.0, 100.0],
                [140.0, 120.0],
                [120.0, 120.0],
                [100.0, 120.0],
                [100.0, 100.0],
            ],
            500.0,
        );
        let mut state = state_with_trail(trail);
        let mut events = Vec::new();

        let result = evaluate(&mut state, &Level::new(10), &mut events);
        assert_eq!(result, CollisionResult::HitSelf);
        assert!(state.game_over);
        assert_eq!(events, vec![GameEvent::HitSelf]);
    }

    #[test]
    fn test_straight_line_is_not_self_collision() {
        let trail = trail_through(
            &[[100.0, 100.0], [120.0, 100.0], [140.0, 100.0], [160.0, 100.0]],
            500.0,
        );
        let contacts = detect(&trail, &Food::new(Vec2::ZERO, Vec2::ZERO), &Level::new(10), 1.0);
        assert!(!contacts.hit_self);
        // Body is the segment 100..120; head is 40 px past its end
        assert!((body_distance(&trail).unwrap() + 40.0).abs() < 1e-4);
    }

    #[test]
    fn test_short_trail_skips_self_check() {
        let trail = trail_through(&[[100.0, 100.0], [100.0, 100.0]], 500.0);
        assert!(body_distance(&trail).is_none());
        let contacts = detect(&trail, &Food::new(Vec2::ZERO, Vec2::ZERO), &Level::new(10), 1.0);
        assert_eq!(contacts, Contacts::default());
    }

    #[test]
    fn test_empty_trail_detects_nothing() {
        let trail = Trail::new(50.0);
        let level = Level::new(10).with_obstacles(vec![Obstacle::new(0.0, 0.0, 10.0, 10.0)]);
        let food = Food::new(Vec2::ZERO, Vec2::splat(70.0));
        assert_eq!(detect(&trail, &food, &level, 1.0).result(), CollisionResult::None);
    }

    #[test]
    fn test_tolerance_band() {
        // Square body, head 3 px outside its left edge
        let trail = trail_through(
            &[
                [100.0, 100.0],
                [140.0, 100.0],
                [140.0, 140.0],
                [100.0, 140.0],
                [97.0, 130.0],
                [97.0, 120.0],
            ],
            500.0,
        );
        let d = body_distance(&trail).unwrap();
        assert!((d + 3.0).abs() < 1e-4);

        let food = Food::new(Vec2::ZERO, Vec2::ZERO);
        assert!(!detect(&trail, &food, &Level::new(10), 1.0).hit_self);
        assert!(detect(&trail, &food, &Level::new(10), 6.0).hit_self);
    }

    #[test]
    fn test_obstacle_collision() {
        let trail = trail_through(&[[210.0, 210.0]], 50.0);
        let level = Level::new(10).with_obstacles(vec![Obstacle::new(200.0, 200.0, 50.0, 50.0)]);
        let mut state = state_with_trail(trail);
        state.score = 4;
        let mut events = Vec::new();

        let result = evaluate(&mut state, &level, &mut events);
        assert_eq!(result, CollisionResult::HitObstacle);
        assert!(state.game_over);
        assert_eq!(state.high_score, 4);
        assert_eq!(events, vec![GameEvent::HitObstacle { index: 0 }]);
    }

    #[test]
    fn test_first_matching_obstacle_reported() {
        let trail = trail_through(&[[410.0, 410.0]], 50.0);
        let level = Level::new(10).with_obstacles(vec![
            Obstacle::new(100.0, 100.0, 50.0, 50.0),
            Obstacle::new(400.0, 400.0, 60.0, 60.0),
            Obstacle::new(405.0, 405.0, 20.0, 20.0),
        ]);
        let food = Food::new(Vec2::ZERO, Vec2::ZERO);
        assert_eq!(detect(&trail, &food, &level, 1.0).hit_obstacle, Some(1));
    }

    #[test]
    fn test_eating_food_scores_and_grows() {
        let trail = trail_through(&[[500.0, 300.0]], 50.0);
        let level = Level::new(10).with_food_score(2).with_growth_bonus(40.0);
        let mut state = state_with_trail(trail);
        state.food = Food::new(Vec2::new(505.0, 295.0), Vec2::splat(70.0));
        let mut events = Vec::new();

        let result = evaluate(&mut state, &level, &mut events);
        assert_eq!(result, CollisionResult::AteFood);
        assert_eq!(state.score, 2);
        assert_eq!(state.trail.max_length(), 90.0);
        assert!(!state.game_over);
        assert_eq!(events, vec![GameEvent::AteFood { score: 2 }]);
    }

    #[test]
    fn test_food_and_obstacle_same_frame() {
        let trail = trail_through(&[[310.0, 310.0]], 50.0);
        let level = Level::new(10).with_obstacles(vec![Obstacle::new(300.0, 300.0, 50.0, 50.0)]);
        let mut state = state_with_trail(trail);
        state.food = Food::new(Vec2::new(310.0, 310.0), Vec2::splat(70.0));
        let mut events = Vec::new();

        let result = evaluate(&mut state, &level, &mut events);
        assert_eq!(result, CollisionResult::HitObstacle);
        assert_eq!(state.score, 1);
        assert_eq!(state.high_score, 1);
        assert!(state.game_over);
        assert_eq!(
            events,
            vec![GameEvent::AteFood { score: 1 }, GameEvent::HitObstacle { index: 0 }]
        );
    }
}
