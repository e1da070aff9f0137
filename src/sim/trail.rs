//! Arc-length bounded trail of head positions
//!
//! Points are stored oldest (tail) first. `segments[i]` is the distance from
//! `points[i]` to `points[i + 1]`, so there is always one fewer segment than
//! points. When the summed length exceeds the capacity, whole segments are
//! dropped from the tail end until it fits or only the head is left.

use std::collections::VecDeque;

use glam::Vec2;

use super::sdf::distance;

#[derive(Debug, Clone)]
pub struct Trail {
    points: VecDeque<Vec2>,
    segments: VecDeque<f32>,
    /// Running sum of `segments`, kept wide so add/subtract cycles don't drift
    total_length: f64,
    max_length: f32,
    /// Capacity restored by `clear`
    starting_capacity: f32,
}

impl Trail {
    pub fn new(starting_capacity: f32) -> Self {
        Self {
            points: VecDeque::new(),
            segments: VecDeque::new(),
            total_length: 0.0,
            max_length: starting_capacity,
            starting_capacity,
        }
    }

    /// Append a new head and trim the tail back under capacity
    pub fn advance(&mut self, new_head: Vec2) {
        if let Some(&prev) = self.points.back() {
            let len = distance(prev, new_head);
            self.segments.push_back(len);
            self.total_length += f64::from(len);
        }
        self.points.push_back(new_head);

        while self.total_length > f64::from(self.max_length) && self.points.len() > 1 {
            self.points.pop_front();
            if let Some(len) = self.segments.pop_front() {
                self.total_length -= f64::from(len);
            }
        }

        if self.segments.is_empty() {
            self.total_length = 0.0;
        }
    }

    /// Raise the capacity; applied on the next `advance`
    pub fn grow(&mut self, bonus: f32) {
        self.max_length += bonus;
    }

    /// Most recently advanced point
    pub fn head(&self) -> Option<Vec2> {
        self.points.back().copied()
    }

    /// Points from tail to head
    pub fn points(&self) -> impl ExactSizeIterator<Item = Vec2> + '_ {
        self.points.iter().copied()
    }

    /// Contiguous copy of the points, tail first
    pub fn to_vec(&self) -> Vec<Vec2> {
        self.points.iter().copied().collect()
    }

    /// Per-segment lengths, tail first
    pub fn segments(&self) -> impl ExactSizeIterator<Item = f32> + '_ {
        self.segments.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn total_length(&self) -> f32 {
        self.total_length as f32
    }

    pub fn max_length(&self) -> f32 {
        self.max_length
    }

    /// Empty the trail and restore the starting capacity
    pub fn clear(&mut self) {
        self.points.clear();
        self.segments.clear();
        self.total_length = 0.0;
        self.max_length = self.starting_capacity;
    }
}

impl Default for Trail {
    fn default() -> Self {
        Self::new(crate::consts::STARTING_CAPACITY)
    }
}
