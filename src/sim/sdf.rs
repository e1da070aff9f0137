//! Distance and containment primitives
//!
//! Signed distances follow the polygon-test convention: positive inside,
//! negative outside, magnitude is the distance to the nearest edge.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (b - a).length()
}

/// Distance from `p` to the closed segment `a`-`b`
pub fn distance_to_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let seg = b - a;
    let len_sq = seg.length_squared();

    if len_sq < 1e-8 {
        // Degenerate segment
        return distance(p, a);
    }

    let t = ((p - a).dot(seg) / len_sq).clamp(0.0, 1.0);
    let closest = a + seg * t;
    distance(p, closest)
}

/// Even-odd ray casting test. Fewer than three vertices never enclose anything.
pub fn point_in_polygon(p: Vec2, polygon: &[Vec2]) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let vi = polygon[i];
        let vj = polygon[j];
        if (vi.y > p.y) != (vj.y > p.y) {
            let x_cross = (vj.x - vi.x) * (p.y - vi.y) / (vj.y - vi.y) + vi.x;
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Signed distance from `p` to the closed polygon through `polygon`
///
/// The closing edge from the last vertex back to the first is included.
/// An empty polygon is infinitely far away.
pub fn sd_polygon(p: Vec2, polygon: &[Vec2]) -> f32 {
    let n = polygon.len();
    if n == 0 {
        return f32::NEG_INFINITY;
    }

    let mut min_dist = f32::MAX;
    for i in 0..n {
        let a = polygon[i];
        let b = polygon[(i + 1) % n];
        min_dist = min_dist.min(distance_to_segment(p, a, b));
    }

    if min_dist == 0.0 {
        return 0.0;
    }
    if point_in_polygon(p, polygon) {
        min_dist
    } else {
        -min_dist
    }
}

/// Axis-aligned rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle of `size` centered on `center`
    pub fn centered(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self::new(center.x - half.x, center.y - half.y, size.x, size.y)
    }

    /// Strict containment: points on the boundary are outside
    #[inline]
    pub fn contains_strict(&self, p: Vec2) -> bool {
        self.x < p.x && p.x < self.x + self.width && self.y < p.y && p.y < self.y + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Vec2> {
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
        ]
    }

    #[test]
    fn test_distance() {
        assert!((distance(Vec2::new(0.0, 0.0), Vec2::new(3.0, 4.0)) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_distance_to_segment() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, 0.0);
        // Perpendicular foot inside the segment
        assert!((distance_to_segment(Vec2::new(5.0, 3.0), a, b) - 3.0).abs() < 1e-6);
        // Beyond the end clamps to the endpoint
        assert!((distance_to_segment(Vec2::new(13.0, 4.0), a, b) - 5.0).abs() < 1e-6);
        // Degenerate segment
        assert!((distance_to_segment(Vec2::new(0.0, 2.0), a, a) - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_point_in_polygon() {
        let poly = square();
        assert!(point_in_polygon(Vec2::new(5.0, 5.0), &poly));
        assert!(!point_in_polygon(Vec2::new(15.0, 5.0), &poly));
        assert!(!point_in_polygon(Vec2::new(5.0, 5.0), &poly[..2]));
    }

    #[test]
    fn test_sd_polygon_sign() {
        let poly = square();
        // Inside: positive, distance to nearest edge
        assert!((sd_polygon(Vec2::new(5.0, 2.0), &poly) - 2.0).abs() < 1e-6);
        // Outside: negative
        assert!((sd_polygon(Vec2::new(13.0, 5.0), &poly) + 3.0).abs() < 1e-6);
        // On a vertex or edge: zero
        assert_eq!(sd_polygon(Vec2::new(0.0, 0.0), &poly), 0.0);
        assert_eq!(sd_polygon(Vec2::new(10.0, 5.0), &poly), 0.0);
    }

    #[test]
    fn test_sd_polygon_degenerate() {
        // Single vertex: distance to the point, always outside
        let single = [Vec2::new(1.0, 1.0)];
        assert!((sd_polygon(Vec2::new(4.0, 5.0), &single) + 5.0).abs() < 1e-6);
        // Two vertices: a segment traversed twice
        let line = [Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0)];
        assert!((sd_polygon(Vec2::new(5.0, 1.0), &line) + 1.0).abs() < 1e-6);
        assert_eq!(sd_polygon(Vec2::ZERO, &[]), f32::NEG_INFINITY);
    }

    #[test]
    fn test_rect_contains_strict() {
        let rect = Rect::new(200.0, 200.0, 50.0, 50.0);
        assert!(rect.contains_strict(Vec2::new(210.0, 210.0)));
        assert!(!rect.contains_strict(Vec2::new(200.0, 210.0)));
        assert!(!rect.contains_strict(Vec2::new(250.0, 225.0)));
        assert!(!rect.contains_strict(Vec2::new(260.0, 225.0)));
    }

    #[test]
    fn test_rect_centered() {
        let rect = Rect::centered(Vec2::new(100.0, 100.0), Vec2::new(70.0, 70.0));
        assert_eq!(rect, Rect::new(65.0, 65.0, 70.0, 70.0));
        // Zero size never contains anything
        let empty = Rect::centered(Vec2::new(100.0, 100.0), Vec2::ZERO);
        assert!(!empty.contains_strict(Vec2::new(100.0, 100.0)));
    }
}
