//! Ray/wall intersection and reflection response
//!
//! The beam is advanced by casting a long segment from its current position,
//! testing it against every wall with the parametric line-segment
//! intersection, and keeping the nearest crossing. Reflection is the standard
//! specular formula about the wall's unit normal.

use glam::DVec2;

use crate::catalog::WallSegment;

/// Nearest wall crossing for one cast ray
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Intersection point
    pub point: DVec2,
    /// Squared distance from the ray origin
    pub dist_sq: f64,
    /// Index of the struck wall, in registration order
    pub wall: usize,
}

/// Intersection of the segment `origin..far` with `wall`.
///
/// Parametric test: a crossing is real only when both parameters `ua` (along
/// the ray) and `ub` (along the wall) lie in [0, 1]. A zero cross-product
/// denominator means the segments are parallel (or the wall is degenerate)
/// and yields no hit.
pub fn segment_hit(origin: DVec2, far: DVec2, wall: &WallSegment) -> Option<DVec2> {
    let r = far - origin;
    let s = wall.b - wall.a;
    let denom = r.perp_dot(s);
    if denom == 0.0 {
        return None;
    }
    let diff = wall.a - origin;
    let ua = diff.perp_dot(s) / denom;
    let ub = diff.perp_dot(r) / denom;
    if (0.0..=1.0).contains(&ua) && (0.0..=1.0).contains(&ub) {
        Some(origin + r * ua)
    } else {
        None
    }
}

/// Nearest intersecting wall along the cast ray, if any.
///
/// Only a strictly smaller squared distance replaces the current candidate,
/// so when two walls cross the ray at the same point (a shared vertex, say)
/// the earliest-registered wall wins.
pub fn nearest_hit(origin: DVec2, far: DVec2, walls: &[WallSegment]) -> Option<Hit> {
    let mut nearest: Option<Hit> = None;
    for (i, wall) in walls.iter().enumerate() {
        if let Some(point) = segment_hit(origin, far, wall) {
            let dist_sq = origin.distance_squared(point);
            if nearest.is_none_or(|h| dist_sq < h.dist_sq) {
                nearest = Some(Hit {
                    point,
                    dist_sq,
                    wall: i,
                });
            }
        }
    }
    nearest
}

/// Unit normal of a wall segment: `(-dy, dx)` normalized.
///
/// Callers must screen out degenerate walls first; the intersection test
/// already does, so no zero-length wall reaches a reflection.
#[inline]
pub fn wall_normal(wall: &WallSegment) -> DVec2 {
    let d = wall.b - wall.a;
    DVec2::new(-d.y, d.x).normalize()
}

/// Specular reflection: `d' = d - 2(d.n)n`.
///
/// Norm-preserving given a unit direction and unit normal.
#[inline]
pub fn reflect(dir: DVec2, normal: DVec2) -> DVec2 {
    dir - 2.0 * dir.dot(normal) * normal
}
