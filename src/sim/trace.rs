//! The trace loop
//!
//! One synchronous computation per "simulate" action: cast a long ray from
//! the beam, pick the nearest wall crossing, exit or reflect, repeat until
//! the beam leaves the canvas or the bounce cap trips. Emits one
//! [`TraceRecord`] per traced segment as an explicit output; the engine
//! itself performs no I/O.

use glam::DVec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::beam::BeamState;
use super::collision::{nearest_hit, reflect, wall_normal};
use crate::catalog::{Maze, Orientation, WallSegment};
use crate::consts::{HIT_NUDGE, RAY_REACH};
use crate::dir_to_angle;

/// The simulated area, in the same pixel units as wall coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Canvas {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Inclusive containment: a point exactly on an edge counts as inside
    #[inline]
    pub fn contains(&self, p: DVec2) -> bool {
        p.x >= 0.0 && p.x <= self.width && p.y >= 0.0 && p.y <= self.height
    }

    /// Point where a ray from `origin` along `dir` crosses out of the
    /// rectangle: the smallest positive parameter against the four edges.
    /// Falls back to the ray's far endpoint when no crossing lies ahead
    /// (origin already outside).
    pub fn exit_point(&self, origin: DVec2, dir: DVec2, reach: f64) -> DVec2 {
        let mut best = f64::INFINITY;
        if dir.x != 0.0 {
            for edge_x in [0.0, self.width] {
                let t = (edge_x - origin.x) / dir.x;
                if t > 0.0 && t < best {
                    let y = origin.y + t * dir.y;
                    if (0.0..=self.height).contains(&y) {
                        best = t;
                    }
                }
            }
        }
        if dir.y != 0.0 {
            for edge_y in [0.0, self.height] {
                let t = (edge_y - origin.y) / dir.y;
                if t > 0.0 && t < best {
                    let x = origin.x + t * dir.x;
                    if (0.0..=self.width).contains(&x) {
                        best = t;
                    }
                }
            }
        }
        if best.is_finite() {
            origin + dir * best
        } else {
            origin + dir * reach
        }
    }
}

/// Contract violations. Geometric degeneracies (zero-length walls, parallel
/// rays, bounce-cap exhaustion) are never errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TraceError {
    #[error("canvas dimensions must be positive, got {width}x{height}")]
    InvalidCanvas { width: f64, height: f64 },
}

/// How a trace ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TraceOutcome {
    /// The beam left the canvas; the last path point is the exit point
    Exited,
    /// The bounce cap tripped; the last path point is the final reflection.
    /// Whether to treat such a path as incomplete is the caller's call; the
    /// engine only guarantees termination.
    BounceLimit,
}

/// One traced segment, in emission order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TraceRecord {
    /// Where this segment started
    pub origin: DVec2,
    /// Where it ended: a reflection point, or the exit point
    pub hit: DVec2,
    /// Heading into the hit, canvas-convention degrees in [0, 360)
    pub incoming_deg: f64,
    /// Heading after the bounce; `None` marks an exit segment
    pub outgoing_deg: Option<f64>,
}

/// Everything one trace produces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceResult {
    /// Start point, each reflection point in order, then the exit point (or
    /// the last reflection when the cap trips)
    pub path: Vec<DVec2>,
    pub reflections: u32,
    pub outcome: TraceOutcome,
    /// One record per traced segment, rebuilt in full on every call
    pub records: Vec<TraceRecord>,
}

/// Trace a cataloged maze. Convenience over [`trace`].
pub fn trace_maze(
    maze: &Maze,
    angle_deg: f64,
    canvas: Canvas,
    max_bounces: u32,
) -> Result<TraceResult, TraceError> {
    trace(
        maze.start,
        angle_deg,
        &maze.walls,
        canvas,
        maze.orientation,
        max_bounces,
    )
}

/// Trace a beam from `start` at the user-facing `angle_deg`, reflecting off
/// `walls` until it exits `canvas` or `max_bounces` reflections occur.
///
/// The launch angle is corrected for `orientation` before simulation; no
/// clamping is applied; callers are expected to keep it in [0, 180].
pub fn trace(
    start: DVec2,
    angle_deg: f64,
    walls: &[WallSegment],
    canvas: Canvas,
    orientation: Orientation,
    max_bounces: u32,
) -> Result<TraceResult, TraceError> {
    if canvas.width <= 0.0 || canvas.height <= 0.0 {
        return Err(TraceError::InvalidCanvas {
            width: canvas.width,
            height: canvas.height,
        });
    }

    let mut beam = BeamState::launch(start, angle_deg, orientation);
    let mut path = vec![start];
    let mut records = Vec::new();
    let mut reflections = 0u32;

    for _ in 0..max_bounces {
        let far = beam.pos + beam.dir * RAY_REACH;
        let incoming_deg = dir_to_angle(beam.dir);

        let Some(hit) = nearest_hit(beam.pos, far, walls) else {
            // Nothing ahead: the beam leaves through the canvas boundary.
            let exit = canvas.exit_point(beam.pos, beam.dir, RAY_REACH);
            path.push(exit);
            records.push(TraceRecord {
                origin: beam.pos,
                hit: exit,
                incoming_deg,
                outgoing_deg: None,
            });
            return Ok(TraceResult {
                path,
                reflections,
                outcome: TraceOutcome::Exited,
                records,
            });
        };

        if !canvas.contains(hit.point) {
            // A wall crossing beyond the canvas edge means the beam already
            // left the simulated area; record it as the exit, not a bounce.
            path.push(hit.point);
            records.push(TraceRecord {
                origin: beam.pos,
                hit: hit.point,
                incoming_deg,
                outgoing_deg: None,
            });
            return Ok(TraceResult {
                path,
                reflections,
                outcome: TraceOutcome::Exited,
                records,
            });
        }

        path.push(hit.point);
        reflections += 1;

        let origin = beam.pos;
        beam.pos = hit.point;
        beam.dir = reflect(beam.dir, wall_normal(&walls[hit.wall]));
        // Step a hair past the hit so the next cast doesn't re-detect this wall.
        beam.advance(HIT_NUDGE);

        records.push(TraceRecord {
            origin,
            hit: hit.point,
            incoming_deg,
            outgoing_deg: Some(dir_to_angle(beam.dir)),
        });
    }

    Ok(TraceResult {
        path,
        reflections,
        outcome: TraceOutcome::BounceLimit,
        records,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::consts::MAX_BOUNCES;
    use proptest::prelude::*;

    const CANVAS: Canvas = Canvas {
        width: 600.0,
        height: 500.0,
    };

    fn wall(x1: f64, y1: f64, x2: f64, y2: f64) -> WallSegment {
        WallSegment::new(DVec2::new(x1, y1), DVec2::new(x2, y2))
    }

    #[test]
    fn test_invalid_canvas_is_rejected() {
        let err = trace(
            DVec2::ZERO,
            45.0,
            &[],
            Canvas::new(600.0, 0.0),
            Orientation::Vertical,
            MAX_BOUNCES,
        )
        .unwrap_err();
        assert!(matches!(err, TraceError::InvalidCanvas { .. }));
    }

    #[test]
    fn test_empty_maze_exits_in_one_segment() {
        let start = DVec2::new(300.0, 400.0);
        let result = trace(start, 45.0, &[], CANVAS, Orientation::Vertical, MAX_BOUNCES).unwrap();
        assert_eq!(result.path.len(), 2);
        assert_eq!(result.reflections, 0);
        assert_eq!(result.outcome, TraceOutcome::Exited);
        assert_eq!(result.path[0], start);
        assert_eq!(result.records.len(), 1);
        assert_eq!(result.records[0].outgoing_deg, None);
    }

    #[test]
    fn test_single_wall_gives_three_point_path() {
        // Wall straight across the beam; launch angle 90 corrects to 90 under
        // Vertical, heading straight up from (200, 200).
        let walls = [wall(100.0, 100.0, 300.0, 100.0)];
        let result = trace(
            DVec2::new(200.0, 200.0),
            90.0,
            &walls,
            CANVAS,
            Orientation::Vertical,
            MAX_BOUNCES,
        )
        .unwrap();
        assert_eq!(result.reflections, 1);
        assert_eq!(result.path.len(), 3);
        assert_eq!(result.outcome, TraceOutcome::Exited);
        assert!(result.path[1].abs_diff_eq(DVec2::new(200.0, 100.0), 1e-9));
        // Reflected straight back down, out through the bottom edge.
        let exit = *result.path.last().unwrap();
        assert!((exit.y - CANVAS.height).abs() < 1e-9);
    }

    #[test]
    fn test_straight_maze_at_45_degrees() {
        // Start (300, 400) corrects to 135 degrees: up-left into the inner
        // corridor (x = 275..325), zig-zagging 50px per crossing until the
        // last bounce at (325, 125) clears the corridor gap and exits the top.
        let maze = catalog::lookup("Maze 1 - Straight");
        let result = trace_maze(&maze, 45.0, CANVAS, MAX_BOUNCES).unwrap();
        assert_eq!(result.path[0], maze.start);
        assert_eq!(result.outcome, TraceOutcome::Exited);
        assert_eq!(result.reflections, 6);
        assert_eq!(result.path.len() as u32, result.reflections + 2);
        assert!((result.records[0].incoming_deg - 135.0).abs() < 1e-9);
        let exit = *result.path.last().unwrap();
        assert!(exit.y.abs() < 1e-6, "expected a top-edge exit, got {exit}");
        assert!((exit.x - 200.0).abs() < 0.1);
    }

    #[test]
    fn test_bounce_cap_terminates_trapped_beam() {
        // Two facing walls spanning the full canvas height; angle 180
        // corrects to 0 under Vertical, ping-ponging horizontally forever.
        let walls = [wall(100.0, 0.0, 100.0, 500.0), wall(200.0, 0.0, 200.0, 500.0)];
        let result = trace(
            DVec2::new(150.0, 250.0),
            180.0,
            &walls,
            CANVAS,
            Orientation::Vertical,
            MAX_BOUNCES,
        )
        .unwrap();
        assert_eq!(result.outcome, TraceOutcome::BounceLimit);
        assert_eq!(result.reflections, MAX_BOUNCES);
        assert_eq!(result.path.len() as u32, MAX_BOUNCES + 1);
        assert_eq!(result.records.len() as u32, MAX_BOUNCES);
    }

    #[test]
    fn test_hit_on_canvas_edge_is_inside() {
        assert!(CANVAS.contains(DVec2::new(600.0, 250.0)));
        assert!(CANVAS.contains(DVec2::new(0.0, 0.0)));
        assert!(!CANVAS.contains(DVec2::new(600.0 + 1e-9, 250.0)));

        // A wall flush with the right edge still reflects.
        let walls = [wall(600.0, 0.0, 600.0, 500.0)];
        let result = trace(
            DVec2::new(500.0, 250.0),
            180.0,
            &walls,
            CANVAS,
            Orientation::Vertical,
            MAX_BOUNCES,
        )
        .unwrap();
        assert_eq!(result.reflections, 1);
    }

    #[test]
    fn test_wall_outside_canvas_is_an_exit() {
        let walls = [wall(700.0, 0.0, 700.0, 500.0)];
        let result = trace(
            DVec2::new(500.0, 250.0),
            180.0,
            &walls,
            CANVAS,
            Orientation::Vertical,
            MAX_BOUNCES,
        )
        .unwrap();
        assert_eq!(result.reflections, 0);
        assert_eq!(result.outcome, TraceOutcome::Exited);
        assert!(result.path.last().unwrap().abs_diff_eq(DVec2::new(700.0, 250.0), 1e-9));
    }

    #[test]
    fn test_exit_count_matches_path_length() {
        for id in catalog::names() {
            let maze = catalog::lookup(id);
            let result = trace_maze(&maze, 45.0, CANVAS, MAX_BOUNCES).unwrap();
            if result.outcome == TraceOutcome::Exited {
                assert_eq!(
                    result.path.len() as u32,
                    result.reflections + 2,
                    "{id} path/count mismatch"
                );
            }
            assert_eq!(result.records.len(), result.path.len() - 1, "{id}");
        }
    }

    #[test]
    fn test_record_stream_is_chained() {
        let maze = catalog::lookup("Maze 3A - Z Shape");
        let result = trace_maze(&maze, 60.0, CANVAS, MAX_BOUNCES).unwrap();
        for pair in result.records.windows(2) {
            // Each segment starts a nudge past the previous hit point.
            assert!(pair[0].hit.distance(pair[1].origin) < 1e-2);
            assert!(pair[0].outgoing_deg.is_some());
        }
        if result.outcome == TraceOutcome::Exited {
            assert_eq!(result.records.last().unwrap().outgoing_deg, None);
        }
    }

    proptest! {
        #[test]
        fn prop_trace_is_idempotent(angle in 0.0..=180.0f64) {
            let maze = catalog::lookup("Maze 2 - L Shape");
            let a = trace_maze(&maze, angle, CANVAS, MAX_BOUNCES).unwrap();
            let b = trace_maze(&maze, angle, CANVAS, MAX_BOUNCES).unwrap();
            prop_assert_eq!(a, b);
        }

        #[test]
        fn prop_path_always_starts_at_start(angle in 0.0..=180.0f64) {
            for id in catalog::names() {
                let maze = catalog::lookup(id);
                let result = trace_maze(&maze, angle, CANVAS, MAX_BOUNCES).unwrap();
                prop_assert_eq!(result.path[0], maze.start);
                prop_assert!(result.path.len() >= 2);
            }
        }
    }
}
