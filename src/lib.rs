//! Safety Maze - laser beam reflection in 2D labyrinths
//!
//! Core modules:
//! - `catalog`: Fixed registry of labyrinth presets (walls, start point, orientation)
//! - `sim`: Deterministic beam tracing (intersection search, reflection, termination)
//! - `settings`: Host-facing simulation settings

pub mod catalog;
pub mod settings;
pub mod sim;

pub use catalog::{Maze, Orientation, WallSegment};
pub use settings::Settings;

use glam::DVec2;

/// Simulation constants
pub mod consts {
    /// Default safety bound on reflections per trace
    pub const MAX_BOUNCES: u32 = 50;
    /// Length of the ray cast each step; far exceeds any canvas diagonal
    pub const RAY_REACH: f64 = 1000.0;
    /// Distance nudged past a hit point so the next cast doesn't re-detect the same wall
    pub const HIT_NUDGE: f64 = 1e-3;

    /// Default canvas dimensions (pixels)
    pub const CANVAS_WIDTH: f64 = 600.0;
    pub const CANVAS_HEIGHT: f64 = 500.0;
}

/// Convert a canvas-convention angle to a unit direction vector.
///
/// Canvas convention: 0 degrees points along +x and angles grow
/// counter-clockwise, with screen Y growing downward (hence the negated sine).
#[inline]
pub fn angle_to_dir(angle_deg: f64) -> DVec2 {
    let rad = angle_deg.to_radians();
    DVec2::new(rad.cos(), -rad.sin())
}

/// Heading of a direction vector in canvas-convention degrees, in [0, 360)
#[inline]
pub fn dir_to_angle(dir: DVec2) -> f64 {
    let deg = (-dir.y).atan2(dir.x).to_degrees();
    if deg < 0.0 { deg + 360.0 } else { deg }
}
