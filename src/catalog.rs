//! Labyrinth presets
//!
//! A fixed, read-only registry of named mazes. Each entry carries its wall
//! segments (in registration order, which breaks nearest-hit distance ties),
//! the beam start point, and the layout orientation that drives launch-angle
//! correction. The identifier set is closed (it feeds a dropdown), so an
//! unknown id degrades to an empty maze instead of failing.

use std::sync::OnceLock;

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// How a maze's corridors are laid out on the canvas.
///
/// Drives the launch-angle correction applied before tracing (see
/// [`crate::sim::corrected_angle`]). Every preset declares exactly one
/// orientation so the same correction applies consistently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Orientation {
    /// Corridors run vertically; the beam enters through the bottom edge
    #[default]
    Vertical,
    /// Corridors run horizontally; the beam enters from the side
    Horizontal,
}

/// A straight, finite wall defined by two endpoints in canvas pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WallSegment {
    pub a: DVec2,
    pub b: DVec2,
}

impl WallSegment {
    pub fn new(a: DVec2, b: DVec2) -> Self {
        Self { a, b }
    }

    /// Squared length; zero for degenerate segments
    #[inline]
    pub fn length_squared(&self) -> f64 {
        self.a.distance_squared(self.b)
    }
}

/// A named, fixed collection of walls plus a beam start point and orientation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Maze {
    pub id: String,
    pub walls: Vec<WallSegment>,
    pub start: DVec2,
    pub orientation: Orientation,
}

impl Maze {
    /// Stand-in for unknown identifiers: no walls, start at the canvas
    /// origin (0,0). Tracing it renders nothing and exits immediately.
    pub fn empty() -> Self {
        Self {
            id: String::new(),
            walls: Vec::new(),
            start: DVec2::ZERO,
            orientation: Orientation::Vertical,
        }
    }
}

/// Identifiers of all cataloged mazes, in display order
pub fn names() -> [&'static str; 6] {
    [
        "Maze 1 - Straight",
        "Maze 2 - L Shape",
        "Maze 3A - Z Shape",
        "Maze 3B - U Shape",
        "Maze 4A - Snake Shape",
        "Maze 4B - Stair Shape",
    ]
}

/// Look up a maze by identifier.
///
/// Unknown identifiers return [`Maze::empty`] rather than an error: the id
/// always originates from a closed dropdown of known values, so an
/// unrecognized one renders nothing instead of aborting the host.
pub fn lookup(id: &str) -> Maze {
    catalog()
        .iter()
        .find(|m| m.id == id)
        .cloned()
        .unwrap_or_else(Maze::empty)
}

/// The registry, built once on first access and immutable afterwards
fn catalog() -> &'static [Maze] {
    static CATALOG: OnceLock<Vec<Maze>> = OnceLock::new();
    CATALOG.get_or_init(build_catalog).as_slice()
}

fn wall(x1: f64, y1: f64, x2: f64, y2: f64) -> WallSegment {
    WallSegment::new(DVec2::new(x1, y1), DVec2::new(x2, y2))
}

fn build_catalog() -> Vec<Maze> {
    vec![
        Maze {
            id: "Maze 1 - Straight".to_string(),
            walls: vec![
                wall(175.0, 100.0, 275.0, 100.0),
                wall(325.0, 100.0, 425.0, 100.0),
                wall(175.0, 100.0, 175.0, 400.0),
                wall(275.0, 100.0, 275.0, 400.0),
                wall(325.0, 100.0, 325.0, 400.0),
                wall(175.0, 400.0, 275.0, 400.0),
                wall(425.0, 100.0, 425.0, 400.0),
                wall(325.0, 400.0, 425.0, 400.0),
            ],
            start: DVec2::new(300.0, 400.0),
            orientation: Orientation::Vertical,
        },
        Maze {
            id: "Maze 2 - L Shape".to_string(),
            walls: vec![
                wall(150.0, 50.0, 150.0, 100.0),
                wall(150.0, 50.0, 450.0, 50.0),
                wall(150.0, 150.0, 150.0, 400.0),
                wall(150.0, 100.0, 400.0, 100.0),
                wall(150.0, 150.0, 350.0, 150.0),
                wall(400.0, 100.0, 400.0, 400.0),
                wall(350.0, 150.0, 350.0, 400.0),
                wall(150.0, 400.0, 350.0, 400.0),
                wall(450.0, 50.0, 450.0, 400.0),
                wall(400.0, 400.0, 450.0, 400.0),
            ],
            start: DVec2::new(375.0, 400.0),
            orientation: Orientation::Vertical,
        },
        Maze {
            id: "Maze 3A - Z Shape".to_string(),
            walls: vec![
                wall(100.0, 50.0, 400.0, 50.0),
                wall(100.0, 50.0, 100.0, 400.0),
                wall(450.0, 50.0, 500.0, 50.0),
                wall(400.0, 50.0, 400.0, 200.0),
                wall(150.0, 200.0, 400.0, 200.0),
                wall(150.0, 200.0, 150.0, 400.0),
                wall(450.0, 50.0, 450.0, 250.0),
                wall(200.0, 250.0, 450.0, 250.0),
                wall(200.0, 250.0, 200.0, 400.0),
                wall(100.0, 400.0, 150.0, 400.0),
                wall(500.0, 50.0, 500.0, 400.0),
                wall(200.0, 400.0, 500.0, 400.0),
            ],
            start: DVec2::new(175.0, 400.0),
            orientation: Orientation::Vertical,
        },
        Maze {
            id: "Maze 3B - U Shape".to_string(),
            walls: vec![
                wall(100.0, 400.0, 150.0, 400.0),
                wall(200.0, 400.0, 400.0, 400.0),
                wall(150.0, 100.0, 150.0, 400.0),
                wall(150.0, 100.0, 450.0, 100.0),
                wall(450.0, 100.0, 450.0, 400.0),
                wall(200.0, 150.0, 200.0, 400.0),
                wall(200.0, 150.0, 400.0, 150.0),
                wall(400.0, 150.0, 400.0, 400.0),
                wall(100.0, 50.0, 100.0, 400.0),
                wall(100.0, 50.0, 500.0, 50.0),
                wall(500.0, 50.0, 500.0, 400.0),
                wall(450.0, 400.0, 500.0, 400.0),
            ],
            start: DVec2::new(175.0, 400.0),
            orientation: Orientation::Vertical,
        },
        Maze {
            id: "Maze 4A - Snake Shape".to_string(),
            walls: vec![
                wall(100.0, 50.0, 100.0, 300.0),
                wall(100.0, 350.0, 100.0, 400.0),
                wall(100.0, 300.0, 200.0, 300.0),
                wall(200.0, 300.0, 200.0, 100.0),
                wall(200.0, 100.0, 400.0, 100.0),
                wall(400.0, 100.0, 400.0, 300.0),
                wall(400.0, 300.0, 500.0, 300.0),
                wall(100.0, 350.0, 250.0, 350.0),
                wall(250.0, 350.0, 250.0, 150.0),
                wall(250.0, 150.0, 350.0, 150.0),
                wall(350.0, 150.0, 350.0, 350.0),
                wall(350.0, 350.0, 500.0, 350.0),
                wall(500.0, 50.0, 500.0, 300.0),
                wall(100.0, 50.0, 500.0, 50.0),
                wall(100.0, 400.0, 500.0, 400.0),
                wall(500.0, 350.0, 500.0, 400.0),
            ],
            start: DVec2::new(100.0, 325.0),
            orientation: Orientation::Horizontal,
        },
        Maze {
            id: "Maze 4B - Stair Shape".to_string(),
            walls: vec![
                wall(150.0, 50.0, 150.0, 300.0),
                wall(150.0, 50.0, 500.0, 50.0),
                wall(150.0, 350.0, 150.0, 400.0),
                wall(150.0, 300.0, 250.0, 300.0),
                wall(250.0, 300.0, 250.0, 200.0),
                wall(250.0, 200.0, 350.0, 200.0),
                wall(350.0, 200.0, 350.0, 100.0),
                wall(350.0, 100.0, 500.0, 100.0),
                wall(150.0, 350.0, 300.0, 350.0),
                wall(300.0, 350.0, 300.0, 250.0),
                wall(300.0, 250.0, 400.0, 250.0),
                wall(400.0, 250.0, 400.0, 150.0),
                wall(400.0, 150.0, 500.0, 150.0),
                wall(500.0, 50.0, 500.0, 100.0),
                wall(150.0, 400.0, 500.0, 400.0),
                wall(500.0, 150.0, 500.0, 400.0),
            ],
            start: DVec2::new(150.0, 325.0),
            orientation: Orientation::Horizontal,
        },
    ]
}
