//! Simulation settings
//!
//! Host-facing knobs for a trace run, persisted as JSON separately from the
//! engine. The engine never reads these itself; the host passes values in.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts;

/// Settings for one simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Maze identifier, one of the catalog names
    pub maze: String,

    /// Launch angle in degrees; the UI keeps this in [0, 180]
    pub angle_deg: f64,

    /// Canvas dimensions in pixels
    pub canvas_width: f64,
    pub canvas_height: f64,

    /// Safety bound on reflections per trace
    pub max_bounces: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            maze: "Maze 1 - Straight".to_string(),
            angle_deg: 45.0,
            canvas_width: consts::CANVAS_WIDTH,
            canvas_height: consts::CANVAS_HEIGHT,
            max_bounces: consts::MAX_BOUNCES,
        }
    }
}

impl Settings {
    /// Environment variable naming a settings JSON file
    const ENV_PATH: &'static str = "SAFETY_MAZE_SETTINGS";

    /// The launch angle clamped to the UI range [0, 180].
    ///
    /// The engine performs no clamping of its own, so hosts go through this
    /// before invoking a trace.
    pub fn clamped_angle(&self) -> f64 {
        self.angle_deg.clamp(0.0, 180.0)
    }

    /// Load settings from the file named by `SAFETY_MAZE_SETTINGS`, falling
    /// back to defaults when the variable is unset or the file unreadable.
    pub fn load() -> Self {
        let Some(path) = std::env::var_os(Self::ENV_PATH) else {
            log::info!("Using default settings");
            return Self::default();
        };

        if let Ok(json) = fs::read_to_string(&path) {
            if let Ok(settings) = serde_json::from_str(&json) {
                log::info!("Loaded settings from {}", Path::new(&path).display());
                return settings;
            }
        }

        log::warn!(
            "Could not read settings from {}, using defaults",
            Path::new(&path).display()
        );
        Self::default()
    }

    /// Best-effort save as pretty JSON
    pub fn save(&self, path: &Path) {
        if let Ok(json) = serde_json::to_string_pretty(self) {
            if fs::write(path, json).is_ok() {
                log::info!("Settings saved to {}", path.display());
            } else {
                log::warn!("Could not write settings to {}", path.display());
            }
        }
    }
}
