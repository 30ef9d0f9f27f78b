//! Safety Maze entry point
//!
//! Stand-in for the presentation front-ends: loads settings, traces every
//! cataloged maze at the configured launch angle, and dumps the configured
//! maze's trace records as JSON lines, the structured record stream a GUI
//! would render as lines and dots.

use safety_maze::sim::{Canvas, trace_maze};
use safety_maze::{Settings, catalog};

fn main() {
    env_logger::init();
    log::info!("Safety Maze starting...");

    let settings = Settings::load();
    let canvas = Canvas::new(settings.canvas_width, settings.canvas_height);
    let angle = settings.clamped_angle();

    for id in catalog::names() {
        let maze = catalog::lookup(id);
        match trace_maze(&maze, angle, canvas, settings.max_bounces) {
            Ok(result) => log::info!(
                "{id}: {} reflections ({:?}), {} path points",
                result.reflections,
                result.outcome,
                result.path.len()
            ),
            Err(e) => log::error!("{id}: {e}"),
        }
    }

    // Full record stream for the configured maze, one JSON object per segment.
    let maze = catalog::lookup(&settings.maze);
    match trace_maze(&maze, angle, canvas, settings.max_bounces) {
        Ok(result) => {
            println!(
                "{} @ {angle} deg: {} reflections",
                settings.maze, result.reflections
            );
            for record in &result.records {
                match serde_json::to_string(record) {
                    Ok(line) => println!("{line}"),
                    Err(e) => log::error!("record serialization failed: {e}"),
                }
            }
        }
        Err(e) => log::error!("trace failed: {e}"),
    }
}
