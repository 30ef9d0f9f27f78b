//! Deterministic beam simulation
//!
//! All tracing logic lives here. This module must be pure and deterministic:
//! - One synchronous computation per call, no hidden state between calls
//! - Stable wall iteration order (registration order breaks distance ties)
//! - No rendering, I/O, or platform dependencies

pub mod beam;
pub mod collision;
pub mod trace;

pub use beam::{BeamState, corrected_angle, launch_dir};
pub use collision::{Hit, nearest_hit, reflect, segment_hit, wall_normal};
pub use trace::{
    Canvas, TraceError, TraceOutcome, TraceRecord, TraceResult, trace, trace_maze,
};
