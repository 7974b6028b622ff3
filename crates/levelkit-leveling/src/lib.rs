//! # LevelKit Leveling
//!
//! Automatic surface-height probing for LevelKit: probe-grid planning,
//! probe G-code synthesis, the session state machine, and height-map
//! persistence. The G-code streaming engine that dispatches instructions and
//! reports probe completions is an external collaborator; this crate only
//! synthesizes the instruction stream and reacts to delivered reports.

pub mod gcode;
pub mod grid;
pub mod heightmap;
pub mod session;

pub use grid::{plan_grid, GridOptions};

pub use session::{ProbeSession, StartOptions, StateHandle, DEFAULT_PROBE_FEEDRATE};
