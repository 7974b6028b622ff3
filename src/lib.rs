//! # LevelKit
//!
//! Automatic surface-height probing for motion-controlled machines:
//! - Probe-grid planning over a rectangular region
//! - Probe G-code synthesis for an external streaming engine
//! - A probe-session state machine reacting to engine-reported completions
//! - Height-map persistence with tolerant parsing
//!
//! ## Architecture
//!
//! LevelKit is organized as a workspace with multiple crates:
//!
//! 1. **levelkit-core** - Core types, errors, session states, events
//! 2. **levelkit-leveling** - Grid planner, G-code synthesis, probe session,
//!    height-map store
//! 3. **levelkit** - Facade crate and the height-map inspection binary
//!
//! The G-code execution engine, the transport to firmware, and any UI are
//! external collaborators; LevelKit neither dispatches instructions nor
//! applies the measured map.

pub use levelkit_core::{
    Error, EventDispatcher, GridError, HeightmapError, LevelingState, ProbeEvent, ProbePoint,
    ProbedSample, Result, SessionState,
};

pub use levelkit_leveling::{
    gcode, grid, heightmap, plan_grid, GridOptions, ProbeSession, StartOptions, StateHandle,
    DEFAULT_PROBE_FEEDRATE,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
