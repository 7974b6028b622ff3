//! # LevelKit Core
//!
//! Core types, errors, and events for LevelKit.
//! Provides the fundamental abstractions for probe targets, measured
//! samples, the leveling aggregate, and the session state machine.

pub mod data;
pub mod error;
pub mod event;

pub use data::{LevelingState, ProbePoint, ProbedSample, SessionState};

pub use error::{Error, GridError, HeightmapError, Result};

pub use event::{EventDispatcher, ProbeEvent};
