//! Probe session state machine
//!
//! Orchestrates one leveling run: consumes planned targets, synthesizes the
//! instruction stream for the external streaming engine, and reacts to the
//! engine's probe reports to build the height map and detect completion.
//!
//! The session never dispatches instructions and never blocks on the
//! probe-report path; file I/O is confined to the session-boundary
//! `load_heightmap`/`save_heightmap` helpers. Callers must serialize session
//! lifecycles: a new `start` unconditionally discards in-flight state.

use crate::{gcode, heightmap};
use levelkit_core::{
    EventDispatcher, LevelingState, ProbeEvent, ProbePoint, ProbedSample, SessionState,
};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

/// Default probe-approach feedrate (units/min)
pub const DEFAULT_PROBE_FEEDRATE: f64 = 20.0;

/// Options for one leveling run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartOptions {
    /// Ordered probe targets, normally from [`crate::grid::plan_grid`]
    pub positions: Vec<ProbePoint>,
    /// Feedrate for XY positioning moves; omitted from the synthesized
    /// instructions when absent
    pub feedrate: Option<f64>,
    /// Feedrate for probe-approach moves
    pub probe_feedrate: f64,
    /// Safe clearance height to retract to between targets
    pub start_z: f64,
    /// Height to probe toward
    pub end_z: f64,
}

impl StartOptions {
    /// Create options with default feedrates and heights
    pub fn new(positions: Vec<ProbePoint>) -> Self {
        Self {
            positions,
            feedrate: None,
            probe_feedrate: DEFAULT_PROBE_FEEDRATE,
            start_z: 0.0,
            end_z: 0.0,
        }
    }

    /// Builder method to set the XY positioning feedrate
    pub fn with_feedrate(mut self, feedrate: f64) -> Self {
        self.feedrate = Some(feedrate);
        self
    }

    /// Builder method to set the probe-approach feedrate
    pub fn with_probe_feedrate(mut self, probe_feedrate: f64) -> Self {
        self.probe_feedrate = probe_feedrate;
        self
    }

    /// Builder method to set the retract height
    pub fn with_start_z(mut self, start_z: f64) -> Self {
        self.start_z = start_z;
        self
    }

    /// Builder method to set the probe-toward height
    pub fn with_end_z(mut self, end_z: f64) -> Self {
        self.end_z = end_z;
        self
    }
}

/// Shared read handle to the current leveling snapshot
///
/// Readers briefly lock to clone the inner `Arc` and then observe the
/// snapshot without holding the lock; the session swaps in a new snapshot on
/// every mutation (single writer).
pub type StateHandle = Arc<RwLock<Arc<LevelingState>>>;

/// One leveling run from `start` to full-grid completion or explicit `stop`
pub struct ProbeSession {
    /// Current state machine state
    state: SessionState,
    /// Wholesale-replaced leveling aggregate
    leveling: StateHandle,
    /// Outbound events for observers
    events: EventDispatcher,
}

impl ProbeSession {
    /// Create an idle session
    pub fn new() -> Self {
        Self {
            state: SessionState::Idle,
            leveling: Arc::new(RwLock::new(Arc::new(LevelingState::new()))),
            events: EventDispatcher::default(),
        }
    }

    /// Current state machine state
    pub fn session_state(&self) -> SessionState {
        self.state
    }

    /// Snapshot of the current leveling aggregate
    pub fn leveling_state(&self) -> Arc<LevelingState> {
        self.leveling.read().clone()
    }

    /// Cloneable handle for external observers of the aggregate
    pub fn state_handle(&self) -> StateHandle {
        self.leveling.clone()
    }

    /// Outbound event dispatcher; subscribe before starting a run
    pub fn events(&self) -> &EventDispatcher {
        &self.events
    }

    /// Begin a leveling run
    ///
    /// Resets the aggregate, arms the session for `options.positions.len()`
    /// targets, and returns the full synthesized instruction stream for the
    /// external engine to dispatch. Per target: an index marker, absolute
    /// positioning mode, then the motion sequence. The first target gets a
    /// leading retract and probes at half the configured feedrate; the first
    /// touch is the least calibrated. Later targets start already clear of
    /// the surface and probe at full feedrate.
    pub fn start(&mut self, options: &StartOptions) -> Vec<String> {
        self.replace(LevelingState::armed(options.positions.len()));
        self.state = SessionState::Armed;

        let retract = gcode::format_command(gcode::RAPID_MOVE, &[('Z', Some(options.start_z))]);
        let mut instructions = Vec::with_capacity(options.positions.len() * 6);
        for (index, point) in options.positions.iter().enumerate() {
            instructions.push(gcode::probe_index_marker(index));
            instructions.push(gcode::format_command(gcode::ABSOLUTE_MODE, &[]));
            if index == 0 {
                instructions.push(retract.clone());
            }
            instructions.push(gcode::format_command(
                gcode::RAPID_MOVE,
                &[
                    ('X', Some(point.x)),
                    ('Y', Some(point.y)),
                    ('F', options.feedrate),
                ],
            ));
            let probe_feedrate = if index == 0 {
                options.probe_feedrate / 2.0
            } else {
                options.probe_feedrate
            };
            instructions.push(gcode::format_command(
                gcode::PROBE_TOWARD,
                &[('Z', Some(options.end_z)), ('F', Some(probe_feedrate))],
            ));
            instructions.push(retract.clone());
        }

        tracing::info!(
            targets = options.positions.len(),
            instructions = instructions.len(),
            "probing run armed"
        );
        instructions
    }

    /// Inbound `probe_start` report; extension hook
    pub fn probe_start(&mut self) {
        self.events.publish(ProbeEvent::Start);
    }

    /// Inbound `probe_update` report with the measured contact position
    ///
    /// Absorbs the sample in delivery order and widens the envelope; reports
    /// past the planned count are silently ignored. `probe_end` is emitted
    /// after every delivered update; it signals "sample absorbed", not "grid
    /// complete".
    pub fn probe_update(&mut self, sample: ProbedSample) {
        let current = self.leveling_state();
        if current.is_saturated() {
            tracing::debug!(sample = %sample, "probe update past planned count ignored");
        } else {
            let next = current.with_sample(sample);
            self.state = if next.is_complete() {
                SessionState::Complete
            } else {
                SessionState::Collecting
            };
            self.replace(next);
            self.events.publish(ProbeEvent::Update(sample));
        }
        self.probe_end();
    }

    /// Inbound (and outbound) `probe_end` signal; extension hook
    pub fn probe_end(&mut self) {
        self.events.publish(ProbeEvent::End);
    }

    /// Cancel the run, discarding partial data; safe at any point
    pub fn stop(&mut self) {
        tracing::info!(state = %self.state, "probing run stopped");
        self.reset_state();
        self.state = SessionState::Idle;
    }

    /// Reset the leveling aggregate to its defaults
    pub fn reset_state(&mut self) {
        self.replace(LevelingState::new());
    }

    /// Restore a previously saved height map, replacing the aggregate
    ///
    /// I/O faults are logged and surfaced as `false`; session state is left
    /// untouched on failure.
    pub fn load_heightmap(&mut self, path: impl AsRef<Path>) -> bool {
        match heightmap::load(path.as_ref()) {
            Ok(state) => {
                tracing::info!(
                    path = %path.as_ref().display(),
                    samples = state.probed_positions.len(),
                    "height map loaded"
                );
                self.replace(state);
                true
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to load height map");
                false
            }
        }
    }

    /// Persist the measured samples; overwrites any existing file
    pub fn save_heightmap(&self, path: impl AsRef<Path>) -> bool {
        let state = self.leveling_state();
        match heightmap::save(path.as_ref(), &state.probed_positions) {
            Ok(()) => {
                tracing::info!(
                    path = %path.as_ref().display(),
                    samples = state.probed_positions.len(),
                    "height map saved"
                );
                true
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to save height map");
                false
            }
        }
    }

    /// Swap in the successor aggregate snapshot
    fn replace(&mut self, next: LevelingState) {
        *self.leveling.write() = Arc::new(next);
    }
}

impl Default for ProbeSession {
    fn default() -> Self {
        Self::new()
    }
}
