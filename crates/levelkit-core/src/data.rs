//! Data models for probe targets, measured samples, and session state
//!
//! This module provides:
//! - Planar probe targets produced by the grid planner
//! - Measured samples with per-field presence (absent fields are a
//!   data-quality defect, not a fault)
//! - The leveling aggregate, replaced wholesale on every mutation
//! - The probe-session state machine states

use serde::{Deserialize, Serialize};
use std::fmt;

/// Planar probe target
///
/// Immutable once produced by the grid planner; the probe session only reads
/// targets to synthesize motion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProbePoint {
    /// X-axis position of the target
    pub x: f64,
    /// Y-axis position of the target
    pub y: f64,
}

impl ProbePoint {
    /// Create a new probe target
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for ProbePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X:{:.3} Y:{:.3}", self.x, self.y)
    }
}

/// A single probe measurement
///
/// Each field is an `Option` where `None` means the value could not be
/// parsed or was never reported. Absent fields propagate into the envelope
/// instead of raising; availability is favored over strict validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ProbedSample {
    /// Measured X position (if reported)
    pub x: Option<f64>,
    /// Measured Y position (if reported)
    pub y: Option<f64>,
    /// Measured contact height (if reported)
    pub z: Option<f64>,
}

impl ProbedSample {
    /// Create a fully populated sample
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            z: Some(z),
        }
    }

    /// Check whether every field is present
    pub fn is_complete(&self) -> bool {
        self.x.is_some() && self.y.is_some() && self.z.is_some()
    }
}

impl fmt::Display for ProbedSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = |v: Option<f64>| match v {
            Some(v) => format!("{:.3}", v),
            None => "?".to_string(),
        };
        write!(
            f,
            "X:{} Y:{} Z:{}",
            field(self.x),
            field(self.y),
            field(self.z)
        )
    }
}

/// The leveling aggregate for one probing run
///
/// Exclusively owned by the probe session and updated by wholesale
/// replacement, never partial in-place mutation. Under the single-writer
/// assumption this lets observers hold an immutable snapshot while the
/// session swaps in the next one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LevelingState {
    /// Number of targets planned for this run
    pub probe_point_count: usize,
    /// Measured samples in delivery order (the engine's execution order)
    pub probed_positions: Vec<ProbedSample>,
    /// Lowest measured height, `None` before the first sample or when the
    /// envelope is poisoned by a sample with an absent height
    pub min_z: Option<f64>,
    /// Highest measured height, same presence rules as `min_z`
    pub max_z: Option<f64>,
}

impl LevelingState {
    /// Create an empty aggregate
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an aggregate armed for `count` targets
    pub fn armed(count: usize) -> Self {
        Self {
            probe_point_count: count,
            ..Self::default()
        }
    }

    /// Build an aggregate from already measured samples
    ///
    /// The planned count is taken to be the sample count; the envelope is
    /// folded over the present heights. Used when restoring a height map.
    pub fn from_samples(samples: Vec<ProbedSample>) -> Self {
        let (min_z, max_z) = envelope(&samples);
        Self {
            probe_point_count: samples.len(),
            probed_positions: samples,
            min_z,
            max_z,
        }
    }

    /// Produce the successor aggregate with one more sample appended
    ///
    /// The envelope widens to cover the new height. A sample with an absent
    /// height poisons the envelope: both bounds become and stay `None`.
    pub fn with_sample(&self, sample: ProbedSample) -> Self {
        let mut probed_positions = self.probed_positions.clone();
        probed_positions.push(sample);

        let poisoned = !self.probed_positions.is_empty() && self.min_z.is_none();
        let (min_z, max_z) = match sample.z {
            Some(z) if !poisoned => (
                Some(self.min_z.map_or(z, |m| m.min(z))),
                Some(self.max_z.map_or(z, |m| m.max(z))),
            ),
            _ => (None, None),
        };

        Self {
            probe_point_count: self.probe_point_count,
            probed_positions,
            min_z,
            max_z,
        }
    }

    /// Check whether every planned target has been measured
    pub fn is_complete(&self) -> bool {
        self.probe_point_count > 0 && self.probed_positions.len() >= self.probe_point_count
    }

    /// Check whether further samples would exceed the planned count
    pub fn is_saturated(&self) -> bool {
        self.probed_positions.len() >= self.probe_point_count
    }
}

impl fmt::Display for LevelingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} samples, envelope {:?}..{:?}",
            self.probed_positions.len(),
            self.probe_point_count,
            self.min_z,
            self.max_z
        )
    }
}

/// Fold the height envelope over a sample sequence
///
/// Any absent height poisons the whole envelope to `None`.
fn envelope(samples: &[ProbedSample]) -> (Option<f64>, Option<f64>) {
    let mut min_z = None;
    let mut max_z = None;
    for sample in samples {
        match sample.z {
            None => return (None, None),
            Some(z) => {
                min_z = Some(min_z.map_or(z, |m: f64| m.min(z)));
                max_z = Some(max_z.map_or(z, |m: f64| m.max(z)));
            }
        }
    }
    (min_z, max_z)
}

/// Probe-session state machine states
///
/// Tracks one leveling run from arming through collection to completion.
/// Transitions are driven directly by the integration layer calling the
/// session's methods; there are no sub-states during collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// No run in progress
    Idle,
    /// Instructions synthesized, waiting for the first probe report
    Armed,
    /// At least one sample absorbed, more expected
    Collecting,
    /// Every planned target measured
    Complete,
}

impl SessionState {
    /// Check if this state indicates a run is in progress
    pub fn is_active(&self) -> bool {
        matches!(self, SessionState::Armed | SessionState::Collecting)
    }

    /// Check if a transition from this state to `target` is valid.
    ///
    /// Returns `true` for valid transitions:
    /// - Any state can go to Idle (stop) or Armed (a new start discards
    ///   in-flight state unconditionally)
    /// - Armed can begin Collecting
    /// - Collecting can reach Complete
    pub fn can_transition_to(&self, target: SessionState) -> bool {
        use SessionState::*;
        if *self == target {
            return true;
        }
        match (self, target) {
            (_, Idle | Armed) => true,
            (Armed, Collecting | Complete) => true,
            (Collecting, Complete) => true,
            _ => false,
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        SessionState::Idle
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Armed => write!(f, "Armed"),
            Self::Collecting => write!(f, "Collecting"),
            Self::Complete => write!(f, "Complete"),
        }
    }
}
