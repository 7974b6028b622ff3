//! Height-map persistence
//!
//! Loads and saves probed samples to a flat UTF-8 text file, one sample per
//! line, nine whitespace-separated numeric fields `x y z a b c u v w`. The
//! trailing six are reserved rotational/auxiliary axes, always written as
//! zero by this subsystem and discarded on load.
//!
//! Parsing is tolerant: blank lines are skipped, and a line with fewer than
//! three parsable tokens yields absent values for the missing trailing
//! fields. Only I/O faults are errors.

use levelkit_core::{HeightmapError, LevelingState, ProbedSample};
use std::fs;
use std::path::Path;

/// Reserved trailing fields per line (rotational/auxiliary axes)
const RESERVED_FIELDS: usize = 6;

/// Parse height-map text into a leveling aggregate
///
/// The planned count becomes the number of non-blank lines; the envelope is
/// folded over the parsed heights (an absent height poisons it, see
/// [`LevelingState`]).
pub fn parse(text: &str) -> LevelingState {
    let samples: Vec<ProbedSample> = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(parse_line)
        .collect();
    LevelingState::from_samples(samples)
}

/// Parse one line into a sample
///
/// Takes the first three whitespace-separated tokens as x, y, z. A missing
/// or unparsable token becomes an absent field rather than a failure.
fn parse_line(line: &str) -> ProbedSample {
    let mut tokens = line.split_whitespace();
    let mut column = || tokens.next().and_then(|t| t.parse::<f64>().ok());
    ProbedSample {
        x: column(),
        y: column(),
        z: column(),
    }
}

/// Render samples into height-map text
///
/// Absent fields serialize as `0`; the reserved axes are always zero.
pub fn render(samples: &[ProbedSample]) -> String {
    let mut text = String::new();
    for sample in samples {
        let field = |v: Option<f64>| match v {
            Some(v) => v.to_string(),
            None => "0".to_string(),
        };
        text.push_str(&field(sample.x));
        text.push(' ');
        text.push_str(&field(sample.y));
        text.push(' ');
        text.push_str(&field(sample.z));
        for _ in 0..RESERVED_FIELDS {
            text.push_str(" 0");
        }
        text.push('\n');
    }
    text
}

/// Load a height map from disk
///
/// I/O faults are returned without touching any session state; the caller
/// decides whether to replace its aggregate.
pub fn load(path: impl AsRef<Path>) -> Result<LevelingState, HeightmapError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| HeightmapError::Read {
        path: path.display().to_string(),
        source,
    })?;
    Ok(parse(&text))
}

/// Save samples to disk, overwriting any existing file
pub fn save(path: impl AsRef<Path>, samples: &[ProbedSample]) -> Result<(), HeightmapError> {
    let path = path.as_ref();
    fs::write(path, render(samples)).map_err(|source| HeightmapError::Write {
        path: path.display().to_string(),
        source,
    })
}
