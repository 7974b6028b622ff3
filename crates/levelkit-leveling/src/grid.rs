//! Probe-grid planning
//!
//! Computes the ordered sequence of planar probe targets covering a
//! rectangular region: row-major, Y ascending in the outer loop, X ascending
//! in the inner loop, both upper bounds inclusive.

use levelkit_core::{GridError, ProbePoint};
use serde::{Deserialize, Serialize};

/// Relative slack applied when deciding whether the upper bound is reached.
/// Step counts are derived from span/step rather than accumulated, so a step
/// that divides the span exactly (up to rounding) still lands on the bound.
const BOUND_EPSILON: f64 = 1e-9;

/// Rectangular probe region and step sizes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridOptions {
    /// First X coordinate of each row
    pub start_x: f64,
    /// Inclusive X upper bound
    pub end_x: f64,
    /// X increment between targets in a row
    pub step_x: f64,
    /// First Y coordinate
    pub start_y: f64,
    /// Inclusive Y upper bound
    pub end_y: f64,
    /// Y increment between rows
    pub step_y: f64,
}

/// Plan the ordered probe targets for a region
///
/// Non-positive (or non-finite) steps are rejected; a naive accumulating
/// loop would never terminate on them. A region whose start lies beyond its
/// end on either axis yields an empty plan, matching the zero-iteration
/// behavior of the inclusive loop it replaces.
pub fn plan_grid(options: &GridOptions) -> Result<Vec<ProbePoint>, GridError> {
    let xs = axis_coordinates('X', options.start_x, options.end_x, options.step_x)?;
    let ys = axis_coordinates('Y', options.start_y, options.end_y, options.step_y)?;

    let mut points = Vec::with_capacity(xs.len() * ys.len());
    for &y in &ys {
        for &x in &xs {
            points.push(ProbePoint::new(x, y));
        }
    }

    tracing::debug!(
        rows = ys.len(),
        columns = xs.len(),
        total = points.len(),
        "planned probe grid"
    );
    Ok(points)
}

/// Inclusive ascending coordinates for one axis
fn axis_coordinates(axis: char, start: f64, end: f64, step: f64) -> Result<Vec<f64>, GridError> {
    if !step.is_finite() || step <= 0.0 {
        return Err(GridError::InvalidStep { axis, step });
    }

    let span = end - start;
    if span < 0.0 {
        return Ok(Vec::new());
    }

    let count = (span / step + BOUND_EPSILON).floor() as usize + 1;
    Ok((0..count)
        .map(|i| (start + i as f64 * step).min(end))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(
        start_x: f64,
        end_x: f64,
        step_x: f64,
        start_y: f64,
        end_y: f64,
        step_y: f64,
    ) -> GridOptions {
        GridOptions {
            start_x,
            end_x,
            step_x,
            start_y,
            end_y,
            step_y,
        }
    }

    #[test]
    fn test_rejects_zero_step() {
        let err = plan_grid(&options(0.0, 10.0, 0.0, 0.0, 10.0, 5.0)).unwrap_err();
        assert_eq!(
            err,
            GridError::InvalidStep {
                axis: 'X',
                step: 0.0
            }
        );
    }

    #[test]
    fn test_rejects_negative_step() {
        let err = plan_grid(&options(0.0, 10.0, 5.0, 0.0, 10.0, -1.0)).unwrap_err();
        assert!(matches!(err, GridError::InvalidStep { axis: 'Y', .. }));
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let points = plan_grid(&options(10.0, 0.0, 5.0, 0.0, 10.0, 5.0)).unwrap();
        assert!(points.is_empty());
    }

    #[test]
    fn test_drift_prone_step_hits_inclusive_bound() {
        // 0.1 steps over [0, 1]: accumulation drifts past 1.0 and drops the
        // last point; span/step counting keeps all 11.
        let points = plan_grid(&options(0.0, 1.0, 0.1, 0.0, 0.0, 1.0)).unwrap();
        assert_eq!(points.len(), 11);
        let last = points.last().unwrap();
        assert!((last.x - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_step_larger_than_span() {
        let points = plan_grid(&options(0.0, 5.0, 10.0, 0.0, 5.0, 10.0)).unwrap();
        assert_eq!(points.len(), 1);
        assert_eq!(points[0], ProbePoint::new(0.0, 0.0));
    }
}
