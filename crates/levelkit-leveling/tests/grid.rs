use levelkit_core::{GridError, ProbePoint};
use levelkit_leveling::{plan_grid, GridOptions};

fn region(
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
fn test_row_major_grid() {
    let points = plan_grid(&region(0.0, 20.0, 10.0, 0.0, 10.0, 10.0)).unwrap();
    assert_eq!(
        points,
        vec![
            ProbePoint::new(0.0, 0.0),
            ProbePoint::new(10.0, 0.0),
            ProbePoint::new(20.0, 0.0),
            ProbePoint::new(0.0, 10.0),
            ProbePoint::new(10.0, 10.0),
            ProbePoint::new(20.0, 10.0),
        ]
    );
}

#[test]
fn test_single_point_region() {
    let points = plan_grid(&region(5.0, 5.0, 1.0, 7.0, 7.0, 1.0)).unwrap();
    assert_eq!(points, vec![ProbePoint::new(5.0, 7.0)]);
}

#[test]
fn test_non_positive_steps_rejected() {
    assert!(matches!(
        plan_grid(&region(0.0, 10.0, 0.0, 0.0, 10.0, 1.0)),
        Err(GridError::InvalidStep { axis: 'X', .. })
    ));
    assert!(matches!(
        plan_grid(&region(0.0, 10.0, 1.0, 0.0, 10.0, -2.0)),
        Err(GridError::InvalidStep { axis: 'Y', .. })
    ));
}

#[test]
fn test_nan_step_rejected() {
    assert!(plan_grid(&region(0.0, 10.0, f64::NAN, 0.0, 10.0, 1.0)).is_err());
}

#[test]
fn test_inclusive_bound_under_float_drift() {
    // 30 steps of 0.3 over [0, 9]; accumulation would overshoot the bound.
    let points = plan_grid(&region(0.0, 9.0, 0.3, 0.0, 0.0, 1.0)).unwrap();
    assert_eq!(points.len(), 31);
    assert!((points.last().unwrap().x - 9.0).abs() < 1e-9);
    for point in &points {
        assert!(point.x <= 9.0 + 1e-9);
    }
}

#[test]
fn test_uneven_span_keeps_points_inside_bound() {
    // Step does not divide the span; the last point stops short of the bound.
    let points = plan_grid(&region(0.0, 10.0, 4.0, 0.0, 0.0, 1.0)).unwrap();
    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![0.0, 4.0, 8.0]);
}
