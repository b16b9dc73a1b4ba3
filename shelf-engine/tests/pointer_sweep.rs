use shelf_engine::{Point, Rect, TiltAngles, tilt};

const MAX_TILT: f64 = 10.0;

fn grid(rect: &Rect, overshoot: f64, steps: u32) -> Vec<Point> {
    let mut points = Vec::new();
    for i in 0..=steps {
        for j in 0..=steps {
            let fx = f64::from(i) / f64::from(steps);
            let fy = f64::from(j) / f64::from(steps);
            points.push(Point::new(
                rect.left - overshoot + fx * (rect.width + 2.0 * overshoot),
                rect.top - overshoot + fy * (rect.height + 2.0 * overshoot),
            ));
        }
    }
    points
}

fn within_bounds(angles: TiltAngles) -> bool {
    (-MAX_TILT..=MAX_TILT).contains(&angles.rotate_x)
        && (-MAX_TILT..=MAX_TILT).contains(&angles.rotate_y)
}

#[test]
fn tilt_stays_bounded_over_a_wide_sweep() {
    let rect = Rect::new(-40.0, 12.5, 220.0, 390.0);
    for p in grid(&rect, 5_000.0, 60) {
        assert!(within_bounds(tilt(&rect, p, MAX_TILT)), "{p:?}");
    }
}

#[test]
fn clamping_is_idempotent_outside_bounds() {
    let rect = Rect::new(10.0, 20.0, 300.0, 120.0);
    for p in grid(&rect, 400.0, 40) {
        let projected = rect.clamp(p);
        assert_eq!(rect.clamp(projected), projected);
        assert_eq!(tilt(&rect, p, MAX_TILT), tilt(&rect, projected, MAX_TILT));
    }
}

#[test]
fn tilt_is_monotonic_across_the_width() {
    let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
    let mut previous = f64::NEG_INFINITY;
    for x in 0..=100 {
        let angles = tilt(&rect, Point::new(f64::from(x), 50.0), MAX_TILT);
        assert!(angles.rotate_y >= previous);
        previous = angles.rotate_y;
    }
}
