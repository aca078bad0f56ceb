use proptest::prelude::*;
use voxsketch_designer::{to_device, to_logical, Point, Viewport};

fn approx(a: Point, b: Point) -> bool {
    let tolerance = 1e-6 * (1.0 + a.x.abs().max(a.y.abs()));
    (a.x - b.x).abs() < tolerance && (a.y - b.y).abs() < tolerance
}

proptest! {
    #[test]
    fn prop_logical_device_round_trip(
        dx in -1.0e4f64..1.0e4,
        dy in -1.0e4f64..1.0e4,
        ox in -1.0e3f64..1.0e3,
        oy in -1.0e3f64..1.0e3,
        zoom in 0.1f64..50.0,
    ) {
        let device = Point::new(dx, dy);
        let offset = Point::new(ox, oy);
        let back = to_device(to_logical(device, offset, zoom), offset, zoom);
        prop_assert!(approx(back, device), "{:?} -> {:?}", device, back);
    }

    #[test]
    fn prop_zoom_at_keeps_anchor(
        px in 0.0f64..800.0,
        py in 0.0f64..600.0,
        factor in 0.5f64..2.0,
    ) {
        let mut viewport = Viewport::new();
        viewport.set_offset(25.0, -40.0);
        let device = Point::new(px, py);
        let anchor = viewport.to_logical(device);

        viewport.zoom_at(device, factor);
        prop_assert!(approx(viewport.to_device(anchor), device));
    }
}

#[test]
fn test_identity_mapping() {
    let viewport = Viewport::new();
    assert_eq!(viewport.zoom(), 1.0);
    assert_eq!(
        viewport.to_logical(Point::new(12.0, 34.0)),
        Point::new(12.0, 34.0)
    );
}

#[test]
fn test_mapping_with_pan_and_zoom() {
    let mut viewport = Viewport::new();
    viewport.set_zoom(2.0);
    viewport.set_offset(100.0, 50.0);
    assert_eq!(
        viewport.to_logical(Point::new(300.0, 250.0)),
        Point::new(100.0, 100.0)
    );
    assert_eq!(
        viewport.to_device(Point::new(100.0, 100.0)),
        Point::new(300.0, 250.0)
    );
}

#[test]
fn test_zoom_is_clamped() {
    let mut viewport = Viewport::with_limits(0.5, 4.0);
    viewport.set_zoom(10.0);
    assert_eq!(viewport.zoom(), 4.0);
    viewport.set_zoom(0.01);
    assert_eq!(viewport.zoom(), 0.5);
    viewport.set_zoom(f64::NAN);
    assert_eq!(viewport.zoom(), 0.5);

    assert!(!viewport.zoom_at(Point::new(0.0, 0.0), 0.5));
    assert!(viewport.zoom_at(Point::new(0.0, 0.0), 2.0));
}

#[test]
fn test_pan_and_reset() {
    let mut viewport = Viewport::new();
    viewport.pan_by(10.0, -5.0);
    viewport.pan_by(2.0, 2.0);
    assert_eq!(viewport.offset(), Point::new(12.0, -3.0));

    viewport.set_zoom(3.0);
    viewport.reset();
    assert_eq!(viewport, Viewport::new());
}

#[test]
fn test_display() {
    let mut viewport = Viewport::new();
    viewport.set_offset(1.0, 2.0);
    assert_eq!(viewport.to_string(), "Zoom: 1.00x | Pan: (1.0, 2.0)");
}
