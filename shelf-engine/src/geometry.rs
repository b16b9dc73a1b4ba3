//! Pointer geometry: 3D tilt/flip for the compact card and the quick-look magnifier.
//!
//! All functions here are total over finite input. Pointer samples outside the
//! tracked rectangle are projected onto its nearest edge; a NaN coordinate is
//! treated as the rectangle's centre.
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Natural dimensions are usable once the image has reported a width.
    #[must_use]
    pub fn is_known(&self) -> bool {
        self.width > 0.0
    }
}

/// Axis-aligned bounding rectangle of the tracked surface, in the same
/// coordinate space as the pointer samples.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(
            self.width.mul_add(0.5, self.left),
            self.height.mul_add(0.5, self.top),
        )
    }

    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left
            && p.x <= self.left + self.width.max(0.0)
            && p.y >= self.top
            && p.y <= self.top + self.height.max(0.0)
    }

    /// Project `p` onto the rectangle.
    #[must_use]
    pub fn clamp(&self, p: Point) -> Point {
        let center = self.center();
        Point::new(
            clamp_axis(p.x, self.left, self.width, center.x),
            clamp_axis(p.y, self.top, self.height, center.y),
        )
    }

    /// Offset of the clamped pointer from the centre, scaled to `[-1, 1]` per axis.
    #[must_use]
    pub fn normalized_offset(&self, p: Point) -> Point {
        let clamped = self.clamp(p);
        let center = self.center();
        Point::new(
            normalize_axis(clamped.x - center.x, self.width),
            normalize_axis(clamped.y - center.y, self.height),
        )
    }
}

fn clamp_axis(value: f64, start: f64, extent: f64, center: f64) -> f64 {
    if value.is_nan() {
        return center;
    }
    value.clamp(start, start + extent.max(0.0))
}

fn normalize_axis(delta: f64, extent: f64) -> f64 {
    let half = extent / 2.0;
    if half > 0.0 {
        (delta / half).clamp(-1.0, 1.0)
    } else {
        0.0
    }
}

/// Tilt rotation in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TiltAngles {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

/// Tilt for a pointer sample over `rect`.
///
/// `tanh` shaping keeps the response near-linear at the centre and bounded by
/// `max_tilt_deg` at the edges.
#[must_use]
pub fn tilt(rect: &Rect, pointer: Point, max_tilt_deg: f64) -> TiltAngles {
    let norm = rect.normalized_offset(pointer);
    TiltAngles {
        rotate_x: -max_tilt_deg * norm.y.tanh(),
        rotate_y: max_tilt_deg * norm.x.tanh(),
    }
}

/// Composite transform of the flip card: the flip rotation first, then the
/// tilt in the face's local frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CardTransform {
    pub flip_deg: f64,
    pub tilt: Option<TiltAngles>,
}

impl CardTransform {
    #[must_use]
    pub const fn new(flipped: bool, tilt: Option<TiltAngles>) -> Self {
        Self {
            flip_deg: if flipped { 180.0 } else { 0.0 },
            tilt,
        }
    }

    #[must_use]
    pub fn to_css(&self, perspective_px: f64) -> String {
        format!("{} {}", self.flip_css(perspective_px), self.tilt_css())
    }

    /// The flip half of [`CardTransform::to_css`]. Changes only when the card flips.
    #[must_use]
    pub fn flip_css(&self, perspective_px: f64) -> String {
        format!("perspective({perspective_px}px) rotateY({}deg)", self.flip_deg)
    }

    /// The tilt half of [`CardTransform::to_css`]; flat when no pointer is tracked.
    #[must_use]
    pub fn tilt_css(&self) -> String {
        let angles = self.tilt.unwrap_or_default();
        format!(
            "rotateX({:.3}deg) rotateY({:.3}deg)",
            angles.rotate_x, angles.rotate_y
        )
    }
}

/// Tilt tracking for the flip card. Holds only the latest sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TiltTracker {
    current: Option<TiltAngles>,
}

impl TiltTracker {
    pub fn track(&mut self, rect: &Rect, pointer: Point, max_tilt_deg: f64) -> TiltAngles {
        let angles = tilt(rect, pointer, max_tilt_deg);
        self.current = Some(angles);
        angles
    }

    /// Snap back to the pure flip transform.
    pub const fn leave(&mut self) -> bool {
        let had_tilt = self.current.is_some();
        self.current = None;
        had_tilt
    }

    #[must_use]
    pub const fn current(&self) -> Option<TiltAngles> {
        self.current
    }
}

/// Magnifier tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MagnifierParams {
    pub diameter: f64,
    pub pan: f64,
}

/// Resolved magnifier placement for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MagnifierView {
    /// Viewport top-left, relative to the image's top-left.
    pub origin: Point,
    pub diameter: f64,
    /// Background drawn at the image's natural size.
    pub background_size: Size,
    /// Background offset. Deliberately unclamped: near the image edges the lens
    /// may show empty space.
    pub background_offset: Point,
}

impl MagnifierView {
    #[must_use]
    pub fn background_position_css(&self) -> String {
        format!(
            "{}px {}px",
            self.background_offset.x, self.background_offset.y
        )
    }

    #[must_use]
    pub fn background_size_css(&self) -> String {
        format!(
            "{}px {}px",
            self.background_size.width, self.background_size.height
        )
    }
}

/// Pointer tracking over the quick-look image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MagnifierState {
    active: bool,
    pointer: Point,
    natural: Size,
}

impl MagnifierState {
    pub const fn enter(&mut self) -> bool {
        let changed = !self.active;
        self.active = true;
        changed
    }

    pub const fn leave(&mut self) -> bool {
        let changed = self.active;
        self.active = false;
        changed
    }

    /// Record a pointer position relative to the image's top-left.
    pub const fn track(&mut self, pointer: Point) {
        self.pointer = pointer;
    }

    pub const fn image_loaded(&mut self, natural: Size) {
        self.natural = natural;
    }

    /// The image failed; dimensions are unknown until the placeholder loads.
    pub const fn image_failed(&mut self) {
        self.natural = Size::new(0.0, 0.0);
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub const fn natural_size(&self) -> Size {
        self.natural
    }

    /// Placement for the current frame; `None` while inactive or before the
    /// image has reported its natural size.
    #[must_use]
    pub fn view(&self, params: MagnifierParams) -> Option<MagnifierView> {
        if !self.active || !self.natural.is_known() {
            return None;
        }
        let radius = params.diameter / 2.0;
        Some(MagnifierView {
            origin: Point::new(self.pointer.x - radius, self.pointer.y - radius),
            diameter: params.diameter,
            background_size: self.natural,
            background_offset: Point::new(-self.pointer.x * params.pan, -self.pointer.y * params.pan),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX: f64 = 10.0;
    const PARAMS: MagnifierParams = MagnifierParams {
        diameter: 120.0,
        pan: 1.1,
    };

    fn card() -> Rect {
        Rect::new(100.0, 50.0, 220.0, 390.0)
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn centre_has_no_tilt() {
        let rect = card();
        let angles = tilt(&rect, rect.center(), MAX);
        assert!(close(angles.rotate_x, 0.0));
        assert!(close(angles.rotate_y, 0.0));
    }

    #[test]
    fn outside_points_match_their_projection() {
        let rect = card();
        for p in [
            Point::new(-500.0, 80.0),
            Point::new(9_000.0, 9_000.0),
            Point::new(150.0, -3.0),
            Point::new(f64::INFINITY, f64::NEG_INFINITY),
        ] {
            assert!(!rect.contains(p));
            assert_eq!(tilt(&rect, p, MAX), tilt(&rect, rect.clamp(p), MAX));
        }
    }

    #[test]
    fn tilt_is_bounded_and_signed() {
        let rect = card();
        let right_top = tilt(&rect, Point::new(320.0, 50.0), MAX);
        assert!(right_top.rotate_y > 0.0 && right_top.rotate_y <= MAX);
        assert!(right_top.rotate_x > 0.0 && right_top.rotate_x <= MAX);
        let left_bottom = tilt(&rect, Point::new(100.0, 440.0), MAX);
        assert!(left_bottom.rotate_y < 0.0 && left_bottom.rotate_y >= -MAX);
        assert!(left_bottom.rotate_x < 0.0 && left_bottom.rotate_x >= -MAX);
        assert!(close(right_top.rotate_y, MAX * 1f64.tanh()));
    }

    #[test]
    fn degenerate_rect_and_nan_are_flat() {
        let flat = Rect::new(10.0, 10.0, 0.0, 0.0);
        assert_eq!(tilt(&flat, Point::new(50.0, 50.0), MAX), TiltAngles::default());
        let rect = card();
        let nan = tilt(&rect, Point::new(f64::NAN, f64::NAN), MAX);
        assert!(close(nan.rotate_x, 0.0) && close(nan.rotate_y, 0.0));
    }

    #[test]
    fn tracker_snaps_back_on_leave() {
        let mut tracker = TiltTracker::default();
        tracker.track(&card(), Point::new(300.0, 60.0), MAX);
        assert!(tracker.current().is_some());
        assert!(tracker.leave());
        assert!(tracker.current().is_none());
        let css = CardTransform::new(true, tracker.current()).to_css(800.0);
        assert_eq!(
            css,
            "perspective(800px) rotateY(180deg) rotateX(0.000deg) rotateY(0.000deg)"
        );
    }

    #[test]
    fn flip_and_tilt_halves_compose_the_full_transform() {
        let tilted = CardTransform::new(false, Some(tilt(&card(), Point::new(300.0, 60.0), MAX)));
        let flat = CardTransform::new(false, None);
        assert_eq!(tilted.flip_css(800.0), flat.flip_css(800.0));
        assert_ne!(tilted.tilt_css(), flat.tilt_css());
        assert_eq!(flat.tilt_css(), "rotateX(0.000deg) rotateY(0.000deg)");
        assert_eq!(
            tilted.to_css(800.0),
            format!("{} {}", tilted.flip_css(800.0), tilted.tilt_css())
        );
    }

    #[test]
    fn magnifier_waits_for_dimensions() {
        let mut lens = MagnifierState::default();
        lens.enter();
        lens.track(Point::new(100.0, 40.0));
        assert!(lens.view(PARAMS).is_none());
        lens.image_loaded(Size::new(600.0, 800.0));
        let view = lens.view(PARAMS).expect("dimensions known");
        assert_eq!(view.origin, Point::new(40.0, -20.0));
        assert!(close(view.background_offset.x, -110.0));
        assert!(close(view.background_offset.y, -44.0));
        assert_eq!(view.background_size, Size::new(600.0, 800.0));
    }

    #[test]
    fn magnifier_leaves_no_residue() {
        let mut lens = MagnifierState::default();
        lens.image_loaded(Size::new(10.0, 10.0));
        assert!(lens.enter());
        assert!(lens.view(PARAMS).is_some());
        assert!(lens.leave());
        assert!(lens.view(PARAMS).is_none());
        lens.enter();
        lens.image_failed();
        assert!(lens.view(PARAMS).is_none());
    }
}
