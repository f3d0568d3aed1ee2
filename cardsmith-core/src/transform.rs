use crate::config::EDITOR_CONFIG;
use crate::geometry::ImageSize;
use crate::viewport::Viewport;
use serde::{Deserialize, Serialize};

/// Mutable zoom/rotation/offset state for the photo being edited.
///
/// Invariants, maintained by every mutator:
/// - `zoom` stays in `[zoom_min, zoom_max]`
/// - `rotation` stays in `[0, 360)` degrees
/// - `offset_x`/`offset_y` are unbounded; dragging the photo partly or
///   fully out of the crop frame is allowed so off-center subjects can be
///   framed.
///
/// No mutator can fail: out-of-range input is clamped or wrapped, never
/// rejected.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhotoTransform {
    pub zoom: f64,
    pub rotation: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

/// Discrete nudge directions (4 cardinal + 4 diagonal).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    /// Unit delta for this direction; diagonals move a full step on both
    /// axes, matching the original button behavior.
    pub fn unit(&self) -> (f64, f64) {
        match self {
            Direction::Up => (0.0, -1.0),
            Direction::Down => (0.0, 1.0),
            Direction::Left => (-1.0, 0.0),
            Direction::Right => (1.0, 0.0),
            Direction::UpLeft => (-1.0, -1.0),
            Direction::UpRight => (1.0, -1.0),
            Direction::DownLeft => (-1.0, 1.0),
            Direction::DownRight => (1.0, 1.0),
        }
    }
}

impl PhotoTransform {
    pub fn new() -> Self {
        Self {
            zoom: 1.0,
            rotation: 0.0,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }

    /// Replace zoom, clamped to the configured bounds.
    pub fn set_zoom(&mut self, value: f64) {
        self.zoom = value.clamp(EDITOR_CONFIG.zoom_min, EDITOR_CONFIG.zoom_max);
    }

    /// Adjust zoom by a delta, clamped to the configured bounds.
    pub fn zoom_by(&mut self, delta: f64) {
        self.set_zoom(self.zoom + delta);
    }

    /// Replace rotation, normalized into `[0, 360)`.
    pub fn set_rotation(&mut self, degrees: f64) {
        let mut wrapped = degrees % 360.0;
        if wrapped < 0.0 {
            wrapped += 360.0;
        }
        self.rotation = wrapped;
    }

    /// Rotate by a delta in degrees; discrete buttons use ±15°.
    pub fn rotate_by(&mut self, delta_degrees: f64) {
        self.set_rotation(self.rotation + delta_degrees);
    }

    /// Shift the placement; drag deltas and nudge buttons both land here.
    pub fn translate_by(&mut self, dx: f64, dy: f64) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    /// Nudge one fixed step in a discrete direction.
    pub fn nudge(&mut self, direction: Direction) {
        let (ux, uy) = direction.unit();
        self.translate_by(ux * EDITOR_CONFIG.nudge_step, uy * EDITOR_CONFIG.nudge_step);
    }

    /// Center the *scaled* image in the viewport at the current zoom.
    pub fn center_on(&mut self, viewport: Viewport, image: ImageSize) {
        self.offset_x = (viewport.width as f64 - image.width as f64 * self.zoom) / 2.0;
        self.offset_y = (viewport.height as f64 - image.height as f64 * self.zoom) / 2.0;
    }

    /// Back to defaults for a freshly loaded image: zoom 1, no rotation,
    /// unscaled image centered in the viewport.
    pub fn reset(&mut self, viewport: Viewport, image: ImageSize) {
        self.zoom = 1.0;
        self.rotation = 0.0;
        self.center_on(viewport, image);
    }

    /// Human-readable state summary shown below the editing canvas.
    pub fn status_line(&self) -> String {
        format!(
            "Zoom: {}% | Rotation: {}\u{b0} | Position: {}, {}",
            (self.zoom * 100.0).round(),
            self.rotation.round(),
            self.offset_x.round(),
            self.offset_y.round(),
        )
    }
}

impl Default for PhotoTransform {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============================================================================
    // Zoom clamping
    // ============================================================================

    #[test]
    fn set_zoom_keeps_in_range_values() {
        let mut t = PhotoTransform::new();
        t.set_zoom(1.7);
        assert_eq!(t.zoom, 1.7);
    }

    #[test]
    fn set_zoom_clamps_below_minimum() {
        let mut t = PhotoTransform::new();
        t.set_zoom(0.01);
        assert_eq!(t.zoom, 0.1);

        t.set_zoom(-5.0);
        assert_eq!(t.zoom, 0.1);
    }

    #[test]
    fn set_zoom_clamps_above_maximum() {
        let mut t = PhotoTransform::new();
        t.set_zoom(100.0);
        assert_eq!(t.zoom, 3.0);
    }

    #[test]
    fn zoom_by_accumulates_and_clamps() {
        let mut t = PhotoTransform::new();
        t.zoom_by(0.05);
        assert!((t.zoom - 1.05).abs() < 1e-12);

        for _ in 0..100 {
            t.zoom_by(0.05);
        }
        assert_eq!(t.zoom, 3.0);
    }

    // ============================================================================
    // Rotation normalization
    // ============================================================================

    #[test]
    fn set_rotation_wraps_negative_values() {
        let mut t = PhotoTransform::new();
        t.set_rotation(-15.0);
        assert_eq!(t.rotation, 345.0);
    }

    #[test]
    fn set_rotation_wraps_past_full_turn() {
        let mut t = PhotoTransform::new();
        t.set_rotation(360.0);
        assert_eq!(t.rotation, 0.0);

        t.set_rotation(725.0);
        assert_eq!(t.rotation, 5.0);
    }

    #[test]
    fn set_rotation_is_congruent_mod_360() {
        let mut t = PhotoTransform::new();
        for degrees in [-720.0, -359.0, -0.5, 0.0, 45.0, 359.9, 360.0, 1234.5] {
            t.set_rotation(degrees);
            assert!(t.rotation >= 0.0 && t.rotation < 360.0, "{degrees}");
            let diff = (t.rotation - degrees) % 360.0;
            assert!(
                diff.abs() < 1e-9 || (diff.abs() - 360.0).abs() < 1e-9,
                "{degrees} -> {}",
                t.rotation
            );
        }
    }

    #[test]
    fn twenty_four_quarter_steps_return_to_start() {
        let mut t = PhotoTransform::new();
        t.set_rotation(30.0);
        for _ in 0..24 {
            t.rotate_by(15.0);
        }
        assert!((t.rotation - 30.0).abs() < 1e-9);
    }

    #[test]
    fn rotate_left_from_zero_wraps_to_345() {
        let mut t = PhotoTransform::new();
        t.rotate_by(-15.0);
        assert_eq!(t.rotation, 345.0);
    }

    // ============================================================================
    // Translation
    // ============================================================================

    #[test]
    fn translate_by_is_additive() {
        let mut split = PhotoTransform::new();
        split.translate_by(3.0, -7.0);
        split.translate_by(12.5, 2.5);

        let mut combined = PhotoTransform::new();
        combined.translate_by(3.0 + 12.5, -7.0 + 2.5);

        assert_eq!(split.offset_x, combined.offset_x);
        assert_eq!(split.offset_y, combined.offset_y);
    }

    #[test]
    fn nudge_moves_one_fixed_step() {
        let mut t = PhotoTransform::new();
        t.nudge(Direction::Right);
        assert_eq!((t.offset_x, t.offset_y), (10.0, 0.0));

        t.nudge(Direction::UpLeft);
        assert_eq!((t.offset_x, t.offset_y), (0.0, -10.0));
    }

    #[test]
    fn opposite_nudges_cancel() {
        let mut t = PhotoTransform::new();
        t.nudge(Direction::DownRight);
        t.nudge(Direction::UpLeft);
        assert_eq!((t.offset_x, t.offset_y), (0.0, 0.0));
    }

    // ============================================================================
    // Centering and reset
    // ============================================================================

    #[test]
    fn reset_centers_unscaled_image() {
        // 800x600 image in a 370x480 viewport
        let mut t = PhotoTransform {
            zoom: 2.5,
            rotation: 90.0,
            offset_x: 40.0,
            offset_y: -12.0,
        };
        t.reset(Viewport::default(), ImageSize::new(800, 600));

        assert_eq!(t.zoom, 1.0);
        assert_eq!(t.rotation, 0.0);
        assert_eq!(t.offset_x, (370.0 - 800.0) / 2.0); // -215
        assert_eq!(t.offset_y, (480.0 - 600.0) / 2.0); // -60
    }

    #[test]
    fn center_on_accounts_for_zoom() {
        let mut t = PhotoTransform::new();
        t.set_zoom(0.5);
        t.center_on(Viewport::default(), ImageSize::new(800, 600));

        assert_eq!(t.offset_x, (370.0 - 400.0) / 2.0);
        assert_eq!(t.offset_y, (480.0 - 300.0) / 2.0);
    }

    #[test]
    fn center_on_is_idempotent() {
        let mut t = PhotoTransform::new();
        t.set_zoom(1.3);
        t.center_on(Viewport::default(), ImageSize::new(640, 480));
        let first = (t.offset_x, t.offset_y);

        t.center_on(Viewport::default(), ImageSize::new(640, 480));
        assert_eq!((t.offset_x, t.offset_y), first);
    }

    // ============================================================================
    // Status line
    // ============================================================================

    #[test]
    fn status_line_rounds_every_component() {
        let t = PhotoTransform {
            zoom: 1.004,
            rotation: 14.6,
            offset_x: -215.4,
            offset_y: 100.5,
        };
        assert_eq!(
            t.status_line(),
            "Zoom: 100% | Rotation: 15\u{b0} | Position: -215, 101"
        );
    }

    #[test]
    fn status_line_for_fresh_transform() {
        assert_eq!(
            PhotoTransform::new().status_line(),
            "Zoom: 100% | Rotation: 0\u{b0} | Position: 0, 0"
        );
    }

    #[test]
    fn transform_serialization_roundtrip() {
        let original = PhotoTransform {
            zoom: 1.35,
            rotation: 275.0,
            offset_x: -80.5,
            offset_y: 14.25,
        };

        let json = serde_json::to_string(&original).unwrap();
        let restored: PhotoTransform = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, original);
    }
}
