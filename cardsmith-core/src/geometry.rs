use crate::transform::PhotoTransform;
use serde::{Deserialize, Serialize};

/// Rectangle in pixel space (always u32 coordinates)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    /// Create new pixel rectangle
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle of the given size centered inside an outer surface.
    ///
    /// Integer division matches canvas pixel addressing: an odd leftover
    /// pixel goes to the right/bottom edge.
    pub fn centered_in(outer_width: u32, outer_height: u32, width: u32, height: u32) -> Self {
        debug_assert!(
            width <= outer_width && height <= outer_height,
            "inner rect must fit inside the outer surface"
        );
        Self {
            x: (outer_width - width) / 2,
            y: (outer_height - height) / 2,
            width,
            height,
        }
    }

    /// Check if point is inside rectangle
    pub fn contains(&self, px: u32, py: u32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }
}

/// Intrinsic pixel dimensions of a decoded source image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Fully resolved draw parameters for one compositing pass.
///
/// Produced by [`placement`] and consumed by both the live compositor and
/// the crop exporter, so the two can never disagree on where the photo
/// lands on the surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Image width after zoom
    pub scaled_width: f64,
    /// Image height after zoom
    pub scaled_height: f64,
    /// Top-left corner of the placement rectangle
    pub offset_x: f64,
    pub offset_y: f64,
    /// Rotation pivot: center of the placement rectangle
    pub pivot_x: f64,
    pub pivot_y: f64,
    /// Rotation about the pivot, in radians
    pub rotation_radians: f64,
}

/// Resolve a transform against an image into concrete draw parameters.
pub fn placement(image: ImageSize, transform: &PhotoTransform) -> Placement {
    let scaled_width = image.width as f64 * transform.zoom;
    let scaled_height = image.height as f64 * transform.zoom;
    Placement {
        scaled_width,
        scaled_height,
        offset_x: transform.offset_x,
        offset_y: transform.offset_y,
        pivot_x: transform.offset_x + scaled_width / 2.0,
        pivot_y: transform.offset_y + scaled_height / 2.0,
        rotation_radians: transform.rotation.to_radians(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_in_splits_margins_evenly() {
        let rect = PixelRect::centered_in(370, 480, 120, 140);
        assert_eq!(rect, PixelRect::new(125, 170, 120, 140));
    }

    #[test]
    fn centered_in_puts_odd_pixel_on_far_edge() {
        let rect = PixelRect::centered_in(101, 100, 100, 100);
        assert_eq!(rect.x, 0);
        assert_eq!(101 - (rect.x + rect.width), 1);
    }

    #[test]
    #[should_panic(expected = "inner rect must fit")]
    #[cfg(debug_assertions)]
    fn centered_in_rejects_inner_larger_than_outer() {
        PixelRect::centered_in(100, 100, 120, 140);
    }

    #[test]
    fn contains_checks_bounds() {
        let rect = PixelRect::new(10, 20, 100, 50);

        assert!(rect.contains(50, 40));
        assert!(rect.contains(10, 20)); // Top-left corner
        assert!(rect.contains(109, 69)); // Bottom-right corner
        assert!(!rect.contains(110, 70)); // Just outside
        assert!(!rect.contains(9, 20)); // Just left
    }

    #[test]
    fn placement_scales_image_by_zoom() {
        let mut transform = PhotoTransform::new();
        transform.set_zoom(2.0);
        let p = placement(ImageSize::new(400, 300), &transform);

        assert_eq!(p.scaled_width, 800.0);
        assert_eq!(p.scaled_height, 600.0);
    }

    #[test]
    fn placement_pivot_is_center_of_placement_rect() {
        let mut transform = PhotoTransform::new();
        transform.translate_by(10.0, 20.0);
        let p = placement(ImageSize::new(200, 100), &transform);

        assert_eq!(p.pivot_x, 10.0 + 100.0);
        assert_eq!(p.pivot_y, 20.0 + 50.0);
    }

    #[test]
    fn placement_converts_rotation_to_radians() {
        let mut transform = PhotoTransform::new();
        transform.set_rotation(180.0);
        let p = placement(ImageSize::new(100, 100), &transform);

        assert!((p.rotation_radians - std::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn placement_serialization_roundtrip() {
        let original = PixelRect::new(125, 170, 120, 140);

        let json = serde_json::to_string(&original).unwrap();
        let restored: PixelRect = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, original);
    }
}
