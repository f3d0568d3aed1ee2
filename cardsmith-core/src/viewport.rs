use crate::config::EDITOR_CONFIG;
use crate::geometry::PixelRect;
use serde::{Deserialize, Serialize};

/// Fixed-size interactive editing surface.
///
/// Defines the coordinate space the photo transform's offsets live in and
/// the surface the crop frame is centered on. Constant for the lifetime of
/// an edit session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// The crop frame: a fixed-size rectangle centered in the viewport.
    ///
    /// Recomputed on demand rather than stored, so it can never drift from
    /// the viewport dimensions.
    pub fn crop_frame(&self) -> PixelRect {
        PixelRect::centered_in(
            self.width,
            self.height,
            EDITOR_CONFIG.crop_width,
            EDITOR_CONFIG.crop_height,
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: EDITOR_CONFIG.viewport_width,
            height: EDITOR_CONFIG.viewport_height,
        }
    }
}
