//! Editor and export configuration.
//!
//! Every dimension the card layout depends on lives here as a named
//! constant. The crop frame, viewport, and export geometry are coupled:
//! the 120x140 crop must stay centered in the 370x480 viewport and the
//! PDF image rect must match the 85x125mm page for the printed card to
//! come out at the right physical size.

/// Configuration for the interactive photo editor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EditorConfig {
    /// Editing canvas width in pixels
    pub viewport_width: u32,
    /// Editing canvas height in pixels
    pub viewport_height: u32,
    /// Width of the crop frame and of the final photo
    pub crop_width: u32,
    /// Height of the crop frame and of the final photo
    pub crop_height: u32,
    /// Lower zoom bound
    pub zoom_min: f64,
    /// Upper zoom bound
    pub zoom_max: f64,
    /// Zoom change per wheel tick or zoom button press
    pub zoom_step: f64,
    /// Rotation change per rotate button press, in degrees
    pub rotate_step_degrees: f64,
    /// Offset change per nudge button press, in viewport pixels
    pub nudge_step: f64,
    /// JPEG encoder quality for the final photo, in (0, 1]
    pub jpeg_quality: f64,
}

/// Configuration for card snapshot and PDF export.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExportConfig {
    /// Supersampling factor passed to the snapshot renderer
    pub snapshot_scale: f64,
    /// Card node width in CSS pixels
    pub card_width: u32,
    /// Card node height in CSS pixels
    pub card_height: u32,
    /// PDF page size in millimeters (width, height)
    pub page_size_mm: (f64, f64),
    /// Top-left corner of the card image on the PDF page, in millimeters
    pub image_origin_mm: (f64, f64),
    /// Size of the card image on the PDF page, in millimeters
    pub image_size_mm: (f64, f64),
}

pub static EDITOR_CONFIG: EditorConfig = EditorConfig {
    viewport_width: 370,
    viewport_height: 480,
    crop_width: 120,
    crop_height: 140,
    zoom_min: 0.1,
    zoom_max: 3.0,
    zoom_step: 0.05,
    rotate_step_degrees: 15.0,
    nudge_step: 10.0,
    jpeg_quality: 0.95,
};

pub static EXPORT_CONFIG: ExportConfig = ExportConfig {
    snapshot_scale: 3.0,
    card_width: 370,
    card_height: 609,
    page_size_mm: (85.0, 125.0),
    image_origin_mm: (2.0, 2.0),
    image_size_mm: (81.0, 121.0),
};
