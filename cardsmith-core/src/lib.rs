pub mod card;
pub mod config;
pub mod gesture;
pub mod geometry;
pub mod transform;
pub mod viewport;

pub use card::{export_file_name, format_long_date, CardFields};
pub use config::{EditorConfig, ExportConfig, EDITOR_CONFIG, EXPORT_CONFIG};
pub use gesture::{apply_gesture, GestureEvent, GestureState};
pub use geometry::{placement, ImageSize, PixelRect, Placement};
pub use transform::{Direction, PhotoTransform};
pub use viewport::Viewport;
