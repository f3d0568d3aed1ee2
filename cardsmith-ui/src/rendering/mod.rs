pub mod canvas_utils;
pub mod compositor;
pub mod crop;

pub use canvas_utils::{create_offscreen_canvas, get_2d_context};
pub use compositor::{draw_photo, image_size};
pub use crop::{confirm_crop, export_cropped_photo};
