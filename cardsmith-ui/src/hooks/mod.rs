mod use_photo_gestures;
mod use_photo_upload;

pub use use_photo_gestures::use_photo_gestures;
pub use use_photo_upload::{file_from_input_event, read_photo_file};
