mod image_id;
mod media_type;

pub use image_id::{ImageId, IMAGE_ID_BYTES, IMAGE_ID_LEN};
pub use media_type::MediaType;
