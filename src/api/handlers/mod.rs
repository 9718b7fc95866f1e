pub mod health;
pub mod home;
pub mod image;
pub mod upload;

pub use health::health_handler;
pub use home::{home_handler, not_found_handler};
pub use image::image_handler;
pub use upload::upload_handler;
