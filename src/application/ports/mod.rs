mod image_store;

pub use image_store::{ImageStore, StorageError};

#[cfg(test)]
pub use image_store::MockImageStore;
