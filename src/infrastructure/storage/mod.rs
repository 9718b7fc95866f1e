mod content_hasher;
mod local_filesystem_store;
mod object_store;
mod path_builder;

pub use content_hasher::ContentHasher;
pub use local_filesystem_store::LocalFilesystemStore;
pub use object_store::{ObjectStore, S3Settings};
pub use path_builder::PathBuilder;
