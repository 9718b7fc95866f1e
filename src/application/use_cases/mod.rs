mod ingest_image;
mod retrieve_image;

pub use ingest_image::IngestImageUseCase;
pub use retrieve_image::RetrieveImageUseCase;
