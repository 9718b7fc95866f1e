use std::sync::Arc;
use tracing::{debug, error};

use crate::application::context::ImageContext;
use crate::application::dto::RetrievedImage;
use crate::application::errors::ImageError;
use crate::application::ports::ImageStore;
use crate::domain::sniffer;
use crate::domain::value_objects::ImageId;

/// Use case: Retrieve a stored image
pub struct RetrieveImageUseCase {
    store: Arc<dyn ImageStore>,
}

impl RetrieveImageUseCase {
    pub fn new(context: &ImageContext) -> Self {
        Self {
            store: Arc::clone(&context.store),
        }
    }

    /// Execute retrieval by identifier
    pub async fn execute(&self, id: &ImageId) -> Result<RetrievedImage, ImageError> {
        // 1. Fetch bytes
        let bytes = self.store.get(id).await?;

        // 2. Re-sniff; the stored name or object metadata is not trusted
        let media_type = sniffer::sniff(&bytes).map_err(|_| {
            error!(
                image_id = %id,
                size = bytes.len(),
                backend = self.store.backend_name(),
                "Stored image matches no known signature"
            );
            ImageError::UnsupportedContentType
        })?;

        Ok(RetrievedImage {
            id: id.clone(),
            bytes,
            media_type,
        })
    }

    /// Execute retrieval from a path segment of the form `<id>` or `<id>.<ext>`.
    ///
    /// The extension is decorative and plays no part in typing the response.
    pub async fn execute_path(&self, segment: &str) -> Result<RetrievedImage, ImageError> {
        let raw_id = segment.split_once('.').map_or(segment, |(id, _)| id);

        let id = raw_id.parse::<ImageId>().map_err(|_| {
            debug!(segment, "Path segment is not an image identifier");
            ImageError::NotFound(segment.to_string())
        })?;

        self.execute(&id).await
    }
}
