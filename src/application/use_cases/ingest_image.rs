use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::application::context::ImageContext;
use crate::application::dto::IngestedImage;
use crate::application::errors::ImageError;
use crate::application::ports::ImageStore;
use crate::domain::sniffer::{self, MIN_SIGNATURE_LEN};

/// Use case: Ingest an uploaded image
pub struct IngestImageUseCase {
    store: Arc<dyn ImageStore>,
}

impl IngestImageUseCase {
    pub fn new(context: &ImageContext) -> Self {
        Self {
            store: Arc::clone(&context.store),
        }
    }

    /// Execute ingest workflow
    pub async fn execute(&self, raw: &[u8]) -> Result<IngestedImage, ImageError> {
        // 1. Reject payloads too short to carry any signature
        if raw.len() < MIN_SIGNATURE_LEN {
            debug!(size = raw.len(), "Rejecting upload shorter than any signature");
            return Err(ImageError::UnsupportedContentType);
        }

        // 2. Sniff the real type; nothing is stored on failure
        let media_type = sniffer::sniff(raw).map_err(|_| {
            debug!(size = raw.len(), "Rejecting upload with unknown signature");
            ImageError::UnsupportedContentType
        })?;

        // 3. Persist (identifier computed by the store)
        let id = self.store.put(raw, media_type).await.map_err(|e| {
            warn!(error = %e, backend = self.store.backend_name(), "Failed to store image");
            ImageError::from(e)
        })?;

        info!(
            image_id = %id,
            media_type = %media_type,
            size = raw.len(),
            "Image ingested"
        );

        // 4. Return identifier and type for the redirect
        Ok(IngestedImage { id, media_type })
    }
}
