use serde::Serialize;

use crate::domain::value_objects::{ImageId, MediaType};

/// Result of a successful ingest
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngestedImage {
    pub id: ImageId,
    pub media_type: MediaType,
}

impl IngestedImage {
    pub fn extension(&self) -> &'static str {
        self.media_type.extension()
    }

    /// Retrieval path: `/<id>.<ext>`
    pub fn location(&self) -> String {
        format!("/{}.{}", self.id, self.extension())
    }
}

/// Bytes fetched from the store together with their sniffed type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetrievedImage {
    pub id: ImageId,
    pub bytes: Vec<u8>,
    pub media_type: MediaType,
}
