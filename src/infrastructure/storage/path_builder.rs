use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::domain::value_objects::{ImageId, MediaType};

/// Utility for generating storage paths
#[derive(Debug, Clone)]
pub struct PathBuilder {
    root: PathBuf,
}

impl PathBuilder {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Generate temp upload path: /root/.tmp-{uuid}
    ///
    /// Lives in the same directory as the final file so the rename stays on
    /// one filesystem.
    pub fn temp_path(&self, id: Uuid) -> PathBuf {
        self.root.join(format!(".tmp-{}", id))
    }

    /// Generate final path: /root/{id}.{ext}
    pub fn final_path(&self, id: &ImageId, media_type: MediaType) -> PathBuf {
        self.root
            .join(format!("{}.{}", id.as_hex(), media_type.extension()))
    }

    /// Every path an image could be stored under, one per media type
    pub fn candidate_paths(&self, id: &ImageId) -> impl Iterator<Item = PathBuf> + '_ {
        let id = id.clone();
        MediaType::ALL
            .into_iter()
            .map(move |media_type| self.final_path(&id, media_type))
    }
}
