use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::application::ports::{ImageStore, StorageError};
use crate::domain::value_objects::{ImageId, MediaType};
use crate::infrastructure::storage::{ContentHasher, PathBuilder};

/// Local filesystem image store.
///
/// One file per image, named `<id>.<ext>`, directly inside the root
/// directory. Writes land in a temp file first and are renamed into place, so
/// readers only ever see complete files. With durable writes on, both the
/// file and the directory are fsynced and a failed sync fails the `put`.
pub struct LocalFilesystemStore {
    path_builder: PathBuilder,
    durable_writes: bool,
}

impl LocalFilesystemStore {
    pub fn new(root: PathBuf) -> Self {
        Self::with_durability(root, true)
    }

    pub fn with_durability(root: PathBuf, durable_writes: bool) -> Self {
        Self {
            path_builder: PathBuilder::new(root),
            durable_writes,
        }
    }

    /// Initialize storage directory
    pub async fn init(&self) -> Result<(), StorageError> {
        fs::create_dir_all(self.path_builder.root()).await?;
        Ok(())
    }

    async fn write_temp(&self, temp_path: &Path, bytes: &[u8]) -> Result<(), StorageError> {
        let mut file = File::create(temp_path).await?;
        file.write_all(bytes).await?;
        file.flush().await?;

        if self.durable_writes {
            file.sync_all().await?;
        }

        Ok(())
    }

    async fn sync_root(&self) -> Result<(), StorageError> {
        let dir = File::open(self.path_builder.root()).await?;
        dir.sync_all().await?;
        Ok(())
    }
}

#[async_trait]
impl ImageStore for LocalFilesystemStore {
    async fn put(&self, bytes: &[u8], media_type: MediaType) -> Result<ImageId, StorageError> {
        let id = ContentHasher::image_id(bytes);
        let final_path = self.path_builder.final_path(&id, media_type);

        // Same content, same name: nothing to do
        if fs::metadata(&final_path).await.is_ok() {
            debug!("Image already stored (deduplication): {}", id);
            return Ok(id);
        }

        // 1. Write to a unique temp file
        let temp_path = self.path_builder.temp_path(Uuid::new_v4());
        debug!("Writing image to temp file: {:?}", temp_path);
        if let Err(e) = self.write_temp(&temp_path, bytes).await {
            warn!("Failed to write image to temp file {:?}: {}", temp_path, e);
            let _ = fs::remove_file(&temp_path).await;
            return Err(e);
        }

        // 2. Atomic rename into place. A concurrent writer of the same content
        // may win the race; it wrote identical bytes, so replacing is harmless.
        debug!("Moving image to final location: {:?}", final_path);
        if let Err(e) = fs::rename(&temp_path, &final_path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(StorageError::Io(e));
        }

        // The rename is only durable once the directory entry is synced
        if self.durable_writes {
            if let Err(e) = self.sync_root().await {
                warn!("Failed to sync image directory after rename: {}", e);
                return Err(e);
            }
        }

        Ok(id)
    }

    async fn get(&self, id: &ImageId) -> Result<Vec<u8>, StorageError> {
        for path in self.path_builder.candidate_paths(id) {
            match fs::read(&path).await {
                Ok(bytes) => return Ok(bytes),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
                Err(e) => return Err(StorageError::Io(e)),
            }
        }

        Err(StorageError::NotFound(id.to_string()))
    }

    async fn exists(&self, id: &ImageId) -> Result<bool, StorageError> {
        for path in self.path_builder.candidate_paths(id) {
            if fs::try_exists(&path).await? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn backend_name(&self) -> &'static str {
        "local"
    }
}
