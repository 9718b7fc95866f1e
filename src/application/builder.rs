use std::sync::Arc;

use tracing::info;

use crate::api::router::AppState;
use crate::application::context::ImageContext;
use crate::application::ports::{ImageStore, StorageError};
use crate::application::use_cases::{IngestImageUseCase, RetrieveImageUseCase};
use crate::config::{Config, StorageBackend};
use crate::infrastructure::storage::{LocalFilesystemStore, ObjectStore, S3Settings};

/// Application builder for clean dependency injection and setup
pub struct ApplicationBuilder {
    config: Config,
    store: Option<Arc<dyn ImageStore>>,
}

impl ApplicationBuilder {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            store: None,
        }
    }

    /// Use an already constructed store instead of the configured backend
    pub fn with_store(mut self, store: Arc<dyn ImageStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Initialize the configured storage backend
    pub async fn with_storage(mut self) -> Result<Self, StorageError> {
        let store: Arc<dyn ImageStore> = match self.config.storage_backend {
            StorageBackend::Local => {
                let store = LocalFilesystemStore::with_durability(
                    self.config.image_dir.clone(),
                    self.config.durable_writes,
                );
                store.init().await?;
                info!(
                    image_dir = %self.config.image_dir.display(),
                    durable_writes = self.config.durable_writes,
                    "Local image store initialized"
                );
                Arc::new(store)
            }
            StorageBackend::S3 => {
                let settings = S3Settings {
                    bucket: self.config.s3_bucket.clone(),
                    region: self.config.s3_region.clone(),
                    endpoint: self.config.s3_endpoint.clone(),
                    access_key_id: self.config.aws_access_key.clone(),
                    secret_access_key: self.config.aws_secret_key.clone(),
                };
                let store = ObjectStore::s3(&settings, self.config.s3_prefix.clone())?;
                info!(
                    bucket = %settings.bucket,
                    region = %settings.region,
                    "S3 image store initialized"
                );
                Arc::new(store)
            }
        };

        self.store = Some(store);
        Ok(self)
    }

    /// Build the HTTP application state
    pub fn build(self) -> Result<AppState, StorageError> {
        let store = self
            .store
            .ok_or_else(|| StorageError::Unavailable("Image store not initialized".to_string()))?;

        let context = ImageContext::new(store);

        Ok(AppState {
            ingest_use_case: Arc::new(IngestImageUseCase::new(&context)),
            retrieve_use_case: Arc::new(RetrieveImageUseCase::new(&context)),
            storage_backend: context.store.backend_name(),
            static_dir: self.config.static_dir,
            max_upload_bytes: self.config.max_upload_bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_build_without_store_fails() {
        let result = ApplicationBuilder::new(Config::default()).build();
        assert!(matches!(result, Err(StorageError::Unavailable(_))));
    }

    #[tokio::test]
    async fn test_with_storage_local_creates_image_dir() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config {
            image_dir: temp_dir.path().join("img"),
            ..Config::default()
        };

        let state = ApplicationBuilder::new(config)
            .with_storage()
            .await
            .unwrap()
            .build()
            .unwrap();

        assert!(temp_dir.path().join("img").is_dir());
        assert_eq!(state.storage_backend, "local");
    }

    #[tokio::test]
    async fn test_with_store_overrides_backend() {
        let store: Arc<dyn ImageStore> = Arc::new(ObjectStore::memory().unwrap());

        let state = ApplicationBuilder::new(Config::default())
            .with_store(store)
            .build()
            .unwrap();

        assert_eq!(state.storage_backend, "memory");
    }
}
