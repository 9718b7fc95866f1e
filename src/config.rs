use std::path::PathBuf;
use thiserror::Error;

const MIN_UPLOAD_BYTES: usize = 1024;
const MAX_UPLOAD_BYTES: usize = 100 * 1024 * 1024;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("LISTEN_ADDR cannot be empty")]
    EmptyListenAddr,

    #[error("Invalid storage backend: {0} (expected local or s3)")]
    InvalidBackend(String),

    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },

    #[error("MAX_UPLOAD_BYTES must be between {min} and {max}, got {actual}")]
    UploadLimitOutOfRange {
        min: usize,
        max: usize,
        actual: usize,
    },

    #[error("S3_BUCKET cannot be empty when STORAGE_BACKEND=s3")]
    EmptyBucket,

    #[error("AWS_ACCESS_KEY and AWS_SECRET_KEY must be set together")]
    PartialCredentials,
}

/// Where images are persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackend {
    /// Files in a local directory
    #[default]
    Local,
    /// Objects in an S3-compatible bucket
    S3,
}

impl std::fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackend::Local => write!(f, "local"),
            StorageBackend::S3 => write!(f, "s3"),
        }
    }
}

impl std::str::FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(StorageBackend::Local),
            "s3" => Ok(StorageBackend::S3),
            _ => Err(ConfigError::InvalidBackend(s.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub storage_backend: StorageBackend,
    pub image_dir: PathBuf,
    pub static_dir: PathBuf,
    pub durable_writes: bool,
    pub max_upload_bytes: usize,
    // Remote backend settings
    pub s3_bucket: String,
    pub s3_region: String,
    pub s3_endpoint: Option<String>,
    pub s3_prefix: String,
    pub aws_access_key: Option<String>,
    pub aws_secret_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".to_string(),
            storage_backend: StorageBackend::Local,
            image_dir: PathBuf::from("./img"),
            static_dir: PathBuf::from("./static"),
            durable_writes: true,
            max_upload_bytes: 10 * 1024 * 1024,
            s3_bucket: "imgor".to_string(),
            s3_region: "us-east-1".to_string(),
            s3_endpoint: None,
            s3_prefix: String::new(),
            aws_access_key: None,
            aws_secret_key: None,
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parse_value<T: std::str::FromStr>(name: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        name,
        value: raw.to_string(),
    })
}

impl Config {
    /// Load from environment, falling back to defaults for unset values.
    ///
    /// Unparseable values are reported rather than defaulted.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let storage_backend = match non_empty_var("STORAGE_BACKEND") {
            Some(s) => s.parse()?,
            None => defaults.storage_backend,
        };

        Ok(Self {
            listen_addr: std::env::var("LISTEN_ADDR").unwrap_or(defaults.listen_addr),
            storage_backend,
            image_dir: std::env::var("IMAGE_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.image_dir),
            static_dir: std::env::var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            durable_writes: non_empty_var("DURABLE_WRITES")
                .map(|s| parse_value("DURABLE_WRITES", &s))
                .transpose()?
                .unwrap_or(defaults.durable_writes),
            max_upload_bytes: non_empty_var("MAX_UPLOAD_BYTES")
                .map(|s| parse_value("MAX_UPLOAD_BYTES", &s))
                .transpose()?
                .unwrap_or(defaults.max_upload_bytes),
            s3_bucket: std::env::var("S3_BUCKET").unwrap_or(defaults.s3_bucket),
            s3_region: std::env::var("S3_REGION").unwrap_or(defaults.s3_region),
            s3_endpoint: non_empty_var("S3_ENDPOINT"),
            s3_prefix: std::env::var("S3_PREFIX").unwrap_or(defaults.s3_prefix),
            aws_access_key: non_empty_var("AWS_ACCESS_KEY"),
            aws_secret_key: non_empty_var("AWS_SECRET_KEY"),
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.listen_addr.is_empty() {
            return Err(ConfigError::EmptyListenAddr);
        }

        if !(MIN_UPLOAD_BYTES..=MAX_UPLOAD_BYTES).contains(&self.max_upload_bytes) {
            return Err(ConfigError::UploadLimitOutOfRange {
                min: MIN_UPLOAD_BYTES,
                max: MAX_UPLOAD_BYTES,
                actual: self.max_upload_bytes,
            });
        }

        if self.storage_backend == StorageBackend::S3 {
            if self.s3_bucket.trim().is_empty() {
                return Err(ConfigError::EmptyBucket);
            }

            if self.aws_access_key.is_some() != self.aws_secret_key.is_some() {
                return Err(ConfigError::PartialCredentials);
            }
        }

        Ok(())
    }
}
