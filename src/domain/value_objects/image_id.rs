use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Number of digest bytes kept for an image identifier.
///
/// Ten bytes keeps URLs short. Collisions are not detected: two different
/// images with the same truncated digest share one identifier.
pub const IMAGE_ID_BYTES: usize = 10;

/// Length of the hex-encoded identifier.
pub const IMAGE_ID_LEN: usize = IMAGE_ID_BYTES * 2;

/// Content-derived image identifier (10 digest bytes = 20 lowercase hex chars)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageId(String);

impl ImageId {
    /// Create from validated hex string
    pub fn from_hex(hex: impl Into<String>) -> Result<Self, DomainError> {
        let hex = hex.into();
        if hex.len() != IMAGE_ID_LEN || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(DomainError::InvalidImageId(hex));
        }

        Ok(Self(hex.to_ascii_lowercase()))
    }

    /// Build from the leading bytes of a content digest
    pub fn from_digest_prefix(prefix: [u8; IMAGE_ID_BYTES]) -> Self {
        Self(hex::encode(prefix))
    }

    /// Get hex string representation
    pub fn as_hex(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ImageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ImageId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl AsRef<str> for ImageId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
