use sha2::{Digest, Sha256};

use crate::domain::value_objects::{ImageId, IMAGE_ID_BYTES};

/// Utility for deriving image identifiers from content.
///
/// The identifier is the first [`IMAGE_ID_BYTES`] bytes of the SHA-256
/// digest, hex encoded. The digest is computed over the whole payload, so
/// identical bytes always map to the same identifier regardless of backend.
pub struct ContentHasher;

impl ContentHasher {
    /// Compute the identifier for `bytes`
    pub fn image_id(bytes: &[u8]) -> ImageId {
        let digest = Sha256::digest(bytes);
        let mut prefix = [0u8; IMAGE_ID_BYTES];
        prefix.copy_from_slice(&digest[..IMAGE_ID_BYTES]);
        ImageId::from_digest_prefix(prefix)
    }
}
