//! Property-based tests using proptest
//!
//! These tests generate many random inputs to check the sniffer and the
//! stores behave the same for every payload, not just the hand-picked ones.

use proptest::prelude::*;
use std::collections::HashSet;
use tokio::runtime::Runtime;

use imgor::domain::errors::DomainError;
use imgor::infrastructure::storage::{ContentHasher, ObjectStore};
use imgor::ports::ImageStore;
use imgor::sniffer::{classify, sniff};
use imgor::value_objects::{ImageId, MediaType, IMAGE_ID_LEN};

const PNG_MAGIC: &[u8] = &[0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a];

/// Strategy for generating payloads carrying a known signature
fn supported_image_strategy() -> impl Strategy<Value = (Vec<u8>, MediaType)> {
    let header = prop_oneof![
        Just((vec![0xff, 0xd8], MediaType::Jpeg)),
        Just((PNG_MAGIC.to_vec(), MediaType::Png)),
        Just((b"GIF87a".to_vec(), MediaType::Gif)),
        Just((b"GIF89a".to_vec(), MediaType::Gif)),
    ];

    (header, prop::collection::vec(any::<u8>(), 0..512)).prop_map(|((mut bytes, media_type), tail)| {
        bytes.extend(tail);
        (bytes, media_type)
    })
}

/// Strategy for generating payloads that start with no known signature
fn unsupported_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..64).prop_filter("must not carry a signature", |b| {
        !(b.starts_with(&[0xff, 0xd8])
            || b.starts_with(PNG_MAGIC)
            || b.starts_with(b"GIF87a")
            || b.starts_with(b"GIF89a"))
    })
}

proptest! {
    /// classify is a pure function of its input
    #[test]
    fn classify_is_deterministic(bytes in prop::collection::vec(any::<u8>(), 0..128)) {
        prop_assert_eq!(classify(&bytes), classify(&bytes));
    }

    /// Supported payloads map to the expected type, and MIME and extension agree
    #[test]
    fn supported_payloads_classify_consistently((bytes, expected) in supported_image_strategy()) {
        let media_type = sniff(&bytes).unwrap();
        prop_assert_eq!(media_type, expected);

        let (mime, ext) = classify(&bytes).unwrap();
        prop_assert_eq!(mime, expected.mime_type());
        prop_assert_eq!(ext, expected.extension());
        prop_assert_eq!(MediaType::from_extension(ext).unwrap(), media_type);
        prop_assert_eq!(mime.parse::<MediaType>().unwrap(), media_type);
    }

    /// Everything else is rejected without panicking, including short input
    #[test]
    fn unsupported_payloads_are_rejected(bytes in unsupported_strategy()) {
        prop_assert_eq!(sniff(&bytes), Err(DomainError::UnsupportedContentType));
    }

    /// Every prefix of a PNG signature shorter than the full magic is rejected
    #[test]
    fn truncated_png_signature_is_rejected(len in 0usize..8) {
        prop_assert!(sniff(&PNG_MAGIC[..len]).is_err());
    }

    /// Identifiers are fixed-length lowercase hex and parse back to themselves
    #[test]
    fn image_id_shape(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
        let id = ContentHasher::image_id(&bytes);
        prop_assert_eq!(id.as_hex().len(), IMAGE_ID_LEN);
        prop_assert!(id.as_hex().chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
        prop_assert_eq!(id.as_hex().parse::<ImageId>().unwrap(), id);
    }

    /// Identical content always yields the same identifier
    #[test]
    fn image_id_is_deterministic(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
        prop_assert_eq!(ContentHasher::image_id(&bytes), ContentHasher::image_id(&bytes));
    }

    /// get(put(b)) == b, and put is idempotent
    #[test]
    fn store_round_trip((bytes, media_type) in supported_image_strategy()) {
        let rt = Runtime::new().unwrap();
        rt.block_on(async {
            let store = ObjectStore::memory().unwrap();

            let id1 = store.put(&bytes, media_type).await.unwrap();
            let id2 = store.put(&bytes, media_type).await.unwrap();
            prop_assert_eq!(&id1, &id2);

            let fetched = store.get(&id1).await.unwrap();
            prop_assert_eq!(fetched, bytes.clone());
            Ok::<(), TestCaseError>(())
        })?;
    }
}

#[test]
fn distinct_payloads_get_distinct_ids() {
    let ids: HashSet<String> = (0u32..2048)
        .map(|i| {
            let mut bytes = PNG_MAGIC.to_vec();
            bytes.extend_from_slice(&i.to_le_bytes());
            ContentHasher::image_id(&bytes).as_hex().to_string()
        })
        .collect();

    assert_eq!(ids.len(), 2048);
}
