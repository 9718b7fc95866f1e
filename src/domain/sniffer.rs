//! Signature-based content sniffing.
//!
//! The media type of an upload is decided from its leading bytes only.
//! Client-supplied `Content-Type` headers and file extensions are never
//! consulted.

use crate::domain::errors::DomainError;
use crate::domain::value_objects::MediaType;

/// A byte-prefix signature identifying one media type
struct Signature {
    magic: &'static [u8],
    media_type: MediaType,
}

// Signatures are disjoint, so order only affects lookup cost.
const SIGNATURES: &[Signature] = &[
    Signature {
        magic: &[0xff, 0xd8],
        media_type: MediaType::Jpeg,
    },
    Signature {
        magic: &[0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a],
        media_type: MediaType::Png,
    },
    Signature {
        magic: b"GIF87a",
        media_type: MediaType::Gif,
    },
    Signature {
        magic: b"GIF89a",
        media_type: MediaType::Gif,
    },
];

/// Length of the shortest known signature. Anything shorter can never match.
pub const MIN_SIGNATURE_LEN: usize = 2;

/// Determine the media type of `bytes` from its leading signature.
///
/// Inputs shorter than a signature simply fail to match it.
pub fn sniff(bytes: &[u8]) -> Result<MediaType, DomainError> {
    if bytes.len() < MIN_SIGNATURE_LEN {
        return Err(DomainError::UnsupportedContentType);
    }

    SIGNATURES
        .iter()
        .find(|signature| bytes.starts_with(signature.magic))
        .map(|signature| signature.media_type)
        .ok_or(DomainError::UnsupportedContentType)
}

/// Sniff and return `(mime_type, extension)`
pub fn classify(bytes: &[u8]) -> Result<(&'static str, &'static str), DomainError> {
    let media_type = sniff(bytes)?;
    Ok((media_type.mime_type(), media_type.extension()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: [u8; 8] = [0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a];

    #[test]
    fn test_min_signature_len_matches_table() {
        let shortest = SIGNATURES.iter().map(|s| s.magic.len()).min().unwrap();
        assert_eq!(shortest, MIN_SIGNATURE_LEN);
    }

    #[test]
    fn test_sniff_jpeg() {
        assert_eq!(sniff(&[0xff, 0xd8]).unwrap(), MediaType::Jpeg);
        assert_eq!(sniff(&[0xff, 0xd8, 0xff, 0xe0, 0x00]).unwrap(), MediaType::Jpeg);
    }

    #[test]
    fn test_sniff_png() {
        let mut bytes = PNG_MAGIC.to_vec();
        bytes.extend_from_slice(b"\x00\x00\x00\rIHDR");
        assert_eq!(sniff(&bytes).unwrap(), MediaType::Png);
        assert_eq!(classify(&bytes).unwrap(), ("image/png", "png"));
    }

    #[test]
    fn test_sniff_gif_both_versions() {
        assert_eq!(sniff(b"GIF87a\x01\x00").unwrap(), MediaType::Gif);
        assert_eq!(sniff(b"GIF89a\x01\x00").unwrap(), MediaType::Gif);
        assert!(sniff(b"GIF88a\x01\x00").is_err());
    }

    #[test]
    fn test_sniff_rejects_empty_and_short_input() {
        assert_eq!(sniff(&[]), Err(DomainError::UnsupportedContentType));
        assert_eq!(sniff(&[0xff]), Err(DomainError::UnsupportedContentType));
        // Truncated PNG and GIF headers must not match or panic
        assert_eq!(sniff(&PNG_MAGIC[..5]), Err(DomainError::UnsupportedContentType));
        assert_eq!(sniff(b"GIF8"), Err(DomainError::UnsupportedContentType));
    }

    #[test]
    fn test_sniff_rejects_text() {
        assert_eq!(
            sniff(b"not an image"),
            Err(DomainError::UnsupportedContentType)
        );
        assert!(classify(b"<html></html>").is_err());
    }

    #[test]
    fn test_sniff_ignores_trailing_data() {
        let mut bytes = vec![0xff, 0xd8];
        bytes.extend(std::iter::repeat(0x42).take(4096));
        assert_eq!(sniff(&bytes).unwrap(), MediaType::Jpeg);
    }
}
