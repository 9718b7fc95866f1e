use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Image formats accepted for hosting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Jpeg,
    Png,
    Gif,
}

impl MediaType {
    pub const ALL: [MediaType; 3] = [MediaType::Jpeg, MediaType::Png, MediaType::Gif];

    /// MIME string sent as `Content-Type`
    pub fn mime_type(self) -> &'static str {
        match self {
            MediaType::Jpeg => "image/jpeg",
            MediaType::Png => "image/png",
            MediaType::Gif => "image/gif",
        }
    }

    /// Canonical file extension, without the leading dot
    pub fn extension(self) -> &'static str {
        match self {
            MediaType::Jpeg => "jpg",
            MediaType::Png => "png",
            MediaType::Gif => "gif",
        }
    }

    /// Look up by file extension. `jpeg` is accepted as an alias of `jpg`.
    pub fn from_extension(ext: &str) -> Result<Self, DomainError> {
        match ext.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Ok(MediaType::Jpeg),
            "png" => Ok(MediaType::Png),
            "gif" => Ok(MediaType::Gif),
            _ => Err(DomainError::UnknownMediaType(ext.to_string())),
        }
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mime_type())
    }
}

impl std::str::FromStr for MediaType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MediaType::ALL
            .into_iter()
            .find(|media_type| media_type.mime_type().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::UnknownMediaType(s.to_string()))
    }
}
